//! Property-based tests using proptest
//!
//! Random workloads are checked against `std::collections::BinaryHeap` as a
//! model, and the structural guarantees (extraction order, rank bound after
//! consolidation, deep-copy isolation) are verified on arbitrary inputs.

use std::collections::BinaryHeap;

use proptest::prelude::*;

use fib_priority_queue::FibPriorityQueue;

fn drain(queue: &mut FibPriorityQueue<i32>) -> Vec<i32> {
    let mut out = Vec::with_capacity(queue.len());
    while let Ok(value) = queue.dequeue() {
        out.push(value);
    }
    out
}

proptest! {
    #[test]
    fn extraction_matches_sorted_oracle(values in prop::collection::vec(any::<i32>(), 0..200)) {
        let mut queue = FibPriorityQueue::max_queue();
        for &value in &values {
            queue.enqueue(value);
        }
        let drained = drain(&mut queue);

        let mut expected = values;
        expected.sort_unstable_by(|a, b| b.cmp(a));
        prop_assert_eq!(drained, expected);
    }

    #[test]
    fn interleaved_ops_match_binary_heap(
        ops in prop::collection::vec((any::<bool>(), -1000i32..1000), 1..300)
    ) {
        let mut queue = FibPriorityQueue::max_queue();
        let mut model = BinaryHeap::new();

        for (pop, value) in ops {
            if pop && !model.is_empty() {
                prop_assert_eq!(queue.dequeue().ok(), model.pop());
            } else {
                queue.enqueue(value);
                model.push(value);
            }
            prop_assert_eq!(queue.len(), model.len());
            prop_assert_eq!(queue.is_empty(), model.is_empty());
            if let Some(top) = model.peek() {
                prop_assert_eq!(queue.peek(), Ok(top));
            }
        }
    }

    #[test]
    fn rank_bound_holds_after_every_dequeue(values in prop::collection::vec(any::<i32>(), 2..300)) {
        let mut queue = FibPriorityQueue::max_queue();
        queue.enqueue_all(values);
        while queue.dequeue().is_ok() {
            if queue.is_empty() {
                prop_assert_eq!(queue.root_count(), 0);
            } else {
                let bound = queue.len().ilog2() as usize + 1;
                prop_assert!(
                    queue.root_count() <= bound,
                    "{} roots for {} elements",
                    queue.root_count(),
                    queue.len()
                );
            }
        }
    }

    #[test]
    fn clone_equals_original_and_is_isolated(values in prop::collection::vec(any::<i32>(), 0..100)) {
        let mut queue = FibPriorityQueue::max_queue();
        queue.enqueue_all(values);
        // Shape the forest a little before copying.
        if queue.len() > 1 {
            let top = queue.dequeue().unwrap();
            queue.enqueue(top);
        }

        let mut copy = queue.clone();
        prop_assert_eq!(&copy, &queue);

        let original_len = queue.len();
        drain(&mut copy);
        prop_assert_eq!(queue.len(), original_len);
        prop_assert!(copy.is_empty());
    }

    #[test]
    fn min_and_max_orders_mirror_each_other(values in prop::collection::vec(any::<i32>(), 0..100)) {
        let mut max_queue = FibPriorityQueue::max_queue();
        let mut min_queue = FibPriorityQueue::min_queue();
        for &value in &values {
            max_queue.enqueue(value);
            min_queue.enqueue(value);
        }
        let mut from_max = drain(&mut max_queue);
        let from_min = drain(&mut min_queue);
        from_max.reverse();
        prop_assert_eq!(from_max, from_min);
    }

    #[test]
    fn snapshot_iteration_agrees_with_dequeue(values in prop::collection::vec(any::<i32>(), 0..100)) {
        let mut queue = FibPriorityQueue::max_queue();
        queue.enqueue_all(values);

        let via_iter: Result<Vec<_>, _> = queue.iter().collect();
        let via_dequeue = drain(&mut queue);
        prop_assert_eq!(via_iter.unwrap(), via_dequeue);
    }
}
