//! Debug rendering of the forest. Cosmetic only; nothing here is part of the
//! functional contract.

use std::fmt::{self, Write as _};

use crate::queue::{FibPriorityQueue, NodeKey};

impl<T: fmt::Debug> FibPriorityQueue<T> {
    /// Renders the forest as a directory-style tree, one line per node,
    /// roots in root-list order starting at `head`
    ///
    /// ```rust
    /// use fib_priority_queue::FibPriorityQueue;
    ///
    /// let mut queue = FibPriorityQueue::max_queue();
    /// queue.enqueue_all([7, 2]);
    /// let drawing = queue.render();
    /// assert!(drawing.starts_with("FibPriorityQueue (len=2)"));
    /// assert!(drawing.contains('7'));
    /// ```
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "FibPriorityQueue (len={})", self.len());
        let Some(head) = self.head else { return out };

        let mut root_nodes = Vec::with_capacity(self.root_count());
        let mut current = head;
        loop {
            root_nodes.push(self.roots[current].node);
            current = self.roots[current].next;
            if current == head {
                break;
            }
        }

        // Depth-first with an explicit worklist; a node's children always
        // print before its later siblings.
        let mut work: Vec<(NodeKey, String, bool)> = Vec::new();
        let root_count = root_nodes.len();
        for (index, &root) in root_nodes.iter().enumerate().rev() {
            work.push((root, String::new(), index + 1 == root_count));
        }
        while let Some((key, prefix, is_last)) = work.pop() {
            let tee = if is_last { "└─ " } else { "├─ " };
            let _ = writeln!(out, "{prefix}{tee}{:?}", self.nodes[key].value);

            let child_prefix = format!("{prefix}{}", if is_last { "   " } else { "│  " });
            let children: Vec<NodeKey> = self.nodes[key].children.iter().copied().collect();
            let child_count = children.len();
            for (index, &child) in children.iter().enumerate().rev() {
                work.push((child, child_prefix.clone(), index + 1 == child_count));
            }
        }
        out
    }
}

/// Prints the contents in priority order, highest-priority element last:
/// `pq[1,1,3,4]:highest`. Materialized by draining a private deep copy
/// through a stack, so the queue itself is untouched.
impl<T: Clone + fmt::Debug> fmt::Display for FibPriorityQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut drained = self.clone();
        let mut stack = Vec::with_capacity(drained.len());
        while let Ok(value) = drained.dequeue() {
            stack.push(value);
        }

        write!(f, "pq[")?;
        let mut first = true;
        while let Some(value) = stack.pop() {
            if !first {
                write!(f, ",")?;
            }
            write!(f, "{value:?}")?;
            first = false;
        }
        write!(f, "]:highest")
    }
}

#[cfg(test)]
mod tests {
    use crate::queue::FibPriorityQueue;

    #[test]
    fn display_lists_lowest_to_highest() {
        let mut queue = FibPriorityQueue::max_queue();
        queue.enqueue_all([3, 1, 2]);
        assert_eq!(queue.to_string(), "pq[1,2,3]:highest");
        // Rendering must not consume the queue.
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn display_of_empty_queue() {
        let queue: FibPriorityQueue<i32> = FibPriorityQueue::max_queue();
        assert_eq!(queue.to_string(), "pq[]:highest");
    }

    #[test]
    fn render_shows_every_node() {
        let mut queue = FibPriorityQueue::max_queue();
        queue.enqueue_all(0..8);
        queue.dequeue().unwrap(); // force some tree depth
        let drawing = queue.render();
        for value in 0..7 {
            assert!(drawing.contains(&value.to_string()), "missing {value}");
        }
    }
}
