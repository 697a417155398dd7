//! Consuming-clone iteration
//!
//! An iterator owns a private deep copy of its source queue and advances by
//! dequeuing from that copy, so elements arrive in dequeue order and the
//! source is never touched. Iterating a queue of n elements therefore costs
//! O(n log n), not O(n); acceptable while iteration stays rare.
//!
//! The iterator does not borrow the source. Instead it shares the source's
//! modification counter and captures its value at creation; every subsequent
//! operation first verifies the counter is unchanged and fails with
//! [`QueueError::ConcurrentModification`] otherwise. Only the legality check
//! is affected by later mutation of the source; the private copy itself is
//! immune.

use std::cell::Cell;
use std::rc::Rc;

use crate::error::QueueError;
use crate::queue::FibPriorityQueue;

/// Iterator over a private deep copy of a [`FibPriorityQueue`], yielding
/// elements in dequeue order
///
/// # Example
///
/// ```rust
/// use fib_priority_queue::FibPriorityQueue;
///
/// let mut queue = FibPriorityQueue::max_queue();
/// queue.enqueue_all([2, 9, 4]);
///
/// let drained: Result<Vec<_>, _> = queue.iter().collect();
/// assert_eq!(drained.unwrap(), vec![9, 4, 2]);
/// assert_eq!(queue.len(), 3); // source untouched
/// ```
pub struct SnapshotIter<T> {
    snapshot: FibPriorityQueue<T>,
    source_mods: Rc<Cell<u64>>,
    expected_mods: u64,
    done: bool,
}

impl<T: Clone> SnapshotIter<T> {
    pub(crate) fn new(source: &FibPriorityQueue<T>) -> Self {
        Self {
            snapshot: source.clone(),
            source_mods: Rc::clone(&source.mod_count),
            expected_mods: source.mod_count.get(),
            done: false,
        }
    }
}

impl<T> SnapshotIter<T> {
    /// Returns a reference to the element the iterator currently stands on
    ///
    /// # Errors
    /// [`QueueError::ConcurrentModification`] if the source queue has been
    /// mutated since this iterator was created;
    /// [`QueueError::IteratorExhausted`] if every element has been yielded.
    pub fn try_peek(&self) -> Result<&T, QueueError> {
        self.check_source_unchanged()?;
        self.snapshot
            .peek()
            .map_err(|_| QueueError::IteratorExhausted)
    }

    /// Elements not yet yielded
    pub fn remaining(&self) -> usize {
        self.snapshot.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.snapshot.is_empty()
    }

    /// Whether two iterators over the *same* source queue stand at the same
    /// position (equal numbers of elements remaining)
    ///
    /// # Errors
    /// [`QueueError::CrossQueueIterators`] if the iterators come from
    /// different queues; [`QueueError::ConcurrentModification`] if either
    /// iterator is stale.
    pub fn same_position(&self, other: &Self) -> Result<bool, QueueError> {
        if !Rc::ptr_eq(&self.source_mods, &other.source_mods) {
            return Err(QueueError::CrossQueueIterators);
        }
        self.check_source_unchanged()?;
        other.check_source_unchanged()?;
        Ok(self.remaining() == other.remaining())
    }

    fn check_source_unchanged(&self) -> Result<(), QueueError> {
        if self.source_mods.get() != self.expected_mods {
            Err(QueueError::ConcurrentModification)
        } else {
            Ok(())
        }
    }
}

impl<T> Iterator for SnapshotIter<T> {
    type Item = Result<T, QueueError>;

    /// Yields `Err(ConcurrentModification)` once (and then fuses) if the
    /// source queue was mutated after this iterator was created.
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if let Err(err) = self.check_source_unchanged() {
            self.done = true;
            return Some(Err(err));
        }
        match self.snapshot.dequeue() {
            Ok(value) => Some(Ok(value)),
            Err(_) => {
                self.done = true;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, Some(self.remaining() + 1))
        }
    }
}

impl<T> std::fmt::Debug for SnapshotIter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnapshotIter")
            .field("remaining", &self.remaining())
            .field("expected_mods", &self.expected_mods)
            .field("done", &self.done)
            .finish()
    }
}
