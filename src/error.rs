//! Error types for queue and iterator operations
//!
//! Every failure is surfaced to the caller immediately; nothing is retried or
//! recovered internally. Mutating operations either complete fully or fail
//! before any state change is committed.

use thiserror::Error;

/// Error type for [`FibPriorityQueue`](crate::FibPriorityQueue) operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    /// Comparator resolution failed at construction: none was supplied, or a
    /// canonical order and an explicit comparator were both supplied and
    /// disagree
    #[error("queue configuration invalid: {0}")]
    Configuration(&'static str),

    /// `peek` or `dequeue` was called on an empty queue
    #[error("operation on an empty queue")]
    Empty,

    /// The source queue was structurally mutated after the iterator captured
    /// its modification count
    #[error("queue modified while iterator was active")]
    ConcurrentModification,

    /// Two iterators from different source queues were compared
    #[error("iterators originate from different queues")]
    CrossQueueIterators,

    /// A drained iterator was dereferenced
    #[error("iterator is exhausted")]
    IteratorExhausted,
}
