//! A Fibonacci-heap priority queue
//!
//! This crate provides [`FibPriorityQueue`], a priority queue backed by a
//! min-consolidated forest of heap-ordered multiway trees:
//!
//! - **O(1) amortized enqueue**: insertion only splices a singleton into the
//!   circular root list, deferring all merging.
//! - **O(log n) amortized dequeue**: extraction promotes the departing root's
//!   children and then consolidates equal-rank roots pairwise until every
//!   surviving root has a unique rank.
//! - **O(1) peek** at the extreme element.
//!
//! The dequeue-before direction is not baked in: the queue is constructed
//! with a caller-supplied predicate (`fn(&T, &T) -> bool`, "must `a` dequeue
//! before `b`"), with [`max_priority`]/[`min_priority`] as the canonical
//! orders for `Ord` types. There is no decrease-key; an element's priority is
//! fixed at enqueue time.
//!
//! Nodes are stored in generation-keyed arenas (`slotmap`), so tree and
//! root-list links are indices rather than pointers and the crate contains no
//! `unsafe`. Deep copy ([`Clone`]) and iteration
//! ([`iter`](FibPriorityQueue::iter), which drains a private deep copy) fall
//! out of the arena representation; iterators detect later mutation of their
//! source via a shared modification counter and fail fast instead of
//! yielding stale data.
//!
//! # Example
//!
//! ```rust
//! use fib_priority_queue::FibPriorityQueue;
//!
//! let mut queue = FibPriorityQueue::max_queue();
//! for value in [3, 1, 4, 1, 5, 9, 2, 6] {
//!     queue.enqueue(value);
//! }
//!
//! assert_eq!(queue.peek(), Ok(&9));
//!
//! let mut drained = Vec::new();
//! while let Ok(value) = queue.dequeue() {
//!     drained.push(value);
//! }
//! assert_eq!(drained, vec![9, 6, 5, 4, 3, 2, 1, 1]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod iter;
pub mod order;
pub mod queue;
mod render;

pub use error::QueueError;
pub use iter::SnapshotIter;
pub use order::{Builder, CmpFn, max_priority, min_priority};
pub use queue::FibPriorityQueue;
