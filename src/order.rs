//! Priority-order plumbing
//!
//! A queue is ordered by a single `fn(&T, &T) -> bool` predicate answering
//! "must `a` dequeue before `b`". Plain `fn` pointers (rather than boxed
//! closures) keep the predicate `Copy` and identity-comparable, which queue
//! equality relies on.
//!
//! [`Builder`] resolves the predicate from two possible sources: one of the
//! canonical `Ord`-derived orders ([`max_priority`] / [`min_priority`]) or an
//! explicit comparator. Supplying neither, or both with different functions,
//! is a configuration error.

use crate::error::QueueError;
use crate::queue::FibPriorityQueue;

/// Priority predicate: `true` iff `a` must dequeue before `b`
pub type CmpFn<T> = fn(&T, &T) -> bool;

/// Canonical max-first order for `Ord` types
pub fn max_priority<T: Ord>(a: &T, b: &T) -> bool {
    a > b
}

/// Canonical min-first order for `Ord` types
pub fn min_priority<T: Ord>(a: &T, b: &T) -> bool {
    a < b
}

/// Fallible queue construction
///
/// # Example
///
/// ```rust
/// use fib_priority_queue::{FibPriorityQueue, QueueError};
///
/// let queue: Result<FibPriorityQueue<u32>, _> = FibPriorityQueue::builder().build();
/// assert!(matches!(queue, Err(QueueError::Configuration(_))));
///
/// let queue = FibPriorityQueue::builder()
///     .comparator(|a: &u32, b: &u32| a > b)
///     .build()
///     .unwrap();
/// assert!(queue.is_empty());
/// ```
#[derive(Debug)]
pub struct Builder<T> {
    canonical: Option<CmpFn<T>>,
    supplied: Option<CmpFn<T>>,
}

impl<T> Builder<T> {
    pub(crate) fn new() -> Self {
        Self {
            canonical: None,
            supplied: None,
        }
    }

    /// Supplies an explicit priority comparator
    pub fn comparator(mut self, is_higher_priority: CmpFn<T>) -> Self {
        self.supplied = Some(is_higher_priority);
        self
    }

    /// Builds an empty queue
    ///
    /// # Errors
    /// [`QueueError::Configuration`] if no comparator was supplied, or if a
    /// canonical order and an explicit comparator were both supplied and are
    /// not the same function.
    pub fn build(self) -> Result<FibPriorityQueue<T>, QueueError> {
        Ok(FibPriorityQueue::new(self.resolve()?))
    }

    /// Builds a queue pre-filled from `items`
    ///
    /// Every element is enqueued, then one consolidation pass runs, and the
    /// modification count is left at zero, exactly as if the queue had been
    /// born with this content.
    ///
    /// # Errors
    /// Same as [`Builder::build`].
    pub fn build_from<I>(self, items: I) -> Result<FibPriorityQueue<T>, QueueError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut queue = FibPriorityQueue::new(self.resolve()?);
        queue.enqueue_all(items);
        queue.consolidate();
        queue.reset_mod_count();
        Ok(queue)
    }

    fn resolve(self) -> Result<CmpFn<T>, QueueError> {
        match (self.canonical, self.supplied) {
            (None, None) => Err(QueueError::Configuration("no priority comparator supplied")),
            (Some(canonical), Some(supplied)) if !std::ptr::fn_addr_eq(canonical, supplied) => {
                Err(QueueError::Configuration(
                    "canonical order and explicit comparator disagree",
                ))
            }
            (Some(canonical), _) => Ok(canonical),
            (None, Some(supplied)) => Ok(supplied),
        }
    }
}

impl<T: Ord> Builder<T> {
    /// Selects the canonical max-first order
    pub fn max_order(mut self) -> Self {
        self.canonical = Some(max_priority::<T>);
        self
    }

    /// Selects the canonical min-first order
    pub fn min_order(mut self) -> Self {
        self.canonical = Some(min_priority::<T>);
        self
    }
}
