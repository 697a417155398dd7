//! Fibonacci-heap priority queue
//!
//! The queue is a forest of heap-ordered multiway trees. Current tree roots
//! sit in a circular doubly linked root list; `head` always points at the
//! extreme root under the caller's priority order. Insertion splices a fresh
//! singleton into the root list without any merging, which is what makes it
//! O(1) amortized; extraction promotes the departing root's children into the
//! root list and then consolidates, pairwise-merging equal-rank roots until
//! every surviving root has a unique rank. That rank discipline keeps the
//! root count logarithmic in the element count, so extraction is O(log n)
//! amortized.
//!
//! Nodes live in generation-keyed arena maps ([`slotmap::SlotMap`]) rather
//! than behind raw pointers: root-list `prev`/`next` links and parent→child
//! edges are plain keys, and removing a cell during consolidation invalidates
//! its key instead of leaving anything dangling. A side effect worth having:
//! deep copy is a whole-arena clone, and teardown is a whole-arena drop, with
//! no recursion over the trees at all.
//!
//! There is no decrease-key and therefore no node marking or cascading cut;
//! no operation ever lowers an already-enqueued element's priority in place.
//! Every tree in the forest is consequently a plain binomial tree.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashSet;
use slotmap::{SlotMap, new_key_type};
use smallvec::SmallVec;

use crate::error::QueueError;
use crate::iter::SnapshotIter;
use crate::order::{Builder, CmpFn, max_priority, min_priority};

new_key_type! {
    /// Arena key of a payload-bearing tree node
    pub(crate) struct NodeKey;

    /// Arena key of a root-list cell
    pub(crate) struct RootKey;
}

/// One payload-bearing tree node. Its rank is its direct child count.
#[derive(Clone)]
pub(crate) struct HeapNode<T> {
    pub(crate) value: T,
    pub(crate) children: FxHashSet<NodeKey>,
}

impl<T> HeapNode<T> {
    fn singleton(value: T) -> Self {
        Self {
            value,
            children: FxHashSet::default(),
        }
    }

    pub(crate) fn rank(&self) -> usize {
        self.children.len()
    }
}

/// Root-list cell wrapping one tree root. The list is always circular; a
/// singleton cell links to itself.
#[derive(Clone, Copy)]
pub(crate) struct RootCell {
    pub(crate) node: NodeKey,
    pub(crate) prev: RootKey,
    pub(crate) next: RootKey,
}

/// A priority queue backed by a Fibonacci heap
///
/// The dequeue-before order is fixed at construction by a
/// [`CmpFn`](crate::CmpFn) predicate; `max_queue`/`min_queue` cover the
/// common `Ord` cases.
///
/// # Example
///
/// ```rust
/// use fib_priority_queue::FibPriorityQueue;
///
/// let mut queue = FibPriorityQueue::max_queue();
/// for value in [3, 1, 4, 1, 5, 9, 2, 6] {
///     queue.enqueue(value);
/// }
///
/// assert_eq!(queue.len(), 8);
/// assert_eq!(queue.peek(), Ok(&9));
/// assert_eq!(queue.dequeue(), Ok(9));
/// assert_eq!(queue.dequeue(), Ok(6));
/// ```
pub struct FibPriorityQueue<T> {
    pub(crate) nodes: SlotMap<NodeKey, HeapNode<T>>,
    pub(crate) roots: SlotMap<RootKey, RootCell>,
    pub(crate) head: Option<RootKey>,
    /// Bumped on every structural mutation; shared with iterators so a
    /// detached iterator can observe later mutation of this queue.
    pub(crate) mod_count: Rc<Cell<u64>>,
    pub(crate) is_higher_priority: CmpFn<T>,
}

impl<T> FibPriorityQueue<T> {
    /// Creates an empty queue ordered by `is_higher_priority`, which must
    /// answer "must `a` dequeue before `b`"
    pub fn new(is_higher_priority: CmpFn<T>) -> Self {
        Self {
            nodes: SlotMap::with_key(),
            roots: SlotMap::with_key(),
            head: None,
            mod_count: Rc::new(Cell::new(0)),
            is_higher_priority,
        }
    }

    /// Starts fallible construction; see [`Builder`]
    pub fn builder() -> Builder<T> {
        Builder::new()
    }

    /// Number of elements currently held
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Number of trees currently in the root list
    ///
    /// Immediately after a dequeue this is at most `⌊log2(len)⌋ + 1`, since
    /// consolidation leaves at most one root per rank.
    pub fn root_count(&self) -> usize {
        self.roots.len()
    }

    /// The priority predicate this queue was constructed with
    pub fn comparator(&self) -> CmpFn<T> {
        self.is_higher_priority
    }

    /// Returns a reference to the extreme element without removing it
    ///
    /// # Errors
    /// [`QueueError::Empty`] if the queue holds no elements.
    pub fn peek(&self) -> Result<&T, QueueError> {
        let head = self.head.ok_or(QueueError::Empty)?;
        Ok(&self.nodes[self.roots[head].node].value)
    }

    /// Inserts `value`, returning the number of elements added (always 1)
    ///
    /// The new element becomes a fresh singleton root spliced next to `head`;
    /// no merging happens here, so the call is O(1).
    pub fn enqueue(&mut self, value: T) -> usize {
        let node = self.nodes.insert(HeapNode::singleton(value));
        let cell = self.push_root(node);
        if let Some(head) = self.head {
            if head != cell && self.higher(node, self.roots[head].node) {
                self.head = Some(cell);
            }
        }
        self.bump_mod();
        1
    }

    /// Enqueues every element of `items`, returning how many were added
    pub fn enqueue_all<I>(&mut self, items: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        items.into_iter().map(|value| self.enqueue(value)).sum()
    }

    /// Removes and returns the extreme element
    ///
    /// Promotes the departing root's children into the root list, discards
    /// the old root, then consolidates. O(log n) amortized.
    ///
    /// # Errors
    /// [`QueueError::Empty`] if the queue holds no elements.
    pub fn dequeue(&mut self) -> Result<T, QueueError> {
        let head = self.head.ok_or(QueueError::Empty)?;
        let head_node = self.roots[head].node;

        // Promote the children: each keeps its own subtree and rank.
        let children: SmallVec<[NodeKey; 8]> = self.nodes[head_node].children.drain().collect();
        for child in children {
            self.push_root(child);
        }

        let cell = self.unlink_root(head);
        self.head = if self.roots.is_empty() {
            None
        } else {
            Some(cell.next)
        };

        let node = self
            .nodes
            .remove(head_node)
            .expect("dequeued root's node is in the arena");

        self.consolidate();
        self.bump_mod();
        Ok(node.value)
    }

    /// Drops the entire forest and resets the queue to its freshly
    /// constructed state (modification count included)
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.roots.clear();
        self.head = None;
        self.mod_count.set(0);
    }

    /// Merges equal-rank roots pairwise until every surviving root has a
    /// unique rank, and relocates `head` to the surviving extreme.
    ///
    /// The walk visits each cell of the original root list exactly once: the
    /// iteration count is fixed up front and each cell's successor is read
    /// before any merging can remove cells. Merging only ever removes the
    /// cell currently being processed or one already parked in the rank
    /// table, never an unvisited one, so no captured successor goes stale.
    pub(crate) fn consolidate(&mut self) {
        let Some(start) = self.head else { return };

        let table_len = self.nodes.len().ilog2() as usize + 2;
        let mut by_rank: Vec<Option<RootKey>> = vec![None; table_len];

        let mut candidate = start;
        let mut current = start;
        for _ in 0..self.roots.len() {
            let next = self.roots[current].next;

            let mut survivor = current;
            let mut rank = self.nodes[self.roots[survivor].node].rank();
            loop {
                if rank >= by_rank.len() {
                    by_rank.resize(rank + 1, None);
                }
                let Some(other) = by_rank[rank] else { break };

                // Lower-priority root becomes a child of the higher-priority
                // one; its cell leaves the root list, its node survives.
                let survivor_node = self.roots[survivor].node;
                let other_node = self.roots[other].node;
                let (winner, loser) = if self.higher(other_node, survivor_node) {
                    (other, survivor)
                } else {
                    (survivor, other)
                };
                let loser_cell = self.unlink_root(loser);
                let winner_node = self.roots[winner].node;
                self.nodes[winner_node].children.insert(loser_cell.node);
                if candidate == loser {
                    candidate = winner;
                }

                by_rank[rank] = None;
                survivor = winner;
                rank += 1;
            }
            by_rank[rank] = Some(survivor);

            if survivor != candidate {
                let survivor_node = self.roots[survivor].node;
                let candidate_node = self.roots[candidate].node;
                if !self.higher(candidate_node, survivor_node) {
                    candidate = survivor;
                }
            }

            current = next;
        }

        self.head = Some(candidate);
    }

    /// Wraps `node` in a fresh cell spliced next to `head` (or as the sole
    /// cell of a new list). Does not move `head`.
    fn push_root(&mut self, node: NodeKey) -> RootKey {
        let cell = self.roots.insert_with_key(|key| RootCell {
            node,
            prev: key,
            next: key,
        });
        match self.head {
            Some(head) => self.splice_after(head, cell),
            None => self.head = Some(cell),
        }
        cell
    }

    fn splice_after(&mut self, anchor: RootKey, cell: RootKey) {
        let after = self.roots[anchor].next;
        self.roots[cell].prev = anchor;
        self.roots[cell].next = after;
        self.roots[anchor].next = cell;
        self.roots[after].prev = cell;
    }

    /// Removes a cell from the root list, repairing its neighbors' links
    fn unlink_root(&mut self, key: RootKey) -> RootCell {
        let cell = self
            .roots
            .remove(key)
            .expect("unlinked root cell is in the arena");
        if cell.next != key {
            self.roots[cell.prev].next = cell.next;
            self.roots[cell.next].prev = cell.prev;
        }
        cell
    }

    fn higher(&self, a: NodeKey, b: NodeKey) -> bool {
        (self.is_higher_priority)(&self.nodes[a].value, &self.nodes[b].value)
    }

    fn bump_mod(&mut self) {
        self.mod_count.set(self.mod_count.get() + 1);
    }

    pub(crate) fn reset_mod_count(&mut self) {
        self.mod_count.set(0);
    }
}

impl<T: Ord> FibPriorityQueue<T> {
    /// Queue whose largest element dequeues first
    pub fn max_queue() -> Self {
        Self::new(max_priority::<T>)
    }

    /// Queue whose smallest element dequeues first
    pub fn min_queue() -> Self {
        Self::new(min_priority::<T>)
    }
}

impl<T: PartialEq> FibPriorityQueue<T> {
    /// Whether any node anywhere in the forest holds `value`
    pub fn contains(&self, value: &T) -> bool {
        self.nodes.values().any(|node| node.value == *value)
    }
}

impl<T: Clone> FibPriorityQueue<T> {
    /// Iterates the elements in dequeue order by draining a private deep
    /// copy; see [`SnapshotIter`]
    pub fn iter(&self) -> SnapshotIter<T> {
        SnapshotIter::new(self)
    }
}

/// Deep copy: cloning the arenas duplicates every tree node-by-node while
/// preserving all keys, so the copy shares no storage with the original. The
/// copy starts with a fresh modification count of zero.
impl<T: Clone> Clone for FibPriorityQueue<T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            roots: self.roots.clone(),
            head: self.head,
            mod_count: Rc::new(Cell::new(0)),
            is_higher_priority: self.is_higher_priority,
        }
    }
}

/// Equality is priority order of contents, not physical tree shape: two
/// queues are equal iff they were built with the identical predicate
/// function, hold the same number of elements, and draining deep copies of
/// both yields pairwise-equal values in extraction order.
impl<T: Clone + PartialEq> PartialEq for FibPriorityQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        if !std::ptr::fn_addr_eq(self.is_higher_priority, other.is_higher_priority) {
            return false;
        }
        if self.len() != other.len() {
            return false;
        }
        let mut left = self.clone();
        let mut right = other.clone();
        while let (Ok(a), Ok(b)) = (left.dequeue(), right.dequeue()) {
            if a != b {
                return false;
            }
        }
        true
    }
}

impl<T: fmt::Debug> fmt::Debug for FibPriorityQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FibPriorityQueue")
            .field("len", &self.len())
            .field("root_count", &self.root_count())
            .field("mod_count", &self.mod_count.get())
            .finish()
    }
}
