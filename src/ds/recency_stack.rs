//! Bounded recency-ordered tag sequence backing one cache set.
//!
//! ## Layout
//!
//! ```text
//!   front ──► [T] ── [U] ── [V] ◄── back      (capacity = associativity)
//!             MRU                LRU
//! ```
//!
//! All mutation goes through the four primitives the replacement policies
//! need, each `O(associativity)` or better, and each preserving the
//! relative order of untouched tags:
//!
//! | Method       | Effect                                   |
//! |--------------|------------------------------------------|
//! | `promote`    | move an existing tag to the MRU position |
//! | `insert_mru` | insert a new tag at the MRU position     |
//! | `insert_lru` | insert a new tag at the LRU position     |
//! | `evict_lru`  | remove and return the LRU tag            |
//!
//! Invariants (checkable via [`RecencyStack::check_invariants`]): no tag
//! occurs twice, and the length never exceeds the capacity. The stack
//! itself never evicts; the policy decides when to call `evict_lru`, so
//! `insert_*` on a full stack is a caller bug and debug-asserts.

use std::collections::VecDeque;

use crate::error::InvariantError;
use crate::geometry::Tag;

/// Recency stack for a single cache set: MRU at the front, LRU at the back.
///
/// # Example
///
/// ```
/// use dipkit::ds::RecencyStack;
///
/// let mut set = RecencyStack::new(2);
/// set.insert_mru(1);
/// set.insert_mru(2);
/// assert!(set.promote(1));
/// assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecencyStack {
    tags: VecDeque<Tag>,
    capacity: usize,
}

impl RecencyStack {
    /// Creates an empty stack holding at most `capacity` tags.
    #[inline]
    pub fn new(capacity: usize) -> Self {
        Self {
            tags: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Moves `tag` to the MRU position if resident, preserving the relative
    /// order of all other tags. Returns whether the tag was found.
    pub fn promote(&mut self, tag: Tag) -> bool {
        match self.tags.iter().position(|&t| t == tag) {
            Some(pos) => {
                // VecDeque::remove shifts the remainder, keeping order.
                let _ = self.tags.remove(pos);
                self.tags.push_front(tag);
                true
            },
            None => false,
        }
    }

    /// Inserts a new tag at the MRU position.
    #[inline]
    pub fn insert_mru(&mut self, tag: Tag) {
        debug_assert!(!self.is_full(), "insert into full set without eviction");
        debug_assert!(!self.contains(tag), "tag {tag} already resident");
        self.tags.push_front(tag);
    }

    /// Inserts a new tag at the LRU position, making it the next eviction
    /// candidate.
    #[inline]
    pub fn insert_lru(&mut self, tag: Tag) {
        debug_assert!(!self.is_full(), "insert into full set without eviction");
        debug_assert!(!self.contains(tag), "tag {tag} already resident");
        self.tags.push_back(tag);
    }

    /// Removes and returns the LRU tag, or `None` if the stack is empty.
    #[inline]
    pub fn evict_lru(&mut self) -> Option<Tag> {
        self.tags.pop_back()
    }

    /// Returns whether `tag` is resident.
    #[inline]
    pub fn contains(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }

    /// Number of resident tags.
    #[inline]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Returns whether no tags are resident.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Returns whether the stack is at capacity.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.tags.len() >= self.capacity
    }

    /// Maximum number of resident tags (the associativity).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterates resident tags from MRU to LRU.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.tags.iter()
    }

    /// Validates the capacity and uniqueness invariants.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.tags.len() > self.capacity {
            return Err(InvariantError::new(format!(
                "set holds {} tags, capacity is {}",
                self.tags.len(),
                self.capacity
            )));
        }
        for (i, &tag) in self.tags.iter().enumerate() {
            if self.tags.iter().skip(i + 1).any(|&t| t == tag) {
                return Err(InvariantError::new(format!("duplicate tag {tag} in set")));
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
