//! Least Recently Used replacement for a single set.
//!
//! The textbook recency stack: a hit promotes the line to the MRU
//! position; a miss evicts the LRU line (if the set is full) and inserts
//! the new line at MRU. Cyclic streams one line wider than the set thrash
//! completely — that failure mode is exactly what BIP exists to counter.

use crate::ds::RecencyStack;
use crate::geometry::Tag;

/// Applies one LRU access for `tag`, mutating `set` in place.
///
/// Returns whether the access hit. Total for any tag and any set state.
///
/// # Example
///
/// ```
/// use dipkit::ds::RecencyStack;
/// use dipkit::policy::lru;
///
/// let mut set = RecencyStack::new(2);
/// assert!(!lru::access(&mut set, 7)); // cold miss, inserted at MRU
/// assert!(lru::access(&mut set, 7));  // hit
/// ```
pub fn access(set: &mut RecencyStack, tag: Tag) -> bool {
    if set.promote(tag) {
        return true;
    }
    if set.is_full() {
        let _ = set.evict_lru();
    }
    set.insert_mru(tag);
    false
}
