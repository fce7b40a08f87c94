//! Bimodal Insertion Policy for a single set.
//!
//! BIP scans and promotes on a hit exactly like LRU. The difference is the
//! insertion position on a miss: almost every new line is parked at the
//! *LRU* end, where the next miss to the set evicts it. Only one miss in
//! [`BIMODAL_INTERVAL`] inserts at MRU, so a line with genuine reuse still
//! gets the occasional chance to climb the stack. Cyclic patterns that
//! thrash a pure-LRU stack leave most of the working set resident instead.
//!
//! The 1-in-32 cadence is metered by a single [`BimodalThrottle`] shared by
//! every BIP-governed set in the simulation (leader or follower); the
//! interval is counted across all BIP misses system-wide, not per set.

use crate::ds::RecencyStack;
use crate::geometry::Tag;

/// Number of BIP misses between consecutive MRU inserts.
pub const BIMODAL_INTERVAL: u8 = 32;

/// Process-wide cyclic counter throttling BIP's rare MRU inserts.
///
/// Ticks once per BIP miss, wrapping modulo [`BIMODAL_INTERVAL`]; the miss
/// whose post-increment value is 0 gets the MRU insert.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BimodalThrottle {
    count: u8,
}

impl BimodalThrottle {
    /// Creates a throttle at the start of its cycle.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current position in the cycle, in `[0, BIMODAL_INTERVAL)`.
    #[inline]
    pub fn value(&self) -> u8 {
        self.count
    }

    /// Advances the cycle by one miss; returns whether this miss earns the
    /// MRU insert.
    #[inline]
    fn tick(&mut self) -> bool {
        self.count = (self.count + 1) % BIMODAL_INTERVAL;
        self.count == 0
    }
}

/// Applies one BIP access for `tag`, mutating `set` in place and advancing
/// the shared throttle on a miss.
///
/// Returns whether the access hit; the throttle is untouched on a hit.
///
/// # Example
///
/// ```
/// use dipkit::ds::RecencyStack;
/// use dipkit::policy::bip::{self, BimodalThrottle};
///
/// let mut set = RecencyStack::new(2);
/// let mut throttle = BimodalThrottle::new();
/// assert!(!bip::access(&mut set, 7, &mut throttle)); // miss, parked at LRU end
/// assert!(bip::access(&mut set, 7, &mut throttle));  // hit
/// assert_eq!(throttle.value(), 1);
/// ```
pub fn access(set: &mut RecencyStack, tag: Tag, throttle: &mut BimodalThrottle) -> bool {
    if set.promote(tag) {
        return true;
    }
    let promote = throttle.tick();
    if set.is_full() {
        let _ = set.evict_lru();
    }
    if promote {
        set.insert_mru(tag);
    } else {
        set.insert_lru(tag);
    }
    false
}
