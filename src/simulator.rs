//! The DIP simulator core: set store, dispatch, and shared counters.
//!
//! ## Architecture
//!
//! ```text
//!   ┌───────────────────────────────────────────────────────────────┐
//!   │                        DipSimulator                           │
//!   │                                                               │
//!   │   geometry: CacheGeometry        (immutable after build)      │
//!   │   sets:     Vec<RecencyStack>    (one per set index)          │
//!   │   psel:     PselCounter          (shared tournament counter)  │
//!   │   throttle: BimodalThrottle      (shared BIP epsilon)         │
//!   │   stats:    SimStats             (monotone hit/access totals) │
//!   └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! One access runs to completion before the next: PSEL and the throttle
//! carry state across accesses, so their read-then-write sequence is
//! atomic relative to other accesses by construction. The run is a finite
//! deterministic fold over the address sequence given fixed geometry.
//!
//! All shared counters are fields of the simulator rather than ambient
//! globals, so several independent runs can coexist in one process.

use crate::builder::SimulatorBuilder;
use crate::ds::RecencyStack;
use crate::error::InvariantError;
use crate::geometry::{Address, CacheGeometry};
use crate::policy::dip::{classify, PselCounter, SetRole};
use crate::policy::{bip, lru, BimodalThrottle, PolicyKind};
use crate::stats::SimStats;

/// A set-associative cache under the Dynamic Insertion Policy.
///
/// # Example
///
/// ```
/// use dipkit::simulator::DipSimulator;
///
/// let mut sim = DipSimulator::builder()
///     .total_bytes(1 << 20)
///     .associativity(16)
///     .line_bytes(64)
///     .build()
///     .unwrap();
///
/// assert!(!sim.access(0)); // cold miss
/// assert!(sim.access(0));  // hit
/// assert_eq!(sim.stats().accesses, 2);
/// ```
#[derive(Debug, Clone)]
pub struct DipSimulator {
    geometry: CacheGeometry,
    sets: Vec<RecencyStack>,
    psel: PselCounter,
    throttle: BimodalThrottle,
    stats: SimStats,
}

impl DipSimulator {
    /// Creates a simulator with empty sets from validated geometry.
    pub fn new(geometry: CacheGeometry) -> Self {
        let sets = (0..geometry.num_sets())
            .map(|_| RecencyStack::new(geometry.associativity()))
            .collect();
        Self {
            geometry,
            sets,
            psel: PselCounter::new(),
            throttle: BimodalThrottle::new(),
            stats: SimStats::default(),
        }
    }

    /// Returns a builder with the reference geometry defaults
    /// (1 MiB, 16-way, 64 B lines, stride-32 dueling).
    pub fn builder() -> SimulatorBuilder {
        SimulatorBuilder::new()
    }

    /// Processes one address: decode, classify, dispatch to the governing
    /// policy, update PSEL on leader outcomes and the hit/access totals.
    ///
    /// Returns whether the access hit. Total over all `u64` addresses.
    pub fn access(&mut self, address: u64) -> bool {
        let line = self.geometry.decode(address);
        let role = classify(line.set as u64, self.geometry.duel_stride());
        let set = &mut self.sets[line.set];

        let hit = match role {
            SetRole::LruLeader => {
                let hit = lru::access(set, line.tag);
                if !hit {
                    self.psel.record_lru_leader_miss();
                }
                hit
            },
            SetRole::BipLeader => {
                let hit = bip::access(set, line.tag, &mut self.throttle);
                if !hit {
                    self.psel.record_bip_leader_miss();
                }
                hit
            },
            // Followers consult PSEL but never move it.
            SetRole::Follower => match self.psel.selected() {
                PolicyKind::Lru => lru::access(set, line.tag),
                PolicyKind::Bip => bip::access(set, line.tag, &mut self.throttle),
            },
        };

        self.stats.accesses += 1;
        if hit {
            self.stats.hits += 1;
        }
        hit
    }

    /// [`access`](Self::access) for a boundary-validated [`Address`].
    #[inline]
    pub fn access_address(&mut self, address: Address) -> bool {
        self.access(address.get())
    }

    /// Aggregate statistics for the run so far.
    #[inline]
    pub fn stats(&self) -> SimStats {
        self.stats
    }

    /// The geometry this simulator was built with.
    #[inline]
    pub fn geometry(&self) -> &CacheGeometry {
        &self.geometry
    }

    /// Current policy selector value.
    #[inline]
    pub fn psel(&self) -> u16 {
        self.psel.value()
    }

    /// Pins the policy selector (clamped to its range). Lets experiments
    /// and tests route follower sets deterministically instead of relying
    /// on dueling output.
    #[inline]
    pub fn set_psel(&mut self, value: u16) {
        self.psel.set(value);
    }

    /// Current position of the shared bimodal throttle.
    #[inline]
    pub fn epsilon(&self) -> u8 {
        self.throttle.value()
    }

    /// Read-only view of one set's recency stack, MRU first.
    #[inline]
    pub fn peek_set(&self, index: usize) -> Option<&RecencyStack> {
        self.sets.get(index)
    }

    /// Validates every per-set invariant plus the counter ranges.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        for (index, set) in self.sets.iter().enumerate() {
            set.check_invariants().map_err(|e| {
                InvariantError::new(format!("set {index}: {}", e.message()))
            })?;
        }
        if self.stats.hits > self.stats.accesses {
            return Err(InvariantError::new(format!(
                "hit total {} exceeds access total {}",
                self.stats.hits, self.stats.accesses
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// ConcurrentDipSimulator
// ---------------------------------------------------------------------------

#[cfg(feature = "concurrency")]
mod concurrent {
    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::DipSimulator;
    use crate::error::GeometryError;
    use crate::stats::SimStats;

    /// Thread-safe wrapper serializing whole accesses behind a mutex.
    ///
    /// PSEL and the bimodal throttle carry cross-access state, so each
    /// access must observe and update them atomically; the mutex preserves
    /// arrival order of those updates.
    #[derive(Debug, Clone)]
    pub struct ConcurrentDipSimulator {
        inner: Arc<Mutex<DipSimulator>>,
    }

    impl ConcurrentDipSimulator {
        /// Wraps an owned simulator.
        pub fn new(sim: DipSimulator) -> Self {
            Self {
                inner: Arc::new(Mutex::new(sim)),
            }
        }

        /// Builds from the default builder geometry.
        pub fn with_geometry(
            total_bytes: u64,
            associativity: u64,
            line_bytes: u64,
        ) -> Result<Self, GeometryError> {
            DipSimulator::builder()
                .total_bytes(total_bytes)
                .associativity(associativity)
                .line_bytes(line_bytes)
                .build()
                .map(Self::new)
        }

        /// Processes one address; see [`DipSimulator::access`].
        pub fn access(&self, address: u64) -> bool {
            self.inner.lock().access(address)
        }

        /// Aggregate statistics for the run so far.
        pub fn stats(&self) -> SimStats {
            self.inner.lock().stats()
        }

        /// Current policy selector value.
        pub fn psel(&self) -> u16 {
            self.inner.lock().psel()
        }
    }
}

#[cfg(feature = "concurrency")]
pub use concurrent::ConcurrentDipSimulator;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
