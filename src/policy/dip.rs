//! Set dueling: leader classification and the PSEL tournament counter.
//!
//! A small, fixed fraction of sets is permanently dedicated to each
//! policy; those leader sets sample the miss rate of "their" policy on
//! live traffic. A single saturating counter drifts toward whichever
//! leader class misses less, and the follower sets — the bulk of the
//! cache — consult it on every access:
//!
//! ```text
//!   LRU-leader miss ──► PSEL += 1 ┐        PSEL ≤ 512 ──► followers run LRU
//!   BIP-leader miss ──► PSEL -= 1 ┘──►     PSEL > 512 ──► followers run BIP
//!   (hits and follower accesses never move PSEL)
//! ```
//!
//! This is competitive policy learning with O(1) state and no history
//! window: the policy that is currently winning on the leaders is applied
//! everywhere else.

use crate::policy::PolicyKind;

/// Default stride for leader assignment: every 32nd set leads for LRU,
/// every 33rd for BIP.
pub const DEFAULT_DUEL_STRIDE: u64 = 32;

/// Saturation ceiling of the policy selector.
pub const PSEL_MAX: u16 = 1023;

/// Initial (midpoint) selector value; also the LRU/BIP decision threshold.
pub const PSEL_INIT: u16 = 512;

/// Role of a set in the dueling scheme. Pure function of the set index,
/// static for the simulation's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetRole {
    /// Always runs LRU; its misses push PSEL up.
    LruLeader,
    /// Always runs BIP; its misses push PSEL down.
    BipLeader,
    /// Runs whichever policy PSEL currently favors.
    Follower,
}

/// Classifies a set index under the given dueling stride.
///
/// # Example
///
/// ```
/// use dipkit::policy::dip::{classify, SetRole};
///
/// assert_eq!(classify(0, 32), SetRole::LruLeader);
/// assert_eq!(classify(33, 32), SetRole::BipLeader);
/// assert_eq!(classify(5, 32), SetRole::Follower);
/// ```
#[inline]
pub fn classify(set_index: u64, duel_stride: u64) -> SetRole {
    match set_index % duel_stride {
        0 => SetRole::LruLeader,
        1 => SetRole::BipLeader,
        _ => SetRole::Follower,
    }
}

/// The saturating policy selector in `[0, PSEL_MAX]`.
///
/// Written only by leader-set misses; read by every follower access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PselCounter {
    value: u16,
}

impl Default for PselCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl PselCounter {
    /// Creates a selector at the midpoint.
    #[inline]
    pub fn new() -> Self {
        Self { value: PSEL_INIT }
    }

    /// Current selector value.
    #[inline]
    pub fn value(&self) -> u16 {
        self.value
    }

    /// Pins the selector, clamping to `[0, PSEL_MAX]`. Intended for
    /// experiments and tests that isolate one policy deterministically.
    #[inline]
    pub fn set(&mut self, value: u16) {
        self.value = value.min(PSEL_MAX);
    }

    /// Records a miss on an LRU-leader set: one vote toward BIP,
    /// saturating at [`PSEL_MAX`].
    #[inline]
    pub fn record_lru_leader_miss(&mut self) {
        if self.value < PSEL_MAX {
            self.value += 1;
        }
    }

    /// Records a miss on a BIP-leader set: one vote toward LRU,
    /// saturating at 0.
    #[inline]
    pub fn record_bip_leader_miss(&mut self) {
        if self.value > 0 {
            self.value -= 1;
        }
    }

    /// The policy follower sets should run at the current selector value:
    /// LRU at or below the midpoint, BIP above it.
    #[inline]
    pub fn selected(&self) -> PolicyKind {
        if self.value <= PSEL_INIT {
            PolicyKind::Lru
        } else {
            PolicyKind::Bip
        }
    }
}
