//! Per-set replacement policies and the set-dueling machinery.
//!
//! | Module | Role                                               |
//! |--------|----------------------------------------------------|
//! | `lru`  | strict recency-stack replacement                   |
//! | `bip`  | bimodal insertion (thrash-resistant), plus epsilon |
//! | `dip`  | leader classification and the PSEL selector        |

pub mod bip;
pub mod dip;
pub mod lru;

pub use bip::BimodalThrottle;
pub use dip::{PselCounter, SetRole};

/// The two policies a set can be governed by on a given access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyKind {
    /// Strict recency-based eviction.
    Lru,
    /// Bimodal insertion.
    Bip,
}
