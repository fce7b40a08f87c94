//! Convenience re-exports of the commonly used types.

pub use crate::builder::SimulatorBuilder;
pub use crate::ds::RecencyStack;
pub use crate::error::{AddressError, GeometryError, InvariantError};
pub use crate::geometry::{Address, CacheGeometry, DecodedAddress, Tag};
pub use crate::policy::dip::{SetRole, DEFAULT_DUEL_STRIDE, PSEL_INIT, PSEL_MAX};
pub use crate::policy::{BimodalThrottle, PolicyKind, PselCounter};
pub use crate::simulator::DipSimulator;
#[cfg(feature = "concurrency")]
pub use crate::simulator::ConcurrentDipSimulator;
pub use crate::stats::SimStats;
