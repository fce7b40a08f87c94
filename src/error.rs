//! Error types for the dipkit library.
//!
//! ## Key Components
//!
//! - [`GeometryError`]: Returned when the requested cache geometry is
//!   invalid (zero parameter, non-power-of-two line size) or too small to
//!   host both leader classes required by set dueling.
//! - [`AddressError`]: Returned at the signed boundary when a driver hands
//!   over a negative address.
//! - [`InvariantError`]: Returned by debug-only `check_invariants` methods
//!   when an internal data-structure invariant is violated.
//!
//! ## Example Usage
//!
//! ```
//! use dipkit::error::GeometryError;
//! use dipkit::simulator::DipSimulator;
//!
//! // Fallible construction catches bad geometry without panicking.
//! let err = DipSimulator::builder().line_bytes(0).build().unwrap_err();
//! assert!(matches!(err, GeometryError::InvalidGeometry(_)));
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// GeometryError
// ---------------------------------------------------------------------------

/// Error returned when cache geometry parameters are rejected.
///
/// Produced by [`SimulatorBuilder::build`](crate::builder::SimulatorBuilder::build)
/// and [`CacheGeometry`](crate::geometry::CacheGeometry) constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// A byte-size or stride parameter failed validation. Carries a
    /// human-readable description of which parameter and why.
    InvalidGeometry(String),
    /// The derived set count cannot host at least one LRU-dedicated and one
    /// BIP-dedicated set, so set dueling has nothing to duel.
    InsufficientSets {
        /// Number of sets the requested geometry would produce.
        sets: u64,
    },
}

impl GeometryError {
    /// Shorthand for an [`GeometryError::InvalidGeometry`] with the given
    /// description.
    #[inline]
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        GeometryError::InvalidGeometry(msg.into())
    }
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::InvalidGeometry(msg) => f.write_str(msg),
            GeometryError::InsufficientSets { sets } => write!(
                f,
                "geometry yields {sets} set(s); set dueling needs at least 2 \
                 (one LRU leader and one BIP leader)"
            ),
        }
    }
}

impl std::error::Error for GeometryError {}

// ---------------------------------------------------------------------------
// AddressError
// ---------------------------------------------------------------------------

/// Error returned when a driver supplies a negative address.
///
/// The core simulator takes `u64` addresses and never fails; this error
/// exists only at the signed conversion boundary
/// ([`Address::try_from`](crate::geometry::Address)) so that a buggy driver
/// is reported instead of silently wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressError {
    value: i64,
}

impl AddressError {
    #[inline]
    pub(crate) fn negative(value: i64) -> Self {
        Self { value }
    }

    /// Returns the offending address value.
    #[inline]
    pub fn value(&self) -> i64 {
        self.value
    }
}

impl fmt::Display for AddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "negative address: {}", self.value)
    }
}

impl std::error::Error for AddressError {}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal simulator invariants are violated.
///
/// Produced by `check_invariants` methods on
/// [`RecencyStack`](crate::ds::RecencyStack) and
/// [`DipSimulator`](crate::simulator::DipSimulator). Carries a
/// human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
