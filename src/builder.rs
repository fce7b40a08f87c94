//! Builder for [`DipSimulator`] instances.
//!
//! Geometry is specified in caller-facing byte sizes; everything derived
//! (set count, offset bits) is computed and validated once at `build`, and
//! the resulting [`CacheGeometry`](crate::geometry::CacheGeometry) is
//! immutable afterwards.
//!
//! ## Example
//!
//! ```
//! use dipkit::builder::SimulatorBuilder;
//!
//! let sim = SimulatorBuilder::new()
//!     .total_bytes(1 << 20)
//!     .associativity(16)
//!     .line_bytes(64)
//!     .build()
//!     .unwrap();
//! assert_eq!(sim.geometry().num_sets(), 1024);
//! ```

use crate::error::GeometryError;
use crate::geometry::CacheGeometry;
use crate::policy::dip::DEFAULT_DUEL_STRIDE;
use crate::simulator::DipSimulator;

/// Builds a [`DipSimulator`] from byte-size parameters.
///
/// Defaults match the reference configuration: 1 MiB total, 16-way,
/// 64-byte lines, stride-32 dueling.
#[derive(Debug, Clone)]
pub struct SimulatorBuilder {
    total_bytes: u64,
    associativity: u64,
    line_bytes: u64,
    duel_stride: u64,
}

impl Default for SimulatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatorBuilder {
    /// Creates a builder with the reference defaults.
    pub fn new() -> Self {
        Self {
            total_bytes: 1 << 20,
            associativity: 16,
            line_bytes: 64,
            duel_stride: DEFAULT_DUEL_STRIDE,
        }
    }

    /// Total cache capacity in bytes.
    #[must_use]
    pub fn total_bytes(mut self, bytes: u64) -> Self {
        self.total_bytes = bytes;
        self
    }

    /// Lines per set.
    #[must_use]
    pub fn associativity(mut self, ways: u64) -> Self {
        self.associativity = ways;
        self
    }

    /// Line size in bytes (must be a power of two).
    #[must_use]
    pub fn line_bytes(mut self, bytes: u64) -> Self {
        self.line_bytes = bytes;
        self
    }

    /// Dueling stride: leaders are the sets with `index % stride` equal to
    /// 0 (LRU) or 1 (BIP). Small geometries scale this down so follower
    /// sets still exist.
    #[must_use]
    pub fn duel_stride(mut self, stride: u64) -> Self {
        self.duel_stride = stride;
        self
    }

    /// Validates the geometry and builds the simulator.
    ///
    /// # Errors
    ///
    /// See [`CacheGeometry::with_duel_stride`].
    pub fn build(self) -> Result<DipSimulator, GeometryError> {
        let geometry = CacheGeometry::with_duel_stride(
            self.total_bytes,
            self.associativity,
            self.line_bytes,
            self.duel_stride,
        )?;
        Ok(DipSimulator::new(geometry))
    }
}
