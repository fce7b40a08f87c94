//! Cache geometry and address decomposition.
//!
//! A [`CacheGeometry`] is built once from caller-supplied byte sizes,
//! validated, and immutable afterwards. Every derived quantity (set count,
//! offset bits) is computed explicitly at construction so there is no way
//! for a constructor argument to shadow a stale field.
//!
//! ## Address decomposition
//!
//! ```text
//!   address (u64)
//!   ┌───────────────────────────┬──────────────┐
//!   │        block address      │ offset bits  │   offset_bits = log2(line)
//!   └───────────────────────────┴──────────────┘
//!              │
//!              ├── set index = block % num_sets
//!              └── tag       = block / num_sets
//! ```
//!
//! The decomposition is total over `u64` (set selection is modular) and
//! reversible: `block = tag * num_sets + set`.

use crate::error::{AddressError, GeometryError};
use crate::policy::dip::DEFAULT_DUEL_STRIDE;

/// A tag identifying a line within one set.
pub type Tag = u64;

/// Validated, immutable cache shape.
///
/// # Example
///
/// ```
/// use dipkit::geometry::CacheGeometry;
///
/// // 1 MiB, 16-way, 64 B lines -> 1024 sets, 6 offset bits.
/// let geo = CacheGeometry::new(1 << 20, 16, 64).unwrap();
/// assert_eq!(geo.num_sets(), 1024);
/// assert_eq!(geo.offset_bits(), 6);
///
/// let line = geo.decode(0x40);
/// assert_eq!((line.set, line.tag), (1, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheGeometry {
    total_bytes: u64,
    associativity: usize,
    line_bytes: u64,
    duel_stride: u64,
    num_sets: u64,
    offset_bits: u32,
}

/// An address decoded against a [`CacheGeometry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedAddress {
    /// Index of the set this address maps to.
    pub set: usize,
    /// Tag identifying the line within that set.
    pub tag: Tag,
}

impl CacheGeometry {
    /// Builds a geometry with the default dueling stride (every 32nd set
    /// leads for LRU, every 33rd for BIP).
    ///
    /// # Errors
    ///
    /// [`GeometryError::InvalidGeometry`] for a zero parameter or a
    /// non-power-of-two line size; [`GeometryError::InsufficientSets`] when
    /// fewer than two sets would exist, leaving one leader class empty.
    pub fn new(
        total_bytes: u64,
        associativity: u64,
        line_bytes: u64,
    ) -> Result<Self, GeometryError> {
        Self::with_duel_stride(total_bytes, associativity, line_bytes, DEFAULT_DUEL_STRIDE)
    }

    /// Builds a geometry with an explicit dueling stride.
    ///
    /// Leader sets are chosen as `index % stride == 0` (LRU) and
    /// `index % stride == 1` (BIP); the stride therefore must be at least 2.
    /// Small test geometries scale the stride down so that follower sets
    /// still exist.
    pub fn with_duel_stride(
        total_bytes: u64,
        associativity: u64,
        line_bytes: u64,
        duel_stride: u64,
    ) -> Result<Self, GeometryError> {
        if total_bytes == 0 {
            return Err(GeometryError::invalid("total cache size must be non-zero"));
        }
        if associativity == 0 {
            return Err(GeometryError::invalid("associativity must be non-zero"));
        }
        if line_bytes == 0 {
            return Err(GeometryError::invalid("line size must be non-zero"));
        }
        if !line_bytes.is_power_of_two() {
            return Err(GeometryError::invalid(format!(
                "line size must be a power of two, got {line_bytes}"
            )));
        }
        if duel_stride < 2 {
            return Err(GeometryError::invalid(format!(
                "dueling stride must be at least 2, got {duel_stride}"
            )));
        }

        let set_bytes = associativity.checked_mul(line_bytes).ok_or_else(|| {
            GeometryError::invalid("associativity * line size overflows u64")
        })?;
        let num_sets = total_bytes / set_bytes;
        // Both leader residues (0 and 1) must map to a real set.
        if num_sets < 2 {
            return Err(GeometryError::InsufficientSets { sets: num_sets });
        }

        Ok(Self {
            total_bytes,
            associativity: associativity as usize,
            line_bytes,
            duel_stride,
            num_sets,
            offset_bits: line_bytes.trailing_zeros(),
        })
    }

    /// Total cache capacity in bytes.
    #[inline]
    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    /// Lines per set.
    #[inline]
    pub fn associativity(&self) -> usize {
        self.associativity
    }

    /// Line size in bytes.
    #[inline]
    pub fn line_bytes(&self) -> u64 {
        self.line_bytes
    }

    /// Dueling stride used by set classification.
    #[inline]
    pub fn duel_stride(&self) -> u64 {
        self.duel_stride
    }

    /// Number of sets (`total / (associativity * line)`).
    #[inline]
    pub fn num_sets(&self) -> u64 {
        self.num_sets
    }

    /// Low address bits discarded as the intra-line offset.
    #[inline]
    pub fn offset_bits(&self) -> u32 {
        self.offset_bits
    }

    /// Decomposes an address into `(set, tag)`.
    ///
    /// Total over all of `u64`: arbitrarily large addresses fold into range
    /// by construction.
    #[inline]
    pub fn decode(&self, address: u64) -> DecodedAddress {
        let block = address >> self.offset_bits;
        DecodedAddress {
            set: (block % self.num_sets) as usize,
            tag: block / self.num_sets,
        }
    }
}

// ---------------------------------------------------------------------------
// Address
// ---------------------------------------------------------------------------

/// A validated non-negative byte address.
///
/// Drivers that read addresses from signed sources (trace formats, stdin)
/// convert through this type; a negative value is a caller contract
/// violation and is reported rather than silently wrapped.
///
/// # Example
///
/// ```
/// use dipkit::geometry::Address;
///
/// assert_eq!(Address::try_from(64i64).unwrap().get(), 64);
/// assert!(Address::try_from(-1i64).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(u64);

impl Address {
    /// Returns the raw address value.
    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for Address {
    #[inline]
    fn from(value: u64) -> Self {
        Address(value)
    }
}

impl TryFrom<i64> for Address {
    type Error = AddressError;

    #[inline]
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .map(Address)
            .map_err(|_| AddressError::negative(value))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
