//! Aggregate hit/access statistics for a simulation run.

/// Monotone hit/access totals over one run. Never reset mid-run.
///
/// # Example
///
/// ```
/// use dipkit::stats::SimStats;
///
/// let stats = SimStats { hits: 3, accesses: 6 };
/// assert_eq!(stats.misses(), 3);
/// assert!((stats.hit_rate() - 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Accesses that found their tag resident.
    pub hits: u64,
    /// Total accesses processed.
    pub accesses: u64,
}

impl SimStats {
    /// Accesses that did not find their tag resident.
    #[inline]
    pub fn misses(&self) -> u64 {
        self.accesses - self.hits
    }

    /// `hits / accesses`, or 0.0 before any access.
    #[inline]
    pub fn hit_rate(&self) -> f64 {
        if self.accesses == 0 {
            0.0
        } else {
            self.hits as f64 / self.accesses as f64
        }
    }
}
