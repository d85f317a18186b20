use tracing::debug;

use crate::models::chart::PeriodSeries;

/// Single-slot memo for the three chart series.
///
/// Keyed by the version of the event list they were computed from: the
/// series are rebuilt only when the version changes (or after
/// [`invalidate`](SeriesCache::invalidate)), never on a period switch.
#[derive(Debug, Clone)]
pub struct SeriesCache {
    version: Option<u64>,
    series: PeriodSeries,
    recomputations: usize,
}

impl SeriesCache {
    /// Seed the cache with series already computed for `version`.
    pub fn new(version: u64, series: PeriodSeries) -> Self {
        Self {
            version: Some(version),
            series,
            recomputations: 0,
        }
    }

    /// Recompute via `compute` if `version` differs from the cached one.
    /// Returns `true` when a recomputation happened.
    pub fn refresh<F>(&mut self, version: u64, compute: F) -> bool
    where
        F: FnOnce() -> PeriodSeries,
    {
        if self.version == Some(version) {
            return false;
        }
        debug!(version, previous = ?self.version, "recomputing chart series");
        self.series = compute();
        self.version = Some(version);
        self.recomputations += 1;
        true
    }

    /// Forget the cached version so the next `refresh` recomputes.
    pub fn invalidate(&mut self) {
        self.version = None;
    }

    pub fn series(&self) -> &PeriodSeries {
        &self.series
    }

    /// Version the cached series belong to, `None` after `invalidate`.
    pub fn version(&self) -> Option<u64> {
        self.version
    }

    /// How many times `refresh` actually recomputed.
    pub fn recomputations(&self) -> usize {
        self.recomputations
    }
}
