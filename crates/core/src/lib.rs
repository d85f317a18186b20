pub mod clock;
pub mod errors;
pub mod models;
pub mod services;
pub mod sources;

use clock::{Clock, SystemClock};
use errors::CoreError;
use models::{
    chart::{Bucket, PeriodSeries},
    period::Period,
    settings::DashboardSettings,
    stats::TransactionStats,
    transaction::TransactionEvent,
    view::{DashboardView, ViewStatus},
};
use services::{
    chart_service::ChartService, series_cache::SeriesCache, stats_service::StatsService,
};
use sources::{json::parse_transactions, traits::TransactionSource};
use tracing::{info, warn};

/// Main entry point for the dashboard core.
///
/// Holds the fetched transactions, the fetch lifecycle flags, the selected
/// chart period and the memoized series for all three periods. The series
/// are rebuilt once per new transaction list; switching periods only changes
/// which cached series is handed out.
#[must_use]
pub struct TxDashboard {
    settings: DashboardSettings,
    events: Vec<TransactionEvent>,
    /// Bumped every time `events` is replaced; the memo key.
    version: u64,
    loading: bool,
    has_fetched: bool,
    selected_period: Period,
    chart_service: ChartService,
    stats_service: StatsService,
    series_cache: SeriesCache,
    clock: Box<dyn Clock>,
}

impl std::fmt::Debug for TxDashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TxDashboard")
            .field("events", &self.events.len())
            .field("version", &self.version)
            .field("loading", &self.loading)
            .field("has_fetched", &self.has_fetched)
            .field("selected_period", &self.selected_period)
            .field("settings", &self.settings)
            .finish()
    }
}

impl TxDashboard {
    /// Create an empty dashboard with default settings and the system clock.
    pub fn new() -> Self {
        Self::with_settings(DashboardSettings::default())
    }

    pub fn with_settings(settings: DashboardSettings) -> Self {
        Self::with_clock(settings, SystemClock)
    }

    /// Create a dashboard reading "now" from `clock`.
    pub fn with_clock(settings: DashboardSettings, clock: impl Clock + 'static) -> Self {
        Self::build(settings, Box::new(clock))
    }

    // ── Fetch lifecycle ─────────────────────────────────────────────

    /// Mark a fetch as in flight.
    pub fn begin_fetch(&mut self) {
        self.loading = true;
    }

    /// Replace the transaction list with a freshly fetched one and rebuild
    /// the series for all three periods.
    pub fn apply_events(&mut self, events: Vec<TransactionEvent>) {
        self.events = events;
        self.version += 1;
        self.loading = false;
        self.has_fetched = true;
        self.recompute();
        info!(
            version = self.version,
            transactions = self.events.len(),
            "applied fetched transactions"
        );
    }

    /// Record a failed fetch. Previously fetched data stays in place.
    pub fn fail_fetch(&mut self, error: &CoreError) {
        self.loading = false;
        warn!(%error, has_data = self.has_fetched, "transaction fetch failed");
    }

    /// Fetch from `source` and apply the result.
    /// Returns the number of transactions applied, or the source's error.
    pub async fn refresh(&mut self, source: &dyn TransactionSource) -> Result<usize, CoreError> {
        self.begin_fetch();
        match source.fetch_transactions().await {
            Ok(events) => {
                let count = events.len();
                self.apply_events(events);
                Ok(count)
            }
            Err(e) => {
                self.fail_fetch(&e);
                Err(e)
            }
        }
    }

    /// Parse an upstream JSON payload (array or `{"transactions": [...]}`)
    /// and apply it. Returns the number of transactions imported.
    pub fn import_events_from_json(&mut self, json: &str) -> Result<usize, CoreError> {
        let events = parse_transactions(json)?;
        let count = events.len();
        self.apply_events(events);
        Ok(count)
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn has_fetched(&self) -> bool {
        self.has_fetched
    }

    #[must_use]
    pub fn events(&self) -> &[TransactionEvent] {
        &self.events
    }

    /// Version of the current transaction list (0 until the first fetch).
    #[must_use]
    pub fn data_version(&self) -> u64 {
        self.version
    }

    // ── Periods & series ────────────────────────────────────────────

    /// Switch the chart period. Never recomputes or refetches.
    pub fn select_period(&mut self, period: Period) {
        self.selected_period = period;
    }

    #[must_use]
    pub fn selected_period(&self) -> Period {
        self.selected_period
    }

    /// Cached series for `period`.
    #[must_use]
    pub fn series(&self, period: Period) -> &[Bucket] {
        self.series_cache.series().get(period)
    }

    /// Cached series for the selected period.
    #[must_use]
    pub fn current_series(&self) -> &[Bucket] {
        self.series(self.selected_period)
    }

    #[must_use]
    pub fn all_series(&self) -> &PeriodSeries {
        self.series_cache.series()
    }

    /// Rebuild the series against a fresh "now" (e.g. after midnight),
    /// without a new fetch.
    pub fn reanchor(&mut self) {
        self.series_cache.invalidate();
        self.recompute();
    }

    /// Number of times the series have actually been rebuilt.
    #[must_use]
    pub fn series_recomputations(&self) -> usize {
        self.series_cache.recomputations()
    }

    /// Export the three series as JSON (`{"week": [...], "month": [...], "year": [...]}`).
    pub fn export_series_to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string(self.series_cache.series())
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize chart series: {e}")))
    }

    // ── Stats & view ────────────────────────────────────────────────

    /// Stat-card figures over the current transaction list.
    #[must_use]
    pub fn stats(&self) -> TransactionStats {
        self.stats_service
            .summarize(&self.events, &self.settings.currency)
    }

    /// Everything needed to render the dashboard for the selected period.
    #[must_use]
    pub fn view(&self) -> DashboardView {
        let status = if !self.has_fetched {
            if self.loading {
                ViewStatus::Loading
            } else {
                ViewStatus::NotFetched
            }
        } else if self.events.is_empty() {
            ViewStatus::NoTransactions
        } else {
            ViewStatus::Ready
        };

        DashboardView {
            status,
            loading: self.loading,
            period: self.selected_period,
            series: self.current_series().to_vec(),
            stats: self.stats(),
        }
    }

    // ── Settings ────────────────────────────────────────────────────

    #[must_use]
    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    /// Replace the settings after validating them. The selected period is
    /// left alone; only the stats currency changes.
    pub fn set_settings(&mut self, settings: DashboardSettings) -> Result<(), CoreError> {
        self.settings = settings.validated()?;
        Ok(())
    }

    // ── Internal ────────────────────────────────────────────────────

    fn recompute(&mut self) {
        let now = self.clock.now();
        let events = &self.events;
        let chart_service = &self.chart_service;
        self.series_cache
            .refresh(self.version, || chart_service.build_all(events, &now));
    }

    fn build(settings: DashboardSettings, clock: Box<dyn Clock>) -> Self {
        let chart_service = ChartService::new();
        let placeholder = chart_service.build_all(&[], &clock.now());

        Self {
            selected_period: settings.default_period,
            settings,
            events: Vec::new(),
            version: 0,
            loading: false,
            has_fetched: false,
            chart_service,
            stats_service: StatsService::new(),
            series_cache: SeriesCache::new(0, placeholder),
            clock,
        }
    }
}

impl Default for TxDashboard {
    fn default() -> Self {
        Self::new()
    }
}
