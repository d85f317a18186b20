use serde::{Deserialize, Serialize};

use super::chart::Bucket;
use super::period::Period;
use super::stats::TransactionStats;

/// What the dashboard should show instead of (or alongside) the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewStatus {
    /// First fetch in flight, nothing to show yet
    Loading,
    /// No fetch has succeeded (not started, or failed); show the empty-state message
    NotFetched,
    /// Fetch succeeded but returned no transactions
    NoTransactions,
    /// Data available
    Ready,
}

/// Everything the frontend needs to draw one frame of the dashboard.
///
/// `series` is always the full, fixed-length series for `period`; when the
/// status is not `Ready` it is the zero-valued placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub status: ViewStatus,

    /// True while any fetch is in flight, including background refreshes
    pub loading: bool,

    pub period: Period,

    pub series: Vec<Bucket>,

    pub stats: TransactionStats,
}
