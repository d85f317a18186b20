use serde::{Deserialize, Serialize};

/// Stat-card summary over the whole transaction list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionStats {
    /// Currency the revenue and fee figures are expressed in
    pub currency: String,

    /// Number of transactions, whatever their status
    pub total_transactions: usize,

    pub successful: usize,

    pub failed: usize,

    pub pending: usize,

    /// Sum of all secondary-currency amounts, rounded to 2 dp
    pub total_revenue: f64,

    /// 1% of `total_revenue`, rounded to 2 dp
    pub total_fees: f64,

    /// Sum of all base-currency amounts, rounded to 2 dp
    pub total_volume_base: f64,

    /// Percentage of successful transactions: (successful / total) * 100
    pub success_rate: f64,
}
