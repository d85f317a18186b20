use rust_decimal::Decimal;

use crate::models::amount::{accumulate, fee_for, round2, to_number};
use crate::models::stats::TransactionStats;
use crate::models::transaction::{TransactionEvent, TxStatus};

/// Computes the stat-card figures: counts per status, revenue, success rate.
///
/// Every transaction counts, whether or not it has a usable timestamp.
pub struct StatsService;

impl StatsService {
    pub fn new() -> Self {
        Self
    }

    pub fn summarize(&self, events: &[TransactionEvent], currency: &str) -> TransactionStats {
        let mut successful = 0_usize;
        let mut failed = 0_usize;
        let mut pending = 0_usize;
        let mut revenue = Decimal::ZERO;
        let mut volume_base = Decimal::ZERO;

        for event in events {
            match event.status() {
                TxStatus::Success => successful += 1,
                TxStatus::Failed => failed += 1,
                TxStatus::Pending => pending += 1,
                TxStatus::Unknown => {}
            }
            revenue = accumulate(revenue, event.secondary_amount());
            volume_base = accumulate(volume_base, event.base_amount());
        }

        let total_revenue = round2(revenue);
        let success_rate = if events.is_empty() {
            Decimal::ZERO
        } else {
            round2(Decimal::from(successful) * Decimal::ONE_HUNDRED / Decimal::from(events.len()))
        };

        TransactionStats {
            currency: currency.to_string(),
            total_transactions: events.len(),
            successful,
            failed,
            pending,
            total_revenue: to_number(total_revenue),
            total_fees: to_number(fee_for(total_revenue)),
            total_volume_base: to_number(round2(volume_base)),
            success_rate: to_number(success_rate),
        }
    }
}

impl Default for StatsService {
    fn default() -> Self {
        Self::new()
    }
}
