use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::period::Period;

/// Identity of a bucket inside one aggregation run.
///
/// Month buckets carry their year so that two months with the same name
/// can never share a bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BucketKey {
    Day(NaiveDate),
    Month { year: i32, month: u32 },
}

impl BucketKey {
    /// Display label: `DD/MM` for days, short month name for months.
    pub fn label(&self) -> String {
        match self {
            BucketKey::Day(date) => date.format("%d/%m").to_string(),
            BucketKey::Month { year, month } => NaiveDate::from_ymd_opt(*year, *month, 1)
                .map(|first| first.format("%b").to_string())
                .unwrap_or_default(),
        }
    }
}

/// A single data point of a chart series.
///
/// The core generates these; the frontend just renders them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bucket {
    /// Internal identity; the frontend only sees `label`
    #[serde(skip)]
    pub key: Option<BucketKey>,

    /// Axis label (`DD/MM` or `Jan`..`Dec`)
    pub label: String,

    /// Secondary-currency revenue, rounded to 2 dp
    pub revenue: f64,

    /// Number of transactions that landed in this bucket
    pub transaction_count: u64,

    /// 1% of `revenue`, rounded to 2 dp
    pub fees: f64,
}

impl Bucket {
    /// A zero-valued bucket for `key`.
    pub fn empty(key: BucketKey) -> Self {
        Self {
            label: key.label(),
            key: Some(key),
            revenue: 0.0,
            transaction_count: 0,
            fees: 0.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.transaction_count == 0
    }
}

/// The three chart series the dashboard can switch between.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodSeries {
    pub week: Vec<Bucket>,
    pub month: Vec<Bucket>,
    pub year: Vec<Bucket>,
}

impl PeriodSeries {
    pub fn get(&self, period: Period) -> &[Bucket] {
        match period {
            Period::Week => &self.week,
            Period::Month => &self.month,
            Period::Year => &self.year,
        }
    }
}
