use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Chart granularity. Each period has a fixed bucket count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// Last 7 days, one bucket per day
    #[default]
    Week,
    /// Last 30 days, one bucket per day
    Month,
    /// Last 12 months, one bucket per calendar month
    Year,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::Week, Period::Month, Period::Year];

    /// Number of buckets in a series for this period.
    pub fn bucket_count(self) -> usize {
        match self {
            Period::Week => 7,
            Period::Month => 30,
            Period::Year => 12,
        }
    }

    /// Whether buckets are calendar days (as opposed to calendar months).
    pub fn is_daily(self) -> bool {
        !matches!(self, Period::Year)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Period::Week => "week",
            Period::Month => "month",
            Period::Year => "year",
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Period {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "week" => Ok(Period::Week),
            "month" => Ok(Period::Month),
            "year" => Ok(Period::Year),
            _ => Err(CoreError::InvalidPeriod(s.to_string())),
        }
    }
}
