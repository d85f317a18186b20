use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use super::amount::parse_amount;

/// A numeric field as the upstream API sends it: sometimes a JSON number,
/// sometimes a string holding one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LooseNumber {
    Number(serde_json::Number),
    Text(String),
}

impl LooseNumber {
    /// Textual form, suitable for exact decimal parsing.
    pub fn as_text(&self) -> String {
        match self {
            LooseNumber::Number(n) => n.to_string(),
            LooseNumber::Text(s) => s.clone(),
        }
    }

    /// Finite `f64` value, if the field holds a number at all.
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            LooseNumber::Number(n) => n.as_f64()?,
            LooseNumber::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

impl From<f64> for LooseNumber {
    fn from(value: f64) -> Self {
        serde_json::Number::from_f64(value)
            .map(LooseNumber::Number)
            .unwrap_or_else(|| LooseNumber::Text(value.to_string()))
    }
}

impl From<i64> for LooseNumber {
    fn from(value: i64) -> Self {
        LooseNumber::Number(value.into())
    }
}

impl From<&str> for LooseNumber {
    fn from(value: &str) -> Self {
        LooseNumber::Text(value.to_string())
    }
}

/// Accept any JSON value; keep numbers and strings, treat everything else
/// (null, bool, arrays, objects) as absent instead of rejecting the record.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<LooseNumber>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => Some(LooseNumber::Number(n)),
        Some(serde_json::Value::String(s)) => Some(LooseNumber::Text(s)),
        _ => None,
    })
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        _ => None,
    })
}

/// Settlement state of a transaction, as reported upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxStatus {
    Success,
    Failed,
    Pending,
    /// Missing or unrecognised status string
    Unknown,
}

impl TxStatus {
    /// Map an upstream status string (case-insensitive) to a status.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return TxStatus::Unknown;
        };
        match raw.trim().to_ascii_lowercase().as_str() {
            "success" | "successful" | "confirmed" | "completed" => TxStatus::Success,
            "failed" | "failure" | "error" | "reverted" => TxStatus::Failed,
            "pending" | "processing" | "submitted" => TxStatus::Pending,
            _ => TxStatus::Unknown,
        }
    }
}

impl std::fmt::Display for TxStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TxStatus::Success => write!(f, "Success"),
            TxStatus::Failed => write!(f, "Failed"),
            TxStatus::Pending => write!(f, "Pending"),
            TxStatus::Unknown => write!(f, "Unknown"),
        }
    }
}

/// A single blockchain transaction record, as delivered by the fetch layer.
///
/// Every field is optional and loosely typed. Nothing here is validated on
/// the way in: accessors interpret the raw values and fall back to "absent"
/// or zero, so a malformed record can never fail an aggregation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionEvent {
    /// Transaction hash or other upstream identifier
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,

    /// Seconds since the Unix epoch
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<LooseNumber>,

    /// Amount in the secondary currency (drives revenue and fees)
    #[serde(
        rename = "amountSC",
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub amount_sc: Option<LooseNumber>,

    /// Amount in the base currency
    #[serde(
        rename = "amountBC",
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub amount_bc: Option<LooseNumber>,

    /// Raw upstream status string
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl TransactionEvent {
    /// A record with only a timestamp and a secondary-currency amount.
    pub fn new(timestamp: impl Into<LooseNumber>, amount_sc: impl Into<LooseNumber>) -> Self {
        Self {
            timestamp: Some(timestamp.into()),
            amount_sc: Some(amount_sc.into()),
            ..Self::default()
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_base_amount(mut self, amount_bc: impl Into<LooseNumber>) -> Self {
        self.amount_bc = Some(amount_bc.into());
        self
    }

    /// The instant this transaction happened, or `None` when the timestamp
    /// is absent, non-numeric, non-finite or outside chrono's range.
    /// Fractional seconds are kept.
    pub fn occurred_at(&self) -> Option<DateTime<Utc>> {
        let secs = self.timestamp.as_ref()?.as_f64()?;
        let whole = secs.floor();
        if whole < i64::MIN as f64 || whole > i64::MAX as f64 {
            return None;
        }
        let nanos = ((secs - whole) * 1e9) as u32;
        DateTime::from_timestamp(whole as i64, nanos.min(999_999_999))
    }

    /// Secondary-currency amount; zero when missing or unparseable.
    pub fn secondary_amount(&self) -> Decimal {
        parse_amount(self.amount_sc.as_ref().map(LooseNumber::as_text).as_deref())
    }

    /// Base-currency amount; zero when missing or unparseable.
    pub fn base_amount(&self) -> Decimal {
        parse_amount(self.amount_bc.as_ref().map(LooseNumber::as_text).as_deref())
    }

    pub fn status(&self) -> TxStatus {
        TxStatus::parse(self.status.as_deref())
    }
}
