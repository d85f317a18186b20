use serde::{Deserialize, Serialize};

use super::period::Period;
use crate::errors::CoreError;

/// User-configurable dashboard settings.
///
/// Every field is optional in the JSON form; missing fields take their
/// defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    /// The chart period selected when the dashboard opens.
    pub default_period: Period,

    /// Code of the secondary currency revenue is reported in (e.g., "USD").
    pub currency: String,

    /// Code of the base currency volumes are reported in (e.g., "ETH").
    pub base_currency: String,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            default_period: Period::Week,
            currency: "USD".to_string(),
            base_currency: "ETH".to_string(),
        }
    }
}

impl DashboardSettings {
    /// Parse settings from a JSON document and validate them.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let settings: DashboardSettings = serde_json::from_str(json)?;
        settings.validated()
    }

    /// Load settings from a JSON file on disk (native only, not WASM).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Self, CoreError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize settings: {e}")))
    }

    /// Normalize currency codes to uppercase and reject malformed ones.
    /// Codes must be 2–10 ASCII alphanumerics (covers "USD" as well as "USDC").
    pub fn validated(mut self) -> Result<Self, CoreError> {
        self.currency = normalize_code("currency", &self.currency)?;
        self.base_currency = normalize_code("base_currency", &self.base_currency)?;
        Ok(self)
    }
}

fn normalize_code(field: &str, code: &str) -> Result<String, CoreError> {
    let trimmed = code.trim().to_uppercase();
    if !(2..=10).contains(&trimmed.len()) || !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(CoreError::ValidationError(format!(
            "Invalid {field} code '{code}': must be 2-10 ASCII letters or digits (e.g., USD, ETH)"
        )));
    }
    Ok(trimmed)
}
