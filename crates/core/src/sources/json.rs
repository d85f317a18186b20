use async_trait::async_trait;
use serde::Deserialize;

use crate::errors::CoreError;
use crate::models::transaction::TransactionEvent;

use super::traits::TransactionSource;

/// Upstream payloads come either as a bare array or wrapped in an object.
#[derive(Deserialize)]
#[serde(untagged)]
enum Payload {
    List(Vec<TransactionEvent>),
    Wrapped { transactions: Vec<TransactionEvent> },
}

/// Parse an upstream transaction payload.
///
/// Accepts `[ {...}, ... ]` or `{ "transactions": [ {...}, ... ] }`.
/// Individual records are parsed leniently; only a payload that is not one
/// of those two shapes is an error.
pub fn parse_transactions(json: &str) -> Result<Vec<TransactionEvent>, CoreError> {
    let payload: Payload = serde_json::from_str(json).map_err(|e| {
        CoreError::Deserialization(format!("Unrecognised transaction payload: {e}"))
    })?;
    Ok(match payload {
        Payload::List(events) => events,
        Payload::Wrapped { transactions } => transactions,
    })
}

/// A source backed by a raw JSON payload, e.g. a cached API response.
#[derive(Debug, Clone)]
pub struct JsonSource {
    name: String,
    payload: String,
}

impl JsonSource {
    pub fn new(name: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            payload: payload.into(),
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl TransactionSource for JsonSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_transactions(&self) -> Result<Vec<TransactionEvent>, CoreError> {
        parse_transactions(&self.payload).map_err(|e| CoreError::Source {
            source_name: self.name.clone(),
            message: e.to_string(),
        })
    }
}
