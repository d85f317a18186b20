use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::transaction::TransactionEvent;

use super::traits::TransactionSource;

/// A source serving a fixed, in-memory transaction list.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    events: Vec<TransactionEvent>,
}

impl StaticSource {
    pub fn new(events: Vec<TransactionEvent>) -> Self {
        Self { events }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl TransactionSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_transactions(&self) -> Result<Vec<TransactionEvent>, CoreError> {
        Ok(self.events.clone())
    }
}
