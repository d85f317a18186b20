use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::transaction::TransactionEvent;

/// Trait abstraction for whatever fetches the transaction list.
///
/// The dashboard core never talks to the network itself: an embedder
/// implements this for its API client (with its own retries and caching)
/// and hands it to [`TxDashboard::refresh`](crate::TxDashboard::refresh).
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait TransactionSource: Send + Sync {
    /// Human-readable name of this source (for logs/errors).
    fn name(&self) -> &str;

    /// Fetch the full, current list of transactions.
    async fn fetch_transactions(&self) -> Result<Vec<TransactionEvent>, CoreError>;
}
