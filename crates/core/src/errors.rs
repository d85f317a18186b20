use thiserror::Error;

/// Unified error type for the entire tx-dashboard-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
///
/// Aggregation itself never fails: malformed transactions are skipped or
/// counted as zero, so nothing in here is produced by the chart service.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Serialization ───────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── File I/O (native only) ──────────────────────────────────────
    #[error("File I/O error: {0}")]
    FileIO(String),

    // ── Transaction sources ─────────────────────────────────────────
    #[error("Transaction source error ({source_name}): {message}")]
    Source {
        source_name: String,
        message: String,
    },

    // ── Configuration / input ───────────────────────────────────────
    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("Unknown chart period: {0}")]
    InvalidPeriod(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
