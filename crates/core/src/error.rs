//! Stock ledger error model.

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type used across the depot components.
pub type StockResult<T> = Result<T, StockError>;

/// Error surfaced by stock ledger operations.
///
/// Keep this focused on the failures a caller must distinguish (validation,
/// missing records, business-rule rejections, backend availability). UI
/// concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StockError {
    /// A value failed validation (malformed or out-of-range input).
    /// Caller's fault; never retried automatically.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A referenced record does not exist.
    #[error("not found")]
    NotFound,

    /// A fuel draw was rejected because the balance does not cover it.
    /// This is the one state-dependent rejection in the system.
    #[error("insufficient stock: requested {requested} L, available {available} L")]
    InsufficientStock {
        requested: Decimal,
        available: Decimal,
    },

    /// An optimistic revision check failed (stale caller revision).
    #[error("conflict: {0}")]
    Conflict(String),

    /// The backing store could not be reached. May be retried by the caller
    /// with backoff; the core itself never retries a non-idempotent write.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl StockError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn insufficient_stock(requested: Decimal, available: Decimal) -> Self {
        Self::InsufficientStock {
            requested,
            available,
        }
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn storage_unavailable(msg: impl Into<String>) -> Self {
        Self::StorageUnavailable(msg.into())
    }
}
