//! `depotstock-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod id;
pub mod record;
pub mod revision;

pub use error::{StockError, StockResult};
pub use id::{AuditEntryId, DispatchId, FuelEventId, ItemId};
pub use record::{newest_first, ActivityRecord};
pub use revision::ExpectedRevision;
