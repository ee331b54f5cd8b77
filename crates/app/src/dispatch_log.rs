use chrono::Utc;

use depotstock_audit::{ActionKind, AuditEntry};
use depotstock_core::{newest_first, DispatchId, StockResult};
use depotstock_dispatch::{DispatchRecord, NewDispatch};
use depotstock_infra::DepotStore;

/// Append-only log of material leaving the depot.
///
/// A dispatch never touches record-store quantities; it is an outflow
/// record in its own right.
#[derive(Debug, Clone)]
pub struct DispatchLog<S> {
    store: S,
}

impl<S> DispatchLog<S>
where
    S: DepotStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Validate and append a dispatch, audited as an outflow.
    pub fn record(&self, input: NewDispatch, actor: &str) -> StockResult<DispatchRecord> {
        let now = Utc::now();
        let record = input.into_record(DispatchId::new(), now, actor)?;

        let entry = AuditEntry::new(
            ActionKind::Dispatch,
            format!(
                "{} - {} units to {}",
                record.material, record.quantity, record.destination
            ),
            actor,
            now,
        );
        self.store.append_dispatch(record.clone(), entry)?;

        tracing::info!(dispatch = %record.id, material = %record.material, "material dispatched");
        Ok(record)
    }

    /// Dispatch history, most recent first.
    pub fn list(&self) -> StockResult<Vec<DispatchRecord>> {
        Ok(newest_first(self.store.list_dispatches()?))
    }
}
