use depotstock_audit::{AuditEntry, AuditFilter};
use depotstock_core::{newest_first, StockResult};
use depotstock_infra::DepotStore;

/// Read-only view over the system-wide audit trail.
///
/// Entries are appended by the store as part of each mutation; consumers
/// can only list and count them.
#[derive(Debug, Clone)]
pub struct AuditLog<S> {
    store: S,
}

impl<S> AuditLog<S>
where
    S: DepotStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Matching entries, most recent first, capped by the filter's limit.
    pub fn list(&self, filter: &AuditFilter) -> StockResult<Vec<AuditEntry>> {
        let matching = newest_first(self.store.audit_entries()?)
            .into_iter()
            .filter(|entry| filter.matches(entry));

        Ok(match filter.limit {
            Some(limit) => matching.take(limit).collect(),
            None => matching.collect(),
        })
    }

    pub fn count(&self) -> StockResult<usize> {
        self.store.audit_count()
    }
}
