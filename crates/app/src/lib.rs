//! Application services for the depot stock ledger.
//!
//! Each service composes the domain crates with a `DepotStore` backend:
//! validation and decisions happen in the domain layer, the store commits
//! them atomically with their audit entries, and this crate stamps
//! timestamps, writes audit descriptions, and logs mutations.

pub mod audit_log;
pub mod dispatch_log;
pub mod fuel_ledger;
pub mod overview;
pub mod record_store;

pub use audit_log::AuditLog;
pub use dispatch_log::DispatchLog;
pub use fuel_ledger::FuelLedger;
pub use overview::{DepotSummary, Overview};
pub use record_store::RecordStore;

use depotstock_infra::DepotStore;
use depotstock_inventory::Category;

/// Facade bundling every service over one shared store.
///
/// The store handle is usually an `Arc<InMemoryDepotStore>` (or another
/// `DepotStore` impl); services are cheap views and can be created per call.
#[derive(Debug, Clone)]
pub struct Depot<S> {
    store: S,
}

impl<S> Depot<S>
where
    S: DepotStore + Clone,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Record store for one category.
    pub fn records(&self, category: Category) -> RecordStore<S> {
        RecordStore::new(self.store.clone(), category)
    }

    pub fn oils(&self) -> RecordStore<S> {
        self.records(Category::Oils)
    }

    pub fn chemicals(&self) -> RecordStore<S> {
        self.records(Category::Chemicals)
    }

    pub fn parts(&self) -> RecordStore<S> {
        self.records(Category::Parts)
    }

    pub fn fuel(&self) -> FuelLedger<S> {
        FuelLedger::new(self.store.clone())
    }

    pub fn dispatches(&self) -> DispatchLog<S> {
        DispatchLog::new(self.store.clone())
    }

    pub fn audit(&self) -> AuditLog<S> {
        AuditLog::new(self.store.clone())
    }

    pub fn overview(&self) -> Overview<S> {
        Overview::new(self.store.clone())
    }
}
