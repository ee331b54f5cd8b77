use std::sync::Arc;

use depotstock_audit::AuditEntry;
use depotstock_core::{ExpectedRevision, ItemId, StockResult};
use depotstock_dispatch::DispatchRecord;
use depotstock_fuel::{FuelEvent, FuelTank};
use depotstock_inventory::{Category, InventoryItem};

/// Durable keyed store behind the depot components.
///
/// The store is the **transactional boundary**: every mutating method
/// commits the state change together with its audit entry, or not at all.
/// Decisions stay in the domain layer; implementations only hold locks,
/// apply already-decided data, and surface `StorageUnavailable` when the
/// backend cannot be reached.
///
/// ## Mutation semantics
///
/// - `insert_item` / `append_dispatch` take the decided record plus the
///   audit entry describing the mutation, and append the entry atomically
///   with the change.
/// - `update_item`, `remove_item`, and `fuel_transaction` are
///   read-modify-write primitives:
///   the `decide` closure observes the **live** state under the store's
///   write guard, so a check made inside it cannot race a concurrent writer.
///   If `decide` fails, nothing is written.
/// - Two concurrent `fuel_transaction` calls serialize; there is no lost
///   update and no observable intermediate balance.
///
/// ## Read semantics
///
/// Reads return snapshots and never block other reads. `list_items` reflects
/// insertion order; `fuel_events`, `list_dispatches`, and `audit_entries`
/// return storage (append) order; history views re-sort on the way out.
pub trait DepotStore: Send + Sync {
    /// Store a new item and its audit entry atomically.
    fn insert_item(
        &self,
        category: Category,
        item: InventoryItem,
        entry: AuditEntry,
    ) -> StockResult<()>;

    /// Replace an item through a read-modify-write decision.
    ///
    /// `expected` is checked against the stored revision before `decide`
    /// runs; `ExpectedRevision::Any` preserves last-writer-wins. Returns the
    /// stored replacement.
    fn update_item(
        &self,
        category: Category,
        id: ItemId,
        expected: ExpectedRevision,
        decide: &mut dyn FnMut(&InventoryItem) -> StockResult<(InventoryItem, AuditEntry)>,
    ) -> StockResult<InventoryItem>;

    /// Remove an item and append its audit entry atomically.
    ///
    /// `describe` builds the entry from the live item about to be removed.
    /// Returns the removed item.
    fn remove_item(
        &self,
        category: Category,
        id: ItemId,
        describe: &mut dyn FnMut(&InventoryItem) -> AuditEntry,
    ) -> StockResult<InventoryItem>;

    fn get_item(&self, category: Category, id: ItemId) -> StockResult<Option<InventoryItem>>;

    /// Snapshot of one category, in insertion order.
    fn list_items(&self, category: Category) -> StockResult<Vec<InventoryItem>>;

    /// Current tank state (read-only, never blocked by other reads).
    fn fuel_state(&self) -> StockResult<FuelTank>;

    /// Atomic read-modify-write on the fuel tank.
    ///
    /// `decide` observes the current state and returns the event to commit
    /// plus the audit entry describing it; the store applies the event,
    /// appends both records, and returns the new state. On error nothing
    /// changes: balance, fuel log, and audit trail stay exactly as before.
    fn fuel_transaction(
        &self,
        decide: &mut dyn FnMut(&FuelTank) -> StockResult<(FuelEvent, AuditEntry)>,
    ) -> StockResult<FuelTank>;

    /// Snapshot of the fuel event log in append order.
    fn fuel_events(&self) -> StockResult<Vec<FuelEvent>>;

    /// Append a dispatch record and its audit entry atomically.
    fn append_dispatch(&self, record: DispatchRecord, entry: AuditEntry) -> StockResult<()>;

    /// Snapshot of the dispatch log in append order.
    fn list_dispatches(&self) -> StockResult<Vec<DispatchRecord>>;

    /// Snapshot of the audit trail in append order.
    fn audit_entries(&self) -> StockResult<Vec<AuditEntry>>;

    fn audit_count(&self) -> StockResult<usize>;
}

impl<S> DepotStore for Arc<S>
where
    S: DepotStore + ?Sized,
{
    fn insert_item(
        &self,
        category: Category,
        item: InventoryItem,
        entry: AuditEntry,
    ) -> StockResult<()> {
        (**self).insert_item(category, item, entry)
    }

    fn update_item(
        &self,
        category: Category,
        id: ItemId,
        expected: ExpectedRevision,
        decide: &mut dyn FnMut(&InventoryItem) -> StockResult<(InventoryItem, AuditEntry)>,
    ) -> StockResult<InventoryItem> {
        (**self).update_item(category, id, expected, decide)
    }

    fn remove_item(
        &self,
        category: Category,
        id: ItemId,
        describe: &mut dyn FnMut(&InventoryItem) -> AuditEntry,
    ) -> StockResult<InventoryItem> {
        (**self).remove_item(category, id, describe)
    }

    fn get_item(&self, category: Category, id: ItemId) -> StockResult<Option<InventoryItem>> {
        (**self).get_item(category, id)
    }

    fn list_items(&self, category: Category) -> StockResult<Vec<InventoryItem>> {
        (**self).list_items(category)
    }

    fn fuel_state(&self) -> StockResult<FuelTank> {
        (**self).fuel_state()
    }

    fn fuel_transaction(
        &self,
        decide: &mut dyn FnMut(&FuelTank) -> StockResult<(FuelEvent, AuditEntry)>,
    ) -> StockResult<FuelTank> {
        (**self).fuel_transaction(decide)
    }

    fn fuel_events(&self) -> StockResult<Vec<FuelEvent>> {
        (**self).fuel_events()
    }

    fn append_dispatch(&self, record: DispatchRecord, entry: AuditEntry) -> StockResult<()> {
        (**self).append_dispatch(record, entry)
    }

    fn list_dispatches(&self) -> StockResult<Vec<DispatchRecord>> {
        (**self).list_dispatches()
    }

    fn audit_entries(&self) -> StockResult<Vec<AuditEntry>> {
        (**self).audit_entries()
    }

    fn audit_count(&self) -> StockResult<usize> {
        (**self).audit_count()
    }
}
