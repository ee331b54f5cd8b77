use std::collections::HashMap;
use std::sync::RwLock;

use depotstock_audit::AuditEntry;
use depotstock_core::{ExpectedRevision, ItemId, StockError, StockResult};
use depotstock_dispatch::DispatchRecord;
use depotstock_fuel::{FuelEvent, FuelTank};
use depotstock_inventory::{Category, InventoryItem};

use super::depot::DepotStore;

#[derive(Debug)]
struct FuelLog {
    tank: FuelTank,
    events: Vec<FuelEvent>,
}

/// In-memory depot store.
///
/// Intended for tests/dev and as the reference implementation of the
/// `DepotStore` atomicity contract. Not optimized for performance.
///
/// Lock order is fixed: the resource lock (items, fuel, or dispatches) is
/// taken first, then the audit lock, and both are held until the mutation
/// and its audit entry are committed. A mutation and its entry are therefore
/// never observable apart.
#[derive(Debug)]
pub struct InMemoryDepotStore {
    items: RwLock<HashMap<Category, Vec<InventoryItem>>>,
    fuel: RwLock<FuelLog>,
    dispatches: RwLock<Vec<DispatchRecord>>,
    audit: RwLock<Vec<AuditEntry>>,
}

impl Default for InMemoryDepotStore {
    fn default() -> Self {
        Self {
            items: RwLock::new(HashMap::new()),
            fuel: RwLock::new(FuelLog {
                tank: FuelTank::empty(),
                events: Vec::new(),
            }),
            dispatches: RwLock::new(Vec::new()),
            audit: RwLock::new(Vec::new()),
        }
    }
}

fn poisoned(_: impl core::fmt::Debug) -> StockError {
    StockError::storage_unavailable("lock poisoned")
}

impl InMemoryDepotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DepotStore for InMemoryDepotStore {
    fn insert_item(
        &self,
        category: Category,
        item: InventoryItem,
        entry: AuditEntry,
    ) -> StockResult<()> {
        let mut items = self.items.write().map_err(poisoned)?;
        let collection = items.entry(category).or_default();

        if collection.iter().any(|existing| existing.id == item.id) {
            return Err(StockError::conflict("item id already exists"));
        }

        let mut audit = self.audit.write().map_err(poisoned)?;
        collection.push(item);
        audit.push(entry);
        Ok(())
    }

    fn update_item(
        &self,
        category: Category,
        id: ItemId,
        expected: ExpectedRevision,
        decide: &mut dyn FnMut(&InventoryItem) -> StockResult<(InventoryItem, AuditEntry)>,
    ) -> StockResult<InventoryItem> {
        let mut items = self.items.write().map_err(poisoned)?;
        let collection = items.entry(category).or_default();

        let pos = collection
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(StockError::not_found)?;

        expected.check(collection[pos].revision)?;

        let (replacement, entry) = decide(&collection[pos])?;
        if replacement.id != id {
            return Err(StockError::validation(
                "replacement item id does not match target",
            ));
        }

        let mut audit = self.audit.write().map_err(poisoned)?;
        collection[pos] = replacement.clone();
        audit.push(entry);
        Ok(replacement)
    }

    fn remove_item(
        &self,
        category: Category,
        id: ItemId,
        describe: &mut dyn FnMut(&InventoryItem) -> AuditEntry,
    ) -> StockResult<InventoryItem> {
        let mut items = self.items.write().map_err(poisoned)?;
        let collection = items.entry(category).or_default();

        let pos = collection
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(StockError::not_found)?;

        let entry = describe(&collection[pos]);
        let mut audit = self.audit.write().map_err(poisoned)?;
        let removed = collection.remove(pos);
        audit.push(entry);
        Ok(removed)
    }

    fn get_item(&self, category: Category, id: ItemId) -> StockResult<Option<InventoryItem>> {
        let items = self.items.read().map_err(poisoned)?;
        Ok(items
            .get(&category)
            .and_then(|collection| collection.iter().find(|item| item.id == id).cloned()))
    }

    fn list_items(&self, category: Category) -> StockResult<Vec<InventoryItem>> {
        let items = self.items.read().map_err(poisoned)?;
        Ok(items.get(&category).cloned().unwrap_or_default())
    }

    fn fuel_state(&self) -> StockResult<FuelTank> {
        let fuel = self.fuel.read().map_err(poisoned)?;
        Ok(fuel.tank.clone())
    }

    fn fuel_transaction(
        &self,
        decide: &mut dyn FnMut(&FuelTank) -> StockResult<(FuelEvent, AuditEntry)>,
    ) -> StockResult<FuelTank> {
        let mut fuel = self.fuel.write().map_err(poisoned)?;

        // The decision observes the live balance under the write guard, so a
        // concurrent draw cannot invalidate the check between read and write.
        let (event, entry) = decide(&fuel.tank)?;

        let mut audit = self.audit.write().map_err(poisoned)?;
        fuel.tank.apply(&event);
        fuel.events.push(event);
        audit.push(entry);
        Ok(fuel.tank.clone())
    }

    fn fuel_events(&self) -> StockResult<Vec<FuelEvent>> {
        let fuel = self.fuel.read().map_err(poisoned)?;
        Ok(fuel.events.clone())
    }

    fn append_dispatch(&self, record: DispatchRecord, entry: AuditEntry) -> StockResult<()> {
        let mut dispatches = self.dispatches.write().map_err(poisoned)?;
        let mut audit = self.audit.write().map_err(poisoned)?;
        dispatches.push(record);
        audit.push(entry);
        Ok(())
    }

    fn list_dispatches(&self) -> StockResult<Vec<DispatchRecord>> {
        let dispatches = self.dispatches.read().map_err(poisoned)?;
        Ok(dispatches.clone())
    }

    fn audit_entries(&self) -> StockResult<Vec<AuditEntry>> {
        let audit = self.audit.read().map_err(poisoned)?;
        Ok(audit.clone())
    }

    fn audit_count(&self) -> StockResult<usize> {
        let audit = self.audit.read().map_err(poisoned)?;
        Ok(audit.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use depotstock_audit::ActionKind;
    use depotstock_fuel::{FuelCommand, RecordConsumption, SetBalance, Shift};
    use depotstock_inventory::NewItem;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn entry(kind: ActionKind) -> AuditEntry {
        AuditEntry::new(kind, "test", "Alice", Utc::now())
    }

    fn item(name: &str, quantity: Decimal) -> InventoryItem {
        NewItem {
            name: name.to_string(),
            quantity,
            unit: "L".to_string(),
            alert_threshold: dec!(5),
        }
        .into_item(ItemId::new(), Utc::now(), "Alice")
        .unwrap()
    }

    fn set_balance(store: &InMemoryDepotStore, total: Decimal) {
        store
            .fuel_transaction(&mut |tank: &FuelTank| {
                let event = tank.handle(&FuelCommand::SetBalance(SetBalance {
                    new_total: total,
                    actor: "Alice".to_string(),
                    occurred_at: Utc::now(),
                }))?;
                Ok((event, entry(ActionKind::StockAdjustment)))
            })
            .unwrap();
    }

    #[test]
    fn list_reflects_insertion_order() {
        let store = InMemoryDepotStore::new();
        for name in ["first", "second", "third"] {
            store
                .insert_item(Category::Oils, item(name, dec!(10)), entry(ActionKind::Add))
                .unwrap();
        }

        let names: Vec<String> = store
            .list_items(Category::Oils)
            .unwrap()
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn categories_are_independent() {
        let store = InMemoryDepotStore::new();
        store
            .insert_item(Category::Oils, item("oil", dec!(1)), entry(ActionKind::Add))
            .unwrap();

        assert!(store.list_items(Category::Chemicals).unwrap().is_empty());
        assert_eq!(store.list_items(Category::Oils).unwrap().len(), 1);
    }

    #[test]
    fn update_checks_revision_before_deciding() {
        let store = InMemoryDepotStore::new();
        let stored = item("grease", dec!(10));
        let id = stored.id;
        store
            .insert_item(Category::Oils, stored, entry(ActionKind::Add))
            .unwrap();

        let err = store
            .update_item(Category::Oils, id, ExpectedRevision::Exact(7), &mut |_| {
                panic!("decide must not run on a stale revision")
            })
            .unwrap_err();
        assert!(matches!(err, StockError::Conflict(_)));

        // Nothing committed: item untouched, only the insert audited.
        assert_eq!(store.get_item(Category::Oils, id).unwrap().unwrap().revision, 1);
        assert_eq!(store.audit_count().unwrap(), 1);
    }

    #[test]
    fn failed_decision_commits_nothing() {
        let store = InMemoryDepotStore::new();
        let stored = item("grease", dec!(10));
        let id = stored.id;
        store
            .insert_item(Category::Oils, stored, entry(ActionKind::Add))
            .unwrap();

        let err = store
            .update_item(Category::Oils, id, ExpectedRevision::Any, &mut |_| {
                Err(StockError::validation("rejected"))
            })
            .unwrap_err();
        assert!(matches!(err, StockError::Validation(_)));
        assert_eq!(store.audit_count().unwrap(), 1);
    }

    #[test]
    fn missing_items_are_not_found() {
        let store = InMemoryDepotStore::new();
        assert!(matches!(
            store.remove_item(Category::Parts, ItemId::new(), &mut |_| entry(ActionKind::Delete)),
            Err(StockError::NotFound)
        ));
        assert!(matches!(
            store.update_item(Category::Parts, ItemId::new(), ExpectedRevision::Any, &mut |c| {
                Ok((c.clone(), entry(ActionKind::Modify)))
            }),
            Err(StockError::NotFound)
        ));
        assert_eq!(store.audit_count().unwrap(), 0);
    }

    #[test]
    fn fuel_transaction_commits_all_three_effects() {
        let store = InMemoryDepotStore::new();
        set_balance(&store, dec!(1000));

        let tank = store
            .fuel_transaction(&mut |tank: &FuelTank| {
                let event = tank.handle(&FuelCommand::RecordConsumption(RecordConsumption {
                    machine: "Drill-1".to_string(),
                    shift: Shift::Day,
                    amount: dec!(300),
                    actor: "Alice".to_string(),
                    occurred_at: Utc::now(),
                }))?;
                Ok((event, entry(ActionKind::Consumption)))
            })
            .unwrap();

        assert_eq!(tank.total_liters(), dec!(700));
        assert_eq!(store.fuel_state().unwrap().total_liters(), dec!(700));
        assert_eq!(store.fuel_events().unwrap().len(), 2);
        assert_eq!(store.audit_count().unwrap(), 2);
    }

    #[test]
    fn rejected_fuel_transaction_leaves_no_trace() {
        let store = InMemoryDepotStore::new();
        set_balance(&store, dec!(1000));

        let err = store
            .fuel_transaction(&mut |tank: &FuelTank| {
                let event = tank.handle(&FuelCommand::RecordConsumption(RecordConsumption {
                    machine: "Drill-1".to_string(),
                    shift: Shift::Day,
                    amount: dec!(1500),
                    actor: "Alice".to_string(),
                    occurred_at: Utc::now(),
                }))?;
                Ok((event, entry(ActionKind::Consumption)))
            })
            .unwrap_err();

        assert!(matches!(err, StockError::InsufficientStock { .. }));
        assert_eq!(store.fuel_state().unwrap().total_liters(), dec!(1000));
        assert_eq!(store.fuel_events().unwrap().len(), 1);
        assert_eq!(store.audit_count().unwrap(), 1);
    }

    #[test]
    fn dispatch_append_is_audited() {
        let store = InMemoryDepotStore::new();
        let record = depotstock_dispatch::NewDispatch {
            material: "Casing".to_string(),
            quantity: dec!(2),
            destination: "Shaft B".to_string(),
            recipient: "Crew".to_string(),
        }
        .into_record(depotstock_core::DispatchId::new(), Utc::now(), "Alice")
        .unwrap();

        store
            .append_dispatch(record, entry(ActionKind::Dispatch))
            .unwrap();
        assert_eq!(store.list_dispatches().unwrap().len(), 1);
        assert_eq!(store.audit_count().unwrap(), 1);
    }
}
