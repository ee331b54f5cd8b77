use chrono::Utc;

use depotstock_audit::{ActionKind, AuditEntry};
use depotstock_core::{ExpectedRevision, ItemId, StockResult};
use depotstock_infra::DepotStore;
use depotstock_inventory::{Category, InventoryItem, ItemPatch, NewItem};

/// Keyed collection of inventory items for one category.
///
/// Every successful mutation commits exactly one audit entry with the state
/// change; a rejected input touches nothing.
#[derive(Debug, Clone)]
pub struct RecordStore<S> {
    store: S,
    category: Category,
}

impl<S> RecordStore<S>
where
    S: DepotStore,
{
    pub fn new(store: S, category: Category) -> Self {
        Self { store, category }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Validate and store a new item, audited as an addition.
    pub fn create(&self, input: NewItem, actor: &str) -> StockResult<InventoryItem> {
        let now = Utc::now();
        let item = input.into_item(ItemId::new(), now, actor)?;

        let entry = AuditEntry::new(
            ActionKind::Add,
            format!(
                "{} item added: {} - {} {}",
                self.category, item.name, item.quantity, item.unit
            ),
            actor,
            now,
        );
        self.store.insert_item(self.category, item.clone(), entry)?;

        tracing::info!(category = %self.category, item = %item.id, "inventory item added");
        Ok(item)
    }

    /// Replace an item's fields wholesale, audited as a modification.
    ///
    /// `ExpectedRevision::Any` keeps last-writer-wins semantics;
    /// `Exact(n)` rejects the write with a conflict when `n` is stale.
    pub fn update(
        &self,
        id: ItemId,
        patch: ItemPatch,
        expected: ExpectedRevision,
        actor: &str,
    ) -> StockResult<InventoryItem> {
        let now = Utc::now();
        let updated = self.store.update_item(self.category, id, expected, &mut |current| {
            let updated = patch.clone().apply_to(current, now, actor)?;
            let entry = AuditEntry::new(
                ActionKind::Modify,
                format!("{} item modified: {}", self.category, updated.name),
                actor,
                now,
            );
            Ok((updated, entry))
        })?;

        tracing::info!(category = %self.category, item = %updated.id, "inventory item updated");
        Ok(updated)
    }

    /// Remove an item, audited as a deletion. No soft-delete, no cascade.
    pub fn delete(&self, id: ItemId, actor: &str) -> StockResult<()> {
        let now = Utc::now();
        let removed = self.store.remove_item(self.category, id, &mut |item| {
            AuditEntry::new(
                ActionKind::Delete,
                format!("{} item deleted: {}", self.category, item.name),
                actor,
                now,
            )
        })?;

        tracing::info!(category = %self.category, item = %removed.id, "inventory item deleted");
        Ok(())
    }

    pub fn get(&self, id: ItemId) -> StockResult<Option<InventoryItem>> {
        self.store.get_item(self.category, id)
    }

    /// Snapshot of the category in insertion order.
    pub fn list(&self) -> StockResult<Vec<InventoryItem>> {
        self.store.list_items(self.category)
    }
}
