use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use depotstock_core::StockResult;
use depotstock_infra::DepotStore;
use depotstock_inventory::{is_low, Category, InventoryItem};

/// Headline numbers for the overview screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepotSummary {
    pub oils_count: usize,
    pub chemicals_count: usize,
    pub parts_count: usize,
    pub diesel_balance: Decimal,
    pub low_stock_count: usize,
    pub activity_count: usize,
}

/// Cross-category alert view and summary counts.
///
/// A stateless fan-out over the read APIs, recomputed fully on every call.
/// No cache, no incremental index: the datasets are small and staleness is
/// unacceptable for an alert view.
#[derive(Debug, Clone)]
pub struct Overview<S> {
    store: S,
}

impl<S> Overview<S>
where
    S: DepotStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Items at or below their alert threshold, keyed by source category.
    /// Categories with nothing low are omitted.
    pub fn low_stock(&self) -> StockResult<BTreeMap<Category, Vec<InventoryItem>>> {
        let mut low_stock = BTreeMap::new();
        for category in Category::ALL {
            let low: Vec<InventoryItem> = self
                .store
                .list_items(category)?
                .into_iter()
                .filter(is_low)
                .collect();
            if !low.is_empty() {
                low_stock.insert(category, low);
            }
        }
        Ok(low_stock)
    }

    pub fn summary(&self) -> StockResult<DepotSummary> {
        let mut counts = BTreeMap::new();
        let mut low_stock_count = 0;
        for category in Category::ALL {
            let items = self.store.list_items(category)?;
            low_stock_count += items.iter().filter(|item| is_low(item)).count();
            counts.insert(category, items.len());
        }

        Ok(DepotSummary {
            oils_count: counts[&Category::Oils],
            chemicals_count: counts[&Category::Chemicals],
            parts_count: counts[&Category::Parts],
            diesel_balance: self.store.fuel_state()?.total_liters(),
            low_stock_count,
            activity_count: self.store.audit_count()?,
        })
    }
}
