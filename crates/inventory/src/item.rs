use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use depotstock_core::{ItemId, StockError, StockResult};

/// Independent inventory domain; each category has its own record store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Oils,
    Chemicals,
    Parts,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Oils, Category::Chemicals, Category::Parts];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Oils => "oils",
            Category::Chemicals => "chemicals",
            Category::Parts => "parts",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tracked stock item within one category.
///
/// `quantity` and `alert_threshold` are kept non-negative by the operations
/// below; `revision` increments on every accepted write and backs the
/// optimistic update check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: String,
    pub quantity: Decimal,
    /// Unit of measure, informational only (not convertible).
    pub unit: String,
    pub alert_threshold: Decimal,
    pub last_modified: DateTime<Utc>,
    /// Actor identity as handed to us; recorded verbatim, never verified.
    pub last_modified_by: String,
    pub revision: u64,
}

/// Input for creating an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub quantity: Decimal,
    pub unit: String,
    pub alert_threshold: Decimal,
}

/// Input for updating an item. Replaces fields wholesale; there is no
/// partial-field merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPatch {
    pub name: String,
    pub quantity: Decimal,
    pub unit: String,
    pub alert_threshold: Decimal,
}

fn validate_fields(name: &str, quantity: Decimal, alert_threshold: Decimal) -> StockResult<()> {
    if name.trim().is_empty() {
        return Err(StockError::validation("name cannot be empty"));
    }
    if quantity < Decimal::ZERO {
        return Err(StockError::validation("quantity cannot be negative"));
    }
    if alert_threshold < Decimal::ZERO {
        return Err(StockError::validation("alert threshold cannot be negative"));
    }
    Ok(())
}

impl NewItem {
    pub fn validate(&self) -> StockResult<()> {
        validate_fields(&self.name, self.quantity, self.alert_threshold)
    }

    /// Decide the stored item for this input, or reject it.
    pub fn into_item(
        self,
        id: ItemId,
        occurred_at: DateTime<Utc>,
        actor: impl Into<String>,
    ) -> StockResult<InventoryItem> {
        self.validate()?;
        Ok(InventoryItem {
            id,
            name: self.name,
            quantity: self.quantity,
            unit: self.unit,
            alert_threshold: self.alert_threshold,
            last_modified: occurred_at,
            last_modified_by: actor.into(),
            revision: 1,
        })
    }
}

impl ItemPatch {
    pub fn validate(&self) -> StockResult<()> {
        validate_fields(&self.name, self.quantity, self.alert_threshold)
    }

    /// Decide the replacement for `current`, or reject the patch.
    ///
    /// Identity is preserved; metadata is re-stamped and the revision bumped.
    pub fn apply_to(
        self,
        current: &InventoryItem,
        occurred_at: DateTime<Utc>,
        actor: impl Into<String>,
    ) -> StockResult<InventoryItem> {
        self.validate()?;
        Ok(InventoryItem {
            id: current.id,
            name: self.name,
            quantity: self.quantity,
            unit: self.unit,
            alert_threshold: self.alert_threshold,
            last_modified: occurred_at,
            last_modified_by: actor.into(),
            revision: current.revision + 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn test_time() -> DateTime<Utc> {
        Utc::now()
    }

    fn new_item(name: &str, quantity: Decimal, alert: Decimal) -> NewItem {
        NewItem {
            name: name.to_string(),
            quantity,
            unit: "L".to_string(),
            alert_threshold: alert,
        }
    }

    #[test]
    fn create_stamps_metadata_and_revision() {
        let at = test_time();
        let item = new_item("Hydraulic oil 46", dec!(120), dec!(30))
            .into_item(ItemId::new(), at, "Alice")
            .unwrap();
        assert_eq!(item.quantity, dec!(120));
        assert_eq!(item.last_modified, at);
        assert_eq!(item.last_modified_by, "Alice");
        assert_eq!(item.revision, 1);
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = new_item("   ", dec!(1), dec!(1))
            .into_item(ItemId::new(), test_time(), "Alice")
            .unwrap_err();
        assert!(matches!(err, StockError::Validation(_)));
    }

    #[test]
    fn negative_quantity_and_threshold_are_rejected() {
        for (qty, alert) in [(dec!(-1), dec!(0)), (dec!(0), dec!(-0.5))] {
            let err = new_item("Grease", qty, alert)
                .into_item(ItemId::new(), test_time(), "Alice")
                .unwrap_err();
            assert!(matches!(err, StockError::Validation(_)));
        }
    }

    #[test]
    fn patch_replaces_fields_and_bumps_revision() {
        let item = new_item("Bentonite", dec!(40), dec!(10))
            .into_item(ItemId::new(), test_time(), "Alice")
            .unwrap();

        let patch = ItemPatch {
            name: "Bentonite HD".to_string(),
            quantity: dec!(35.5),
            unit: "kg".to_string(),
            alert_threshold: dec!(12),
        };
        let updated = patch.apply_to(&item, test_time(), "Bob").unwrap();

        assert_eq!(updated.id, item.id);
        assert_eq!(updated.name, "Bentonite HD");
        assert_eq!(updated.quantity, dec!(35.5));
        assert_eq!(updated.last_modified_by, "Bob");
        assert_eq!(updated.revision, 2);
    }

    #[test]
    fn invalid_patch_leaves_nothing_to_apply() {
        let item = new_item("Bentonite", dec!(40), dec!(10))
            .into_item(ItemId::new(), test_time(), "Alice")
            .unwrap();
        let patch = ItemPatch {
            name: "Bentonite".to_string(),
            quantity: dec!(-3),
            unit: "kg".to_string(),
            alert_threshold: dec!(10),
        };
        assert!(matches!(
            patch.apply_to(&item, test_time(), "Bob"),
            Err(StockError::Validation(_))
        ));
    }

    proptest! {
        /// Property: after any sequence of accepted patches, quantity and
        /// alert threshold are non-negative.
        #[test]
        fn accepted_patches_preserve_non_negativity(
            steps in prop::collection::vec((-1_000_000i64..1_000_000i64, -1_000i64..1_000i64), 1..20)
        ) {
            let mut item = new_item("Drill rod", dec!(5), dec!(2))
                .into_item(ItemId::new(), test_time(), "Alice")
                .unwrap();

            for (qty_cents, alert_units) in steps {
                let patch = ItemPatch {
                    name: item.name.clone(),
                    quantity: Decimal::new(qty_cents, 2),
                    unit: item.unit.clone(),
                    alert_threshold: Decimal::from(alert_units),
                };
                if let Ok(updated) = patch.apply_to(&item, test_time(), "Alice") {
                    item = updated;
                }

                prop_assert!(item.quantity >= Decimal::ZERO);
                prop_assert!(item.alert_threshold >= Decimal::ZERO);
            }
        }
    }
}
