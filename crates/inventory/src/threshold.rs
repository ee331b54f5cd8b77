//! Low-stock threshold evaluation.

use crate::item::InventoryItem;

/// Whether an item is at or below its alert threshold.
///
/// The boundary is inclusive: a quantity exactly equal to the threshold is
/// low. This is the dashboard's trigger point for operator action and must
/// not be tightened to a strict comparison.
pub fn is_low(item: &InventoryItem) -> bool {
    item.quantity <= item.alert_threshold
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::NewItem;
    use chrono::Utc;
    use depotstock_core::ItemId;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn item(quantity: Decimal, alert: Decimal) -> InventoryItem {
        NewItem {
            name: "Gear oil".to_string(),
            quantity,
            unit: "L".to_string(),
            alert_threshold: alert,
        }
        .into_item(ItemId::new(), Utc::now(), "Alice")
        .unwrap()
    }

    #[test]
    fn below_threshold_is_low() {
        assert!(is_low(&item(dec!(2), dec!(5))));
    }

    #[test]
    fn equal_to_threshold_is_low() {
        assert!(is_low(&item(dec!(5), dec!(5))));
    }

    #[test]
    fn just_above_threshold_is_not_low() {
        assert!(!is_low(&item(dec!(5.01), dec!(5))));
    }

    #[test]
    fn zero_threshold_flags_only_empty_stock() {
        assert!(is_low(&item(dec!(0), dec!(0))));
        assert!(!is_low(&item(dec!(0.01), dec!(0))));
    }
}
