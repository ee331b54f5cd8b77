use chrono::Utc;
use rust_decimal::Decimal;

use depotstock_audit::{ActionKind, AuditEntry};
use depotstock_core::{newest_first, StockError, StockResult};
use depotstock_fuel::{FuelCommand, FuelEvent, RecordConsumption, SetBalance, Shift};
use depotstock_infra::DepotStore;

/// The shared diesel balance and its consumption/adjustment history.
///
/// Consumption is the one place where a request can be rejected because of
/// *current state* rather than malformed input, so every balance change runs
/// through the store's atomic read-modify-write: the decision sees the live
/// balance and commits together with its fuel event and audit entry, or not
/// at all.
#[derive(Debug, Clone)]
pub struct FuelLedger<S> {
    store: S,
}

impl<S> FuelLedger<S>
where
    S: DepotStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Current balance in liters.
    pub fn balance(&self) -> StockResult<Decimal> {
        Ok(self.store.fuel_state()?.total_liters())
    }

    /// Draw fuel for a machine on a shift. Returns the new balance.
    pub fn record_consumption(
        &self,
        machine: &str,
        shift: Shift,
        amount: Decimal,
        actor: &str,
    ) -> StockResult<Decimal> {
        let now = Utc::now();
        let result = self.store.fuel_transaction(&mut |tank| {
            let event = tank.handle(&FuelCommand::RecordConsumption(RecordConsumption {
                machine: machine.to_string(),
                shift,
                amount,
                actor: actor.to_string(),
                occurred_at: now,
            }))?;

            let mut after = tank.clone();
            after.apply(&event);
            let entry = AuditEntry::new(
                ActionKind::Consumption,
                format!(
                    "{machine} - {amount} L (new balance: {} L)",
                    after.total_liters()
                ),
                actor,
                now,
            );
            Ok((event, entry))
        });

        match result {
            Ok(tank) => {
                tracing::info!(machine, %shift, %amount, balance = %tank.total_liters(), "fuel consumption recorded");
                Ok(tank.total_liters())
            }
            Err(err) => {
                if let StockError::InsufficientStock { requested, available } = &err {
                    tracing::warn!(machine, %requested, %available, "fuel draw rejected");
                }
                Err(err)
            }
        }
    }

    /// Override the balance after a refill or physical recount. Returns the
    /// new balance; the recorded event carries the signed delta.
    pub fn set_balance(&self, new_total: Decimal, actor: &str) -> StockResult<Decimal> {
        let now = Utc::now();
        let tank = self.store.fuel_transaction(&mut |tank| {
            let event = tank.handle(&FuelCommand::SetBalance(SetBalance {
                new_total,
                actor: actor.to_string(),
                occurred_at: now,
            }))?;

            let entry = AuditEntry::new(
                ActionKind::StockAdjustment,
                format!("fuel balance set to {new_total} L"),
                actor,
                now,
            );
            Ok((event, entry))
        })?;

        tracing::info!(balance = %tank.total_liters(), "fuel balance adjusted");
        Ok(tank.total_liters())
    }

    /// Consumption/adjustment history, most recent first. A derived,
    /// re-sorted view, not the storage order.
    pub fn history(&self) -> StockResult<Vec<FuelEvent>> {
        Ok(newest_first(self.store.fuel_events()?))
    }
}
