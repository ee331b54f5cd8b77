use chrono::{DateTime, Utc};
use core::str::FromStr;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use depotstock_core::{ActivityRecord, FuelEventId, StockError, StockResult};

/// Work shift a consumption is booked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shift {
    Day,
    Night,
}

impl Shift {
    pub fn as_str(&self) -> &'static str {
        match self {
            Shift::Day => "Day",
            Shift::Night => "Night",
        }
    }
}

impl core::fmt::Display for Shift {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Shift {
    type Err = StockError;

    /// Boundary parser for shift input; anything outside the recognized set
    /// is a validation failure.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Day" | "day" => Ok(Shift::Day),
            "Night" | "night" => Ok(Shift::Night),
            other => Err(StockError::validation(format!("unrecognized shift: {other}"))),
        }
    }
}

/// The shared diesel balance (singleton per deployment).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuelTank {
    total_liters: Decimal,
}

impl FuelTank {
    /// Tank with a known balance. Rejects a negative reading.
    pub fn new(total_liters: Decimal) -> StockResult<Self> {
        if total_liters < Decimal::ZERO {
            return Err(StockError::validation("fuel balance cannot be negative"));
        }
        Ok(Self { total_liters })
    }

    /// Empty tank, the initial state of a fresh deployment.
    pub fn empty() -> Self {
        Self {
            total_liters: Decimal::ZERO,
        }
    }

    pub fn total_liters(&self) -> Decimal {
        self.total_liters
    }
}

/// Command: draw fuel for a machine on a shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordConsumption {
    pub machine: String,
    pub shift: Shift,
    pub amount: Decimal,
    pub actor: String,
    pub occurred_at: DateTime<Utc>,
}

/// Command: override the balance after a refill or physical recount.
///
/// This is a full override, not a delta; it intentionally bypasses the
/// "can only decrease via consumption" discipline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetBalance {
    pub new_total: Decimal,
    pub actor: String,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FuelCommand {
    RecordConsumption(RecordConsumption),
    SetBalance(SetBalance),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum FuelEventKind {
    Consumption { machine: String, shift: Shift },
    ManualAdjustment,
}

/// One committed change to the tank balance. Append-only, never mutated.
///
/// `amount` is the positive draw for a consumption, and the signed delta
/// from the previous balance for a manual adjustment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuelEvent {
    pub id: FuelEventId,
    pub occurred_at: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: FuelEventKind,
    pub amount: Decimal,
    pub actor: String,
}

impl ActivityRecord for FuelEvent {
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

impl FuelTank {
    /// Decide the event for a command against the current balance.
    ///
    /// This must not mutate state; evolution is done through `apply`. The
    /// caller commits the decision atomically with the balance change.
    pub fn handle(&self, command: &FuelCommand) -> StockResult<FuelEvent> {
        match command {
            FuelCommand::RecordConsumption(cmd) => self.handle_consumption(cmd),
            FuelCommand::SetBalance(cmd) => self.handle_set_balance(cmd),
        }
    }

    /// Evolve the balance from a single event.
    pub fn apply(&mut self, event: &FuelEvent) {
        match event.kind {
            FuelEventKind::Consumption { .. } => {
                self.total_liters -= event.amount;
            }
            FuelEventKind::ManualAdjustment => {
                self.total_liters += event.amount;
            }
        }
    }

    fn handle_consumption(&self, cmd: &RecordConsumption) -> StockResult<FuelEvent> {
        if cmd.amount <= Decimal::ZERO {
            return Err(StockError::validation("consumption amount must be positive"));
        }
        if cmd.machine.trim().is_empty() {
            return Err(StockError::validation("machine cannot be empty"));
        }
        if cmd.amount > self.total_liters {
            return Err(StockError::insufficient_stock(cmd.amount, self.total_liters));
        }

        Ok(FuelEvent {
            id: FuelEventId::new(),
            occurred_at: cmd.occurred_at,
            kind: FuelEventKind::Consumption {
                machine: cmd.machine.clone(),
                shift: cmd.shift,
            },
            amount: cmd.amount,
            actor: cmd.actor.clone(),
        })
    }

    fn handle_set_balance(&self, cmd: &SetBalance) -> StockResult<FuelEvent> {
        if cmd.new_total < Decimal::ZERO {
            return Err(StockError::validation("fuel balance cannot be negative"));
        }

        Ok(FuelEvent {
            id: FuelEventId::new(),
            occurred_at: cmd.occurred_at,
            kind: FuelEventKind::ManualAdjustment,
            amount: cmd.new_total - self.total_liters,
            actor: cmd.actor.clone(),
        })
    }
}
