use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use depotstock_core::{ActivityRecord, DispatchId, StockError, StockResult};

/// One material outflow. Append-only, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchRecord {
    pub id: DispatchId,
    pub material: String,
    pub quantity: Decimal,
    pub destination: String,
    pub recipient: String,
    pub occurred_at: DateTime<Utc>,
    pub actor: String,
}

impl ActivityRecord for DispatchRecord {
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

/// Input for recording a dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDispatch {
    pub material: String,
    pub quantity: Decimal,
    pub destination: String,
    pub recipient: String,
}

impl NewDispatch {
    pub fn validate(&self) -> StockResult<()> {
        if self.material.trim().is_empty() {
            return Err(StockError::validation("material cannot be empty"));
        }
        if self.quantity <= Decimal::ZERO {
            return Err(StockError::validation("dispatch quantity must be positive"));
        }
        if self.destination.trim().is_empty() {
            return Err(StockError::validation("destination cannot be empty"));
        }
        if self.recipient.trim().is_empty() {
            return Err(StockError::validation("recipient cannot be empty"));
        }
        Ok(())
    }

    /// Decide the stored record for this input, or reject it.
    pub fn into_record(
        self,
        id: DispatchId,
        occurred_at: DateTime<Utc>,
        actor: impl Into<String>,
    ) -> StockResult<DispatchRecord> {
        self.validate()?;
        Ok(DispatchRecord {
            id,
            material: self.material,
            quantity: self.quantity,
            destination: self.destination,
            recipient: self.recipient,
            occurred_at,
            actor: actor.into(),
        })
    }
}
