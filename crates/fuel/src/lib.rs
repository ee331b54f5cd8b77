//! Fuel tank domain module.
//!
//! Business rules for the shared diesel balance, implemented purely as
//! deterministic domain logic (no IO, no storage). The atomic commit of a
//! decision lives in the backing store.

pub mod tank;

pub use tank::{
    FuelCommand, FuelEvent, FuelEventKind, FuelTank, RecordConsumption, SetBalance, Shift,
};
