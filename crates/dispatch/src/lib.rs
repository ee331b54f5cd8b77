//! Material dispatch domain module.
//!
//! Append-only records of material leaving the depot. A dispatch does not
//! touch any record store quantity; it is an outflow log in its own right.

pub mod record;

pub use record::{DispatchRecord, NewDispatch};
