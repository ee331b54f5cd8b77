//! Infrastructure implementations for the depot core.
//!
//! This crate owns the backing-store contract (`DepotStore`) and its
//! in-memory reference implementation. Domain crates stay pure; everything
//! that locks, persists, or commits lives here.

pub mod store;

pub use store::{DepotStore, InMemoryDepotStore};
