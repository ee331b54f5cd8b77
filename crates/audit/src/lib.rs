//! System-wide activity audit trail.
//!
//! Every successful mutation in the depot produces exactly one entry here.
//! Entries are write-once; the log is the forensic trail of who changed what.

pub mod entry;

pub use entry::{ActionKind, AuditEntry, AuditFilter};
