//! Optimistic concurrency expectations for mutable records.

use crate::error::{StockError, StockResult};

/// Revision expectation attached to an update.
///
/// `Any` preserves last-writer-wins semantics; `Exact` opts into an
/// optimistic check that rejects the write when the caller's view is stale.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ExpectedRevision {
    /// Skip revision checking (last-writer-wins).
    Any,
    /// Require the record to be at an exact revision.
    Exact(u64),
}

impl ExpectedRevision {
    pub fn matches(self, actual: u64) -> bool {
        match self {
            ExpectedRevision::Any => true,
            ExpectedRevision::Exact(rev) => rev == actual,
        }
    }

    pub fn check(self, actual: u64) -> StockResult<()> {
        if self.matches(actual) {
            Ok(())
        } else {
            Err(StockError::conflict(format!(
                "stale revision (expected: {self:?}, actual: {actual})"
            )))
        }
    }
}
