use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use depotstock_core::{ActivityRecord, AuditEntryId};

/// The kind of state-changing action an entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Add,
    Modify,
    Delete,
    Consumption,
    StockAdjustment,
    Dispatch,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Add => "add",
            ActionKind::Modify => "modify",
            ActionKind::Delete => "delete",
            ActionKind::Consumption => "consumption",
            ActionKind::StockAdjustment => "stock_adjustment",
            ActionKind::Dispatch => "dispatch",
        }
    }
}

impl core::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable record of one state-changing action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: AuditEntryId,
    pub occurred_at: DateTime<Utc>,
    pub kind: ActionKind,
    pub description: String,
    /// Actor identity as handed to us; recorded verbatim, never verified.
    pub actor: String,
}

impl AuditEntry {
    pub fn new(
        kind: ActionKind,
        description: impl Into<String>,
        actor: impl Into<String>,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: AuditEntryId::new(),
            occurred_at,
            kind,
            description: description.into(),
            actor: actor.into(),
        }
    }
}

impl ActivityRecord for AuditEntry {
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

/// Filter criteria for audit queries. All fields optional; `limit` caps the
/// newest-first result after filtering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditFilter {
    pub kind: Option<ActionKind>,
    pub actor: Option<String>,
    pub limit: Option<usize>,
}

impl AuditFilter {
    pub fn matches(&self, entry: &AuditEntry) -> bool {
        if let Some(kind) = self.kind {
            if entry.kind != kind {
                return false;
            }
        }
        if let Some(actor) = &self.actor {
            if &entry.actor != actor {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(kind: ActionKind, actor: &str) -> AuditEntry {
        AuditEntry::new(kind, "x", actor, Utc::now())
    }

    #[test]
    fn default_filter_matches_everything() {
        let filter = AuditFilter::default();
        assert!(filter.matches(&entry(ActionKind::Add, "Alice")));
        assert!(filter.matches(&entry(ActionKind::Consumption, "Bob")));
    }

    #[test]
    fn filter_narrows_by_kind_and_actor() {
        let filter = AuditFilter {
            kind: Some(ActionKind::Delete),
            actor: Some("Alice".to_string()),
            limit: None,
        };
        assert!(filter.matches(&entry(ActionKind::Delete, "Alice")));
        assert!(!filter.matches(&entry(ActionKind::Delete, "Bob")));
        assert!(!filter.matches(&entry(ActionKind::Add, "Alice")));
    }
}
