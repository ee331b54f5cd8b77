//! Append-only activity records.

use chrono::{DateTime, Utc};

/// A record in an append-only activity log.
///
/// Records are:
/// - **immutable** (treat them as facts)
/// - designed to be **append-only**
///
/// History views are derived by re-sorting snapshots, never by mutating the
/// stored sequence.
pub trait ActivityRecord {
    /// When the recorded action occurred (business time).
    fn occurred_at(&self) -> DateTime<Utc>;
}

/// Sort a snapshot of activity records newest-first.
///
/// Same-timestamp records keep reverse append order, so the latest append
/// still comes first.
pub fn newest_first<R: ActivityRecord>(mut records: Vec<R>) -> Vec<R> {
    records.reverse();
    records.sort_by_key(|r| core::cmp::Reverse(r.occurred_at()));
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    struct Stamp(DateTime<Utc>, u32);

    impl ActivityRecord for Stamp {
        fn occurred_at(&self) -> DateTime<Utc> {
            self.0
        }
    }

    #[test]
    fn newest_first_orders_descending_with_latest_append_winning_ties() {
        let t = |h| Utc.with_ymd_and_hms(2024, 3, 1, h, 0, 0).unwrap();
        let sorted = newest_first(vec![
            Stamp(t(8), 0),
            Stamp(t(12), 1),
            Stamp(t(12), 2),
            Stamp(t(10), 3),
        ]);
        let tags: Vec<u32> = sorted.iter().map(|s| s.1).collect();
        assert_eq!(tags, vec![2, 1, 3, 0]);
    }
}
