//! Pure sync decision rules.
//!
//! Classification is a total, order-independent function of
//! (key, source timestamp, inventory); the deletion set is a plain set
//! difference. Nothing here touches the network or the store.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use ferry_core::{Inventory, ObjectKey};

/// What to do with one source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncAction {
    /// Key absent from the inventory.
    UploadNew,
    /// Key present and the source is strictly newer.
    UploadUpdated,
    /// Key present and the source is not newer.
    Skip,
}

/// Decide an action for one source file, in strict rule order:
/// absent → upload-new; strictly newer → upload-updated; otherwise skip.
///
/// The comparison is `>`, not `>=`: an identical timestamp is a no-op.
pub fn classify(
    key: &ObjectKey,
    source_last_modified: DateTime<Utc>,
    inventory: &Inventory,
) -> SyncAction {
    match inventory.last_modified(key) {
        None => SyncAction::UploadNew,
        Some(stored) if source_last_modified > stored => SyncAction::UploadUpdated,
        Some(_) => SyncAction::Skip,
    }
}

/// Inventory keys with no counterpart at the source, in inventory order.
///
/// `source_keys` must be derived from the full source listing — including
/// entries whose fetch later failed — so a transient fetch error can never
/// cause a deletion.
pub fn deletions(inventory: &Inventory, source_keys: &BTreeSet<ObjectKey>) -> Vec<ObjectKey> {
    inventory
        .keys()
        .filter(|key| !source_keys.contains(*key))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use ferry_core::RemoteObject;

    use super::*;

    fn t(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 21, hour, 0, 0).unwrap()
    }

    fn inventory(entries: &[(&str, DateTime<Utc>)]) -> Inventory {
        entries
            .iter()
            .map(|(key, last_modified)| RemoteObject {
                key: ObjectKey::from(*key),
                last_modified: *last_modified,
            })
            .collect()
    }

    #[test]
    fn absent_key_is_upload_new() {
        let inv = inventory(&[]);
        assert_eq!(
            classify(&ObjectKey::from("a.txt"), t(7), &inv),
            SyncAction::UploadNew
        );
    }

    #[test]
    fn strictly_newer_source_is_upload_updated() {
        let inv = inventory(&[("a.txt", t(7))]);
        assert_eq!(
            classify(&ObjectKey::from("a.txt"), t(8), &inv),
            SyncAction::UploadUpdated
        );
    }

    #[test]
    fn identical_timestamp_is_skip_not_update() {
        let inv = inventory(&[("a.txt", t(7))]);
        assert_eq!(
            classify(&ObjectKey::from("a.txt"), t(7), &inv),
            SyncAction::Skip
        );
    }

    #[test]
    fn older_source_is_skip() {
        let inv = inventory(&[("a.txt", t(7))]);
        assert_eq!(
            classify(&ObjectKey::from("a.txt"), t(6), &inv),
            SyncAction::Skip
        );
    }

    #[test]
    fn classification_is_order_independent_over_a_file_set() {
        let inv = inventory(&[("a.txt", t(7)), ("b.txt", t(7)), ("c.txt", t(7))]);
        let files = [
            ("a.txt", t(7), SyncAction::Skip),
            ("b.txt", t(9), SyncAction::UploadUpdated),
            ("d.txt", t(5), SyncAction::UploadNew),
        ];

        let forward: Vec<SyncAction> = files
            .iter()
            .map(|(key, ts, _)| classify(&ObjectKey::from(*key), *ts, &inv))
            .collect();
        let backward: Vec<SyncAction> = files
            .iter()
            .rev()
            .map(|(key, ts, _)| classify(&ObjectKey::from(*key), *ts, &inv))
            .collect();

        assert_eq!(forward, files.map(|(_, _, action)| action));
        let mut backward = backward;
        backward.reverse();
        assert_eq!(forward, backward);
    }

    #[test]
    fn deletion_set_is_inventory_minus_source() {
        let inv = inventory(&[("a.txt", t(7)), ("b.txt", t(7))]);
        let source: BTreeSet<ObjectKey> = [ObjectKey::from("a.txt")].into();
        assert_eq!(deletions(&inv, &source), vec![ObjectKey::from("b.txt")]);
    }

    #[test]
    fn no_deletions_when_source_covers_inventory() {
        let inv = inventory(&[("a.txt", t(7))]);
        let source: BTreeSet<ObjectKey> =
            [ObjectKey::from("a.txt"), ObjectKey::from("b.txt")].into();
        assert!(deletions(&inv, &source).is_empty());
    }

    #[test]
    fn empty_inventory_has_no_deletions() {
        let inv = inventory(&[]);
        let source = BTreeSet::new();
        assert!(deletions(&inv, &source).is_empty());
    }
}
