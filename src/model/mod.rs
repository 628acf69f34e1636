//! Record shapes shared by the AWS Backup operations.
//!
//! Every record is a plain value: all members are optional, unset members
//! are left off the wire, and equality is structural. Relationships between
//! records are carried as ARN strings; nothing here checks that a referenced
//! resource exists.

pub(crate) mod display;
pub mod enums;
pub mod jobs;
pub mod plans;
pub mod recovery_points;
pub mod service_error;
pub mod timestamp;
pub mod vaults;

use crate::utils::error::{BackupError, Result};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

pub use enums::{
    BackupJobState, BackupVaultEvent, ConditionType, CopyJobState, RecoveryPointStatus,
    RestoreJobStatus, StorageClass,
};
pub use jobs::{BackupJob, CopyJob, RecoveryPointCreator, RestoreJob};
pub use plans::{
    BackupPlan, BackupPlanInput, BackupPlanTemplatesListMember, BackupPlansListMember, BackupRule,
    BackupRuleInput, BackupSelection, BackupSelectionsListMember, Condition, CopyAction,
};
pub use recovery_points::{
    CalculatedLifecycle, Lifecycle, RecoveryPointByBackupVault, RecoveryPointByResource,
};
pub use service_error::{ServiceError, ServiceErrorCode};
pub use vaults::{BackupVaultListMember, ProtectedResource};

/// Key/value tags attached to plans, vaults and recovery points.
pub type TagMap = BTreeMap<String, String>;

/// Insert `key` into a lazily created map, refusing to overwrite.
///
/// On a duplicate the map is left exactly as it was.
pub(crate) fn insert_unique_entry<V>(
    map: &mut Option<BTreeMap<String, V>>,
    field: &str,
    key: String,
    value: V,
) -> Result<()> {
    match map.get_or_insert_with(BTreeMap::new).entry(key) {
        Entry::Occupied(existing) => Err(BackupError::DuplicateKey {
            field: field.to_string(),
            key: existing.key().clone(),
        }),
        Entry::Vacant(slot) => {
            slot.insert(value);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_unique_entry_creates_map_lazily() {
        let mut tags: Option<TagMap> = None;
        insert_unique_entry(&mut tags, "tags", "env".to_string(), "prod".to_string()).unwrap();

        assert_eq!(tags.unwrap().get("env").map(String::as_str), Some("prod"));
    }

    #[test]
    fn test_insert_unique_entry_rejects_duplicate_without_overwriting() {
        let mut tags: Option<TagMap> = None;
        insert_unique_entry(&mut tags, "tags", "env".to_string(), "prod".to_string()).unwrap();

        let err = insert_unique_entry(&mut tags, "tags", "env".to_string(), "dev".to_string())
            .unwrap_err();

        assert!(matches!(err, BackupError::DuplicateKey { ref key, .. } if key == "env"));
        assert_eq!(tags.unwrap().get("env").map(String::as_str), Some("prod"));
    }
}
