//! Vaults and the resources they protect.

use crate::model::timestamp::epoch_seconds;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A vault, as listed by `ListBackupVaults` and described by
/// `DescribeBackupVault`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BackupVaultListMember {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_vault_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_vault_arn: Option<String>,
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_key_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_request_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_recovery_points: Option<i64>,
}

fluent_setters!(BackupVaultListMember {
    value with_backup_vault_name => backup_vault_name: String,
    value with_backup_vault_arn => backup_vault_arn: String,
    value with_creation_date => creation_date: DateTime<Utc>,
    value with_encryption_key_arn => encryption_key_arn: String,
    value with_creator_request_id => creator_request_id: String,
    value with_number_of_recovery_points => number_of_recovery_points: i64,
});

/// A resource that has at least one recovery point.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProtectedResource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    /// Most recent backup of the resource.
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub last_backup_time: Option<DateTime<Utc>>,
}

fluent_setters!(ProtectedResource {
    value with_resource_arn => resource_arn: String,
    value with_resource_type => resource_type: String,
    value with_last_backup_time => last_backup_time: DateTime<Utc>,
});

record_display!(BackupVaultListMember, ProtectedResource);
