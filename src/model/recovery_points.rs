//! Recovery points and the lifecycle rules that move them to cold storage
//! and expire them.

use crate::model::enums::RecoveryPointStatus;
use crate::model::jobs::RecoveryPointCreator;
use crate::model::timestamp::epoch_seconds;
use crate::utils::error::{BackupError, Result};
use crate::utils::validation::Validate;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Minimum number of days a recovery point must stay in cold storage before
/// it can be deleted.
pub const MIN_COLD_STORAGE_DAYS: i64 = 90;

/// When a recovery point moves to cold storage and when it expires.
///
/// Both values are day counts from creation. Once a recovery point is in cold
/// storage it has to stay there for [`MIN_COLD_STORAGE_DAYS`], so
/// `delete_after_days` must exceed `move_to_cold_storage_after_days` by at
/// least that much. Construction does not check this; [`Validate`] does.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Lifecycle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub move_to_cold_storage_after_days: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_after_days: Option<i64>,
}

fluent_setters!(Lifecycle {
    value with_move_to_cold_storage_after_days => move_to_cold_storage_after_days: i64,
    value with_delete_after_days => delete_after_days: i64,
});

/// The concrete instants a [`Lifecycle`] resolves to for one recovery point.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CalculatedLifecycle {
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub move_to_cold_storage_at: Option<DateTime<Utc>>,
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub delete_at: Option<DateTime<Utc>>,
}

fluent_setters!(CalculatedLifecycle {
    value with_move_to_cold_storage_at => move_to_cold_storage_at: DateTime<Utc>,
    value with_delete_at => delete_at: DateTime<Utc>,
});

/// A recovery point as listed inside its vault.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecoveryPointByBackupVault {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovery_point_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_vault_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_vault_arn: Option<String>,
    /// Vault the point was copied from, for copies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_backup_vault_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<RecoveryPointCreator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iam_role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RecoveryPointStatus>,
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_size_in_bytes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calculated_lifecycle: Option<CalculatedLifecycle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle: Option<Lifecycle>,
    /// KMS key protecting the backup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_key_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_encrypted: Option<bool>,
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub last_restore_time: Option<DateTime<Utc>>,
}

fluent_setters!(RecoveryPointByBackupVault {
    value with_recovery_point_arn => recovery_point_arn: String,
    value with_backup_vault_name => backup_vault_name: String,
    value with_backup_vault_arn => backup_vault_arn: String,
    value with_source_backup_vault_arn => source_backup_vault_arn: String,
    value with_resource_arn => resource_arn: String,
    value with_resource_type => resource_type: String,
    value with_created_by => created_by: RecoveryPointCreator,
    value with_iam_role_arn => iam_role_arn: String,
    value with_status => status: RecoveryPointStatus,
    value with_creation_date => creation_date: DateTime<Utc>,
    value with_completion_date => completion_date: DateTime<Utc>,
    value with_backup_size_in_bytes => backup_size_in_bytes: i64,
    value with_calculated_lifecycle => calculated_lifecycle: CalculatedLifecycle,
    value with_lifecycle => lifecycle: Lifecycle,
    value with_encryption_key_arn => encryption_key_arn: String,
    value with_is_encrypted => is_encrypted: bool,
    value with_last_restore_time => last_restore_time: DateTime<Utc>,
});

/// A recovery point as listed for the resource it protects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecoveryPointByResource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovery_point_arn: Option<String>,
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RecoveryPointStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_key_arn: Option<String>,
    /// Size in bytes. Note the wire name differs from other records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_size_bytes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_vault_name: Option<String>,
}

fluent_setters!(RecoveryPointByResource {
    value with_recovery_point_arn => recovery_point_arn: String,
    value with_creation_date => creation_date: DateTime<Utc>,
    value with_status => status: RecoveryPointStatus,
    value with_encryption_key_arn => encryption_key_arn: String,
    value with_backup_size_bytes => backup_size_bytes: i64,
    value with_backup_vault_name => backup_vault_name: String,
});

record_display!(
    Lifecycle,
    CalculatedLifecycle,
    RecoveryPointByBackupVault,
    RecoveryPointByResource,
);

impl Validate for Lifecycle {
    fn validate(&self) -> Result<()> {
        if let Some(days) = self.move_to_cold_storage_after_days {
            if days < 1 {
                return Err(BackupError::invalid(
                    "move_to_cold_storage_after_days",
                    days,
                    "Value must be at least 1",
                ));
            }
        }
        if let Some(days) = self.delete_after_days {
            if days < 1 {
                return Err(BackupError::invalid(
                    "delete_after_days",
                    days,
                    "Value must be at least 1",
                ));
            }
        }
        if let (Some(cold), Some(delete)) =
            (self.move_to_cold_storage_after_days, self.delete_after_days)
        {
            if delete < cold.saturating_add(MIN_COLD_STORAGE_DAYS) {
                return Err(BackupError::invalid(
                    "delete_after_days",
                    delete,
                    format!(
                        "Must be at least {MIN_COLD_STORAGE_DAYS} days after move_to_cold_storage_after_days ({cold})"
                    ),
                ));
            }
        }
        Ok(())
    }
}
