//! Job records: backup, copy and restore jobs and the plan provenance they
//! carry.

use crate::model::enums::{BackupJobState, CopyJobState, RestoreJobStatus};
use crate::model::timestamp::epoch_seconds;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Provenance of a recovery point or job: the plan and rule that produced it.
/// Absent when the job was started on demand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecoveryPointCreator {
    /// Uniquely identifies a backup plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_plan_id: Option<String>,
    /// ARN of the backup plan, e.g.
    /// `arn:aws:backup:us-east-1:123456789012:plan:8F81F553-...`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_plan_arn: Option<String>,
    /// Version id of the plan; at most 1,024 bytes long.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_plan_version: Option<String>,
    /// Uniquely identifies the rule used to schedule the backup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_rule_id: Option<String>,
}

fluent_setters!(RecoveryPointCreator {
    value with_backup_plan_id => backup_plan_id: String,
    value with_backup_plan_arn => backup_plan_arn: String,
    value with_backup_plan_version => backup_plan_version: String,
    value with_backup_rule_id => backup_rule_id: String,
});

/// A request to back up one resource, as reported by the service.
///
/// Jobs are started either by a backup plan rule (see [`created_by`]) or on
/// demand. Every member is optional on the wire; the service omits the ones
/// that do not apply to the job's current state.
///
/// [`created_by`]: BackupJob::created_by
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BackupJob {
    /// Account that owns the job.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    /// Uniquely identifies the job.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_job_id: Option<String>,
    /// Name of the vault the recovery point is stored in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_vault_name: Option<String>,
    /// ARN of the target vault.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_vault_arn: Option<String>,
    /// ARN of the recovery point produced by the job.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovery_point_arn: Option<String>,
    /// ARN of the protected resource. Format depends on the resource type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,
    /// When the job was created.
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,
    /// When the job finished.
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<DateTime<Utc>>,
    /// Current state of the job.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<BackupJobState>,
    /// Detailed message explaining the state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
    /// Estimated completion, as a percentage string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_done: Option<String>,
    /// Size of the backup in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_size_in_bytes: Option<i64>,
    /// Role used to create the recovery point.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iam_role_arn: Option<String>,
    /// Plan and rule that started the job.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<RecoveryPointCreator>,
    /// When the job is expected to finish.
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub expected_completion_date: Option<DateTime<Utc>>,
    /// Deadline for the job to start before it is cancelled.
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub start_by: Option<DateTime<Utc>>,
    /// Type of the protected resource, e.g. `EBS` or `RDS`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    /// Bytes transferred to the vault so far.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes_transferred: Option<i64>,
}

fluent_setters!(BackupJob {
    value with_account_id => account_id: String,
    value with_backup_job_id => backup_job_id: String,
    value with_backup_vault_name => backup_vault_name: String,
    value with_backup_vault_arn => backup_vault_arn: String,
    value with_recovery_point_arn => recovery_point_arn: String,
    value with_resource_arn => resource_arn: String,
    value with_creation_date => creation_date: DateTime<Utc>,
    value with_completion_date => completion_date: DateTime<Utc>,
    value with_state => state: BackupJobState,
    value with_status_message => status_message: String,
    value with_percent_done => percent_done: String,
    value with_backup_size_in_bytes => backup_size_in_bytes: i64,
    value with_iam_role_arn => iam_role_arn: String,
    value with_created_by => created_by: RecoveryPointCreator,
    value with_expected_completion_date => expected_completion_date: DateTime<Utc>,
    value with_start_by => start_by: DateTime<Utc>,
    value with_resource_type => resource_type: String,
    value with_bytes_transferred => bytes_transferred: i64,
});

/// A copy of a recovery point into another vault.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CopyJob {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    /// Uniquely identifies the copy job.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_job_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_backup_vault_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_recovery_point_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_backup_vault_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_recovery_point_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<CopyJobState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_size_in_bytes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iam_role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<RecoveryPointCreator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
}

fluent_setters!(CopyJob {
    value with_account_id => account_id: String,
    value with_copy_job_id => copy_job_id: String,
    value with_source_backup_vault_arn => source_backup_vault_arn: String,
    value with_source_recovery_point_arn => source_recovery_point_arn: String,
    value with_destination_backup_vault_arn => destination_backup_vault_arn: String,
    value with_destination_recovery_point_arn => destination_recovery_point_arn: String,
    value with_resource_arn => resource_arn: String,
    value with_creation_date => creation_date: DateTime<Utc>,
    value with_completion_date => completion_date: DateTime<Utc>,
    value with_state => state: CopyJobState,
    value with_status_message => status_message: String,
    value with_backup_size_in_bytes => backup_size_in_bytes: i64,
    value with_iam_role_arn => iam_role_arn: String,
    value with_created_by => created_by: RecoveryPointCreator,
    value with_resource_type => resource_type: String,
});

/// A restore job, as listed by `ListRestoreJobs` and described by
/// `DescribeRestoreJob`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RestoreJob {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restore_job_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovery_point_arn: Option<String>,
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RestoreJobStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_done: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_size_in_bytes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iam_role_arn: Option<String>,
    /// Estimated minutes until the restore finishes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_completion_time_minutes: Option<i64>,
    /// ARN of the resource the restore created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_resource_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
}

fluent_setters!(RestoreJob {
    value with_account_id => account_id: String,
    value with_restore_job_id => restore_job_id: String,
    value with_recovery_point_arn => recovery_point_arn: String,
    value with_creation_date => creation_date: DateTime<Utc>,
    value with_completion_date => completion_date: DateTime<Utc>,
    value with_status => status: RestoreJobStatus,
    value with_status_message => status_message: String,
    value with_percent_done => percent_done: String,
    value with_backup_size_in_bytes => backup_size_in_bytes: i64,
    value with_iam_role_arn => iam_role_arn: String,
    value with_expected_completion_time_minutes => expected_completion_time_minutes: i64,
    value with_created_resource_arn => created_resource_arn: String,
    value with_resource_type => resource_type: String,
});

record_display!(RecoveryPointCreator, BackupJob, CopyJob, RestoreJob);
