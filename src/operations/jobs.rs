//! Backup, copy and restore job operations.

use crate::model::enums::{BackupJobState, CopyJobState, RestoreJobStatus};
use crate::model::jobs::{BackupJob, CopyJob, RestoreJob};
use crate::model::recovery_points::Lifecycle;
use crate::model::timestamp::epoch_seconds;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_optional_arn, validate_page_size, validate_required_field, validate_required_text,
    Validate,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Input of `DescribeBackupJob`. Looks up one backup job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeBackupJobRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_job_id: Option<String>,
}

fluent_setters!(DescribeBackupJobRequest {
    value with_backup_job_id => backup_job_id: String,
});

/// Output of `DescribeBackupJob`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeBackupJobResponse {
    #[serde(flatten)]
    pub backup_job: BackupJob,
}

impl Validate for DescribeBackupJobRequest {
    fn validate(&self) -> Result<()> {
        validate_required_text("backup_job_id", &self.backup_job_id)?;
        Ok(())
    }
}

/// Input of `DescribeCopyJob`. Looks up one copy job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeCopyJobRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_job_id: Option<String>,
}

fluent_setters!(DescribeCopyJobRequest {
    value with_copy_job_id => copy_job_id: String,
});

/// Output of `DescribeCopyJob`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeCopyJobResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_job: Option<CopyJob>,
}

fluent_setters!(DescribeCopyJobResponse {
    value with_copy_job => copy_job: CopyJob,
});

impl Validate for DescribeCopyJobRequest {
    fn validate(&self) -> Result<()> {
        validate_required_text("copy_job_id", &self.copy_job_id)?;
        Ok(())
    }
}

/// Input of `DescribeRestoreJob`. Looks up one restore job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeRestoreJobRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restore_job_id: Option<String>,
}

fluent_setters!(DescribeRestoreJobRequest {
    value with_restore_job_id => restore_job_id: String,
});

/// Output of `DescribeRestoreJob`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeRestoreJobResponse {
    #[serde(flatten)]
    pub restore_job: RestoreJob,
}

impl Validate for DescribeRestoreJobRequest {
    fn validate(&self) -> Result<()> {
        validate_required_text("restore_job_id", &self.restore_job_id)?;
        Ok(())
    }
}

/// Input of `ListBackupJobs`.
///
/// Every `by_*` member is an independent filter; unset means unfiltered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListBackupJobsRequest {
    /// Cursor returned by the previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Page size, 1 to 1000.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// Only jobs for this resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by_resource_arn: Option<String>,
    /// Only jobs in this state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by_state: Option<BackupJobState>,
    /// Only jobs targeting this vault.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by_backup_vault_name: Option<String>,
    /// Only jobs created before this instant.
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub by_created_before: Option<DateTime<Utc>>,
    /// Only jobs created after this instant.
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub by_created_after: Option<DateTime<Utc>>,
    /// Only jobs for this resource type, e.g. `EFS`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by_resource_type: Option<String>,
    /// Only jobs of this account; `*` for every account of the organization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by_account_id: Option<String>,
}

fluent_setters!(ListBackupJobsRequest {
    value with_next_token => next_token: String,
    value with_max_results => max_results: i32,
    value with_by_resource_arn => by_resource_arn: String,
    value with_by_state => by_state: BackupJobState,
    value with_by_backup_vault_name => by_backup_vault_name: String,
    value with_by_created_before => by_created_before: DateTime<Utc>,
    value with_by_created_after => by_created_after: DateTime<Utc>,
    value with_by_resource_type => by_resource_type: String,
    value with_by_account_id => by_account_id: String,
});

/// Output of `ListBackupJobs`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListBackupJobsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_jobs: Option<Vec<BackupJob>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

fluent_setters!(ListBackupJobsResponse {
    list with_backup_jobs => backup_jobs: BackupJob,
    value with_next_token => next_token: String,
});

impl Validate for ListBackupJobsRequest {
    fn validate(&self) -> Result<()> {
        validate_page_size("max_results", self.max_results)?;
        validate_optional_arn("by_resource_arn", &self.by_resource_arn)?;
        Ok(())
    }
}

/// Input of `ListCopyJobs`. Unset filters match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListCopyJobsRequest {
    /// Cursor returned by the previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Page size, 1 to 1000.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by_resource_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by_state: Option<CopyJobState>,
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub by_created_before: Option<DateTime<Utc>>,
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub by_created_after: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by_resource_type: Option<String>,
    /// Only copies into this vault.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by_destination_vault_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by_account_id: Option<String>,
}

fluent_setters!(ListCopyJobsRequest {
    value with_next_token => next_token: String,
    value with_max_results => max_results: i32,
    value with_by_resource_arn => by_resource_arn: String,
    value with_by_state => by_state: CopyJobState,
    value with_by_created_before => by_created_before: DateTime<Utc>,
    value with_by_created_after => by_created_after: DateTime<Utc>,
    value with_by_resource_type => by_resource_type: String,
    value with_by_destination_vault_arn => by_destination_vault_arn: String,
    value with_by_account_id => by_account_id: String,
});

/// Output of `ListCopyJobs`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListCopyJobsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_jobs: Option<Vec<CopyJob>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

fluent_setters!(ListCopyJobsResponse {
    list with_copy_jobs => copy_jobs: CopyJob,
    value with_next_token => next_token: String,
});

impl Validate for ListCopyJobsRequest {
    fn validate(&self) -> Result<()> {
        validate_page_size("max_results", self.max_results)?;
        validate_optional_arn("by_resource_arn", &self.by_resource_arn)?;
        validate_optional_arn("by_destination_vault_arn", &self.by_destination_vault_arn)?;
        Ok(())
    }
}

/// Input of `ListRestoreJobs`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListRestoreJobsRequest {
    /// Cursor returned by the previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Page size, 1 to 1000.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by_account_id: Option<String>,
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub by_created_before: Option<DateTime<Utc>>,
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub by_created_after: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by_status: Option<RestoreJobStatus>,
}

fluent_setters!(ListRestoreJobsRequest {
    value with_next_token => next_token: String,
    value with_max_results => max_results: i32,
    value with_by_account_id => by_account_id: String,
    value with_by_created_before => by_created_before: DateTime<Utc>,
    value with_by_created_after => by_created_after: DateTime<Utc>,
    value with_by_status => by_status: RestoreJobStatus,
});

/// Output of `ListRestoreJobs`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListRestoreJobsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restore_jobs: Option<Vec<RestoreJob>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

fluent_setters!(ListRestoreJobsResponse {
    list with_restore_jobs => restore_jobs: RestoreJob,
    value with_next_token => next_token: String,
});

impl Validate for ListRestoreJobsRequest {
    fn validate(&self) -> Result<()> {
        validate_page_size("max_results", self.max_results)?;
        Ok(())
    }
}

/// Input of `StartBackupJob`: an on-demand backup of one resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartBackupJobRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_vault_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iam_role_arn: Option<String>,
    /// Caller-chosen token; retries with the same token start the job once.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotency_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_window_minutes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complete_window_minutes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle: Option<Lifecycle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovery_point_tags: Option<BTreeMap<String, String>>,
}

fluent_setters!(StartBackupJobRequest {
    value with_backup_vault_name => backup_vault_name: String,
    value with_resource_arn => resource_arn: String,
    value with_iam_role_arn => iam_role_arn: String,
    value with_idempotency_token => idempotency_token: String,
    value with_start_window_minutes => start_window_minutes: i64,
    value with_complete_window_minutes => complete_window_minutes: i64,
    value with_lifecycle => lifecycle: Lifecycle,
    map with_recovery_point_tags, add_recovery_point_tags_entry, clear_recovery_point_tags_entries => recovery_point_tags: String,
});

/// Output of `StartBackupJob`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartBackupJobResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_job_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovery_point_arn: Option<String>,
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,
}

fluent_setters!(StartBackupJobResponse {
    value with_backup_job_id => backup_job_id: String,
    value with_recovery_point_arn => recovery_point_arn: String,
    value with_creation_date => creation_date: DateTime<Utc>,
});

impl Validate for StartBackupJobRequest {
    fn validate(&self) -> Result<()> {
        validate_required_text("backup_vault_name", &self.backup_vault_name)?;
        validate_required_text("resource_arn", &self.resource_arn)?;
        validate_required_text("iam_role_arn", &self.iam_role_arn)?;
        validate_optional_arn("resource_arn", &self.resource_arn)?;
        validate_optional_arn("iam_role_arn", &self.iam_role_arn)?;
        if let Some(value) = &self.lifecycle {
            value.validate()?;
        }
        Ok(())
    }
}

/// Input of `StartCopyJob`: a one-time copy of a recovery point.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartCopyJobRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_recovery_point_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_backup_vault_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_backup_vault_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iam_role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotency_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle: Option<Lifecycle>,
}

fluent_setters!(StartCopyJobRequest {
    value with_source_recovery_point_arn => source_recovery_point_arn: String,
    value with_source_backup_vault_name => source_backup_vault_name: String,
    value with_destination_backup_vault_arn => destination_backup_vault_arn: String,
    value with_iam_role_arn => iam_role_arn: String,
    value with_idempotency_token => idempotency_token: String,
    value with_lifecycle => lifecycle: Lifecycle,
});

/// Output of `StartCopyJob`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartCopyJobResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_job_id: Option<String>,
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,
}

fluent_setters!(StartCopyJobResponse {
    value with_copy_job_id => copy_job_id: String,
    value with_creation_date => creation_date: DateTime<Utc>,
});

impl Validate for StartCopyJobRequest {
    fn validate(&self) -> Result<()> {
        validate_required_text("source_recovery_point_arn", &self.source_recovery_point_arn)?;
        validate_required_text("source_backup_vault_name", &self.source_backup_vault_name)?;
        validate_required_text("destination_backup_vault_arn", &self.destination_backup_vault_arn)?;
        validate_required_text("iam_role_arn", &self.iam_role_arn)?;
        validate_optional_arn("source_recovery_point_arn", &self.source_recovery_point_arn)?;
        validate_optional_arn("destination_backup_vault_arn", &self.destination_backup_vault_arn)?;
        validate_optional_arn("iam_role_arn", &self.iam_role_arn)?;
        if let Some(value) = &self.lifecycle {
            value.validate()?;
        }
        Ok(())
    }
}

/// Input of `StartRestoreJob`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartRestoreJobRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovery_point_arn: Option<String>,
    /// Resource-type specific restore parameters, as returned by
    /// `GetRecoveryPointRestoreMetadata`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iam_role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotency_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
}

fluent_setters!(StartRestoreJobRequest {
    value with_recovery_point_arn => recovery_point_arn: String,
    map with_metadata, add_metadata_entry, clear_metadata_entries => metadata: String,
    value with_iam_role_arn => iam_role_arn: String,
    value with_idempotency_token => idempotency_token: String,
    value with_resource_type => resource_type: String,
});

/// Output of `StartRestoreJob`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartRestoreJobResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restore_job_id: Option<String>,
}

fluent_setters!(StartRestoreJobResponse {
    value with_restore_job_id => restore_job_id: String,
});

impl Validate for StartRestoreJobRequest {
    fn validate(&self) -> Result<()> {
        validate_required_text("recovery_point_arn", &self.recovery_point_arn)?;
        validate_required_field("metadata", &self.metadata)?;
        validate_required_text("iam_role_arn", &self.iam_role_arn)?;
        validate_optional_arn("recovery_point_arn", &self.recovery_point_arn)?;
        validate_optional_arn("iam_role_arn", &self.iam_role_arn)?;
        Ok(())
    }
}

/// Input of `StopBackupJob`. Cancels a running backup job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StopBackupJobRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_job_id: Option<String>,
}

fluent_setters!(StopBackupJobRequest {
    value with_backup_job_id => backup_job_id: String,
});

impl Validate for StopBackupJobRequest {
    fn validate(&self) -> Result<()> {
        validate_required_text("backup_job_id", &self.backup_job_id)?;
        Ok(())
    }
}

record_display!(
    DescribeBackupJobRequest,
    DescribeBackupJobResponse,
    DescribeCopyJobRequest,
    DescribeCopyJobResponse,
    DescribeRestoreJobRequest,
    DescribeRestoreJobResponse,
    ListBackupJobsRequest,
    ListBackupJobsResponse,
    ListCopyJobsRequest,
    ListCopyJobsResponse,
    ListRestoreJobsRequest,
    ListRestoreJobsResponse,
    StartBackupJobRequest,
    StartBackupJobResponse,
    StartCopyJobRequest,
    StartCopyJobResponse,
    StartRestoreJobRequest,
    StartRestoreJobResponse,
    StopBackupJobRequest,
);

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_describe_backup_job_response_is_flat_on_the_wire() {
        let body = r#"{
            "BackupJobId": "job-1",
            "State": "COMPLETED",
            "CreationDate": 1580000000.25,
            "CreatedBy": {"BackupPlanId": "plan-1"}
        }"#;

        let response: DescribeBackupJobResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.backup_job.backup_job_id.as_deref(), Some("job-1"));
        assert_eq!(response.backup_job.state, Some(BackupJobState::Completed));
        assert_eq!(
            response.backup_job.creation_date,
            Some(Utc.timestamp_millis_opt(1_580_000_000_250).unwrap())
        );
        assert_eq!(
            response
                .backup_job
                .created_by
                .as_ref()
                .and_then(|creator| creator.backup_plan_id.as_deref()),
            Some("plan-1")
        );
    }

    #[test]
    fn test_list_backup_jobs_filters_are_optional() {
        let request = ListBackupJobsRequest::default();
        assert_eq!(serde_json::to_string(&request).unwrap(), "{}");

        let request = request
            .with_by_state(BackupJobState::Failed)
            .with_max_results(50);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({ "ByState": "FAILED", "MaxResults": 50 })
        );
    }

    #[test]
    fn test_list_backup_jobs_rejects_oversized_page() {
        let request = ListBackupJobsRequest::default().with_max_results(1001);
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_start_backup_job_validates_lifecycle() {
        let request = StartBackupJobRequest::default()
            .with_backup_vault_name("Default")
            .with_resource_arn("arn:aws:ec2:us-east-1:123456789012:volume/vol-1")
            .with_iam_role_arn("arn:aws:iam::123456789012:role/BackupRole")
            .with_lifecycle(
                Lifecycle::default()
                    .with_move_to_cold_storage_after_days(10)
                    .with_delete_after_days(20),
            );

        assert!(request.validate().is_err());

        let request = request.with_lifecycle(Lifecycle::default().with_delete_after_days(20));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_start_restore_job_requires_metadata() {
        let mut request = StartRestoreJobRequest::default()
            .with_recovery_point_arn("arn:aws:ec2:us-east-1::snapshot/snap-1")
            .with_iam_role_arn("arn:aws:iam::123456789012:role/BackupRole");
        assert!(request.validate().is_err());

        request.add_metadata_entry("volumeType", "gp2").unwrap();
        assert!(request.validate().is_ok());
    }
}
