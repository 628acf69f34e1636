//! Recovery point and protected resource operations.

use crate::model::enums::StorageClass;
use crate::model::recovery_points::{
    CalculatedLifecycle, Lifecycle, RecoveryPointByBackupVault, RecoveryPointByResource,
};
use crate::model::timestamp::epoch_seconds;
use crate::model::vaults::ProtectedResource;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_optional_arn, validate_page_size, validate_required_text, Validate,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Input of `DeleteRecoveryPoint`. Deletes one recovery point from its vault.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteRecoveryPointRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_vault_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovery_point_arn: Option<String>,
}

fluent_setters!(DeleteRecoveryPointRequest {
    value with_backup_vault_name => backup_vault_name: String,
    value with_recovery_point_arn => recovery_point_arn: String,
});

impl Validate for DeleteRecoveryPointRequest {
    fn validate(&self) -> Result<()> {
        validate_required_text("backup_vault_name", &self.backup_vault_name)?;
        validate_required_text("recovery_point_arn", &self.recovery_point_arn)?;
        Ok(())
    }
}

/// Input of `DescribeRecoveryPoint`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeRecoveryPointRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_vault_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovery_point_arn: Option<String>,
}

fluent_setters!(DescribeRecoveryPointRequest {
    value with_backup_vault_name => backup_vault_name: String,
    value with_recovery_point_arn => recovery_point_arn: String,
});

/// Output of `DescribeRecoveryPoint`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeRecoveryPointResponse {
    #[serde(flatten)]
    pub recovery_point: RecoveryPointByBackupVault,
    /// Storage tier the point currently lives in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_class: Option<StorageClass>,
}

fluent_setters!(DescribeRecoveryPointResponse {
    value with_storage_class => storage_class: StorageClass,
});

impl Validate for DescribeRecoveryPointRequest {
    fn validate(&self) -> Result<()> {
        validate_required_text("backup_vault_name", &self.backup_vault_name)?;
        validate_required_text("recovery_point_arn", &self.recovery_point_arn)?;
        Ok(())
    }
}

/// Input of `GetRecoveryPointRestoreMetadata`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetRecoveryPointRestoreMetadataRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_vault_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovery_point_arn: Option<String>,
}

fluent_setters!(GetRecoveryPointRestoreMetadataRequest {
    value with_backup_vault_name => backup_vault_name: String,
    value with_recovery_point_arn => recovery_point_arn: String,
});

/// Output of `GetRecoveryPointRestoreMetadata`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetRecoveryPointRestoreMetadataResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_vault_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovery_point_arn: Option<String>,
    /// Parameters needed to restore the point; feed them to
    /// `StartRestoreJob`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restore_metadata: Option<BTreeMap<String, String>>,
}

fluent_setters!(GetRecoveryPointRestoreMetadataResponse {
    value with_backup_vault_arn => backup_vault_arn: String,
    value with_recovery_point_arn => recovery_point_arn: String,
    map with_restore_metadata, add_restore_metadata_entry, clear_restore_metadata_entries => restore_metadata: String,
});

impl Validate for GetRecoveryPointRestoreMetadataRequest {
    fn validate(&self) -> Result<()> {
        validate_required_text("backup_vault_name", &self.backup_vault_name)?;
        validate_required_text("recovery_point_arn", &self.recovery_point_arn)?;
        Ok(())
    }
}

/// Input of `ListRecoveryPointsByBackupVault`. Unset filters match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListRecoveryPointsByBackupVaultRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_vault_name: Option<String>,
    /// Cursor returned by the previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Page size, 1 to 1000.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by_resource_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by_resource_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by_backup_plan_id: Option<String>,
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub by_created_before: Option<DateTime<Utc>>,
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub by_created_after: Option<DateTime<Utc>>,
}

fluent_setters!(ListRecoveryPointsByBackupVaultRequest {
    value with_backup_vault_name => backup_vault_name: String,
    value with_next_token => next_token: String,
    value with_max_results => max_results: i32,
    value with_by_resource_arn => by_resource_arn: String,
    value with_by_resource_type => by_resource_type: String,
    value with_by_backup_plan_id => by_backup_plan_id: String,
    value with_by_created_before => by_created_before: DateTime<Utc>,
    value with_by_created_after => by_created_after: DateTime<Utc>,
});

/// Output of `ListRecoveryPointsByBackupVault`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListRecoveryPointsByBackupVaultResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovery_points: Option<Vec<RecoveryPointByBackupVault>>,
}

fluent_setters!(ListRecoveryPointsByBackupVaultResponse {
    value with_next_token => next_token: String,
    list with_recovery_points => recovery_points: RecoveryPointByBackupVault,
});

impl Validate for ListRecoveryPointsByBackupVaultRequest {
    fn validate(&self) -> Result<()> {
        validate_required_text("backup_vault_name", &self.backup_vault_name)?;
        validate_page_size("max_results", self.max_results)?;
        validate_optional_arn("by_resource_arn", &self.by_resource_arn)?;
        Ok(())
    }
}

/// Input of `ListRecoveryPointsByResource`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListRecoveryPointsByResourceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,
    /// Cursor returned by the previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Page size, 1 to 1000.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

fluent_setters!(ListRecoveryPointsByResourceRequest {
    value with_resource_arn => resource_arn: String,
    value with_next_token => next_token: String,
    value with_max_results => max_results: i32,
});

/// Output of `ListRecoveryPointsByResource`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListRecoveryPointsByResourceResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovery_points: Option<Vec<RecoveryPointByResource>>,
}

fluent_setters!(ListRecoveryPointsByResourceResponse {
    value with_next_token => next_token: String,
    list with_recovery_points => recovery_points: RecoveryPointByResource,
});

impl Validate for ListRecoveryPointsByResourceRequest {
    fn validate(&self) -> Result<()> {
        validate_required_text("resource_arn", &self.resource_arn)?;
        validate_optional_arn("resource_arn", &self.resource_arn)?;
        validate_page_size("max_results", self.max_results)?;
        Ok(())
    }
}

/// Input of `UpdateRecoveryPointLifecycle`.
///
/// The cold storage transition cannot change once a point is in cold storage;
/// only the service can tell, so this is not checked locally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateRecoveryPointLifecycleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_vault_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovery_point_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle: Option<Lifecycle>,
}

fluent_setters!(UpdateRecoveryPointLifecycleRequest {
    value with_backup_vault_name => backup_vault_name: String,
    value with_recovery_point_arn => recovery_point_arn: String,
    value with_lifecycle => lifecycle: Lifecycle,
});

/// Output of `UpdateRecoveryPointLifecycle`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateRecoveryPointLifecycleResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_vault_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovery_point_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle: Option<Lifecycle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calculated_lifecycle: Option<CalculatedLifecycle>,
}

fluent_setters!(UpdateRecoveryPointLifecycleResponse {
    value with_backup_vault_arn => backup_vault_arn: String,
    value with_recovery_point_arn => recovery_point_arn: String,
    value with_lifecycle => lifecycle: Lifecycle,
    value with_calculated_lifecycle => calculated_lifecycle: CalculatedLifecycle,
});

impl Validate for UpdateRecoveryPointLifecycleRequest {
    fn validate(&self) -> Result<()> {
        validate_required_text("backup_vault_name", &self.backup_vault_name)?;
        validate_required_text("recovery_point_arn", &self.recovery_point_arn)?;
        if let Some(value) = &self.lifecycle {
            value.validate()?;
        }
        Ok(())
    }
}

/// Input of `DescribeProtectedResource`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeProtectedResourceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,
}

fluent_setters!(DescribeProtectedResourceRequest {
    value with_resource_arn => resource_arn: String,
});

/// Output of `DescribeProtectedResource`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeProtectedResourceResponse {
    #[serde(flatten)]
    pub protected_resource: ProtectedResource,
}

impl Validate for DescribeProtectedResourceRequest {
    fn validate(&self) -> Result<()> {
        validate_required_text("resource_arn", &self.resource_arn)?;
        validate_optional_arn("resource_arn", &self.resource_arn)?;
        Ok(())
    }
}

/// Input of `ListProtectedResources`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListProtectedResourcesRequest {
    /// Cursor returned by the previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Page size, 1 to 1000.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

fluent_setters!(ListProtectedResourcesRequest {
    value with_next_token => next_token: String,
    value with_max_results => max_results: i32,
});

/// Output of `ListProtectedResources`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListProtectedResourcesResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<ProtectedResource>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

fluent_setters!(ListProtectedResourcesResponse {
    list with_results => results: ProtectedResource,
    value with_next_token => next_token: String,
});

impl Validate for ListProtectedResourcesRequest {
    fn validate(&self) -> Result<()> {
        validate_page_size("max_results", self.max_results)?;
        Ok(())
    }
}

record_display!(
    DeleteRecoveryPointRequest,
    DescribeRecoveryPointRequest,
    DescribeRecoveryPointResponse,
    GetRecoveryPointRestoreMetadataRequest,
    GetRecoveryPointRestoreMetadataResponse,
    ListRecoveryPointsByBackupVaultRequest,
    ListRecoveryPointsByBackupVaultResponse,
    ListRecoveryPointsByResourceRequest,
    ListRecoveryPointsByResourceResponse,
    UpdateRecoveryPointLifecycleRequest,
    UpdateRecoveryPointLifecycleResponse,
    DescribeProtectedResourceRequest,
    DescribeProtectedResourceResponse,
    ListProtectedResourcesRequest,
    ListProtectedResourcesResponse,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RecoveryPointStatus;

    #[test]
    fn test_describe_recovery_point_reads_storage_class() {
        let body = r#"{
            "RecoveryPointArn": "arn:aws:backup:us-east-1:123456789012:recovery-point:1",
            "Status": "PARTIAL",
            "IsEncrypted": true,
            "StorageClass": "COLD",
            "Lifecycle": {"MoveToColdStorageAfterDays": 30, "DeleteAfterDays": 365}
        }"#;

        let response: DescribeRecoveryPointResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.storage_class, Some(StorageClass::Cold));
        assert_eq!(response.recovery_point.status, Some(RecoveryPointStatus::Partial));
        assert_eq!(response.recovery_point.is_encrypted, Some(true));
        assert_eq!(
            response
                .recovery_point
                .lifecycle
                .as_ref()
                .and_then(|lifecycle| lifecycle.delete_after_days),
            Some(365)
        );
    }

    #[test]
    fn test_restore_metadata_is_redacted_in_display() {
        let response = GetRecoveryPointRestoreMetadataResponse::default()
            .with_recovery_point_arn("arn:aws:backup:us-east-1:123456789012:recovery-point:1")
            .with_restore_metadata([("encrypted", "false")]);

        assert_eq!(
            response.to_string(),
            "{RecoveryPointArn: arn:aws:backup:us-east-1:123456789012:recovery-point:1, \
             RestoreMetadata: ***Sensitive Data Redacted***}"
        );
    }

    #[test]
    fn test_update_lifecycle_enforces_cold_storage_minimum() {
        let request = UpdateRecoveryPointLifecycleRequest::default()
            .with_backup_vault_name("Default")
            .with_recovery_point_arn("arn:aws:backup:us-east-1:123456789012:recovery-point:1")
            .with_lifecycle(
                Lifecycle::default()
                    .with_move_to_cold_storage_after_days(1)
                    .with_delete_after_days(90),
            );

        assert!(request.validate().is_err());
    }
}
