//! Backup vault operations: lifecycle, access policy and notifications.

use crate::model::enums::BackupVaultEvent;
use crate::model::timestamp::epoch_seconds;
use crate::model::vaults::BackupVaultListMember;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_backup_vault_name, validate_optional_arn, validate_page_size,
    validate_required_field, validate_required_text, Validate,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Input of `CreateBackupVault`.
///
/// Vault names should not carry sensitive data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateBackupVaultRequest {
    /// 2 to 50 letters, digits, hyphens or underscores.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_vault_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_vault_tags: Option<BTreeMap<String, String>>,
    /// KMS key used to encrypt the vault's recovery points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_key_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_request_id: Option<String>,
}

fluent_setters!(CreateBackupVaultRequest {
    value with_backup_vault_name => backup_vault_name: String,
    map with_backup_vault_tags, add_backup_vault_tags_entry, clear_backup_vault_tags_entries => backup_vault_tags: String,
    value with_encryption_key_arn => encryption_key_arn: String,
    value with_creator_request_id => creator_request_id: String,
});

/// Output of `CreateBackupVault`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateBackupVaultResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_vault_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_vault_arn: Option<String>,
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,
}

fluent_setters!(CreateBackupVaultResponse {
    value with_backup_vault_name => backup_vault_name: String,
    value with_backup_vault_arn => backup_vault_arn: String,
    value with_creation_date => creation_date: DateTime<Utc>,
});

impl Validate for CreateBackupVaultRequest {
    fn validate(&self) -> Result<()> {
        validate_required_text("backup_vault_name", &self.backup_vault_name)?;
        if let Some(name) = &self.backup_vault_name {
            validate_backup_vault_name("backup_vault_name", name)?;
        }
        validate_optional_arn("encryption_key_arn", &self.encryption_key_arn)?;
        Ok(())
    }
}

/// Input of `DeleteBackupVault`. The vault must be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteBackupVaultRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_vault_name: Option<String>,
}

fluent_setters!(DeleteBackupVaultRequest {
    value with_backup_vault_name => backup_vault_name: String,
});

impl Validate for DeleteBackupVaultRequest {
    fn validate(&self) -> Result<()> {
        validate_required_text("backup_vault_name", &self.backup_vault_name)?;
        Ok(())
    }
}

/// Input of `DeleteBackupVaultAccessPolicy`. Removes the resource policy of a vault.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteBackupVaultAccessPolicyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_vault_name: Option<String>,
}

fluent_setters!(DeleteBackupVaultAccessPolicyRequest {
    value with_backup_vault_name => backup_vault_name: String,
});

impl Validate for DeleteBackupVaultAccessPolicyRequest {
    fn validate(&self) -> Result<()> {
        validate_required_text("backup_vault_name", &self.backup_vault_name)?;
        Ok(())
    }
}

/// Input of `DeleteBackupVaultNotifications`. Turns off notifications of a vault.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteBackupVaultNotificationsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_vault_name: Option<String>,
}

fluent_setters!(DeleteBackupVaultNotificationsRequest {
    value with_backup_vault_name => backup_vault_name: String,
});

impl Validate for DeleteBackupVaultNotificationsRequest {
    fn validate(&self) -> Result<()> {
        validate_required_text("backup_vault_name", &self.backup_vault_name)?;
        Ok(())
    }
}

/// Input of `DescribeBackupVault`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeBackupVaultRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_vault_name: Option<String>,
}

fluent_setters!(DescribeBackupVaultRequest {
    value with_backup_vault_name => backup_vault_name: String,
});

/// Output of `DescribeBackupVault`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeBackupVaultResponse {
    #[serde(flatten)]
    pub backup_vault: BackupVaultListMember,
}

impl Validate for DescribeBackupVaultRequest {
    fn validate(&self) -> Result<()> {
        validate_required_text("backup_vault_name", &self.backup_vault_name)?;
        Ok(())
    }
}

/// Input of `GetBackupVaultAccessPolicy`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetBackupVaultAccessPolicyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_vault_name: Option<String>,
}

fluent_setters!(GetBackupVaultAccessPolicyRequest {
    value with_backup_vault_name => backup_vault_name: String,
});

/// Output of `GetBackupVaultAccessPolicy`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetBackupVaultAccessPolicyResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_vault_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_vault_arn: Option<String>,
    /// Access policy document, in JSON.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<String>,
}

fluent_setters!(GetBackupVaultAccessPolicyResponse {
    value with_backup_vault_name => backup_vault_name: String,
    value with_backup_vault_arn => backup_vault_arn: String,
    value with_policy => policy: String,
});

impl Validate for GetBackupVaultAccessPolicyRequest {
    fn validate(&self) -> Result<()> {
        validate_required_text("backup_vault_name", &self.backup_vault_name)?;
        Ok(())
    }
}

/// Input of `GetBackupVaultNotifications`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetBackupVaultNotificationsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_vault_name: Option<String>,
}

fluent_setters!(GetBackupVaultNotificationsRequest {
    value with_backup_vault_name => backup_vault_name: String,
});

/// Output of `GetBackupVaultNotifications`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetBackupVaultNotificationsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_vault_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_vault_arn: Option<String>,
    /// Topic the vault's events are published to.
    #[serde(rename = "SNSTopicArn", skip_serializing_if = "Option::is_none")]
    pub sns_topic_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_vault_events: Option<Vec<BackupVaultEvent>>,
}

fluent_setters!(GetBackupVaultNotificationsResponse {
    value with_backup_vault_name => backup_vault_name: String,
    value with_backup_vault_arn => backup_vault_arn: String,
    value with_sns_topic_arn => sns_topic_arn: String,
    list with_backup_vault_events => backup_vault_events: BackupVaultEvent,
});

impl Validate for GetBackupVaultNotificationsRequest {
    fn validate(&self) -> Result<()> {
        validate_required_text("backup_vault_name", &self.backup_vault_name)?;
        Ok(())
    }
}

/// Input of `ListBackupVaults`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListBackupVaultsRequest {
    /// Cursor returned by the previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Page size, 1 to 1000.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

fluent_setters!(ListBackupVaultsRequest {
    value with_next_token => next_token: String,
    value with_max_results => max_results: i32,
});

/// Output of `ListBackupVaults`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListBackupVaultsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_vault_list: Option<Vec<BackupVaultListMember>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

fluent_setters!(ListBackupVaultsResponse {
    list with_backup_vault_list => backup_vault_list: BackupVaultListMember,
    value with_next_token => next_token: String,
});

impl Validate for ListBackupVaultsRequest {
    fn validate(&self) -> Result<()> {
        validate_page_size("max_results", self.max_results)?;
        Ok(())
    }
}

/// Input of `PutBackupVaultAccessPolicy`. Sets the resource policy of a vault.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutBackupVaultAccessPolicyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_vault_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<String>,
}

fluent_setters!(PutBackupVaultAccessPolicyRequest {
    value with_backup_vault_name => backup_vault_name: String,
    value with_policy => policy: String,
});

impl Validate for PutBackupVaultAccessPolicyRequest {
    fn validate(&self) -> Result<()> {
        validate_required_text("backup_vault_name", &self.backup_vault_name)?;
        Ok(())
    }
}

/// Input of `PutBackupVaultNotifications`. Turns on notifications for the given events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutBackupVaultNotificationsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_vault_name: Option<String>,
    #[serde(rename = "SNSTopicArn", skip_serializing_if = "Option::is_none")]
    pub sns_topic_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_vault_events: Option<Vec<BackupVaultEvent>>,
}

fluent_setters!(PutBackupVaultNotificationsRequest {
    value with_backup_vault_name => backup_vault_name: String,
    value with_sns_topic_arn => sns_topic_arn: String,
    list with_backup_vault_events => backup_vault_events: BackupVaultEvent,
});

impl Validate for PutBackupVaultNotificationsRequest {
    fn validate(&self) -> Result<()> {
        validate_required_text("backup_vault_name", &self.backup_vault_name)?;
        validate_required_text("sns_topic_arn", &self.sns_topic_arn)?;
        validate_optional_arn("sns_topic_arn", &self.sns_topic_arn)?;
        validate_required_field("backup_vault_events", &self.backup_vault_events)?;
        Ok(())
    }
}

record_display!(
    CreateBackupVaultRequest,
    CreateBackupVaultResponse,
    DeleteBackupVaultRequest,
    DeleteBackupVaultAccessPolicyRequest,
    DeleteBackupVaultNotificationsRequest,
    DescribeBackupVaultRequest,
    DescribeBackupVaultResponse,
    GetBackupVaultAccessPolicyRequest,
    GetBackupVaultAccessPolicyResponse,
    GetBackupVaultNotificationsRequest,
    GetBackupVaultNotificationsResponse,
    ListBackupVaultsRequest,
    ListBackupVaultsResponse,
    PutBackupVaultAccessPolicyRequest,
    PutBackupVaultNotificationsRequest,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sns_topic_arn_keeps_its_wire_name() {
        let request = PutBackupVaultNotificationsRequest::default()
            .with_backup_vault_name("Default")
            .with_sns_topic_arn("arn:aws:sns:us-east-1:123456789012:backup-events")
            .with_backup_vault_events([
                BackupVaultEvent::BackupJobFailed,
                BackupVaultEvent::from("RESTORE_JOB_COMPLETED"),
            ]);

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "BackupVaultName": "Default",
                "SNSTopicArn": "arn:aws:sns:us-east-1:123456789012:backup-events",
                "BackupVaultEvents": ["BACKUP_JOB_FAILED", "RESTORE_JOB_COMPLETED"]
            })
        );
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_backup_vault_checks_name_pattern() {
        let request = CreateBackupVaultRequest::default().with_backup_vault_name("bad name!");
        assert!(request.validate().is_err());
        assert!(request.with_backup_vault_name("prod-vault").validate().is_ok());
    }

    #[test]
    fn test_describe_backup_vault_response_is_flat() {
        let body = r#"{"BackupVaultName": "Default", "NumberOfRecoveryPoints": 12}"#;
        let response: DescribeBackupVaultResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.backup_vault.number_of_recovery_points, Some(12));
        assert_eq!(
            response.to_string(),
            "{BackupVaultName: Default, NumberOfRecoveryPoints: 12}"
        );
    }
}
