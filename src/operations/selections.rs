//! Resource selection operations.

use crate::model::plans::{BackupSelection, BackupSelectionsListMember};
use crate::model::timestamp::epoch_seconds;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_page_size, validate_required_field, validate_required_text, Validate,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Input of `CreateBackupSelection`. Assigns resources to a plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateBackupSelectionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_plan_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_selection: Option<BackupSelection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_request_id: Option<String>,
}

fluent_setters!(CreateBackupSelectionRequest {
    value with_backup_plan_id => backup_plan_id: String,
    value with_backup_selection => backup_selection: BackupSelection,
    value with_creator_request_id => creator_request_id: String,
});

/// Output of `CreateBackupSelection`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateBackupSelectionResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_plan_id: Option<String>,
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,
}

fluent_setters!(CreateBackupSelectionResponse {
    value with_selection_id => selection_id: String,
    value with_backup_plan_id => backup_plan_id: String,
    value with_creation_date => creation_date: DateTime<Utc>,
});

impl Validate for CreateBackupSelectionRequest {
    fn validate(&self) -> Result<()> {
        validate_required_text("backup_plan_id", &self.backup_plan_id)?;
        validate_required_field("backup_selection", &self.backup_selection)?;
        if let Some(value) = &self.backup_selection {
            value.validate()?;
        }
        Ok(())
    }
}

/// Input of `DeleteBackupSelection`. Removes a selection from a plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteBackupSelectionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_plan_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection_id: Option<String>,
}

fluent_setters!(DeleteBackupSelectionRequest {
    value with_backup_plan_id => backup_plan_id: String,
    value with_selection_id => selection_id: String,
});

impl Validate for DeleteBackupSelectionRequest {
    fn validate(&self) -> Result<()> {
        validate_required_text("backup_plan_id", &self.backup_plan_id)?;
        validate_required_text("selection_id", &self.selection_id)?;
        Ok(())
    }
}

/// Input of `GetBackupSelection`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetBackupSelectionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_plan_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection_id: Option<String>,
}

fluent_setters!(GetBackupSelectionRequest {
    value with_backup_plan_id => backup_plan_id: String,
    value with_selection_id => selection_id: String,
});

/// Output of `GetBackupSelection`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetBackupSelectionResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_selection: Option<BackupSelection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_plan_id: Option<String>,
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_request_id: Option<String>,
}

fluent_setters!(GetBackupSelectionResponse {
    value with_backup_selection => backup_selection: BackupSelection,
    value with_selection_id => selection_id: String,
    value with_backup_plan_id => backup_plan_id: String,
    value with_creation_date => creation_date: DateTime<Utc>,
    value with_creator_request_id => creator_request_id: String,
});

impl Validate for GetBackupSelectionRequest {
    fn validate(&self) -> Result<()> {
        validate_required_text("backup_plan_id", &self.backup_plan_id)?;
        validate_required_text("selection_id", &self.selection_id)?;
        Ok(())
    }
}

/// Input of `ListBackupSelections`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListBackupSelectionsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_plan_id: Option<String>,
    /// Cursor returned by the previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Page size, 1 to 1000.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

fluent_setters!(ListBackupSelectionsRequest {
    value with_backup_plan_id => backup_plan_id: String,
    value with_next_token => next_token: String,
    value with_max_results => max_results: i32,
});

/// Output of `ListBackupSelections`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListBackupSelectionsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_selections_list: Option<Vec<BackupSelectionsListMember>>,
}

fluent_setters!(ListBackupSelectionsResponse {
    value with_next_token => next_token: String,
    list with_backup_selections_list => backup_selections_list: BackupSelectionsListMember,
});

impl Validate for ListBackupSelectionsRequest {
    fn validate(&self) -> Result<()> {
        validate_required_text("backup_plan_id", &self.backup_plan_id)?;
        validate_page_size("max_results", self.max_results)?;
        Ok(())
    }
}

record_display!(
    CreateBackupSelectionRequest,
    CreateBackupSelectionResponse,
    DeleteBackupSelectionRequest,
    GetBackupSelectionRequest,
    GetBackupSelectionResponse,
    ListBackupSelectionsRequest,
    ListBackupSelectionsResponse,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::plans::Condition;
    use crate::model::ConditionType;

    #[test]
    fn test_create_backup_selection_round_trips_conditions() {
        let request = CreateBackupSelectionRequest::default()
            .with_backup_plan_id("plan-1")
            .with_backup_selection(
                BackupSelection::default()
                    .with_selection_name("finance")
                    .with_iam_role_arn("arn:aws:iam::123456789012:role/BackupRole")
                    .with_list_of_tags([Condition::default()
                        .with_condition_type(ConditionType::StringEquals)
                        .with_condition_key("department")
                        .with_condition_value("finance")]),
            );

        let wire = serde_json::to_string(&request).unwrap();
        assert!(wire.contains(r#""ConditionType":"STRINGEQUALS""#));

        let decoded: CreateBackupSelectionRequest = serde_json::from_str(&wire).unwrap();
        assert_eq!(decoded, request);
        assert!(decoded.validate().is_ok());
    }

    #[test]
    fn test_delete_backup_selection_requires_both_ids() {
        let request = DeleteBackupSelectionRequest::default().with_backup_plan_id("plan-1");
        assert!(request.validate().is_err());
        assert!(request.with_selection_id("sel-1").validate().is_ok());
    }
}
