//! Backup plan operations: create, read, version, template and delete.

use crate::model::plans::{
    BackupPlan, BackupPlanInput, BackupPlanTemplatesListMember, BackupPlansListMember,
};
use crate::model::timestamp::epoch_seconds;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_page_size, validate_required_field, validate_required_text, Validate,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Input of `CreateBackupPlan`.
///
/// Creating a plan that already exists fails with `AlreadyExistsException`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateBackupPlanRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_plan: Option<BackupPlanInput>,
    /// Tags assigned to the plan itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_plan_tags: Option<BTreeMap<String, String>>,
    /// Idempotency token; a retried create with the same id returns the
    /// existing plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_request_id: Option<String>,
}

fluent_setters!(CreateBackupPlanRequest {
    value with_backup_plan => backup_plan: BackupPlanInput,
    map with_backup_plan_tags, add_backup_plan_tags_entry, clear_backup_plan_tags_entries => backup_plan_tags: String,
    value with_creator_request_id => creator_request_id: String,
});

/// Output of `CreateBackupPlan`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateBackupPlanResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_plan_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_plan_arn: Option<String>,
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,
    /// Unique, randomly generated version id of the plan. It cannot be edited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_id: Option<String>,
}

fluent_setters!(CreateBackupPlanResponse {
    value with_backup_plan_id => backup_plan_id: String,
    value with_backup_plan_arn => backup_plan_arn: String,
    value with_creation_date => creation_date: DateTime<Utc>,
    value with_version_id => version_id: String,
});

impl Validate for CreateBackupPlanRequest {
    fn validate(&self) -> Result<()> {
        validate_required_field("backup_plan", &self.backup_plan)?;
        if let Some(value) = &self.backup_plan {
            value.validate()?;
        }
        Ok(())
    }
}

/// Input of `DeleteBackupPlan`. Deletes the current version of a plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteBackupPlanRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_plan_id: Option<String>,
}

fluent_setters!(DeleteBackupPlanRequest {
    value with_backup_plan_id => backup_plan_id: String,
});

/// Output of `DeleteBackupPlan`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteBackupPlanResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_plan_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_plan_arn: Option<String>,
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub deletion_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_id: Option<String>,
}

fluent_setters!(DeleteBackupPlanResponse {
    value with_backup_plan_id => backup_plan_id: String,
    value with_backup_plan_arn => backup_plan_arn: String,
    value with_deletion_date => deletion_date: DateTime<Utc>,
    value with_version_id => version_id: String,
});

impl Validate for DeleteBackupPlanRequest {
    fn validate(&self) -> Result<()> {
        validate_required_text("backup_plan_id", &self.backup_plan_id)?;
        Ok(())
    }
}

/// Input of `ExportBackupPlanTemplate`. Exports a plan as a JSON template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExportBackupPlanTemplateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_plan_id: Option<String>,
}

fluent_setters!(ExportBackupPlanTemplateRequest {
    value with_backup_plan_id => backup_plan_id: String,
});

/// Output of `ExportBackupPlanTemplate`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExportBackupPlanTemplateResponse {
    /// The plan template as a JSON document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_plan_template_json: Option<String>,
}

fluent_setters!(ExportBackupPlanTemplateResponse {
    value with_backup_plan_template_json => backup_plan_template_json: String,
});

impl Validate for ExportBackupPlanTemplateRequest {
    fn validate(&self) -> Result<()> {
        validate_required_text("backup_plan_id", &self.backup_plan_id)?;
        Ok(())
    }
}

/// Input of `GetBackupPlan`. Reads a plan, optionally at a given version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetBackupPlanRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_plan_id: Option<String>,
    /// Defaults to the latest version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_id: Option<String>,
}

fluent_setters!(GetBackupPlanRequest {
    value with_backup_plan_id => backup_plan_id: String,
    value with_version_id => version_id: String,
});

/// Output of `GetBackupPlan`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetBackupPlanResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_plan: Option<BackupPlan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_plan_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_plan_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_request_id: Option<String>,
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub deletion_date: Option<DateTime<Utc>>,
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub last_execution_date: Option<DateTime<Utc>>,
}

fluent_setters!(GetBackupPlanResponse {
    value with_backup_plan => backup_plan: BackupPlan,
    value with_backup_plan_id => backup_plan_id: String,
    value with_backup_plan_arn => backup_plan_arn: String,
    value with_version_id => version_id: String,
    value with_creator_request_id => creator_request_id: String,
    value with_creation_date => creation_date: DateTime<Utc>,
    value with_deletion_date => deletion_date: DateTime<Utc>,
    value with_last_execution_date => last_execution_date: DateTime<Utc>,
});

impl Validate for GetBackupPlanRequest {
    fn validate(&self) -> Result<()> {
        validate_required_text("backup_plan_id", &self.backup_plan_id)?;
        Ok(())
    }
}

/// Input of `GetBackupPlanFromJSON`. Parses a plan template document into a plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetBackupPlanFromJsonRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_plan_template_json: Option<String>,
}

fluent_setters!(GetBackupPlanFromJsonRequest {
    value with_backup_plan_template_json => backup_plan_template_json: String,
});

/// Output of `GetBackupPlanFromJSON`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetBackupPlanFromJsonResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_plan: Option<BackupPlan>,
}

fluent_setters!(GetBackupPlanFromJsonResponse {
    value with_backup_plan => backup_plan: BackupPlan,
});

impl Validate for GetBackupPlanFromJsonRequest {
    fn validate(&self) -> Result<()> {
        validate_required_text("backup_plan_template_json", &self.backup_plan_template_json)?;
        Ok(())
    }
}

/// Input of `GetBackupPlanFromTemplate`. Reads the plan stored in a template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetBackupPlanFromTemplateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_plan_template_id: Option<String>,
}

fluent_setters!(GetBackupPlanFromTemplateRequest {
    value with_backup_plan_template_id => backup_plan_template_id: String,
});

/// Output of `GetBackupPlanFromTemplate`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetBackupPlanFromTemplateResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_plan_document: Option<BackupPlan>,
}

fluent_setters!(GetBackupPlanFromTemplateResponse {
    value with_backup_plan_document => backup_plan_document: BackupPlan,
});

impl Validate for GetBackupPlanFromTemplateRequest {
    fn validate(&self) -> Result<()> {
        validate_required_text("backup_plan_template_id", &self.backup_plan_template_id)?;
        Ok(())
    }
}

/// Input of `ListBackupPlanTemplates`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListBackupPlanTemplatesRequest {
    /// Cursor returned by the previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Page size, 1 to 1000.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

fluent_setters!(ListBackupPlanTemplatesRequest {
    value with_next_token => next_token: String,
    value with_max_results => max_results: i32,
});

/// Output of `ListBackupPlanTemplates`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListBackupPlanTemplatesResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_plan_templates_list: Option<Vec<BackupPlanTemplatesListMember>>,
}

fluent_setters!(ListBackupPlanTemplatesResponse {
    value with_next_token => next_token: String,
    list with_backup_plan_templates_list => backup_plan_templates_list: BackupPlanTemplatesListMember,
});

impl Validate for ListBackupPlanTemplatesRequest {
    fn validate(&self) -> Result<()> {
        validate_page_size("max_results", self.max_results)?;
        Ok(())
    }
}

/// Input of `ListBackupPlanVersions`. Lists every version of one plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListBackupPlanVersionsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_plan_id: Option<String>,
    /// Cursor returned by the previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Page size, 1 to 1000.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

fluent_setters!(ListBackupPlanVersionsRequest {
    value with_backup_plan_id => backup_plan_id: String,
    value with_next_token => next_token: String,
    value with_max_results => max_results: i32,
});

/// Output of `ListBackupPlanVersions`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListBackupPlanVersionsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_plan_versions_list: Option<Vec<BackupPlansListMember>>,
}

fluent_setters!(ListBackupPlanVersionsResponse {
    value with_next_token => next_token: String,
    list with_backup_plan_versions_list => backup_plan_versions_list: BackupPlansListMember,
});

impl Validate for ListBackupPlanVersionsRequest {
    fn validate(&self) -> Result<()> {
        validate_required_text("backup_plan_id", &self.backup_plan_id)?;
        validate_page_size("max_results", self.max_results)?;
        Ok(())
    }
}

/// Input of `ListBackupPlans`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListBackupPlansRequest {
    /// Cursor returned by the previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Page size, 1 to 1000.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// Also return deleted plans.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_deleted: Option<bool>,
}

fluent_setters!(ListBackupPlansRequest {
    value with_next_token => next_token: String,
    value with_max_results => max_results: i32,
    value with_include_deleted => include_deleted: bool,
});

/// Output of `ListBackupPlans`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListBackupPlansResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_plans_list: Option<Vec<BackupPlansListMember>>,
}

fluent_setters!(ListBackupPlansResponse {
    value with_next_token => next_token: String,
    list with_backup_plans_list => backup_plans_list: BackupPlansListMember,
});

impl Validate for ListBackupPlansRequest {
    fn validate(&self) -> Result<()> {
        validate_page_size("max_results", self.max_results)?;
        Ok(())
    }
}

/// Input of `UpdateBackupPlan`. Replaces the body of a plan, creating a new version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateBackupPlanRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_plan_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_plan: Option<BackupPlanInput>,
}

fluent_setters!(UpdateBackupPlanRequest {
    value with_backup_plan_id => backup_plan_id: String,
    value with_backup_plan => backup_plan: BackupPlanInput,
});

/// Output of `UpdateBackupPlan`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateBackupPlanResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_plan_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_plan_arn: Option<String>,
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,
    /// Unique, randomly generated version id of the plan. It cannot be edited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_id: Option<String>,
}

fluent_setters!(UpdateBackupPlanResponse {
    value with_backup_plan_id => backup_plan_id: String,
    value with_backup_plan_arn => backup_plan_arn: String,
    value with_creation_date => creation_date: DateTime<Utc>,
    value with_version_id => version_id: String,
});

impl Validate for UpdateBackupPlanRequest {
    fn validate(&self) -> Result<()> {
        validate_required_text("backup_plan_id", &self.backup_plan_id)?;
        validate_required_field("backup_plan", &self.backup_plan)?;
        if let Some(value) = &self.backup_plan {
            value.validate()?;
        }
        Ok(())
    }
}

record_display!(
    CreateBackupPlanRequest,
    CreateBackupPlanResponse,
    DeleteBackupPlanRequest,
    DeleteBackupPlanResponse,
    ExportBackupPlanTemplateRequest,
    ExportBackupPlanTemplateResponse,
    GetBackupPlanRequest,
    GetBackupPlanResponse,
    GetBackupPlanFromJsonRequest,
    GetBackupPlanFromJsonResponse,
    GetBackupPlanFromTemplateRequest,
    GetBackupPlanFromTemplateResponse,
    ListBackupPlanTemplatesRequest,
    ListBackupPlanTemplatesResponse,
    ListBackupPlanVersionsRequest,
    ListBackupPlanVersionsResponse,
    ListBackupPlansRequest,
    ListBackupPlansResponse,
    UpdateBackupPlanRequest,
    UpdateBackupPlanResponse,
);
