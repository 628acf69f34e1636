//! Backup plans, their rules, and the resource selections assigned to them.
//!
//! Plans come in two shapes: the `*Input` records a caller submits, and the
//! records the service returns, which additionally carry service-assigned
//! identifiers such as `rule_id`.

use crate::model::enums::ConditionType;
use crate::model::recovery_points::Lifecycle;
use crate::model::timestamp::epoch_seconds;
use crate::utils::error::{BackupError, Result};
use crate::utils::validation::{
    validate_each, validate_optional_arn, validate_required_text, Validate,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Copies the recovery point a rule produces into a second vault.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CopyAction {
    /// Lifecycle applied to the copy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle: Option<Lifecycle>,
    /// ARN of the vault that receives the copy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_backup_vault_arn: Option<String>,
}

fluent_setters!(CopyAction {
    value with_lifecycle => lifecycle: Lifecycle,
    value with_destination_backup_vault_arn => destination_backup_vault_arn: String,
});

/// One tag test of a resource selection, e.g. `department = finance`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Condition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition_type: Option<ConditionType>,
    /// Tag key, e.g. `ec2:ResourceTag/Department`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition_value: Option<String>,
}

fluent_setters!(Condition {
    value with_condition_type => condition_type: ConditionType,
    value with_condition_key => condition_key: String,
    value with_condition_value => condition_value: String,
});

/// A scheduled task of a backup plan, as returned by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BackupRule {
    /// Display name of the rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_name: Option<String>,
    /// Vault the rule's recovery points are stored in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_backup_vault_name: Option<String>,
    /// CRON expression in UTC, e.g. `cron(0 5 ? * * *)`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_expression: Option<String>,
    /// Minutes after a scheduled time before an unstarted job is cancelled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_window_minutes: Option<i64>,
    /// Minutes after a job starts before an unfinished job is cancelled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_window_minutes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle: Option<Lifecycle>,
    /// Tags copied onto every recovery point the rule creates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovery_point_tags: Option<BTreeMap<String, String>>,
    /// Service-assigned identifier of the rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_actions: Option<Vec<CopyAction>>,
}

fluent_setters!(BackupRule {
    value with_rule_name => rule_name: String,
    value with_target_backup_vault_name => target_backup_vault_name: String,
    value with_schedule_expression => schedule_expression: String,
    value with_start_window_minutes => start_window_minutes: i64,
    value with_completion_window_minutes => completion_window_minutes: i64,
    value with_lifecycle => lifecycle: Lifecycle,
    map with_recovery_point_tags, add_recovery_point_tags_entry, clear_recovery_point_tags_entries => recovery_point_tags: String,
    value with_rule_id => rule_id: String,
    list with_copy_actions => copy_actions: CopyAction,
});

/// A scheduled task of a backup plan, as submitted by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BackupRuleInput {
    /// Display name of the rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_name: Option<String>,
    /// Vault the rule's recovery points are stored in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_backup_vault_name: Option<String>,
    /// CRON expression in UTC, e.g. `cron(0 5 ? * * *)`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_expression: Option<String>,
    /// Minutes after a scheduled time before an unstarted job is cancelled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_window_minutes: Option<i64>,
    /// Minutes after a job starts before an unfinished job is cancelled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_window_minutes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle: Option<Lifecycle>,
    /// Tags copied onto every recovery point the rule creates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovery_point_tags: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_actions: Option<Vec<CopyAction>>,
}

fluent_setters!(BackupRuleInput {
    value with_rule_name => rule_name: String,
    value with_target_backup_vault_name => target_backup_vault_name: String,
    value with_schedule_expression => schedule_expression: String,
    value with_start_window_minutes => start_window_minutes: i64,
    value with_completion_window_minutes => completion_window_minutes: i64,
    value with_lifecycle => lifecycle: Lifecycle,
    map with_recovery_point_tags, add_recovery_point_tags_entry, clear_recovery_point_tags_entries => recovery_point_tags: String,
    list with_copy_actions => copy_actions: CopyAction,
});

/// A named set of rules, as returned by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BackupPlan {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_plan_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<BackupRule>>,
}

fluent_setters!(BackupPlan {
    value with_backup_plan_name => backup_plan_name: String,
    list with_rules => rules: BackupRule,
});

/// A named set of rules, as submitted by `CreateBackupPlan` and
/// `UpdateBackupPlan`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BackupPlanInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_plan_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<BackupRuleInput>>,
}

fluent_setters!(BackupPlanInput {
    value with_backup_plan_name => backup_plan_name: String,
    list with_rules => rules: BackupRuleInput,
});

/// One version of a plan in a plan listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BackupPlansListMember {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_plan_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_plan_id: Option<String>,
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,
    /// Set only for deleted plans.
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub deletion_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_plan_name: Option<String>,
    /// Idempotency token supplied when the plan was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_request_id: Option<String>,
    /// Last time the plan ran a backup.
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub last_execution_date: Option<DateTime<Utc>>,
}

fluent_setters!(BackupPlansListMember {
    value with_backup_plan_arn => backup_plan_arn: String,
    value with_backup_plan_id => backup_plan_id: String,
    value with_creation_date => creation_date: DateTime<Utc>,
    value with_deletion_date => deletion_date: DateTime<Utc>,
    value with_version_id => version_id: String,
    value with_backup_plan_name => backup_plan_name: String,
    value with_creator_request_id => creator_request_id: String,
    value with_last_execution_date => last_execution_date: DateTime<Utc>,
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BackupPlanTemplatesListMember {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_plan_template_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_plan_template_name: Option<String>,
}

fluent_setters!(BackupPlanTemplatesListMember {
    value with_backup_plan_template_id => backup_plan_template_id: String,
    value with_backup_plan_template_name => backup_plan_template_name: String,
});

/// Resources assigned to a plan, either by ARN or by tag conditions.
///
/// Resources and conditions are additive: anything matching any entry is
/// selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BackupSelection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection_name: Option<String>,
    /// Role the service assumes when backing up the selected resources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iam_role_arn: Option<String>,
    /// ARNs (wildcards allowed) of the resources to back up.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_of_tags: Option<Vec<Condition>>,
}

fluent_setters!(BackupSelection {
    value with_selection_name => selection_name: String,
    value with_iam_role_arn => iam_role_arn: String,
    list with_resources => resources: String,
    list with_list_of_tags => list_of_tags: Condition,
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BackupSelectionsListMember {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_plan_id: Option<String>,
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_request_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iam_role_arn: Option<String>,
}

fluent_setters!(BackupSelectionsListMember {
    value with_selection_id => selection_id: String,
    value with_selection_name => selection_name: String,
    value with_backup_plan_id => backup_plan_id: String,
    value with_creation_date => creation_date: DateTime<Utc>,
    value with_creator_request_id => creator_request_id: String,
    value with_iam_role_arn => iam_role_arn: String,
});

record_display!(
    CopyAction,
    Condition,
    BackupRule,
    BackupRuleInput,
    BackupPlan,
    BackupPlanInput,
    BackupPlansListMember,
    BackupPlanTemplatesListMember,
    BackupSelection,
    BackupSelectionsListMember,
);

impl Validate for CopyAction {
    fn validate(&self) -> Result<()> {
        validate_required_text("destination_backup_vault_arn", &self.destination_backup_vault_arn)?;
        validate_optional_arn("destination_backup_vault_arn", &self.destination_backup_vault_arn)?;
        if let Some(lifecycle) = &self.lifecycle {
            lifecycle.validate()?;
        }
        Ok(())
    }
}

impl Validate for BackupRuleInput {
    fn validate(&self) -> Result<()> {
        validate_required_text("rule_name", &self.rule_name)?;
        validate_required_text("target_backup_vault_name", &self.target_backup_vault_name)?;
        if let Some(lifecycle) = &self.lifecycle {
            lifecycle.validate()?;
        }
        validate_each(&self.copy_actions)
    }
}

impl Validate for BackupPlanInput {
    fn validate(&self) -> Result<()> {
        validate_required_text("backup_plan_name", &self.backup_plan_name)?;
        match &self.rules {
            Some(rules) if !rules.is_empty() => validate_each(&self.rules),
            _ => Err(BackupError::MissingFieldError {
                field: "rules".to_string(),
            }),
        }
    }
}

impl Validate for BackupSelection {
    fn validate(&self) -> Result<()> {
        validate_required_text("selection_name", &self.selection_name)?;
        validate_required_text("iam_role_arn", &self.iam_role_arn)?;
        validate_optional_arn("iam_role_arn", &self.iam_role_arn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn daily_rule() -> BackupRuleInput {
        BackupRuleInput::default()
            .with_rule_name("daily")
            .with_target_backup_vault_name("Default")
            .with_schedule_expression("cron(0 5 ? * * *)")
    }

    #[test]
    fn test_with_resources_appends_in_order() {
        let selection = BackupSelection::default()
            .with_resources(["arn:a", "arn:b"])
            .with_resources(["arn:c"]);

        assert_eq!(
            selection.resources,
            Some(vec!["arn:a".to_string(), "arn:b".to_string(), "arn:c".to_string()])
        );
    }

    #[test]
    fn test_recovery_point_tags_redacted_in_display() {
        let rule = daily_rule().with_recovery_point_tags([("env", "prod")]);
        let rendered = rule.to_string();

        assert!(rendered.contains("RecoveryPointTags: ***Sensitive Data Redacted***"));
        assert!(!rendered.contains("prod"));
    }

    #[test]
    fn test_plan_input_requires_rules() {
        let plan = BackupPlanInput::default().with_backup_plan_name("nightly");
        let err = plan.validate().unwrap_err();
        assert!(matches!(err, BackupError::MissingFieldError { ref field } if field == "rules"));

        let plan = plan.with_rules([daily_rule()]);
        assert!(plan.validate().is_ok());
    }

    #[test]
    fn test_plan_input_checks_copy_action_lifecycle() {
        let copy = CopyAction::default()
            .with_destination_backup_vault_arn(
                "arn:aws:backup:us-west-2:123456789012:backup-vault:Secondary",
            )
            .with_lifecycle(
                Lifecycle::default()
                    .with_move_to_cold_storage_after_days(30)
                    .with_delete_after_days(60),
            );
        let plan = BackupPlanInput::default()
            .with_backup_plan_name("nightly")
            .with_rules([daily_rule().with_copy_actions([copy])]);

        let err = plan.validate().unwrap_err();
        assert!(matches!(err, BackupError::ValidationError { ref field, .. } if field == "delete_after_days"));
    }

    #[test]
    fn test_selection_requires_role_arn_shape() {
        let selection = BackupSelection::default()
            .with_selection_name("finance")
            .with_iam_role_arn("not-an-arn");
        assert!(selection.validate().is_err());

        let selection = selection.with_iam_role_arn("arn:aws:iam::123456789012:role/BackupRole");
        assert!(selection.validate().is_ok());
    }
}
