use backup_model::model::{
    BackupJob, BackupJobState, BackupPlanInput, BackupRuleInput, CopyAction, Lifecycle,
    RecoveryPointByBackupVault, RecoveryPointStatus, StorageClass,
};
use backup_model::operations::{
    CreateBackupPlanRequest, ListBackupJobsRequest, ListRecoveryPointsByBackupVaultResponse,
};
use chrono::{TimeZone, Utc};
use serde_json::json;

#[test]
fn test_members_use_pascal_case_and_skip_unset() {
    let request = ListBackupJobsRequest::default()
        .with_max_results(50)
        .with_by_state(BackupJobState::Completed)
        .with_by_backup_vault_name("Default");

    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({
            "MaxResults": 50,
            "ByState": "COMPLETED",
            "ByBackupVaultName": "Default"
        })
    );
}

#[test]
fn test_timestamps_travel_as_epoch_seconds_with_milliseconds() {
    let created = Utc.timestamp_millis_opt(1_588_334_400_250).unwrap();
    let job = BackupJob::default().with_creation_date(created);

    let wire = serde_json::to_value(&job).unwrap();
    assert_eq!(wire, json!({"CreationDate": 1_588_334_400.25}));

    let decoded: BackupJob = serde_json::from_value(wire).unwrap();
    assert_eq!(decoded.creation_date, Some(created));

    let whole: BackupJob = serde_json::from_str(r#"{"CreationDate": 1588334400}"#).unwrap();
    assert_eq!(whole.creation_date, Utc.timestamp_opt(1_588_334_400, 0).single());
}

#[test]
fn test_unknown_enum_values_survive_a_round_trip() {
    let body = r#"{"RecoveryPoints": [{"Status": "ARCHIVED"}]}"#;
    let response: ListRecoveryPointsByBackupVaultResponse = serde_json::from_str(body).unwrap();

    let point = &response.recovery_points.as_ref().unwrap()[0];
    assert_eq!(point.status, Some(RecoveryPointStatus::Unknown("ARCHIVED".to_string())));
    assert!(!point.status.as_ref().unwrap().is_known());

    let reencoded = serde_json::to_string(&response).unwrap();
    assert!(reencoded.contains(r#""Status":"ARCHIVED""#));
}

#[test]
fn test_known_enum_constants_are_case_sensitive() {
    assert_eq!(StorageClass::from("WARM"), StorageClass::Warm);
    assert_eq!(
        StorageClass::from("warm"),
        StorageClass::Unknown("warm".to_string())
    );
    assert_eq!(BackupJobState::Aborted.to_string(), "ABORTED");
}

#[test]
fn test_nested_plan_document_shape() {
    let request = CreateBackupPlanRequest::default()
        .with_backup_plan(
            BackupPlanInput::default()
                .with_backup_plan_name("daily")
                .with_rules([BackupRuleInput::default()
                    .with_rule_name("daily-rule")
                    .with_target_backup_vault_name("Default")
                    .with_schedule_expression("cron(0 5 ? * * *)")
                    .with_lifecycle(Lifecycle::default().with_delete_after_days(35_i64))
                    .with_copy_actions([CopyAction::default().with_destination_backup_vault_arn(
                        "arn:aws:backup:us-west-2:123456789012:backup-vault:Replica",
                    )])]),
        )
        .with_creator_request_id("req-1");

    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({
            "BackupPlan": {
                "BackupPlanName": "daily",
                "Rules": [{
                    "RuleName": "daily-rule",
                    "TargetBackupVaultName": "Default",
                    "ScheduleExpression": "cron(0 5 ? * * *)",
                    "Lifecycle": {"DeleteAfterDays": 35},
                    "CopyActions": [{
                        "DestinationBackupVaultArn": "arn:aws:backup:us-west-2:123456789012:backup-vault:Replica"
                    }]
                }]
            },
            "CreatorRequestId": "req-1"
        })
    );
}

#[test]
fn test_recovery_point_decodes_nested_lifecycle() {
    let body = json!({
        "RecoveryPointArn": "arn:aws:backup:us-east-1:123456789012:recovery-point:1",
        "BackupVaultName": "Default",
        "Status": "COMPLETED",
        "IsEncrypted": false,
        "CalculatedLifecycle": {
            "MoveToColdStorageAt": 1_590_000_000,
            "DeleteAt": 1_600_000_000
        }
    });

    let point: RecoveryPointByBackupVault = serde_json::from_value(body).unwrap();

    assert_eq!(point.status, Some(RecoveryPointStatus::Completed));
    let lifecycle = point.calculated_lifecycle.unwrap();
    assert_eq!(lifecycle.delete_at, Utc.timestamp_opt(1_600_000_000, 0).single());
}
