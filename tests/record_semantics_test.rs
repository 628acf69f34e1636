use backup_model::model::{
    BackupJob, BackupJobState, BackupSelection, RecoveryPointCreator, RestoreJob,
};
use backup_model::operations::StartRestoreJobRequest;
use backup_model::BackupError;
use chrono::{TimeZone, Utc};
use std::collections::hash_map::DefaultHasher;
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn sample_job() -> BackupJob {
    BackupJob::default()
        .with_backup_job_id("job-1")
        .with_backup_vault_name("Default")
        .with_resource_arn("arn:aws:ec2:us-east-1:123456789012:volume/vol-1")
        .with_creation_date(Utc.with_ymd_and_hms(2020, 5, 1, 12, 0, 0).unwrap())
        .with_state(BackupJobState::Running)
        .with_backup_size_in_bytes(1024_i64)
        .with_created_by(
            RecoveryPointCreator::default()
                .with_backup_plan_id("plan-1")
                .with_backup_rule_id("rule-1"),
        )
}

#[test]
fn test_rebuilt_records_are_equal_and_hash_alike() {
    let first = sample_job();
    let second = sample_job();

    assert_eq!(first, second);
    assert_eq!(hash_of(&first), hash_of(&second));
    assert_eq!(first.clone(), first);
}

#[test]
fn test_fluent_and_field_assignment_converge() {
    let fluent = RestoreJob::default()
        .with_restore_job_id("restore-1")
        .with_percent_done("42.0")
        .with_expected_completion_time_minutes(30_i64);

    let mut assigned = RestoreJob::default();
    assigned.restore_job_id = Some("restore-1".to_string());
    assigned.percent_done = Some("42.0".to_string());
    assigned.expected_completion_time_minutes = Some(30);

    assert_eq!(fluent, assigned);
    assert_eq!(hash_of(&fluent), hash_of(&assigned));
}

#[test]
fn test_unset_records_are_total() {
    let empty = BackupJob::default();

    assert_eq!(empty.to_string(), "{}");
    assert_eq!(empty, BackupJob::default());
    assert_eq!(hash_of(&empty), hash_of(&BackupJob::default()));
    assert_eq!(BackupSelection::default().to_string(), "{}");
}

#[test]
fn test_records_differing_in_one_member_are_not_equal() {
    let with_id = BackupJob::default().with_backup_job_id("job-1");
    let without_id = BackupJob::default();

    assert_ne!(with_id, without_id);
    assert_ne!(without_id, with_id);
}

#[test]
fn test_with_resources_appends_in_order() {
    let selection = BackupSelection::default().with_resources(["arn:a", "arn:b"]);
    assert_eq!(
        selection.resources,
        Some(vec!["arn:a".to_string(), "arn:b".to_string()])
    );

    let selection = selection.with_resources(["arn:c"]);
    assert_eq!(
        selection.resources.as_deref().map(<[String]>::len),
        Some(3)
    );
}

#[test]
fn test_duplicate_entry_is_rejected_without_mutation() {
    let mut request = StartRestoreJobRequest::default();
    request.add_metadata_entry("volumeId", "vol-1").unwrap();

    let error = request.add_metadata_entry("volumeId", "vol-2").unwrap_err();

    assert!(matches!(
        error,
        BackupError::DuplicateKey { ref field, ref key } if field == "metadata" && key == "volumeId"
    ));
    let expected: BTreeMap<String, String> =
        [("volumeId".to_string(), "vol-1".to_string())].into_iter().collect();
    assert_eq!(request.metadata, Some(expected));
}

#[test]
fn test_clear_entries_unsets_the_map() {
    let mut request = StartRestoreJobRequest::default().with_metadata([("encrypted", "true")]);

    request.clear_metadata_entries();

    assert_eq!(request.metadata, None);
    assert_eq!(request, StartRestoreJobRequest::default());
}

#[test]
fn test_maps_compare_without_regard_to_insertion_order() {
    let mut first = StartRestoreJobRequest::default();
    first.add_metadata_entry("a", "1").unwrap();
    first.add_metadata_entry("b", "2").unwrap();

    let mut second = StartRestoreJobRequest::default();
    second.add_metadata_entry("b", "2").unwrap();
    second.add_metadata_entry("a", "1").unwrap();

    assert_eq!(first, second);
    assert_eq!(hash_of(&first), hash_of(&second));
}

#[test]
fn test_display_lists_set_members_and_redacts_sensitive_ones() {
    let rendered = sample_job().to_string();

    assert!(rendered.starts_with("{BackupJobId: job-1, BackupSizeInBytes: 1024, BackupVaultName: Default"));
    assert!(rendered.contains("State: RUNNING"));
    assert!(!rendered.contains("CompletionDate"));

    let request = StartRestoreJobRequest::default()
        .with_recovery_point_arn("arn:aws:backup:us-east-1:123456789012:recovery-point:1")
        .with_metadata([("volumeId", "vol-secret")]);
    let rendered = request.to_string();
    assert!(rendered.contains("Metadata: ***Sensitive Data Redacted***"));
    assert!(!rendered.contains("vol-secret"));
}
