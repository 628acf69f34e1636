//! Closed value domains reported by the service.
//!
//! These are values the service transmits, not transitions a client drives;
//! nothing here enforces an order between states.

string_enum!(
    /// State of a backup job.
    BackupJobState {
        Created => "CREATED",
        Pending => "PENDING",
        Running => "RUNNING",
        Aborting => "ABORTING",
        Aborted => "ABORTED",
        Completed => "COMPLETED",
        Failed => "FAILED",
        Expired => "EXPIRED",
    }
);

string_enum!(
    /// State of a copy job.
    CopyJobState {
        Created => "CREATED",
        Running => "RUNNING",
        Completed => "COMPLETED",
        Failed => "FAILED",
    }
);

string_enum!(
    /// Status of a restore job.
    RestoreJobStatus {
        Pending => "PENDING",
        Running => "RUNNING",
        Completed => "COMPLETED",
        Aborted => "ABORTED",
        Failed => "FAILED",
    }
);

string_enum!(
    /// Status of a recovery point.
    RecoveryPointStatus {
        Completed => "COMPLETED",
        Partial => "PARTIAL",
        Deleting => "DELETING",
        Expired => "EXPIRED",
    }
);

string_enum!(
    /// Storage tier a recovery point currently lives in.
    StorageClass {
        Warm => "WARM",
        Cold => "COLD",
        Deleted => "DELETED",
    }
);

string_enum!(
    /// Comparison applied by a tag-based selection condition.
    ConditionType {
        StringEquals => "STRINGEQUALS",
    }
);

string_enum!(
    /// Vault event that can be published to an SNS topic.
    BackupVaultEvent {
        BackupJobStarted => "BACKUP_JOB_STARTED",
        BackupJobCompleted => "BACKUP_JOB_COMPLETED",
        BackupJobSuccessful => "BACKUP_JOB_SUCCESSFUL",
        BackupJobFailed => "BACKUP_JOB_FAILED",
        BackupJobExpired => "BACKUP_JOB_EXPIRED",
        RestoreJobStarted => "RESTORE_JOB_STARTED",
        RestoreJobCompleted => "RESTORE_JOB_COMPLETED",
        RestoreJobSuccessful => "RESTORE_JOB_SUCCESSFUL",
        RestoreJobFailed => "RESTORE_JOB_FAILED",
        CopyJobStarted => "COPY_JOB_STARTED",
        CopyJobSuccessful => "COPY_JOB_SUCCESSFUL",
        CopyJobFailed => "COPY_JOB_FAILED",
        RecoveryPointModified => "RECOVERY_POINT_MODIFIED",
        BackupPlanCreated => "BACKUP_PLAN_CREATED",
        BackupPlanModified => "BACKUP_PLAN_MODIFIED",
    }
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values_map_to_variants() {
        assert_eq!(BackupJobState::from("COMPLETED"), BackupJobState::Completed);
        assert_eq!(RecoveryPointStatus::from("PARTIAL"), RecoveryPointStatus::Partial);
        assert_eq!(BackupVaultEvent::CopyJobFailed.as_str(), "COPY_JOB_FAILED");
    }

    #[test]
    fn test_wire_values_are_case_sensitive() {
        let state = BackupJobState::from("completed");
        assert_eq!(state, BackupJobState::Unknown("completed".to_string()));
        assert!(!state.is_known());
        assert_eq!(state.to_string(), "completed");
    }

    #[test]
    fn test_unknown_value_survives_serde() {
        let status: RestoreJobStatus = serde_json::from_str("\"CANCELLED\"").unwrap();
        assert_eq!(status, RestoreJobStatus::Unknown("CANCELLED".to_string()));
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"CANCELLED\"");
    }

    #[test]
    fn test_values_lists_every_known_constant() {
        assert_eq!(CopyJobState::VALUES, &["CREATED", "RUNNING", "COMPLETED", "FAILED"]);
        for value in BackupVaultEvent::VALUES {
            assert!(BackupVaultEvent::from(*value).is_known());
        }
    }
}
