use async_trait::async_trait;
use backup_model::client::service_error;
use backup_model::model::{BackupJobState, Lifecycle, ServiceErrorCode};
use backup_model::operations::{
    DeleteBackupVaultRequest, DescribeBackupJobRequest, EmptyResponse, StartBackupJobRequest,
};
use backup_model::{BackupClient, BackupError, ClientConfig, ErrorCategory, Result, Transport};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

/// In-memory transport that replays a canned reply and records each call.
struct FakeTransport {
    reply: std::result::Result<Value, (String, Option<String>)>,
    calls: Mutex<Vec<(String, Value)>>,
}

impl FakeTransport {
    fn replying(reply: Value) -> Self {
        Self {
            reply: Ok(reply),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn failing(body: &str, error_type_header: Option<&str>) -> Self {
        Self {
            reply: Err((body.to_string(), error_type_header.map(str::to_string))),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn call(&self, operation: &str, body: Value) -> Result<Value> {
        self.calls.lock().unwrap().push((operation.to_string(), body));
        match &self.reply {
            Ok(reply) => Ok(reply.clone()),
            Err((body, header)) => Err(service_error(body, header.as_deref())),
        }
    }
}

fn start_backup_job() -> StartBackupJobRequest {
    StartBackupJobRequest::default()
        .with_backup_vault_name("Default")
        .with_resource_arn("arn:aws:ec2:us-east-1:123456789012:volume/vol-1")
        .with_iam_role_arn("arn:aws:iam::123456789012:role/BackupRole")
}

#[tokio::test]
async fn test_describe_backup_job_decodes_flattened_reply() {
    let transport = FakeTransport::replying(json!({
        "BackupJobId": "job-1",
        "State": "COMPLETED",
        "BackupSizeInBytes": 2048,
        "CreatedBy": {"BackupPlanId": "plan-1"}
    }));
    let client = BackupClient::new(transport, ClientConfig::default());

    let output = client
        .send(&DescribeBackupJobRequest::default().with_backup_job_id("job-1"))
        .await
        .unwrap();

    assert_eq!(output.backup_job.backup_job_id.as_deref(), Some("job-1"));
    assert_eq!(output.backup_job.state, Some(BackupJobState::Completed));
    assert_eq!(
        client.transport().calls(),
        vec![(
            "DescribeBackupJob".to_string(),
            json!({"BackupJobId": "job-1"})
        )]
    );
}

#[tokio::test]
async fn test_null_reply_decodes_as_empty_response() {
    let client = BackupClient::new(FakeTransport::replying(Value::Null), ClientConfig::default());

    let output = client
        .send(&DeleteBackupVaultRequest::default().with_backup_vault_name("Default"))
        .await
        .unwrap();

    assert_eq!(output, EmptyResponse::default());
}

#[tokio::test]
async fn test_validation_is_off_by_default() {
    let client = BackupClient::new(FakeTransport::replying(json!({})), ClientConfig::default());
    let request = start_backup_job().with_lifecycle(
        Lifecycle::default()
            .with_move_to_cold_storage_after_days(30_i64)
            .with_delete_after_days(60_i64),
    );

    assert!(client.send(&request).await.is_ok());
    assert_eq!(client.transport().calls().len(), 1);
}

#[tokio::test]
async fn test_enabled_validation_fails_before_dispatch() {
    let config = ClientConfig::default().with_validate_requests(true);
    let client = BackupClient::new(FakeTransport::replying(json!({})), config);
    let request = start_backup_job().with_lifecycle(
        Lifecycle::default()
            .with_move_to_cold_storage_after_days(30_i64)
            .with_delete_after_days(60_i64),
    );

    let error = client.send(&request).await.unwrap_err();

    assert_eq!(error.category(), ErrorCategory::Validation);
    assert!(client.transport().calls().is_empty());

    let valid = start_backup_job().with_lifecycle(
        Lifecycle::default()
            .with_move_to_cold_storage_after_days(30_i64)
            .with_delete_after_days(120_i64),
    );
    assert!(client.send(&valid).await.is_ok());
}

#[tokio::test]
async fn test_service_rejection_surfaces_as_service_error() {
    let transport = FakeTransport::failing(
        r#"{"__type": "com.amazonaws.backup#ResourceNotFoundException", "message": "No job"}"#,
        None,
    );
    let client = BackupClient::new(transport, ClientConfig::default());

    let error = client
        .send(&DescribeBackupJobRequest::default().with_backup_job_id("missing"))
        .await
        .unwrap_err();

    match error {
        BackupError::Service(service) => {
            assert_eq!(service.code, ServiceErrorCode::ResourceNotFound);
            assert_eq!(service.message.as_deref(), Some("No job"));
        }
        other => panic!("expected a service error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_shared_transport_behind_arc() {
    let transport = Arc::new(FakeTransport::replying(json!({"BackupJobId": "job-9"})));
    let client = BackupClient::new(Arc::clone(&transport), ClientConfig::default());

    let output = client.send(&start_backup_job()).await.unwrap();

    assert_eq!(output.backup_job_id.as_deref(), Some("job-9"));
    assert_eq!(transport.calls()[0].0, "StartBackupJob");
    assert_eq!(client.endpoint(), "https://backup.us-east-1.amazonaws.com");
}
