//! Typed dispatch of operations through a pluggable transport.
//!
//! The crate does not speak HTTP itself. A [`Transport`] receives the
//! operation name and the JSON body and hands back the JSON reply; signing,
//! retries and status mapping all live behind that seam. A transport reports
//! a rejected call as [`BackupError::Service`], usually built with
//! [`ServiceError::from_body`](crate::model::ServiceError::from_body).

use crate::config::ClientConfig;
use crate::operations::Operation;
use crate::utils::error::{BackupError, Result};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::Arc;

const MAX_RESULTS: &str = "MaxResults";

#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one operation and return the decoded JSON reply.
    async fn call(&self, operation: &str, body: Value) -> Result<Value>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn call(&self, operation: &str, body: Value) -> Result<Value> {
        (**self).call(operation, body).await
    }
}

pub struct BackupClient<T: Transport> {
    transport: T,
    config: ClientConfig,
}

impl<T: Transport> BackupClient<T> {
    pub fn new(transport: T, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Service endpoint requests are addressed to.
    pub fn endpoint(&self) -> String {
        self.config.endpoint()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Encode `request`, dispatch it and decode the typed reply.
    ///
    /// With `validate_requests` enabled the request is checked first and
    /// nothing is sent if it fails.
    pub async fn send<O: Operation>(&self, request: &O) -> Result<O::Output> {
        if self.config.client.validate_requests {
            request.validate().inspect_err(|e| {
                tracing::warn!(operation = O::NAME, error = %e, "Request failed validation");
            })?;
        }

        let mut body = serde_json::to_value(request)?;
        if O::PAGINATED {
            self.apply_default_page_size(&mut body);
        }

        tracing::debug!(operation = O::NAME, endpoint = %self.endpoint(), "Dispatching request");
        tracing::trace!(operation = O::NAME, request = %request);

        let reply = match self.transport.call(O::NAME, body).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(operation = O::NAME, error = %e, "Request failed");
                return Err(e);
            }
        };

        let reply = if reply.is_null() {
            Value::Object(Map::new())
        } else {
            reply
        };

        let output: O::Output = serde_json::from_value(reply)?;
        tracing::debug!(operation = O::NAME, "Reply decoded");
        Ok(output)
    }

    fn apply_default_page_size(&self, body: &mut Value) {
        let Some(page_size) = self.config.client.default_page_size else {
            return;
        };
        if let Value::Object(members) = body {
            members
                .entry(MAX_RESULTS)
                .or_insert_with(|| Value::from(page_size));
        }
    }
}

impl<T: Transport> std::fmt::Debug for BackupClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackupClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Convenience for transports: wrap a service error reply.
pub fn service_error(body: &str, error_type_header: Option<&str>) -> BackupError {
    match crate::model::ServiceError::from_body(body, error_type_header) {
        Ok(error) => BackupError::Service(error),
        Err(e) => e,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::{ListBackupVaultsRequest, ListBackupVaultsResponse};
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        calls: Mutex<Vec<(String, Value)>>,
    }

    #[async_trait]
    impl Transport for Recorder {
        async fn call(&self, operation: &str, body: Value) -> Result<Value> {
            self.calls
                .lock()
                .unwrap()
                .push((operation.to_string(), body));
            Ok(serde_json::json!({"BackupVaultList": [{"BackupVaultName": "Default"}]}))
        }
    }

    #[tokio::test]
    async fn test_send_dispatches_by_operation_name() {
        let client = BackupClient::new(Recorder::default(), ClientConfig::default());

        let output: ListBackupVaultsResponse = client
            .send(&ListBackupVaultsRequest::default())
            .await
            .unwrap();

        assert_eq!(output.backup_vault_list.map(|vaults| vaults.len()), Some(1));
        let calls = client.transport().calls.lock().unwrap();
        assert_eq!(calls[0].0, "ListBackupVaults");
        assert_eq!(calls[0].1, serde_json::json!({}));
    }

    #[tokio::test]
    async fn test_default_page_size_fills_missing_max_results() {
        let config = ClientConfig::default().with_default_page_size(25);
        let client = BackupClient::new(Recorder::default(), config);

        client
            .send(&ListBackupVaultsRequest::default())
            .await
            .unwrap();
        client
            .send(&ListBackupVaultsRequest::default().with_max_results(5))
            .await
            .unwrap();

        let calls = client.transport().calls.lock().unwrap();
        assert_eq!(calls[0].1, serde_json::json!({"MaxResults": 25}));
        assert_eq!(calls[1].1, serde_json::json!({"MaxResults": 5}));
    }

    #[test]
    fn test_service_error_helper() {
        let error = service_error(r#"{"__type": "ResourceNotFoundException"}"#, None);
        assert!(matches!(error, BackupError::Service(_)));

        let error = service_error("not json", None);
        assert!(matches!(error, BackupError::SerializationError(_)));
    }
}
