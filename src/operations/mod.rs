//! Request and response shapes for every AWS Backup operation.
//!
//! Each `<Name>Request` implements [`Operation`], tying it to the wire
//! operation name and to the record the service answers with. Operations
//! answered with an empty body use [`EmptyResponse`].

pub mod jobs;
pub mod plans;
pub mod recovery_points;
pub mod region;
pub mod selections;
pub mod tags;
pub mod vaults;

use crate::utils::error::{BackupError, Result};
use crate::utils::validation::Validate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use jobs::*;
pub use plans::*;
pub use recovery_points::*;
pub use region::*;
pub use selections::*;
pub use tags::*;
pub use vaults::*;

/// A request that can be dispatched to the service.
pub trait Operation: Serialize + Validate + fmt::Display + Send + Sync {
    /// Wire name of the operation, e.g. `ListBackupJobs`.
    const NAME: &'static str;

    /// Whether the operation pages its results with `NextToken`/`MaxResults`.
    const PAGINATED: bool = false;

    /// Record the service answers with.
    type Output: DeserializeOwned + fmt::Display + Send;
}

/// Reply of operations that return no members.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmptyResponse {}

record_display!(EmptyResponse);

/// Which side of an operation a JSON document holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Request,
    Response,
}

impl FromStr for DocumentKind {
    type Err = BackupError;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "request" => Ok(DocumentKind::Request),
            "response" => Ok(DocumentKind::Response),
            other => Err(BackupError::invalid(
                "kind",
                other,
                "Expected `request` or `response`",
            )),
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Request => f.write_str("request"),
            DocumentKind::Response => f.write_str("response"),
        }
    }
}

fn render<T>(json: &str) -> Result<String>
where
    T: DeserializeOwned + fmt::Display,
{
    let document: T = serde_json::from_str(json)?;
    Ok(document.to_string())
}

fn validate_document<T>(json: &str) -> Result<()>
where
    T: DeserializeOwned + Validate,
{
    let document: T = serde_json::from_str(json)?;
    document.validate()
}

macro_rules! operation_catalog {
    (@paginated) => { false };
    (@paginated paginated) => { true };
    ($( $wire:literal => $request:ident, $output:ident $(, $flag:ident)? ; )*) => {
        $(
            impl Operation for $request {
                const NAME: &'static str = $wire;
                const PAGINATED: bool = operation_catalog!(@paginated $($flag)?);
                type Output = $output;
            }
        )*

        /// Every operation name, in alphabetical order.
        pub const OPERATION_NAMES: &[&str] = &[$($wire),*];

        /// Decode `json` as the request or response of `operation` and
        /// return its debug rendering.
        pub fn render_document(operation: &str, kind: DocumentKind, json: &str) -> Result<String> {
            match (find_operation(operation)?, kind) {
                $(
                    ($wire, DocumentKind::Request) => render::<$request>(json),
                    ($wire, DocumentKind::Response) => render::<$output>(json),
                )*
                (name, _) => Err(BackupError::UnknownOperation { name: name.to_string() }),
            }
        }

        /// Decode `json` as the request of `operation` and run its validation pass.
        pub fn validate_request_document(operation: &str, json: &str) -> Result<()> {
            match find_operation(operation)? {
                $( $wire => validate_document::<$request>(json), )*
                name => Err(BackupError::UnknownOperation { name: name.to_string() }),
            }
        }
    };
}

operation_catalog! {
    "CreateBackupPlan" => CreateBackupPlanRequest, CreateBackupPlanResponse;
    "CreateBackupSelection" => CreateBackupSelectionRequest, CreateBackupSelectionResponse;
    "CreateBackupVault" => CreateBackupVaultRequest, CreateBackupVaultResponse;
    "DeleteBackupPlan" => DeleteBackupPlanRequest, DeleteBackupPlanResponse;
    "DeleteBackupSelection" => DeleteBackupSelectionRequest, EmptyResponse;
    "DeleteBackupVault" => DeleteBackupVaultRequest, EmptyResponse;
    "DeleteBackupVaultAccessPolicy" => DeleteBackupVaultAccessPolicyRequest, EmptyResponse;
    "DeleteBackupVaultNotifications" => DeleteBackupVaultNotificationsRequest, EmptyResponse;
    "DeleteRecoveryPoint" => DeleteRecoveryPointRequest, EmptyResponse;
    "DescribeBackupJob" => DescribeBackupJobRequest, DescribeBackupJobResponse;
    "DescribeBackupVault" => DescribeBackupVaultRequest, DescribeBackupVaultResponse;
    "DescribeCopyJob" => DescribeCopyJobRequest, DescribeCopyJobResponse;
    "DescribeProtectedResource" => DescribeProtectedResourceRequest, DescribeProtectedResourceResponse;
    "DescribeRecoveryPoint" => DescribeRecoveryPointRequest, DescribeRecoveryPointResponse;
    "DescribeRegionSettings" => DescribeRegionSettingsRequest, DescribeRegionSettingsResponse;
    "DescribeRestoreJob" => DescribeRestoreJobRequest, DescribeRestoreJobResponse;
    "ExportBackupPlanTemplate" => ExportBackupPlanTemplateRequest, ExportBackupPlanTemplateResponse;
    "GetBackupPlan" => GetBackupPlanRequest, GetBackupPlanResponse;
    "GetBackupPlanFromJSON" => GetBackupPlanFromJsonRequest, GetBackupPlanFromJsonResponse;
    "GetBackupPlanFromTemplate" => GetBackupPlanFromTemplateRequest, GetBackupPlanFromTemplateResponse;
    "GetBackupSelection" => GetBackupSelectionRequest, GetBackupSelectionResponse;
    "GetBackupVaultAccessPolicy" => GetBackupVaultAccessPolicyRequest, GetBackupVaultAccessPolicyResponse;
    "GetBackupVaultNotifications" => GetBackupVaultNotificationsRequest, GetBackupVaultNotificationsResponse;
    "GetRecoveryPointRestoreMetadata" => GetRecoveryPointRestoreMetadataRequest, GetRecoveryPointRestoreMetadataResponse;
    "GetSupportedResourceTypes" => GetSupportedResourceTypesRequest, GetSupportedResourceTypesResponse;
    "ListBackupJobs" => ListBackupJobsRequest, ListBackupJobsResponse, paginated;
    "ListBackupPlanTemplates" => ListBackupPlanTemplatesRequest, ListBackupPlanTemplatesResponse, paginated;
    "ListBackupPlanVersions" => ListBackupPlanVersionsRequest, ListBackupPlanVersionsResponse, paginated;
    "ListBackupPlans" => ListBackupPlansRequest, ListBackupPlansResponse, paginated;
    "ListBackupSelections" => ListBackupSelectionsRequest, ListBackupSelectionsResponse, paginated;
    "ListBackupVaults" => ListBackupVaultsRequest, ListBackupVaultsResponse, paginated;
    "ListCopyJobs" => ListCopyJobsRequest, ListCopyJobsResponse, paginated;
    "ListProtectedResources" => ListProtectedResourcesRequest, ListProtectedResourcesResponse, paginated;
    "ListRecoveryPointsByBackupVault" => ListRecoveryPointsByBackupVaultRequest, ListRecoveryPointsByBackupVaultResponse, paginated;
    "ListRecoveryPointsByResource" => ListRecoveryPointsByResourceRequest, ListRecoveryPointsByResourceResponse, paginated;
    "ListRestoreJobs" => ListRestoreJobsRequest, ListRestoreJobsResponse, paginated;
    "ListTags" => ListTagsRequest, ListTagsResponse, paginated;
    "PutBackupVaultAccessPolicy" => PutBackupVaultAccessPolicyRequest, EmptyResponse;
    "PutBackupVaultNotifications" => PutBackupVaultNotificationsRequest, EmptyResponse;
    "StartBackupJob" => StartBackupJobRequest, StartBackupJobResponse;
    "StartCopyJob" => StartCopyJobRequest, StartCopyJobResponse;
    "StartRestoreJob" => StartRestoreJobRequest, StartRestoreJobResponse;
    "StopBackupJob" => StopBackupJobRequest, EmptyResponse;
    "TagResource" => TagResourceRequest, EmptyResponse;
    "UntagResource" => UntagResourceRequest, EmptyResponse;
    "UpdateBackupPlan" => UpdateBackupPlanRequest, UpdateBackupPlanResponse;
    "UpdateRecoveryPointLifecycle" => UpdateRecoveryPointLifecycleRequest, UpdateRecoveryPointLifecycleResponse;
    "UpdateRegionSettings" => UpdateRegionSettingsRequest, EmptyResponse;
}

/// Resolve an operation name to its catalog entry.
pub fn find_operation(name: &str) -> Result<&'static str> {
    let name = name.trim();
    OPERATION_NAMES
        .iter()
        .copied()
        .find(|candidate| *candidate == name)
        .ok_or_else(|| BackupError::UnknownOperation {
            name: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name_of<O: Operation>(_: &O) -> &'static str {
        O::NAME
    }

    #[test]
    fn test_catalog_lists_every_operation_once_in_order() {
        assert_eq!(OPERATION_NAMES.len(), 48);
        assert!(OPERATION_NAMES.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_operation_names_follow_the_wire() {
        assert_eq!(name_of(&ListBackupJobsRequest::default()), "ListBackupJobs");
        assert_eq!(
            name_of(&GetBackupPlanFromJsonRequest::default()),
            "GetBackupPlanFromJSON"
        );
        assert!(<ListTagsRequest as Operation>::PAGINATED);
        assert!(!<TagResourceRequest as Operation>::PAGINATED);
    }

    #[test]
    fn test_render_document_uses_the_typed_shape() {
        let rendered = render_document(
            "StartBackupJob",
            DocumentKind::Request,
            r#"{"BackupVaultName": "Default", "RecoveryPointTags": {"env": "prod"}}"#,
        )
        .unwrap();

        assert_eq!(
            rendered,
            "{BackupVaultName: Default, RecoveryPointTags: ***Sensitive Data Redacted***}"
        );
    }

    #[test]
    fn test_render_document_for_empty_reply() {
        let rendered = render_document("TagResource", DocumentKind::Response, "{}").unwrap();
        assert_eq!(rendered, "{}");
    }

    #[test]
    fn test_unknown_operation_is_rejected() {
        let error = render_document("ListEverything", DocumentKind::Request, "{}").unwrap_err();
        assert!(matches!(
            error,
            BackupError::UnknownOperation { ref name } if name == "ListEverything"
        ));
    }

    #[test]
    fn test_validate_request_document() {
        assert!(validate_request_document("ListBackupVaults", r#"{"MaxResults": 50}"#).is_ok());
        assert!(validate_request_document("ListBackupVaults", r#"{"MaxResults": 0}"#).is_err());
    }

    #[test]
    fn test_document_kind_parsing() {
        assert_eq!("Request".parse::<DocumentKind>().unwrap(), DocumentKind::Request);
        assert_eq!("response".parse::<DocumentKind>().unwrap(), DocumentKind::Response);
        assert!("reply".parse::<DocumentKind>().is_err());
    }
}
