//! Error replies returned by the service.
//!
//! A rejected call comes back as a JSON body such as
//! `{"__type": "ResourceNotFoundException", "message": "..."}`, optionally
//! with the code repeated in the `x-amzn-ErrorType` header. Only the decoding
//! lives here; mapping HTTP statuses and retry decisions belong to the
//! transport.

use crate::utils::error::Result;
use serde::Deserialize;
use std::fmt;

string_enum!(
    /// Error codes the service documents for its operations.
    ServiceErrorCode {
        AlreadyExists => "AlreadyExistsException",
        DependencyFailure => "DependencyFailureException",
        InvalidParameterValue => "InvalidParameterValueException",
        InvalidRequest => "InvalidRequestException",
        LimitExceeded => "LimitExceededException",
        MissingParameterValue => "MissingParameterValueException",
        ResourceNotFound => "ResourceNotFoundException",
        ServiceUnavailable => "ServiceUnavailableException",
    }
);

/// A decoded service error reply.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServiceError {
    pub code: ServiceErrorCode,
    pub message: Option<String>,
    /// Service-specific detail code (`Code` member).
    pub detail_code: Option<String>,
    pub context: Option<String>,
    pub error_type: Option<String>,
    /// ARN of the conflicting resource (`AlreadyExistsException`).
    pub arn: Option<String>,
    /// Creator request id of the conflicting resource (`AlreadyExistsException`).
    pub creator_request_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(rename = "__type", default)]
    type_name: Option<String>,
    #[serde(alias = "Message", default)]
    message: Option<String>,
    #[serde(rename = "Code", default)]
    code: Option<String>,
    #[serde(rename = "Context", default)]
    context: Option<String>,
    #[serde(rename = "Type", default)]
    error_type: Option<String>,
    #[serde(rename = "Arn", default)]
    arn: Option<String>,
    #[serde(rename = "CreatorRequestId", default)]
    creator_request_id: Option<String>,
}

impl ServiceError {
    /// Decode an error reply. The header value, when present, wins over the
    /// `__type` member of the body. An empty body is accepted.
    pub fn from_body(body: &str, error_type_header: Option<&str>) -> Result<Self> {
        let parsed: ErrorBody = if body.trim().is_empty() {
            ErrorBody::default()
        } else {
            serde_json::from_str(body)?
        };

        let raw_code = error_type_header
            .filter(|value| !value.trim().is_empty())
            .map(str::to_string)
            .or(parsed.type_name)
            .unwrap_or_default();

        Ok(Self {
            code: ServiceErrorCode::from(normalize_error_code(&raw_code)),
            message: parsed.message,
            detail_code: parsed.code,
            context: parsed.context,
            error_type: parsed.error_type,
            arn: parsed.arn,
            creator_request_id: parsed.creator_request_id,
        })
    }
}

/// Strip the `namespace#` prefix and `:detail` suffix the service may add
/// around an error code.
pub fn normalize_error_code(raw: &str) -> &str {
    let without_suffix = raw.split(':').next().unwrap_or(raw);
    let code = without_suffix
        .rsplit('#')
        .next()
        .unwrap_or(without_suffix);
    code.trim()
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}: {}", self.code, message),
            None => write!(f, "{}", self.code),
        }
    }
}

impl std::error::Error for ServiceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_error_code_strips_namespace_and_suffix() {
        assert_eq!(
            normalize_error_code("com.amazonaws.backup#ResourceNotFoundException"),
            "ResourceNotFoundException"
        );
        assert_eq!(
            normalize_error_code("LimitExceededException:http://internal/"),
            "LimitExceededException"
        );
        assert_eq!(normalize_error_code("InvalidRequestException"), "InvalidRequestException");
    }

    #[test]
    fn test_from_body_reads_already_exists_details() {
        let body = r#"{
            "__type": "AlreadyExistsException",
            "message": "Backup vault already exists",
            "Arn": "arn:aws:backup:us-east-1:123456789012:backup-vault:Default",
            "CreatorRequestId": "req-1"
        }"#;

        let error = ServiceError::from_body(body, None).unwrap();

        assert_eq!(error.code, ServiceErrorCode::AlreadyExists);
        assert_eq!(error.message.as_deref(), Some("Backup vault already exists"));
        assert_eq!(error.creator_request_id.as_deref(), Some("req-1"));
        assert_eq!(
            error.to_string(),
            "AlreadyExistsException: Backup vault already exists"
        );
    }

    #[test]
    fn test_header_wins_over_body_type() {
        let body = r#"{"__type": "InvalidRequestException", "Message": "bad"}"#;
        let error = ServiceError::from_body(body, Some("ServiceUnavailableException")).unwrap();

        assert_eq!(error.code, ServiceErrorCode::ServiceUnavailable);
        assert_eq!(error.message.as_deref(), Some("bad"));
    }

    #[test]
    fn test_unrecognised_code_is_kept() {
        let error = ServiceError::from_body("", Some("ThrottlingException")).unwrap();
        assert_eq!(
            error.code,
            ServiceErrorCode::Unknown("ThrottlingException".to_string())
        );
    }
}
