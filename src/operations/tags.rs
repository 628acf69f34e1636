//! Tagging operations for plans, vaults and recovery points.

use crate::utils::error::Result;
use crate::utils::validation::{
    validate_optional_arn, validate_page_size, validate_required_field, validate_required_text,
    Validate,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Input of `ListTags`. Lists the tags of a resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTagsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,
    /// Cursor returned by the previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Page size, 1 to 1000.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

fluent_setters!(ListTagsRequest {
    value with_resource_arn => resource_arn: String,
    value with_next_token => next_token: String,
    value with_max_results => max_results: i32,
});

/// Output of `ListTags`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTagsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeMap<String, String>>,
}

fluent_setters!(ListTagsResponse {
    value with_next_token => next_token: String,
    map with_tags, add_tags_entry, clear_tags_entries => tags: String,
});

impl Validate for ListTagsRequest {
    fn validate(&self) -> Result<()> {
        validate_required_text("resource_arn", &self.resource_arn)?;
        validate_optional_arn("resource_arn", &self.resource_arn)?;
        validate_page_size("max_results", self.max_results)?;
        Ok(())
    }
}

/// Input of `TagResource`. Adds tags to a resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TagResourceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeMap<String, String>>,
}

fluent_setters!(TagResourceRequest {
    value with_resource_arn => resource_arn: String,
    map with_tags, add_tags_entry, clear_tags_entries => tags: String,
});

impl Validate for TagResourceRequest {
    fn validate(&self) -> Result<()> {
        validate_required_text("resource_arn", &self.resource_arn)?;
        validate_optional_arn("resource_arn", &self.resource_arn)?;
        validate_required_field("tags", &self.tags)?;
        Ok(())
    }
}

/// Input of `UntagResource`. Removes tags from a resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UntagResourceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,
    /// Keys of the tags to remove.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_key_list: Option<Vec<String>>,
}

fluent_setters!(UntagResourceRequest {
    value with_resource_arn => resource_arn: String,
    list with_tag_key_list => tag_key_list: String,
});

impl Validate for UntagResourceRequest {
    fn validate(&self) -> Result<()> {
        validate_required_text("resource_arn", &self.resource_arn)?;
        validate_optional_arn("resource_arn", &self.resource_arn)?;
        validate_required_field("tag_key_list", &self.tag_key_list)?;
        Ok(())
    }
}

record_display!(
    ListTagsRequest,
    ListTagsResponse,
    TagResourceRequest,
    UntagResourceRequest,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::BackupError;

    const VAULT_ARN: &str = "arn:aws:backup:us-east-1:123456789012:backup-vault:Default";

    #[test]
    fn test_tag_resource_add_and_clear_entries() {
        let mut request = TagResourceRequest::default().with_resource_arn(VAULT_ARN);
        request
            .add_tags_entry("env", "prod")
            .unwrap()
            .add_tags_entry("team", "storage")
            .unwrap();
        assert_eq!(request.tags.as_ref().map(BTreeMap::len), Some(2));
        assert!(request.validate().is_ok());

        request.clear_tags_entries();
        assert_eq!(request.tags, None);
        assert!(matches!(
            request.validate(),
            Err(BackupError::MissingFieldError { ref field }) if field == "tags"
        ));
    }

    #[test]
    fn test_untag_resource_wire_shape() {
        let request = UntagResourceRequest::default()
            .with_resource_arn(VAULT_ARN)
            .with_tag_key_list(["env", "team"]);

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "ResourceArn": VAULT_ARN,
                "TagKeyList": ["env", "team"]
            })
        );
    }
}
