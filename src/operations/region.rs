//! Account-level settings for the current Region.

use crate::utils::error::Result;
use crate::utils::validation::{validate_required_field, Validate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Input of `DescribeRegionSettings`. Reads the service opt-in preferences of the Region.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeRegionSettingsRequest {}

/// Output of `DescribeRegionSettings`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeRegionSettingsResponse {
    /// Whether each resource type is protected in this Region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type_opt_in_preference: Option<BTreeMap<String, bool>>,
}

fluent_setters!(DescribeRegionSettingsResponse {
    map with_resource_type_opt_in_preference, add_resource_type_opt_in_preference_entry, clear_resource_type_opt_in_preference_entries => resource_type_opt_in_preference: bool,
});

impl Validate for DescribeRegionSettingsRequest {
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// Input of `UpdateRegionSettings`. Changes the service opt-in preferences of the Region.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateRegionSettingsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type_opt_in_preference: Option<BTreeMap<String, bool>>,
}

fluent_setters!(UpdateRegionSettingsRequest {
    map with_resource_type_opt_in_preference, add_resource_type_opt_in_preference_entry, clear_resource_type_opt_in_preference_entries => resource_type_opt_in_preference: bool,
});

impl Validate for UpdateRegionSettingsRequest {
    fn validate(&self) -> Result<()> {
        validate_required_field("resource_type_opt_in_preference", &self.resource_type_opt_in_preference)?;
        Ok(())
    }
}

/// Input of `GetSupportedResourceTypes`. Lists the resource types the service can protect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetSupportedResourceTypesRequest {}

/// Output of `GetSupportedResourceTypes`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetSupportedResourceTypesResponse {
    /// Resource types such as `EBS`, `EFS`, `DynamoDB`, `RDS` or `Storage Gateway`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_types: Option<Vec<String>>,
}

fluent_setters!(GetSupportedResourceTypesResponse {
    list with_resource_types => resource_types: String,
});

impl Validate for GetSupportedResourceTypesRequest {
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

record_display!(
    DescribeRegionSettingsRequest,
    DescribeRegionSettingsResponse,
    UpdateRegionSettingsRequest,
    GetSupportedResourceTypesRequest,
    GetSupportedResourceTypesResponse,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opt_in_preferences_round_trip() {
        let body = r#"{"ResourceTypeOptInPreference": {"EFS": true, "DynamoDB": false}}"#;
        let response: DescribeRegionSettingsResponse = serde_json::from_str(body).unwrap();

        let preferences = response.resource_type_opt_in_preference.as_ref().unwrap();
        assert_eq!(preferences.get("EFS"), Some(&true));
        assert_eq!(preferences.get("DynamoDB"), Some(&false));

        let request = UpdateRegionSettingsRequest::default()
            .with_resource_type_opt_in_preference(preferences.clone());
        assert!(request.validate().is_ok());
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::to_value(&response).unwrap()
        );
    }

    #[test]
    fn test_empty_requests_encode_as_empty_objects() {
        assert_eq!(
            serde_json::to_string(&GetSupportedResourceTypesRequest::default()).unwrap(),
            "{}"
        );
        assert_eq!(DescribeRegionSettingsRequest::default().to_string(), "{}");
    }
}
