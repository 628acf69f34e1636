use crate::utils::error::{BackupError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_page_size, validate_url, Validate,
};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

pub const DEFAULT_REGION: &str = "us-east-1";
pub const ENDPOINT_PREFIX: &str = "backup";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

/// Client configuration, normally loaded from a TOML file.
///
/// ```toml
/// [client]
/// region = "eu-west-1"
/// validate_requests = true
///
/// [logging]
/// format = "json"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub client: ClientSection,
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientSection {
    pub region: String,
    /// Overrides the endpoint derived from `region`.
    pub endpoint: Option<String>,
    /// Run each request's validation pass before dispatching it.
    pub validate_requests: bool,
    /// `MaxResults` applied to list operations that leave it unset.
    pub default_page_size: Option<i32>,
}

impl Default for ClientSection {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            endpoint: None,
            validate_requests: false,
            default_page_size: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub level: Option<String>,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl ClientConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "Loaded client configuration file");
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text, expanding `${VAR}` references.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);

        toml::from_str(&processed).map_err(|e| BackupError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR}` with the value of the environment variable. Unset
    /// variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| {
                    tracing::warn!(variable = var_name, "Environment variable is not set");
                    format!("${{{}}}", var_name)
                })
            })
            .into_owned()
    }

    pub fn region(&self) -> &str {
        &self.client.region
    }

    /// The configured endpoint, or `https://backup.<region>.amazonaws.com`.
    pub fn endpoint(&self) -> String {
        match &self.client.endpoint {
            Some(endpoint) => endpoint.clone(),
            None => format!("https://{}.{}.amazonaws.com", ENDPOINT_PREFIX, self.client.region),
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.client.region = region.into();
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.client.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_validate_requests(mut self, enabled: bool) -> Self {
        self.client.validate_requests = enabled;
        self
    }

    pub fn with_default_page_size(mut self, page_size: i32) -> Self {
        self.client.default_page_size = Some(page_size);
        self
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("client.region", &self.client.region)?;
        validate_url("client.endpoint", &self.endpoint())?;
        validate_page_size("client.default_page_size", self.client.default_page_size)?;

        if let Some(level) = &self.logging.level {
            if !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
                return Err(BackupError::invalid(
                    "logging.level",
                    level,
                    format!("Valid levels: {}", LOG_LEVELS.join(", ")),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::from_toml_str("").unwrap();

        assert_eq!(config.region(), "us-east-1");
        assert_eq!(config.endpoint(), "https://backup.us-east-1.amazonaws.com");
        assert!(!config.client.validate_requests);
        assert_eq!(config.logging.format, LogFormat::Compact);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_full_document() {
        let config = ClientConfig::from_toml_str(
            r#"
            [client]
            region = "eu-west-1"
            endpoint = "http://localhost:4566"
            validate_requests = true
            default_page_size = 100

            [logging]
            level = "debug"
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.region(), "eu-west-1");
        assert_eq!(config.endpoint(), "http://localhost:4566");
        assert!(config.client.validate_requests);
        assert_eq!(config.client.default_page_size, Some(100));
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("BACKUP_MODEL_TEST_REGION", "ap-southeast-2");

        let config = ClientConfig::from_toml_str(
            r#"
            [client]
            region = "${BACKUP_MODEL_TEST_REGION}"
            "#,
        )
        .unwrap();

        assert_eq!(config.endpoint(), "https://backup.ap-southeast-2.amazonaws.com");
        std::env::remove_var("BACKUP_MODEL_TEST_REGION");
    }

    #[test]
    fn test_unset_env_var_is_kept_verbatim() {
        let processed = ClientConfig::substitute_env_vars("region = \"${BACKUP_MODEL_UNSET_VAR}\"");
        assert_eq!(processed, "region = \"${BACKUP_MODEL_UNSET_VAR}\"");
    }

    #[test]
    fn test_validation_failures() {
        let bad_page = ClientConfig::default().with_default_page_size(5000);
        assert!(bad_page.validate().is_err());

        let bad_endpoint = ClientConfig::default().with_endpoint("ftp://backup.example.com");
        assert!(bad_endpoint.validate().is_err());

        let blank_region = ClientConfig::default().with_region("  ");
        assert!(blank_region.validate().is_err());

        let mut bad_level = ClientConfig::default();
        bad_level.logging.level = Some("verbose".to_string());
        assert!(bad_level.validate().is_err());
    }

    #[test]
    fn test_malformed_toml_is_a_config_error() {
        let error = ClientConfig::from_toml_str("[client\nregion = 1").unwrap_err();
        assert!(matches!(error, BackupError::ConfigError { .. }));
    }
}
