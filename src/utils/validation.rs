use crate::utils::error::{BackupError, Result};
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Smallest and largest page size a list operation accepts.
pub const MIN_PAGE_SIZE: i32 = 1;
pub const MAX_PAGE_SIZE: i32 = 1000;

static ARN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^arn:aws[a-zA-Z-]*:[a-zA-Z0-9-]+:[a-z0-9-]*:[0-9]{0,12}:.+$")
        .expect("ARN pattern is valid")
});

static VAULT_NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9\-_]{2,50}$").expect("vault name pattern is valid")
});

/// Checks the constraints the service documents for a request.
///
/// Nothing in the crate runs this implicitly except a `BackupClient`
/// configured with `validate_requests = true`; records accept any value.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(BackupError::invalid(field_name, url_str, "URL cannot be empty"));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(BackupError::invalid(
                field_name,
                url_str,
                format!("Unsupported URL scheme: {}", scheme),
            )),
        },
        Err(e) => Err(BackupError::invalid(
            field_name,
            url_str,
            format!("Invalid URL format: {}", e),
        )),
    }
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| BackupError::MissingFieldError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BackupError::invalid(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

/// A present, non-blank string member.
pub fn validate_required_text<'a>(field_name: &str, value: &'a Option<String>) -> Result<&'a str> {
    let text = validate_required_field(field_name, value)?;
    validate_non_empty_string(field_name, text)?;
    Ok(text.as_str())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(BackupError::invalid(
            field_name,
            value,
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

pub fn validate_page_size(field_name: &str, value: Option<i32>) -> Result<()> {
    match value {
        Some(size) => validate_range(field_name, size, MIN_PAGE_SIZE, MAX_PAGE_SIZE),
        None => Ok(()),
    }
}

pub fn validate_arn(field_name: &str, value: &str) -> Result<()> {
    if !ARN_PATTERN.is_match(value) {
        return Err(BackupError::invalid(
            field_name,
            value,
            "Expected arn:<partition>:<service>:<region>:<account>:<resource>",
        ));
    }
    Ok(())
}

pub fn validate_optional_arn(field_name: &str, value: &Option<String>) -> Result<()> {
    match value {
        Some(arn) => validate_arn(field_name, arn),
        None => Ok(()),
    }
}

/// Names accepted when creating a vault: 2 to 50 letters, digits, hyphens
/// or underscores.
pub fn validate_backup_vault_name(field_name: &str, value: &str) -> Result<()> {
    if !VAULT_NAME_PATTERN.is_match(value) {
        return Err(BackupError::invalid(
            field_name,
            value,
            "Must be 2 to 50 alphanumeric, '-' or '_' characters",
        ));
    }
    Ok(())
}

pub fn validate_each<T: Validate>(items: &Option<Vec<T>>) -> Result<()> {
    for item in items.iter().flatten() {
        item.validate()?;
    }
    Ok(())
}
