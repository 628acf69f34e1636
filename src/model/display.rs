//! Debug rendering shared by every record's `Display` impl.
//!
//! A record renders as `{Name: value, Name: value}` listing only the members
//! that are set, in wire-name order. Nested records render the same way.

use serde::Serialize;
use serde_json::Value;
use std::fmt;

pub(crate) const REDACTED: &str = "***Sensitive Data Redacted***";

/// Wire members whose contents never appear in rendered output.
const SENSITIVE_MEMBERS: &[&str] = &[
    "BackupPlanTags",
    "BackupVaultTags",
    "Metadata",
    "RecoveryPointTags",
    "RestoreMetadata",
    "TagKeyList",
    "Tags",
];

pub(crate) fn render_record<T: Serialize>(record: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let value = serde_json::to_value(record).map_err(|_| fmt::Error)?;
    write_value(&value, f)
}

fn write_value(value: &Value, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match value {
        Value::Object(members) => {
            f.write_str("{")?;
            for (index, (name, member)) in members.iter().enumerate() {
                if index > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{name}: ")?;
                if SENSITIVE_MEMBERS.contains(&name.as_str()) {
                    f.write_str(REDACTED)?;
                } else {
                    write_value(member, f)?;
                }
            }
            f.write_str("}")
        }
        Value::Array(items) => {
            f.write_str("[")?;
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    f.write_str(", ")?;
                }
                write_value(item, f)?;
            }
            f.write_str("]")
        }
        Value::String(text) => f.write_str(text),
        other => write!(f, "{other}"),
    }
}
