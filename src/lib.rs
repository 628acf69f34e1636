//! Typed request, response and record shapes for the AWS Backup service.
//!
//! Records are plain values: every member is optional, setters never
//! validate, and equality, hashing and `Display` are structural. Requests
//! can be checked against the service's documented constraints with
//! [`Validate`], and dispatched through a caller-supplied [`Transport`].

#[macro_use]
mod macros;

pub mod client;
pub mod config;
pub mod model;
pub mod operations;
pub mod utils;

pub use client::{BackupClient, Transport};
pub use config::ClientConfig;
pub use operations::{render_document, DocumentKind, Operation, OPERATION_NAMES};
pub use utils::error::{BackupError, ErrorCategory, Result};
pub use utils::validation::Validate;
