//! Secret handling utilities.
//!
//! Re-exports secrecy types and provides the redacting serializer used
//! when a configuration snapshot is printed.

pub use secrecy::{ExposeSecret, SecretBox, SecretString};

use serde::Serializer;

/// Placeholder written in place of a non-empty secret.
pub const REDACTED: &str = "[REDACTED]";

/// Serialize a secret as `""` when empty and [`REDACTED`] otherwise.
pub fn serialize_redacted<S: Serializer>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error> {
    if secret.expose_secret().is_empty() {
        serializer.serialize_str("")
    } else {
        serializer.serialize_str(REDACTED)
    }
}
