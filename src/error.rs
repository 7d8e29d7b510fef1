//! Error types for qrun.
//!
//! Configuration loading itself never fails; these cover the ambient
//! machinery around it.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("telemetry error: {0}")]
    Telemetry(String),
}

pub type Result<T> = std::result::Result<T, Error>;
