//! # qrun
//!
//! Startup configuration for the qrun API and worker services.
//!
//! Resolves a fixed set of environment variables against typed defaults
//! into one immutable [`Config`](config::Config) snapshot, logs a single
//! startup notice, and hands the snapshot to its consumers.

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::Config;
