//! Typed configuration from environment variables.
//!
//! Loads once at startup and never fails: every field falls back to its
//! default when the variable is unset, empty, or (for integers) unparseable.
//! The snapshot is handed to the API and worker services by reference.
//! The Redis password is wrapped in secrecy::SecretString to prevent log leaks.

pub mod env;
pub mod resolve;
pub mod secrets;
pub mod vars;

use crate::telemetry::notice::{StartupNotice, TracingNotice};
use env::{EnvSource, ProcessEnv};
use secrets::{ExposeSecret, SecretString};
use serde::Serialize;
use std::time::Duration;

/// The full configuration snapshot shared by every qrun service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub queue: QueueConfig,
    pub worker: WorkerConfig,
}

/// Application metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppConfig {
    pub name: String,
    pub version: String,
    /// Deployment environment, e.g. "development" or "production". Not validated.
    pub environment: String,
}

impl AppConfig {
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

/// HTTP server settings, read by the API service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerConfig {
    /// Listen port as given; not checked for range.
    pub port: String,
    pub shutdown_timeout_ms: i64,
}

impl ServerConfig {
    /// Graceful shutdown budget. Negative values become zero.
    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_millis(u64::try_from(self.shutdown_timeout_ms).unwrap_or(0))
    }
}

/// Redis stream settings, read by the worker service.
#[derive(Debug, Clone, Serialize)]
pub struct QueueConfig {
    pub host: String,
    pub port: String,
    #[serde(serialize_with = "secrets::serialize_redacted")]
    pub password: SecretString,
    pub db: i64,
    pub stream: String,
    pub consumer_name: String,
    pub consumer_group: String,
}

impl QueueConfig {
    /// `host:port`.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn has_password(&self) -> bool {
        !self.password.expose_secret().is_empty()
    }

    /// `redis://[:password@]host:port/db`, kept secret since it may embed the password.
    pub fn connection_url(&self) -> SecretString {
        let url = if self.has_password() {
            format!(
                "redis://:{}@{}/{}",
                self.password.expose_secret(),
                self.address(),
                self.db
            )
        } else {
            format!("redis://{}/{}", self.address(), self.db)
        };
        SecretString::from(url)
    }
}

impl PartialEq for QueueConfig {
    fn eq(&self, other: &Self) -> bool {
        self.host == other.host
            && self.port == other.port
            && self.password.expose_secret() == other.password.expose_secret()
            && self.db == other.db
            && self.stream == other.stream
            && self.consumer_name == other.consumer_name
            && self.consumer_group == other.consumer_group
    }
}

/// Worker pool settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkerConfig {
    pub concurrency: i64,
    pub max_retries: i64,
}

impl Config {
    /// Load configuration from the process environment and log the startup notice.
    ///
    /// In local dev, call `dotenvy::dotenv().ok()` before this.
    pub fn from_env() -> Self {
        Self::load(&ProcessEnv, &TracingNotice)
    }

    /// Assemble a snapshot from `env`, reporting it once to `notice`.
    ///
    /// Each call resolves every variable afresh; callers load once and share
    /// the result.
    pub fn load(env: &impl EnvSource, notice: &impl StartupNotice) -> Self {
        let app = AppConfig {
            name: vars::APP_NAME.resolve(env),
            version: vars::APP_VERSION.resolve(env),
            environment: vars::APP_ENV.resolve(env),
        };

        let server = ServerConfig {
            port: vars::SERVER_PORT.resolve(env),
            shutdown_timeout_ms: vars::SHUTDOWN_TIMEOUT_MS.resolve(env),
        };

        let queue = QueueConfig {
            host: vars::REDIS_HOST.resolve(env),
            port: vars::REDIS_PORT.resolve(env),
            password: SecretString::from(vars::REDIS_PASSWORD.resolve(env)),
            db: vars::REDIS_DB.resolve(env),
            stream: vars::REDIS_STREAM.resolve(env),
            consumer_name: vars::REDIS_CONSUMER_NAME.resolve(env),
            consumer_group: vars::REDIS_CONSUMER_GROUP.resolve(env),
        };

        let worker = WorkerConfig {
            concurrency: vars::WORKER_CONCURRENCY.resolve(env),
            max_retries: vars::WORKER_MAX_RETRIES.resolve(env),
        };

        let config = Self {
            app,
            server,
            queue,
            worker,
        };
        notice.config_loaded(&config);
        config
    }
}
