//! Environment variable catalogue: every name the loader reads and its default.

use super::env::EnvSource;
use super::resolve::{resolve_int, resolve_string};

/// A string-valued variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrVar {
    pub name: &'static str,
    pub default: &'static str,
}

impl StrVar {
    pub fn resolve(&self, env: &impl EnvSource) -> String {
        resolve_string(env, self.name, self.default)
    }
}

/// An integer-valued variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntVar {
    pub name: &'static str,
    pub default: i64,
}

impl IntVar {
    pub fn resolve(&self, env: &impl EnvSource) -> i64 {
        resolve_int(env, self.name, self.default)
    }
}

// Application metadata
pub const APP_NAME: StrVar = StrVar { name: "APP_NAME", default: "qrun" };
pub const APP_VERSION: StrVar = StrVar { name: "APP_VERSION", default: "1.0.0" };
pub const APP_ENV: StrVar = StrVar { name: "APP_ENV", default: "development" };

// Server
pub const SERVER_PORT: StrVar = StrVar { name: "SERVER_PORT", default: "8080" };
pub const SHUTDOWN_TIMEOUT_MS: IntVar = IntVar { name: "SHUTDOWN_TIMEOUT_MS", default: 5000 };

// Queue
pub const REDIS_HOST: StrVar = StrVar { name: "REDIS_HOST", default: "localhost" };
pub const REDIS_PORT: StrVar = StrVar { name: "REDIS_PORT", default: "6379" };
pub const REDIS_PASSWORD: StrVar = StrVar { name: "REDIS_PASSWORD", default: "" };
pub const REDIS_DB: IntVar = IntVar { name: "REDIS_DB", default: 0 };
pub const REDIS_STREAM: StrVar = StrVar { name: "REDIS_STREAM", default: "qrun_stream" };
pub const REDIS_CONSUMER_NAME: StrVar = StrVar {
    name: "REDIS_CONSUMER_NAME",
    default: "qrun_consumer",
};
pub const REDIS_CONSUMER_GROUP: StrVar = StrVar {
    name: "REDIS_CONSUMER_GROUP",
    default: "qrun_group",
};

// Worker
pub const WORKER_CONCURRENCY: IntVar = IntVar { name: "WORKER_CONCURRENCY", default: 4 };
pub const WORKER_MAX_RETRIES: IntVar = IntVar { name: "WORKER_MAX_RETRIES", default: 3 };

/// Either kind of variable, for listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Var {
    Str(StrVar),
    Int(IntVar),
}

impl Var {
    pub fn name(&self) -> &'static str {
        match self {
            Var::Str(v) => v.name,
            Var::Int(v) => v.name,
        }
    }

    pub fn default_display(&self) -> String {
        match self {
            Var::Str(v) => v.default.to_string(),
            Var::Int(v) => v.default.to_string(),
        }
    }

    /// The value this variable resolves to under `env`, rendered as text.
    pub fn resolve_display(&self, env: &impl EnvSource) -> String {
        match self {
            Var::Str(v) => v.resolve(env),
            Var::Int(v) => v.resolve(env).to_string(),
        }
    }

    /// Whether this variable is secret and must not be printed.
    pub fn is_secret(&self) -> bool {
        self.name() == REDIS_PASSWORD.name
    }
}

/// Every variable, in assembly order.
pub const ALL: [Var; 14] = [
    Var::Str(APP_NAME),
    Var::Str(APP_VERSION),
    Var::Str(APP_ENV),
    Var::Str(SERVER_PORT),
    Var::Int(SHUTDOWN_TIMEOUT_MS),
    Var::Str(REDIS_HOST),
    Var::Str(REDIS_PORT),
    Var::Str(REDIS_PASSWORD),
    Var::Int(REDIS_DB),
    Var::Str(REDIS_STREAM),
    Var::Str(REDIS_CONSUMER_NAME),
    Var::Str(REDIS_CONSUMER_GROUP),
    Var::Int(WORKER_CONCURRENCY),
    Var::Int(WORKER_MAX_RETRIES),
];
