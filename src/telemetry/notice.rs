//! The startup notice emitted once a configuration snapshot is assembled.

use crate::config::Config;
use tracing::info;

/// Receives the freshly loaded configuration.
///
/// Injected into [`Config::load`] so the loader does not depend on a global
/// logger.
pub trait StartupNotice {
    fn config_loaded(&self, config: &Config);
}

impl<T: StartupNotice + ?Sized> StartupNotice for &T {
    fn config_loaded(&self, config: &Config) {
        (**self).config_loaded(config)
    }
}

/// Emits one `info` event through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotice;

impl StartupNotice for TracingNotice {
    fn config_loaded(&self, config: &Config) {
        info!(
            environment = %config.app.environment,
            port = %config.server.port,
            app = %config.app.name,
            version = %config.app.version,
            "config loaded"
        );
    }
}

/// Discards the notice.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNotice;

impl StartupNotice for NoNotice {
    fn config_loaded(&self, _config: &Config) {}
}
