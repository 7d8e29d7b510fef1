//! Integration tests for telemetry initialization and the startup notice.

use qrun::config::Config;
use qrun::config::env::MapEnv;
use qrun::telemetry::{NoNotice, StartupNotice, TelemetryConfig, TracingNotice, init_telemetry};
use std::io::Write;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

/// In-memory writer for capturing formatted events.
#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Capture {
    type Writer = Capture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn telemetry_initializes() {
    // A global subscriber can only be set once per process; a second
    // attempt must surface as an error rather than a panic.
    let _ = init_telemetry(TelemetryConfig::default());
    let second = init_telemetry(TelemetryConfig {
        compact: true,
        ..TelemetryConfig::default()
    });
    assert!(second.is_err());
}

#[test]
fn tracing_notice_logs_environment_and_port() {
    let capture = Capture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(capture.clone())
        .with_ansi(false)
        .finish();

    let env = MapEnv::new()
        .with("APP_ENV", "staging")
        .with("SERVER_PORT", "9443");
    let config = Config::load(&env, &NoNotice);

    tracing::subscriber::with_default(subscriber, || {
        TracingNotice.config_loaded(&config);
    });

    let output = capture.contents();
    assert_eq!(output.lines().count(), 1, "{output}");
    assert!(output.contains("config loaded"), "{output}");
    assert!(output.contains("staging"), "{output}");
    assert!(output.contains("9443"), "{output}");
}

#[test]
fn load_with_tracing_notice_logs_once() {
    let capture = Capture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(capture.clone())
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        Config::load(&MapEnv::new(), &TracingNotice);
    });

    let output = capture.contents();
    assert_eq!(output.matches("config loaded").count(), 1, "{output}");
    assert!(output.contains("development"), "{output}");
    assert!(output.contains("8080"), "{output}");
}

#[test]
fn notice_never_logs_password() {
    let capture = Capture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(capture.clone())
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        Config::load(&MapEnv::new().with("REDIS_PASSWORD", "hunter2"), &TracingNotice);
    });

    assert!(!capture.contents().contains("hunter2"));
}
