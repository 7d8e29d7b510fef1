//! qrun CLI: inspect the configuration the services will start with.

use clap::{Parser, Subcommand};
use qrun::config::Config;
use qrun::config::env::{EnvSource, ProcessEnv};
use qrun::config::resolve::resolve_string;
use qrun::config::secrets::REDACTED;
use qrun::config::vars;
use qrun::telemetry::{TelemetryConfig, init_telemetry};

#[derive(Parser)]
#[command(name = "qrun", about = "Startup configuration for the qrun services")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load the configuration snapshot and print it
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// List every environment variable the loader reads
    Vars,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    init_telemetry(TelemetryConfig {
        default_level: resolve_string(&ProcessEnv, "LOG_LEVEL", "info"),
        ..TelemetryConfig::default()
    })?;

    match cli.command {
        Command::Show { json } => cmd_show(json),
        Command::Vars => {
            cmd_vars(&ProcessEnv);
            Ok(())
        }
    }
}

fn cmd_show(json: bool) -> anyhow::Result<()> {
    let config = Config::from_env();

    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let password = if config.queue.has_password() {
        REDACTED
    } else {
        "-"
    };

    println!("[app]");
    println!("  name:             {}", config.app.name);
    println!("  version:          {}", config.app.version);
    println!("  environment:      {}", config.app.environment);
    println!("[server]");
    println!("  port:             {}", config.server.port);
    println!("  shutdown timeout: {}ms", config.server.shutdown_timeout_ms);
    println!("[queue]");
    println!("  address:          {}", config.queue.address());
    println!("  password:         {password}");
    println!("  db:               {}", config.queue.db);
    println!("  stream:           {}", config.queue.stream);
    println!("  consumer:         {}", config.queue.consumer_name);
    println!("  consumer group:   {}", config.queue.consumer_group);
    println!("[worker]");
    println!("  concurrency:      {}", config.worker.concurrency);
    println!("  max retries:      {}", config.worker.max_retries);

    Ok(())
}

fn cmd_vars(env: &impl EnvSource) {
    println!("{:<22}  {:<15}  {:<5}  VALUE", "NAME", "DEFAULT", "SET");
    println!("{}", "-".repeat(70));

    for var in vars::ALL {
        let set = env.var(var.name()).is_some_and(|v| !v.is_empty());
        let value = if var.is_secret() && set {
            REDACTED.to_string()
        } else {
            var.resolve_display(env)
        };
        let default = match var.default_display() {
            d if d.is_empty() => "\"\"".to_string(),
            d => d,
        };
        println!(
            "{:<22}  {:<15}  {:<5}  {}",
            var.name(),
            default,
            if set { "yes" } else { "no" },
            value
        );
    }
}
