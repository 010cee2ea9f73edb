//! Command-line driver for the transaction logger.
//!
//! Seeds an in-memory store from a TOML fixture, builds a logger for the given
//! transaction and either emits a message or shows what it resolved.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use txlog::config::{load_config, LogConfig};
use txlog::{
    InMemoryStore, LevelSetting, LogRecord, Logger, LoggerOptions, Severity, StdoutConsole,
    TransactionSnapshot,
};

#[derive(Parser)]
#[command(name = "txlog-cli")]
#[command(about = "Leveled logging against a fixture-backed record store", long_about = None)]
struct Cli {
    /// Logger configuration (TOML).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Table fixtures (TOML arrays of tables, one per table).
    #[arg(short, long)]
    fixtures: Option<PathBuf>,

    /// Dash-delimited bundle id of the transaction.
    #[arg(short, long)]
    bundle_id: String,

    /// Acting user of the transaction.
    #[arg(short, long, default_value = "system")]
    user: String,

    /// Write the store to this JSON file when done.
    #[arg(long)]
    snapshot: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log one message and print the persisted rows
    Emit {
        /// Severity name or ordinal (error, warning, info, debug).
        #[arg(short, long, default_value = "info")]
        severity: Severity,

        /// Threshold override (number or numeric string).
        #[arg(short, long)]
        level: Option<String>,

        /// Mirror the message to the console.
        #[arg(long)]
        echo: bool,

        /// Message parts, joined by newlines.
        message: Vec<String>,
    },
    /// Print the resolved source, threshold and options
    Resolve,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "txlog=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => LogConfig::default(),
    };
    let store = match &cli.fixtures {
        Some(path) => InMemoryStore::load_fixtures(path)?,
        None => InMemoryStore::new(),
    };
    let transaction = TransactionSnapshot::new(cli.bundle_id.clone(), cli.user.clone());

    match cli.command {
        Commands::Emit {
            severity,
            level,
            echo,
            message,
        } => {
            let mut options = LoggerOptions::default();
            options.level = level.map(LevelSetting::from);
            if echo {
                options.background_echo = Some(true);
            }

            let logger =
                Logger::with_config(Arc::new(store.clone()), transaction, options, &config)?
                    .with_console(Arc::new(StdoutConsole));

            let parts: Vec<&dyn std::fmt::Display> =
                message.iter().map(|m| m as &dyn std::fmt::Display).collect();
            let response = logger.log(severity, &parts)?;

            let rows: Vec<LogRecord> = store
                .records(&config.tables.log)
                .iter()
                .filter_map(LogRecord::from_record)
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({ "response": response, "records": rows }))?
            );
        }
        Commands::Resolve => {
            let logger = Logger::with_config(
                Arc::new(store.clone()),
                transaction,
                LoggerOptions::default(),
                &config,
            )?;
            let options = logger.options().map(|o| o.record().clone());
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "source": logger.source(),
                    "level": logger.level(),
                    "threshold": logger.level().threshold(),
                    "background_echo": logger.background_echo(),
                    "options": options,
                }))?
            );
        }
    }

    if let Some(path) = &cli.snapshot {
        store.save_to_file(path)?;
    }

    Ok(())
}
