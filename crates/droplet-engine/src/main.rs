//! Droplet engine binary.
//!
//! Resolves named initial droplet-distribution presets and prints them as
//! a JSON report on stdout. Logs go to stderr.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `DROPLET_CONFIG`, or `droplet-config.yaml`
//!    when present, or defaults
//! 2. Initialize structured logging (tracing)
//! 3. Build the case registry (builtin catalog plus custom presets)
//! 4. Resolve the requested cases
//! 5. Print the report
//!
//! # Usage
//!
//! ```text
//! droplet-engine                      # resolve the configured cases
//! droplet-engine bott_golo shima_golo # resolve the named cases
//! droplet-engine --list               # list available case names
//! ```

mod error;

use std::path::Path;

use droplet_core::config::{LoggingConfig, RunConfig};
use droplet_core::run::{self, CaseReport};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;

/// Environment variable naming the configuration file.
const CONFIG_ENV: &str = "DROPLET_CONFIG";

/// Configuration file used when `DROPLET_CONFIG` is unset.
const DEFAULT_CONFIG_PATH: &str = "droplet-config.yaml";

/// What the command line asked for.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    /// Print the available case names.
    List,
    /// Resolve the given cases, or the configured ones when empty.
    Resolve(Vec<String>),
}

fn parse_args<I>(args: I) -> Command
where
    I: IntoIterator<Item = String>,
{
    let mut names = Vec::new();
    for arg in args {
        if arg == "--list" || arg == "-l" {
            return Command::List;
        }
        names.push(arg);
    }
    Command::Resolve(names)
}

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded, a custom preset is
/// invalid, or a requested case is unknown.
fn main() -> Result<(), EngineError> {
    let mut config = load_config()?;
    init_logging(&config.logging);
    info!(cases = ?config.cases, custom_cases = config.custom_cases.len(), "droplet-engine starting");

    let registry = run::build_registry(&config)?;

    match parse_args(std::env::args().skip(1)) {
        Command::List => {
            for name in registry.names() {
                println!("{name}");
            }
        }
        Command::Resolve(names) => {
            if !names.is_empty() {
                config.cases = names;
            }
            let cases = run::resolve_cases(&registry, config.cases.as_slice()).inspect_err(|e| {
                error!(error = %e, "case resolution failed");
            })?;
            let report = CaseReport::new(cases);
            println!("{}", serde_json::to_string_pretty(&report)?);
            info!(run_id = %report.run_id, resolved = report.cases.len(), "report written");
        }
    }

    Ok(())
}

fn load_config() -> Result<RunConfig, EngineError> {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        return Ok(RunConfig::from_file(Path::new(&path))?);
    }
    let default_path = Path::new(DEFAULT_CONFIG_PATH);
    if default_path.exists() {
        return Ok(RunConfig::from_file(default_path)?);
    }
    let mut config = RunConfig::default();
    config.apply_env_overrides();
    Ok(config)
}

fn init_logging(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
