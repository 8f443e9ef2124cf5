//! Handles settings for the operator console. Configuration is layered:
//! optional TOML file, then `SOSTA_*` environment variables, then CLI flags.
//!
//! Fees stay raw strings here; `MoneyCents` parsing happens once at startup
//! so every source goes through the same validation.
use clap::Parser;
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/sosta.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Flat fee charged on every exit, e.g. "5.00". Prompted for when unset.
    pub entry_fee: Option<String>,
    /// Fee charged per whole parked hour, e.g. "2.00". Prompted for when unset.
    pub hourly_fee: Option<String>,
    /// Log level filter for the `tracing` subscriber.
    pub level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            entry_fee: None,
            hourly_fee: None,
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "sosta", about = "Operator console for a single parking lot")]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override the flat entry fee (e.g. 5.00).
    #[arg(long)]
    entry_fee: Option<String>,
    /// Override the hourly fee (e.g. 2.00).
    #[arg(long)]
    hourly_fee: Option<String>,
    /// Override the log level (error, warn, info, debug, trace).
    #[arg(long)]
    level: Option<String>,
}

pub fn load() -> Result<Settings> {
    let args = Args::parse();

    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("SOSTA"));
    let mut settings: Settings = builder.build()?.try_deserialize()?;

    if let Some(entry_fee) = args.entry_fee {
        settings.entry_fee = Some(entry_fee);
    }
    if let Some(hourly_fee) = args.hourly_fee {
        settings.hourly_fee = Some(hourly_fee);
    }
    if let Some(level) = args.level {
        settings.level = level;
    }

    Ok(settings)
}
