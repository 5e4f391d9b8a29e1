//! Logging setup
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: filter directives (default: `dataset_io=info`)
//! - `DATASET_IO_LOG_FORMAT`: `pretty` (default) or `json`

use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const ENV_LOG_FORMAT: &str = "DATASET_IO_LOG_FORMAT";
const DEFAULT_FILTER: &str = "dataset_io=info";

/// Install the global subscriber; logs go to stderr so stdout stays clean
pub fn init_logging() -> Result<()> {
    let log_format = std::env::var(ENV_LOG_FORMAT).unwrap_or_else(|_| "pretty".to_string());

    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))?;

    match log_format.as_str() {
        "json" => {
            // Production: JSON structured logging
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .try_init()?;
        }
        _ => {
            // Development: Pretty formatting with colors
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty().with_writer(std::io::stderr))
                .try_init()?;
        }
    }

    Ok(())
}
