// Environment-driven configuration for the system adapters

use std::time::Duration;

pub const ENV_WAIT_TIMEOUT_MS: &str = "DATASET_IO_WAIT_TIMEOUT_MS";
pub const ENV_OPEN_EXTENSIONS: &str = "DATASET_IO_OPEN_EXTENSIONS";
pub const ENV_SAVE_EXTENSIONS: &str = "DATASET_IO_SAVE_EXTENSIONS";

/// Extension handled out of the box (JSON dataset documents)
pub const DEFAULT_EXTENSION: &str = "json";

/// Command execution settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionConfig {
    /// Upper bound on a single wait; `None` waits indefinitely
    pub wait_timeout_ms: Option<u64>,
}

impl ExecutionConfig {
    /// Read from `DATASET_IO_WAIT_TIMEOUT_MS`; unparsable or zero values mean no timeout
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let wait_timeout_ms = lookup(ENV_WAIT_TIMEOUT_MS)
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|ms| *ms > 0);
        Self { wait_timeout_ms }
    }

    pub fn wait_timeout(&self) -> Option<Duration> {
        self.wait_timeout_ms.map(Duration::from_millis)
    }
}

/// File extensions the dataset service accepts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    pub open_extensions: Vec<String>,
    pub save_extensions: Vec<String>,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            open_extensions: vec![DEFAULT_EXTENSION.to_string()],
            save_extensions: vec![DEFAULT_EXTENSION.to_string()],
        }
    }
}

impl FormatConfig {
    /// Read comma-separated lists from the environment, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            open_extensions: lookup(ENV_OPEN_EXTENSIONS)
                .map(|s| parse_extensions(&s))
                .filter(|exts| !exts.is_empty())
                .unwrap_or(defaults.open_extensions),
            save_extensions: lookup(ENV_SAVE_EXTENSIONS)
                .map(|s| parse_extensions(&s))
                .filter(|exts| !exts.is_empty())
                .unwrap_or(defaults.save_extensions),
        }
    }
}

/// Split "TIF, .json,png" into ["tif", "json", "png"]
pub fn parse_extensions(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}
