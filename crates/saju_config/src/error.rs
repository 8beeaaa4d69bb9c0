use std::path::PathBuf;

use saju_base::SajuError;
use thiserror::Error;

/// Errors from loading configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("cannot read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parsing error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{key}: {source}")]
    Locale {
        key: String,
        #[source]
        source: SajuError,
    },

    #[error("{key}: unknown output format {value:?} (expected \"json\" or \"text\")")]
    Format { key: String, value: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
