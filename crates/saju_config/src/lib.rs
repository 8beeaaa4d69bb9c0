//! Layered configuration for the saju tools.
//!
//! Precedence, lowest first: built-in defaults, a TOML file, `SAJU_*`
//! environment variables, then command-line flags (applied by the caller).
//!
//! ```toml
//! [output]
//! locale = "en"
//! format = "text"
//!
//! [logging]
//! filter = "saju_base=debug,info"
//! ```

pub mod error;

use std::fmt::{Display, Formatter};
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use saju_base::Locale;

pub use error::{ConfigError, Result};

/// Environment variable overriding `output.locale`.
pub const ENV_LOCALE: &str = "SAJU_LOCALE";
/// Environment variable overriding `output.format`.
pub const ENV_FORMAT: &str = "SAJU_FORMAT";

/// Default tracing filter when neither the file nor `RUST_LOG` sets one.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// How the CLI prints a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

impl OutputFormat {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "text",
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" | "txt" => Ok(Self::Text),
            _ => Err(ConfigError::Format {
                key: "format".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub locale: Locale,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive string.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SajuConfig {
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

impl SajuConfig {
    /// Load from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Self::from_toml_str(&content)
    }

    /// Parse TOML; missing sections and keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// File (if given) or defaults, then process environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply `SAJU_LOCALE` / `SAJU_FORMAT` as resolved by `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_LOCALE) {
            self.output.locale = value.parse().map_err(|source| ConfigError::Locale {
                key: ENV_LOCALE.to_string(),
                source,
            })?;
            tracing::debug!(locale = %self.output.locale, "locale from environment");
        }
        if let Some(value) = lookup(ENV_FORMAT) {
            self.output.format = value.parse().map_err(|_| ConfigError::Format {
                key: ENV_FORMAT.to_string(),
                value,
            })?;
            tracing::debug!(format = %self.output.format, "format from environment");
        }
        Ok(())
    }
}
