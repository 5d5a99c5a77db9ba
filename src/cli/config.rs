//! stakeproof configuration file handling
//!
//! Provides default configuration generation and loading for the CLI.
//! Configuration files are TOML and live under the user config directory
//! unless `--config` points elsewhere.
//!
//! Private keys never go in this file. They travel only inside proof requests.

use serde::{Deserialize, Serialize};
use stakeproof::request::ProofDefaults;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default log level
const DEFAULT_LOG_LEVEL: &str = "info";

/// Errors loading or writing the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to write config file '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// CLI configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StakeProofConfig {
    /// Values used when a request omits sequence or expiration
    #[serde(default)]
    pub proof: ProofDefaults,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Output formatting
    #[serde(default)]
    pub output: OutputConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins if set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print JSON
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_pretty() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
        }
    }
}

impl StakeProofConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from `path` if given, else from the default location.
    ///
    /// A missing file at the default location means built-in defaults; an
    /// explicitly named file must exist.
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let path = default_config_path();
                if path.exists() {
                    Self::load(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Save configuration to a TOML file
    #[allow(dead_code)]
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        write_file(path, &contents)
    }

    /// Generate default configuration content as a string with comments
    pub fn generate_default_toml() -> String {
        format!(
            r#"# stakeproof configuration
#
# Private keys do NOT belong here. They are supplied per stake in the
# proof request file.

[proof]
# Sequence number used when a request does not set one
sequence = 0

# Expiration time used when a request does not set one (0 = never)
expiration = 0

[logging]
# Log level: trace, debug, info, warn, error
# RUST_LOG overrides this when set
level = "{level}"

[output]
# Pretty-print JSON output
pretty = true
"#,
            level = DEFAULT_LOG_LEVEL
        )
    }

    /// Create and save a default configuration file
    pub fn create_default(config_path: &Path) -> Result<(), ConfigError> {
        write_file(config_path, &Self::generate_default_toml())
    }
}

fn write_file(path: &Path, contents: &str) -> Result<(), ConfigError> {
    let to_err = |source: std::io::Error| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };

    // Create parent directory if needed
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(to_err)?;
    }
    fs::write(path, contents).map_err(to_err)
}

/// Get the default config file path
///
/// - Linux: ~/.config/stakeproof/config.toml
/// - macOS: ~/Library/Application Support/stakeproof/config.toml
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("stakeproof")
        .join("config.toml")
}
