use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::mapper::{DEFAULT_BRANCH, DEFAULT_SPACER};

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub padding: PaddingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddingConfig {
    /// Spacer repeated once per nesting level
    pub spacer: String,
    /// Glyph closing every row's padding
    pub branch: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format: text, json
    pub format: String,
    /// Pretty-print JSON output
    pub pretty: bool,
    /// Keep HTML entities in text output
    pub raw: bool,
    /// Extra node columns copied onto every row
    pub columns: Vec<String>,
}

impl Default for PaddingConfig {
    fn default() -> Self {
        Self {
            spacer: DEFAULT_SPACER.to_string(),
            branch: DEFAULT_BRANCH.to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            pretty: true,
            raw: false,
            columns: vec![],
        }
    }
}

/// Output formats understood by the flatten command
pub const OUTPUT_FORMATS: &[&str] = &["text", "json"];

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the user config file is read
    /// when present and defaults are used otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path().filter(|p| p.exists()) {
                Some(path) => Self::from_file(&path)?,
                None => Self::default(),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// `$XDG_CONFIG_HOME/nestmap/config.toml` or the platform equivalent
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("nestmap").join("config.toml"))
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        tracing::debug!(path = %path.display(), "Read config file");
        Ok(config)
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if !OUTPUT_FORMATS.contains(&self.output.format.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "unknown output format '{}' (expected one of: {})",
                self.output.format,
                OUTPUT_FORMATS.join(", ")
            )));
        }
        Ok(())
    }
}
