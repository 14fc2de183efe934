use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "ORIGINSENSE_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("display.threshold must be between 0.0 and 1.0, got {0}")]
    InvalidThreshold(f32),
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub geography: GeographyConfig,
}

/// How a "no evidence" verdict is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoEvidenceDisplay {
    #[default]
    Unknown,
    NotMadeInIndia,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Indian verdicts must score strictly above this to earn the badge.
    pub threshold: f32,
    pub no_evidence: NoEvidenceDisplay,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub color: bool,
}

/// Names appended to the built-in geography lists.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct GeographyConfig {
    pub extra_cities: Vec<String>,
    pub extra_states: Vec<String>,
    pub extra_industrial_areas: Vec<String>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            no_evidence: NoEvidenceDisplay::Unknown,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

impl DisplayConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if (0.0..=1.0).contains(&self.threshold) {
            Ok(())
        } else {
            Err(ConfigError::InvalidThreshold(self.threshold))
        }
    }
}

impl GeographyConfig {
    pub fn is_empty(&self) -> bool {
        self.extra_cities.is_empty()
            && self.extra_states.is_empty()
            && self.extra_industrial_areas.is_empty()
    }
}

impl Config {
    /// Load from `$ORIGINSENSE_CONFIG`, else the user config file, else
    /// defaults. A missing default file is not an error; a missing file that
    /// was asked for explicitly is.
    pub fn load() -> Result<Self, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
            return Self::load_from(Path::new(&path));
        }
        match Self::config_file_path() {
            Some(path) if path.is_file() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.display.validate()?;
        Ok(config)
    }

    fn config_file_path() -> Option<PathBuf> {
        Self::config_dir().map(|mut path| {
            path.push("config.toml");
            path
        })
    }

    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("originsense");
            path
        })
    }
}
