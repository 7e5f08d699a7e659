use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("section_level must be between 1 and 6, got {0}")]
    InvalidSectionLevel(u8),

    #[error("marker must be a single ASCII character, got {0:?}")]
    InvalidMarker(String),
}

/// One inline marker rule: a doubled `marker` character styles `tag` spans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerRule {
    pub marker: String,
    pub tag: String,
}

impl MarkerRule {
    /// The marker as a byte. `None` only for rules that failed validation.
    pub fn marker_byte(&self) -> Option<u8> {
        match self.marker.as_bytes() {
            [b] if b.is_ascii() => Some(*b),
            _ => None,
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Heading level that starts a new section. Engine default when unset.
    #[serde(default)]
    pub section_level: Option<u8>,
    /// Inline marker rules replacing the engine defaults when present.
    #[serde(default)]
    pub markers: Option<Vec<MarkerRule>>,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        config.validate()?;
        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/marktide");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(level) = self.section_level
            && !(1..=6).contains(&level)
        {
            return Err(ConfigError::InvalidSectionLevel(level));
        }
        if let Some(markers) = &self.markers {
            for rule in markers {
                if rule.marker_byte().is_none() {
                    return Err(ConfigError::InvalidMarker(rule.marker.clone()));
                }
            }
        }
        Ok(())
    }
}
