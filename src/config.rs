//! Configuration file handling.
//!
//! Configuration lives in `<config dir>/newyear/config.toml`, or wherever
//! `NEWYEAR_CONFIG` points. A missing file is not an error: every value has
//! a default, and the defaults reproduce the classic show.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::prompt::Exchange;

/// Environment variable overriding the configuration file path.
pub const CONFIG_ENV: &str = "NEWYEAR_CONFIG";

/// Largest accepted frame count.
pub const MAX_FRAMES: u32 = 10_000;

/// Errors that can occur while loading or saving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine the configuration directory")]
    NoConfigDir,

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid value for {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fireworks: FireworksConfig,
    /// Exchange used by `newyear ask`
    pub ask: Exchange,
    /// Exchange that closes the fireworks show
    pub wish: Exchange,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fireworks: FireworksConfig::default(),
            ask: Exchange::height(),
            wish: Exchange::wish(),
        }
    }
}

/// `[fireworks]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FireworksConfig {
    /// Number of animation frames
    pub frames: u32,
    /// Pause after each frame
    pub frame_delay_ms: u64,
    /// Pause after the announce message
    pub dwell_ms: u64,
    /// Announce message
    pub message: String,
    /// Assumed screen width used to center the message
    pub screen_width: u16,
    /// 1-based row of the announce message
    pub message_row: u16,
    /// Hide the cursor while animating (only when stdout is a terminal)
    pub hide_cursor: bool,
    /// Center on the real terminal width instead of `screen_width`
    pub fit_terminal: bool,
}

impl Default for FireworksConfig {
    fn default() -> Self {
        Self {
            frames: 20,
            frame_delay_ms: 300,
            dwell_ms: 3000,
            message: "Happy New Year 2025!".to_string(),
            screen_width: 80,
            message_row: 12,
            hide_cursor: true,
            fit_terminal: false,
        }
    }
}

impl FireworksConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frames == 0 {
            return Err(ConfigError::Invalid {
                field: "fireworks.frames",
                reason: "must be at least 1",
            });
        }
        if self.frames > MAX_FRAMES {
            return Err(ConfigError::Invalid {
                field: "fireworks.frames",
                reason: "must be at most 10000",
            });
        }
        if self.screen_width == 0 {
            return Err(ConfigError::Invalid {
                field: "fireworks.screen_width",
                reason: "must be at least 1",
            });
        }
        if self.message_row == 0 {
            return Err(ConfigError::Invalid {
                field: "fireworks.message_row",
                reason: "rows start at 1",
            });
        }
        if self.message.is_empty() {
            return Err(ConfigError::Invalid {
                field: "fireworks.message",
                reason: "must not be empty",
            });
        }
        Ok(())
    }
}

impl Config {
    /// Path of the configuration file.
    ///
    /// `NEWYEAR_CONFIG` wins when set and non-empty.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("newyear").join("config.toml"))
    }

    /// Load the configuration from the default path.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load and validate configuration from `path`, or defaults if it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;

        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse TOML content without validating it.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.fireworks.validate()
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write the configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = self.to_toml()?;
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(path, content).map_err(write_err)?;
        Ok(())
    }
}
