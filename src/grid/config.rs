//! Grid configuration.
//!
//! Construction parameters are validated before any storage is allocated;
//! invalid dimensions are the one condition treated as a hard error rather
//! than a routine runtime outcome.

use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;

mod defaults {
    pub fn grid_size() -> usize {
        50
    }

    pub fn cell_size() -> f32 {
        1.0
    }
}

/// Grid construction parameters.
///
/// Loadable from YAML; every field has a default so partial files work.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct GridConfig {
    /// Grid width in cells
    #[serde(default = "defaults::grid_size")]
    pub width: usize,

    /// Grid height in cells
    #[serde(default = "defaults::grid_size")]
    pub height: usize,

    /// Edge length of one square cell, in world units
    #[serde(default = "defaults::cell_size")]
    pub cell_size: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: defaults::grid_size(),
            height: defaults::grid_size(),
            cell_size: defaults::cell_size(),
        }
    }
}

impl GridConfig {
    /// Create a config with explicit dimensions
    pub fn new(width: usize, height: usize, cell_size: f32) -> Self {
        Self {
            width,
            height,
            cell_size,
        }
    }

    /// Validate construction parameters.
    ///
    /// Dimensions must be positive and the cell size positive and finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(ConfigError::InvalidCellSize(self.cell_size));
        }
        Ok(())
    }

    /// Load configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }
}

/// Invalid grid construction parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// Grid width is zero
    ZeroWidth,
    /// Grid height is zero
    ZeroHeight,
    /// Cell size is not a positive finite number
    InvalidCellSize(f32),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ZeroWidth => write!(f, "grid width must be positive"),
            ConfigError::ZeroHeight => write!(f, "grid height must be positive"),
            ConfigError::InvalidCellSize(size) => {
                write!(f, "cell size must be positive and finite, got {}", size)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Failure to load a grid configuration from YAML
#[derive(Debug)]
pub enum ConfigLoadError {
    /// File could not be read
    Io(io::Error),
    /// YAML could not be parsed
    Parse(serde_yaml::Error),
    /// Parsed values failed validation
    Validation(ConfigError),
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigLoadError::Io(e) => write!(f, "IO error: {}", e),
            ConfigLoadError::Parse(e) => write!(f, "YAML parse error: {}", e),
            ConfigLoadError::Validation(e) => write!(f, "config validation error: {}", e),
        }
    }
}

impl std::error::Error for ConfigLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigLoadError::Io(e) => Some(e),
            ConfigLoadError::Parse(e) => Some(e),
            ConfigLoadError::Validation(e) => Some(e),
        }
    }
}

impl From<io::Error> for ConfigLoadError {
    fn from(err: io::Error) -> Self {
        ConfigLoadError::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigLoadError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigLoadError::Parse(err)
    }
}

impl From<ConfigError> for ConfigLoadError {
    fn from(err: ConfigError) -> Self {
        ConfigLoadError::Validation(err)
    }
}
