use crate::common::ConfigError;

/// Rows of the reference grid.
pub const ROWS: usize = 7;
/// Columns of the reference grid.
pub const COLUMNS: usize = 7;
/// Discs in a line needed to win on the reference grid.
pub const RUN_LENGTH: usize = 4;
/// Upper bound on either grid dimension.
pub const MAX_DIMENSION: usize = 64;

/// Grid dimensions and winning run length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(default))]
pub struct GameConfig {
    pub rows: usize,
    pub columns: usize,
    pub run_length: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            rows: ROWS,
            columns: COLUMNS,
            run_length: RUN_LENGTH,
        }
    }
}

impl GameConfig {
    /// Build and validate a configuration.
    pub fn new(rows: usize, columns: usize, run_length: usize) -> Result<Self, ConfigError> {
        let config = GameConfig {
            rows,
            columns,
            run_length,
        };
        config.validate()?;
        Ok(config)
    }

    /// Total number of cells.
    pub fn cells(&self) -> usize {
        self.rows * self.columns
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let dims = 1..=MAX_DIMENSION;
        if !dims.contains(&self.rows) || !dims.contains(&self.columns) {
            return Err(ConfigError::InvalidDimensions {
                rows: self.rows,
                columns: self.columns,
            });
        }
        if self.run_length < 2 || self.run_length > self.rows.max(self.columns) {
            return Err(ConfigError::InvalidRunLength {
                run_length: self.run_length,
            });
        }
        Ok(())
    }
}

#[cfg(feature = "std")]
mod file {
    use super::GameConfig;
    use crate::common::ConfigError;
    use std::path::{Path, PathBuf};

    /// Errors raised while loading a configuration file.
    #[derive(Debug, thiserror::Error)]
    pub enum ConfigFileError {
        #[error("failed to read config file {path}: {source}")]
        FileRead {
            path: PathBuf,
            source: std::io::Error,
        },

        #[error("failed to parse TOML: {0}")]
        TomlParse(#[from] toml::de::Error),

        #[error("config validation error: {0}")]
        Invalid(#[from] ConfigError),
    }

    impl GameConfig {
        /// Load configuration from a TOML file. Missing keys take the
        /// reference values.
        pub fn load(path: &Path) -> Result<Self, ConfigFileError> {
            let content = std::fs::read_to_string(path).map_err(|e| ConfigFileError::FileRead {
                path: path.to_path_buf(),
                source: e,
            })?;
            let config: GameConfig = toml::from_str(&content)?;
            config.validate()?;
            Ok(config)
        }

        /// Like [`GameConfig::load`], falling back to the reference
        /// configuration if the file does not exist.
        pub fn load_or_default(path: &Path) -> Result<Self, ConfigFileError> {
            if path.exists() {
                Self::load(path)
            } else {
                log::warn!("config file '{}' not found, using defaults", path.display());
                Ok(Self::default())
            }
        }

        /// TOML text with every key at its reference value.
        pub fn default_toml() -> String {
            // A struct of three integers always serializes.
            toml::to_string_pretty(&GameConfig::default()).unwrap_or_default()
        }
    }
}

#[cfg(feature = "std")]
pub use file::ConfigFileError;
