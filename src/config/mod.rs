//! Configuration for the catalog.
//!
//! Two filesystem roots drive everything: where caller-supplied image sources
//! live and where stored images go. Loaded from an optional `pantry.toml` with
//! a `PANTRY_*` environment overlay; `validate` enforces that both roots exist,
//! since creating them is the embedding application's responsibility.

use crate::error::CatalogError;
use crate::logging::LoggingConfig;
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "pantry.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PantryConfig {
    /// Directory relative caller image paths are resolved against.
    #[serde(default = "default_source_root")]
    pub source_root: PathBuf,

    /// Canonical image store; stored files are named `<id>.<ext>`.
    #[serde(default = "default_image_root")]
    pub image_root: PathBuf,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_source_root() -> PathBuf {
    PathBuf::from("incoming")
}

fn default_image_root() -> PathBuf {
    PathBuf::from("images")
}

impl Default for PantryConfig {
    fn default() -> Self {
        Self {
            source_root: default_source_root(),
            image_root: default_image_root(),
            logging: LoggingConfig::default(),
        }
    }
}

impl PantryConfig {
    /// Load configuration. Precedence: defaults (lowest) -> `pantry.toml` in
    /// the working directory, if present -> `PANTRY_*` environment (highest).
    pub fn load() -> Result<Self, ConfigError> {
        Self::builder(File::with_name(DEFAULT_CONFIG_FILE).required(false))
    }

    /// Load configuration from a specific file with environment overlay.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        Self::builder(File::from(path))
    }

    fn builder(file: File<config::FileSourceFile, config::FileFormat>) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix("PANTRY")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        config.try_deserialize()
    }

    /// Require both roots to exist as directories. The core never creates
    /// them.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for (name, root) in [
            ("source_root", &self.source_root),
            ("image_root", &self.image_root),
        ] {
            if !root.is_dir() {
                return Err(CatalogError::Config(format!(
                    "{} is not an existing directory: {}",
                    name,
                    root.display()
                )));
            }
        }
        Ok(())
    }

    /// Write this configuration as a TOML file.
    pub fn write_to(&self, path: &Path) -> Result<(), CatalogError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CatalogError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content).map_err(|e| {
            CatalogError::Config(format!("Failed to write config to {}: {}", path.display(), e))
        })
    }
}
