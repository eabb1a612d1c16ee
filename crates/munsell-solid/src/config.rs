//! Deployment configuration.
//!
//! A YAML file names the table asset and the placement spacing. Every field
//! is optional:
//!
//! ```yaml
//! table: data/munsell-26.json
//! placement:
//!   radius_step: 0.75
//!   value_step: 1.0
//!   element_scale: 0.5
//! ```
//!
//! A relative `table` path is resolved against the config file's directory.

use crate::{PlacementConfig, SolidError, SolidResult};
use munsell_core::{format, ColorTable};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Settings for one deployment of the solid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolidConfig {
    /// Path to the JSON table asset.
    pub table: Option<PathBuf>,
    /// Cell spacing and size.
    pub placement: PlacementConfig,
}

impl SolidConfig {
    /// Loads configuration from a file.
    pub fn from_file(path: impl AsRef<Path>) -> SolidResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SolidError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_yaml_str(&content)?;
        if let Some(dir) = path.parent() {
            config.table = config
                .table
                .take()
                .map(|t| if t.is_relative() { dir.join(t) } else { t });
        }
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> SolidResult<Self> {
        // An empty document deserializes as null; treat it as all defaults.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Loads the configured table asset.
    pub fn load_table(&self) -> SolidResult<ColorTable> {
        let path = self.table.as_ref().ok_or(SolidError::NoTable)?;
        Ok(format::read_json(path)?)
    }
}
