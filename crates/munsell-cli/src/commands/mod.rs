//! CLI command implementations

pub mod info;
pub mod place;
pub mod sample;
pub mod solid;

use anyhow::{Context as _, Result};
use munsell_core::ColorTable;
use munsell_solid::SolidConfig;
use std::path::{Path, PathBuf};
use tracing::info;

/// Settings shared by every command.
pub struct Context {
    pub config: SolidConfig,
}

impl Context {
    /// Loads the config file (if any) and applies command-line overrides.
    pub fn new(config_path: Option<&Path>, table: Option<PathBuf>) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => SolidConfig::from_file(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
            None => SolidConfig::default(),
        };
        if table.is_some() {
            config.table = table;
        }
        Ok(Self { config })
    }

    /// Loads the configured color table.
    pub fn load_table(&self) -> Result<ColorTable> {
        let table = self
            .config
            .load_table()
            .context("Failed to load color table (pass --table or set `table` in the config)")?;
        let (h, v, c) = table.dims();
        info!(hue = h, value = v, chroma = c, "Loaded color table");
        Ok(table)
    }
}

/// Formats a color as space-separated channels.
pub fn format_rgb(rgb: [f32; 3]) -> String {
    format!("{:.6} {:.6} {:.6}", rgb[0], rgb[1], rgb[2])
}
