//! Font registration config, loaded from TOML
//!
//! ```toml
//! [[fonts]]
//! slot = "body"
//! pixel_height = 14.0
//! path = "fonts/Mono.ttf"
//! point_size = 16.0   # optional
//! ```

use crate::display::{Display, FontSlot};
use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub fonts: Vec<FontEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FontEntry {
    pub slot: FontSlot,
    #[serde(default = "default_pixel_height")]
    pub pixel_height: f32,
    pub path: PathBuf,
    /// Rescale after loading
    pub point_size: Option<f32>,
}

fn default_pixel_height() -> f32 {
    14.0
}

impl DisplayConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read display config {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse display config {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let config: DisplayConfig = toml::from_str(content)?;
        for entry in &config.fonts {
            // Negated so NaN is rejected too
            if !(entry.pixel_height > 0.0) {
                anyhow::bail!(
                    "{:?}: pixel_height must be positive, got {}",
                    entry.slot,
                    entry.pixel_height
                );
            }
            if let Some(size) = entry.point_size {
                if !(size > 0.0) {
                    anyhow::bail!("{:?}: point_size must be positive, got {}", entry.slot, size);
                }
            }
        }
        Ok(config)
    }

    /// Register every font, in file order, so later entries win for a slot
    pub fn apply(&self, display: &mut impl Display) {
        for entry in &self.fonts {
            display.add_font(entry.slot, entry.pixel_height, &entry.path);
            if let Some(size) = entry.point_size {
                display.set_font_point_size(entry.slot, size);
            }
        }
    }
}
