use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::options::{BrushOptions, CanvasOptions};

/// Environment variable naming the JSON config file
pub const CONFIG_ENV_VAR: &str = "PIXEL_PAINT_CONFIG";

/// Startup settings. Missing fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub brush: BrushOptions,
    pub canvas: CanvasOptions,
    /// Where the save action writes the exported image
    pub export_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            brush: BrushOptions::default(),
            canvas: CanvasOptions::default(),
            export_path: PathBuf::from("drawing.png"),
        }
    }
}

impl AppConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.brush.validate()?;
        config.canvas.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Loads the file named by [`CONFIG_ENV_VAR`], falling back to defaults
    /// when it is unset or unusable.
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            return Self::default();
        };
        let path = PathBuf::from(path);

        match Self::from_file(&path) {
            Ok(config) => {
                info!("Loaded config from {}", path.display());
                config
            }
            Err(err) => {
                warn!("Ignoring config {}: {}", path.display(), err);
                Self::default()
            }
        }
    }
}
