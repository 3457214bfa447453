use serde::{Deserialize, Serialize};

use crate::color::{self, Color};
use crate::error::{CanvasError, CanvasResult};

/// Brush settings read on every preview and commit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushOptions {
    /// Side length of the square footprint, in pixels
    pub size: u32,
    #[serde(with = "color::hex")]
    pub color: Color,
}

impl Default for BrushOptions {
    fn default() -> Self {
        Self {
            size: 5,
            color: color::BLACK,
        }
    }
}

impl BrushOptions {
    pub fn validate(&self) -> CanvasResult<()> {
        if self.size == 0 {
            return Err(CanvasError::InvalidDimensions {
                width: self.size,
                height: self.size,
            });
        }
        Ok(())
    }
}

/// Target dimensions for both surfaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasOptions {
    pub width: u32,
    pub height: u32,
}

impl Default for CanvasOptions {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
        }
    }
}

impl CanvasOptions {
    pub fn validate(&self) -> CanvasResult<()> {
        check_dimensions(self.width, self.height)
    }
}

pub(crate) fn check_dimensions(width: u32, height: u32) -> CanvasResult<()> {
    if width == 0 || height == 0 {
        return Err(CanvasError::InvalidDimensions { width, height });
    }
    Ok(())
}
