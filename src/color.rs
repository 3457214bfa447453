//! Brush colors.
//!
//! Colors are straight (non-premultiplied) RGBA, the same representation the
//! surfaces store, so a committed pixel is bit-for-bit the brush color.

use image::Rgba;

use crate::error::{CanvasError, CanvasResult};

pub type Color = Rgba<u8>;

pub const BLACK: Color = Rgba([0, 0, 0, 255]);
pub const RED: Color = Rgba([255, 0, 0, 255]);
pub const TRANSPARENT: Color = Rgba([0, 0, 0, 0]);

/// Parses `#rgb`, `#rrggbb` or `#rrggbbaa` (the leading `#` is optional).
pub fn parse_hex(text: &str) -> CanvasResult<Color> {
    let invalid = || CanvasError::InvalidColor(text.to_owned());
    let hex = text.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);

    if !hex.is_ascii() {
        return Err(invalid());
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
    let short = |s: &str| channel(s).map(|v| v * 17);

    match hex.len() {
        3 => Ok(Rgba([short(&hex[0..1])?, short(&hex[1..2])?, short(&hex[2..3])?, 255])),
        6 => Ok(Rgba([channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?, 255])),
        8 => Ok(Rgba([
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
            channel(&hex[6..8])?,
        ])),
        _ => Err(invalid()),
    }
}

/// Formats as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
pub fn to_hex(color: Color) -> String {
    let Rgba([r, g, b, a]) = color;
    if a == u8::MAX {
        format!("#{r:02x}{g:02x}{b:02x}")
    } else {
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}

pub fn to_color32(color: Color) -> egui::Color32 {
    let Rgba([r, g, b, a]) = color;
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

pub fn from_color32(color: egui::Color32) -> Color {
    Rgba(color.to_srgba_unmultiplied())
}

/// Serde adapter storing a color as a hex string
pub mod hex {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::Color;

    pub fn serialize<S: Serializer>(color: &Color, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::to_hex(*color))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
        let text = String::deserialize(deserializer)?;
        super::parse_hex(&text).map_err(serde::de::Error::custom)
    }
}
