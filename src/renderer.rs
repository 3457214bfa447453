// src/renderer.rs
use std::io::Cursor;

use image::ImageFormat;
use log::{debug, info};

use crate::color::{self, Color};
use crate::error::CanvasResult;
use crate::geometry::Position;
use crate::options::BrushOptions;
use crate::resize;
use crate::surface::Surface;

/// Fill used for the cursor footprint on the preview surface
pub const PREVIEW_COLOR: Color = color::RED;

/// Content type the exported bytes are handed out as
pub const EXPORT_CONTENT_TYPE: &str = "application/octet-stream";

/// What a resolved position means when it is committed.
///
/// Each variant is one arm in [`RenderPipeline::commit`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Tool {
    #[default]
    Brush,
}

impl Tool {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Brush => "Brush",
        }
    }
}

/// Which of the two surfaces an operation targets
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum SurfaceKind {
    Preview,
    Persistent,
}

/// PNG-encoded canvas content, relabelled as a generic binary download
#[derive(Debug, Clone)]
pub struct ExportStream {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
}

/// Owns the preview and persistent surfaces.
///
/// The preview surface is redrawn from scratch on every update and never
/// read back. The persistent surface accumulates committed pixels and is the
/// only one that is reset or exported.
#[derive(Debug)]
pub struct RenderPipeline {
    preview: Surface,
    persistent: Surface,
    fill_color: Color,
}

impl RenderPipeline {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            preview: Surface::new(width, height),
            persistent: Surface::new(width, height),
            fill_color: color::BLACK,
        }
    }

    pub fn surface(&self, kind: SurfaceKind) -> &Surface {
        match kind {
            SurfaceKind::Preview => &self.preview,
            SurfaceKind::Persistent => &self.persistent,
        }
    }

    pub fn preview(&self) -> &Surface {
        &self.preview
    }

    pub fn persistent(&self) -> &Surface {
        &self.persistent
    }

    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    /// Clears the preview and, given a position, draws the brush footprint
    /// there in [`PREVIEW_COLOR`].
    pub fn preview_at(&mut self, position: Option<Position>, brush: &BrushOptions) {
        self.preview.clear();
        if let Some(position) = position {
            paint_footprint(&mut self.preview, position, brush.size, PREVIEW_COLOR);
        }
    }

    /// Applies `tool` at `position` on the persistent surface.
    ///
    /// Pixels are overwritten with the current fill color (see [`Self::set_color`]).
    pub fn commit(&mut self, position: Position, brush: &BrushOptions, tool: Tool) {
        match tool {
            Tool::Brush => {
                paint_footprint(&mut self.persistent, position, brush.size, self.fill_color)
            }
        }
    }

    /// Sets the color used by subsequent commits
    pub fn set_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    pub fn clear_persistent(&mut self) {
        info!("Clearing canvas");
        self.persistent.clear();
    }

    pub fn resize_persistent(&mut self, width: u32, height: u32) -> CanvasResult<()> {
        resize::resize(&mut self.persistent, width, height)
    }

    pub fn resize_preview(&mut self, width: u32, height: u32) -> CanvasResult<()> {
        resize::resize(&mut self.preview, width, height)
    }

    /// Encodes the persistent surface as PNG
    pub fn export_persistent(&self) -> CanvasResult<ExportStream> {
        let mut bytes = Vec::new();
        self.persistent
            .image()
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;

        info!(
            "Exported {}x{} canvas ({} bytes)",
            self.persistent.width(),
            self.persistent.height(),
            bytes.len()
        );

        Ok(ExportStream {
            bytes,
            content_type: EXPORT_CONTENT_TYPE,
        })
    }
}

/// Paints a `size`×`size` square centered on `position`.
///
/// Shared by the preview and persistent paths; only the target and color differ.
fn paint_footprint(surface: &mut Surface, position: Position, size: u32, color: Color) {
    let half = i32::try_from(size / 2).unwrap_or(i32::MAX);
    let top_left = position.offset(-half, -half);
    debug!("Painting {size}px footprint at {top_left:?}");
    surface.fill_rect(top_left, size, size, color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BLACK, TRANSPARENT};

    fn painted(surface: &Surface) -> Vec<(u32, u32)> {
        surface
            .image()
            .enumerate_pixels()
            .filter(|(_, _, p)| **p != TRANSPARENT)
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    fn brush(size: u32) -> BrushOptions {
        BrushOptions {
            size,
            color: BLACK,
        }
    }

    #[test]
    fn test_preview_footprint_is_centered() {
        let mut renderer = RenderPipeline::new(20, 20);
        renderer.preview_at(Some(Position::new(10, 10)), &brush(4));

        let pixels = painted(renderer.preview());
        assert_eq!(pixels.len(), 16);
        assert!(pixels.iter().all(|&(x, y)| (8..12).contains(&x) && (8..12).contains(&y)));
        assert!(renderer.persistent().is_blank());
    }

    #[test]
    fn test_odd_footprint() {
        let mut renderer = RenderPipeline::new(20, 20);
        renderer.preview_at(Some(Position::new(10, 10)), &brush(5));

        let pixels = painted(renderer.preview());
        assert_eq!(pixels.len(), 25);
        assert_eq!(pixels.first(), Some(&(8, 8)));
        assert_eq!(pixels.last(), Some(&(12, 12)));
    }

    #[test]
    fn test_preview_ignores_brush_color() {
        let mut renderer = RenderPipeline::new(8, 8);
        renderer.preview_at(Some(Position::new(3, 3)), &brush(1));
        assert_eq!(renderer.preview().pixel(Position::new(3, 3)), Some(PREVIEW_COLOR));
    }

    #[test]
    fn test_preview_is_redrawn_not_accumulated() {
        let mut renderer = RenderPipeline::new(20, 20);
        renderer.preview_at(Some(Position::new(2, 2)), &brush(2));
        renderer.preview_at(Some(Position::new(15, 15)), &brush(2));

        let pixels = painted(renderer.preview());
        assert_eq!(pixels, vec![(14, 14), (15, 14), (14, 15), (15, 15)]);

        renderer.preview_at(None, &brush(2));
        assert!(renderer.preview().is_blank());
    }

    #[test]
    fn test_commit_uses_fill_color_and_overwrites() {
        let mut renderer = RenderPipeline::new(10, 10);
        renderer.commit(Position::new(5, 5), &brush(3), Tool::Brush);
        assert_eq!(renderer.persistent().pixel(Position::new(5, 5)), Some(BLACK));

        let blue = image::Rgba([0, 0, 255, 128]);
        renderer.set_color(blue);
        renderer.commit(Position::new(5, 5), &brush(1), Tool::Brush);

        assert_eq!(renderer.persistent().pixel(Position::new(5, 5)), Some(blue));
        assert_eq!(renderer.persistent().pixel(Position::new(4, 4)), Some(BLACK));
        assert!(renderer.preview().is_blank());
    }

    #[test]
    fn test_clear_persistent() {
        let mut renderer = RenderPipeline::new(10, 10);
        renderer.commit(Position::new(5, 5), &brush(3), Tool::Brush);
        renderer.clear_persistent();
        assert!(renderer.persistent().is_blank());
        assert_eq!(renderer.persistent().dimensions(), (10, 10));
    }

    #[test]
    fn test_resize_both_surfaces() {
        let mut renderer = RenderPipeline::new(10, 10);
        renderer.commit(Position::new(1, 1), &brush(1), Tool::Brush);
        renderer.resize_persistent(30, 12).unwrap();
        renderer.resize_preview(30, 12).unwrap();

        assert_eq!(renderer.surface(SurfaceKind::Persistent).dimensions(), (30, 12));
        assert_eq!(renderer.surface(SurfaceKind::Preview).dimensions(), (30, 12));
        assert_eq!(renderer.persistent().pixel(Position::new(1, 1)), Some(BLACK));
        assert!(renderer.resize_preview(0, 0).is_err());
    }

    #[test]
    fn test_export_roundtrip() {
        let mut renderer = RenderPipeline::new(16, 9);
        renderer.set_color(image::Rgba([200, 10, 30, 255]));
        renderer.commit(Position::new(3, 4), &brush(2), Tool::Brush);

        let stream = renderer.export_persistent().unwrap();
        assert_eq!(stream.content_type, EXPORT_CONTENT_TYPE);

        let decoded = image::load_from_memory(&stream.bytes).unwrap().to_rgba8();
        assert_eq!(&decoded, renderer.persistent().image());
    }
}
