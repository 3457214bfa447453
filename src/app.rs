use std::path::{Path, PathBuf};

use crate::config::AppConfig;
use crate::controller::DrawingController;
use crate::error::CanvasError;
use crate::panels::{InputTracker, central_panel, options_panel, tools_panel};
use crate::renderer::ExportStream;
use crate::texture_manager::TextureManager;

/// eframe host around the drawing controller
pub struct PaintApp {
    controller: DrawingController,
    textures: TextureManager,
    export_path: PathBuf,
    pub(crate) tracker: InputTracker,
    /// Contents of the hex color field, which may be mid-edit
    pub(crate) color_text: String,
    status: Option<String>,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        Self::with_config(config)
    }

    pub fn with_config(config: AppConfig) -> Self {
        let controller = match DrawingController::new(config.brush, config.canvas) {
            Ok(controller) => controller,
            Err(err) => {
                log::warn!("Falling back to default canvas: {err}");
                DrawingController::default()
            }
        };

        Self {
            color_text: crate::color::to_hex(controller.brush_options().color),
            controller,
            textures: TextureManager::new(),
            export_path: config.export_path,
            tracker: InputTracker::default(),
            status: None,
        }
    }

    pub fn controller(&self) -> &DrawingController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut DrawingController {
        &mut self.controller
    }

    pub(crate) fn textures_mut(&mut self) -> (&DrawingController, &mut TextureManager) {
        (&self.controller, &mut self.textures)
    }

    pub fn export_path(&self) -> &Path {
        &self.export_path
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Surfaces a rejected operation to the user
    pub(crate) fn report(&mut self, err: CanvasError) {
        log::warn!("{err}");
        self.status = Some(err.to_string());
    }

    /// Exports the canvas and writes it to the configured path
    pub fn save(&mut self) {
        match self.controller.save() {
            Ok(stream) => self.write_export(&stream),
            Err(err) => self.report(err),
        }
    }

    pub(crate) fn write_export(&mut self, stream: &ExportStream) {
        match std::fs::write(&self.export_path, &stream.bytes) {
            Ok(()) => {
                log::info!("Saved {} bytes to {}", stream.bytes.len(), self.export_path.display());
                self.status = Some(format!("Saved to {}", self.export_path.display()));
            }
            Err(err) => {
                log::error!("Failed to write {}: {}", self.export_path.display(), err);
                self.status = Some(format!("Save failed: {err}"));
            }
        }
    }
}

impl eframe::App for PaintApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(self, ctx);
        options_panel(self, ctx);
        central_panel(self, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::CanvasOptions;

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let config = AppConfig {
            canvas: CanvasOptions { width: 0, height: 0 },
            ..Default::default()
        };
        let app = PaintApp::with_config(config);
        assert_eq!(app.controller().canvas_options(), &CanvasOptions::default());
        assert_eq!(app.color_text, "#000000");
    }

    #[test]
    fn test_save_writes_png() {
        let path = std::env::temp_dir().join(format!("pixel_paint_{}.png", std::process::id()));
        let config = AppConfig {
            canvas: CanvasOptions { width: 8, height: 8 },
            export_path: path.clone(),
            ..Default::default()
        };
        let mut app = PaintApp::with_config(config);
        app.save();

        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (8, 8));
        assert!(app.status().is_some_and(|s| s.starts_with("Saved")));
        std::fs::remove_file(&path).unwrap();
    }
}
