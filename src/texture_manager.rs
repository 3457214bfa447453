use std::collections::HashMap;

use egui::{ColorImage, Context, TextureHandle, TextureId, TextureOptions};

use crate::renderer::SurfaceKind;
use crate::surface::Surface;

/// Keeps one GPU texture per surface, re-uploading only when the surface
/// version has moved on since the last upload.
#[derive(Default)]
pub struct TextureManager {
    textures: HashMap<SurfaceKind, (TextureHandle, u64)>,
    uploads: u64,
}

impl TextureManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the texture for `surface`, uploading it first if stale
    pub fn texture_for(&mut self, ctx: &Context, kind: SurfaceKind, surface: &Surface) -> TextureId {
        let version = surface.version();

        if let Some((handle, uploaded)) = self.textures.get_mut(&kind) {
            if *uploaded != version {
                handle.set(to_color_image(surface), TextureOptions::NEAREST);
                *uploaded = version;
                self.uploads += 1;
                log::trace!("Re-uploaded {kind:?} surface v{version} ({} uploads)", self.uploads);
            }
            return handle.id();
        }

        let name = format!("{kind:?}_surface");
        let handle = ctx.load_texture(name, to_color_image(surface), TextureOptions::NEAREST);
        let id = handle.id();
        self.textures.insert(kind, (handle, version));
        self.uploads += 1;
        id
    }

    /// Total number of uploads performed
    #[cfg(test)]
    pub(crate) fn upload_count(&self) -> u64 {
        self.uploads
    }

    #[cfg(test)]
    pub(crate) fn clear_cache(&mut self) {
        self.textures.clear();
    }
}

fn to_color_image(surface: &Surface) -> ColorImage {
    let (width, height) = surface.dimensions();
    ColorImage::from_rgba_unmultiplied(
        [width as usize, height as usize],
        surface.image().as_raw(),
    )
}
