use image::{RgbaImage, imageops};
use log::debug;

use crate::error::CanvasResult;
use crate::options::check_dimensions;
use crate::surface::Surface;

/// Changes a surface's dimensions, keeping every pixel whose coordinates
/// still exist.
///
/// The old content is composited at the origin of a transparent scratch
/// buffer of the target size (cropping or padding it), the live surface is
/// reallocated blank at the new size, and the scratch is composited back.
/// Newly exposed pixels are transparent. A zero-sized target is rejected and
/// leaves the surface untouched.
pub fn resize(surface: &mut Surface, width: u32, height: u32) -> CanvasResult<()> {
    check_dimensions(width, height)?;

    if surface.dimensions() == (width, height) {
        return Ok(());
    }

    debug!(
        "Resizing surface {}x{} -> {}x{}",
        surface.width(),
        surface.height(),
        width,
        height
    );

    let mut scratch = RgbaImage::new(width, height);
    imageops::replace(&mut scratch, surface.image(), 0, 0);

    let mut live = RgbaImage::new(width, height);
    imageops::replace(&mut live, &scratch, 0, 0);

    surface.replace_image(live);
    Ok(())
}
