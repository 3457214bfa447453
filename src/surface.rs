use image::RgbaImage;

use crate::color::{Color, TRANSPARENT};
use crate::geometry::Position;

/// An RGBA raster buffer.
///
/// Every mutation bumps `version`, which the host uses to decide when the
/// GPU copy is stale.
#[derive(Debug, Clone)]
pub struct Surface {
    image: RgbaImage,
    version: u64,
}

impl Surface {
    /// Creates a fully transparent surface
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
            version: 0,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Pixel at `pos`, or `None` outside the bounds
    pub fn pixel(&self, pos: Position) -> Option<Color> {
        let x = u32::try_from(pos.x).ok()?;
        let y = u32::try_from(pos.y).ok()?;
        self.image.get_pixel_checked(x, y).copied()
    }

    pub fn is_blank(&self) -> bool {
        self.image.pixels().all(|p| *p == TRANSPARENT)
    }

    /// Overwrites the `width`×`height` rectangle at `top_left` with `color`.
    ///
    /// The rectangle is clipped to the surface; pixels are replaced, not blended.
    pub fn fill_rect(&mut self, top_left: Position, width: u32, height: u32, color: Color) {
        let clip = |start: i32, len: u32, bound: u32| -> Option<(u32, u32)> {
            let start = i64::from(start);
            let lo = start.max(0);
            let hi = (start + i64::from(len)).min(i64::from(bound));
            (lo < hi).then(|| (lo as u32, hi as u32))
        };

        let Some((x0, x1)) = clip(top_left.x, width, self.width()) else {
            return;
        };
        let Some((y0, y1)) = clip(top_left.y, height, self.height()) else {
            return;
        };

        for y in y0..y1 {
            for x in x0..x1 {
                self.image.put_pixel(x, y, color);
            }
        }
        self.touch();
    }

    /// Resets every pixel to transparent
    pub fn clear(&mut self) {
        self.image.pixels_mut().for_each(|p| *p = TRANSPARENT);
        self.touch();
    }

    /// Swaps in new content, keeping the version counter monotonic
    pub(crate) fn replace_image(&mut self, image: RgbaImage) {
        self.image = image;
        self.touch();
    }

    fn touch(&mut self) {
        self.version = self.version.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::BLACK;

    #[test]
    fn test_new_surface_is_blank() {
        let surface = Surface::new(4, 3);
        assert_eq!(surface.dimensions(), (4, 3));
        assert!(surface.is_blank());
    }

    #[test]
    fn test_fill_rect_clips_to_bounds() {
        let mut surface = Surface::new(4, 4);
        surface.fill_rect(Position::new(-1, 2), 3, 5, BLACK);

        let painted: Vec<(u32, u32)> = surface
            .image()
            .enumerate_pixels()
            .filter(|(_, _, p)| **p == BLACK)
            .map(|(x, y, _)| (x, y))
            .collect();
        assert_eq!(painted, vec![(0, 2), (1, 2), (0, 3), (1, 3)]);
    }

    #[test]
    fn test_fill_rect_fully_outside_is_noop() {
        let mut surface = Surface::new(4, 4);
        let version = surface.version();
        surface.fill_rect(Position::new(10, 10), 2, 2, BLACK);
        surface.fill_rect(Position::new(-5, 0), 2, 2, BLACK);
        assert!(surface.is_blank());
        assert_eq!(surface.version(), version);
    }

    #[test]
    fn test_clear_bumps_version() {
        let mut surface = Surface::new(2, 2);
        surface.fill_rect(Position::new(0, 0), 1, 1, BLACK);
        let version = surface.version();
        surface.clear();
        assert!(surface.is_blank());
        assert!(surface.version() > version);
    }

    #[test]
    fn test_pixel_out_of_bounds() {
        let surface = Surface::new(2, 2);
        assert_eq!(surface.pixel(Position::new(-1, 0)), None);
        assert_eq!(surface.pixel(Position::new(2, 0)), None);
        assert_eq!(surface.pixel(Position::new(1, 1)), Some(TRANSPARENT));
    }
}
