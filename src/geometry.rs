use egui::Pos2;

/// A pixel coordinate in surface-local space.
///
/// Coordinates outside the surface are allowed; painting there simply
/// has no visible effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Floors a surface-local pointer position to whole pixels.
    ///
    /// Returns `None` for non-finite coordinates, which is how malformed
    /// pointer events get dropped.
    pub fn from_pos2(pos: Pos2) -> Option<Self> {
        if !pos.x.is_finite() || !pos.y.is_finite() {
            return None;
        }
        Some(Self::new(pos.x.floor() as i32, pos.y.floor() as i32))
    }

    /// Returns this position moved by `(dx, dy)`
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Computes the effective paint position.
///
/// With the axis lock engaged and an anchor present, one axis is pinned to
/// the anchor: if the pointer has travelled further vertically than
/// horizontally the x coordinate is pinned, otherwise the y coordinate is.
/// Ties pin x.
pub fn resolve(
    pointer: Option<Position>,
    anchor: Option<Position>,
    axis_locked: bool,
) -> Option<Position> {
    let pointer = pointer?;

    let anchor = match anchor {
        Some(anchor) if axis_locked => anchor,
        _ => return Some(pointer),
    };

    let dx = (i64::from(anchor.x) - i64::from(pointer.x)).abs();
    let dy = (i64::from(anchor.y) - i64::from(pointer.y)).abs();

    if dx <= dy {
        Some(Position::new(anchor.x, pointer.y))
    } else {
        Some(Position::new(pointer.x, anchor.y))
    }
}
