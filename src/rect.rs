use crate::units::*;

/// An axis-aligned rectangle in document space, specified by two opposite corners.
/// Documents are y-down, so `(x1, y1)` is the top-left corner.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    /// The x-coordinate of the first (left) corner.
    pub x1: Px,
    /// The y-coordinate of the first (top) corner.
    pub y1: Px,
    /// The x-coordinate of the second (right) corner.
    pub x2: Px,
    /// The y-coordinate of the second (bottom) corner.
    pub y2: Px,
}

impl Rect {
    /// A rectangle spanning `width` by `height` from the given top-left corner
    pub fn from_origin(x: Px, y: Px, width: Px, height: Px) -> Rect {
        Rect {
            x1: x,
            y1: y,
            x2: x + width,
            y2: y + height,
        }
    }

    pub fn width(&self) -> Px {
        self.x2 - self.x1
    }

    pub fn height(&self) -> Px {
        self.y2 - self.y1
    }

    /// Whether the rectangle covers a positive area
    pub fn has_area(&self) -> bool {
        *self.width() > 0.0 && *self.height() > 0.0
    }

    /// The smallest rectangle containing both rectangles
    pub fn union(&self, other: &Rect) -> Rect {
        Rect {
            x1: self.x1.min(other.x1),
            y1: self.y1.min(other.y1),
            x2: self.x2.max(other.x2),
            y2: self.y2.max(other.y2),
        }
    }

    /// Union an optional accumulator with another rectangle
    pub fn merge(acc: Option<Rect>, other: Rect) -> Option<Rect> {
        Some(match acc {
            Some(acc) => acc.union(&other),
            None => other,
        })
    }
}

impl From<kurbo::Rect> for Rect {
    fn from(r: kurbo::Rect) -> Rect {
        Rect {
            x1: Px(r.x0 as f32),
            y1: Px(r.y0 as f32),
            x2: Px(r.x1 as f32),
            y2: Px(r.y1 as f32),
        }
    }
}
