//! 2D affine transformations for placing glyph outlines.

use crate::units::*;

/// An affine transformation matrix mapping outline coordinates into document space.
///
/// The matrix is represented as [a, b, c, d, e, f] corresponding to:
/// ```text
/// | a  b  0 |
/// | c  d  0 |
/// | e  f  1 |
/// ```
/// so a point `(x, y)` maps to `(a·x + c·y + e, b·x + d·y + f)`.
///
/// # Composing transforms
///
/// Transforms can be chained using [`then`](Transform::then) or the builder methods
/// [`with_translate`](Transform::with_translate) and [`with_scale`](Transform::with_scale).
/// Operations are applied in the order they're chained.
///
/// ```
/// use wordmark::{Transform, Px};
///
/// // font units (y-up) to a 120px glyph sitting on a baseline 90px down the page
/// let transform = Transform::scale(0.12, -0.12)
///     .with_translate(Px(10.0), Px(90.0));
/// assert_eq!(transform.apply(0.0, 0.0), (10.0, 90.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// Identity transform (no transformation)
    pub fn identity() -> Self {
        Transform {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 0.0,
            f: 0.0,
        }
    }

    /// Create a translation transform
    pub fn translate(x: Px, y: Px) -> Self {
        Transform {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: *x,
            f: *y,
        }
    }

    /// Create a scaling transform
    pub fn scale(sx: f32, sy: f32) -> Self {
        Transform {
            a: sx,
            b: 0.0,
            c: 0.0,
            d: sy,
            e: 0.0,
            f: 0.0,
        }
    }

    /// The transform that renders a glyph designed on a `units_per_em` grid at `size`,
    /// with its origin on the pen position `(x, baseline)`. Font outlines are y-up while
    /// documents are y-down, so the vertical axis is flipped.
    pub fn glyph(size: Px, units_per_em: u16, x: Px, baseline: Px) -> Self {
        let s = *size / units_per_em as f32;
        Transform::scale(s, -s).with_translate(x, baseline)
    }

    /// Combine this transform with another (self * other)
    pub fn then(self, other: Transform) -> Self {
        Transform {
            a: self.a * other.a + self.b * other.c,
            b: self.a * other.b + self.b * other.d,
            c: self.c * other.a + self.d * other.c,
            d: self.c * other.b + self.d * other.d,
            e: self.e * other.a + self.f * other.c + other.e,
            f: self.e * other.b + self.f * other.d + other.f,
        }
    }

    /// Add a translation to this transform
    pub fn with_translate(self, x: Px, y: Px) -> Self {
        self.then(Transform::translate(x, y))
    }

    /// Add a scale to this transform
    pub fn with_scale(self, sx: f32, sy: f32) -> Self {
        self.then(Transform::scale(sx, sy))
    }

    /// Map a point through the transform
    pub fn apply(&self, x: f32, y: f32) -> (f32, f32) {
        (
            self.a * x + self.c * y + self.e,
            self.b * x + self.d * y + self.f,
        )
    }
}

impl From<Transform> for kurbo::Affine {
    fn from(t: Transform) -> kurbo::Affine {
        kurbo::Affine::new([
            t.a as f64, t.b as f64, t.c as f64, t.d as f64, t.e as f64, t.f as f64,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chained_operations_apply_in_order() {
        let t = Transform::scale(2.0, 3.0).with_translate(Px(5.0), Px(-1.0));
        assert_eq!(t.apply(1.0, 1.0), (7.0, 2.0));

        let t = Transform::translate(Px(5.0), Px(-1.0)).with_scale(2.0, 3.0);
        assert_eq!(t.apply(1.0, 1.0), (12.0, 0.0));
    }

    #[test]
    fn glyph_transform_flips_the_vertical_axis() {
        let t = Transform::glyph(Px(500.0), 1000, Px(20.0), Px(80.0));
        // a point 700 units above the baseline lands 350px above it
        assert_eq!(t.apply(0.0, 700.0), (20.0, -270.0));
        assert_eq!(t.apply(500.0, 0.0), (270.0, 80.0));
    }

    #[test]
    fn affine_agrees_with_apply() {
        let t = Transform::glyph(Px(500.0), 1000, Px(20.0), Px(80.0));
        let p = kurbo::Affine::from(t) * kurbo::Point::new(500.0, 700.0);
        assert_eq!((p.x as f32, p.y as f32), t.apply(500.0, 700.0));
    }
}
