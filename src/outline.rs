//! Glyph outlines as [kurbo] paths.
//!
//! Outlines come out of the font in design units with the y axis pointing up,
//! and are mapped into document space (y down) by a [`Transform`] when a glyph
//! is placed.

use crate::rect::Rect;
use crate::transform::Transform;
use kurbo::{Affine, BezPath, PathEl, Shape};
use std::fmt::Write;

/// The vector shape of a glyph, or of a glyph that has been placed in a document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outline {
    path: BezPath,
}

impl From<BezPath> for Outline {
    fn from(path: BezPath) -> Self {
        Outline { path }
    }
}

impl Outline {
    pub fn new() -> Outline {
        Outline::default()
    }

    pub fn path(&self) -> &BezPath {
        &self.path
    }

    /// Whether the outline draws nothing (spaces, unmapped characters, ...)
    pub fn is_empty(&self) -> bool {
        !self
            .path
            .elements()
            .iter()
            .any(|el| !matches!(el, PathEl::MoveTo(_) | PathEl::ClosePath))
    }

    /// Map every point of the outline through `transform`
    pub fn transformed(&self, transform: &Transform) -> Outline {
        let mut path = self.path.clone();
        path.apply_affine(Affine::from(*transform));
        Outline { path }
    }

    /// Tight bounds of the drawn shape, including the extremes of curves (not just their
    /// control points). Returns [None] for an empty outline.
    pub fn bounds(&self) -> Option<Rect> {
        if self.is_empty() {
            return None;
        }
        Some(Rect::from(self.path.bounding_box()))
    }

    /// Write the outline as SVG path data, rounding coordinates to `precision`
    /// decimals and dropping trailing zeros
    pub fn write_path_data(&self, out: &mut String, precision: usize) -> std::fmt::Result {
        let n = |v: f64| num(v, precision);
        for el in self.path.elements() {
            match *el {
                PathEl::MoveTo(p) => write!(out, "M{},{}", n(p.x), n(p.y))?,
                PathEl::LineTo(p) => write!(out, "L{},{}", n(p.x), n(p.y))?,
                PathEl::QuadTo(c, p) => {
                    write!(out, "Q{},{} {},{}", n(c.x), n(c.y), n(p.x), n(p.y))?
                }
                PathEl::CurveTo(c1, c2, p) => write!(
                    out,
                    "C{},{} {},{} {},{}",
                    n(c1.x),
                    n(c1.y),
                    n(c2.x),
                    n(c2.y),
                    n(p.x),
                    n(p.y)
                )?,
                PathEl::ClosePath => out.push('Z'),
            }
        }
        Ok(())
    }
}

/// Collects [owned_ttf_parser::OutlineBuilder] callbacks into an [Outline]
impl owned_ttf_parser::OutlineBuilder for Outline {
    fn move_to(&mut self, x: f32, y: f32) {
        self.path.move_to((x as f64, y as f64));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.path.line_to((x as f64, y as f64));
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.path
            .quad_to((x1 as f64, y1 as f64), (x as f64, y as f64));
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.path.curve_to(
            (x1 as f64, y1 as f64),
            (x2 as f64, y2 as f64),
            (x as f64, y as f64),
        );
    }

    fn close(&mut self) {
        self.path.close_path();
    }
}

/// Format a coordinate with at most `precision` decimals, without trailing zeros
pub(crate) fn num(value: f64, precision: usize) -> String {
    let s = format!("{value:.precision$}");
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    };
    if s == "-0" {
        "0".to_string()
    } else {
        s
    }
}
