//! A synthetic font for unit tests: every mapped glyph is a box as wide as its advance
//! and 700 units tall, sitting on the baseline.

use crate::font::{Glyph, GlyphSource};
use crate::outline::Outline;
use kurbo::BezPath;
use std::collections::HashMap;

pub(crate) const CAP_HEIGHT: f32 = 700.0;

#[derive(Debug, Clone)]
pub(crate) struct TestFont {
    units_per_em: u16,
    ascender: i16,
    descender: i16,
    line_gap: i16,
    missing_advance: u16,
    glyphs: HashMap<char, (u16, bool)>,
    kerning: HashMap<(char, char), i16>,
}

impl TestFont {
    /// An empty font on a 1000 unit em with an ascender of 800 and a descender of -200
    pub(crate) fn new() -> TestFont {
        TestFont {
            units_per_em: 1000,
            ascender: 800,
            descender: -200,
            line_gap: 0,
            missing_advance: 500,
            glyphs: HashMap::new(),
            kerning: HashMap::new(),
        }
    }

    /// ASCII letters at 600 units, a 250 unit space, and 800 unit ™ ® © marks.
    /// Punctuation is left unmapped.
    pub(crate) fn latin() -> TestFont {
        let mut font = TestFont::new().with_blank(' ', 250);
        for ch in ('A'..='Z').chain('a'..='z') {
            font = font.with_box(ch, 600);
        }
        for ch in ['™', '®', '©'] {
            font = font.with_box(ch, 800);
        }
        font
    }

    pub(crate) fn with_box(mut self, ch: char, advance: u16) -> Self {
        self.glyphs.insert(ch, (advance, true));
        self
    }

    pub(crate) fn with_blank(mut self, ch: char, advance: u16) -> Self {
        self.glyphs.insert(ch, (advance, false));
        self
    }

    pub(crate) fn with_kerning(mut self, left: char, right: char, value: i16) -> Self {
        self.kerning.insert((left, right), value);
        self
    }

    pub(crate) fn with_line_gap(mut self, line_gap: i16) -> Self {
        self.line_gap = line_gap;
        self
    }

    pub(crate) fn with_units_per_em(mut self, units_per_em: u16) -> Self {
        self.units_per_em = units_per_em;
        self
    }
}

fn box_outline(width: f32) -> Outline {
    let (w, h) = (width as f64, CAP_HEIGHT as f64);
    let mut path = BezPath::new();
    path.move_to((0.0, 0.0));
    path.line_to((w, 0.0));
    path.line_to((w, h));
    path.line_to((0.0, h));
    path.close_path();
    Outline::from(path)
}

impl GlyphSource for TestFont {
    fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    fn ascender(&self) -> i16 {
        self.ascender
    }

    fn descender(&self) -> i16 {
        self.descender
    }

    fn line_gap(&self) -> i16 {
        self.line_gap
    }

    fn glyph(&self, ch: char) -> Option<Glyph> {
        let &(advance_width, visible) = self.glyphs.get(&ch)?;
        let outline = if visible {
            box_outline(advance_width as f32)
        } else {
            Outline::new()
        };
        Some(Glyph {
            id: ch as u32 as u16,
            advance_width,
            outline,
        })
    }

    fn missing_advance(&self) -> u16 {
        self.missing_advance
    }

    fn kerning(&self, left: char, right: char) -> Option<i16> {
        self.kerning.get(&(left, right)).copied()
    }
}
