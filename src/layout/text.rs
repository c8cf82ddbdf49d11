use std::ops::Range;
use std::str::FromStr;

use crate::font::GlyphSource;
use crate::layout::symbols::{symbol_rule, SymbolKind};
use crate::outline::Outline;
use crate::rect::Rect;
use crate::transform::Transform;
use crate::units::Px;
use crate::LogoError;
use serde::Deserialize;

/// Horizontal alignment of lines against the widest line
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    /// How far a line of `width` moves right when aligned within `max_width`
    pub fn offset(self, max_width: Px, width: Px) -> Px {
        match self {
            Align::Left => Px::ZERO,
            Align::Center => (max_width - width) / 2.0,
            Align::Right => max_width - width,
        }
    }
}

impl FromStr for Align {
    type Err = LogoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Align::Left),
            "center" | "centre" => Ok(Align::Center),
            "right" => Ok(Align::Right),
            _ => Err(LogoError::UnknownAlignment(s.to_string())),
        }
    }
}

/// What to lay out and how
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutRequest {
    /// The text to set; `\n`, `\r\n` and `\r` start new lines
    pub text: String,
    pub font_size: Px,
    /// Extra space between consecutive characters of a line (may be negative)
    pub letter_spacing: Px,
    pub align: Align,
    /// Where the top-left of the content box lands
    pub origin: (Px, Px),
}

impl LayoutRequest {
    pub fn new<S: Into<String>>(text: S, font_size: Px) -> LayoutRequest {
        LayoutRequest {
            text: text.into(),
            font_size,
            letter_spacing: Px::ZERO,
            align: Align::Left,
            origin: (Px::ZERO, Px::ZERO),
        }
    }

    pub fn with_letter_spacing(mut self, letter_spacing: Px) -> Self {
        self.letter_spacing = letter_spacing;
        self
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn with_origin(mut self, x: Px, y: Px) -> Self {
        self.origin = (x, y);
        self
    }

    fn validate(&self) -> Result<(), LogoError> {
        if !self.font_size.is_finite() || *self.font_size <= 0.0 {
            return Err(LogoError::invalid("font_size", self.font_size));
        }
        if !self.letter_spacing.is_finite() {
            return Err(LogoError::invalid("letter_spacing", self.letter_spacing));
        }
        if !self.origin.0.is_finite() || !self.origin.1.is_finite() {
            return Err(LogoError::invalid(
                "origin",
                format!("({}, {})", self.origin.0, self.origin.1),
            ));
        }
        Ok(())
    }
}

/// One character, placed
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphPlacement {
    pub ch: char,
    /// The glyph's outline in document space (y down). Empty for blank and unmapped
    /// characters.
    pub outline: Outline,
    /// Left edge of the glyph's advance box
    pub pen_x: Px,
    /// The baseline the glyph was drawn on, including any symbol offset
    pub baseline_y: Px,
    /// The size the glyph was drawn at; smaller than the requested size for symbols
    pub font_size: Px,
    /// Horizontal space the glyph itself occupies, excluding spacing and kerning
    pub advance: Px,
    pub line: usize,
    pub symbol: Option<SymbolKind>,
}

impl GlyphPlacement {
    /// Whether the placement draws anything
    pub fn is_visible(&self) -> bool {
        !self.outline.is_empty()
    }
}

/// Geometry of a single laid out line
#[derive(Debug, Clone, PartialEq)]
pub struct LineMetrics {
    /// Distance from the first pen position to the pen position after the last character
    pub width: Px,
    /// Horizontal position of the line's first pen position, after alignment
    pub x: Px,
    pub baseline: Px,
    /// The line's placements within [LayoutResult::placements]
    pub placements: Range<usize>,
}

/// The laid out text: every character placed, plus the metrics needed to size a
/// canvas around it
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    pub placements: Vec<GlyphPlacement>,
    pub lines: Vec<LineMetrics>,
    /// The widest line's width
    pub width: Px,
    /// Top of the first line's ascent to the bottom of the last line's descent
    pub height: Px,
    pub ascender: Px,
    pub descender: Px,
    pub line_gap: Px,
    pub line_height: Px,
    pub font_size: Px,
    pub letter_spacing: Px,
    pub origin: (Px, Px),
}

impl LayoutResult {
    /// Whether the text had no characters at all
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Whether nothing visible was placed. Unlike [is_empty](Self::is_empty), this also
    /// holds for text made only of blank or unmapped characters, which still occupies
    /// horizontal space.
    pub fn is_blank(&self) -> bool {
        !self.placements.iter().any(GlyphPlacement::is_visible)
    }

    pub fn visible_placements(&self) -> impl Iterator<Item = &GlyphPlacement> {
        self.placements.iter().filter(|p| p.is_visible())
    }

    /// The box spanned by the pen advances and the font's vertical metrics
    pub fn advance_box(&self) -> Rect {
        Rect::from_origin(self.origin.0, self.origin.1, self.width, self.height)
    }

    /// Union of the tight bounds of every visible outline
    pub fn ink_bounds(&self) -> Option<Rect> {
        self.visible_placements()
            .filter_map(|p| p.outline.bounds())
            .fold(None, Rect::merge)
    }

    pub fn line_widths(&self) -> Vec<Px> {
        self.lines.iter().map(|l| l.width).collect()
    }
}

/// Lays out text glyph by glyph, one line per explicit line break.
///
/// Each character advances the pen by its glyph's advance width at the requested size.
/// Letter spacing is added between consecutive characters of a line (never before the
/// first or after the last), followed by the font's kerning for the pair if it has any.
/// Characters the font does not map are kept: they draw nothing but advance the pen by
/// the font's missing-glyph advance, so spacing stays consistent.
///
/// Trademark, registered and copyright marks follow their [SymbolRule](super::SymbolRule):
/// drawn and advanced at 35% of the font size, raised by half the font size.
///
/// The first baseline sits one ascent below the origin, following lines are one line
/// height apart. The content height does not include a line gap after the last line.
/// Lines are aligned against the widest line once every line has been measured.
pub fn layout_text<F: GlyphSource + ?Sized>(
    font: &F,
    request: &LayoutRequest,
) -> Result<LayoutResult, LogoError> {
    request.validate()?;

    let units_per_em = font.units_per_em();
    if units_per_em == 0 {
        return Err(LogoError::invalid("units_per_em", units_per_em));
    }

    let font_size = request.font_size;
    let scaling: Px = font_size / units_per_em as f32;
    let ascender: Px = scaling * font.ascender() as f32;
    let descender: Px = scaling * font.descender() as f32;
    let line_gap: Px = scaling * font.line_gap() as f32;
    let line_height: Px = ascender - descender + line_gap;

    // normalize newlines
    let text = request.text.replace("\r\n", "\n").replace('\r', "\n");

    let mut placements: Vec<GlyphPlacement> = Vec::with_capacity(text.len());
    let mut lines: Vec<LineMetrics> = Vec::new();
    let mut baseline = ascender;

    for (line_index, line) in text.split('\n').enumerate() {
        let chars: Vec<char> = line.chars().collect();
        let first = placements.len();
        let mut pen_x = Px::ZERO;

        for (ci, &ch) in chars.iter().enumerate() {
            let rule = symbol_rule(ch);
            let (size, offset) = match rule {
                Some(rule) => (rule.effective_size(font_size), rule.vertical_offset(font_size)),
                None => (font_size, Px::ZERO),
            };

            let (advance_width, outline) = match font.glyph(ch) {
                Some(glyph) => (glyph.advance_width, glyph.outline),
                None => (font.missing_advance(), Outline::new()),
            };

            let glyph_baseline = baseline + offset;
            let outline = if outline.is_empty() {
                Outline::new()
            } else {
                outline.transformed(&Transform::glyph(size, units_per_em, pen_x, glyph_baseline))
            };
            let advance: Px = size * advance_width as f32 / units_per_em as f32;

            placements.push(GlyphPlacement {
                ch,
                outline,
                pen_x,
                baseline_y: glyph_baseline,
                font_size: size,
                advance,
                line: line_index,
                symbol: rule.map(|rule| rule.kind),
            });

            match chars.get(ci + 1) {
                Some(&next) => {
                    pen_x += advance + request.letter_spacing;
                    if let Some(kerning) = font.kerning(ch, next) {
                        pen_x += scaling * kerning as f32;
                    }
                }
                None => pen_x += advance,
            }
        }

        lines.push(LineMetrics {
            width: pen_x,
            x: Px::ZERO,
            baseline,
            placements: first..placements.len(),
        });
        baseline += line_height;
    }

    let max_width = lines.iter().map(|l| l.width).fold(Px::ZERO, Px::max);
    let height = line_height * lines.len() as f32 - line_gap;

    // alignment can only be resolved once every line has been measured
    let (origin_x, origin_y) = request.origin;
    for line in lines.iter_mut() {
        let dx = request.align.offset(max_width, line.width) + origin_x;
        let dy = origin_y;
        line.x = dx;
        line.baseline += dy;
        if *dx == 0.0 && *dy == 0.0 {
            continue;
        }

        let shift = Transform::translate(dx, dy);
        for placement in placements[line.placements.clone()].iter_mut() {
            placement.pen_x += dx;
            placement.baseline_y += dy;
            if !placement.outline.is_empty() {
                placement.outline = placement.outline.transformed(&shift);
            }
        }
    }

    Ok(LayoutResult {
        placements,
        lines,
        width: max_width,
        height,
        ascender,
        descender,
        line_gap,
        line_height,
        font_size,
        letter_spacing: request.letter_spacing,
        origin: request.origin,
    })
}

/// Width of `text` laid out on a single line at `font_size`, including letter spacing
/// and kerning. Line breaks are ignored.
pub fn width_of_text<F: GlyphSource + ?Sized>(
    text: &str,
    font: &F,
    font_size: Px,
    letter_spacing: Px,
) -> Result<Px, LogoError> {
    let single_line: String = text.chars().filter(|&c| c != '\n' && c != '\r').collect();
    let request = LayoutRequest::new(single_line, font_size).with_letter_spacing(letter_spacing);
    Ok(layout_text(font, &request)?.width)
}
