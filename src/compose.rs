use crate::colour::{colours, Colour};
use crate::content::{close_document, close_group, open_document, open_group, render_placements};
use crate::layout::{LayoutResult, Margins};
use crate::rect::Rect;
use crate::units::Px;
use crate::{EmptyReason, LogoError};

/// Clear space kept on every side of a composed logo unless configured otherwise
pub const DEFAULT_PADDING: Px = Px(20.0);

/// How a laid out text is turned into a document
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComposeOptions {
    /// Space between the outermost ink and the document edges
    pub padding: Margins,
    /// Fill applied to every glyph path
    pub colour: Colour,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        ComposeOptions {
            padding: Margins::all(DEFAULT_PADDING),
            colour: colours::BLACK,
        }
    }
}

impl ComposeOptions {
    pub fn with_padding(mut self, padding: Margins) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_colour(mut self, colour: Colour) -> Self {
        self.colour = colour;
        self
    }
}

/// How far one character moved the pen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharAdvance {
    pub ch: char,
    pub advance: Px,
    pub line: usize,
}

/// The typographic measurements of a composed logo
#[derive(Debug, Clone, PartialEq)]
pub struct Metrics {
    pub font_size: Px,
    pub letter_spacing: Px,
    pub ascender: Px,
    pub descender: Px,
    pub line_height: Px,
    /// The widest line's advance width
    pub width: Px,
    pub height: Px,
    pub line_widths: Vec<Px>,
    pub advances: Vec<CharAdvance>,
}

impl Metrics {
    pub fn from_layout(layout: &LayoutResult) -> Metrics {
        Metrics {
            font_size: layout.font_size,
            letter_spacing: layout.letter_spacing,
            ascender: layout.ascender,
            descender: layout.descender,
            line_height: layout.line_height,
            width: layout.width,
            height: layout.height,
            line_widths: layout.line_widths(),
            advances: layout
                .placements
                .iter()
                .map(|p| CharAdvance {
                    ch: p.ch,
                    advance: p.advance,
                    line: p.line,
                })
                .collect(),
        }
    }
}

/// A self-contained SVG logo
#[derive(Debug, Clone, PartialEq)]
pub struct LogoSvg {
    /// The serialized document
    pub svg: String,
    /// Document width in user units; always matches the view box
    pub width: u32,
    /// Document height in user units; always matches the view box
    pub height: u32,
    /// Tight bounds of the drawn content in layout space, before padding
    pub bounds: Rect,
    pub metrics: Metrics,
}

/// The box a document is sized around: the union of every visible outline, falling
/// back to the layout's advance box when the outlines enclose no area (a single
/// horizontal stroke, for instance)
fn content_bounds(layout: &LayoutResult) -> Result<Rect, LogoError> {
    if layout.is_empty() {
        return Err(LogoError::EmptyRender(EmptyReason::NoText));
    }
    let ink = layout
        .ink_bounds()
        .ok_or(LogoError::EmptyRender(EmptyReason::NoVisibleGlyphs))?;
    if ink.has_area() {
        return Ok(ink);
    }

    let fallback = ink.union(&layout.advance_box());
    if fallback.has_area() && fallback.width().is_finite() && fallback.height().is_finite() {
        Ok(fallback)
    } else {
        Err(LogoError::EmptyRender(EmptyReason::DegenerateBounds))
    }
}

/// Padding must be finite and non-negative on every side
fn check_padding(padding: &Margins) -> Result<(), LogoError> {
    for side in [padding.top, padding.right, padding.bottom, padding.left] {
        if !side.is_finite() || *side < 0.0 {
            return Err(LogoError::invalid("padding", side));
        }
    }
    Ok(())
}

/// Compose a laid out text into an SVG document sized to its content.
///
/// The document is sized to the tight bounds of the glyph outlines plus padding,
/// rounded up to whole units, with a matching `viewBox`. All paths share a single
/// translated group that moves the content's top-left corner to the padding corner,
/// so the path data itself stays in layout coordinates.
///
/// Fails with [InvalidLayoutParameter](LogoError::InvalidLayoutParameter) for negative
/// or non-finite padding, and with [EmptyRender](LogoError::EmptyRender) when there is
/// nothing to draw.
pub fn compose_document(
    layout: &LayoutResult,
    options: &ComposeOptions,
) -> Result<LogoSvg, LogoError> {
    let padding = &options.padding;
    check_padding(padding)?;
    let bounds = content_bounds(layout)?;

    let width = (bounds.width() + padding.horizontal()).ceil();
    let height = (bounds.height() + padding.vertical()).ceil();
    if width == 0 || height == 0 {
        return Err(LogoError::EmptyRender(EmptyReason::DegenerateBounds));
    }
    let dx = padding.left - bounds.x1;
    let dy = padding.top - bounds.y1;

    let mut svg = String::new();
    open_document(&mut svg, width, height)?;
    open_group(&mut svg, dx, dy)?;
    render_placements(&mut svg, &layout.placements, &options.colour)?;
    close_group(&mut svg)?;
    close_document(&mut svg)?;

    Ok(LogoSvg {
        svg,
        width,
        height,
        bounds,
        metrics: Metrics::from_layout(layout),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{layout_text, LayoutRequest};
    use crate::test_font::{TestFont, CAP_HEIGHT};

    fn compose(text: &str, size: f32, options: &ComposeOptions) -> Result<LogoSvg, LogoError> {
        let font = TestFont::latin();
        let layout = layout_text(&font, &LayoutRequest::new(text, Px(size)))?;
        compose_document(&layout, options)
    }

    #[test]
    fn document_is_sized_to_ink_plus_padding() {
        let logo = compose("AB", 125.0, &ComposeOptions::default()).expect("can compose");
        // two 75px boxes, 87.5px tall
        assert_eq!(logo.bounds.width(), Px(150.0));
        assert_eq!(logo.bounds.height(), Px(CAP_HEIGHT / 8.0));
        assert_eq!(logo.width, 190);
        assert_eq!(logo.height, 128);
        assert!(logo.svg.starts_with(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"190\" height=\"128\" viewBox=\"0 0 190 128\">"
        ));
        // the box tops sit 12.5px below the origin
        assert!(logo.svg.contains("<g transform=\"translate(20, 7.5)\">"));
        assert_eq!(logo.svg.matches("<g ").count(), 1);
    }

    #[test]
    fn fractional_sizes_round_up() {
        // a 37.5 x 43.75 box
        let options = ComposeOptions::default().with_padding(Margins::all(0.5));
        let logo = compose("A", 62.5, &options).expect("can compose");
        assert_eq!((logo.width, logo.height), (39, 45));

        let options = ComposeOptions::default().with_padding(Margins::all(0.2));
        let logo = compose("A", 62.5, &options).expect("can compose");
        assert_eq!((logo.width, logo.height), (38, 45));
    }

    #[test]
    fn one_path_per_visible_glyph() {
        let options = ComposeOptions::default().with_colour("#ff0000".parse().expect("colour"));
        let logo = compose("A B?\nC™", 50.0, &options).expect("can compose");

        assert_eq!(logo.svg.matches("<path ").count(), 4);
        assert_eq!(logo.svg.matches("fill=\"#ff0000\"").count(), 4);
        assert!(logo.svg.contains("data-char=\"A\" data-index=\"0\""));
        // the space and the unmapped '?' are skipped but still counted
        assert!(logo.svg.contains("data-char=\"C\" data-index=\"4\""));
        assert!(logo
            .svg
            .contains("data-char=\"™\" data-index=\"5\" data-symbol=\"trademark\""));
    }

    #[test]
    fn markup_characters_are_escaped() {
        let font = TestFont::latin().with_box('<', 600).with_box('&', 600);
        let layout = layout_text(&font, &LayoutRequest::new("<&", Px(20.0))).expect("lays out");
        let logo = compose_document(&layout, &ComposeOptions::default()).expect("composes");
        assert!(logo.svg.contains("data-char=\"&lt;\""));
        assert!(logo.svg.contains("data-char=\"&amp;\""));
        assert!(!logo.svg.contains("data-char=\"<\""));
    }

    #[test]
    fn metrics_describe_the_layout() {
        let logo = compose("Ab\nc", 100.0, &ComposeOptions::default()).expect("can compose");
        let metrics = &logo.metrics;
        assert_eq!(metrics.line_widths.len(), 2);
        assert_eq!(metrics.advances.len(), 3);
        assert_eq!(metrics.advances[2].line, 1);
        assert!((*metrics.ascender - 80.0).abs() < 1e-3);
        assert!((*metrics.descender + 20.0).abs() < 1e-3);
        assert!((*metrics.width - 120.0).abs() < 1e-3);
    }

    #[test]
    fn empty_text_is_rejected() {
        let result = compose("", 100.0, &ComposeOptions::default());
        assert!(matches!(result, Err(LogoError::EmptyRender(EmptyReason::NoText))));
    }

    #[test]
    fn invisible_text_is_rejected() {
        for text in ["   ", "?!", " \n "] {
            let result = compose(text, 100.0, &ComposeOptions::default());
            assert!(
                matches!(result, Err(LogoError::EmptyRender(EmptyReason::NoVisibleGlyphs))),
                "{text:?} should not render"
            );
        }
    }

    #[test]
    fn padding_must_be_finite_and_non_negative() {
        for padding in [
            Margins::all(Px(-1000.0)),
            Margins::all(Px(f32::NAN)),
            Margins::trbl(Px(0.0), Px(f32::INFINITY), Px(0.0), Px(0.0)),
            Margins::symmetric(Px(-0.5), Px(10.0)),
        ] {
            let result = compose("AB", 125.0, &ComposeOptions::default().with_padding(padding));
            assert!(
                matches!(result, Err(LogoError::InvalidLayoutParameter { name: "padding", .. })),
                "{padding:?} should be rejected"
            );
        }

        let logo = compose("AB", 125.0, &ComposeOptions::default().with_padding(Margins::empty()))
            .expect("zero padding is fine");
        assert_eq!((logo.width, logo.height), (150, 88));
        assert!(logo.svg.contains("<g transform=\"translate(0, -12.5)\">"));
    }

    #[test]
    fn vanishingly_small_content_is_degenerate() {
        let mut shrunk = layout_text(&TestFont::latin(), &LayoutRequest::new("A", Px(125.0)))
            .expect("lays out");
        for placement in &mut shrunk.placements {
            placement.outline = placement
                .outline
                .transformed(&crate::Transform::scale(0.0, 0.0));
        }
        shrunk.width = Px(0.0);
        shrunk.height = Px(0.0);
        let result = compose_document(&shrunk, &ComposeOptions::default().with_padding(Margins::empty()));
        assert!(matches!(result, Err(LogoError::EmptyRender(EmptyReason::DegenerateBounds))));
    }

    #[test]
    fn flat_outlines_fall_back_to_the_advance_box() {
        use crate::font::{Glyph, GlyphSource};
        use crate::outline::Outline;
        use kurbo::{BezPath, PathEl};

        struct Hairline;
        impl GlyphSource for Hairline {
            fn units_per_em(&self) -> u16 {
                1000
            }
            fn ascender(&self) -> i16 {
                800
            }
            fn descender(&self) -> i16 {
                -200
            }
            fn glyph(&self, _ch: char) -> Option<Glyph> {
                Some(Glyph {
                    id: 1,
                    advance_width: 500,
                    outline: Outline::from(BezPath::from_vec(vec![
                        PathEl::MoveTo((0.0, 0.0).into()),
                        PathEl::LineTo((500.0, 0.0).into()),
                    ])),
                })
            }
        }

        let layout = layout_text(&Hairline, &LayoutRequest::new("--", Px(125.0))).expect("lays out");
        let logo = compose_document(&layout, &ComposeOptions::default().with_padding(Margins::empty()))
            .expect("falls back");
        assert_eq!((logo.width, logo.height), (125, 125));
        assert_eq!(logo.svg.matches("<path ").count(), 2);
    }
}
