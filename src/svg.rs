use crate::colour::Colour;
use crate::compose::LogoSvg;
use crate::content::{close_document, close_group, open_document, open_group};
use crate::layout::Align;
use crate::units::Px;
use crate::LogoError;
use regex::Regex;
use std::sync::LazyLock;
use usvg::Tree;

/// The `d` attribute of every path element
static PATH_DATA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<path\b[^>]*?\sd="([^"]*)""#).expect("path regex is valid"));

/// Everything between the root element's start and end tags
static BODY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<svg\b[^>]*>(.*)</svg>").expect("body regex is valid"));

/// Count the path elements of a document
pub fn path_count(svg: &str) -> usize {
    PATH_DATA_RE.find_iter(svg).count()
}

/// The path data of every path element of a document, in document order
pub fn path_data(svg: &str) -> Vec<&str> {
    PATH_DATA_RE
        .captures_iter(svg)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str())
        .collect()
}

/// Give a document a solid background by styling its root element
pub fn with_background(svg: &str, background: &Colour) -> String {
    svg.replacen(
        "<svg",
        &format!("<svg style=\"background-color: {}\"", background.to_hex()),
        1,
    )
}

/// Parse a document, so it can be validated or handed to a rasterizer
pub fn parse(svg: &str) -> Result<Tree, LogoError> {
    let opts = usvg::Options {
        ..Default::default()
    };
    let tree = Tree::from_data(svg.as_bytes(), &opts)?;
    Ok(tree)
}

impl LogoSvg {
    pub fn path_count(&self) -> usize {
        path_count(&self.svg)
    }

    pub fn path_data(&self) -> Vec<&str> {
        path_data(&self.svg)
    }

    /// A copy of the logo with a solid background, e.g. a light logo on black
    pub fn with_background(&self, background: &Colour) -> LogoSvg {
        LogoSvg {
            svg: with_background(&self.svg, background),
            ..self.clone()
        }
    }

    pub fn to_tree(&self) -> Result<Tree, LogoError> {
        parse(&self.svg)
    }
}

/// Several documents combined into one
#[derive(Debug, Clone, PartialEq)]
pub struct StackedSvg {
    pub svg: String,
    pub width: u32,
    pub height: u32,
}

/// Stack documents vertically (a logo above its tagline, for instance), `gap` apart.
///
/// Each part keeps its own content, wrapped in a single translated group, and is
/// aligned horizontally within the widest part. Part sizes are taken from the parsed
/// documents, so any SVG with a definite size can be stacked.
pub fn stack(parts: &[&str], gap: Px, align: Align) -> Result<StackedSvg, LogoError> {
    let mut measured = Vec::with_capacity(parts.len());
    for part in parts {
        let size = parse(part)?.size();
        let body = BODY_RE
            .captures(part)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
            .unwrap_or_default();
        measured.push((Px(size.width()), Px(size.height()), body));
    }

    let width = measured.iter().map(|m| m.0).fold(Px::ZERO, Px::max);
    let gaps = gap * measured.len().saturating_sub(1) as f32;
    let height: Px = measured.iter().map(|m| m.1).sum::<Px>() + gaps;

    let mut svg = String::new();
    open_document(&mut svg, width.ceil(), height.ceil())?;
    let mut y = Px::ZERO;
    for (part_width, part_height, body) in measured {
        open_group(&mut svg, align.offset(width, part_width), y)?;
        svg.push_str(body.trim_matches('\n'));
        svg.push('\n');
        close_group(&mut svg)?;
        y += part_height + gap;
    }
    close_document(&mut svg)?;

    Ok(StackedSvg {
        svg,
        width: width.ceil(),
        height: height.ceil(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::colours;
    use crate::compose::{compose_document, ComposeOptions};
    use crate::layout::{layout_text, LayoutRequest};
    use crate::test_font::TestFont;

    fn logo(text: &str, size: f32) -> LogoSvg {
        let font = TestFont::latin();
        let layout = layout_text(&font, &LayoutRequest::new(text, Px(size))).expect("lays out");
        compose_document(&layout, &ComposeOptions::default()).expect("composes")
    }

    #[test]
    fn one_path_per_visible_placement() {
        let font = TestFont::latin();
        let layout =
            layout_text(&font, &LayoutRequest::new("Hi there?\nAcme™", Px(40.0))).expect("lays out");
        let logo = compose_document(&layout, &ComposeOptions::default()).expect("composes");
        assert_eq!(logo.path_count(), layout.visible_placements().count());
        assert_eq!(logo.path_count(), 12);
        assert!(logo.path_data().iter().all(|d| d.starts_with('M') && d.ends_with('Z')));
    }

    #[test]
    fn documents_parse() {
        let logo = logo("Acme", 125.0);
        let tree = logo.to_tree().expect("valid svg");
        assert_eq!(tree.size().width(), logo.width as f32);
        assert_eq!(tree.size().height(), logo.height as f32);
    }

    #[test]
    fn background_is_set_on_the_root() {
        let logo = logo("A", 50.0).with_background(&colours::WHITE);
        assert!(logo
            .svg
            .starts_with("<svg style=\"background-color: #ffffff\" xmlns="));
        assert_eq!(logo.path_count(), 1);
        logo.to_tree().expect("still valid");
    }

    #[test]
    fn stacking_centers_narrow_parts() {
        // 190 x 128 and 115 x 128
        let wide = logo("AB", 125.0);
        let narrow = logo("A", 125.0);
        let stacked = stack(&[&wide.svg, &narrow.svg], Px(10.0), Align::Center).expect("stacks");

        assert_eq!(stacked.width, 190);
        assert_eq!(stacked.height, 128 + 10 + 128);
        assert_eq!(path_count(&stacked.svg), 3);
        assert!(stacked.svg.contains("<g transform=\"translate(0, 0)\">"));
        assert!(stacked.svg.contains("<g transform=\"translate(37.5, 138)\">"));
        parse(&stacked.svg).expect("valid svg");
    }

    #[test]
    fn stacking_rejects_broken_parts() {
        let result = stack(&["<svg"], Px(0.0), Align::Left);
        assert!(matches!(result, Err(LogoError::Svg(_))));
    }
}
