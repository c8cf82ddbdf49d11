//! Shared document writing logic for composed logos and stacked documents.

use crate::colour::Colour;
use crate::layout::GlyphPlacement;
use crate::outline::num;
use crate::units::Px;
use std::fmt::Write;

/// Number of decimals kept in path data and transforms
pub const PATH_PRECISION: usize = 2;

pub(crate) const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Escape the characters that are not allowed to appear verbatim in attribute values
pub fn escape_xml(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

pub(crate) fn open_document(out: &mut String, width: u32, height: u32) -> std::fmt::Result {
    writeln!(
        out,
        "<svg xmlns=\"{SVG_NAMESPACE}\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
    )
}

pub(crate) fn close_document(out: &mut String) -> std::fmt::Result {
    writeln!(out, "</svg>")
}

pub(crate) fn open_group(out: &mut String, dx: Px, dy: Px) -> std::fmt::Result {
    writeln!(
        out,
        "  <g transform=\"translate({}, {})\">",
        num(f64::from(*dx), PATH_PRECISION),
        num(f64::from(*dy), PATH_PRECISION)
    )
}

pub(crate) fn close_group(out: &mut String) -> std::fmt::Result {
    writeln!(out, "  </g>")
}

/// Renders every visible placement as a filled path. `data-index` is the placement's
/// index in the layout, so hidden placements leave gaps in the numbering.
pub(crate) fn render_placements(
    out: &mut String,
    placements: &[GlyphPlacement],
    fill: &Colour,
) -> std::fmt::Result {
    let fill = fill.to_hex();
    for (index, placement) in placements.iter().enumerate() {
        if !placement.is_visible() {
            continue;
        }

        out.push_str("    <path d=\"");
        placement.outline.write_path_data(out, PATH_PRECISION)?;
        write!(
            out,
            "\" fill=\"{}\" data-char=\"{}\" data-index=\"{}\"",
            fill,
            escape_xml(placement.ch.encode_utf8(&mut [0; 4])),
            index
        )?;
        if let Some(symbol) = placement.symbol {
            write!(out, " data-symbol=\"{}\"", symbol.name())?;
        }
        writeln!(out, "/>")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_xml("<&>\"'"), "&lt;&amp;&gt;&quot;&apos;");
        assert_eq!(escape_xml("Brand™"), "Brand™");
    }

    #[test]
    fn group_translation_is_rounded() {
        let mut out = String::new();
        open_group(&mut out, Px(20.0), Px(-3.14159)).expect("can write");
        assert_eq!(out, "  <g transform=\"translate(20, -3.14)\">\n");
    }
}
