mod cache;
pub use cache::*;

mod colour;
pub use colour::*;

mod compose;
pub use compose::*;

mod config;
pub use config::*;

mod content;
pub use content::{escape_xml, PATH_PRECISION};

mod convert;
pub use convert::*;

pub mod families;

mod font;
pub use font::*;

/// Glyph-to-path text layout
pub mod layout;

mod outline;
pub use outline::*;

mod rect;
pub use rect::*;

mod source;
pub use source::*;

/// Inspecting, restyling and combining composed documents
pub mod svg;

mod transform;
pub use transform::*;

mod units;
pub use units::*;

mod error;
pub use error::*;

#[cfg(test)]
pub(crate) mod test_font;

/// Re-export of the SVG parser, whose trees [LogoSvg::to_tree] hands out
pub use usvg;
