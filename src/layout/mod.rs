//! Glyph-to-path text layout.
//!
//! [`layout_text`](crate::layout::layout_text) turns a string into positioned glyph
//! outlines using any [GlyphSource](crate::GlyphSource). Lines only break on explicit
//! newlines; every character (mapped or not) gets a placement so that spacing stays
//! predictable. Trademark, registered and copyright marks are set small and raised
//! according to [SPECIAL_SYMBOLS](crate::layout::SPECIAL_SYMBOLS).
//!
//! Layout is a pure function of its inputs: the same text, font and request always
//! produce the same result.
//!
//! # Example
//!
//! ```no_run
//! use wordmark::{Font, Px};
//! use wordmark::layout::{layout_text, Align, LayoutRequest};
//!
//! let font_data = std::fs::read("fonts/Inter-700.ttf").expect("can read font");
//! let font = Font::load(font_data).expect("can load font");
//!
//! let request = LayoutRequest::new("Acme™\nIndustries", Px(120.0))
//!     .with_letter_spacing(Px(2.0))
//!     .with_align(Align::Center);
//! let layout = layout_text(&font, &request).expect("can lay out text");
//!
//! for placement in layout.visible_placements() {
//!     println!("{} at {}", placement.ch, placement.pen_x);
//! }
//! ```

mod margins;
mod symbols;
mod text;

pub use margins::*;
pub use symbols::*;
pub use text::*;
