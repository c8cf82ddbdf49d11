use crate::outline::Outline;
use crate::LogoError;
use owned_ttf_parser::{name_id, AsFaceRef, Face, GlyphId, OwnedFace};

/// A single glyph as seen by the layout engine: how far it advances the pen and
/// what it draws, both in font design units
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    pub id: u16,
    pub advance_width: u16,
    pub outline: Outline,
}

/// Read-only access to a font's metrics, glyphs and kerning. Every spatial query the
/// layout engine makes goes through this trait, so it never needs to look at font
/// file bytes and can be driven by any font backend.
///
/// All values are in font design units; outlines are y-up.
pub trait GlyphSource {
    /// The size of the design grid. Must be non-zero to be laid out.
    fn units_per_em(&self) -> u16;

    /// Distance from the baseline to the top of the font (positive)
    fn ascender(&self) -> i16;

    /// Distance from the baseline to the bottom of the font (usually negative)
    fn descender(&self) -> i16;

    /// Extra space between lines
    fn line_gap(&self) -> i16 {
        0
    }

    /// The glyph mapped to `ch`, or [None] if the font has no glyph for it
    fn glyph(&self, ch: char) -> Option<Glyph>;

    /// Advance of the glyph drawn in place of characters the font does not map
    fn missing_advance(&self) -> u16 {
        0
    }

    /// Horizontal adjustment between two adjacent characters, if the font has one
    fn kerning(&self, _left: char, _right: char) -> Option<i16> {
        None
    }
}

impl<T: GlyphSource + ?Sized> GlyphSource for &T {
    fn units_per_em(&self) -> u16 {
        (**self).units_per_em()
    }

    fn ascender(&self) -> i16 {
        (**self).ascender()
    }

    fn descender(&self) -> i16 {
        (**self).descender()
    }

    fn line_gap(&self) -> i16 {
        (**self).line_gap()
    }

    fn glyph(&self, ch: char) -> Option<Glyph> {
        (**self).glyph(ch)
    }

    fn missing_advance(&self) -> u16 {
        (**self).missing_advance()
    }

    fn kerning(&self, left: char, right: char) -> Option<i16> {
        (**self).kerning(left, right)
    }
}

/// A parsed TrueType or OpenType font.
///
/// Fonts are immutable once loaded, so a single [Font] can be shared (typically
/// behind an [`Arc`](std::sync::Arc) handed out by a [`FontCache`](crate::FontCache))
/// between any number of concurrent layouts.
pub struct Font {
    pub face: OwnedFace,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, LogoError> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font { face })
    }

    fn face(&self) -> &Face<'_> {
        self.face.as_face_ref()
    }

    fn name(&self, id: u16) -> Option<String> {
        self.face()
            .names()
            .into_iter()
            .find(|name| name.name_id == id && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    /// Obtain the weight of the font. Numerical values generally map as follows:
    ///
    /// * 100: Thin (Hairline)
    /// * 300: Light
    /// * 400: Normal
    /// * 700: Bold
    /// * 900: Black (Heavy)
    pub fn weight(&self) -> u16 {
        self.face().weight().to_number()
    }

    /// Names, metrics and character coverage of the font
    pub fn info(&self) -> FontInfo {
        let face = self.face();
        FontInfo {
            family: self
                .name(name_id::FAMILY)
                .unwrap_or_else(|| "Unknown".to_string()),
            subfamily: self
                .name(name_id::SUBFAMILY)
                .unwrap_or_else(|| "Regular".to_string()),
            version: self
                .name(name_id::VERSION)
                .unwrap_or_else(|| "Unknown".to_string()),
            weight: self.weight(),
            units_per_em: face.units_per_em(),
            ascender: face.ascender(),
            descender: face.descender(),
            line_gap: face.line_gap(),
            num_glyphs: face.number_of_glyphs(),
            supported_characters: COVERAGE_SAMPLE
                .chars()
                .filter(|&ch| face.glyph_index(ch).is_some())
                .collect(),
        }
    }
}

/// Characters checked for [FontInfo::supported_characters]
pub const COVERAGE_SAMPLE: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789®©™!@#$%^&*()_+-=[]{}|;:,.<>?";

/// A summary of a font file, in font design units
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontInfo {
    pub family: String,
    pub subfamily: String,
    pub version: String,
    pub weight: u16,
    pub units_per_em: u16,
    pub ascender: i16,
    pub descender: i16,
    pub line_gap: i16,
    pub num_glyphs: u16,
    /// The characters of [COVERAGE_SAMPLE] the font maps
    pub supported_characters: Vec<char>,
}

impl GlyphSource for Font {
    fn units_per_em(&self) -> u16 {
        self.face().units_per_em()
    }

    fn ascender(&self) -> i16 {
        self.face().ascender()
    }

    fn descender(&self) -> i16 {
        self.face().descender()
    }

    fn line_gap(&self) -> i16 {
        self.face().line_gap()
    }

    fn glyph(&self, ch: char) -> Option<Glyph> {
        let face = self.face();
        let gid = face.glyph_index(ch)?;
        let mut outline = Outline::new();
        // glyphs without contours (spaces) report no bounding box; the outline stays empty
        if face.outline_glyph(gid, &mut outline).is_none() {
            outline = Outline::new();
        }

        Some(Glyph {
            id: gid.0,
            advance_width: face.glyph_hor_advance(gid).unwrap_or_default(),
            outline,
        })
    }

    fn missing_advance(&self) -> u16 {
        self.face().glyph_hor_advance(GlyphId(0)).unwrap_or_default()
    }

    fn kerning(&self, left: char, right: char) -> Option<i16> {
        let face = self.face();
        let left = face.glyph_index(left)?;
        let right = face.glyph_index(right)?;
        let kern = face.tables().kern?;

        kern.subtables
            .into_iter()
            .filter(|subtable| subtable.horizontal && !subtable.variable)
            .find_map(|subtable| subtable.glyphs_kerning(left, right))
    }
}
