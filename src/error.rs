use crate::source::FontKey;
use thiserror::Error;

/// Why a render produced nothing worth drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// The text had no characters at all
    NoText,
    /// Characters were laid out but none of them has a visible outline (blank or
    /// unmapped characters only)
    NoVisibleGlyphs,
    /// The outlines enclose no area, even after falling back to the advance box
    DegenerateBounds,
}

impl std::fmt::Display for EmptyReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmptyReason::NoText => write!(f, "no text"),
            EmptyReason::NoVisibleGlyphs => write!(f, "no visible glyphs"),
            EmptyReason::DegenerateBounds => write!(f, "outlines enclose no area"),
        }
    }
}

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum LogoError {
    #[error("invalid layout parameter `{name}`: {value}")]
    /// A numeric layout input is out of range (non-positive font size, non-finite
    /// spacing, a font with a zero-sized em square, ...)
    InvalidLayoutParameter { name: &'static str, value: String },

    #[error("nothing to render: {0}")]
    /// The text laid out to nothing visible
    EmptyRender(EmptyReason),

    #[error("invalid request: {0}")]
    /// A conversion request fell outside the configured limits
    Validation(String),

    #[error("invalid colour `{0}`, expected #rgb or #rrggbb")]
    InvalidColour(String),

    #[error("unknown alignment `{0}`, expected left, center or right")]
    UnknownAlignment(String),

    #[error("invalid font weight `{0}`")]
    InvalidWeight(String),

    #[error("font not found: {0}")]
    /// The font source has no font file for the requested family and weight
    FontNotFound(FontKey),

    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// Writing a document into its buffer failed
    Fmt(#[from] std::fmt::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),

    #[error(transparent)]
    /// [usvg] failed to parse a composed document
    Svg(#[from] usvg::Error),

    #[error(transparent)]
    /// The configuration file could not be parsed
    Config(#[from] toml::de::Error),
}

impl LogoError {
    pub(crate) fn invalid(name: &'static str, value: impl ToString) -> LogoError {
        LogoError::InvalidLayoutParameter {
            name,
            value: value.to_string(),
        }
    }

    /// Whether this error means the input rendered to nothing visible
    pub fn is_empty_render(&self) -> bool {
        matches!(self, LogoError::EmptyRender(_))
    }
}
