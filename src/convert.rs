//! Turning conversion requests into logos.
//!
//! A [Converter] ties the pieces together: it checks requests against the
//! configured [Limits] and the [family table](crate::families), fetches fonts
//! through a [FontCache] in front of a [FontSource], lays the text out and
//! composes the document. Unlike the layout engine and the composer, the
//! converter logs what it does.

use crate::cache::FontCache;
use crate::colour::{colours, Colour};
use crate::compose::{compose_document, ComposeOptions, LogoSvg};
use crate::config::{Config, Limits};
use crate::families::find_family;
use crate::font::{Font, FontInfo, GlyphSource};
use crate::layout::{layout_text, width_of_text, Align, LayoutRequest, Margins, SymbolKind};
use crate::source::{DirectorySource, FontKey, FontSource, Weight};
use crate::units::Px;
use crate::LogoError;
use serde::Deserialize;
use std::sync::Arc;

/// Font size used when a request does not name one
pub const DEFAULT_FONT_SIZE: f32 = 120.0;

/// Largest size tried by [fit_font_size]
pub const FIT_MAX_FONT_SIZE: f32 = 64.0;
/// Smallest size [fit_font_size] settles for, whether it fits or not
pub const FIT_MIN_FONT_SIZE: f32 = 16.0;
const FIT_STEP: f32 = 2.0;

fn default_font_size() -> f32 {
    DEFAULT_FONT_SIZE
}

/// Case applied to the text of a request before it is laid out
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextCase {
    /// The text as typed
    #[default]
    Normal,
    Uppercase,
}

/// A request to render `text` as a logo
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConvertRequest {
    pub text: String,
    pub family: String,
    #[serde(default)]
    pub weight: Weight,
    #[serde(default = "default_font_size")]
    pub font_size: f32,
    #[serde(default)]
    pub letter_spacing: f32,
    #[serde(default)]
    pub colour: Colour,
    #[serde(default)]
    pub align: Align,
    #[serde(default)]
    pub text_case: TextCase,
    /// Mark appended to the text
    #[serde(default)]
    pub symbol: Option<SymbolKind>,
}

impl ConvertRequest {
    pub fn new<T: Into<String>, F: Into<String>>(text: T, family: F) -> ConvertRequest {
        ConvertRequest {
            text: text.into(),
            family: family.into(),
            weight: Weight::default(),
            font_size: DEFAULT_FONT_SIZE,
            letter_spacing: 0.0,
            colour: colours::BLACK,
            align: Align::Left,
            text_case: TextCase::Normal,
            symbol: None,
        }
    }

    pub fn with_weight(mut self, weight: Weight) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_letter_spacing(mut self, letter_spacing: f32) -> Self {
        self.letter_spacing = letter_spacing;
        self
    }

    pub fn with_colour(mut self, colour: Colour) -> Self {
        self.colour = colour;
        self
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn with_text_case(mut self, text_case: TextCase) -> Self {
        self.text_case = text_case;
        self
    }

    pub fn with_symbol(mut self, symbol: SymbolKind) -> Self {
        self.symbol = Some(symbol);
        self
    }

    /// The text that is laid out: `text` in the requested case, followed by the mark
    pub fn display_text(&self) -> String {
        let mut text = match self.text_case {
            TextCase::Normal => self.text.clone(),
            TextCase::Uppercase => self.text.to_uppercase(),
        };
        if let Some(symbol) = self.symbol {
            text.push(symbol.symbol());
        }
        text
    }

    /// The font to load, with the family name spelled the way the family table does
    pub fn font_key(&self) -> FontKey {
        let family = find_family(&self.family)
            .map(|f| f.name)
            .unwrap_or(self.family.trim());
        FontKey::new(family, self.weight)
    }

    fn layout_request(&self) -> LayoutRequest {
        LayoutRequest::new(self.display_text(), Px(self.font_size))
            .with_letter_spacing(Px(self.letter_spacing))
            .with_align(self.align)
    }
}

/// Check a request against `limits` and the family table
pub fn validate(request: &ConvertRequest, limits: &Limits) -> Result<(), LogoError> {
    if request.text.trim().is_empty() {
        return Err(LogoError::Validation("text is required".to_string()));
    }
    let length = request.display_text().chars().count();
    if length > limits.max_text_length {
        return Err(LogoError::Validation(format!(
            "text must be {} characters or less, got {length}",
            limits.max_text_length
        )));
    }

    let size = request.font_size;
    if !(limits.min_font_size..=limits.max_font_size).contains(&size) {
        return Err(LogoError::Validation(format!(
            "font size must be between {} and {}, got {size}",
            limits.min_font_size, limits.max_font_size
        )));
    }

    let spacing = request.letter_spacing;
    if !(limits.min_letter_spacing..=limits.max_letter_spacing).contains(&spacing) {
        return Err(LogoError::Validation(format!(
            "letter spacing must be between {} and {}, got {spacing}",
            limits.min_letter_spacing, limits.max_letter_spacing
        )));
    }

    let family = find_family(&request.family)
        .ok_or_else(|| LogoError::Validation(format!("font family `{}` is not available", request.family)))?;
    if !family.has_weight(request.weight) {
        return Err(LogoError::Validation(format!(
            "{} is not available at weight {}, choose one of {:?}",
            family.name, request.weight, family.weights
        )));
    }

    Ok(())
}

/// The result of one request of a batch
#[derive(Debug)]
pub struct BatchOutcome {
    /// Position of the request in the batch
    pub index: usize,
    pub text: String,
    pub result: Result<LogoSvg, LogoError>,
}

impl BatchOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// One file of a brand kit
#[derive(Debug, Clone, PartialEq)]
pub struct BrandAsset {
    pub file_name: String,
    pub logo: LogoSvg,
}

/// Lowercase file name prefix for a brand: whitespace runs become dashes
pub fn brand_slug(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

/// Renders requests with fonts from `S`, caching the parsed fonts
pub struct Converter<S: FontSource> {
    config: Config,
    cache: FontCache<S::Font>,
    source: S,
}

impl Converter<DirectorySource> {
    /// A converter loading fonts from the configured font directory
    pub fn from_config(config: Config) -> Converter<DirectorySource> {
        let source = DirectorySource::new(&config.font_dir);
        Converter::new(config, source)
    }
}

impl<S: FontSource> Converter<S> {
    pub fn new(config: Config, source: S) -> Converter<S> {
        let cache = FontCache::new(config.font_cache.ttl(), config.font_cache.capacity);
        Converter {
            config,
            cache,
            source,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn cache(&self) -> &FontCache<S::Font> {
        &self.cache
    }

    pub fn validate(&self, request: &ConvertRequest) -> Result<(), LogoError> {
        validate(request, &self.config.limits)
    }

    /// The font for `key`, from the cache if possible
    pub fn font(&self, key: &FontKey) -> Result<Arc<S::Font>, LogoError> {
        self.cache.get_or_load(key, &self.source)
    }

    fn compose_options(&self, colour: Colour) -> ComposeOptions {
        ComposeOptions::default()
            .with_padding(Margins::all(self.config.padding))
            .with_colour(colour)
    }

    /// Validate, lay out and compose a single request
    pub fn convert(&self, request: &ConvertRequest) -> Result<LogoSvg, LogoError> {
        self.validate(request)?;
        let key = request.font_key();
        let font = self.font(&key)?;

        let layout = layout_text(&*font, &request.layout_request())?;
        let logo = compose_document(&layout, &self.compose_options(request.colour))?;
        log::info!(
            "converted {:?} in {key} at {}: {}x{}, {} paths",
            request.text,
            request.font_size,
            logo.width,
            logo.height,
            logo.path_count()
        );
        Ok(logo)
    }

    /// Convert every request, reporting failures per request instead of stopping
    /// at the first one. Batches larger than the configured limit are rejected whole.
    pub fn convert_batch(&self, requests: &[ConvertRequest]) -> Result<Vec<BatchOutcome>, LogoError> {
        let max = self.config.limits.max_batch_size;
        if requests.len() > max {
            return Err(LogoError::Validation(format!(
                "a batch holds at most {max} requests, got {}",
                requests.len()
            )));
        }

        let outcomes: Vec<BatchOutcome> = requests
            .iter()
            .enumerate()
            .map(|(index, request)| {
                let result = self.convert(request);
                if let Err(e) = &result {
                    log::warn!("batch item {index} ({:?}) failed: {e}", request.text);
                }
                BatchOutcome {
                    index,
                    text: request.text.clone(),
                    result,
                }
            })
            .collect();

        let succeeded = outcomes.iter().filter(|o| o.is_success()).count();
        log::info!("batch converted {succeeded} of {} requests", outcomes.len());
        Ok(outcomes)
    }

    /// The four SVG variants of a brand package: the logo in the requested colour
    /// (for light backgrounds) and in white (for dark backgrounds), each bare and on
    /// a solid background
    pub fn brand_kit(&self, request: &ConvertRequest) -> Result<Vec<BrandAsset>, LogoError> {
        let slug = brand_slug(&request.text);
        let dark = self.convert(request)?;
        let light = self.convert(&request.clone().with_colour(colours::WHITE))?;

        Ok(vec![
            BrandAsset {
                file_name: format!("{slug}-dark-white-bg.svg"),
                logo: dark.with_background(&colours::WHITE),
            },
            BrandAsset {
                file_name: format!("{slug}-light-dark-bg.svg"),
                logo: light.with_background(&colours::BLACK),
            },
            BrandAsset {
                file_name: format!("{slug}-dark.svg"),
                logo: dark,
            },
            BrandAsset {
                file_name: format!("{slug}-light.svg"),
                logo: light,
            },
        ])
    }
}

impl<S: FontSource<Font = Font>> Converter<S> {
    /// Names, metrics and coverage of the font for `key`
    pub fn font_info(&self, key: &FontKey) -> Result<FontInfo, LogoError> {
        Ok(self.font(key)?.info())
    }
}

/// The largest font size, from 64 down to 16 in steps of 2, at which `text` fits
/// on a single line within `max_width`. Falls back to 16 when nothing fits.
pub fn fit_font_size<F: GlyphSource + ?Sized>(
    font: &F,
    text: &str,
    letter_spacing: Px,
    max_width: Px,
) -> Result<Px, LogoError> {
    let mut size = FIT_MAX_FONT_SIZE;
    while size >= FIT_MIN_FONT_SIZE {
        let width = width_of_text(text, font, Px(size), letter_spacing)?;
        if width <= max_width {
            return Ok(Px(size));
        }
        size -= FIT_STEP;
    }
    Ok(Px(FIT_MIN_FONT_SIZE))
}
