use crate::units::Px;
use serde::Deserialize;

/// The superscript-style marks that are set small and raised after a brand name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    #[serde(alias = "tm")]
    Trademark,
    #[serde(alias = "r")]
    Registered,
    #[serde(alias = "c")]
    Copyright,
}

impl SymbolKind {
    /// The character drawn for the mark
    pub fn symbol(self) -> char {
        match self {
            SymbolKind::Trademark => '™',
            SymbolKind::Registered => '®',
            SymbolKind::Copyright => '©',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SymbolKind::Trademark => "trademark",
            SymbolKind::Registered => "registered",
            SymbolKind::Copyright => "copyright",
        }
    }
}

/// How a special symbol is sized and positioned relative to the surrounding text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymbolRule {
    pub symbol: char,
    pub kind: SymbolKind,
    /// Fraction of the font size the symbol is drawn (and advanced) at
    pub size_scale: f32,
    /// Vertical shift as a fraction of the base font size; negative raises the symbol
    pub offset_factor: f32,
}

impl SymbolRule {
    /// The font size the symbol is drawn at for text set at `font_size`
    pub fn effective_size(&self, font_size: Px) -> Px {
        font_size * self.size_scale
    }

    /// How far the symbol's baseline moves from the line's baseline
    pub fn vertical_offset(&self, font_size: Px) -> Px {
        font_size * self.offset_factor
    }
}

pub const SPECIAL_SYMBOLS: [SymbolRule; 3] = [
    SymbolRule {
        symbol: '™',
        kind: SymbolKind::Trademark,
        size_scale: 0.35,
        offset_factor: -0.5,
    },
    SymbolRule {
        symbol: '®',
        kind: SymbolKind::Registered,
        size_scale: 0.35,
        offset_factor: -0.5,
    },
    SymbolRule {
        symbol: '©',
        kind: SymbolKind::Copyright,
        size_scale: 0.35,
        offset_factor: -0.5,
    },
];

/// The rule for `ch`, if it is one of the [SPECIAL_SYMBOLS]
pub fn symbol_rule(ch: char) -> Option<&'static SymbolRule> {
    SPECIAL_SYMBOLS.iter().find(|rule| rule.symbol == ch)
}
