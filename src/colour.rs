use crate::LogoError;
use serde::{Deserialize, Deserializer};
use std::str::FromStr;

/// A fill colour, expressed in RGB, CMYK or grey colour spaces. Whatever the space,
/// it is written to documents as an sRGB hex fill.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    /// RGB colour; r, g, b, range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// CMYK colour; c, m, y, and k range from 0.0 to 1.0
    CMYK { c: f32, m: f32, y: f32, k: f32 },
    /// Grey colour; g ranges from 0.0 (black) to 1.0 (white)
    Grey { g: f32 },
}

impl Default for Colour {
    fn default() -> Self {
        colours::BLACK
    }
}

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0.0 to 1.0
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour::RGB { r, g, b }
    }

    /// Create a new colour in the RGB space. r, g, and b range from 0 to 255
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour::RGB {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Create a new colour in the CMYK space. c, m, y, and k range from 0.0 to 1.0
    pub fn new_cmyk(c: f32, m: f32, y: f32, k: f32) -> Colour {
        Colour::CMYK { c, m, y, k }
    }

    /// Create a new colour in the Grey space, g ranges from 0.0 to 1.0
    pub fn new_grey(g: f32) -> Colour {
        Colour::Grey { g }
    }

    /// The colour as 8-bit sRGB channels
    pub fn to_rgb_bytes(&self) -> (u8, u8, u8) {
        let (r, g, b) = match *self {
            Colour::RGB { r, g, b } => (r, g, b),
            Colour::CMYK { c, m, y, k } => (
                (1.0 - c) * (1.0 - k),
                (1.0 - m) * (1.0 - k),
                (1.0 - y) * (1.0 - k),
            ),
            Colour::Grey { g } => (g, g, g),
        };
        let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        (byte(r), byte(g), byte(b))
    }

    /// The colour as a lowercase `#rrggbb` string, suitable for SVG fills
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb_bytes();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Convert to CMYK percentages (0 to 100), the way print specifications quote them
    pub fn to_cmyk_percent(&self) -> (u8, u8, u8, u8) {
        let (c, m, y, k) = match *self {
            Colour::CMYK { c, m, y, k } => (c, m, y, k),
            _ => {
                let (r, g, b) = self.to_rgb_bytes();
                let (r, g, b) = (r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0);
                let k = 1.0 - r.max(g).max(b);
                if k >= 1.0 {
                    (0.0, 0.0, 0.0, 1.0)
                } else {
                    (
                        (1.0 - r - k) / (1.0 - k),
                        (1.0 - g - k) / (1.0 - k),
                        (1.0 - b - k) / (1.0 - k),
                        k,
                    )
                }
            }
        };
        let pct = |v: f32| (v.clamp(0.0, 1.0) * 100.0).round() as u8;
        (pct(c), pct(m), pct(y), pct(k))
    }
}

impl FromStr for Colour {
    type Err = LogoError;

    /// Parse `#rgb` or `#rrggbb` hex notation
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LogoError::InvalidColour(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());
        match hex.len() {
            3 => {
                let expand = |i: usize| channel(&hex[i..i + 1].repeat(2));
                Ok(Colour::new_rgb_bytes(expand(0)?, expand(1)?, expand(2)?))
            }
            6 => Ok(Colour::new_rgb_bytes(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => Err(invalid()),
        }
    }
}

impl<'de> Deserialize<'de> for Colour {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl<T: Into<f32>> From<(T, T, T)> for Colour {
    fn from(c: (T, T, T)) -> Self {
        Colour::RGB {
            r: c.0.into(),
            g: c.1.into(),
            b: c.2.into(),
        }
    }
}

impl<T: Into<f32>> From<(T, T, T, T)> for Colour {
    fn from(c: (T, T, T, T)) -> Self {
        Colour::CMYK {
            c: c.0.into(),
            m: c.1.into(),
            y: c.2.into(),
            k: c.3.into(),
        }
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    pub const WHITE: Colour = Colour::Grey { g: 1.0 };
    pub const RED: Colour = Colour::RGB {
        r: 1.0,
        g: 0.0,
        b: 0.0,
    };
    pub const GREEN: Colour = Colour::RGB {
        r: 0.0,
        g: 1.0,
        b: 0.0,
    };
    pub const BLUE: Colour = Colour::RGB {
        r: 0.0,
        g: 0.0,
        b: 1.0,
    };
}
