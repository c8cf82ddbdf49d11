//! Configuration structures and loading logic.

use crate::cache::{DEFAULT_CAPACITY, DEFAULT_TTL};
use crate::compose::DEFAULT_PADDING;
use crate::units::Px;
use crate::LogoError;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Top-level configuration structure.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Clear space on every side of a composed logo
    pub padding: Px,
    /// Directory searched for `{Family-Name}-{weight}.ttf` files
    pub font_dir: PathBuf,
    pub limits: Limits,
    pub font_cache: FontCacheConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            padding: DEFAULT_PADDING,
            font_dir: PathBuf::from("fonts"),
            limits: Limits::default(),
            font_cache: FontCacheConfig::default(),
        }
    }
}

/// Bounds a conversion request has to stay within.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Maximum number of characters, line breaks included
    pub max_text_length: usize,
    pub min_font_size: f32,
    pub max_font_size: f32,
    pub min_letter_spacing: f32,
    pub max_letter_spacing: f32,
    /// Maximum number of requests in one batch
    pub max_batch_size: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_text_length: 200,
            min_font_size: 8.0,
            max_font_size: 500.0,
            min_letter_spacing: -50.0,
            max_letter_spacing: 100.0,
            max_batch_size: 10,
        }
    }
}

/// Font cache sizing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FontCacheConfig {
    pub ttl_secs: u64,
    /// Maximum number of fonts kept; 0 disables the cache
    pub capacity: usize,
}

impl Default for FontCacheConfig {
    fn default() -> Self {
        FontCacheConfig {
            ttl_secs: DEFAULT_TTL.as_secs(),
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl FontCacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

impl Config {
    /// Parse a TOML document; missing keys take their default values
    pub fn from_toml(s: &str) -> Result<Config, LogoError> {
        let config = toml::from_str(s)?;
        Ok(config)
    }

    /// Read and parse a TOML configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config, LogoError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Config::from_toml(&text)?;
        log::info!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Read the configuration file if there is one, falling back to the defaults
    /// when it does not exist. Malformed files are still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Config, LogoError> {
        match Config::load(path.as_ref()) {
            Err(LogoError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no configuration at {}, using defaults", path.as_ref().display());
                Ok(Config::default())
            }
            other => other,
        }
    }
}
