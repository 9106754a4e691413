//! Widget configuration: file formats, defaults and resolution into a
//! runtime [`SwitcherStyle`].

use serde::{Deserialize, Serialize};
use std::path::Path;
use switcher_core::{Color, ColorParseError, Easing};
use thiserror::Error;

/// Full-travel animation duration in milliseconds.
pub const DEFAULT_DURATION_MS: u32 = 200;

/// Fraction of the track used to derive the settle thresholds.
pub const DEFAULT_THRESHOLD: f32 = 0.5;

/// Default thumb inset in device-independent pixels.
pub const DEFAULT_THUMB_GAP: f32 = 5.0;

/// Errors raised while loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading the config file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed YAML.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// Malformed TOML.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A color field is not a valid hex color.
    #[error("Invalid color for '{field}': {source}")]
    Color {
        field: &'static str,
        source: ColorParseError,
    },

    /// File extension is neither YAML nor TOML.
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
}

/// Serialized widget options, as written in `switcher.yaml` or
/// `switcher.toml`. Every field is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SwitcherConfig {
    /// Background tint when fully open
    pub open_color: String,
    /// Background tint when fully closed
    pub close_color: String,
    /// Thumb fill
    pub thumb_color: String,
    /// Inset around the thumb, in device-independent pixels
    pub thumb_gap: f32,
    /// Device-independent to physical pixel factor
    pub density: f32,
    /// Full-travel animation duration
    pub duration_ms: u32,
    /// Settle threshold fraction
    pub threshold: f32,
    /// Animation curve
    pub easing: Easing,
}

impl Default for SwitcherConfig {
    fn default() -> Self {
        Self {
            open_color: "#ff0000".to_string(),
            close_color: "#888888".to_string(),
            thumb_color: "#ffffff".to_string(),
            thumb_gap: DEFAULT_THUMB_GAP,
            density: 1.0,
            duration_ms: DEFAULT_DURATION_MS,
            threshold: DEFAULT_THRESHOLD,
            easing: Easing::Decelerate,
        }
    }
}

impl SwitcherConfig {
    /// Parse a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Parse a TOML document.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Load a config file, picking the format from its extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        let contents = std::fs::read_to_string(path)?;
        log::debug!("loading switcher config from {}", path.display());
        match ext.as_str() {
            "yaml" | "yml" => Self::from_yaml_str(&contents),
            "toml" => Self::from_toml_str(&contents),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Thumb gap in physical pixels.
    ///
    /// Rounds to the nearest pixel; a non-zero gap never rounds to zero.
    #[must_use]
    pub fn gap_px(&self) -> i32 {
        let scaled = self.thumb_gap * self.density;
        let px = scaled.round() as i32;
        if px != 0 || self.thumb_gap == 0.0 {
            px
        } else if self.thumb_gap > 0.0 {
            1
        } else {
            -1
        }
    }

    /// Parse colors and convert units.
    pub fn resolve(&self) -> Result<SwitcherStyle, ConfigError> {
        let parse = |field: &'static str, hex: &str| {
            Color::from_hex(hex).map_err(|source| ConfigError::Color { field, source })
        };
        Ok(SwitcherStyle {
            open_color: parse("open_color", &self.open_color)?,
            close_color: parse("close_color", &self.close_color)?,
            thumb_color: parse("thumb_color", &self.thumb_color)?,
            gap: self.gap_px(),
            duration_ms: self.duration_ms,
            threshold: self.threshold,
            easing: self.easing,
        })
    }
}

/// Resolved runtime options of a [`crate::Switcher`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwitcherStyle {
    /// Background tint when fully open
    pub open_color: Color,
    /// Background tint when fully closed
    pub close_color: Color,
    /// Thumb fill
    pub thumb_color: Color,
    /// Inset around the thumb in pixels
    pub gap: i32,
    /// Full-travel animation duration
    pub duration_ms: u32,
    /// Settle threshold fraction
    pub threshold: f32,
    /// Animation curve
    pub easing: Easing,
}

impl Default for SwitcherStyle {
    fn default() -> Self {
        Self {
            open_color: Color::RED,
            close_color: Color::GRAY,
            thumb_color: Color::WHITE,
            gap: DEFAULT_THUMB_GAP as i32,
            duration_ms: DEFAULT_DURATION_MS,
            threshold: DEFAULT_THRESHOLD,
            easing: Easing::Decelerate,
        }
    }
}

impl SwitcherStyle {
    /// Set the open background tint.
    #[must_use]
    pub const fn open_color(mut self, color: Color) -> Self {
        self.open_color = color;
        self
    }

    /// Set the closed background tint.
    #[must_use]
    pub const fn close_color(mut self, color: Color) -> Self {
        self.close_color = color;
        self
    }

    /// Set the thumb fill.
    #[must_use]
    pub const fn thumb_color(mut self, color: Color) -> Self {
        self.thumb_color = color;
        self
    }

    /// Set the thumb inset in pixels. Not validated.
    #[must_use]
    pub const fn gap(mut self, gap: i32) -> Self {
        self.gap = gap;
        self
    }

    /// Set the full-travel animation duration.
    #[must_use]
    pub const fn duration_ms(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Set the animation curve.
    #[must_use]
    pub const fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}
