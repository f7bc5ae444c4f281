//! # Color Values and Conversions
//!
//! This module provides the canonical color value type used across the
//! workspace plus the colorimetric conversions the generator is built on.
//!
//! ## Key Types
//!
//! - [`HexColor`]: a validated, canonical `#RRGGBB` value
//! - [`Rgb`]: 8-bit-per-channel red/green/blue
//! - [`Hsl`]: hue in degrees `[0, 360)`, saturation and lightness as
//!   percentages `[0, 100]`
//!
//! ## Parsing Policy
//!
//! Parsing is strict: malformed input yields a [`ParseHexError`] instead of
//! silently degrading to black. Validation happens once at the boundary, so
//! every conversion on an already-constructed value is total.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when parsing a hex color string.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseHexError {
    /// The input did not contain exactly six hex digits.
    #[error("expected 6 hex digits, got {len}")]
    Length {
        /// Number of digits found after stripping the optional `#` prefix.
        len: usize,
    },
    /// The input contained a character outside `[0-9a-fA-F]`.
    #[error("invalid hex digit {found:?}")]
    Digit {
        /// The offending character.
        found: char,
    },
}

/// An 8-bit-per-channel RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Builds an [`Rgb`] from floating-point channels, clamping each to
    /// `[0, 255]` and rounding to the nearest integer.
    pub fn from_f64(r: f64, g: f64, b: f64) -> Self {
        let clamp = |channel: f64| channel.clamp(0.0, 255.0).round() as u8;
        Self {
            r: clamp(r),
            g: clamp(g),
            b: clamp(b),
        }
    }

    /// Converts to HSL. The achromatic case (`max == min`) reports both hue
    /// and saturation as zero.
    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let lightness = (max + min) / 2.0;

        if max == min {
            return Hsl {
                h: 0.0,
                s: 0.0,
                l: lightness * 100.0,
            };
        }

        let delta = max - min;
        let saturation = if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        let hue_sixths = if max == r {
            (g - b) / delta + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        Hsl {
            h: hue_sixths * 60.0,
            s: saturation * 100.0,
            l: lightness * 100.0,
        }
    }

    /// BT.601 luma test used to decide whether dark text stays readable on
    /// top of this color.
    pub fn is_light(self) -> bool {
        let luma =
            (f64::from(self.r) * 299.0 + f64::from(self.g) * 587.0 + f64::from(self.b) * 114.0)
                / 1000.0;
        luma > 128.0
    }
}

/// A color in the HSL cylinder: hue in degrees `[0, 360)`, saturation and
/// lightness as percentages `[0, 100]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    /// Converts back to RGB using the standard hue-to-channel ramp.
    pub fn to_rgb(self) -> Rgb {
        let h = self.h / 360.0;
        let s = self.s / 100.0;
        let l = self.l / 100.0;

        if s == 0.0 {
            let gray = l * 255.0;
            return Rgb::from_f64(gray, gray, gray);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        Rgb::from_f64(
            hue_to_channel(p, q, h + 1.0 / 3.0) * 255.0,
            hue_to_channel(p, q, h) * 255.0,
            hue_to_channel(p, q, h - 1.0 / 3.0) * 255.0,
        )
    }
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// A validated hex color. The canonical form is always uppercase `#RRGGBB`,
/// exactly seven characters.
///
/// Construction goes through [`FromStr`]/[`TryFrom`] (strict, case and `#`
/// prefix insensitive) or through [`Rgb`]/[`Hsl`] conversions, so a value of
/// this type is well-formed by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(Rgb);

impl HexColor {
    /// Returns the RGB channels.
    pub fn to_rgb(self) -> Rgb {
        self.0
    }

    /// Converts to HSL.
    pub fn to_hsl(self) -> Hsl {
        self.0.to_hsl()
    }

    /// Encodes an HSL color as a canonical hex value.
    pub fn from_hsl(hsl: Hsl) -> Self {
        Self(hsl.to_rgb())
    }

    /// Whether dark text is readable on top of this color.
    pub fn is_light(self) -> bool {
        self.0.is_light()
    }
}

impl From<Rgb> for HexColor {
    fn from(rgb: Rgb) -> Self {
        Self(rgb)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0.r, self.0.g, self.0.b)
    }
}

impl FromStr for HexColor {
    type Err = ParseHexError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if let Some(found) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ParseHexError::Digit { found });
        }
        if digits.len() != 6 {
            return Err(ParseHexError::Length { len: digits.len() });
        }

        // All-ASCII and length-checked, so the radix parse cannot fail.
        let value = u32::from_str_radix(digits, 16).expect("validated hex digits");
        Ok(Self(Rgb {
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        }))
    }
}

impl TryFrom<String> for HexColor {
    type Error = ParseHexError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}
