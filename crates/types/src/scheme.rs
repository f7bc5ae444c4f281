//! Color-scheme vocabulary for harmonized generation.
//!
//! Each scheme names a hue-offset rule relative to a base color; the weights
//! drive the engine's weighted random selection. The actual hue math lives in
//! `huebox-engine`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A named harmonization rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorScheme {
    /// Opposite side of the hue wheel (+180°).
    Complementary,
    /// Neighboring hues (±30°).
    Analogous,
    /// One of the two remaining thirds of the wheel (+120° or +240°).
    Triadic,
    /// Either neighbor of the complement (+180° ± 30°).
    SplitComplementary,
    /// Same hue, varied saturation and lightness.
    Monochromatic,
}

impl ColorScheme {
    /// Every scheme, in selection order. The order matters: weighted
    /// selection walks this list accumulating weights.
    pub const ALL: [ColorScheme; 5] = [
        ColorScheme::Complementary,
        ColorScheme::Analogous,
        ColorScheme::Triadic,
        ColorScheme::SplitComplementary,
        ColorScheme::Monochromatic,
    ];

    /// Selection weight. The weights across [`ColorScheme::ALL`] sum to 1.
    pub fn weight(self) -> f64 {
        match self {
            ColorScheme::Complementary => 0.30,
            ColorScheme::Analogous => 0.25,
            ColorScheme::Triadic => 0.20,
            ColorScheme::SplitComplementary => 0.15,
            ColorScheme::Monochromatic => 0.10,
        }
    }

    /// Stable snake_case identifier, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            ColorScheme::Complementary => "complementary",
            ColorScheme::Analogous => "analogous",
            ColorScheme::Triadic => "triadic",
            ColorScheme::SplitComplementary => "split_complementary",
            ColorScheme::Monochromatic => "monochromatic",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a scheme name cannot be parsed.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error(
    "unknown color scheme {0:?}; expected one of complementary, analogous, \
     triadic, split_complementary, monochromatic"
)]
pub struct ParseSchemeError(pub String);

impl FromStr for ColorScheme {
    type Err = ParseSchemeError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        // Accept hyphenated spellings from the command line.
        match input.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "complementary" => Ok(ColorScheme::Complementary),
            "analogous" => Ok(ColorScheme::Analogous),
            "triadic" => Ok(ColorScheme::Triadic),
            "split_complementary" => Ok(ColorScheme::SplitComplementary),
            "monochromatic" => Ok(ColorScheme::Monochromatic),
            _ => Err(ParseSchemeError(input.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        let total: f64 = ColorScheme::ALL.iter().map(|scheme| scheme.weight()).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn display_and_from_str_round_trip() {
        for scheme in ColorScheme::ALL {
            let parsed: ColorScheme = scheme.to_string().parse().unwrap();
            assert_eq!(parsed, scheme);
        }
    }

    #[test]
    fn parse_accepts_hyphens_and_case() {
        assert_eq!(
            "Split-Complementary".parse::<ColorScheme>(),
            Ok(ColorScheme::SplitComplementary)
        );
        assert!(matches!(
            "tetradic".parse::<ColorScheme>(),
            Err(ParseSchemeError(_))
        ));
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&ColorScheme::SplitComplementary).unwrap();
        assert_eq!(json, "\"split_complementary\"");
    }
}
