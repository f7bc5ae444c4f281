//! # Color Generation
//!
//! Pure, RNG-parameterized color production: fully random colors, weighted
//! scheme selection, and harmonized colors derived from a base.
//!
//! Random colors are drawn in HSL rather than RGB so the results stay in a
//! usable range: lightness is confined to `[10, 90]`, which avoids
//! near-black and near-white swatches. Harmonized colors apply the scheme's
//! hue rule exactly and then jitter saturation and lightness within a
//! per-scheme band, so regenerated palettes feel related but not uniform.

use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::debug;

use huebox_types::{ColorEntry, ColorScheme, HexColor, Hsl, Palette, PaletteError};

/// Generates a fully random color.
///
/// Hue is uniform over integer degrees `[0, 360)`, saturation over
/// `[0, 100]`, lightness over `[10, 90]`.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> HexColor {
    let h = f64::from(rng.random_range(0..360u16));
    let s = f64::from(rng.random_range(0..=100u8));
    let l = f64::from(rng.random_range(10..=90u8));
    HexColor::from_hsl(Hsl { h, s, l })
}

/// Picks a scheme by weight.
///
/// Draws a uniform value in `[0, 1)` and walks [`ColorScheme::ALL`]
/// accumulating weights, returning the first scheme whose cumulative weight
/// exceeds the draw. The weights sum to 1, so the trailing fallback is only
/// reachable through floating-point rounding.
pub fn select_scheme<R: Rng + ?Sized>(rng: &mut R) -> ColorScheme {
    let draw = rng.random_range(0.0..1.0);
    let mut cumulative = 0.0;
    for scheme in ColorScheme::ALL {
        cumulative += scheme.weight();
        if draw < cumulative {
            return scheme;
        }
    }
    ColorScheme::Complementary
}

/// Derives a color harmonized against `base` under `scheme`.
///
/// The hue transform is fixed per scheme (up to a random direction choice
/// for the schemes that have one); saturation and lightness receive bounded
/// random jitter and are clamped to `[20, 100]` and `[10, 90]` respectively.
/// The resulting hue is wrapped into `[0, 360)`.
pub fn harmonious_color<R: Rng + ?Sized>(
    rng: &mut R,
    base: HexColor,
    scheme: ColorScheme,
) -> HexColor {
    let Hsl { mut h, mut s, mut l } = base.to_hsl();

    match scheme {
        ColorScheme::Complementary => {
            h += 180.0;
            s = jitter(rng, s, 20.0, 20.0, 100.0);
            l = jitter(rng, l, 20.0, 10.0, 90.0);
        }
        ColorScheme::Analogous => {
            h += if rng.random_bool(0.5) { 30.0 } else { -30.0 };
            s = jitter(rng, s, 15.0, 20.0, 100.0);
            l = jitter(rng, l, 15.0, 10.0, 90.0);
        }
        ColorScheme::Triadic => {
            h += if rng.random_bool(0.5) { 120.0 } else { 240.0 };
            s = jitter(rng, s, 20.0, 20.0, 100.0);
            l = jitter(rng, l, 20.0, 10.0, 90.0);
        }
        ColorScheme::SplitComplementary => {
            h += 180.0 + if rng.random_bool(0.5) { 30.0 } else { -30.0 };
            s = jitter(rng, s, 20.0, 20.0, 100.0);
            l = jitter(rng, l, 20.0, 10.0, 90.0);
        }
        ColorScheme::Monochromatic => {
            // Hue stays put; variation comes from saturation and lightness.
            s = jitter(rng, s, 30.0, 20.0, 100.0);
            l = jitter(rng, l, 30.0, 10.0, 90.0);
        }
    }

    HexColor::from_hsl(Hsl {
        h: h.rem_euclid(360.0),
        s,
        l,
    })
}

fn jitter<R: Rng + ?Sized>(rng: &mut R, value: f64, amount: f64, min: f64, max: f64) -> f64 {
    (value + rng.random_range(-amount..amount)).clamp(min, max)
}

/// Seeds an all-unlocked palette of `count` random colors.
pub fn random_palette<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Result<Palette, PaletteError> {
    let entries = (0..count)
        .map(|_| ColorEntry::unlocked(random_color(rng)))
        .collect();
    Palette::new(entries)
}

/// Regenerates every unlocked entry of `palette`, copying locked entries
/// unchanged.
///
/// When at least one entry is locked, each unlocked entry is harmonized
/// against a uniformly chosen locked base under a freshly selected scheme;
/// otherwise unlocked entries are regenerated fully at random.
pub fn regenerate<R: Rng + ?Sized>(rng: &mut R, palette: &Palette) -> Palette {
    let locked = palette.locked_values();
    debug!(locked = locked.len(), total = palette.len(), "regenerating palette");

    let entries = palette
        .entries()
        .iter()
        .map(|entry| {
            if entry.locked {
                return *entry;
            }
            let value = match locked.choose(rng) {
                Some(&base) => {
                    let scheme = select_scheme(rng);
                    harmonious_color(rng, base, scheme)
                }
                None => random_color(rng),
            };
            ColorEntry::unlocked(value)
        })
        .collect();

    // Entry count is unchanged, so the bounds hold by construction.
    Palette::new(entries).expect("regeneration preserves palette size")
}

/// Replaces every unlocked entry with a fully random color, ignoring locked
/// bases. Used as the fallback when harmonized regeneration happens to
/// reproduce the current palette verbatim.
pub fn rerandomize_unlocked<R: Rng + ?Sized>(rng: &mut R, palette: &Palette) -> Palette {
    let entries = palette
        .entries()
        .iter()
        .map(|entry| {
            if entry.locked {
                *entry
            } else {
                ColorEntry::unlocked(random_color(rng))
            }
        })
        .collect();
    Palette::new(entries).expect("rerandomization preserves palette size")
}
