//! # Palette Entries and the Bounded Palette Container
//!
//! A [`Palette`] is an ordered list of [`ColorEntry`] values whose length is
//! always within `[MIN_COLORS, MAX_COLORS]`. Order is display order and
//! duplicate color values are allowed.
//!
//! Palettes are value types: every editing helper returns a fresh palette
//! instead of mutating in place, which is what lets the history manager in
//! `huebox-engine` treat each accepted change as an immutable snapshot.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::{HexColor, ParseHexError};

/// Minimum number of colors a palette may hold.
pub const MIN_COLORS: usize = 2;

/// Maximum number of colors a palette may hold.
pub const MAX_COLORS: usize = 8;

/// Errors surfaced by palette construction and editing operations.
///
/// All of these are recoverable boundary conditions: the palette that
/// produced them is left untouched.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PaletteError {
    /// Appending would exceed [`MAX_COLORS`].
    #[error("a palette holds at most {max} colors")]
    TooManyColors { max: usize },
    /// Removing would drop below [`MIN_COLORS`].
    #[error("a palette needs at least {min} colors")]
    TooFewColors { min: usize },
    /// An index-based operation referenced a missing entry.
    #[error("color index {index} is out of bounds for a palette of {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    /// A wholesale replacement or initial seeding requested an unsupported size.
    #[error("palette size {requested} is outside the allowed {min}..={max} range")]
    InvalidSize {
        requested: usize,
        min: usize,
        max: usize,
    },
    /// An externally supplied color string failed validation.
    #[error(transparent)]
    InvalidColor(#[from] ParseHexError),
}

/// One palette slot: a color value plus its lock flag.
///
/// Locked entries are excluded from randomization when the palette is
/// regenerated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorEntry {
    /// The entry's color value.
    pub value: HexColor,
    /// Whether regeneration must leave this entry untouched.
    #[serde(default)]
    pub locked: bool,
}

impl ColorEntry {
    /// Creates an entry with an explicit lock flag.
    pub fn new(value: HexColor, locked: bool) -> Self {
        Self { value, locked }
    }

    /// Creates an unlocked entry, the default for fresh colors.
    pub fn unlocked(value: HexColor) -> Self {
        Self {
            value,
            locked: false,
        }
    }
}

/// An ordered, bounds-checked list of color entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ColorEntry>", into = "Vec<ColorEntry>")]
pub struct Palette {
    entries: Vec<ColorEntry>,
}

impl Palette {
    /// Builds a palette from entries, enforcing the size bounds.
    pub fn new(entries: Vec<ColorEntry>) -> Result<Self, PaletteError> {
        let requested = entries.len();
        if !(MIN_COLORS..=MAX_COLORS).contains(&requested) {
            return Err(PaletteError::InvalidSize {
                requested,
                min: MIN_COLORS,
                max: MAX_COLORS,
            });
        }
        Ok(Self { entries })
    }

    /// Builds an all-unlocked palette from bare color values.
    ///
    /// This is the entry point for externally supplied palettes (saved
    /// palettes, assistant suggestions).
    pub fn from_values(values: Vec<HexColor>) -> Result<Self, PaletteError> {
        Self::new(values.into_iter().map(ColorEntry::unlocked).collect())
    }

    /// Parses an all-unlocked palette from hex strings, the shape saved
    /// palettes are exchanged in (`["#AABBCC", ...]`).
    pub fn from_hex_list<I, S>(values: I) -> Result<Self, PaletteError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let parsed = values
            .into_iter()
            .map(|value| value.as_ref().parse::<HexColor>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_values(parsed)
    }

    /// Renders the palette as canonical hex strings, dropping lock flags.
    pub fn to_hex_list(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| entry.value.to_string())
            .collect()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; present for clippy's `len_without_is_empty` lint.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in display order.
    pub fn entries(&self) -> &[ColorEntry] {
        &self.entries
    }

    /// The entry at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&ColorEntry> {
        self.entries.get(index)
    }

    /// Color values of the locked entries, in display order.
    pub fn locked_values(&self) -> Vec<HexColor> {
        self.entries
            .iter()
            .filter(|entry| entry.locked)
            .map(|entry| entry.value)
            .collect()
    }

    /// Whether any entry is unlocked.
    pub fn has_unlocked(&self) -> bool {
        self.entries.iter().any(|entry| !entry.locked)
    }

    /// Returns a copy with the color value at `index` replaced. Lock flags
    /// and every other entry are untouched.
    pub fn with_value(&self, index: usize, value: HexColor) -> Result<Self, PaletteError> {
        let mut entries = self.entries.clone();
        let slot = entries
            .get_mut(index)
            .ok_or(PaletteError::IndexOutOfBounds {
                index,
                len: self.entries.len(),
            })?;
        slot.value = value;
        Ok(Self { entries })
    }

    /// Returns a copy with the lock flag at `index` replaced.
    pub fn with_lock(&self, index: usize, locked: bool) -> Result<Self, PaletteError> {
        let mut entries = self.entries.clone();
        let slot = entries
            .get_mut(index)
            .ok_or(PaletteError::IndexOutOfBounds {
                index,
                len: self.entries.len(),
            })?;
        slot.locked = locked;
        Ok(Self { entries })
    }

    /// Returns a copy with `entry` appended.
    pub fn with_appended(&self, entry: ColorEntry) -> Result<Self, PaletteError> {
        if self.entries.len() >= MAX_COLORS {
            return Err(PaletteError::TooManyColors { max: MAX_COLORS });
        }
        let mut entries = self.entries.clone();
        entries.push(entry);
        Ok(Self { entries })
    }

    /// Returns a copy with the last entry removed.
    pub fn without_last(&self) -> Result<Self, PaletteError> {
        if self.entries.len() <= MIN_COLORS {
            return Err(PaletteError::TooFewColors { min: MIN_COLORS });
        }
        let mut entries = self.entries.clone();
        entries.pop();
        Ok(Self { entries })
    }

    /// Returns a copy with the entry at `source` moved to `destination`,
    /// shifting the entries in between. Equal indices return an identical
    /// palette.
    pub fn reordered(&self, source: usize, destination: usize) -> Result<Self, PaletteError> {
        let len = self.entries.len();
        let bad_index = [source, destination].into_iter().find(|&i| i >= len);
        if let Some(index) = bad_index {
            return Err(PaletteError::IndexOutOfBounds { index, len });
        }

        let mut entries = self.entries.clone();
        let entry = entries.remove(source);
        entries.insert(destination, entry);
        Ok(Self { entries })
    }
}

impl TryFrom<Vec<ColorEntry>> for Palette {
    type Error = PaletteError;

    fn try_from(entries: Vec<ColorEntry>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

impl From<Palette> for Vec<ColorEntry> {
    fn from(palette: Palette) -> Self {
        palette.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(input: &str) -> HexColor {
        input.parse().expect("valid hex input")
    }

    fn palette(values: &[&str]) -> Palette {
        Palette::from_hex_list(values).expect("valid palette")
    }

    #[test]
    fn rejects_sizes_outside_bounds() {
        let too_small = Palette::from_hex_list(["#FF0000"]);
        assert_eq!(
            too_small,
            Err(PaletteError::InvalidSize {
                requested: 1,
                min: MIN_COLORS,
                max: MAX_COLORS,
            })
        );

        let nine = vec!["#112233"; 9];
        assert!(matches!(
            Palette::from_hex_list(nine),
            Err(PaletteError::InvalidSize { requested: 9, .. })
        ));
    }

    #[test]
    fn from_hex_list_surfaces_parse_errors() {
        let result = Palette::from_hex_list(["#FF0000", "not-a-color"]);
        assert!(matches!(result, Err(PaletteError::InvalidColor(_))));
    }

    #[test]
    fn hex_list_round_trip_preserves_order() {
        let original = palette(&["#FF0000", "#00FF00", "#0000FF"]);
        let rebuilt = Palette::from_hex_list(original.to_hex_list()).unwrap();
        assert_eq!(rebuilt, original);
    }

    #[test]
    fn appending_at_capacity_fails_without_change() {
        let full = palette(&["#111111"; 8]);
        let result = full.with_appended(ColorEntry::unlocked(hex("#222222")));
        assert_eq!(result, Err(PaletteError::TooManyColors { max: MAX_COLORS }));
        assert_eq!(full.len(), 8);
    }

    #[test]
    fn removing_at_minimum_fails_without_change() {
        let minimal = palette(&["#111111", "#222222"]);
        assert_eq!(
            minimal.without_last(),
            Err(PaletteError::TooFewColors { min: MIN_COLORS })
        );
        assert_eq!(minimal.len(), 2);
    }

    #[test]
    fn with_value_touches_only_the_target_entry() {
        let original = palette(&["#FF0000", "#00FF00", "#0000FF"]);
        let locked = original.with_lock(2, true).unwrap();
        let edited = locked.with_value(1, hex("#ABCDEF")).unwrap();

        assert_eq!(edited.get(0), locked.get(0));
        assert_eq!(edited.get(1).unwrap().value, hex("#ABCDEF"));
        assert!(!edited.get(1).unwrap().locked);
        assert_eq!(edited.get(2), locked.get(2));
    }

    #[test]
    fn lock_flag_changes_do_not_touch_values() {
        let original = palette(&["#FF0000", "#00FF00"]);
        let locked = original.with_lock(0, true).unwrap();
        assert!(locked.get(0).unwrap().locked);
        assert_eq!(locked.get(0).unwrap().value, hex("#FF0000"));
        assert_eq!(locked.locked_values(), vec![hex("#FF0000")]);
    }

    #[test]
    fn reorder_shifts_intervening_entries() {
        let original = palette(&["#AA0000", "#00BB00", "#0000CC", "#DDDD00"]);

        let forward = original.reordered(0, 2).unwrap();
        assert_eq!(
            forward.to_hex_list(),
            vec!["#00BB00", "#0000CC", "#AA0000", "#DDDD00"]
        );

        let backward = original.reordered(3, 1).unwrap();
        assert_eq!(
            backward.to_hex_list(),
            vec!["#AA0000", "#DDDD00", "#00BB00", "#0000CC"]
        );

        assert_eq!(original.reordered(1, 1).unwrap(), original);
    }

    #[test]
    fn index_errors_report_index_and_len() {
        let original = palette(&["#AA0000", "#00BB00"]);
        assert_eq!(
            original.with_value(5, hex("#FFFFFF")),
            Err(PaletteError::IndexOutOfBounds { index: 5, len: 2 })
        );
        assert_eq!(
            original.reordered(0, 9),
            Err(PaletteError::IndexOutOfBounds { index: 9, len: 2 })
        );
    }

    #[test]
    fn serde_round_trip_enforces_bounds() {
        let original = palette(&["#FF0000", "#00FF00"]);
        let json = serde_json::to_string(&original).unwrap();
        let rebuilt: Palette = serde_json::from_str(&json).unwrap();
        assert_eq!(rebuilt, original);

        let too_small = r##"[{"value":"#FF0000","locked":false}]"##;
        assert!(serde_json::from_str::<Palette>(too_small).is_err());
    }
}
