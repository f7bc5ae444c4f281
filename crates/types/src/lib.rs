//! # Huebox Types
//!
//! Shared type definitions for the Huebox palette tool: color value types and
//! colorimetric conversions, palette entries with their lock state, the
//! bounded palette container, and the color-scheme vocabulary used by the
//! harmonization engine.
//!
//! Everything in this crate is plain data. Randomized color production and
//! the undo/redo machinery live in `huebox-engine`; this crate only
//! guarantees that a [`HexColor`] is always a canonical `#RRGGBB` value and
//! that a [`Palette`] always holds between [`MIN_COLORS`] and [`MAX_COLORS`]
//! entries.

pub mod color;
pub mod palette;
pub mod scheme;

pub use color::{HexColor, Hsl, ParseHexError, Rgb};
pub use palette::{ColorEntry, MAX_COLORS, MIN_COLORS, Palette, PaletteError};
pub use scheme::{ColorScheme, ParseSchemeError};
