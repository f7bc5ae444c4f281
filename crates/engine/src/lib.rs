//! # Huebox Engine
//!
//! The Huebox engine produces palette colors and manages the editing
//! session's undo/redo history. It is the only stateful part of the
//! workspace; everything else is either plain data (`huebox-types`) or a
//! surface that drives it (`huebox` CLI).
//!
//! ## Key Features
//!
//! - **Color Generation**: random colors over a controlled HSL range and
//!   harmonized colors derived from a base via named schemes
//! - **Weighted Scheme Selection**: complementary, analogous, triadic,
//!   split-complementary and monochromatic schemes chosen by weight
//! - **Linear Undo/Redo**: palette snapshots on a single timeline with
//!   standard redo-tail truncation
//! - **Injected Randomness**: every randomized operation draws from a caller
//!   supplied [`rand::Rng`], so behavior is reproducible under a seeded
//!   generator
//!
//! ## Usage
//!
//! ```rust
//! use huebox_engine::PaletteSession;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut session = PaletteSession::with_rng(5, StdRng::seed_from_u64(7))?;
//! session.set_lock(0, true)?;
//! session.generate();
//! assert!(session.can_undo());
//!
//! session.undo();
//! assert!(session.can_redo());
//! # Ok::<(), huebox_types::PaletteError>(())
//! ```
//!
//! ## Architecture
//!
//! - **`generator`**: pure, RNG-parameterized color production
//! - **`history`**: the snapshot stack and its cursor
//! - **`session`**: the owned session state tying the two together

pub mod generator;
pub mod history;
pub mod session;

pub use generator::{harmonious_color, random_color, random_palette, regenerate, select_scheme};
pub use history::History;
pub use session::{DEFAULT_SEED_COUNT, PaletteSession};
