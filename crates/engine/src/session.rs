//! # Palette Session
//!
//! The session owns the palette state for one editing session and mediates
//! every mutation path: generation, adding and removing colors, lock and
//! value edits, reordering, wholesale replacement, and undo/redo. Each
//! accepted mutation pushes exactly one snapshot onto the [`History`];
//! rejected mutations leave the state untouched and surface a
//! [`PaletteError`].
//!
//! The session is constructed at session start and dropped at session end;
//! there is no ambient global state. All randomness flows through the RNG
//! the session was built with, so a seeded generator makes every operation
//! reproducible.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, warn};

use huebox_types::{
    ColorEntry, HexColor, MAX_COLORS, MIN_COLORS, Palette, PaletteError,
};

use crate::generator;
use crate::history::History;

/// Number of colors a fresh session starts with unless the caller asks
/// otherwise.
pub const DEFAULT_SEED_COUNT: usize = 5;

/// Owned state for one palette editing session.
///
/// Generic over the random source; production code uses the [`StdRng`]
/// default seeded from the operating system, tests inject
/// `StdRng::seed_from_u64`.
pub struct PaletteSession<R: Rng = StdRng> {
    history: History,
    rng: R,
}

impl PaletteSession<StdRng> {
    /// Starts a session with `count` random colors (between [`MIN_COLORS`]
    /// and [`MAX_COLORS`]) and OS-seeded randomness.
    pub fn new(count: usize) -> Result<Self, PaletteError> {
        Self::with_rng(count, StdRng::from_os_rng())
    }

    /// Starts a session with the default seed count.
    pub fn with_defaults() -> Result<Self, PaletteError> {
        Self::new(DEFAULT_SEED_COUNT)
    }
}

impl<R: Rng> PaletteSession<R> {
    /// Starts a session with an explicit random source.
    pub fn with_rng(count: usize, mut rng: R) -> Result<Self, PaletteError> {
        let initial = generator::random_palette(&mut rng, count)?;
        Ok(Self {
            history: History::new(initial),
            rng,
        })
    }

    /// The palette as of the current snapshot.
    pub fn current(&self) -> &Palette {
        self.history.current()
    }

    /// Whether an undo would change the visible palette.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether a redo would change the visible palette.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Regenerates every unlocked entry, keeping locked entries unchanged.
    ///
    /// With at least one locked entry, new colors are harmonized against a
    /// randomly chosen locked base; otherwise they are fully random. If the
    /// harmonized result happens to reproduce the current palette verbatim,
    /// the unlocked entries are regenerated once more at pure random so the
    /// operation always produces a visible change when any entry is
    /// unlocked.
    pub fn generate(&mut self) {
        let current = self.history.current().clone();
        if !current.has_unlocked() {
            debug!("every entry is locked, nothing to regenerate");
            return;
        }

        let mut next = generator::regenerate(&mut self.rng, &current);
        if next == current {
            debug!("harmonized regeneration reproduced the palette, falling back to random");
            next = generator::rerandomize_unlocked(&mut self.rng, &current);
        }
        self.history.push(next);
    }

    /// Appends one fresh random, unlocked color.
    pub fn add_color(&mut self) -> Result<(), PaletteError> {
        let current = self.history.current().clone();
        if current.len() >= MAX_COLORS {
            warn!(len = current.len(), "add rejected at capacity");
            return Err(PaletteError::TooManyColors { max: MAX_COLORS });
        }
        let entry = ColorEntry::unlocked(generator::random_color(&mut self.rng));
        let next = current.with_appended(entry)?;
        self.history.push(next);
        Ok(())
    }

    /// Removes a color. With `replacement` the supplied palette is adopted
    /// wholesale (used when removing a specific color by identity);
    /// otherwise the last entry is dropped.
    pub fn remove_color(&mut self, replacement: Option<Palette>) -> Result<(), PaletteError> {
        let current = self.history.current();
        if current.len() <= MIN_COLORS {
            warn!(len = current.len(), "remove rejected at minimum size");
            return Err(PaletteError::TooFewColors { min: MIN_COLORS });
        }
        let next = match replacement {
            Some(palette) => palette,
            None => current.without_last()?,
        };
        self.history.push(next);
        Ok(())
    }

    /// Replaces the lock flag at `index`, leaving the color value alone.
    /// Lock state is part of the snapshot, so this records history like any
    /// other edit.
    pub fn set_lock(&mut self, index: usize, locked: bool) -> Result<(), PaletteError> {
        let next = self.history.current().with_lock(index, locked)?;
        self.history.push(next);
        Ok(())
    }

    /// Replaces the color value at `index`, leaving every other entry and
    /// all lock flags alone.
    pub fn set_color(&mut self, index: usize, value: HexColor) -> Result<(), PaletteError> {
        let next = self.history.current().with_value(index, value)?;
        self.history.push(next);
        Ok(())
    }

    /// Moves the entry at `source` to `destination`. Equal indices are a
    /// no-op.
    pub fn reorder(&mut self, source: usize, destination: usize) -> Result<(), PaletteError> {
        let next = self.history.current().reordered(source, destination)?;
        self.history.push(next);
        Ok(())
    }

    /// Adopts an externally supplied color list (a saved palette or an
    /// assistant suggestion) as the new palette; every entry starts
    /// unlocked.
    pub fn replace_all(&mut self, colors: Vec<HexColor>) -> Result<(), PaletteError> {
        let next = Palette::from_values(colors)?;
        self.history.push(next);
        Ok(())
    }

    /// Steps the visible palette one snapshot back. Returns `false` when
    /// there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }

    /// Steps the visible palette one snapshot forward. Returns `false` when
    /// there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }
}

impl<R: Rng> std::fmt::Debug for PaletteSession<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaletteSession")
            .field("history", &self.history)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(count: usize, seed: u64) -> PaletteSession<StdRng> {
        PaletteSession::with_rng(count, StdRng::seed_from_u64(seed)).expect("valid session")
    }

    fn hex(input: &str) -> HexColor {
        input.parse().expect("valid hex input")
    }

    #[test]
    fn starts_with_requested_count_and_clean_history() {
        let session = session(5, 1);
        assert_eq!(session.current().len(), 5);
        assert!(!session.can_undo());
        assert!(!session.can_redo());
    }

    #[test]
    fn rejects_out_of_range_seed_counts() {
        let result = PaletteSession::with_rng(1, StdRng::seed_from_u64(1));
        assert!(matches!(
            result,
            Err(PaletteError::InvalidSize { requested: 1, .. })
        ));
    }

    #[test]
    fn locked_red_survives_generation() {
        let mut session = session(2, 7);
        session
            .replace_all(vec![hex("#FF0000"), hex("#00FF00")])
            .unwrap();
        session.set_lock(0, true).unwrap();
        session.generate();

        let palette = session.current();
        assert_eq!(palette.get(0).unwrap().value, hex("#FF0000"));
        assert!(palette.get(0).unwrap().locked);
        assert_ne!(palette.get(1).unwrap().value, hex("#00FF00"));
    }

    #[test]
    fn generation_always_changes_an_unlocked_entry() {
        let mut session = session(5, 21);
        for _ in 0..100 {
            let before = session.current().clone();
            session.generate();
            assert_ne!(session.current(), &before);
        }
    }

    #[test]
    fn generation_with_everything_locked_is_a_no_op() {
        let mut session = session(2, 3);
        session.set_lock(0, true).unwrap();
        session.set_lock(1, true).unwrap();
        let before = session.current().clone();

        session.generate();
        assert_eq!(session.current(), &before);
    }

    #[test]
    fn add_color_appends_until_the_limit() {
        let mut session = session(7, 4);
        session.add_color().unwrap();
        assert_eq!(session.current().len(), 8);

        let result = session.add_color();
        assert_eq!(result, Err(PaletteError::TooManyColors { max: MAX_COLORS }));
        assert_eq!(session.current().len(), 8);
    }

    #[test]
    fn remove_color_stops_at_the_minimum() {
        let mut session = session(3, 5);
        session.remove_color(None).unwrap();
        assert_eq!(session.current().len(), 2);

        let result = session.remove_color(None);
        assert_eq!(result, Err(PaletteError::TooFewColors { min: MIN_COLORS }));
        assert_eq!(session.current().len(), 2);
    }

    #[test]
    fn remove_color_adopts_a_caller_supplied_replacement() {
        let mut session = session(3, 6);
        let replacement = Palette::from_hex_list(["#101010", "#202020"]).unwrap();
        session.remove_color(Some(replacement.clone())).unwrap();
        assert_eq!(session.current(), &replacement);
    }

    #[test]
    fn undo_restores_the_pre_mutation_snapshot_exactly() {
        let mut session = session(4, 8);
        let before = session.current().clone();

        session.set_color(2, hex("#123456")).unwrap();
        let after = session.current().clone();
        assert_ne!(after, before);

        assert!(session.undo());
        assert_eq!(session.current(), &before);

        assert!(session.redo());
        assert_eq!(session.current(), &after);
    }

    #[test]
    fn pushing_after_undo_discards_redo() {
        let mut session = session(4, 9);
        session.set_color(0, hex("#111111")).unwrap();
        session.set_color(1, hex("#222222")).unwrap();

        assert!(session.undo());
        assert!(session.can_redo());

        session.set_color(3, hex("#333333")).unwrap();
        assert!(!session.can_redo());
        assert!(!session.redo());
    }

    #[test]
    fn setting_the_same_color_does_not_record_history() {
        let mut session = session(3, 10);
        let value = session.current().get(1).unwrap().value;
        session.set_color(1, value).unwrap();
        assert!(!session.can_undo());
    }

    #[test]
    fn lock_toggles_record_history_without_changing_values() {
        let mut session = session(3, 11);
        let values = session.current().to_hex_list();

        session.set_lock(1, true).unwrap();
        assert!(session.can_undo());
        assert_eq!(session.current().to_hex_list(), values);

        assert!(session.undo());
        assert!(!session.current().get(1).unwrap().locked);
    }

    #[test]
    fn reorder_moves_entries_and_is_undoable() {
        let mut session = session(4, 12);
        let before = session.current().to_hex_list();

        session.reorder(0, 3).unwrap();
        let after = session.current().to_hex_list();
        assert_eq!(after[3], before[0]);
        assert_eq!(after[0], before[1]);

        assert!(session.undo());
        assert_eq!(session.current().to_hex_list(), before);
    }

    #[test]
    fn reorder_to_the_same_slot_is_a_no_op() {
        let mut session = session(4, 13);
        session.reorder(2, 2).unwrap();
        assert!(!session.can_undo());
    }

    #[test]
    fn replace_all_validates_size_and_unlocks_everything() {
        let mut session = session(3, 14);
        session.set_lock(0, true).unwrap();

        session
            .replace_all(vec![hex("#0A0A0A"), hex("#B0B0B0"), hex("#123456")])
            .unwrap();
        assert!(session.current().entries().iter().all(|e| !e.locked));

        let result = session.replace_all(vec![hex("#0A0A0A")]);
        assert!(matches!(
            result,
            Err(PaletteError::InvalidSize { requested: 1, .. })
        ));
        assert_eq!(session.current().len(), 3);
    }

    #[test]
    fn index_errors_leave_state_untouched() {
        let mut session = session(2, 15);
        let before = session.current().clone();

        assert!(session.set_lock(9, true).is_err());
        assert!(session.set_color(9, hex("#FFFFFF")).is_err());
        assert!(session.reorder(0, 9).is_err());

        assert_eq!(session.current(), &before);
        assert!(!session.can_undo());
    }

    #[test]
    fn seeded_sessions_replay_identically() {
        let mut first = session(5, 99);
        let mut second = session(5, 99);

        for s in [&mut first, &mut second] {
            s.set_lock(0, true).unwrap();
            s.generate();
            s.add_color().unwrap();
            s.generate();
        }

        assert_eq!(first.current(), second.current());
    }
}
