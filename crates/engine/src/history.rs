//! # Snapshot History
//!
//! A linear undo/redo stack over palette snapshots. The stack holds at least
//! one snapshot at all times and a cursor pointing at the current one; undo
//! and redo only move the cursor. Pushing while the cursor sits before the
//! tail truncates the redo tail first, which is the standard editor behavior
//! and the only place snapshots are ever discarded.

use huebox_types::Palette;
use tracing::debug;

/// Linear undo/redo stack with a single cursor.
///
/// Invariant: `cursor < snapshots.len()` and `snapshots` is never empty.
#[derive(Clone, Debug)]
pub struct History {
    snapshots: Vec<Palette>,
    cursor: usize,
}

impl History {
    /// Creates a history whose only snapshot is `initial`.
    pub fn new(initial: Palette) -> Self {
        Self {
            snapshots: vec![initial],
            cursor: 0,
        }
    }

    /// The snapshot the cursor points at.
    pub fn current(&self) -> &Palette {
        &self.snapshots[self.cursor]
    }

    /// Pushes a new snapshot and moves the cursor onto it, discarding any
    /// redo tail beyond the cursor first.
    ///
    /// A snapshot identical to the current one is rejected and the method
    /// returns `false`; accepted pushes return `true`.
    pub fn push(&mut self, snapshot: Palette) -> bool {
        if *self.current() == snapshot {
            return false;
        }
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(snapshot);
        self.cursor = self.snapshots.len() - 1;
        debug!(depth = self.snapshots.len(), cursor = self.cursor, "snapshot pushed");
        true
    }

    /// Moves the cursor one snapshot back. Returns `false` at the start of
    /// the timeline.
    pub fn undo(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Moves the cursor one snapshot forward. Returns `false` at the end of
    /// the timeline.
    pub fn redo(&mut self) -> bool {
        if self.cursor + 1 >= self.snapshots.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Whether an undo would move the cursor.
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Whether a redo would move the cursor.
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Number of stored snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always `false`; a history holds at least its initial snapshot.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
