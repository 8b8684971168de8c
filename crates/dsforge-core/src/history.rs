//! Undo/redo over whole-tree snapshots.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::selection::Selection;
use crate::store::Store;

/// The editor state at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub store: Store,
    pub selection: Selection,
}

/// Bounded undo stack plus redo stack. A limit of 0 disables history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct History {
    undo: VecDeque<Snapshot>,
    redo: Vec<Snapshot>,
    limit: usize,
}

impl History {
    pub fn new(limit: usize) -> Self {
        Self {
            undo: VecDeque::with_capacity(limit.min(64)),
            redo: Vec::new(),
            limit,
        }
    }

    /// Record the state as it was before a successful mutation.
    pub fn record(&mut self, before: Snapshot) {
        self.redo.clear();
        if self.limit == 0 {
            return;
        }
        self.undo.push_back(before);
        while self.undo.len() > self.limit {
            self.undo.pop_front();
        }
    }

    /// Step back. `current` becomes redoable.
    pub fn undo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let previous = self.undo.pop_back()?;
        self.redo.push(current);
        Some(previous)
    }

    /// Step forward again. `current` becomes undoable.
    pub fn redo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo.pop()?;
        self.undo.push_back(current);
        Some(next)
    }

    /// Change the capacity, dropping the oldest entries that no longer fit.
    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit;
        while self.undo.len() > limit {
            self.undo.pop_front();
        }
        if limit == 0 {
            self.redo.clear();
        }
    }

    /// Drop snapshots rejected by `keep`, together with every step behind
    /// them, so undo and redo never skip over a gap. Returns the number of
    /// snapshots removed.
    pub fn drop_invalid(&mut self, keep: impl Fn(&Snapshot) -> bool) -> usize {
        let before = self.undo.len() + self.redo.len();
        if let Some(pos) = self.undo.iter().rposition(|s| !keep(s)) {
            self.undo.drain(..=pos);
        }
        if let Some(pos) = self.redo.iter().rposition(|s| !keep(s)) {
            self.redo.drain(..=pos);
        }
        before - self.undo.len() - self.redo.len()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(50)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(tag: &str) -> Snapshot {
        Snapshot {
            store: Store::new(),
            selection: Selection::new(tag, "v", "s"),
        }
    }

    #[test]
    fn test_undo_redo_order() {
        let mut history = History::new(10);
        history.record(snap("a"));
        history.record(snap("b"));

        let back = history.undo(snap("c")).unwrap();
        assert_eq!(back.selection.component_id.as_deref(), Some("b"));
        let forward = history.redo(snap("b")).unwrap();
        assert_eq!(forward.selection.component_id.as_deref(), Some("c"));
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut history = History::new(2);
        history.record(snap("a"));
        history.record(snap("b"));
        history.record(snap("c"));
        assert_eq!(history.undo_depth(), 2);

        let first = history.undo(snap("d")).unwrap();
        let second = history.undo(first.clone()).unwrap();
        assert_eq!(second.selection.component_id.as_deref(), Some("b"));
        assert!(!history.can_undo());
    }

    #[test]
    fn test_record_clears_redo() {
        let mut history = History::new(5);
        history.record(snap("a"));
        history.undo(snap("b"));
        assert!(history.can_redo());
        history.record(snap("c"));
        assert!(!history.can_redo());
    }

    #[test]
    fn test_set_limit_truncates() {
        let mut history = History::new(5);
        for tag in ["a", "b", "c", "d"] {
            history.record(snap(tag));
        }
        history.set_limit(1);
        assert_eq!(history.undo_depth(), 1);
        let last = history.undo(snap("e")).unwrap();
        assert_eq!(last.selection.component_id.as_deref(), Some("d"));
    }

    #[test]
    fn test_drop_invalid_cuts_history_behind_bad_snapshot() {
        let mut history = History::new(10);
        for tag in ["a", "bad", "c", "d", "e"] {
            history.record(snap(tag));
        }
        history.undo(snap("bad-later"));
        history.undo(snap("g"));
        // undo: [a, bad, c], redo (next last): [bad-later, g]

        let dropped = history.drop_invalid(|s| {
            !s.selection.component_id.as_deref().unwrap_or("").starts_with("bad")
        });
        assert_eq!(dropped, 3);
        assert_eq!(history.undo_depth(), 1);

        let forward = history.redo(snap("d")).unwrap();
        assert_eq!(forward.selection.component_id.as_deref(), Some("g"));
        assert!(!history.can_redo());

        history.undo(snap("g"));
        let back = history.undo(snap("d")).unwrap();
        assert_eq!(back.selection.component_id.as_deref(), Some("c"));
        assert!(!history.can_undo());
    }

    #[test]
    fn test_zero_limit_disables_undo() {
        let mut history = History::new(0);
        history.record(snap("a"));
        assert!(!history.can_undo());
    }
}
