//! JSON snapshot of a session on disk.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{DsError, DsResult};
use crate::history::History;
use crate::selection::Selection;
use crate::session::Session;
use crate::store::Store;

pub const SNAPSHOT_VERSION: u32 = 1;

/// On-disk layout of `session.json`.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub version: u32,
    pub store: Store,
    #[serde(default)]
    pub selection: Selection,
    #[serde(default)]
    pub history: Option<History>,
}

impl SessionSnapshot {
    pub fn capture(session: &Session) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            store: session.store().clone(),
            selection: session.selection().clone(),
            history: Some(session.history().clone()),
        }
    }

    /// Check the version and the tree, then build a session. The stored
    /// undo history is kept, trimmed to `history_limit`; snapshots that
    /// fail the same checks are dropped with everything behind them.
    pub fn into_session(self, history_limit: usize) -> DsResult<Session> {
        if self.version != SNAPSHOT_VERSION {
            return Err(DsError::CorruptSnapshot(format!(
                "unsupported snapshot version {} (expected {})",
                self.version, SNAPSHOT_VERSION
            )));
        }

        let violations = self.store.check_invariants();
        if let Some(first) = violations.first() {
            warn!(count = violations.len(), "Snapshot failed invariant checks");
            return Err(DsError::CorruptSnapshot(format!(
                "component '{}': {}",
                first.component_id, first.message
            )));
        }

        let mut history = self.history.unwrap_or_else(|| History::new(history_limit));
        let dropped = history.drop_invalid(|snapshot| snapshot.store.check_invariants().is_empty());
        if dropped > 0 {
            warn!(dropped, "Discarded history entries that failed invariant checks");
        }
        history.set_limit(history_limit);
        Ok(Session::from_parts(self.store, self.selection, history))
    }
}

/// Write `session` as pretty JSON, creating parent directories.
pub fn save(path: &Path, session: &Session) -> DsResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(&SessionSnapshot::capture(session))?;
    std::fs::write(path, json)?;
    debug!(path = %path.display(), components = session.store().len(), "Session saved");
    Ok(())
}

/// Read a session written by `save`.
pub fn load(path: &Path, history_limit: usize) -> DsResult<Session> {
    let raw = std::fs::read_to_string(path)?;
    let snapshot: SessionSnapshot = serde_json::from_str(&raw)
        .map_err(|e| DsError::CorruptSnapshot(e.to_string()))?;
    let session = snapshot.into_session(history_limit)?;
    info!(path = %path.display(), components = session.store().len(), "Session loaded");
    Ok(session)
}

/// Like `load`, but a missing file yields an empty session.
pub fn load_or_default(path: &Path, history_limit: usize) -> DsResult<Session> {
    if path.exists() {
        load(path, history_limit)
    } else {
        Ok(Session::with_history_limit(history_limit))
    }
}
