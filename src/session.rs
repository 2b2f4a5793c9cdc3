//! Document sessions (tabs)
//!
//! One session per open document: the table snapshot plus everything that
//! must survive a tab switch — dirty flag, per-column filters, undo/redo
//! history, batch-transaction state, and selection. Sessions are uniform
//! values held by the store; exactly one is active at a time.

use std::collections::HashMap;

use crate::grid::{Selection, TableSnapshot};
use crate::history::EditHistory;

/// Unique identifier for a document session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(pub u64);

/// Nestable batch-transaction state. The pre-batch snapshot is captured once,
/// at the first mutation inside the outermost batch.
#[derive(Debug, Clone, Default)]
pub struct BatchState {
    /// Nesting depth; zero means no batch is open
    pub depth: u32,
    /// Label for the single entry pushed at final commit
    pub label: String,
    /// Snapshot before the first mutation in the batch, if any happened
    pub before: Option<TableSnapshot>,
}

impl BatchState {
    pub fn is_active(&self) -> bool {
        self.depth > 0
    }
}

/// One open document with its full editing state
#[derive(Debug, Clone)]
pub struct DocumentSession {
    pub id: SessionId,
    pub snapshot: TableSnapshot,
    /// Unsaved changes exist
    pub dirty: bool,
    /// Bumped exactly when snapshot content changes; identity for memoized
    /// derived views
    pub revision: u64,
    /// Active filter expressions, keyed by column index
    pub filters: HashMap<usize, String>,
    pub history: EditHistory,
    pub batch: BatchState,
    pub selection: Selection,
}

impl DocumentSession {
    /// Create a session around a freshly loaded snapshot, with clean history
    /// and no filters
    pub fn new(id: SessionId, snapshot: TableSnapshot) -> Self {
        Self {
            id,
            snapshot,
            dirty: false,
            revision: 0,
            filters: HashMap::new(),
            history: EditHistory::new(),
            batch: BatchState::default(),
            selection: Selection::None,
        }
    }

    /// Display title: file name, or "Untitled" for unsaved documents
    pub fn title(&self) -> String {
        self.snapshot
            .path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Untitled".to_string())
    }

    /// Mark content changed: bump revision, set dirty, re-clamp selection
    pub fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
        self.dirty = true;
        self.selection
            .clamp(self.snapshot.row_count(), self.snapshot.column_count());
    }

    /// Set or clear one column's filter. Returns true if the map changed.
    pub fn set_filter(&mut self, col: usize, expression: &str) -> bool {
        if expression.trim().is_empty() {
            self.filters.remove(&col).is_some()
        } else {
            self.filters.insert(col, expression.to_string()) != Some(expression.to_string())
        }
    }

    /// Drop all filters. Returns true if any were active.
    pub fn clear_filters(&mut self) -> bool {
        if self.filters.is_empty() {
            return false;
        }
        self.filters.clear();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn session() -> DocumentSession {
        DocumentSession::new(SessionId(1), TableSnapshot::default())
    }

    #[test]
    fn test_new_session_is_clean() {
        let s = session();
        assert!(!s.dirty);
        assert_eq!(s.revision, 0);
        assert!(s.filters.is_empty());
        assert!(!s.history.can_undo());
        assert!(!s.batch.is_active());
    }

    #[test]
    fn test_title_from_path() {
        let mut s = session();
        assert_eq!(s.title(), "Untitled");
        s.snapshot.path = Some(PathBuf::from("/data/report.csv"));
        assert_eq!(s.title(), "report.csv");
    }

    #[test]
    fn test_touch_bumps_revision_and_dirty() {
        let mut s = session();
        s.touch();
        assert!(s.dirty);
        assert_eq!(s.revision, 1);
    }

    #[test]
    fn test_set_filter_and_clear() {
        let mut s = session();
        assert!(s.set_filter(0, ">10"));
        assert!(s.set_filter(2, "foo"));
        assert_eq!(s.filters.len(), 2);

        // Re-setting the identical expression reports no change
        assert!(!s.set_filter(0, ">10"));

        // Blank expression removes the entry
        assert!(s.set_filter(0, "  "));
        assert_eq!(s.filters.len(), 1);
        assert!(!s.set_filter(0, ""));

        assert!(s.clear_filters());
        assert!(!s.clear_filters());
    }
}
