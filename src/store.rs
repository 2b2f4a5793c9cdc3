//! Grid store - the single authority over document state
//!
//! Every structural or content edit flows through the store so that
//! undo/redo, dirty tracking, batching, and change notification stay
//! consistent. Commands mutate the active session's snapshot atomically and
//! notify subscribers after the commit; out-of-range or identity commands
//! are defensive no-ops, never panics.

use anyhow::Result;

use crate::grid::{Selection, TableSnapshot};
use crate::infer::{infer_columns, ColumnProfile};
use crate::io::{DocumentPayload, ProgressEvent};
use crate::session::{DocumentSession, SessionId};
use crate::view::{project, FilteredView};

/// Where a replace-all match points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchSite {
    Header { col: usize },
    Cell { row: usize, col: usize },
}

/// Notification emitted after a committed command
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    /// The named session's snapshot content changed
    Content(SessionId),
    /// Sessions were opened, closed, or the active one switched
    Sessions,
    /// Load/save progress from the host, forwarded one-way
    Progress(ProgressEvent),
}

type Subscriber = Box<dyn FnMut(&StoreEvent)>;

/// The mutation/undo-redo engine plus tab management
#[derive(Default)]
pub struct GridStore {
    sessions: Vec<DocumentSession>,
    active: Option<usize>,
    next_id: u64,
    subscribers: Vec<Subscriber>,
}

impl std::fmt::Debug for GridStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridStore")
            .field("sessions", &self.sessions)
            .field("active", &self.active)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl GridStore {
    pub fn new() -> Self {
        Self::default()
    }

    // === Subscriptions ===

    /// Register a callback invoked once per committed command
    pub fn subscribe(&mut self, callback: impl FnMut(&StoreEvent) + 'static) {
        self.subscribers.push(Box::new(callback));
    }

    fn notify(&mut self, event: StoreEvent) {
        for subscriber in &mut self.subscribers {
            subscriber(&event);
        }
    }

    /// Forward a host progress report to subscribers. Informational only.
    pub fn report_progress(&mut self, event: ProgressEvent) {
        self.notify(StoreEvent::Progress(event));
    }

    // === Session access ===

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    pub fn session_ids(&self) -> Vec<SessionId> {
        self.sessions.iter().map(|s| s.id).collect()
    }

    pub fn active_session(&self) -> Option<&DocumentSession> {
        self.active.and_then(|i| self.sessions.get(i))
    }

    pub fn active_session_mut(&mut self) -> Option<&mut DocumentSession> {
        self.active.and_then(|i| self.sessions.get_mut(i))
    }

    pub fn active_id(&self) -> Option<SessionId> {
        self.active_session().map(|s| s.id)
    }

    pub fn session(&self, id: SessionId) -> Option<&DocumentSession> {
        self.sessions.iter().find(|s| s.id == id)
    }

    // === Session lifecycle ===

    /// Accept a loaded document as a new session and make it active.
    /// History and filters start clean; a validation failure leaves the
    /// store untouched.
    pub fn open_document(&mut self, payload: DocumentPayload) -> Result<SessionId> {
        let snapshot = payload.into_snapshot()?;
        Ok(self.install_session(snapshot))
    }

    /// Create a fresh untitled document with one column and one empty row
    pub fn new_document(&mut self) -> SessionId {
        let mut snapshot = TableSnapshot {
            headers: vec!["Column 1".to_string()],
            ..Default::default()
        };
        snapshot.rows.push(vec![String::new()]);
        self.install_session(snapshot)
    }

    fn install_session(&mut self, snapshot: TableSnapshot) -> SessionId {
        self.next_id += 1;
        let id = SessionId(self.next_id);
        self.sessions.push(DocumentSession::new(id, snapshot));
        self.active = Some(self.sessions.len() - 1);
        self.notify(StoreEvent::Sessions);
        id
    }

    /// Replace the active session's document in place (re-load). All-or-
    /// nothing: validation failure leaves the session as it was.
    pub fn replace_document(&mut self, payload: DocumentPayload) -> Result<()> {
        let snapshot = payload.into_snapshot()?;
        let Some(session) = self.active_session_mut() else {
            anyhow::bail!("no active session");
        };
        let id = session.id;
        *session = DocumentSession::new(id, snapshot);
        self.notify(StoreEvent::Content(id));
        Ok(())
    }

    /// Switch the active tab. Unknown ids are a no-op returning false.
    pub fn switch_session(&mut self, id: SessionId) -> bool {
        match self.sessions.iter().position(|s| s.id == id) {
            Some(index) => {
                if self.active != Some(index) {
                    self.active = Some(index);
                    self.notify(StoreEvent::Sessions);
                }
                true
            }
            None => {
                tracing::warn!(?id, "switch to unknown session ignored");
                false
            }
        }
    }

    /// Close a tab. Closing the active tab promotes the session now at the
    /// same index, else the last one; closing the only tab leaves the store
    /// with no document.
    pub fn close_session(&mut self, id: SessionId) -> bool {
        let Some(index) = self.sessions.iter().position(|s| s.id == id) else {
            tracing::warn!(?id, "close of unknown session ignored");
            return false;
        };
        self.sessions.remove(index);

        self.active = match self.active {
            Some(active) if active == index => {
                if self.sessions.is_empty() {
                    None
                } else {
                    Some(index.min(self.sessions.len() - 1))
                }
            }
            Some(active) if active > index => Some(active - 1),
            other => other,
        };
        self.notify(StoreEvent::Sessions);
        true
    }

    // === Mutation commands ===

    /// Shared command path: run `apply` on a copy-owner basis, record history
    /// (or fold into an open batch), bump revision, notify. `apply` returns
    /// false for no-ops, which leave history and revision untouched.
    fn mutate(
        &mut self,
        label: &str,
        coalesce_key: Option<String>,
        apply: impl FnOnce(&mut TableSnapshot) -> bool,
    ) -> bool {
        let Some(session) = self.active_session_mut() else {
            return false;
        };
        let before = session.snapshot.clone();
        if !apply(&mut session.snapshot) {
            return false;
        }

        if session.batch.is_active() {
            // The pre-batch snapshot is captured exactly once
            if session.batch.before.is_none() {
                session.batch.before = Some(before);
            }
        } else {
            session.history.record(before, label, coalesce_key);
        }
        session.touch();
        let id = session.id;
        self.notify(StoreEvent::Content(id));
        true
    }

    /// Edit a cell. Identity writes and out-of-range targets are no-ops.
    /// Rapid edits to the same cell coalesce into one undo step.
    pub fn edit_cell(&mut self, row: usize, col: usize, value: &str) -> bool {
        let key = format!("cell:{}:{}", row, col);
        self.mutate("Edit Cell", Some(key), |snapshot| {
            if row >= snapshot.row_count() || col >= snapshot.column_count() {
                return false;
            }
            if snapshot.get(row, col) == value {
                return false;
            }
            snapshot.set(row, col, value.to_string());
            true
        })
    }

    /// Edit a header. Same no-op and coalescing rules as `edit_cell`.
    pub fn edit_header(&mut self, col: usize, value: &str) -> bool {
        let key = format!("header:{}", col);
        self.mutate("Edit Header", Some(key), |snapshot| {
            if col >= snapshot.column_count() {
                return false;
            }
            if snapshot.header(col) == value {
                return false;
            }
            snapshot.set_header(col, value.to_string());
            true
        })
    }

    /// Append an empty row
    pub fn add_row(&mut self) -> bool {
        self.mutate("Add Row", None, |snapshot| {
            snapshot.insert_row(snapshot.row_count());
            true
        })
    }

    /// Insert an empty row at `index` (clamped)
    pub fn insert_row_at(&mut self, index: usize) -> bool {
        self.mutate("Insert Row", None, |snapshot| {
            snapshot.insert_row(index);
            true
        })
    }

    /// Append a column, auto-named `Column N`
    pub fn add_column(&mut self) -> bool {
        self.mutate("Add Column", None, |snapshot| {
            snapshot.insert_column(snapshot.column_count());
            true
        })
    }

    /// Insert a column at `index` (clamped)
    pub fn insert_column_at(&mut self, index: usize) -> bool {
        self.mutate("Insert Column", None, |snapshot| {
            snapshot.insert_column(index);
            true
        })
    }

    /// Remove a row. Out-of-range is a no-op.
    pub fn remove_row(&mut self, index: usize) -> bool {
        self.mutate("Remove Row", None, |snapshot| {
            if index >= snapshot.row_count() {
                return false;
            }
            snapshot.remove_row(index);
            true
        })
    }

    /// Remove a column from the header and every row
    pub fn remove_column(&mut self, index: usize) -> bool {
        self.mutate("Remove Column", None, |snapshot| {
            if index >= snapshot.column_count() {
                return false;
            }
            snapshot.remove_column(index);
            true
        })
    }

    /// Relocate the inclusive row range `[from_start, from_end]` to start at
    /// `to_index`. Destinations inside the range (or just past it) are
    /// no-ops.
    pub fn move_rows(&mut self, from_start: usize, from_end: usize, to_index: usize) -> bool {
        self.mutate("Move Rows", None, |snapshot| {
            snapshot.move_rows(from_start, from_end, to_index)
        })
    }

    /// Relocate a column range, headers and row data in lockstep
    pub fn move_columns(&mut self, from_start: usize, from_end: usize, to_index: usize) -> bool {
        self.mutate("Move Columns", None, |snapshot| {
            snapshot.move_columns(from_start, from_end, to_index)
        })
    }

    /// Replace every occurrence of `search` (case-insensitive) with
    /// `replacement` in the given match sites. One history entry for the
    /// whole operation; an empty match list is a true no-op.
    pub fn replace_all(&mut self, matches: &[MatchSite], search: &str, replacement: &str) -> bool {
        if matches.is_empty() || search.is_empty() {
            return false;
        }
        self.mutate("Replace All", None, |snapshot| {
            let mut changed = false;
            for site in matches {
                let target = match *site {
                    MatchSite::Header { col } => snapshot.headers.get_mut(col),
                    MatchSite::Cell { row, col } => {
                        snapshot.rows.get_mut(row).and_then(|r| r.get_mut(col))
                    }
                };
                if let Some(cell) = target {
                    let replaced = replace_case_insensitive(cell, search, replacement);
                    if replaced != *cell {
                        *cell = replaced;
                        changed = true;
                    }
                }
            }
            changed
        })
    }

    // === Undo / redo ===

    /// Restore the previous snapshot. No-op on an empty stack.
    pub fn undo(&mut self) -> bool {
        let Some(session) = self.active_session_mut() else {
            return false;
        };
        let current = session.snapshot.clone();
        let Some(restored) = session.history.undo(current) else {
            return false;
        };
        session.snapshot = restored;
        session.touch();
        let id = session.id;
        self.notify(StoreEvent::Content(id));
        true
    }

    /// Re-apply the last undone snapshot. No-op on an empty stack.
    pub fn redo(&mut self) -> bool {
        let Some(session) = self.active_session_mut() else {
            return false;
        };
        let current = session.snapshot.clone();
        let Some(restored) = session.history.redo(current) else {
            return false;
        };
        session.snapshot = restored;
        session.touch();
        let id = session.id;
        self.notify(StoreEvent::Content(id));
        true
    }

    pub fn can_undo(&self) -> bool {
        self.active_session().is_some_and(|s| s.history.can_undo())
    }

    pub fn can_redo(&self) -> bool {
        self.active_session().is_some_and(|s| s.history.can_redo())
    }

    // === Batch transactions ===

    /// Open a (nestable) batch. Mutations until the matching commit fold
    /// into a single undo entry carrying the outermost label.
    pub fn begin_batch(&mut self, label: &str) {
        let Some(session) = self.active_session_mut() else {
            return;
        };
        if session.batch.depth == 0 {
            session.batch.label = label.to_string();
            session.batch.before = None;
        }
        session.batch.depth += 1;
    }

    /// Close one batch level. The undo entry is pushed only when the
    /// outermost batch commits and something actually mutated. Commit
    /// without a matching begin is ignored.
    pub fn commit_batch(&mut self) {
        let Some(session) = self.active_session_mut() else {
            return;
        };
        if session.batch.depth == 0 {
            tracing::warn!("commit_batch without begin_batch ignored");
            return;
        }
        session.batch.depth -= 1;
        if session.batch.depth > 0 {
            return;
        }
        let label = std::mem::take(&mut session.batch.label);
        if let Some(before) = session.batch.before.take() {
            session.history.push_entry(before, &label);
        }
    }

    // === Filters and derived views ===

    /// Set or clear one column's filter expression. Not a history entry.
    pub fn set_filter(&mut self, col: usize, expression: &str) -> bool {
        let Some(session) = self.active_session_mut() else {
            return false;
        };
        if !session.set_filter(col, expression) {
            return false;
        }
        let id = session.id;
        self.notify(StoreEvent::Content(id));
        true
    }

    /// Drop all filters on the active session
    pub fn clear_filters(&mut self) -> bool {
        let Some(session) = self.active_session_mut() else {
            return false;
        };
        if !session.clear_filters() {
            return false;
        }
        let id = session.id;
        self.notify(StoreEvent::Content(id));
        true
    }

    /// Column type profiles for the active session's current rows
    pub fn column_profiles(&self) -> Option<Vec<ColumnProfile>> {
        let session = self.active_session()?;
        Some(infer_columns(
            &session.snapshot.headers,
            &session.snapshot.rows,
        ))
    }

    /// The rows visible under the active filters, with source indices
    pub fn filtered_view(&self) -> Option<FilteredView> {
        let session = self.active_session()?;
        Some(project(
            &session.snapshot.headers,
            &session.snapshot.rows,
            &session.filters,
            None,
        ))
    }

    // === Save boundary ===

    /// Full-document payload for a save operation
    pub fn save_payload(&self) -> Option<DocumentPayload> {
        self.active_session()
            .map(|s| DocumentPayload::from_snapshot(&s.snapshot))
    }

    /// Payload containing only the rows passing the active filters. Does not
    /// mutate the underlying row set.
    pub fn filtered_payload(&self) -> Option<DocumentPayload> {
        let session = self.active_session()?;
        let view = self.filtered_view()?;
        let mut payload = DocumentPayload::from_snapshot(&session.snapshot);
        payload.rows = view.rows.into_iter().map(|r| r.cells).collect();
        Some(payload)
    }

    /// Record a completed save: clears the dirty flag and adopts the path
    /// the host wrote to, if any
    pub fn mark_saved(&mut self, path: Option<std::path::PathBuf>) {
        let Some(session) = self.active_session_mut() else {
            return;
        };
        session.dirty = false;
        if let Some(path) = path {
            session.snapshot.path = Some(path);
        }
        let id = session.id;
        self.notify(StoreEvent::Content(id));
    }

    // === Selection ===

    /// Replace the active session's selection
    pub fn set_selection(&mut self, selection: Selection) {
        if let Some(session) = self.active_session_mut() {
            session.selection = selection;
            session
                .selection
                .clamp(session.snapshot.row_count(), session.snapshot.column_count());
        }
    }
}

/// Replace all case-insensitive occurrences of `search` in `haystack`.
/// Plain substring semantics; the search term is taken literally.
fn replace_case_insensitive(haystack: &str, search: &str, replacement: &str) -> String {
    if search.is_empty() {
        return haystack.to_string();
    }
    let lower_haystack = haystack.to_lowercase();
    let lower_search = search.to_lowercase();
    let mut result = String::with_capacity(haystack.len());
    let mut cursor = 0;
    while let Some(found) = lower_haystack[cursor..].find(&lower_search) {
        let start = cursor + found;
        // Lowercasing can change byte lengths for some scripts; fall back to
        // the remainder untouched if the indices no longer line up.
        if !haystack.is_char_boundary(start) || lower_haystack.len() != haystack.len() {
            break;
        }
        let end = start + lower_search.len();
        if !haystack.is_char_boundary(end) {
            break;
        }
        result.push_str(&haystack[cursor..start]);
        result.push_str(replacement);
        cursor = end;
    }
    result.push_str(&haystack[cursor..]);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn store_with_table() -> GridStore {
        let mut store = GridStore::new();
        store
            .open_document(DocumentPayload {
                headers: vec!["name".into(), "score".into()],
                rows: vec![
                    vec!["alice".into(), "5".into()],
                    vec!["bob".into(), "10".into()],
                ],
                ..Default::default()
            })
            .unwrap();
        store
    }

    #[test]
    fn test_edit_cell_records_history_and_dirty() {
        let mut store = store_with_table();
        assert!(store.edit_cell(0, 1, "7"));
        let session = store.active_session().unwrap();
        assert_eq!(session.snapshot.get(0, 1), "7");
        assert!(session.dirty);
        assert_eq!(session.revision, 1);
        assert!(store.can_undo());
    }

    #[test]
    fn test_identity_edit_is_noop() {
        let mut store = store_with_table();
        assert!(!store.edit_cell(0, 0, "alice"));
        assert!(!store.can_undo());
        assert_eq!(store.active_session().unwrap().revision, 0);
    }

    #[test]
    fn test_out_of_range_edit_is_noop() {
        let mut store = store_with_table();
        assert!(!store.edit_cell(9, 0, "x"));
        assert!(!store.edit_cell(0, 9, "x"));
        assert!(!store.can_undo());
    }

    #[test]
    fn test_undo_restores_previous_snapshot() {
        let mut store = store_with_table();
        store.edit_header(0, "person");
        assert!(store.undo());
        assert_eq!(store.active_session().unwrap().snapshot.header(0), "name");
        assert!(store.can_redo());
        assert!(store.redo());
        assert_eq!(store.active_session().unwrap().snapshot.header(0), "person");
    }

    #[test]
    fn test_undo_empty_stack_is_noop() {
        let mut store = store_with_table();
        assert!(!store.undo());
        assert!(!store.redo());
    }

    #[test]
    fn test_add_and_remove_row_column() {
        let mut store = store_with_table();
        store.add_row();
        store.add_column();
        {
            let snap = &store.active_session().unwrap().snapshot;
            assert_eq!(snap.row_count(), 3);
            assert_eq!(snap.headers, vec!["name", "score", "Column 3"]);
            assert_eq!(snap.rows[2], vec!["", "", ""]);
        }
        store.remove_column(2);
        store.remove_row(2);
        let snap = &store.active_session().unwrap().snapshot;
        assert_eq!(snap.row_count(), 2);
        assert_eq!(snap.column_count(), 2);
    }

    #[test]
    fn test_replace_all_single_entry() {
        let mut store = store_with_table();
        let matches = [
            MatchSite::Cell { row: 0, col: 0 },
            MatchSite::Cell { row: 1, col: 0 },
            MatchSite::Header { col: 0 },
        ];
        assert!(store.replace_all(&matches, "B", "x"));
        let session = store.active_session().unwrap();
        // Case-insensitive: both b's in "bob" match the uppercase search
        assert_eq!(session.snapshot.get(1, 0), "xox");
        assert_eq!(session.snapshot.get(0, 0), "alice");
        assert_eq!(session.history.undo_count(), 1);
        assert_eq!(session.history.undo_label(), Some("Replace All"));
    }

    #[test]
    fn test_replace_all_empty_matches_is_noop() {
        let mut store = store_with_table();
        assert!(!store.replace_all(&[], "a", "b"));
        assert!(!store.can_undo());
    }

    #[test]
    fn test_batch_collapses_to_one_entry() {
        let mut store = store_with_table();
        store.begin_batch("Fill Down");
        store.edit_cell(0, 0, "x");
        store.edit_cell(1, 0, "x");
        store.add_row();
        store.commit_batch();

        let session = store.active_session().unwrap();
        assert_eq!(session.history.undo_count(), 1);
        assert_eq!(session.history.undo_label(), Some("Fill Down"));

        assert!(store.undo());
        let snap = &store.active_session().unwrap().snapshot;
        assert_eq!(snap.get(0, 0), "alice");
        assert_eq!(snap.get(1, 0), "bob");
        assert_eq!(snap.row_count(), 2);
    }

    #[test]
    fn test_nested_batch_commits_once() {
        let mut store = store_with_table();
        store.begin_batch("Outer");
        store.edit_cell(0, 0, "x");
        store.begin_batch("Inner");
        store.edit_cell(1, 0, "y");
        store.commit_batch();
        // Still open: nothing on the stack yet
        assert_eq!(store.active_session().unwrap().history.undo_count(), 0);
        store.commit_batch();
        let session = store.active_session().unwrap();
        assert_eq!(session.history.undo_count(), 1);
        assert_eq!(session.history.undo_label(), Some("Outer"));
    }

    #[test]
    fn test_empty_batch_commit_is_noop() {
        let mut store = store_with_table();
        store.begin_batch("Nothing");
        store.commit_batch();
        assert!(!store.can_undo());
        // Unbalanced commit never goes negative
        store.commit_batch();
        store.edit_cell(0, 0, "x");
        assert_eq!(store.active_session().unwrap().history.undo_count(), 1);
    }

    #[test]
    fn test_sessions_switch_and_close() {
        let mut store = store_with_table();
        let first = store.active_id().unwrap();
        let second = store.new_document();
        assert_eq!(store.active_id(), Some(second));

        assert!(store.switch_session(first));
        assert_eq!(store.active_id(), Some(first));
        assert!(!store.switch_session(SessionId(999)));
        assert_eq!(store.active_id(), Some(first));

        // Closing the active first tab promotes the session at the same index
        assert!(store.close_session(first));
        assert_eq!(store.active_id(), Some(second));

        assert!(store.close_session(second));
        assert_eq!(store.session_count(), 0);
        assert!(store.active_id().is_none());
        // Mutations with no document are no-ops
        assert!(!store.edit_cell(0, 0, "x"));
    }

    #[test]
    fn test_close_inactive_session_keeps_active() {
        let mut store = store_with_table();
        let first = store.active_id().unwrap();
        let second = store.new_document();
        let third = store.new_document();
        store.switch_session(third);

        assert!(store.close_session(first));
        assert_eq!(store.active_id(), Some(third));
        assert!(store.close_session(third));
        // Active index past the end falls back to the last session
        assert_eq!(store.active_id(), Some(second));
    }

    #[test]
    fn test_sessions_keep_independent_history_and_filters() {
        let mut store = store_with_table();
        let first = store.active_id().unwrap();
        store.edit_cell(0, 0, "changed");
        store.set_filter(1, ">=10");

        let second = store.new_document();
        assert!(!store.can_undo());
        assert!(store.active_session().unwrap().filters.is_empty());

        store.switch_session(first);
        assert!(store.can_undo());
        assert_eq!(store.active_session().unwrap().filters.len(), 1);
        let _ = second;
    }

    #[test]
    fn test_subscriber_notified_after_commit() {
        let mut store = store_with_table();
        let events: Rc<RefCell<Vec<StoreEvent>>> = Rc::default();
        let sink = events.clone();
        store.subscribe(move |e| sink.borrow_mut().push(e.clone()));

        store.edit_cell(0, 0, "x");
        // No-ops do not notify
        store.edit_cell(0, 0, "x");
        store.new_document();

        let seen = events.borrow();
        assert_eq!(seen.len(), 2);
        assert!(matches!(seen[0], StoreEvent::Content(_)));
        assert_eq!(seen[1], StoreEvent::Sessions);
    }

    #[test]
    fn test_filtered_payload_leaves_rows_intact() {
        let mut store = store_with_table();
        store.set_filter(1, ">=10");
        let payload = store.filtered_payload().unwrap();
        assert_eq!(payload.rows.len(), 1);
        assert_eq!(payload.rows[0][0], "bob");
        // Underlying table unchanged
        assert_eq!(store.active_session().unwrap().snapshot.row_count(), 2);
    }

    #[test]
    fn test_mark_saved_clears_dirty_and_adopts_path() {
        let mut store = store_with_table();
        store.edit_cell(0, 0, "x");
        assert!(store.active_session().unwrap().dirty);
        store.mark_saved(Some("out.csv".into()));
        let session = store.active_session().unwrap();
        assert!(!session.dirty);
        assert_eq!(session.snapshot.path.as_deref(), Some("out.csv".as_ref()));
    }

    #[test]
    fn test_replace_case_insensitive() {
        assert_eq!(replace_case_insensitive("Hello World", "WORLD", "rust"), "Hello rust");
        assert_eq!(replace_case_insensitive("aAaA", "a", "-"), "----");
        assert_eq!(replace_case_insensitive("abc", "z", "-"), "abc");
        assert_eq!(replace_case_insensitive("c.a+t", ".a+", "_"), "c_t");
    }

    #[test]
    fn test_replace_document_resets_state() {
        let mut store = store_with_table();
        let id = store.active_id().unwrap();
        store.edit_cell(0, 0, "x");
        store.set_filter(0, "a");

        store
            .replace_document(DocumentPayload {
                headers: vec!["only".into()],
                rows: vec![vec!["1".into()]],
                ..Default::default()
            })
            .unwrap();

        let session = store.active_session().unwrap();
        assert_eq!(session.id, id);
        assert_eq!(session.snapshot.headers, vec!["only"]);
        assert!(!session.dirty);
        assert!(session.filters.is_empty());
        assert!(!session.history.can_undo());
    }
}
