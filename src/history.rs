//! Edit history (undo/redo) for grid mutations.
//!
//! Each entry captures the whole snapshot as it was immediately before a
//! mutation, so undo is a straight snapshot swap. Rapid edits to the same
//! target (same coalescing key, within a sliding time window) collapse into
//! one entry whose stored snapshot predates the whole burst.

use std::time::{Duration, Instant};

use crate::grid::TableSnapshot;

/// Rapid same-target edits inside this window merge into one undo step
pub const COALESCE_WINDOW: Duration = Duration::from_millis(2000);

/// Maximum entries per stack; the oldest entry is dropped beyond this
pub const MAX_HISTORY: usize = 50;

/// A restorable point in the edit history
#[derive(Debug, Clone)]
pub struct UndoEntry {
    /// Snapshot as it was before the mutation this entry records
    pub snapshot: TableSnapshot,
    /// Human-readable label ("Edit Cell", "Move Rows", ...)
    pub label: String,
    /// Last time this entry absorbed a coalesced edit
    pub timestamp: Instant,
    /// Identifies the mutation target for coalescing (e.g. `cell:3:1`)
    pub coalesce_key: Option<String>,
}

/// Undo/redo stacks with coalescing and a size cap.
#[derive(Debug, Clone, Default)]
pub struct EditHistory {
    undo_stack: Vec<UndoEntry>,
    redo_stack: Vec<UndoEntry>,
}

impl EditHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a mutation about to happen. `before` is the snapshot prior to
    /// the change. Clears the redo stack either way.
    pub fn record(&mut self, before: TableSnapshot, label: &str, coalesce_key: Option<String>) {
        self.record_at(before, label, coalesce_key, Instant::now());
    }

    /// Record with an explicit clock, so tests can drive the window.
    pub fn record_at(
        &mut self,
        before: TableSnapshot,
        label: &str,
        coalesce_key: Option<String>,
        now: Instant,
    ) {
        self.redo_stack.clear();

        if let (Some(key), Some(top)) = (&coalesce_key, self.undo_stack.last_mut()) {
            let within_window = now.duration_since(top.timestamp) <= COALESCE_WINDOW;
            if top.coalesce_key.as_deref() == Some(key.as_str()) && within_window {
                // Sliding window: the burst keeps one entry whose snapshot
                // predates the first edit, only the timestamp refreshes.
                top.timestamp = now;
                return;
            }
        }

        self.undo_stack.push(UndoEntry {
            snapshot: before,
            label: label.to_string(),
            timestamp: now,
            coalesce_key,
        });

        while self.undo_stack.len() > MAX_HISTORY {
            self.undo_stack.remove(0);
        }
    }

    /// Push an entry directly, bypassing coalescing (batch commits).
    pub fn push_entry(&mut self, before: TableSnapshot, label: &str) {
        self.redo_stack.clear();
        self.undo_stack.push(UndoEntry {
            snapshot: before,
            label: label.to_string(),
            timestamp: Instant::now(),
            coalesce_key: None,
        });
        while self.undo_stack.len() > MAX_HISTORY {
            self.undo_stack.remove(0);
        }
    }

    /// Undo: swap `current` with the most recent undo entry. Returns the
    /// snapshot to restore, or None when the stack is empty.
    pub fn undo(&mut self, current: TableSnapshot) -> Option<TableSnapshot> {
        let entry = self.undo_stack.pop()?;
        self.redo_stack.push(UndoEntry {
            snapshot: current,
            label: entry.label.clone(),
            timestamp: entry.timestamp,
            coalesce_key: None,
        });
        while self.redo_stack.len() > MAX_HISTORY {
            self.redo_stack.remove(0);
        }
        Some(entry.snapshot)
    }

    /// Redo: symmetric swap back from the redo stack.
    pub fn redo(&mut self, current: TableSnapshot) -> Option<TableSnapshot> {
        let entry = self.redo_stack.pop()?;
        self.undo_stack.push(UndoEntry {
            snapshot: current,
            label: entry.label.clone(),
            timestamp: entry.timestamp,
            coalesce_key: None,
        });
        while self.undo_stack.len() > MAX_HISTORY {
            self.undo_stack.remove(0);
        }
        Some(entry.snapshot)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Label of the next undo step, for menu display
    pub fn undo_label(&self) -> Option<&str> {
        self.undo_stack.last().map(|e| e.label.as_str())
    }

    /// Label of the next redo step
    pub fn redo_label(&self) -> Option<&str> {
        self.redo_stack.last().map(|e| e.label.as_str())
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
