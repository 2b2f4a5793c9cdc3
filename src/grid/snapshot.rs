//! Table snapshot value type
//!
//! A snapshot is a complete, self-contained value of the table at one point
//! in time: headers, rows, and formatting metadata. Mutation commands in the
//! store clone the snapshot before changing it, so history entries can hold
//! whole snapshots cheaply enough for interactive editing.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Supported field delimiters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
    Semicolon,
}

impl Delimiter {
    /// Get the character for this delimiter
    pub fn char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Pipe => '|',
            Delimiter::Semicolon => ';',
        }
    }

    /// Detect delimiter from file extension
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "tsv" => Delimiter::Tab,
            "psv" => Delimiter::Pipe,
            _ => Delimiter::Comma,
        }
    }
}

/// Line ending kind, carried through load and save unchanged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Newline {
    #[default]
    Lf,
    CrLf,
}

impl Newline {
    pub fn as_str(self) -> &'static str {
        match self {
            Newline::Lf => "\n",
            Newline::CrLf => "\r\n",
        }
    }
}

/// Position of a cell in the grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellPosition {
    pub row: usize,
    pub col: usize,
}

impl CellPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// The complete table state at one point in time
///
/// Invariant: every row has exactly `headers.len()` cells. Mutation methods
/// maintain this by padding or truncating as needed; `normalize` repairs a
/// freshly loaded table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableSnapshot {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub delimiter: Delimiter,
    pub newline: Newline,
    pub path: Option<PathBuf>,
}

impl TableSnapshot {
    /// Create an empty snapshot (no document loaded)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }

    /// Get cell value, or "" when out of range
    pub fn get(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(|s| s.as_str())
            .unwrap_or("")
    }

    /// Get header value, or "" when out of range
    pub fn header(&self, col: usize) -> &str {
        self.headers.get(col).map(|s| s.as_str()).unwrap_or("")
    }

    /// Pad or truncate every row to the header count
    pub fn normalize(&mut self) {
        let width = self.headers.len();
        for row in &mut self.rows {
            row.resize(width, String::new());
        }
    }

    /// Set a cell value. Out-of-range targets are ignored.
    pub fn set(&mut self, row: usize, col: usize, value: String) {
        if let Some(cell) = self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = value;
        }
    }

    /// Set a header value. Out-of-range targets are ignored.
    pub fn set_header(&mut self, col: usize, value: String) {
        if let Some(h) = self.headers.get_mut(col) {
            *h = value;
        }
    }

    /// Insert an empty row at `index` (clamped to the row count)
    pub fn insert_row(&mut self, index: usize) {
        let index = index.min(self.rows.len());
        self.rows.insert(index, vec![String::new(); self.headers.len()]);
    }

    /// Remove the row at `index`. Out-of-range is a no-op.
    pub fn remove_row(&mut self, index: usize) {
        if index < self.rows.len() {
            self.rows.remove(index);
        }
    }

    /// Insert a column at `index` (clamped), auto-named `Column N` where N is
    /// the new total column count
    pub fn insert_column(&mut self, index: usize) {
        let index = index.min(self.headers.len());
        let name = format!("Column {}", self.headers.len() + 1);
        self.headers.insert(index, name);
        for row in &mut self.rows {
            // Rows shorter than the header count can exist transiently on load
            let at = index.min(row.len());
            row.insert(at, String::new());
        }
    }

    /// Remove the column at `index` from the header and every row
    pub fn remove_column(&mut self, index: usize) {
        if index >= self.headers.len() {
            return;
        }
        self.headers.remove(index);
        for row in &mut self.rows {
            if index < row.len() {
                row.remove(index);
            }
        }
    }

    /// Relocate the inclusive row range `[from_start, from_end]` so it starts
    /// at `to_index`. Returns false when the move is a no-op (invalid range,
    /// or destination inside the no-move zone `[from_start, from_end + 1]`).
    pub fn move_rows(&mut self, from_start: usize, from_end: usize, to_index: usize) -> bool {
        move_range(&mut self.rows, from_start, from_end, to_index)
    }

    /// Relocate a contiguous column range, applied to the headers and every
    /// row in lockstep so header/data pairing is preserved.
    pub fn move_columns(&mut self, from_start: usize, from_end: usize, to_index: usize) -> bool {
        if !valid_move(self.headers.len(), from_start, from_end, to_index) {
            return false;
        }
        move_range(&mut self.headers, from_start, from_end, to_index);
        for row in &mut self.rows {
            move_range(row, from_start, from_end, to_index);
        }
        true
    }
}

fn valid_move(len: usize, from_start: usize, from_end: usize, to_index: usize) -> bool {
    if from_start > from_end || from_end >= len || to_index > len {
        return false;
    }
    // Destination inside the removed range (or immediately after it) puts the
    // range back where it came from.
    !(to_index >= from_start && to_index <= from_end + 1)
}

/// Move the inclusive range `[from_start, from_end]` of `items` so it starts
/// at `to_index` (an index into the pre-removal sequence).
fn move_range<T>(items: &mut Vec<T>, from_start: usize, from_end: usize, to_index: usize) -> bool {
    if !valid_move(items.len(), from_start, from_end, to_index) {
        return false;
    }
    let count = from_end - from_start + 1;
    let moved: Vec<T> = items.drain(from_start..=from_end).collect();
    // Removing the range first shifts everything after it left by `count`
    let insert_at = if to_index > from_start {
        to_index - count
    } else {
        to_index
    };
    for (i, item) in moved.into_iter().enumerate() {
        items.insert(insert_at + i, item);
    }
    true
}
