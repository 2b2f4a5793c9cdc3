//! Grid selection types
//!
//! Selection is a tagged variant: nothing selected, a rectangular cell range
//! (anchor stays fixed while focus moves), or a contiguous header range.
//! Consumers match exhaustively rather than probing optional fields.

use super::snapshot::CellPosition;

/// Current grid selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    /// Rectangular cell range between anchor (fixed) and focus (moving)
    Cells {
        anchor: CellPosition,
        focus: CellPosition,
    },
    /// Contiguous run of header columns, inclusive
    Headers { start: usize, end: usize },
}

impl Selection {
    /// Single-cell selection
    pub fn cell(row: usize, col: usize) -> Self {
        let pos = CellPosition::new(row, col);
        Selection::Cells {
            anchor: pos,
            focus: pos,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Selection::None)
    }

    /// Normalized cell bounds as ((top, left), (bottom, right)), if cells are
    /// selected
    pub fn cell_bounds(&self) -> Option<(CellPosition, CellPosition)> {
        match *self {
            Selection::Cells { anchor, focus } => {
                let top = anchor.row.min(focus.row);
                let bottom = anchor.row.max(focus.row);
                let left = anchor.col.min(focus.col);
                let right = anchor.col.max(focus.col);
                Some((
                    CellPosition::new(top, left),
                    CellPosition::new(bottom, right),
                ))
            }
            _ => None,
        }
    }

    /// Normalized header range as (start, end) inclusive, if headers are
    /// selected
    pub fn header_bounds(&self) -> Option<(usize, usize)> {
        match *self {
            Selection::Headers { start, end } => Some((start.min(end), start.max(end))),
            _ => None,
        }
    }

    /// Check if a cell falls inside the selection
    pub fn contains_cell(&self, row: usize, col: usize) -> bool {
        match self.cell_bounds() {
            Some((top_left, bottom_right)) => {
                row >= top_left.row
                    && row <= bottom_right.row
                    && col >= top_left.col
                    && col <= bottom_right.col
            }
            None => false,
        }
    }

    /// Extend the selection to a new focus point, keeping the anchor
    pub fn extend_to(&mut self, row: usize, col: usize) {
        match self {
            Selection::Cells { focus, .. } => *focus = CellPosition::new(row, col),
            Selection::Headers { end, .. } => *end = col,
            Selection::None => *self = Selection::cell(row, col),
        }
    }

    /// Clamp the selection to the given table dimensions, dropping it when
    /// the table is empty
    pub fn clamp(&mut self, row_count: usize, col_count: usize) {
        if row_count == 0 || col_count == 0 {
            *self = Selection::None;
            return;
        }
        let max_row = row_count - 1;
        let max_col = col_count - 1;
        match self {
            Selection::None => {}
            Selection::Cells { anchor, focus } => {
                anchor.row = anchor.row.min(max_row);
                anchor.col = anchor.col.min(max_col);
                focus.row = focus.row.min(max_row);
                focus.col = focus.col.min(max_col);
            }
            Selection::Headers { start, end } => {
                *start = (*start).min(max_col);
                *end = (*end).min(max_col);
            }
        }
    }
}
