//! Filtered view projection
//!
//! Derives the visible row sequence from the full row set and the active
//! per-column filters, pairing each visible row with its original source
//! index so row numbering, selection, and navigation stay consistent under
//! filtering. A reverse map answers "where did source row N land?" for
//! scroll-to-match across a virtualized viewport.

use std::collections::HashMap;

use crate::filter::matches_filter;
use crate::infer::{infer_columns, ColumnProfile};

/// One visible row: content plus its index in the unfiltered table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredRow {
    pub cells: Vec<String>,
    pub source_index: usize,
}

/// The projection of the table under the active filters
#[derive(Debug, Clone, Default)]
pub struct FilteredView {
    pub rows: Vec<FilteredRow>,
    /// source index -> position in `rows`
    reverse: HashMap<usize, usize>,
    /// Whether any filter was active when this view was built
    pub filtered: bool,
}

impl FilteredView {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a source row within the filtered sequence, if visible
    pub fn position_of(&self, source_index: usize) -> Option<usize> {
        self.reverse.get(&source_index).copied()
    }
}

/// Project the visible rows for the given filters.
///
/// With no active filters this is the identity projection, built without
/// evaluating any predicate. Otherwise each row is kept only if it passes
/// every active column filter (AND semantics). Column profiles are inferred
/// once per projection; pass `profiles` to reuse a memoized set.
pub fn project(
    headers: &[String],
    rows: &[Vec<String>],
    filters: &HashMap<usize, String>,
    profiles: Option<&[ColumnProfile]>,
) -> FilteredView {
    let active: Vec<(&usize, &String)> = filters
        .iter()
        .filter(|(_, expr)| !expr.trim().is_empty())
        .collect();

    if active.is_empty() {
        let visible: Vec<FilteredRow> = rows
            .iter()
            .enumerate()
            .map(|(i, row)| FilteredRow {
                cells: row.clone(),
                source_index: i,
            })
            .collect();
        let reverse = visible
            .iter()
            .enumerate()
            .map(|(pos, r)| (r.source_index, pos))
            .collect();
        return FilteredView {
            rows: visible,
            reverse,
            filtered: false,
        };
    }

    let inferred;
    let profiles: &[ColumnProfile] = match profiles {
        Some(p) => p,
        None => {
            inferred = infer_columns(headers, rows);
            inferred.as_slice()
        }
    };

    let mut visible = Vec::new();
    let mut reverse = HashMap::new();
    for (i, row) in rows.iter().enumerate() {
        let passes = active.iter().all(|(col, expr)| {
            let cell = row.get(**col).map(|s| s.as_str()).unwrap_or("");
            matches_filter(cell, expr.as_str(), profiles.get(**col))
        });
        if passes {
            reverse.insert(i, visible.len());
            visible.push(FilteredRow {
                cells: row.clone(),
                source_index: i,
            });
        }
    }

    FilteredView {
        rows: visible,
        reverse,
        filtered: true,
    }
}
