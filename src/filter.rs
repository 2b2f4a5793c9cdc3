//! Typed filter predicate evaluation
//!
//! Decides whether one cell satisfies a user-entered filter expression,
//! given the column's inferred type. Numeric and date columns get a small
//! query grammar (ranges, comparators, keywords); everything else is
//! case-insensitive containment.
//!
//! Fallback policy, preserved exactly from the original behavior: a query
//! that cannot be interpreted in the typed grammar degrades to containment,
//! but a *cell* that cannot be parsed as the column's type is simply false —
//! it never falls back to containment.

use chrono::NaiveDateTime;

use crate::infer::{parse_date, parse_number, ColumnProfile, ColumnType};

/// Comparison operators shared by the numeric and date grammars
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CmpOp {
    Gt,
    Ge,
    Lt,
    Le,
    Eq,
}

impl CmpOp {
    fn apply<T: PartialOrd>(self, lhs: T, rhs: T) -> bool {
        match self {
            CmpOp::Gt => lhs > rhs,
            CmpOp::Ge => lhs >= rhs,
            CmpOp::Lt => lhs < rhs,
            CmpOp::Le => lhs <= rhs,
            CmpOp::Eq => lhs == rhs,
        }
    }
}

/// A numeric filter query, parsed from the expression string
#[derive(Debug, Clone, Copy, PartialEq)]
enum NumericQuery {
    /// `A..B`, inclusive on both ends
    Range(f64, f64),
    Cmp(CmpOp, f64),
    Exact(f64),
}

/// A date filter query
#[derive(Debug, Clone, Copy, PartialEq)]
enum DateQuery {
    Range(NaiveDateTime, NaiveDateTime),
    Cmp(CmpOp, NaiveDateTime),
    Exact(NaiveDateTime),
}

/// Evaluate a filter expression against one cell.
///
/// An empty expression always matches. Columns without a profile, or whose
/// profile is not numeric or date, use containment.
pub fn matches_filter(cell: &str, expression: &str, profile: Option<&ColumnProfile>) -> bool {
    let query = expression.trim();
    if query.is_empty() {
        return true;
    }

    match profile.map(|p| p.column_type) {
        Some(ColumnType::Number) => numeric_matches(cell, query),
        Some(ColumnType::Date) => date_matches(cell, query),
        _ => contains(cell, query),
    }
}

/// Case-insensitive substring containment
fn contains(cell: &str, query: &str) -> bool {
    cell.to_lowercase().contains(&query.to_lowercase())
}

fn numeric_matches(cell: &str, query: &str) -> bool {
    match parse_numeric_query(query) {
        Some(parsed) => {
            // Typed query: a cell that is not a number never matches
            let Some(value) = parse_number(cell) else {
                return false;
            };
            match parsed {
                NumericQuery::Range(lo, hi) => value >= lo && value <= hi,
                NumericQuery::Cmp(op, rhs) => op.apply(value, rhs),
                NumericQuery::Exact(rhs) => value == rhs,
            }
        }
        None => contains(cell, query),
    }
}

fn date_matches(cell: &str, query: &str) -> bool {
    match parse_date_query(query) {
        Some(parsed) => {
            let Some(value) = parse_date(cell) else {
                return false;
            };
            match parsed {
                DateQuery::Range(lo, hi) => value >= lo && value <= hi,
                DateQuery::Cmp(op, rhs) => op.apply(value, rhs),
                DateQuery::Exact(rhs) => value == rhs,
            }
        }
        None => contains(cell, query),
    }
}

/// Grammar forms tried in order: range, comparator, bare number
fn parse_numeric_query(query: &str) -> Option<NumericQuery> {
    if let Some((lo, hi)) = query.split_once("..") {
        if let (Some(lo), Some(hi)) = (parse_number(lo), parse_number(hi)) {
            return Some(NumericQuery::Range(lo, hi));
        }
    }
    if let Some((op, rest)) = split_comparator(query) {
        if let Some(n) = parse_number(rest) {
            return Some(NumericQuery::Cmp(op, n));
        }
    }
    parse_number(query).map(NumericQuery::Exact)
}

/// Grammar forms tried in order: range, before/after/on keyword, comparator,
/// bare date
fn parse_date_query(query: &str) -> Option<DateQuery> {
    if let Some((lo, hi)) = query.split_once("..") {
        if let (Some(lo), Some(hi)) = (parse_date(lo), parse_date(hi)) {
            return Some(DateQuery::Range(lo, hi));
        }
    }
    if let Some((keyword, rest)) = query.split_once(char::is_whitespace) {
        let op = match keyword.to_lowercase().as_str() {
            "before" => Some(CmpOp::Lt),
            "after" => Some(CmpOp::Gt),
            "on" => Some(CmpOp::Eq),
            _ => None,
        };
        if let Some(op) = op {
            if let Some(d) = parse_date(rest) {
                return Some(DateQuery::Cmp(op, d));
            }
        }
    }
    if let Some((op, rest)) = split_comparator(query) {
        if let Some(d) = parse_date(rest) {
            return Some(DateQuery::Cmp(op, d));
        }
    }
    parse_date(query).map(DateQuery::Exact)
}

/// Split a leading comparator off the query. Two-character operators are
/// checked before their one-character prefixes.
fn split_comparator(query: &str) -> Option<(CmpOp, &str)> {
    const OPERATORS: [(&str, CmpOp); 5] = [
        (">=", CmpOp::Ge),
        ("<=", CmpOp::Le),
        (">", CmpOp::Gt),
        ("<", CmpOp::Lt),
        ("=", CmpOp::Eq),
    ];
    for (symbol, op) in OPERATORS {
        if let Some(rest) = query.strip_prefix(symbol) {
            return Some((op, rest));
        }
    }
    None
}
