//! Column type inference
//!
//! Samples every cell of a column and classifies its dominant type so the
//! filter evaluator can pick numeric or date semantics instead of plain
//! substring matching. Pure function of (headers, rows); callers recompute
//! when the session revision changes.

use chrono::{NaiveDate, NaiveDateTime};

/// A column must parse at this ratio or better to get a definite type
const TYPE_THRESHOLD: f64 = 0.98;

/// Below the definite threshold but at/above this, the column is `Mixed`
const MIXED_THRESHOLD: f64 = 0.5;

/// How many unclassifiable example values to keep for diagnostics
const MAX_EXAMPLES: usize = 3;

/// Inferred dominant type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Number,
    Date,
    Boolean,
    /// One type dominates but not convincingly
    Mixed,
    String,
    /// No non-null cells at all
    Empty,
}

/// Min/max/mean over the numerically parseable cells
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

/// Min/max over the date-parseable cells, as ISO strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateStats {
    pub min: String,
    pub max: String,
}

/// Derived type summary for one column. Ephemeral; never persisted.
#[derive(Debug, Clone)]
pub struct ColumnProfile {
    pub column_type: ColumnType,
    pub confidence: f64,
    pub non_null_count: usize,
    pub null_count: usize,
    pub number_count: usize,
    pub date_count: usize,
    pub boolean_count: usize,
    /// Up to three values that matched none of the three parsers
    pub unmatched_examples: Vec<String>,
    pub numeric_stats: Option<NumericStats>,
    pub date_stats: Option<DateStats>,
}

/// Parse a cell as a number. Whitespace is trimmed; signs, decimals, and
/// exponents are accepted; infinities and NaN are not data.
pub fn parse_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Parse a cell as an ISO-like date: `YYYY-MM-DD` (slashes accepted)
/// optionally followed by a time component.
pub fn parse_date(value: &str) -> Option<NaiveDateTime> {
    let normalized = value.trim().replace('/', "-");
    if normalized.is_empty() {
        return None;
    }
    const DATETIME_FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(&normalized, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Parse a cell as a boolean: true/false/yes/no/1/0, case-insensitive
pub fn parse_boolean(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "1" => Some(true),
        "false" | "no" | "0" => Some(false),
        _ => None,
    }
}

/// Whether a cell counts as null (empty or whitespace-only)
pub fn is_null(value: &str) -> bool {
    value.trim().is_empty()
}

/// Infer a profile for every column
pub fn infer_columns(headers: &[String], rows: &[Vec<String>]) -> Vec<ColumnProfile> {
    (0..headers.len())
        .map(|col| infer_column(rows, col))
        .collect()
}

/// Infer one column's profile from all of its cells
pub fn infer_column(rows: &[Vec<String>], col: usize) -> ColumnProfile {
    let mut non_null = 0usize;
    let mut null = 0usize;
    let mut numbers: Vec<f64> = Vec::new();
    let mut dates: Vec<NaiveDateTime> = Vec::new();
    let mut boolean_count = 0usize;
    let mut unmatched: Vec<String> = Vec::new();

    for row in rows {
        let cell = row.get(col).map(|s| s.as_str()).unwrap_or("");
        if is_null(cell) {
            null += 1;
            continue;
        }
        non_null += 1;

        let number = parse_number(cell);
        let date = parse_date(cell);
        let boolean = parse_boolean(cell);

        if let Some(n) = number {
            numbers.push(n);
        }
        if let Some(d) = date {
            dates.push(d);
        }
        if boolean.is_some() {
            boolean_count += 1;
        }
        if number.is_none() && date.is_none() && boolean.is_none() && unmatched.len() < MAX_EXAMPLES
        {
            unmatched.push(cell.to_string());
        }
    }

    if non_null == 0 {
        return ColumnProfile {
            column_type: ColumnType::Empty,
            confidence: 1.0,
            non_null_count: 0,
            null_count: null,
            number_count: 0,
            date_count: 0,
            boolean_count: 0,
            unmatched_examples: unmatched,
            numeric_stats: None,
            date_stats: None,
        };
    }

    let number_ratio = numbers.len() as f64 / non_null as f64;
    let date_ratio = dates.len() as f64 / non_null as f64;
    let boolean_ratio = boolean_count as f64 / non_null as f64;
    let best = number_ratio.max(date_ratio).max(boolean_ratio);

    // Checked in this order so "1"/"0" columns classify as numbers
    let (column_type, confidence) = if number_ratio >= TYPE_THRESHOLD {
        (ColumnType::Number, number_ratio)
    } else if date_ratio >= TYPE_THRESHOLD {
        (ColumnType::Date, date_ratio)
    } else if boolean_ratio >= TYPE_THRESHOLD {
        (ColumnType::Boolean, boolean_ratio)
    } else if best >= MIXED_THRESHOLD {
        (ColumnType::Mixed, best)
    } else {
        (ColumnType::String, 1.0 - best)
    };

    let numeric_stats = if column_type == ColumnType::Number && !numbers.is_empty() {
        let min = numbers.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = numbers.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let mean = numbers.iter().sum::<f64>() / numbers.len() as f64;
        Some(NumericStats { min, max, mean })
    } else {
        None
    };

    let date_stats = if column_type == ColumnType::Date {
        match (dates.iter().min(), dates.iter().max()) {
            (Some(min), Some(max)) => Some(DateStats {
                min: min.format("%Y-%m-%dT%H:%M:%S").to_string(),
                max: max.format("%Y-%m-%dT%H:%M:%S").to_string(),
            }),
            _ => None,
        }
    } else {
        None
    };

    ColumnProfile {
        column_type,
        confidence,
        non_null_count: non_null,
        null_count: null,
        number_count: numbers.len(),
        date_count: dates.len(),
        boolean_count,
        unmatched_examples: unmatched,
        numeric_stats,
        date_stats,
    }
}
