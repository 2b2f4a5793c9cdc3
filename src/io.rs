//! Boundary payloads for the host shell
//!
//! The core never touches files or dialogs. A host hands in a fully parsed
//! `DocumentPayload` on load and receives one back on save or filtered
//! export; progress events flow one-way to subscribers and are purely
//! informational.

use std::path::PathBuf;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::grid::{Delimiter, Newline, TableSnapshot};

/// A fully parsed document crossing the load/save boundary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentPayload {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub delimiter: Delimiter,
    pub newline: Newline,
    pub path: Option<PathBuf>,
}

impl DocumentPayload {
    /// Validate and convert into a snapshot. Ragged rows are repaired by
    /// padding or truncating to the header count, so a session is never left
    /// half-initialized.
    pub fn into_snapshot(self) -> Result<TableSnapshot> {
        if self.headers.is_empty() && !self.rows.is_empty() {
            bail!("document has rows but no headers");
        }
        let mut snapshot = TableSnapshot {
            headers: self.headers,
            rows: self.rows,
            delimiter: self.delimiter,
            newline: self.newline,
            path: self.path,
        };
        snapshot.normalize();
        Ok(snapshot)
    }

    /// Build a payload from a snapshot, without consuming it
    pub fn from_snapshot(snapshot: &TableSnapshot) -> Self {
        Self {
            headers: snapshot.headers.clone(),
            rows: snapshot.rows.clone(),
            delimiter: snapshot.delimiter,
            newline: snapshot.newline,
            path: snapshot.path.clone(),
        }
    }
}

/// Stage of a load or save in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgressStage {
    Reading,
    Parsing,
    Writing,
    Done,
}

/// One-way progress notification; the core never gates on these
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressEvent {
    pub stage: ProgressStage,
    /// Completion fraction in 0..=1
    pub fraction: f32,
}

impl ProgressEvent {
    pub fn new(stage: ProgressStage, fraction: f32) -> Self {
        Self {
            stage,
            fraction: fraction.clamp(0.0, 1.0),
        }
    }
}
