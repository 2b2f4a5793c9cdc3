//! lattice - editable-grid state core
//!
//! The state engine behind a tabular data editor: snapshot mutations with
//! undo/redo (coalescing and batching included), multiple document sessions,
//! heuristic column type inference, and a type-aware filtered view
//! projection. Window chrome, dialogs, and file I/O live in the host shell
//! and talk to this crate through the payload types in [`io`].

pub mod filter;
pub mod grid;
pub mod history;
pub mod infer;
pub mod io;
pub mod session;
pub mod store;
pub mod trace;
pub mod view;

// Re-export commonly used types
pub use grid::{CellPosition, Delimiter, Newline, Selection, TableSnapshot};
pub use history::{EditHistory, UndoEntry};
pub use infer::{ColumnProfile, ColumnType};
pub use io::{DocumentPayload, ProgressEvent, ProgressStage};
pub use session::{DocumentSession, SessionId};
pub use store::{GridStore, MatchSite, StoreEvent};
pub use view::{FilteredRow, FilteredView};
