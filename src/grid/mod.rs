//! Grid data model
//!
//! The snapshot value type every mutation operates on, plus the selection
//! variant used by hosts to track what the user has highlighted.

pub mod selection;
pub mod snapshot;

pub use selection::Selection;
pub use snapshot::{CellPosition, Delimiter, Newline, TableSnapshot};
