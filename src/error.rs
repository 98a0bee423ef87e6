//! Error taxonomy for board operations.
//!
//! No error here is fatal to a board session: validation failures surface to
//! the user, operations on absent ids no-op at the gesture layer, and
//! out-of-range scales are clamped on write rather than reported.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

use crate::item::ItemId;

/// Errors surfaced by board operations.
#[derive(Debug, Error)]
pub enum BoardError {
    /// A required field was missing when adding an item.
    #[error("missing required field `{field}`")]
    Validation {
        /// Name of the missing field.
        field: &'static str,
    },

    /// An operation referenced an item that no longer exists.
    #[error("item not found: {id}")]
    NotFound {
        /// The absent item id.
        id: ItemId,
    },

    /// The persistence or ingestion backend failed.
    #[error("storage error: {0}")]
    Storage(String),
}
