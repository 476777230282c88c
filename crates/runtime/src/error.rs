//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the core rules, the persistence layer, and content
//! lookup so clients can bubble them up with consistent context.

use thiserror::Error;

use decay_core::{CodecError, InventoryError, ItemId};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    /// A caller referenced an item id the catalog does not define.
    ///
    /// Distinct from stale ids inside a save file, which load as empty
    /// slots instead of failing.
    #[error("{item} is not defined in the item catalog")]
    UnknownItem { item: ItemId },

    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("save file I/O failed")]
    Io(#[from] std::io::Error),

    #[error("save file serialization failed")]
    Serde(#[from] serde_json::Error),
}
