//! Inventory and codec errors.

use crate::error::{ErrorSeverity, GameError};
use crate::inventory::slot::SlotType;
use crate::item::ItemId;

/// Errors raised by [`crate::InventoryMatrix`] mutators.
///
/// Every failing operation aborts before mutating anything, so the matrix
/// never becomes visible in a partially-updated state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InventoryError {
    /// Coordinate fails the bounds check for the requested slot type.
    #[error("slot ({x}, {y}) is out of range for {slot_type} slots")]
    SlotOutOfRange { x: i32, y: i32, slot_type: SlotType },

    /// An item would violate the destination slot's type constraint.
    #[error("{item} cannot be stored in a {slot_type} slot")]
    IncompatibleSlotType { item: ItemId, slot_type: SlotType },
}

impl GameError for InventoryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SlotOutOfRange { .. } | Self::IncompatibleSlotType { .. } => {
                ErrorSeverity::Validation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::SlotOutOfRange { .. } => "INV_SLOT_OUT_OF_RANGE",
            Self::IncompatibleSlotType { .. } => "INV_INCOMPATIBLE_SLOT_TYPE",
        }
    }
}

/// Errors raised by the persistence codec.
///
/// Unknown item ids are NOT errors; they decode to empty slots so a stale
/// save never aborts a whole load.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CodecError {
    /// Saved grid list length does not match `width * height`.
    #[error("saved grid layout has {actual} entries, expected {expected}")]
    GridLayoutMismatch { expected: usize, actual: usize },

    /// Saved hotbar list length does not match the hotbar slot count.
    #[error("saved hotbar layout has {actual} entries, expected {expected}")]
    HotbarLayoutMismatch { expected: usize, actual: usize },
}

impl GameError for CodecError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::GridLayoutMismatch { .. } | Self::HotbarLayoutMismatch { .. } => {
                ErrorSeverity::Validation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::GridLayoutMismatch { .. } => "CODEC_GRID_LAYOUT_MISMATCH",
            Self::HotbarLayoutMismatch { .. } => "CODEC_HOTBAR_LAYOUT_MISMATCH",
        }
    }
}
