//! Typed slot storage: the inventory matrix, its slots, and the
//! persistence codec.
mod codec;
mod error;
mod matrix;
mod slot;

pub use codec::SavedInventory;
pub use error::{CodecError, InventoryError};
pub use matrix::{InventoryMatrix, SlotCoord};
pub use slot::{Slot, SlotType};
