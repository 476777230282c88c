//! A single storage cell and its type constraint.

use crate::item::{HeldItem, ItemClass};

/// The different types of slots an inventory can have.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum SlotType {
    /// Accepts any item. All grid cells are of this type.
    Any,
    /// Accepts only potions. Used for the active hotbar slots.
    Potion,
    /// Accepts nothing; items dropped here are destroyed by the caller.
    Deletion,
}

impl SlotType {
    /// Slot-compatibility rule: can a slot of this type store `class`?
    pub const fn can_hold(&self, class: ItemClass) -> bool {
        match self {
            Self::Any => true,
            Self::Potion => matches!(class, ItemClass::Potion),
            Self::Deletion => false,
        }
    }
}

/// A single slot in the inventory.
///
/// Created empty; mutated only through [`crate::InventoryMatrix`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slot {
    pub(crate) held: Option<HeldItem>,
}

impl Slot {
    pub const fn empty() -> Self {
        Self { held: None }
    }

    pub const fn is_empty(&self) -> bool {
        self.held.is_none()
    }

    pub const fn held(&self) -> Option<HeldItem> {
        self.held
    }
}
