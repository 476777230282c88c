//! Persistence codec: flattens the matrix into ordered id lists.
//!
//! The serialized shape is a flat record of item ids in scan order with
//! `-1` marking an empty slot. Storage mechanics (files, key-value
//! stores) live outside the core; this module only defines the mapping.

use crate::catalog::ItemOracle;
use crate::inventory::error::CodecError;
use crate::inventory::matrix::{InventoryMatrix, SlotCoord};
use crate::item::{HeldItem, ItemClass, ItemId};

/// Sentinel for an empty slot in the serialized form.
const EMPTY_SLOT: i32 = -1;

/// Serialized inventory layout.
///
/// `item_ids` has `width * height` entries in scan order; `hotbar_item_ids`
/// has one entry per hotbar slot.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SavedInventory {
    pub item_ids: Vec<i32>,
    pub hotbar_item_ids: Vec<i32>,
}

impl SavedInventory {
    /// Flattens a matrix into its serialized layout.
    pub fn encode(matrix: &InventoryMatrix) -> Self {
        let (width, height) = matrix.size();
        let mut item_ids = Vec::with_capacity((width * height) as usize);
        for x in 0..width {
            for y in 0..height {
                let held = matrix.item_at(SlotCoord::new(x as i32, y as i32));
                item_ids.push(held.map_or(EMPTY_SLOT, |h| h.id.0 as i32));
            }
        }

        let hotbar_item_ids = (0..matrix.hotbar_slots())
            .map(|i| matrix.hotbar_item(i).map_or(EMPTY_SLOT, |h| h.id.0 as i32))
            .collect();

        Self {
            item_ids,
            hotbar_item_ids,
        }
    }

    /// Applies a serialized layout to `matrix`, resolving ids through
    /// `catalog`.
    ///
    /// The matrix is cleared first. Ids that do not resolve - and hotbar
    /// ids that resolve to a non-potion - load as empty slots; the count
    /// of such dropped entries is returned so callers can log it. Fires a
    /// single update notification.
    ///
    /// # Errors
    ///
    /// [`CodecError::GridLayoutMismatch`] /
    /// [`CodecError::HotbarLayoutMismatch`] when the list lengths do not
    /// match the matrix shape; the matrix is untouched in that case.
    pub fn decode(
        &self,
        catalog: &dyn ItemOracle,
        matrix: &mut InventoryMatrix,
    ) -> Result<usize, CodecError> {
        if self.item_ids.len() != matrix.grid_capacity() {
            return Err(CodecError::GridLayoutMismatch {
                expected: matrix.grid_capacity(),
                actual: self.item_ids.len(),
            });
        }
        if self.hotbar_item_ids.len() != matrix.hotbar_slots() {
            return Err(CodecError::HotbarLayoutMismatch {
                expected: matrix.hotbar_slots(),
                actual: self.hotbar_item_ids.len(),
            });
        }

        matrix.clear_all_silent();
        let mut dropped = 0;

        for (index, &raw) in self.item_ids.iter().enumerate() {
            match Self::resolve(catalog, raw) {
                Resolved::Empty => {}
                Resolved::Unknown => dropped += 1,
                Resolved::Item(held) => matrix.grid_slot_mut(index).held = Some(held),
            }
        }

        for (index, &raw) in self.hotbar_item_ids.iter().enumerate() {
            match Self::resolve(catalog, raw) {
                Resolved::Empty => {}
                Resolved::Unknown => dropped += 1,
                // The hotbar only ever stores potions; a stale save
                // pointing an upgrade here would break that invariant.
                Resolved::Item(held) if held.class == ItemClass::Potion => {
                    matrix.hotbar_slot_mut(index).held = Some(held);
                }
                Resolved::Item(_) => dropped += 1,
            }
        }

        matrix.touch();
        Ok(dropped)
    }

    fn resolve(catalog: &dyn ItemOracle, raw: i32) -> Resolved {
        if raw == EMPTY_SLOT {
            return Resolved::Empty;
        }
        let Ok(id) = u32::try_from(raw) else {
            return Resolved::Unknown;
        };
        match catalog.item(ItemId(id)) {
            Some(definition) => Resolved::Item(HeldItem::of(definition)),
            None => Resolved::Unknown,
        }
    }
}

enum Resolved {
    Empty,
    Unknown,
    Item(HeldItem),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::slot::SlotType;
    use crate::testutil::{TestCatalog, potion, small_config, upgrade};

    fn mixed_matrix(catalog: &TestCatalog) -> InventoryMatrix {
        let mut matrix = InventoryMatrix::new(&small_config());
        matrix.place(catalog.item(ItemId(1)).unwrap());
        matrix.place(catalog.item(ItemId(2)).unwrap());
        matrix
            .swap(
                SlotCoord::new(0, 1),
                SlotType::Any,
                SlotCoord::hotbar(1),
                SlotType::Potion,
            )
            .unwrap();
        matrix
    }

    #[test]
    fn round_trip_preserves_layout() {
        let catalog = TestCatalog::new(vec![upgrade(1), potion(2)], vec![]);
        let matrix = mixed_matrix(&catalog);

        let saved = SavedInventory::encode(&matrix);
        assert_eq!(saved.item_ids, vec![1, -1, -1, -1]);
        assert_eq!(saved.hotbar_item_ids, vec![-1, 2]);

        let mut restored = InventoryMatrix::new(&small_config());
        let dropped = saved.decode(&catalog, &mut restored).unwrap();
        assert_eq!(dropped, 0);
        assert_eq!(SavedInventory::encode(&restored), saved);
    }

    #[test]
    fn unknown_ids_load_as_empty_slots() {
        let catalog = TestCatalog::new(vec![upgrade(1)], vec![]);
        let saved = SavedInventory {
            item_ids: vec![1, 999, -1, -7],
            hotbar_item_ids: vec![-1, -1],
        };

        let mut matrix = InventoryMatrix::new(&small_config());
        let dropped = saved.decode(&catalog, &mut matrix).unwrap();

        assert_eq!(dropped, 2);
        assert_eq!(matrix.occupied(), 1);
        assert_eq!(matrix.item_at(SlotCoord::new(0, 0)).unwrap().id.0, 1);
    }

    #[test]
    fn hotbar_refuses_non_potion_ids() {
        let catalog = TestCatalog::new(vec![upgrade(1), potion(2)], vec![]);
        let saved = SavedInventory {
            item_ids: vec![-1; 4],
            hotbar_item_ids: vec![1, 2],
        };

        let mut matrix = InventoryMatrix::new(&small_config());
        let dropped = saved.decode(&catalog, &mut matrix).unwrap();

        assert_eq!(dropped, 1);
        assert!(matrix.hotbar_item(0).is_none());
        assert_eq!(matrix.hotbar_item(1).unwrap().id.0, 2);
    }

    #[test]
    fn layout_mismatch_is_rejected_without_mutation() {
        let catalog = TestCatalog::new(vec![upgrade(1)], vec![]);
        let mut matrix = InventoryMatrix::new(&small_config());
        matrix.place(catalog.item(ItemId(1)).unwrap());
        let before = matrix.clone();

        let saved = SavedInventory {
            item_ids: vec![-1; 3],
            hotbar_item_ids: vec![-1, -1],
        };
        let err = saved.decode(&catalog, &mut matrix).unwrap_err();
        assert!(matches!(err, CodecError::GridLayoutMismatch { .. }));
        assert_eq!(matrix, before);
    }

    #[test]
    fn decode_notifies_exactly_once() {
        let catalog = TestCatalog::new(vec![upgrade(1)], vec![]);
        let mut matrix = InventoryMatrix::new(&small_config());
        let revision = matrix.revision();

        let saved = SavedInventory {
            item_ids: vec![1, -1, -1, -1],
            hotbar_item_ids: vec![-1, -1],
        };
        saved.decode(&catalog, &mut matrix).unwrap();
        assert_eq!(matrix.revision(), revision + 1);
    }
}
