//! The player-facing inventory: a typed grid plus fixed-purpose slots.
//!
//! # Scan order
//!
//! Every whole-inventory walk (auto-placement, modifier recompute,
//! persistence flattening, death scatter) uses the same deterministic
//! order: grid cells column-by-column (`x` outer, `y` inner), then the
//! hotbar left to right. Placement is "first empty slot wins", so
//! identical operation sequences always produce identical layouts.
//!
//! # Update notification
//!
//! The matrix carries a `revision` counter that increments exactly once
//! per state-changing mutation. The runtime compares revisions to decide
//! when to recompute modifiers and publish inventory events; pure reads
//! never touch it.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::inventory::error::InventoryError;
use crate::inventory::slot::{Slot, SlotType};
use crate::item::{HeldItem, ItemDefinition};

/// Coordinate addressing a slot of a given [`SlotType`].
///
/// For `Any` both components index the grid; for `Potion` only `x` is
/// used (hotbar index); for `Deletion` the coordinate is ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotCoord {
    pub x: i32,
    pub y: i32,
}

impl SlotCoord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Coordinate addressing hotbar slot `index`.
    pub const fn hotbar(index: i32) -> Self {
        Self { x: index, y: 0 }
    }
}

/// A concrete slot location after coordinate validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ResolvedSlot {
    Grid(usize),
    Hotbar(usize),
    Deletion,
}

/// The inventory matrix: `width x height` grid of `Any` slots, a fixed
/// row of `Potion` hotbar slots, and exactly one `Deletion` slot.
///
/// One live instance per owning entity; all mutation goes through the
/// methods below, each of which is all-or-nothing with respect to its
/// own slot(s).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryMatrix {
    width: u32,
    height: u32,
    /// Grid slots in scan order (`x * height + y`).
    cells: Vec<Slot>,
    hotbar: ArrayVec<Slot, { GameConfig::MAX_HOTBAR_SLOTS }>,
    deletion_slot: Slot,
    revision: u64,
}

impl InventoryMatrix {
    /// Creates an empty matrix sized from `config`.
    ///
    /// The hotbar slot count is clamped to
    /// [`GameConfig::MAX_HOTBAR_SLOTS`].
    pub fn new(config: &GameConfig) -> Self {
        let cells = vec![Slot::empty(); (config.grid_width * config.grid_height) as usize];
        let mut hotbar = ArrayVec::new();
        for _ in 0..config.hotbar_slots.min(GameConfig::MAX_HOTBAR_SLOTS) {
            hotbar.push(Slot::empty());
        }
        Self {
            width: config.grid_width,
            height: config.grid_height,
            cells,
            hotbar,
            deletion_slot: Slot::empty(),
            revision: 0,
        }
    }

    // ========================================================================
    // Queries (pure reads, never notify)
    // ========================================================================

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Grid dimensions as `(width, height)`.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn hotbar_slots(&self) -> usize {
        self.hotbar.len()
    }

    /// Current mutation counter. Increments exactly once per
    /// state-changing operation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Item held by a grid cell, or `None` if the cell is empty or the
    /// coordinate is out of range.
    pub fn item_at(&self, coord: SlotCoord) -> Option<HeldItem> {
        self.grid_index(coord).and_then(|i| self.cells[i].held())
    }

    /// Item held by hotbar slot `index`.
    pub fn hotbar_item(&self, index: usize) -> Option<HeldItem> {
        self.hotbar.get(index).and_then(Slot::held)
    }

    /// Item sitting in the deletion slot.
    pub fn deletion_item(&self) -> Option<HeldItem> {
        self.deletion_slot.held()
    }

    /// All held items in scan order (grid, then hotbar).
    pub fn held_items(&self) -> impl Iterator<Item = HeldItem> + '_ {
        self.cells
            .iter()
            .chain(self.hotbar.iter())
            .filter_map(Slot::held)
    }

    /// Number of occupied slots (grid + hotbar).
    pub fn occupied(&self) -> usize {
        self.held_items().count()
    }

    // ========================================================================
    // Mutators
    // ========================================================================

    /// Places an item into the first empty grid slot in scan order.
    ///
    /// Hotbar and deletion slots are never auto-filled. Returns `false`
    /// (inventory full) with zero side effects when no slot is free.
    pub fn place(&mut self, item: &ItemDefinition) -> bool {
        let held = HeldItem::of(item);
        for slot in &mut self.cells {
            if slot.is_empty() && SlotType::Any.can_hold(held.class) {
                slot.held = Some(held);
                self.touch();
                return true;
            }
        }
        false
    }

    /// Removes and returns the item at `(coord, slot_type)`.
    ///
    /// Returns `Ok(None)` if the slot was already empty; notifies only
    /// when a non-empty slot was cleared.
    ///
    /// # Errors
    ///
    /// [`InventoryError::SlotOutOfRange`] if the coordinate fails the
    /// bounds check for the requested slot type.
    pub fn remove_at(
        &mut self,
        coord: SlotCoord,
        slot_type: SlotType,
    ) -> Result<Option<HeldItem>, InventoryError> {
        let resolved = self.resolve(coord, slot_type)?;
        let removed = self.slot_mut(resolved).held.take();
        if removed.is_some() {
            self.touch();
        }
        Ok(removed)
    }

    /// Exchanges the contents of two slots atomically.
    ///
    /// A same-slot swap still validates its coordinates but does not
    /// notify. Exactly one notification fires for an effective swap.
    ///
    /// # Errors
    ///
    /// [`InventoryError::SlotOutOfRange`] if either coordinate is
    /// invalid; [`InventoryError::IncompatibleSlotType`] if either item
    /// would violate the other slot's type constraint. No partial
    /// mutation in any error case.
    pub fn swap(
        &mut self,
        from: SlotCoord,
        from_type: SlotType,
        to: SlotCoord,
        to_type: SlotType,
    ) -> Result<(), InventoryError> {
        let from_slot = self.resolve(from, from_type)?;
        let to_slot = self.resolve(to, to_type)?;

        let from_held = self.slot(from_slot).held();
        let to_held = self.slot(to_slot).held();

        // Validate both directions before touching anything.
        if let Some(item) = from_held
            && !to_type.can_hold(item.class)
        {
            return Err(InventoryError::IncompatibleSlotType {
                item: item.id,
                slot_type: to_type,
            });
        }
        if let Some(item) = to_held
            && !from_type.can_hold(item.class)
        {
            return Err(InventoryError::IncompatibleSlotType {
                item: item.id,
                slot_type: from_type,
            });
        }

        if from_slot == to_slot || (from_held.is_none() && to_held.is_none()) {
            return Ok(());
        }

        self.slot_mut(from_slot).held = to_held;
        self.slot_mut(to_slot).held = from_held;
        self.touch();
        Ok(())
    }

    /// Clears every slot (grid, hotbar, deletion). Notifies once if
    /// anything was held.
    pub fn clear_all(&mut self) {
        if self.clear_all_silent() {
            self.touch();
        }
    }

    // ========================================================================
    // Crate-internal access (codec, death transaction)
    // ========================================================================

    /// Clears every slot without notifying. Returns true if any slot
    /// held an item.
    pub(crate) fn clear_all_silent(&mut self) -> bool {
        let mut changed = false;
        for slot in self.slots_scan_mut() {
            changed |= slot.held.take().is_some();
        }
        changed
    }

    /// All slots in scan order (grid, hotbar, deletion last).
    pub(crate) fn slots_scan_mut(&mut self) -> impl Iterator<Item = &mut Slot> {
        self.cells
            .iter_mut()
            .chain(self.hotbar.iter_mut())
            .chain(core::iter::once(&mut self.deletion_slot))
    }

    pub(crate) fn grid_capacity(&self) -> usize {
        self.cells.len()
    }

    pub(crate) fn grid_slot_mut(&mut self, index: usize) -> &mut Slot {
        &mut self.cells[index]
    }

    pub(crate) fn hotbar_slot_mut(&mut self, index: usize) -> &mut Slot {
        &mut self.hotbar[index]
    }

    pub(crate) fn touch(&mut self) {
        self.revision += 1;
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn grid_index(&self, coord: SlotCoord) -> Option<usize> {
        let in_range = coord.x >= 0
            && (coord.x as u32) < self.width
            && coord.y >= 0
            && (coord.y as u32) < self.height;
        in_range.then(|| coord.x as usize * self.height as usize + coord.y as usize)
    }

    fn resolve(&self, coord: SlotCoord, slot_type: SlotType) -> Result<ResolvedSlot, InventoryError> {
        let out_of_range = || InventoryError::SlotOutOfRange {
            x: coord.x,
            y: coord.y,
            slot_type,
        };
        match slot_type {
            SlotType::Any => self
                .grid_index(coord)
                .map(ResolvedSlot::Grid)
                .ok_or_else(out_of_range),
            SlotType::Potion => {
                let in_range = coord.x >= 0 && (coord.x as usize) < self.hotbar.len();
                in_range
                    .then_some(ResolvedSlot::Hotbar(coord.x as usize))
                    .ok_or_else(out_of_range)
            }
            SlotType::Deletion => Ok(ResolvedSlot::Deletion),
        }
    }

    fn slot(&self, resolved: ResolvedSlot) -> &Slot {
        match resolved {
            ResolvedSlot::Grid(i) => &self.cells[i],
            ResolvedSlot::Hotbar(i) => &self.hotbar[i],
            ResolvedSlot::Deletion => &self.deletion_slot,
        }
    }

    fn slot_mut(&mut self, resolved: ResolvedSlot) -> &mut Slot {
        match resolved {
            ResolvedSlot::Grid(i) => &mut self.cells[i],
            ResolvedSlot::Hotbar(i) => &mut self.hotbar[i],
            ResolvedSlot::Deletion => &mut self.deletion_slot,
        }
    }
}
