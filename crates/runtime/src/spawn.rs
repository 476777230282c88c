//! Seam between the inventory runtime and the world it drops items into.

use decay_core::{HeldItem, Vec3};

/// Receives items that leave the inventory and re-enter the world
/// (manual drops and death-scatter ejects).
///
/// The engine-facing side instantiates a world pickup from the item's
/// definition and applies `impulse` to it; the runtime only guarantees
/// that the slot has already been cleared when this is called.
pub trait WorldSpawner: Send {
    fn spawn_ejected_item(&mut self, item: HeldItem, impulse: Vec3);
}

/// Discards ejected items. Used by headless tools and tests that do not
/// simulate a world.
pub struct NullSpawner;

impl WorldSpawner for NullSpawner {
    fn spawn_ejected_item(&mut self, item: HeldItem, impulse: Vec3) {
        tracing::debug!(item = %item.id, ?impulse, "discarding ejected item (no world)");
    }
}
