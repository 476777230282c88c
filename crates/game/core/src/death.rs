//! Death-triggered inventory scatter.
//!
//! On death every held item is either destroyed outright or ejected into
//! the world, the modifier totals are cleansed, and the inventory ends
//! empty. The per-item choice is a deterministic roll derived from the
//! death event's seed, so a replayed death produces the same drops.
//!
//! The transaction is best-effort across items but deterministic per
//! item: a slot is always cleared even if the caller cannot spawn the
//! ejected item afterwards - loss is preferred over an item existing
//! both in a slot and in the world.

use crate::inventory::InventoryMatrix;
use crate::item::{HeldItem, Vec3};
use crate::rng::{RngOracle, compute_seed};
use crate::stats::ModifierState;

/// Vertical component of every eject impulse; keeps drops from clipping
/// into the floor before physics takes over.
const EJECT_LIFT: f32 = 0.5;

/// What happened to one held item during the scatter.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeathOutcome {
    /// Destroyed; no world artifact is produced.
    Deleted,
    /// Ejected; the caller forwards this to the world spawner.
    Ejected {
        /// Velocity hint for the spawned world item.
        impulse: Vec3,
    },
}

/// One item's fate in a death transaction.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeathDrop {
    pub item: HeldItem,
    pub outcome: DeathOutcome,
}

/// Runs the death transaction against an inventory.
///
/// Cleanses `modifiers`, then visits every occupied grid and hotbar slot
/// exactly once in scan order. Each item rolls once against
/// `deletion_chance` (roll <= chance deletes, otherwise ejects with a
/// deterministic impulse hint) and its slot is cleared either way. Empty
/// slots are skipped. Fires a single update notification if anything was
/// cleared.
pub fn scatter_on_death(
    matrix: &mut InventoryMatrix,
    modifiers: &mut ModifierState,
    rng: &dyn RngOracle,
    seed: u64,
    deletion_chance: f32,
) -> Vec<DeathDrop> {
    modifiers.cleanse();

    let mut drops = Vec::new();
    for (ordinal, slot) in matrix.slots_scan_mut().enumerate() {
        let Some(item) = slot.held.take() else {
            continue;
        };
        let ordinal = ordinal as u64;

        let roll = rng.roll_unit(compute_seed(seed, ordinal, 0));
        let outcome = if roll <= deletion_chance {
            DeathOutcome::Deleted
        } else {
            DeathOutcome::Ejected {
                impulse: Vec3::new(
                    rng.roll_signed_unit(compute_seed(seed, ordinal, 1)),
                    EJECT_LIFT,
                    rng.roll_signed_unit(compute_seed(seed, ordinal, 2)),
                ),
            }
        };
        drops.push(DeathDrop { item, outcome });
    }

    if !drops.is_empty() {
        matrix.touch();
    }
    drops
}
