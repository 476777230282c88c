//! Deterministic inventory and stat-modifier rules shared across clients.
//!
//! `decay-core` defines the canonical data model (items, effects, slots) and
//! the pure operations over it: slot placement rules, modifier accumulation,
//! the persistence codec, and the death-scatter transaction. All mutation
//! flows through [`InventoryMatrix`]; timing and I/O live in the runtime
//! crate, which drives these APIs from a single frame loop.
pub mod catalog;
pub mod config;
pub mod death;
pub mod error;
pub mod inventory;
pub mod item;
pub mod rng;
pub mod stats;

#[cfg(test)]
pub(crate) mod testutil;

pub use catalog::ItemOracle;
pub use config::GameConfig;
pub use death::{DeathDrop, DeathOutcome, scatter_on_death};
pub use error::{ErrorSeverity, GameError};
pub use inventory::{
    CodecError, InventoryError, InventoryMatrix, SavedInventory, Slot, SlotCoord, SlotType,
};
pub use item::{
    EffectDefinition, EffectId, EffectKind, HeldItem, ItemClass, ItemDefinition, ItemId, ItemKind,
    Rgba, Vec3,
};
pub use rng::{PcgRng, RngOracle, compute_seed};
pub use stats::{EffectTarget, HealthPool, ModifierKind, ModifierState, StatConsumer};
