//! Event types for different topics.

use serde::{Deserialize, Serialize};

use decay_core::{ItemId, ModifierKind};

/// Events related to inventory contents.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum InventoryEvent {
    /// The inventory changed; `revision` is the matrix mutation counter
    /// after the change. Subscribers re-read the layout they care about.
    Updated { revision: u64 },

    /// A pickup was refused because no grid slot was free. The item stays
    /// in the world.
    PickupRejected { item: ItemId },

    /// The owning entity died and its inventory was scattered.
    Scattered { deleted: usize, ejected: usize },
}

/// Events related to the owning entity's stats.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum StatEvent {
    /// A modifier total changed; `total` is the new accumulated value.
    ModifierChanged { kind: ModifierKind, total: f32 },

    /// Current or maximum health changed.
    HealthChanged { current: f32, max: f32 },

    /// Health reached zero.
    Died,

    /// Health was restored to full after a death.
    Respawned,
}
