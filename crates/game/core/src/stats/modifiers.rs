//! Additive stat-modifier accumulation.
//!
//! The totals are never trusted incrementally: every inventory change
//! triggers a full [`ModifierState::recompute`] from the authoritative
//! matrix contents. Inventory mutations originate from several
//! independent callers (pickups, UI drag-drop, death scatter), and a
//! missed or reordered delta would silently drift the totals; replaying
//! from scratch converges regardless.

use crate::catalog::ItemOracle;
use crate::config::GameConfig;
use crate::inventory::InventoryMatrix;
use crate::item::{EffectKind, ItemClass};

/// The combat/movement statistic a modifier applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ModifierKind {
    Damage,
    Speed,
    Cooldown,
}

impl ModifierKind {
    /// All modifier kinds, in republish order.
    pub const ALL: [Self; 3] = [Self::Damage, Self::Speed, Self::Cooldown];

    /// Maps an effect kind to the modifier it accumulates into.
    ///
    /// `Health` effects are one-shot and have no modifier counterpart.
    pub const fn from_effect(kind: EffectKind) -> Option<Self> {
        match kind {
            EffectKind::Damage => Some(Self::Damage),
            EffectKind::Speed => Some(Self::Speed),
            EffectKind::Cooldown => Some(Self::Cooldown),
            EffectKind::Health => None,
        }
    }
}

/// Per-entity running totals of additive stat modifiers.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModifierState {
    pub damage: f32,
    pub speed: f32,
    pub cooldown: f32,
}

impl ModifierState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets every total to zero.
    pub fn cleanse(&mut self) {
        *self = Self::default();
    }

    pub fn get(&self, kind: ModifierKind) -> f32 {
        match kind {
            ModifierKind::Damage => self.damage,
            ModifierKind::Speed => self.speed,
            ModifierKind::Cooldown => self.cooldown,
        }
    }

    /// Adds a delta to one total (timed potion application).
    pub fn apply(&mut self, kind: ModifierKind, value: f32) {
        *self.field_mut(kind) += value;
    }

    /// Removes a previously applied delta (timed potion expiry).
    pub fn remove(&mut self, kind: ModifierKind, value: f32) {
        *self.field_mut(kind) -= value;
    }

    /// Rebuilds the totals from the authoritative inventory contents.
    ///
    /// Walks every held item in matrix scan order; potions never
    /// contribute passively, and `Health` effects are one-shot and are
    /// never replayed here. Items or effects that no longer resolve
    /// through the catalog are skipped.
    pub fn recompute(&mut self, matrix: &InventoryMatrix, catalog: &dyn ItemOracle) {
        self.cleanse();
        for held in matrix.held_items() {
            if held.class != ItemClass::Upgrade {
                continue;
            }
            let Some(definition) = catalog.item(held.id) else {
                continue;
            };
            for &effect_id in &definition.effects {
                let Some(effect) = catalog.effect(effect_id) else {
                    continue;
                };
                if let Some(kind) = ModifierKind::from_effect(effect.kind) {
                    self.apply(kind, effect.value);
                }
            }
        }
    }

    // ========================================================================
    // Derived stats for consumers
    // ========================================================================

    /// Effective projectile damage for a base value.
    pub fn damage_with(&self, base: f32) -> f32 {
        base + self.damage
    }

    /// Effective movement speed for a base value.
    pub fn speed_with(&self, base: f32) -> f32 {
        base + self.speed
    }

    /// Effective fire cooldown for a base value, floored at
    /// [`GameConfig::MIN_COOLDOWN`].
    pub fn cooldown_with(&self, base: f32) -> f32 {
        (base + self.cooldown).max(GameConfig::MIN_COOLDOWN)
    }

    fn field_mut(&mut self, kind: ModifierKind) -> &mut f32 {
        match kind {
            ModifierKind::Damage => &mut self.damage,
            ModifierKind::Speed => &mut self.speed,
            ModifierKind::Cooldown => &mut self.cooldown,
        }
    }
}
