//! Effect dispatch against an entity's stat capabilities.
//!
//! Effects are a closed set of kinds dispatched through a small switch
//! against a capability record, not through dynamic component lookup. A
//! target that lacks a capability simply ignores effects of that kind -
//! applying a speed effect to something without modifiers is a no-op,
//! never an error.

use crate::item::{EffectDefinition, EffectKind};
use crate::stats::health::HealthPool;
use crate::stats::modifiers::{ModifierKind, ModifierState};

/// Mutable view of the stat state an effect may act on.
///
/// Each field is optional; absent capabilities make the corresponding
/// effect kinds no-ops.
#[derive(Debug, Default)]
pub struct EffectTarget<'a> {
    pub health: Option<&'a mut HealthPool>,
    pub modifiers: Option<&'a mut ModifierState>,
}

impl<'a> EffectTarget<'a> {
    pub fn new(health: &'a mut HealthPool, modifiers: &'a mut ModifierState) -> Self {
        Self {
            health: Some(health),
            modifiers: Some(modifiers),
        }
    }

    /// Applies an effect.
    ///
    /// `Health` is one-shot: positive values heal, negative values
    /// damage. The other kinds add to the matching modifier total.
    pub fn apply(&mut self, effect: EffectDefinition) {
        match effect.kind {
            EffectKind::Health => {
                if let Some(health) = self.health.as_mut() {
                    if effect.value > 0.0 {
                        health.heal(effect.value);
                    } else {
                        health.damage(-effect.value);
                    }
                }
            }
            kind => {
                if let (Some(modifiers), Some(modifier_kind)) =
                    (self.modifiers.as_mut(), ModifierKind::from_effect(kind))
                {
                    modifiers.apply(modifier_kind, effect.value);
                }
            }
        }
    }

    /// Reverts a previously applied effect.
    ///
    /// `Health` has no revert (the heal/damage already happened); the
    /// modifier kinds subtract the delta they added.
    pub fn revert(&mut self, effect: EffectDefinition) {
        match effect.kind {
            EffectKind::Health => {}
            kind => {
                if let (Some(modifiers), Some(modifier_kind)) =
                    (self.modifiers.as_mut(), ModifierKind::from_effect(kind))
                {
                    modifiers.remove(modifier_kind, effect.value);
                }
            }
        }
    }
}

/// External stat-consumer surface (combat damage, movement speed, fire
/// cooldown, health bars).
///
/// The runtime republishes through this after every recompute, health
/// change, and death.
pub trait StatConsumer: Send {
    fn on_modifier_changed(&mut self, kind: ModifierKind, total: f32);
    fn on_health_changed(&mut self, current: f32, max: f32);
    fn on_death(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_effects_apply_and_revert_symmetrically() {
        let mut health = HealthPool::new(100.0);
        let mut modifiers = ModifierState::new();
        let mut target = EffectTarget::new(&mut health, &mut modifiers);

        let speed = EffectDefinition::new(EffectKind::Speed, 3.0);
        target.apply(speed);
        target.apply(speed);
        target.revert(speed);

        assert_eq!(modifiers.speed, 3.0);
    }

    #[test]
    fn health_effects_are_one_shot() {
        let mut health = HealthPool::new(100.0);
        let mut modifiers = ModifierState::new();
        health.damage(40.0);

        let mut target = EffectTarget::new(&mut health, &mut modifiers);
        let heal = EffectDefinition::new(EffectKind::Health, 25.0);
        target.apply(heal);
        target.revert(heal);

        assert_eq!(health.current(), 85.0, "revert must not undo the heal");

        let mut target = EffectTarget::new(&mut health, &mut modifiers);
        target.apply(EffectDefinition::new(EffectKind::Health, -10.0));
        assert_eq!(health.current(), 75.0);
    }

    #[test]
    fn missing_capability_is_a_no_op() {
        let mut modifiers = ModifierState::new();
        let mut target = EffectTarget {
            health: None,
            modifiers: Some(&mut modifiers),
        };
        target.apply(EffectDefinition::new(EffectKind::Health, 50.0));
        target.apply(EffectDefinition::new(EffectKind::Damage, 2.0));

        assert_eq!(modifiers.damage, 2.0);

        let mut target = EffectTarget::default();
        target.apply(EffectDefinition::new(EffectKind::Speed, 1.0));
        target.revert(EffectDefinition::new(EffectKind::Speed, 1.0));
    }
}
