//! Validated item catalog backing the [`ItemOracle`] trait.

use std::collections::HashMap;

use decay_core::{
    EffectDefinition, EffectId, ErrorSeverity, GameError, ItemClass, ItemDefinition, ItemId,
    ItemOracle,
};

/// Errors raised while assembling a catalog from raw definitions.
///
/// A catalog is rejected wholesale on the first inconsistency; runtime
/// lookups must never hit a dangling effect reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate item id {item}")]
    DuplicateItemId { item: ItemId },

    #[error("duplicate effect id {effect}")]
    DuplicateEffectId { effect: EffectId },

    /// An item references an effect id the catalog does not define.
    #[error("{item} references unknown {effect}")]
    UnknownEffect { item: ItemId, effect: EffectId },

    /// Potion durations are strictly positive; a zero-duration potion
    /// would schedule an expiry that fires before its application is
    /// observable.
    #[error("{item} is a potion with zero duration")]
    InvalidPotionDuration { item: ItemId },
}

impl GameError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateItemId { .. } => "CATALOG_DUPLICATE_ITEM_ID",
            Self::DuplicateEffectId { .. } => "CATALOG_DUPLICATE_EFFECT_ID",
            Self::UnknownEffect { .. } => "CATALOG_UNKNOWN_EFFECT",
            Self::InvalidPotionDuration { .. } => "CATALOG_INVALID_POTION_DURATION",
        }
    }
}

/// Immutable item/effect catalog.
///
/// Built once at startup from loaded content and shared read-only with
/// the runtime. Construction validates cross-references so downstream
/// code can treat lookup failures as stale-save artifacts rather than
/// content bugs.
#[derive(Clone, Debug, Default)]
pub struct ItemCatalog {
    items: HashMap<ItemId, ItemDefinition>,
    effects: HashMap<EffectId, EffectDefinition>,
}

impl ItemCatalog {
    /// Builds a catalog from raw definition lists.
    ///
    /// # Errors
    ///
    /// Rejects duplicate item/effect ids, effect references that do not
    /// resolve, and potions with a zero duration.
    pub fn from_parts(
        items: Vec<ItemDefinition>,
        effects: Vec<(EffectId, EffectDefinition)>,
    ) -> Result<Self, CatalogError> {
        let mut effect_map = HashMap::with_capacity(effects.len());
        for (id, definition) in effects {
            if effect_map.insert(id, definition).is_some() {
                return Err(CatalogError::DuplicateEffectId { effect: id });
            }
        }

        let mut item_map = HashMap::with_capacity(items.len());
        for item in items {
            for &effect in &item.effects {
                if !effect_map.contains_key(&effect) {
                    return Err(CatalogError::UnknownEffect {
                        item: item.id,
                        effect,
                    });
                }
            }
            if item.duration_ms() == Some(0) {
                return Err(CatalogError::InvalidPotionDuration { item: item.id });
            }
            let id = item.id;
            if item_map.insert(id, item).is_some() {
                return Err(CatalogError::DuplicateItemId { item: id });
            }
        }

        Ok(Self {
            items: item_map,
            effects: effect_map,
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All upgrade definitions, in arbitrary order.
    pub fn upgrades(&self) -> impl Iterator<Item = &ItemDefinition> {
        self.items
            .values()
            .filter(|item| item.class() == ItemClass::Upgrade)
    }

    /// All potion definitions, in arbitrary order.
    pub fn potions(&self) -> impl Iterator<Item = &ItemDefinition> {
        self.items
            .values()
            .filter(|item| item.class() == ItemClass::Potion)
    }
}

impl ItemOracle for ItemCatalog {
    fn item(&self, id: ItemId) -> Option<&ItemDefinition> {
        self.items.get(&id)
    }

    fn effect(&self, id: EffectId) -> Option<EffectDefinition> {
        self.effects.get(&id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use decay_core::{EffectKind, ItemKind, Rgba};

    fn item(id: u32, effects: Vec<EffectId>, kind: ItemKind) -> ItemDefinition {
        ItemDefinition::new(
            ItemId(id),
            format!("item {id}"),
            "",
            Rgba::default(),
            effects,
            kind,
        )
    }

    fn damage_effect() -> (EffectId, EffectDefinition) {
        (EffectId(0), EffectDefinition::new(EffectKind::Damage, 5.0))
    }

    #[test]
    fn valid_catalog_resolves_items_and_effects() {
        let catalog = ItemCatalog::from_parts(
            vec![
                item(1, vec![EffectId(0)], ItemKind::Upgrade),
                item(2, vec![EffectId(0)], ItemKind::Potion { duration_ms: 500 }),
            ],
            vec![damage_effect()],
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.item(ItemId(1)).unwrap().id, ItemId(1));
        assert_eq!(catalog.effect(EffectId(0)).unwrap().value, 5.0);
        assert!(catalog.item(ItemId(9)).is_none());
        assert_eq!(catalog.upgrades().count(), 1);
        assert_eq!(catalog.potions().count(), 1);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = ItemCatalog::from_parts(
            vec![
                item(1, vec![], ItemKind::Upgrade),
                item(1, vec![], ItemKind::Upgrade),
            ],
            vec![],
        )
        .unwrap_err();
        assert_eq!(err, CatalogError::DuplicateItemId { item: ItemId(1) });

        let err = ItemCatalog::from_parts(vec![], vec![damage_effect(), damage_effect()])
            .unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateEffectId {
                effect: EffectId(0)
            }
        );
    }

    #[test]
    fn dangling_effect_reference_is_rejected() {
        let err = ItemCatalog::from_parts(
            vec![item(1, vec![EffectId(7)], ItemKind::Upgrade)],
            vec![damage_effect()],
        )
        .unwrap_err();
        assert_eq!(
            err,
            CatalogError::UnknownEffect {
                item: ItemId(1),
                effect: EffectId(7)
            }
        );
    }

    #[test]
    fn zero_duration_potion_is_rejected() {
        let err = ItemCatalog::from_parts(
            vec![item(1, vec![], ItemKind::Potion { duration_ms: 0 })],
            vec![],
        )
        .unwrap_err();
        assert_eq!(err, CatalogError::InvalidPotionDuration { item: ItemId(1) });
    }
}
