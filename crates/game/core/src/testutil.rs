//! Shared fixtures for the unit tests in this crate.

use std::collections::HashMap;

use crate::catalog::ItemOracle;
use crate::config::GameConfig;
use crate::item::{
    EffectDefinition, EffectId, ItemDefinition, ItemId, ItemKind, Rgba,
};

/// In-memory catalog backed by plain maps.
pub(crate) struct TestCatalog {
    items: HashMap<ItemId, ItemDefinition>,
    effects: HashMap<EffectId, EffectDefinition>,
}

impl TestCatalog {
    pub(crate) fn new(
        items: Vec<ItemDefinition>,
        effects: Vec<(EffectId, EffectDefinition)>,
    ) -> Self {
        Self {
            items: items.into_iter().map(|item| (item.id, item)).collect(),
            effects: effects.into_iter().collect(),
        }
    }
}

impl ItemOracle for TestCatalog {
    fn item(&self, id: ItemId) -> Option<&ItemDefinition> {
        self.items.get(&id)
    }

    fn effect(&self, id: EffectId) -> Option<EffectDefinition> {
        self.effects.get(&id).copied()
    }
}

/// A 2x2 grid with two hotbar slots; small enough to fill in a test.
pub(crate) fn small_config() -> GameConfig {
    GameConfig {
        grid_width: 2,
        grid_height: 2,
        hotbar_slots: 2,
        ..GameConfig::new()
    }
}

pub(crate) fn upgrade(id: u32) -> ItemDefinition {
    upgrade_with(id, Vec::new())
}

pub(crate) fn upgrade_with(id: u32, effects: Vec<EffectId>) -> ItemDefinition {
    ItemDefinition::new(
        ItemId(id),
        format!("upgrade {id}"),
        "test upgrade",
        Rgba::default(),
        effects,
        ItemKind::Upgrade,
    )
}

pub(crate) fn potion(id: u32) -> ItemDefinition {
    potion_with(id, 1_000, Vec::new())
}

pub(crate) fn potion_with(id: u32, duration_ms: u32, effects: Vec<EffectId>) -> ItemDefinition {
    ItemDefinition::new(
        ItemId(id),
        format!("potion {id}"),
        "test potion",
        Rgba::default(),
        effects,
        ItemKind::Potion { duration_ms },
    )
}
