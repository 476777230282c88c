//! Item catalog loader.

use std::path::Path;

use decay_core::{EffectDefinition, EffectId, EffectKind, ItemDefinition};
use serde::{Deserialize, Serialize};

use crate::catalog::ItemCatalog;
use crate::loaders::{LoadResult, read_file};

/// One effect row in a catalog file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EffectEntry {
    pub id: EffectId,
    pub kind: EffectKind,
    pub value: f32,
}

/// Catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub effects: Vec<EffectEntry>,
    pub items: Vec<ItemDefinition>,
}

/// Loader for item catalogs from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load a validated item catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<ItemCatalog> {
        let content = read_file(path)?;
        Self::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load item catalog {}: {}", path.display(), e))
    }

    /// Parse and validate a catalog from RON text.
    pub fn from_str(content: &str) -> LoadResult<ItemCatalog> {
        let file: CatalogFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        let effects = file
            .effects
            .into_iter()
            .map(|entry| (entry.id, EffectDefinition::new(entry.kind, entry.value)))
            .collect();

        Ok(ItemCatalog::from_parts(file.items, effects)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use decay_core::{ItemClass, ItemId, ItemOracle};

    const CATALOG_RON: &str = r#"(
        effects: [
            (id: 0, kind: Damage, value: 5.0),
            (id: 1, kind: Health, value: 25.0),
            (id: 2, kind: Speed, value: 2.0),
        ],
        items: [
            (
                id: 1,
                name: "Sharpened Rounds",
                description: "Projectiles hit harder.",
                highlight_color: (r: 255, g: 64, b: 64, a: 255),
                effects: [0],
                kind: Upgrade,
            ),
            (
                id: 2,
                name: "Swiftness Potion",
                description: "Move faster for a short while.",
                highlight_color: (r: 64, g: 255, b: 64, a: 255),
                effects: [2],
                kind: Potion(duration_ms: 5000),
            ),
        ],
    )"#;

    #[test]
    fn parses_catalog_ron() {
        let catalog = CatalogLoader::from_str(CATALOG_RON).unwrap();
        assert_eq!(catalog.len(), 2);

        let upgrade = catalog.item(ItemId(1)).unwrap();
        assert_eq!(upgrade.name, "Sharpened Rounds");
        assert_eq!(upgrade.class(), ItemClass::Upgrade);

        let potion = catalog.item(ItemId(2)).unwrap();
        assert_eq!(potion.duration_ms(), Some(5000));
        assert_eq!(catalog.effect(EffectId(2)).unwrap().value, 2.0);
    }

    #[test]
    fn rejects_malformed_ron() {
        assert!(CatalogLoader::from_str("(effects: [").is_err());
    }

    #[test]
    fn rejects_invalid_catalog() {
        // Parses fine but references an undefined effect.
        let ron = r#"(
            effects: [],
            items: [(
                id: 1,
                name: "Broken",
                description: "",
                highlight_color: (r: 0, g: 0, b: 0, a: 0),
                effects: [9],
                kind: Upgrade,
            )],
        )"#;
        assert!(CatalogLoader::from_str(ron).is_err());
    }
}
