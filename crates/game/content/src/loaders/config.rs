//! Game configuration loader.

use std::path::Path;

use decay_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to the [`GameConfig`] defaults, so a config
    /// file only needs to list the values it overrides.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        let config: GameConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_overrides_defaults() {
        let config: GameConfig = toml::from_str(
            r#"
            grid_width = 6
            grid_height = 4
            deletion_chance = 0.25
            "#,
        )
        .unwrap();

        assert_eq!(config.grid_width, 6);
        assert_eq!(config.grid_height, 4);
        assert_eq!(config.deletion_chance, 0.25);
        assert_eq!(config.hotbar_slots, GameConfig::DEFAULT_HOTBAR_SLOTS);
        assert_eq!(config.max_health, GameConfig::DEFAULT_MAX_HEALTH);
    }

    #[test]
    fn empty_config_is_all_defaults() {
        let config: GameConfig = toml::from_str("").unwrap();
        assert_eq!(config, GameConfig::new());
    }
}
