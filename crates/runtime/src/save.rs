//! On-disk save file for the inventory layout.
//!
//! The file is a small JSON document wrapping the core codec's flattened
//! id lists. A missing file is not an error; it means a fresh profile.

use std::path::Path;

use serde::{Deserialize, Serialize};

use decay_core::SavedInventory;

use crate::error::Result;

/// Serialized player profile.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SaveFile {
    pub inventory: SavedInventory,
}

impl SaveFile {
    /// Reads a save file, returning `None` when it does not exist.
    pub fn read(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    /// Writes the save file, replacing any previous content.
    pub fn write(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
