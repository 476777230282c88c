//! Data-driven content definitions and loaders.
//!
//! This crate houses the validated item catalog and provides loaders for
//! RON/TOML data files:
//! - Item and effect catalogs (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//!
//! Content is consumed by the runtime through the [`decay_core::ItemOracle`]
//! trait and never appears in game state; slots and save files reference
//! items by id only.

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{CatalogError, ItemCatalog};

#[cfg(feature = "loaders")]
pub use loaders::{CatalogLoader, ConfigLoader};
