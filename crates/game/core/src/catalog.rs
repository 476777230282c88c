//! Read-only item content access.
//!
//! The oracle trait decouples the pure rules from how content is stored;
//! the content crate provides the catalog implementation backed by
//! RON files, tests provide small in-memory stubs.

use crate::item::{EffectDefinition, EffectId, ItemDefinition, ItemId};

/// Read-only lookup of item and effect definitions.
///
/// Implementations are expected to resolve ids in O(1) after construction.
pub trait ItemOracle: Send + Sync {
    /// Returns the definition for `id`, or `None` if the id is unknown.
    fn item(&self, id: ItemId) -> Option<&ItemDefinition>;

    /// Returns the effect stored at index `id` in the effect table.
    fn effect(&self, id: EffectId) -> Option<EffectDefinition>;
}
