//! Item and effect data model.
//!
//! Definitions are immutable, catalog-owned content. Slots and scheduling
//! state never hold definitions directly; they reference them through
//! [`ItemId`] and [`EffectId`] and resolve on demand via
//! [`crate::ItemOracle`].

/// Unique identifier of an item definition (lookup via [`crate::ItemOracle`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemId(pub u32);

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

/// Index of an effect definition in the catalog's effect table.
///
/// Effects are stored once and shared between items; the scheduler keys
/// its pending-expiry map by this index, which guarantees at most one live
/// timer per effect identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EffectId(pub u32);

impl core::fmt::Display for EffectId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "effect#{}", self.0)
    }
}

/// RGBA color used for item highlight tinting in the UI layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// 3D vector used for eject impulse hints handed to the world spawner.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Stat an effect acts on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum EffectKind {
    /// One-shot heal (positive value) or damage (negative value).
    Health,
    /// Additive projectile damage modifier.
    Damage,
    /// Additive movement speed modifier.
    Speed,
    /// Additive fire cooldown modifier (negative values shoot faster).
    Cooldown,
}

/// A single stat-changing effect. Pure data, holds no per-instance state.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectDefinition {
    pub kind: EffectKind,
    /// Signed magnitude; for `Health` the sign selects heal vs damage.
    pub value: f32,
}

impl EffectDefinition {
    pub const fn new(kind: EffectKind, value: f32) -> Self {
        Self { kind, value }
    }
}

/// Item type with type-specific data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    /// Passive upgrade; its effects contribute to the modifier totals for
    /// as long as the item sits in the inventory.
    Upgrade,

    /// Consumable potion; its effects are applied once and reverted after
    /// the duration elapses.
    Potion {
        /// Effect duration in milliseconds. Strictly positive.
        duration_ms: u32,
    },
}

impl ItemKind {
    /// The slot-rule class of this kind.
    pub const fn class(&self) -> ItemClass {
        match self {
            Self::Upgrade => ItemClass::Upgrade,
            Self::Potion { .. } => ItemClass::Potion,
        }
    }
}

/// Coarse item class used by slot-compatibility rules.
///
/// Carried inside [`HeldItem`] so placement and swap validation never need
/// a catalog lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ItemClass {
    Upgrade,
    Potion,
}

/// Immutable item definition, owned by the catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    /// Highlight color for world drops and inventory tooltips.
    pub highlight_color: Rgba,
    /// Ordered effect references into the catalog's effect table.
    pub effects: Vec<EffectId>,
    pub kind: ItemKind,
}

impl ItemDefinition {
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        description: impl Into<String>,
        highlight_color: Rgba,
        effects: Vec<EffectId>,
        kind: ItemKind,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            highlight_color,
            effects,
            kind,
        }
    }

    /// The slot-rule class of this item.
    pub const fn class(&self) -> ItemClass {
        self.kind.class()
    }

    /// Potion duration in milliseconds, if this is a potion.
    pub const fn duration_ms(&self) -> Option<u32> {
        match self.kind {
            ItemKind::Potion { duration_ms } => Some(duration_ms),
            ItemKind::Upgrade => None,
        }
    }
}

/// Lightweight reference stored inside an occupied slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeldItem {
    pub id: ItemId,
    pub class: ItemClass,
}

impl HeldItem {
    pub fn new(id: ItemId, class: ItemClass) -> Self {
        Self { id, class }
    }

    /// Builds the slot reference for a definition.
    pub fn of(definition: &ItemDefinition) -> Self {
        Self::new(definition.id, definition.class())
    }
}
