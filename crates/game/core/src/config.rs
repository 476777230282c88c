/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct GameConfig {
    /// Width of the main inventory grid.
    pub grid_width: u32,
    /// Height of the main inventory grid.
    pub grid_height: u32,
    /// Number of active potion (hotbar) slots. Clamped to
    /// [`GameConfig::MAX_HOTBAR_SLOTS`] at matrix construction.
    pub hotbar_slots: usize,
    /// Probability that a held item is destroyed (rather than ejected)
    /// when the owning entity dies.
    pub deletion_chance: f32,
    /// Maximum player health.
    pub max_health: f32,
    /// Base projectile damage before item modifiers.
    pub base_damage: f32,
    /// Base fire cooldown in seconds before item modifiers.
    pub base_cooldown: f32,
    /// Base movement speed before item modifiers.
    pub base_speed: f32,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of hotbar slots any configuration may request.
    pub const MAX_HOTBAR_SLOTS: usize = 4;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_GRID_WIDTH: u32 = 5;
    pub const DEFAULT_GRID_HEIGHT: u32 = 3;
    pub const DEFAULT_HOTBAR_SLOTS: usize = 2;
    pub const DEFAULT_DELETION_CHANCE: f32 = 0.15;
    pub const DEFAULT_MAX_HEALTH: f32 = 100.0;
    pub const DEFAULT_BASE_DAMAGE: f32 = 10.0;
    pub const DEFAULT_BASE_COOLDOWN: f32 = 0.5;
    pub const DEFAULT_BASE_SPEED: f32 = 5.0;

    /// Lower bound for the effective fire cooldown after modifiers.
    pub const MIN_COOLDOWN: f32 = 0.01;

    pub fn new() -> Self {
        Self {
            grid_width: Self::DEFAULT_GRID_WIDTH,
            grid_height: Self::DEFAULT_GRID_HEIGHT,
            hotbar_slots: Self::DEFAULT_HOTBAR_SLOTS,
            deletion_chance: Self::DEFAULT_DELETION_CHANCE,
            max_health: Self::DEFAULT_MAX_HEALTH,
            base_damage: Self::DEFAULT_BASE_DAMAGE,
            base_cooldown: Self::DEFAULT_BASE_COOLDOWN,
            base_speed: Self::DEFAULT_BASE_SPEED,
        }
    }

    /// Total number of addressable slots: grid + hotbar + the deletion slot.
    pub fn total_slots(&self) -> usize {
        (self.grid_width * self.grid_height) as usize + self.hotbar_slots + 1
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
