//! The player-state orchestrator.
//!
//! [`Player`] owns the inventory matrix, the stat state, and the effect
//! scheduler, and is the only writer to any of them. Every mutating
//! operation ends by rebuilding the modifier totals from the inventory
//! plus the scheduler's active set and publishing the result, so
//! subscribers never observe a half-applied change.
//!
//! Timed effects do not mutate anything from their timer tasks; the game
//! loop calls [`Player::poll_effects`] once per frame to fold expiries in.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use decay_core::{
    DeathOutcome, EffectKind, EffectTarget, GameConfig, HealthPool, HeldItem, InventoryMatrix,
    ItemId, ItemOracle, ModifierKind, ModifierState, PcgRng, RngOracle, SavedInventory, SlotCoord,
    SlotType, StatConsumer, Vec3, compute_seed, scatter_on_death,
};

use crate::error::{Result, RuntimeError};
use crate::events::{Event, EventBus, InventoryEvent, StatEvent};
use crate::save::SaveFile;
use crate::scheduler::EffectScheduler;
use crate::spawn::{NullSpawner, WorldSpawner};

/// Vertical component of a manual drop's impulse hint.
const DROP_LIFT: f32 = 0.5;

/// Player-owned inventory, stats, and effect timing.
pub struct Player {
    config: GameConfig,
    catalog: Arc<dyn ItemOracle>,
    matrix: InventoryMatrix,
    modifiers: ModifierState,
    health: HealthPool,
    scheduler: EffectScheduler,
    bus: EventBus,
    spawner: Box<dyn WorldSpawner>,
    consumers: Vec<Box<dyn StatConsumer>>,
    seed: u64,
    deaths: u64,
}

impl Player {
    pub fn builder(catalog: Arc<dyn ItemOracle>) -> PlayerBuilder {
        PlayerBuilder::new(catalog)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn inventory(&self) -> &InventoryMatrix {
        &self.matrix
    }

    pub fn modifiers(&self) -> &ModifierState {
        &self.modifiers
    }

    pub fn health(&self) -> &HealthPool {
        &self.health
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    /// Number of timed effects currently awaiting expiry.
    pub fn active_effect_count(&self) -> usize {
        self.scheduler.len()
    }

    /// Effective projectile damage: base plus modifier total.
    pub fn effective_damage(&self) -> f32 {
        self.modifiers.damage_with(self.config.base_damage)
    }

    /// Effective movement speed: base plus modifier total.
    pub fn effective_speed(&self) -> f32 {
        self.modifiers.speed_with(self.config.base_speed)
    }

    /// Effective fire cooldown: base plus modifier total, floored.
    pub fn effective_cooldown(&self) -> f32 {
        self.modifiers.cooldown_with(self.config.base_cooldown)
    }

    /// Registers a synchronous stat observer (combat, movement, UI).
    pub fn add_consumer(&mut self, consumer: Box<dyn StatConsumer>) {
        self.consumers.push(consumer);
    }

    // ========================================================================
    // Inventory operations
    // ========================================================================

    /// Picks an item up from the world into the first free grid slot.
    ///
    /// Returns `false` (and leaves the item in the world) when the grid is
    /// full.
    ///
    /// # Errors
    ///
    /// [`RuntimeError::UnknownItem`] if the id does not resolve through
    /// the catalog.
    pub fn pickup(&mut self, item: ItemId) -> Result<bool> {
        let catalog = Arc::clone(&self.catalog);
        let definition = catalog
            .item(item)
            .ok_or(RuntimeError::UnknownItem { item })?;

        if self.matrix.place(definition) {
            tracing::debug!(%item, "picked up item");
            self.sync_inventory();
            Ok(true)
        } else {
            tracing::debug!(%item, "pickup rejected, inventory full");
            self.bus
                .publish(Event::Inventory(InventoryEvent::PickupRejected { item }));
            Ok(false)
        }
    }

    /// Removes and returns the item at a slot, without spawning anything.
    ///
    /// This is also the deletion-slot path: dropping an item onto the
    /// deletion slot removes it from its source slot and discards it.
    pub fn remove_item(
        &mut self,
        coord: SlotCoord,
        slot_type: SlotType,
    ) -> Result<Option<HeldItem>> {
        let removed = self.matrix.remove_at(coord, slot_type)?;
        if removed.is_some() {
            self.sync_inventory();
        }
        Ok(removed)
    }

    /// Removes the item at a slot and ejects it back into the world.
    pub fn drop_item(&mut self, coord: SlotCoord, slot_type: SlotType) -> Result<Option<HeldItem>> {
        let Some(item) = self.matrix.remove_at(coord, slot_type)? else {
            return Ok(None);
        };

        let roll = compute_seed(self.seed, self.matrix.revision(), 0);
        let impulse = Vec3::new(
            PcgRng.roll_signed_unit(compute_seed(roll, 0, 1)),
            DROP_LIFT,
            PcgRng.roll_signed_unit(compute_seed(roll, 0, 2)),
        );
        self.spawner.spawn_ejected_item(item, impulse);
        self.sync_inventory();
        Ok(Some(item))
    }

    /// Exchanges the contents of two slots (UI drag-and-drop).
    pub fn swap_items(
        &mut self,
        from: SlotCoord,
        from_type: SlotType,
        to: SlotCoord,
        to_type: SlotType,
    ) -> Result<()> {
        let revision = self.matrix.revision();
        self.matrix.swap(from, from_type, to, to_type)?;
        if self.matrix.revision() != revision {
            self.sync_inventory();
        }
        Ok(())
    }

    // ========================================================================
    // Potions and timed effects
    // ========================================================================

    /// Consumes the potion in hotbar slot `index`.
    ///
    /// Health effects apply immediately; the other effects apply now and
    /// are scheduled to revert after the potion's duration. Re-drinking a
    /// potion whose effect is still active refreshes that effect's timer
    /// rather than stacking a second delta.
    ///
    /// Returns `false` if the slot is empty or the potion cannot be
    /// resolved (it is discarded in the latter case).
    pub fn use_active_potion(&mut self, index: usize) -> Result<bool> {
        let Some(held) = self.matrix.hotbar_item(index) else {
            return Ok(false);
        };
        let coord = SlotCoord::hotbar(index as i32);

        let catalog = Arc::clone(&self.catalog);
        let Some(definition) = catalog.item(held.id) else {
            tracing::warn!(item = %held.id, "hotbar potion missing from catalog, discarding");
            self.matrix.remove_at(coord, SlotType::Potion)?;
            self.sync_inventory();
            return Ok(false);
        };
        let Some(duration_ms) = definition.duration_ms() else {
            tracing::warn!(item = %held.id, "hotbar item is not a potion, discarding");
            self.matrix.remove_at(coord, SlotType::Potion)?;
            self.sync_inventory();
            return Ok(false);
        };

        self.matrix.remove_at(coord, SlotType::Potion)?;
        let duration = Duration::from_millis(u64::from(duration_ms));

        let mut health_changed = false;
        for &effect_id in &definition.effects {
            let Some(effect) = catalog.effect(effect_id) else {
                tracing::warn!(item = %held.id, effect = %effect_id, "skipping unknown effect");
                continue;
            };
            if effect.kind == EffectKind::Health {
                // One-shot; never scheduled, never reverted.
                let mut target = EffectTarget::new(&mut self.health, &mut self.modifiers);
                target.apply(effect);
                health_changed = true;
            } else if self.scheduler.schedule(effect_id, effect, duration).is_some() {
                tracing::debug!(effect = %effect_id, "effect already active, timer refreshed");
            }
        }
        tracing::info!(item = %held.id, ?duration, "potion consumed");

        self.sync_inventory();
        if health_changed {
            self.publish_health();
            if self.health.is_dead() {
                self.die();
            }
        }
        Ok(true)
    }

    /// Folds expired effects into the stat state.
    ///
    /// Call once per game-loop iteration; does nothing when no timer has
    /// fired since the last call.
    pub fn poll_effects(&mut self) {
        let expired = self.scheduler.poll_expired();
        if expired.is_empty() {
            return;
        }
        for effect in &expired {
            tracing::debug!(kind = %effect.kind, value = effect.value, "timed effect expired");
        }
        self.refresh_modifiers();
        self.publish_modifiers();
    }

    // ========================================================================
    // Health and death
    // ========================================================================

    /// Applies damage. Returns `true` when this hit was lethal; the death
    /// transaction (effect cancellation, inventory scatter, respawn) has
    /// already run by the time this returns.
    pub fn take_damage(&mut self, amount: f32) -> bool {
        let died = self.health.damage(amount);
        self.publish_health();
        if died {
            self.die();
        }
        died
    }

    pub fn heal(&mut self, amount: f32) {
        self.health.heal(amount);
        self.publish_health();
    }

    fn die(&mut self) {
        tracing::info!(deaths = self.deaths + 1, "player died, scattering inventory");
        self.bus.publish(Event::Stats(StatEvent::Died));
        for consumer in &mut self.consumers {
            consumer.on_death();
        }

        // Active potion effects end with the life they were drunk in.
        self.scheduler.cancel_all();

        let death_seed = compute_seed(self.seed, self.deaths, 0);
        self.deaths += 1;
        let drops = scatter_on_death(
            &mut self.matrix,
            &mut self.modifiers,
            &PcgRng,
            death_seed,
            self.config.deletion_chance,
        );

        let (mut deleted, mut ejected) = (0, 0);
        for drop in drops {
            match drop.outcome {
                DeathOutcome::Deleted => deleted += 1,
                DeathOutcome::Ejected { impulse } => {
                    ejected += 1;
                    self.spawner.spawn_ejected_item(drop.item, impulse);
                }
            }
        }
        tracing::info!(deleted, ejected, "inventory scattered");
        self.bus
            .publish(Event::Inventory(InventoryEvent::Scattered { deleted, ejected }));

        self.health.reset();
        self.publish_health();
        self.bus.publish(Event::Stats(StatEvent::Respawned));
        self.sync_inventory();
    }

    // ========================================================================
    // Persistence
    // ========================================================================

    /// Writes the inventory layout to `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        let save = SaveFile {
            inventory: SavedInventory::encode(&self.matrix),
        };
        save.write(path)?;
        tracing::info!(path = %path.display(), "inventory saved");
        Ok(())
    }

    /// Restores the inventory layout from `path`.
    ///
    /// A missing file leaves the inventory empty. Returns the number of
    /// saved entries that no longer resolve and were dropped.
    pub fn load(&mut self, path: &Path) -> Result<usize> {
        let Some(save) = SaveFile::read(path)? else {
            tracing::info!(path = %path.display(), "no save file, starting empty");
            return Ok(0);
        };

        let catalog = Arc::clone(&self.catalog);
        let dropped = save.inventory.decode(catalog.as_ref(), &mut self.matrix)?;
        if dropped > 0 {
            tracing::warn!(dropped, "save referenced unknown items, slots left empty");
        }
        self.sync_inventory();
        Ok(dropped)
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Rebuilds the modifier totals: passive upgrades from the inventory
    /// plus whatever timed effects are still active.
    fn refresh_modifiers(&mut self) {
        let catalog = Arc::clone(&self.catalog);
        self.modifiers.recompute(&self.matrix, catalog.as_ref());
        for effect in self.scheduler.active_effects() {
            if let Some(kind) = ModifierKind::from_effect(effect.kind) {
                self.modifiers.apply(kind, effect.value);
            }
        }
    }

    fn sync_inventory(&mut self) {
        self.refresh_modifiers();
        self.bus.publish(Event::Inventory(InventoryEvent::Updated {
            revision: self.matrix.revision(),
        }));
        self.publish_modifiers();
    }

    fn publish_modifiers(&mut self) {
        for kind in ModifierKind::ALL {
            let total = self.modifiers.get(kind);
            self.bus
                .publish(Event::Stats(StatEvent::ModifierChanged { kind, total }));
            for consumer in &mut self.consumers {
                consumer.on_modifier_changed(kind, total);
            }
        }
    }

    fn publish_health(&mut self) {
        let (current, max) = (self.health.current(), self.health.max());
        self.bus
            .publish(Event::Stats(StatEvent::HealthChanged { current, max }));
        for consumer in &mut self.consumers {
            consumer.on_health_changed(current, max);
        }
    }
}

/// Builder for [`Player`].
pub struct PlayerBuilder {
    catalog: Arc<dyn ItemOracle>,
    config: GameConfig,
    spawner: Box<dyn WorldSpawner>,
    bus: EventBus,
    seed: Option<u64>,
}

impl PlayerBuilder {
    pub fn new(catalog: Arc<dyn ItemOracle>) -> Self {
        Self {
            catalog,
            config: GameConfig::new(),
            spawner: Box::new(NullSpawner),
            bus: EventBus::new(),
            seed: None,
        }
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn spawner(mut self, spawner: Box<dyn WorldSpawner>) -> Self {
        self.spawner = spawner;
        self
    }

    pub fn bus(mut self, bus: EventBus) -> Self {
        self.bus = bus;
        self
    }

    /// Fixes the scatter seed; random when unset.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn build(self) -> Player {
        Player {
            matrix: InventoryMatrix::new(&self.config),
            modifiers: ModifierState::new(),
            health: HealthPool::new(self.config.max_health),
            scheduler: EffectScheduler::new(),
            catalog: self.catalog,
            spawner: self.spawner,
            bus: self.bus,
            consumers: Vec::new(),
            seed: self.seed.unwrap_or_else(rand::random),
            deaths: 0,
            config: self.config,
        }
    }
}
