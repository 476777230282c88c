//! End-to-end scenarios: catalog loading, pickups, potion timing, death
//! scatter, and persistence, driven through the public runtime API.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use decay_content::{CatalogLoader, ItemCatalog};
use decay_core::{
    GameConfig, HeldItem, ItemId, ItemOracle, ModifierState, SlotCoord, SlotType, Vec3,
};
use decay_runtime::{Event, InventoryEvent, Player, StatEvent, Topic, WorldSpawner};

const CATALOG_RON: &str = r#"(
    effects: [
        (id: 0, kind: Damage, value: 4.0),
        (id: 1, kind: Speed, value: 2.5),
        (id: 2, kind: Cooldown, value: -0.4),
        (id: 3, kind: Health, value: 30.0),
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
            effects: [1],
            kind: Potion(duration_ms: 5000),
        ),
        (
            id: 3,
            name: "Trigger Oil",
            description: "Shoot faster for a short while.",
            highlight_color: (r: 64, g: 64, b: 255, a: 255),
            effects: [2],
            kind: Potion(duration_ms: 3000),
        ),
        (
            id: 4,
            name: "Minor Healing Potion",
            description: "Restores a chunk of health.",
            highlight_color: (r: 255, g: 255, b: 64, a: 255),
            effects: [3],
            kind: Potion(duration_ms: 1000),
        ),
    ],
)"#;

fn catalog() -> Arc<ItemCatalog> {
    Arc::new(CatalogLoader::from_str(CATALOG_RON).expect("test catalog must parse"))
}

fn small_config() -> GameConfig {
    GameConfig {
        grid_width: 2,
        grid_height: 2,
        hotbar_slots: 2,
        ..GameConfig::new()
    }
}

fn player() -> Player {
    Player::builder(catalog()).config(small_config()).seed(7).build()
}

/// Moves the item at `from` into hotbar slot `index`.
fn to_hotbar(player: &mut Player, from: SlotCoord, index: i32) {
    player
        .swap_items(from, SlotType::Any, SlotCoord::hotbar(index), SlotType::Potion)
        .expect("swap into hotbar must succeed for potions");
}

#[derive(Clone, Default)]
struct RecordingSpawner(Arc<Mutex<Vec<ItemId>>>);

impl WorldSpawner for RecordingSpawner {
    fn spawn_ejected_item(&mut self, item: HeldItem, _impulse: Vec3) {
        self.0.lock().unwrap().push(item.id);
    }
}

#[tokio::test]
async fn upgrades_modify_stats_only_while_held() {
    let mut player = player();
    let base_damage = player.effective_damage();

    assert!(player.pickup(ItemId(1)).unwrap());
    assert_eq!(player.effective_damage(), base_damage + 4.0);

    player
        .remove_item(SlotCoord::new(0, 0), SlotType::Any)
        .unwrap();
    assert_eq!(player.effective_damage(), base_damage);
    assert_eq!(player.inventory().occupied(), 0);
}

#[tokio::test(start_paused = true)]
async fn potion_applies_then_reverts_on_expiry() {
    let mut player = player();
    let base_speed = player.effective_speed();

    player.pickup(ItemId(2)).unwrap();
    to_hotbar(&mut player, SlotCoord::new(0, 0), 0);
    assert!(player.use_active_potion(0).unwrap());

    assert!(player.inventory().hotbar_item(0).is_none(), "potion consumed");
    assert_eq!(player.effective_speed(), base_speed + 2.5);
    assert_eq!(player.active_effect_count(), 1);

    tokio::time::sleep(Duration::from_millis(4999)).await;
    player.poll_effects();
    assert_eq!(player.effective_speed(), base_speed + 2.5);

    tokio::time::sleep(Duration::from_millis(2)).await;
    player.poll_effects();
    assert_eq!(player.effective_speed(), base_speed);
    assert_eq!(player.active_effect_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn redrinking_a_potion_refreshes_instead_of_stacking() {
    let mut player = player();
    let base_speed = player.effective_speed();

    player.pickup(ItemId(2)).unwrap();
    player.pickup(ItemId(2)).unwrap();
    to_hotbar(&mut player, SlotCoord::new(0, 0), 0);
    to_hotbar(&mut player, SlotCoord::new(0, 1), 1);

    assert!(player.use_active_potion(0).unwrap());
    tokio::time::sleep(Duration::from_millis(3000)).await;

    // Second drink while the first is still active: same total, new timer.
    assert!(player.use_active_potion(1).unwrap());
    player.poll_effects();
    assert_eq!(player.effective_speed(), base_speed + 2.5, "must not stack");
    assert_eq!(player.active_effect_count(), 1);

    // Past the first potion's original expiry; the refreshed timer holds.
    tokio::time::sleep(Duration::from_millis(2500)).await;
    player.poll_effects();
    assert_eq!(player.effective_speed(), base_speed + 2.5);

    tokio::time::sleep(Duration::from_millis(3000)).await;
    player.poll_effects();
    assert_eq!(player.effective_speed(), base_speed);
}

#[tokio::test(start_paused = true)]
async fn distinct_potions_expire_independently() {
    let mut player = player();
    let base_cooldown = player.effective_cooldown();
    let base_speed = player.effective_speed();

    player.pickup(ItemId(2)).unwrap();
    player.pickup(ItemId(3)).unwrap();
    to_hotbar(&mut player, SlotCoord::new(0, 0), 0);
    to_hotbar(&mut player, SlotCoord::new(0, 1), 1);
    player.use_active_potion(0).unwrap();
    player.use_active_potion(1).unwrap();

    assert_eq!(player.effective_speed(), base_speed + 2.5);
    assert_eq!(player.effective_cooldown(), base_cooldown - 0.4);
    assert_eq!(player.active_effect_count(), 2);

    // Trigger Oil (3000ms) expires first.
    tokio::time::sleep(Duration::from_millis(3001)).await;
    player.poll_effects();
    assert_eq!(player.effective_cooldown(), base_cooldown);
    assert_eq!(player.effective_speed(), base_speed + 2.5);

    tokio::time::sleep(Duration::from_millis(2000)).await;
    player.poll_effects();
    assert_eq!(player.effective_speed(), base_speed);
}

#[tokio::test(start_paused = true)]
async fn healing_potion_is_one_shot() {
    let mut player = player();
    player.take_damage(50.0);
    let wounded = player.health().current();

    player.pickup(ItemId(4)).unwrap();
    to_hotbar(&mut player, SlotCoord::new(0, 0), 0);
    player.use_active_potion(0).unwrap();
    assert_eq!(player.health().current(), wounded + 30.0);

    // Expiry of a health effect reverts nothing.
    tokio::time::sleep(Duration::from_millis(1001)).await;
    player.poll_effects();
    assert_eq!(player.health().current(), wounded + 30.0);
}

#[tokio::test(start_paused = true)]
async fn death_scatters_inventory_and_cleanses_stats() {
    let spawner = RecordingSpawner::default();
    let mut player = Player::builder(catalog())
        .config(small_config())
        .spawner(Box::new(spawner.clone()))
        .seed(7)
        .build();
    let mut inventory_events = player.bus().subscribe(Topic::Inventory);
    let mut stat_events = player.bus().subscribe(Topic::Stats);

    player.pickup(ItemId(1)).unwrap();
    player.pickup(ItemId(1)).unwrap();
    player.pickup(ItemId(2)).unwrap();
    to_hotbar(&mut player, SlotCoord::new(1, 0), 0);
    player.use_active_potion(0).unwrap();
    let held = player.inventory().occupied();
    assert_eq!(held, 2);

    assert!(player.take_damage(1_000.0), "hit must be lethal");

    // Everything held is gone, all effects and modifiers with it.
    assert_eq!(player.inventory().occupied(), 0);
    assert_eq!(player.active_effect_count(), 0);
    assert_eq!(*player.modifiers(), ModifierState::default());
    assert_eq!(
        player.health().current(),
        player.health().max(),
        "respawn restores full health"
    );

    let mut saw_died = false;
    let mut saw_respawned = false;
    while let Ok(event) = stat_events.try_recv() {
        match event {
            Event::Stats(StatEvent::Died) => saw_died = true,
            Event::Stats(StatEvent::Respawned) => saw_respawned = true,
            _ => {}
        }
    }
    assert!(saw_died && saw_respawned);

    let scattered = std::iter::from_fn(|| inventory_events.try_recv().ok())
        .find_map(|event| match event {
            Event::Inventory(InventoryEvent::Scattered { deleted, ejected }) => {
                Some((deleted, ejected))
            }
            _ => None,
        })
        .expect("scatter event must be published");
    assert_eq!(scattered.0 + scattered.1, held);
    assert_eq!(spawner.0.lock().unwrap().len(), scattered.1);
}

#[tokio::test]
async fn second_lethal_hit_scatters_the_new_inventory_differently() {
    // Same player, two deaths: the per-death seed must differ so replays
    // of different deaths are independent.
    let spawner = RecordingSpawner::default();
    let mut player = Player::builder(catalog())
        .config(small_config())
        .spawner(Box::new(spawner.clone()))
        .seed(7)
        .build();

    for _ in 0..2 {
        for _ in 0..4 {
            player.pickup(ItemId(1)).unwrap();
        }
        assert!(player.take_damage(1_000.0));
        assert_eq!(player.inventory().occupied(), 0);
    }
}

#[tokio::test]
async fn save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");

    let mut original = player();
    original.pickup(ItemId(1)).unwrap();
    original.pickup(ItemId(2)).unwrap();
    to_hotbar(&mut original, SlotCoord::new(0, 1), 1);
    original.save(&path).unwrap();

    let mut restored = player();
    let dropped = restored.load(&path).unwrap();
    assert_eq!(dropped, 0);
    assert_eq!(
        restored.inventory().item_at(SlotCoord::new(0, 0)),
        original.inventory().item_at(SlotCoord::new(0, 0))
    );
    assert_eq!(
        restored.inventory().hotbar_item(1),
        original.inventory().hotbar_item(1)
    );
    assert_eq!(restored.effective_damage(), original.effective_damage());
}

#[tokio::test]
async fn loading_without_a_save_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let mut player = player();
    let dropped = player.load(&dir.path().join("missing.json")).unwrap();
    assert_eq!(dropped, 0);
    assert_eq!(player.inventory().occupied(), 0);
}

#[tokio::test]
async fn stale_save_entries_load_as_empty_slots() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");

    let save = decay_runtime::SaveFile {
        inventory: decay_core::SavedInventory {
            item_ids: vec![1, 999, -1, -1],
            hotbar_item_ids: vec![2, -1],
        },
    };
    save.write(&path).unwrap();

    let mut player = player();
    let dropped = player.load(&path).unwrap();
    assert_eq!(dropped, 1);
    assert_eq!(player.inventory().occupied(), 2);
    assert!(catalog().item(ItemId(999)).is_none());
}
