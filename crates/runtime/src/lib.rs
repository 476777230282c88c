//! Runtime orchestration for the inventory and effect-modifier engine.
//!
//! This crate wires the pure rules from `decay-core` and the content
//! catalog from `decay-content` into a live player state driven by a game
//! loop. Consumers embed [`Player`], subscribe to its [`EventBus`], and
//! call [`Player::poll_effects`] once per frame.
//!
//! Modules are organized by responsibility:
//! - [`player`] hosts the orchestrator and builder
//! - [`events`] provides a topic-based event bus for flexible event routing
//! - [`scheduler`] tracks timed-effect expiries on tokio timers
//! - [`spawn`] is the seam to the world items get ejected into
//! - [`save`] reads and writes the on-disk profile

pub mod error;
pub mod events;
pub mod player;
pub mod save;
pub mod scheduler;
pub mod spawn;

pub use error::{Result, RuntimeError};
pub use events::{Event, EventBus, InventoryEvent, StatEvent, Topic};
pub use player::{Player, PlayerBuilder};
pub use save::SaveFile;
pub use scheduler::EffectScheduler;
pub use spawn::{NullSpawner, WorldSpawner};
