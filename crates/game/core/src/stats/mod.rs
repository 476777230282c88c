//! Stat state owned by an entity: modifier totals, the health pool, and
//! the dispatch surface effects act through.
mod health;
mod modifiers;
mod target;

pub use health::HealthPool;
pub use modifiers::{ModifierKind, ModifierState};
pub use target::{EffectTarget, StatConsumer};
