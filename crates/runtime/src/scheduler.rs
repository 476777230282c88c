//! Timed-effect scheduler for consumed potions.
//!
//! Each active effect owns one sleeping tokio task that reports expiry
//! through an unbounded channel; the owner drains the channel from its
//! update loop via [`EffectScheduler::poll_expired`], so all stat mutation
//! stays on the owner's side.
//!
//! Entries are keyed by [`EffectId`]: consuming a potion whose effect is
//! already active replaces the pending expiry instead of stacking a second
//! one. Every schedule bumps a generation counter, and expiry notices
//! carry the generation they were scheduled under; a notice from a
//! replaced or cancelled timer no longer matches and is discarded.

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use decay_core::{EffectDefinition, EffectId};

struct PendingEffect {
    effect: EffectDefinition,
    generation: u64,
    timer: JoinHandle<()>,
}

struct ExpiryNotice {
    effect: EffectId,
    generation: u64,
}

/// Tracks the pending expiries of applied timed effects.
///
/// Must live inside a tokio runtime; timers are spawned tasks.
pub struct EffectScheduler {
    pending: HashMap<EffectId, PendingEffect>,
    generation: u64,
    expiry_tx: mpsc::UnboundedSender<ExpiryNotice>,
    expiry_rx: mpsc::UnboundedReceiver<ExpiryNotice>,
}

impl EffectScheduler {
    pub fn new() -> Self {
        let (expiry_tx, expiry_rx) = mpsc::unbounded_channel();
        Self {
            pending: HashMap::new(),
            generation: 0,
            expiry_tx,
            expiry_rx,
        }
    }

    /// Number of currently active timed effects.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Whether `id` has a pending expiry.
    pub fn is_active(&self, id: EffectId) -> bool {
        self.pending.contains_key(&id)
    }

    /// The definitions of all currently active effects.
    pub fn active_effects(&self) -> impl Iterator<Item = EffectDefinition> + '_ {
        self.pending.values().map(|pending| pending.effect)
    }

    /// Schedules an expiry for `effect` after `duration`.
    ///
    /// If the same effect id is already pending, its timer is cancelled
    /// and its definition returned; the caller must revert that earlier
    /// application before applying the new one.
    pub fn schedule(
        &mut self,
        id: EffectId,
        effect: EffectDefinition,
        duration: Duration,
    ) -> Option<EffectDefinition> {
        self.generation += 1;
        let generation = self.generation;

        let tx = self.expiry_tx.clone();
        let timer = tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            // The receiver lives as long as the scheduler; a send failure
            // just means the scheduler is already gone.
            let _ = tx.send(ExpiryNotice {
                effect: id,
                generation,
            });
        });

        let replaced = self.pending.insert(
            id,
            PendingEffect {
                effect,
                generation,
                timer,
            },
        );
        replaced.map(|old| {
            old.timer.abort();
            tracing::debug!(effect = %id, "replaced pending effect expiry");
            old.effect
        })
    }

    /// Drains expiry notices and returns the effects whose time is up.
    ///
    /// The caller reverts each returned effect. Notices from timers that
    /// were replaced or cancelled after sending are ignored.
    pub fn poll_expired(&mut self) -> Vec<EffectDefinition> {
        let mut expired = Vec::new();
        while let Ok(notice) = self.expiry_rx.try_recv() {
            let current = self
                .pending
                .get(&notice.effect)
                .is_some_and(|pending| pending.generation == notice.generation);
            if !current {
                tracing::trace!(effect = %notice.effect, "dropping stale expiry notice");
                continue;
            }
            if let Some(pending) = self.pending.remove(&notice.effect) {
                expired.push(pending.effect);
            }
        }
        expired
    }

    /// Cancels the pending expiry for `id`, returning its definition so
    /// the caller can revert it.
    pub fn cancel(&mut self, id: EffectId) -> Option<EffectDefinition> {
        self.pending.remove(&id).map(|pending| {
            pending.timer.abort();
            pending.effect
        })
    }

    /// Cancels every pending expiry (death, scene teardown) and returns
    /// the definitions to revert.
    pub fn cancel_all(&mut self) -> Vec<EffectDefinition> {
        self.pending
            .drain()
            .map(|(_, pending)| {
                pending.timer.abort();
                pending.effect
            })
            .collect()
    }
}

impl Default for EffectScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for EffectScheduler {
    fn drop(&mut self) {
        for pending in self.pending.values() {
            pending.timer.abort();
        }
    }
}
