//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::broadcast;

use super::types::{InventoryEvent, StatEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Inventory layout changes (pickups, swaps, scatter)
    Inventory,
    /// Stat changes (modifier totals, health, death)
    Stats,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum Event {
    Inventory(InventoryEvent),
    Stats(StatEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Inventory(_) => Topic::Inventory,
            Event::Stats(_) => Topic::Stats,
        }
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. The topic set is fixed, so the channels are
/// created once up front and never locked.
#[derive(Clone)]
pub struct EventBus {
    channels: Arc<Channels>,
}

struct Channels {
    inventory: broadcast::Sender<Event>,
    stats: broadcast::Sender<Event>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            channels: Arc::new(Channels {
                inventory: broadcast::channel(capacity).0,
                stats: broadcast::channel(capacity).0,
            }),
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.sender(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.sender(topic).subscribe()
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Inventory => &self.channels.inventory,
            Topic::Stats => &self.channels.stats,
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
