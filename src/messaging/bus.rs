/// Event bus for pub/sub messaging
///
/// Controllers publish what happened; the runtime log and tests subscribe.

use crossbeam_channel::{unbounded, Receiver, Sender};
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;

use super::events::Event;

/// Subscriber ID for tracking subscriptions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(usize);

struct Subscriber {
    id: SubscriberId,
    sender: Sender<Event>,
}

/// Event bus broadcasting to every subscriber. Clones share subscribers.
#[derive(Clone)]
pub struct EventBus {
    subscribers: Arc<RwLock<Vec<Subscriber>>>,
    next_id: Arc<Mutex<usize>>,
}

impl EventBus {
    /// Create a new event bus
    pub fn new() -> Self {
        Self {
            subscribers: Arc::new(RwLock::new(Vec::new())),
            next_id: Arc::new(Mutex::new(0)),
        }
    }

    /// Subscribe to events, returns a receiver and subscription ID
    pub fn subscribe(&self) -> (Receiver<Event>, SubscriberId) {
        let (tx, rx) = unbounded();

        let id = {
            let mut next_id = self.next_id.lock();
            let id = SubscriberId(*next_id);
            *next_id += 1;
            id
        };

        self.subscribers.write().push(Subscriber { id, sender: tx });
        (rx, id)
    }

    /// Unsubscribe from events
    pub fn unsubscribe(&self, id: SubscriberId) {
        self.subscribers.write().retain(|s| s.id != id);
    }

    /// Publish an event to all subscribers, dropping ones whose receiver is gone
    pub fn publish(&self, event: Event) {
        tracing::debug!(event = %event.description(), "publish");

        let mut closed = Vec::new();
        for subscriber in self.subscribers.read().iter() {
            if subscriber.sender.try_send(event.clone()).is_err() {
                closed.push(subscriber.id);
            }
        }

        if !closed.is_empty() {
            self.subscribers
                .write()
                .retain(|s| !closed.contains(&s.id));
        }
    }

    /// Get number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().len()
    }

    /// Clear all subscribers
    pub fn clear(&self) {
        self.subscribers.write().clear();
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_bus_subscribe() {
        let bus = EventBus::new();
        let (_rx, _id) = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 1);
    }

    #[test]
    fn test_event_bus_unsubscribe() {
        let bus = EventBus::new();
        let (_rx, id) = bus.subscribe();

        bus.unsubscribe(id);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn test_event_bus_publish_to_all() {
        let bus = EventBus::new();
        let (rx1, _) = bus.subscribe();
        let (rx2, _) = bus.subscribe();

        bus.publish(Event::PipelineFinished);

        assert_eq!(rx1.try_recv().unwrap(), Event::PipelineFinished);
        assert_eq!(rx2.try_recv().unwrap(), Event::PipelineFinished);
    }

    #[test]
    fn test_dropped_receivers_are_pruned() {
        let bus = EventBus::new();
        let (rx, _) = bus.subscribe();
        let (_kept, _) = bus.subscribe();
        drop(rx);

        bus.publish(Event::WizardReset);
        assert_eq!(bus.subscriber_count(), 1);
    }

    #[test]
    fn test_event_bus_clone_shares_subscribers() {
        let bus1 = EventBus::new();
        let bus2 = bus1.clone();

        let (rx, _) = bus1.subscribe();
        bus2.publish(Event::ChatToggled { open: true });

        assert_eq!(rx.try_recv().unwrap(), Event::ChatToggled { open: true });
        assert_eq!(bus2.subscriber_count(), 1);
    }
}
