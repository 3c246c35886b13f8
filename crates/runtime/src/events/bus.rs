//! Topic-based listener registry.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::types::{ActionEvent, RoomEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Committed and rejected moves
    Action,
    /// Room transitions
    Room,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    Action(ActionEvent),
    Room(RoomEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Action(_) => Topic::Action,
            Event::Room(_) => Topic::Room,
        }
    }
}

impl From<ActionEvent> for Event {
    fn from(event: ActionEvent) -> Self {
        Event::Action(event)
    }
}

impl From<RoomEvent> for Event {
    fn from(event: RoomEvent) -> Self {
        Event::Room(event)
    }
}

/// Handle returned by [`EventBus::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&Event)>;

/// Topic-based event bus
///
/// Listeners are registered explicitly by the composing application and
/// called synchronously, in registration order, when an event of their
/// topic is published.
#[derive(Default)]
pub struct EventBus {
    listeners: HashMap<Topic, Vec<(SubscriptionId, Listener)>>,
    next_id: u64,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener` for events on `topic`.
    pub fn subscribe(
        &mut self,
        topic: Topic,
        listener: impl FnMut(&Event) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners
            .entry(topic)
            .or_default()
            .push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns false when `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let mut removed = false;
        for listeners in self.listeners.values_mut() {
            let before = listeners.len();
            listeners.retain(|(listener_id, _)| *listener_id != id);
            removed |= listeners.len() != before;
        }
        removed
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&mut self, event: impl Into<Event>) {
        let event = event.into();
        let topic = event.topic();
        match self.listeners.get_mut(&topic) {
            Some(listeners) if !listeners.is_empty() => {
                for (_, listener) in listeners.iter_mut() {
                    listener(&event);
                }
            }
            _ => tracing::trace!("No subscribers for topic {:?}", topic),
        }
    }

    pub fn listener_count(&self, topic: Topic) -> usize {
        self.listeners.get(&topic).map_or(0, Vec::len)
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("action_listeners", &self.listener_count(Topic::Action))
            .field("room_listeners", &self.listener_count(Topic::Room))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder(bus: &mut EventBus, topic: Topic) -> (SubscriptionId, Rc<RefCell<Vec<Event>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let id = bus.subscribe(topic, move |event| sink.borrow_mut().push(event.clone()));
        (id, seen)
    }

    #[test]
    fn events_reach_only_their_topic() {
        let mut bus = EventBus::new();
        let (_, rooms) = recorder(&mut bus, Topic::Room);
        let (_, actions) = recorder(&mut bus, Topic::Action);

        bus.publish(RoomEvent::RoomChanged { from: 0, to: 1 });

        assert_eq!(
            *rooms.borrow(),
            vec![Event::Room(RoomEvent::RoomChanged { from: 0, to: 1 })]
        );
        assert!(actions.borrow().is_empty());
    }

    #[test]
    fn unsubscribed_listener_is_silent() {
        let mut bus = EventBus::new();
        let (id, seen) = recorder(&mut bus, Topic::Room);
        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));

        bus.publish(RoomEvent::RoomChanged { from: 1, to: 0 });
        assert!(seen.borrow().is_empty());
        assert_eq!(bus.listener_count(Topic::Room), 0);
    }
}
