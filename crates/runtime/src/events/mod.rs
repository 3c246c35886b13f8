//! Topic-based event delivery for session observers.
//!
//! The core engine never notifies anyone; the session publishes events here
//! after each resolved request and listeners registered by the application
//! react to them.

mod bus;
mod types;

pub use bus::{Event, EventBus, SubscriptionId, Topic};
pub use types::{ActionEvent, RoomEvent};
