//! Runtime orchestration for playing a tower.
//!
//! This crate wires the core engine, the move buffer and the event bus into
//! a single-threaded [`Session`]. Front-ends drive it with move requests,
//! subscribe to events and read state and reachability back.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the session and its builder
//! - [`buffer`] holds the FIFO of pending move requests
//! - [`events`] provides topic-based listener registration
pub mod buffer;
pub mod events;
pub mod session;

mod error;

pub use buffer::MoveBuffer;
pub use error::{Result, RuntimeError};
pub use events::{ActionEvent, Event, EventBus, RoomEvent, SubscriptionId, Topic};
pub use session::{Session, SessionBuilder, SessionConfig, Step};
