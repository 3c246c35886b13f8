//! Event types for different topics.

use serde::{Deserialize, Serialize};
use tower_core::{Action, Direction, Location};

/// Events about individual move requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionEvent {
    /// A move was committed; the state already reflects it.
    ActionResolved { action: Action },

    /// A move was blocked. `discarded` counts the queued follow-up moves
    /// dropped with it.
    MoveRejected {
        direction: Direction,
        location: Location,
        discarded: usize,
    },
}

/// Events about the player's current room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomEvent {
    /// The player now stands in standard room `to`.
    RoomChanged { from: usize, to: usize },
}
