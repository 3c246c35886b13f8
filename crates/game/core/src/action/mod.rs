//! Actions produced by move resolution.
//!
//! An [`Action`] is the already-decided outcome of one move request. By the
//! time a caller sees it the engine has committed the change; the action
//! only describes what happened so observers (renderers, logs) can replay it.
//!
//! # Module Structure
//!
//! - `movement`: the four requestable [`Direction`]s

mod movement;

pub use movement::Direction;

use crate::data::{Color, ItemName, StaircaseDirection};
use crate::state::{EnemyId, Location, Tile};

/// Discriminant of an [`Action`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ActionKind {
    PlayerMove,
    PickKey,
    PickItem,
    OpenDoor,
    KillEnemy,
    TakeStaircase,
}

/// Outcome of one accepted move. `player` is the location before the move,
/// `target` the location after it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    PlayerMove {
        player: Location,
        target: Location,
    },
    PickKey {
        player: Location,
        target: Location,
        color: Color,
    },
    PickItem {
        player: Location,
        target: Location,
        item: ItemName,
    },
    OpenDoor {
        player: Location,
        target: Location,
        color: Color,
    },
    KillEnemy {
        player: Location,
        target: Location,
        enemy: EnemyId,
        damage_taken: i32,
        /// Tile left where the enemy stood.
        drop_tile: Tile,
    },
    /// Room transition; `target` is the paired staircase in the linked room.
    TakeStaircase {
        player: Location,
        target: Location,
        direction: StaircaseDirection,
    },
}

impl Action {
    pub const fn kind(&self) -> ActionKind {
        match self {
            Action::PlayerMove { .. } => ActionKind::PlayerMove,
            Action::PickKey { .. } => ActionKind::PickKey,
            Action::PickItem { .. } => ActionKind::PickItem,
            Action::OpenDoor { .. } => ActionKind::OpenDoor,
            Action::KillEnemy { .. } => ActionKind::KillEnemy,
            Action::TakeStaircase { .. } => ActionKind::TakeStaircase,
        }
    }

    /// Player location before the action.
    pub const fn player(&self) -> Location {
        match *self {
            Action::PlayerMove { player, .. }
            | Action::PickKey { player, .. }
            | Action::PickItem { player, .. }
            | Action::OpenDoor { player, .. }
            | Action::KillEnemy { player, .. }
            | Action::TakeStaircase { player, .. } => player,
        }
    }

    /// Player location after the action.
    pub const fn target(&self) -> Location {
        match *self {
            Action::PlayerMove { target, .. }
            | Action::PickKey { target, .. }
            | Action::PickItem { target, .. }
            | Action::OpenDoor { target, .. }
            | Action::KillEnemy { target, .. }
            | Action::TakeStaircase { target, .. } => target,
        }
    }

    /// True when the action moved the player to another room.
    pub const fn changes_room(&self) -> bool {
        self.player().room != self.target().room
    }
}
