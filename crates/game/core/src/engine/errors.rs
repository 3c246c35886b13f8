//! Error types for move resolution.

use crate::data::StaircaseDirection;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{EnemyId, Location};

/// Integrity faults surfaced while resolving a move.
///
/// None of these can happen against content that passed import validation.
/// A blocked move (wall, locked door, unwinnable fight, grid edge) is not an
/// error; the engine returns `Ok(None)` for it.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineError {
    #[error("player location {location} is not inside a standard room")]
    PlayerOutsideRoom { location: Location },

    #[error("enemy tile at {location} references missing roster entry {enemy}")]
    MissingEnemy { enemy: EnemyId, location: Location },

    #[error("unknown drop [{name}] for enemy {enemy}")]
    UnknownDrop { enemy: EnemyId, name: String },

    #[error("staircase {direction} at {location} has no paired staircase")]
    UnpairedStaircase {
        direction: StaircaseDirection,
        location: Location,
    },

    /// Raised by the apply phase when the planned tile changed underneath it.
    #[error("apply failed: action no longer matches tile at {location}")]
    StaleAction { location: Location },
}

impl GameError for EngineError {
    fn severity(&self) -> ErrorSeverity {
        use EngineError::*;
        match self {
            // Content faults: the tower data is inconsistent
            MissingEnemy { .. } | UnknownDrop { .. } | UnpairedStaircase { .. } => {
                ErrorSeverity::Fatal
            }
            // State faults: the engine was handed an impossible state
            PlayerOutsideRoom { .. } | StaleAction { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use EngineError::*;
        match self {
            PlayerOutsideRoom { .. } => "ENGINE_PLAYER_OUTSIDE_ROOM",
            MissingEnemy { .. } => "ENGINE_MISSING_ENEMY",
            UnknownDrop { .. } => "ENGINE_UNKNOWN_DROP",
            UnpairedStaircase { .. } => "ENGINE_UNPAIRED_STAIRCASE",
            StaleAction { .. } => "ENGINE_STALE_ACTION",
        }
    }
}
