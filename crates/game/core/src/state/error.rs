//! State construction errors.

use crate::error::{ErrorSeverity, GameError};

/// Errors raised while turning an authored [`Tower`](super::Tower) into a
/// playable [`GameState`](super::GameState).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InitializationError {
    /// No standard room holds a starting position tile.
    #[error("no starting position found")]
    NoStartingPosition,
}

impl GameError for InitializationError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            InitializationError::NoStartingPosition => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            InitializationError::NoStartingPosition => "STATE_NO_STARTING_POSITION",
        }
    }
}
