//! Unified error type surfaced by the session API.

use thiserror::Error;
use tower_core::{EngineError, ErrorSeverity, GameError, InitializationError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("session requires a tower or a game state before building")]
    MissingTower,

    #[error("failed to initialize game state from tower")]
    InitialState(#[source] InitializationError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("failed to encode or decode session snapshot")]
    Snapshot(#[source] serde_json::Error),

    #[error("failed to load session content")]
    Content(#[source] anyhow::Error),
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::MissingTower => ErrorSeverity::Internal,
            RuntimeError::InitialState(error) => error.severity(),
            RuntimeError::Engine(error) => error.severity(),
            RuntimeError::Snapshot(_) | RuntimeError::Content(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            RuntimeError::MissingTower => "RUNTIME_MISSING_TOWER",
            RuntimeError::InitialState(error) => error.error_code(),
            RuntimeError::Engine(error) => error.error_code(),
            RuntimeError::Snapshot(_) => "RUNTIME_SNAPSHOT",
            RuntimeError::Content(_) => "RUNTIME_CONTENT",
        }
    }
}
