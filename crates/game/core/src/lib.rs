//! Deterministic tower rules and data model shared across clients.
//!
//! `tower-core` defines the canonical tile model, the static data tables, the
//! tower/room/player aggregates and the move resolution engine. All play-time
//! mutation flows through [`engine::GameEngine`]; importers and front-ends
//! depend on the types re-exported here.
pub mod action;
pub mod combat;
pub mod config;
pub mod data;
pub mod engine;
pub mod env;
pub mod error;
pub mod reachability;
pub mod state;

pub use action::{Action, ActionKind, Direction};
pub use combat::{CombatOutcome, resolve_combat};
pub use config::{GameConfig, TILES_IN_ROW};
pub use data::{Color, EnemyType, ItemName, ScoreType, StaircaseDirection};
pub use engine::{EngineError, GameEngine};
pub use env::{DropContent, DropTable, GameEnv, GameTables, ItemEffect};
pub use error::{ErrorSeverity, GameError};
pub use reachability::Reachability;
pub use state::{
    Enemy, EnemyId, GameState, InitializationError, Inventory, KeyRing, LevelDef, Location,
    PlayerState, PlayerStats, Position, Room, ScoreMarker, StartingStats, Tile, TileKind, Tower,
};
