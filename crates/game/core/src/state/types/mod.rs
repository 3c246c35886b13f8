pub mod common;
pub mod player;
pub mod room;
pub mod tile;
pub mod tower;

// Re-export coordinate types
pub use common::{EnemyId, Location, Position};

// Re-export player types
pub use player::{Inventory, KeyRing, PlayerState, PlayerStats};

// Re-export grid types
pub use room::{Room, ScoreMarker, TileGrid};
pub use tile::{Tile, TileKind};

// Re-export tower aggregate
pub use tower::{Enemy, LevelDef, StartingStats, Tower};
