//! Authoritative game state representation.
//!
//! This module owns the tile, room, tower and player types. Importers build
//! a [`Tower`]; play begins by turning it into a [`GameState`], which the
//! engine mutates and front-ends only read.
pub mod error;
pub mod types;

pub use error::InitializationError;
pub use types::{
    Enemy, EnemyId, Inventory, KeyRing, LevelDef, Location, PlayerState, PlayerStats, Position,
    Room, ScoreMarker, StartingStats, Tile, TileGrid, TileKind, Tower,
};

/// A tower being played: its live rooms plus the player walking them.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub tower: Tower,
    pub player: PlayerState,
}

impl GameState {
    /// Creates a state from explicit parts without touching the tiles.
    pub fn new(tower: Tower, player: PlayerState) -> Self {
        Self { tower, player }
    }

    /// Starts play on `tower`.
    ///
    /// The first starting position found in the standard rooms (room order,
    /// then row-major) becomes the player's location and its tile is
    /// replaced with [`Tile::Empty`]. Player stats come from the tower's
    /// starting stats.
    pub fn from_tower(mut tower: Tower) -> Result<Self, InitializationError> {
        let location = tower
            .standard_rooms
            .iter_mut()
            .enumerate()
            .find_map(|(index, room)| {
                let position = room.find(|tile| *tile == Tile::StartingPosition)?;
                room.set_tile(position, Tile::Empty);
                Some(Location::at(index, position))
            })
            .ok_or(InitializationError::NoStartingPosition)?;

        let stats = PlayerStats::from_starting(&tower.starting_stats);
        Ok(Self {
            tower,
            player: PlayerState::new(location, stats),
        })
    }

    /// Standard room the player is standing in.
    pub fn current_room(&self) -> Option<&Room> {
        self.tower.standard_rooms.get(self.player.location.room)
    }

    pub fn current_room_mut(&mut self) -> Option<&mut Room> {
        self.tower.standard_rooms.get_mut(self.player.location.room)
    }

    /// Tile at `location` in the standard rooms.
    pub fn tile_at(&self, location: Location) -> Option<Tile> {
        self.tower
            .standard_rooms
            .get(location.room)?
            .tile(location.position())
    }
}
