use crate::config::TILES_IN_ROW;
use crate::data::ScoreType;

use super::{Position, Tile};

/// Square tile grid. The fixed array type keeps every room the same size.
pub type TileGrid = [[Tile; TILES_IN_ROW]; TILES_IN_ROW];

/// Score overlay drawn on top of a cell. Overlays never block movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreMarker {
    pub position: Position,
    pub score: ScoreType,
}

impl ScoreMarker {
    pub const fn new(position: Position, score: ScoreType) -> Self {
        Self { position, score }
    }
}

/// One fixed-size grid of the tower.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Room {
    pub name: String,
    tiles: TileGrid,
    scores: Vec<ScoreMarker>,
}

impl Room {
    /// Creates a room filled with [`Tile::Empty`].
    pub fn new(name: impl Into<String>) -> Self {
        Self::from_tiles(name, [[Tile::Empty; TILES_IN_ROW]; TILES_IN_ROW])
    }

    pub fn from_tiles(name: impl Into<String>, tiles: TileGrid) -> Self {
        Self {
            name: name.into(),
            tiles,
            scores: Vec::new(),
        }
    }

    pub fn tiles(&self) -> &TileGrid {
        &self.tiles
    }

    /// Returns the tile at `position`, or `None` outside the grid.
    pub fn tile(&self, position: Position) -> Option<Tile> {
        let (line, column) = position.grid_index()?;
        Some(self.tiles[line][column])
    }

    /// Replaces the tile at `position`. Returns false outside the grid.
    pub fn set_tile(&mut self, position: Position, tile: Tile) -> bool {
        match position.grid_index() {
            Some((line, column)) => {
                self.tiles[line][column] = tile;
                true
            }
            None => false,
        }
    }

    /// Iterates `(position, tile)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Tile)> + '_ {
        Position::all().map(move |position| {
            let (line, column) = (position.line as usize, position.column as usize);
            (position, self.tiles[line][column])
        })
    }

    /// First position (row-major) whose tile satisfies `predicate`.
    pub fn find(&self, mut predicate: impl FnMut(&Tile) -> bool) -> Option<Position> {
        self.iter()
            .find(|(_, tile)| predicate(tile))
            .map(|(position, _)| position)
    }

    pub fn scores(&self) -> &[ScoreMarker] {
        &self.scores
    }

    pub fn score_at(&self, position: Position) -> Option<ScoreType> {
        self.scores
            .iter()
            .find(|marker| marker.position == position)
            .map(|marker| marker.score)
    }

    /// Adds an overlay marker; a marker already at that position is replaced.
    /// Returns false outside the grid.
    pub fn set_score(&mut self, marker: ScoreMarker) -> bool {
        if !marker.position.in_bounds() {
            return false;
        }
        match self
            .scores
            .iter_mut()
            .find(|existing| existing.position == marker.position)
        {
            Some(existing) => existing.score = marker.score,
            None => self.scores.push(marker),
        }
        true
    }
}

impl Default for Room {
    fn default() -> Self {
        Self::new("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Color;

    #[test]
    fn new_room_is_empty_and_square() {
        let room = Room::new("entrance");
        assert_eq!(room.tiles().len(), TILES_IN_ROW);
        assert!(room.tiles().iter().all(|line| line.len() == TILES_IN_ROW));
        assert!(room.iter().all(|(_, tile)| tile.is_empty()));
    }

    #[test]
    fn set_tile_rejects_out_of_grid() {
        let mut room = Room::new("r");
        assert!(room.set_tile(Position::new(2, 3), Tile::Wall));
        assert!(!room.set_tile(Position::new(2, TILES_IN_ROW as i32), Tile::Wall));
        assert_eq!(room.tile(Position::new(2, 3)), Some(Tile::Wall));
        assert_eq!(room.tile(Position::new(-1, 3)), None);
    }

    #[test]
    fn find_scans_row_major() {
        let mut room = Room::new("r");
        let key = Tile::Key { color: Color::Blue };
        room.set_tile(Position::new(4, 1), key);
        room.set_tile(Position::new(1, 7), key);
        assert_eq!(room.find(|tile| *tile == key), Some(Position::new(1, 7)));
    }

    #[test]
    fn score_markers_are_unique_per_position() {
        let mut room = Room::new("r");
        let position = Position::new(0, 0);
        assert!(room.set_score(ScoreMarker::new(position, ScoreType::Check)));
        assert!(room.set_score(ScoreMarker::new(position, ScoreType::Star)));
        assert_eq!(room.scores().len(), 1);
        assert_eq!(room.score_at(position), Some(ScoreType::Star));
        assert!(!room.set_score(ScoreMarker::new(Position::new(-1, 0), ScoreType::Crown)));
    }
}
