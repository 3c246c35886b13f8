//! Enterable-cell view of the player's current room.
//!
//! A cell is reachable when the tile on it would accept the player right
//! now: walls, doors without a matching key and enemies the player cannot
//! beat are not. The view is derived from the state and never mutates it;
//! front-ends use it for cursor feedback only.

use crate::combat::resolve_combat;
use crate::config::TILES_IN_ROW;
use crate::state::{GameState, Position, Tile};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reachability {
    room: usize,
    cells: [[bool; TILES_IN_ROW]; TILES_IN_ROW],
}

impl Reachability {
    /// Computes the view for the room the player stands in. A player outside
    /// every standard room sees nothing reachable.
    pub fn compute(state: &GameState) -> Self {
        let room_index = state.player.location.room;
        let mut cells = [[false; TILES_IN_ROW]; TILES_IN_ROW];

        if let Some(room) = state.current_room() {
            for (position, tile) in room.iter() {
                if let Some((line, column)) = position.grid_index() {
                    cells[line][column] = can_enter(state, tile);
                }
            }
        }

        Self {
            room: room_index,
            cells,
        }
    }

    /// Standard room the view was computed for.
    pub fn room(&self) -> usize {
        self.room
    }

    pub fn is_reachable(&self, position: Position) -> bool {
        position
            .grid_index()
            .is_some_and(|(line, column)| self.cells[line][column])
    }

    pub fn cells(&self) -> &[[bool; TILES_IN_ROW]; TILES_IN_ROW] {
        &self.cells
    }

    pub fn reachable_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| **cell).count()
    }
}

/// Whether the player could step onto `tile` given the current stats.
pub fn can_enter(state: &GameState, tile: Tile) -> bool {
    match tile {
        Tile::Wall => false,
        Tile::Door { color } => state.player.stats.keys.has(color),
        Tile::Enemy { enemy } => state
            .tower
            .enemy(enemy)
            .is_some_and(|enemy| resolve_combat(&state.player.stats, enemy).is_victory()),
        Tile::Empty
        | Tile::StartingPosition
        | Tile::Key { .. }
        | Tile::Item { .. }
        | Tile::Staircase { .. }
        | Tile::Score { .. } => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Direction;
    use crate::config::GameConfig;
    use crate::data::{Color, EnemyType, ItemName, ScoreType, StaircaseDirection};
    use crate::engine::GameEngine;
    use crate::env::GameEnv;
    use crate::state::{Enemy, Location, PlayerState, PlayerStats, Room, Tower};

    fn state() -> GameState {
        let mut tower = Tower::new("test");
        tower.add_enemy(Enemy::new(EnemyType::Fighter, 1, "weak").with_stats(10, 5, 0, 1));
        tower.add_enemy(Enemy::new(EnemyType::Shadow, 9, "strong").with_stats(999, 999, 999, 1));
        let mut second = Room::new("second");
        second.set_tile(
            Position::new(0, 0),
            Tile::Staircase {
                direction: StaircaseDirection::Down,
            },
        );
        tower.standard_rooms.push(Room::new("first"));
        tower.standard_rooms.push(second);
        GameState::new(
            tower,
            PlayerState::new(
                Location::at(0, Position::new(5, 5)),
                PlayerStats::new(100, 10, 10),
            ),
        )
    }

    fn sample_tiles(state: &GameState) -> Vec<Tile> {
        let weak = state.tower.find_enemy(EnemyType::Fighter, 1).expect("weak enemy");
        let strong = state.tower.find_enemy(EnemyType::Shadow, 9).expect("strong enemy");
        vec![
            Tile::Empty,
            Tile::Wall,
            Tile::StartingPosition,
            Tile::Door { color: Color::Blue },
            Tile::Door { color: Color::Crimson },
            Tile::Key { color: Color::Yellow },
            Tile::Item {
                name: ItemName::BluePotion,
            },
            Tile::Enemy { enemy: weak },
            Tile::Enemy { enemy: strong },
            Tile::Staircase {
                direction: StaircaseDirection::Up,
            },
            Tile::Score {
                score: ScoreType::Star,
            },
        ]
    }

    #[test]
    fn blocking_tiles_are_unreachable() {
        let mut state = state();
        state.player.stats.keys.add(Color::Blue);
        let tiles = sample_tiles(&state);
        let room = state.current_room_mut().expect("room");
        for (column, tile) in tiles.iter().enumerate() {
            room.set_tile(Position::new(0, column as i32), *tile);
        }

        let view = Reachability::compute(&state);
        let row: Vec<bool> = (0..tiles.len())
            .map(|column| view.is_reachable(Position::new(0, column as i32)))
            .collect();
        assert_eq!(
            row,
            vec![true, false, true, true, false, true, true, true, false, true, true]
        );
        assert!(!view.is_reachable(Position::new(-1, 0)));
        assert_eq!(view.room(), 0);
    }

    #[test]
    fn view_agrees_with_engine() {
        let config = GameConfig::default();
        let target = Position::new(5, 6);
        let base = state();
        for tile in sample_tiles(&base) {
            let mut state = base.clone();
            state.current_room_mut().expect("room").set_tile(target, tile);
            let reachable = Reachability::compute(&state).is_reachable(target);
            let engine = GameEngine::new(&mut state);
            let planned = engine
                .preview(GameEnv::standard(&config), Direction::Right)
                .expect("no integrity fault");
            assert_eq!(planned.is_some(), reachable, "disagreement on {tile:?}");
        }
    }

    #[test]
    fn gaining_a_key_opens_the_door_cell() {
        let mut state = state();
        let door = Position::new(3, 3);
        state
            .current_room_mut()
            .expect("room")
            .set_tile(door, Tile::Door { color: Color::Violet });
        assert!(!Reachability::compute(&state).is_reachable(door));
        state.player.stats.keys.add(Color::Violet);
        assert!(Reachability::compute(&state).is_reachable(door));
    }

    #[test]
    fn player_outside_rooms_sees_nothing() {
        let mut state = state();
        state.player.location.room = 7;
        assert_eq!(Reachability::compute(&state).reachable_count(), 0);
    }
}
