//! The authored tower: rooms, enemy roster, levels and starting stats.

use crate::data::{EnemyType, StaircaseDirection};

use super::{EnemyId, Position, Room, Tile};

/// Roster entry. Stats stay `None` until authored; the combat rule treats
/// an unset stat as zero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enemy {
    pub enemy_type: Option<EnemyType>,
    pub level: Option<u32>,
    pub name: String,
    pub hp: Option<i32>,
    pub atk: Option<i32>,
    pub def: Option<i32>,
    pub exp: Option<i32>,
    /// Drop name; must be present in the drop table.
    pub drop: Option<String>,
}

impl Enemy {
    pub fn new(enemy_type: EnemyType, level: u32, name: impl Into<String>) -> Self {
        Self {
            enemy_type: Some(enemy_type),
            level: Some(level),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_stats(mut self, hp: i32, atk: i32, def: i32, exp: i32) -> Self {
        self.hp = Some(hp);
        self.atk = Some(atk);
        self.def = Some(def);
        self.exp = Some(exp);
        self
    }

    pub fn with_drop(mut self, drop: impl Into<String>) -> Self {
        self.drop = Some(drop.into());
        self
    }
}

/// Experience threshold and stat bonuses of one player level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelDef {
    pub exp: Option<i32>,
    pub hp: Option<i32>,
    pub atk: Option<i32>,
    pub def: Option<i32>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StartingStats {
    pub hp: Option<i32>,
    pub atk: Option<i32>,
    pub def: Option<i32>,
}

impl StartingStats {
    pub const fn new(hp: i32, atk: i32, def: i32) -> Self {
        Self {
            hp: Some(hp),
            atk: Some(atk),
            def: Some(def),
        }
    }
}

/// Persisted aggregate produced by import and consumed by export.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tower {
    pub name: String,
    pub enemies: Vec<Enemy>,
    pub standard_rooms: Vec<Room>,
    pub nexus_rooms: Vec<Room>,
    pub levels: Vec<LevelDef>,
    pub starting_stats: StartingStats,
}

impl Tower {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Appends an enemy to the roster and returns the reference tiles use.
    pub fn add_enemy(&mut self, enemy: Enemy) -> EnemyId {
        let id = EnemyId(self.enemies.len() as u32);
        self.enemies.push(enemy);
        id
    }

    pub fn enemy(&self, id: EnemyId) -> Option<&Enemy> {
        self.enemies.get(id.index())
    }

    /// Roster entry with the given type and level, as referenced by
    /// persisted enemy tiles.
    pub fn find_enemy(&self, enemy_type: EnemyType, level: u32) -> Option<EnemyId> {
        self.enemies
            .iter()
            .position(|enemy| enemy.enemy_type == Some(enemy_type) && enemy.level == Some(level))
            .map(|index| EnemyId(index as u32))
    }

    /// First staircase of `direction` in standard room `room`.
    pub fn find_staircase(&self, room: usize, direction: StaircaseDirection) -> Option<Position> {
        self.standard_rooms
            .get(room)?
            .find(|tile| *tile == Tile::Staircase { direction })
    }

    /// Standard room reached by taking a `direction` staircase in `room`.
    pub fn linked_room(&self, room: usize, direction: StaircaseDirection) -> Option<usize> {
        let target = match direction {
            StaircaseDirection::Up => room.checked_add(1)?,
            StaircaseDirection::Down => room.checked_sub(1)?,
        };
        (target < self.standard_rooms.len()).then_some(target)
    }

    /// Every standard-room cell holding a starting position.
    pub fn starting_positions(&self) -> Vec<(usize, Position)> {
        self.standard_rooms
            .iter()
            .enumerate()
            .flat_map(|(index, room)| {
                room.iter()
                    .filter(|(_, tile)| *tile == Tile::StartingPosition)
                    .map(move |(position, _)| (index, position))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tower_with_rooms(count: usize) -> Tower {
        let mut tower = Tower::new("t");
        tower.standard_rooms = (0..count).map(|i| Room::new(format!("room {i}"))).collect();
        tower
    }

    #[test]
    fn enemies_are_found_by_type_and_level() {
        let mut tower = Tower::new("t");
        tower.add_enemy(Enemy::new(EnemyType::Fighter, 1, "weak"));
        let strong = tower.add_enemy(Enemy::new(EnemyType::Fighter, 2, "strong"));
        assert_eq!(tower.find_enemy(EnemyType::Fighter, 2), Some(strong));
        assert_eq!(tower.find_enemy(EnemyType::Shadow, 1), None);
        assert_eq!(tower.enemy(strong).map(|e| e.name.as_str()), Some("strong"));
    }

    #[test]
    fn staircases_link_adjacent_rooms() {
        let tower = tower_with_rooms(3);
        assert_eq!(tower.linked_room(0, StaircaseDirection::Up), Some(1));
        assert_eq!(tower.linked_room(2, StaircaseDirection::Up), None);
        assert_eq!(tower.linked_room(1, StaircaseDirection::Down), Some(0));
        assert_eq!(tower.linked_room(0, StaircaseDirection::Down), None);
    }

    #[test]
    fn staircase_lookup_by_direction() {
        let mut tower = tower_with_rooms(2);
        let down = Tile::Staircase {
            direction: StaircaseDirection::Down,
        };
        tower.standard_rooms[1].set_tile(Position::new(9, 2), down);
        assert_eq!(
            tower.find_staircase(1, StaircaseDirection::Down),
            Some(Position::new(9, 2))
        );
        assert_eq!(tower.find_staircase(1, StaircaseDirection::Up), None);
        assert_eq!(tower.find_staircase(5, StaircaseDirection::Down), None);
    }

    #[test]
    fn starting_positions_span_standard_rooms() {
        let mut tower = tower_with_rooms(2);
        tower.standard_rooms[1].set_tile(Position::new(3, 3), Tile::StartingPosition);
        assert_eq!(tower.starting_positions(), vec![(1, Position::new(3, 3))]);
    }
}
