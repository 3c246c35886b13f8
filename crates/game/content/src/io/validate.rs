//! Whole-tower checks that need every room in place.

use tower_core::{Position, Tile, Tower};

pub(super) fn check_tower(tower: &Tower, errors: &mut Vec<String>) {
    check_starting_position(tower, errors);
    check_staircases(tower, errors);
}

/// Play starts on the single starting position of the standard rooms.
fn check_starting_position(tower: &Tower, errors: &mut Vec<String>) {
    let standard = tower.starting_positions().len();
    let nexus: usize = tower
        .nexus_rooms
        .iter()
        .map(|room| {
            room.iter()
                .filter(|(_, tile)| *tile == Tile::StartingPosition)
                .count()
        })
        .sum();

    match (standard, nexus) {
        (1, 0) => {}
        (0, 0) => errors.push("Tower has no starting position".to_owned()),
        (0, _) => errors.push("Starting position must be in a standard room".to_owned()),
        (found, _) => errors.push(format!(
            "Tower has {} starting positions, expected exactly one",
            found + nexus
        )),
    }
}

fn check_staircases(tower: &Tower, errors: &mut Vec<String>) {
    for (index, room) in tower.standard_rooms.iter().enumerate() {
        for (position, tile) in room.iter() {
            let Tile::Staircase { direction } = tile else {
                continue;
            };
            let at = describe(index, position);
            match tower.linked_room(index, direction) {
                None => errors.push(format!("{at} {direction} staircase leads outside the tower")),
                Some(linked) if tower.find_staircase(linked, direction.opposite()).is_none() => {
                    errors.push(format!(
                        "{at} {direction} staircase has no {} staircase in standard room {}",
                        direction.opposite(),
                        linked + 1
                    ))
                }
                Some(_) => {}
            }
        }
    }
}

fn describe(room: usize, position: Position) -> String {
    format!(
        "Standard room {} tile [{}, {}]",
        room + 1,
        position.line + 1,
        position.column + 1
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tower_core::{Room, StaircaseDirection};

    fn tower_with(rooms: Vec<Room>) -> Tower {
        let mut tower = Tower::new("t");
        tower.standard_rooms = rooms;
        tower
    }

    fn room_with(tiles: &[(Position, Tile)]) -> Room {
        let mut room = Room::new("r");
        for &(position, tile) in tiles {
            room.set_tile(position, tile);
        }
        room
    }

    fn check(tower: &Tower) -> Vec<String> {
        let mut errors = Vec::new();
        check_tower(tower, &mut errors);
        errors
    }

    #[test]
    fn single_start_with_paired_stairs_passes() {
        let up = Tile::Staircase {
            direction: StaircaseDirection::Up,
        };
        let down = Tile::Staircase {
            direction: StaircaseDirection::Down,
        };
        let tower = tower_with(vec![
            room_with(&[(Position::new(0, 0), Tile::StartingPosition), (Position::new(1, 1), up)]),
            room_with(&[(Position::new(9, 9), down)]),
        ]);
        assert!(check(&tower).is_empty());
    }

    #[test]
    fn start_count_is_checked() {
        assert_eq!(
            check(&tower_with(vec![Room::new("r")])),
            vec!["Tower has no starting position".to_owned()]
        );

        let start = (Position::new(0, 0), Tile::StartingPosition);
        let tower = tower_with(vec![room_with(&[start]), room_with(&[start])]);
        assert_eq!(
            check(&tower),
            vec!["Tower has 2 starting positions, expected exactly one".to_owned()]
        );
    }

    #[test]
    fn start_in_nexus_room_is_rejected() {
        let mut tower = tower_with(vec![Room::new("r")]);
        tower
            .nexus_rooms
            .push(room_with(&[(Position::new(0, 0), Tile::StartingPosition)]));
        assert_eq!(
            check(&tower),
            vec!["Starting position must be in a standard room".to_owned()]
        );
    }

    #[test]
    fn unpaired_staircases_are_reported() {
        let tower = tower_with(vec![room_with(&[
            (Position::new(0, 0), Tile::StartingPosition),
            (
                Position::new(2, 3),
                Tile::Staircase {
                    direction: StaircaseDirection::Down,
                },
            ),
        ])]);
        assert_eq!(
            check(&tower),
            vec!["Standard room 1 tile [3, 4] down staircase leads outside the tower".to_owned()]
        );
    }
}
