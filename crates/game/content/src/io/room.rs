use serde_json::{Map, Value, json};
use tower_core::{
    EnemyType, Position, Room, ScoreMarker, ScoreType, TILES_IN_ROW, Tile, TileKind, Tower,
};

use super::fields::{Invalid, Record, optional_i32, optional_str, optional_u32, report, required_parsed};
use super::{
    ATTRIBUTE_COLOR, ATTRIBUTE_COLUMN, ATTRIBUTE_DIRECTION, ATTRIBUTE_ENEMY_LEVEL,
    ATTRIBUTE_ENEMY_TYPE, ATTRIBUTE_LINE, ATTRIBUTE_NAME, ATTRIBUTE_SCORE, ATTRIBUTE_SCORES,
    ATTRIBUTE_TILES, ATTRIBUTE_TYPE,
};

/// Converts one room record. `label` prefixes messages, e.g. `Standard room 2`.
///
/// Enemy tiles resolve against the roster already imported into `tower`.
/// A record that is not an object still yields an empty room so that room
/// indexes stay aligned with the record.
pub(super) fn import_room(
    value: &Value,
    label: &str,
    tower: &Tower,
    errors: &mut Vec<String>,
) -> Room {
    let Some(record) = value.as_object() else {
        errors.push(format!("{label} is not an object"));
        return Room::default();
    };

    let name = report(optional_str(record, ATTRIBUTE_NAME), errors, || {
        format!("{label} name is invalid")
    })
    .unwrap_or_default();
    let mut room = Room::new(name);

    import_tiles(record, label, tower, &mut room, errors);
    import_scores(record, label, &mut room, errors);
    room
}

fn import_tiles(
    record: &Record,
    label: &str,
    tower: &Tower,
    room: &mut Room,
    errors: &mut Vec<String>,
) {
    let Some(lines) = record.get(ATTRIBUTE_TILES).and_then(Value::as_array) else {
        errors.push(format!("{label} tiles value is invalid"));
        return;
    };
    if lines.len() != TILES_IN_ROW {
        errors.push(format!(
            "{label} has {} tile lines, expected {TILES_IN_ROW}",
            lines.len()
        ));
    }

    for (line, cells) in lines.iter().take(TILES_IN_ROW).enumerate() {
        let Some(cells) = cells.as_array() else {
            errors.push(format!("{label} tile line {} is invalid", line + 1));
            continue;
        };
        if cells.len() != TILES_IN_ROW {
            errors.push(format!(
                "{label} tile line {} has {} tiles, expected {TILES_IN_ROW}",
                line + 1,
                cells.len()
            ));
        }
        for (column, cell) in cells.iter().take(TILES_IN_ROW).enumerate() {
            let at = format!("{label} tile [{}, {}]", line + 1, column + 1);
            let tile = import_tile(cell, &at, tower, errors);
            room.set_tile(Position::new(line as i32, column as i32), tile);
        }
    }
}

/// Anything unusable becomes [`Tile::Empty`] after its error is recorded.
fn import_tile(value: &Value, at: &str, tower: &Tower, errors: &mut Vec<String>) -> Tile {
    let Some(record) = value.as_object() else {
        errors.push(format!("{at} is invalid"));
        return Tile::Empty;
    };
    let kind = match optional_str(record, ATTRIBUTE_TYPE) {
        Ok(Some(text)) => match text.parse::<TileKind>() {
            Ok(kind) => kind,
            Err(_) => {
                errors.push(format!("{at} has unknown type '{text}'"));
                return Tile::Empty;
            }
        },
        Ok(None) | Err(Invalid) => {
            errors.push(format!("{at} has no type"));
            return Tile::Empty;
        }
    };

    let tile = match kind {
        TileKind::Empty => Ok(Tile::Empty),
        TileKind::Wall => Ok(Tile::Wall),
        TileKind::StartingPosition => Ok(Tile::StartingPosition),
        TileKind::Door => required_parsed(record, ATTRIBUTE_COLOR).map(|color| Tile::Door { color }),
        TileKind::Key => required_parsed(record, ATTRIBUTE_COLOR).map(|color| Tile::Key { color }),
        TileKind::Item => required_parsed(record, ATTRIBUTE_NAME).map(|name| Tile::Item { name }),
        TileKind::Enemy => return import_enemy_tile(record, at, tower, errors),
        TileKind::Staircase => required_parsed(record, ATTRIBUTE_DIRECTION)
            .map(|direction| Tile::Staircase { direction }),
        TileKind::Score => required_parsed(record, ATTRIBUTE_SCORE).map(|score| Tile::Score { score }),
    };

    tile.unwrap_or_else(|Invalid| {
        errors.push(format!("{at} {kind} {} is invalid", payload_attribute(kind)));
        Tile::Empty
    })
}

fn payload_attribute(kind: TileKind) -> &'static str {
    match kind {
        TileKind::Door | TileKind::Key => ATTRIBUTE_COLOR,
        TileKind::Item => ATTRIBUTE_NAME,
        TileKind::Staircase => ATTRIBUTE_DIRECTION,
        TileKind::Score => ATTRIBUTE_SCORE,
        TileKind::Enemy => ATTRIBUTE_ENEMY_TYPE,
        TileKind::Empty | TileKind::Wall | TileKind::StartingPosition => ATTRIBUTE_TYPE,
    }
}

fn import_enemy_tile(record: &Record, at: &str, tower: &Tower, errors: &mut Vec<String>) -> Tile {
    let enemy_type = required_parsed::<EnemyType>(record, ATTRIBUTE_ENEMY_TYPE);
    let level = optional_u32(record, ATTRIBUTE_ENEMY_LEVEL).and_then(|level| level.ok_or(Invalid));
    let (Ok(enemy_type), Ok(level)) = (enemy_type, level) else {
        errors.push(format!("{at} enemy reference is invalid"));
        return Tile::Empty;
    };

    match tower.find_enemy(enemy_type, level) {
        Some(enemy) => Tile::Enemy { enemy },
        None => {
            errors.push(format!(
                "{at} references unknown enemy '{enemy_type}' level {level}"
            ));
            Tile::Empty
        }
    }
}

fn import_scores(record: &Record, label: &str, room: &mut Room, errors: &mut Vec<String>) {
    let markers = match record.get(ATTRIBUTE_SCORES) {
        None | Some(Value::Null) => return,
        Some(Value::Array(markers)) => markers,
        Some(_) => {
            errors.push(format!("{label} scores value is invalid"));
            return;
        }
    };

    for (index, marker) in markers.iter().enumerate() {
        let number = index + 1;
        let Some(marker) = import_marker(marker).filter(|marker| marker.position.in_bounds())
        else {
            errors.push(format!("{label} score marker {number} is invalid"));
            continue;
        };
        // Markers are unique per cell; the first one authored wins.
        if room.score_at(marker.position).is_some() {
            errors.push(format!(
                "{label} score marker {number} repeats position [{}, {}]",
                marker.position.line + 1,
                marker.position.column + 1
            ));
            continue;
        }
        room.set_score(marker);
    }
}

fn import_marker(value: &Value) -> Option<ScoreMarker> {
    let record = value.as_object()?;
    let line = optional_i32(record, ATTRIBUTE_LINE).ok()??;
    let column = optional_i32(record, ATTRIBUTE_COLUMN).ok()??;
    let score = required_parsed::<ScoreType>(record, ATTRIBUTE_SCORE).ok()?;
    Some(ScoreMarker::new(Position::new(line, column), score))
}

pub(super) fn export_room(room: &Room, tower: &Tower) -> Value {
    let tiles: Vec<Vec<Value>> = room
        .tiles()
        .iter()
        .map(|line| line.iter().map(|tile| export_tile(*tile, tower)).collect())
        .collect();
    let scores: Vec<Value> = room
        .scores()
        .iter()
        .map(|marker| {
            json!({
                ATTRIBUTE_LINE: marker.position.line,
                ATTRIBUTE_COLUMN: marker.position.column,
                ATTRIBUTE_SCORE: marker.score.as_ref(),
            })
        })
        .collect();

    json!({
        ATTRIBUTE_NAME: room.name,
        ATTRIBUTE_TILES: tiles,
        ATTRIBUTE_SCORES: scores,
    })
}

/// Writes the tag plus only the fields that tag uses.
fn export_tile(tile: Tile, tower: &Tower) -> Value {
    let mut record = Map::new();
    record.insert(ATTRIBUTE_TYPE.to_owned(), json!(tile.kind().as_ref()));

    match tile {
        Tile::Empty | Tile::Wall | Tile::StartingPosition => {}
        Tile::Door { color } | Tile::Key { color } => {
            record.insert(ATTRIBUTE_COLOR.to_owned(), json!(color.as_ref()));
        }
        Tile::Item { name } => {
            record.insert(ATTRIBUTE_NAME.to_owned(), json!(name.as_ref()));
        }
        Tile::Enemy { enemy } => {
            let enemy = tower.enemy(enemy);
            let enemy_type = enemy.and_then(|enemy| enemy.enemy_type);
            record.insert(
                ATTRIBUTE_ENEMY_TYPE.to_owned(),
                json!(enemy_type.map(|enemy_type| enemy_type.as_ref().to_owned())),
            );
            record.insert(
                ATTRIBUTE_ENEMY_LEVEL.to_owned(),
                json!(enemy.and_then(|enemy| enemy.level)),
            );
        }
        Tile::Staircase { direction } => {
            record.insert(ATTRIBUTE_DIRECTION.to_owned(), json!(direction.as_ref()));
        }
        Tile::Score { score } => {
            record.insert(ATTRIBUTE_SCORE.to_owned(), json!(score.as_ref()));
        }
    }
    Value::Object(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tower_core::{Color, Enemy, EnemyId, ItemName};

    fn empty_grid() -> Vec<Vec<Value>> {
        vec![vec![json!({ "type": "empty" }); TILES_IN_ROW]; TILES_IN_ROW]
    }

    fn roster() -> Tower {
        let mut tower = Tower::new("t");
        tower.add_enemy(Enemy::new(EnemyType::Slasher, 2, "Slasher"));
        tower
    }

    #[test]
    fn tiles_convert_by_tag() {
        let mut grid = empty_grid();
        grid[0][0] = json!({ "type": "wall" });
        grid[0][1] = json!({ "type": "door", "color": "crimson" });
        grid[0][2] = json!({ "type": "item", "name": "Golden feather" });
        grid[0][3] = json!({ "type": "enemy", "enemyType": "slasher", "enemyLevel": 2 });
        grid[0][4] = json!({ "type": "staircase", "direction": "up" });
        grid[0][5] = json!({ "type": "score", "score": "crown" });

        let mut errors = Vec::new();
        let room = import_room(
            &json!({ "name": "Hall", "tiles": grid }),
            "Standard room 1",
            &roster(),
            &mut errors,
        );
        assert!(errors.is_empty(), "{errors:?}");
        assert_eq!(room.name, "Hall");
        let row: Vec<Tile> = (0..6).map(|column| room.tiles()[0][column]).collect();
        assert_eq!(
            row,
            vec![
                Tile::Wall,
                Tile::Door {
                    color: Color::Crimson
                },
                Tile::Item {
                    name: ItemName::GoldenFeather
                },
                Tile::Enemy { enemy: EnemyId(0) },
                Tile::Staircase {
                    direction: tower_core::StaircaseDirection::Up
                },
                Tile::Score {
                    score: ScoreType::Crown
                },
            ]
        );
    }

    #[test]
    fn bad_tiles_degrade_to_empty_with_positions() {
        let mut grid = empty_grid();
        grid[2][3] = json!({ "type": "lava" });
        grid[4][4] = json!({ "type": "key", "color": "green" });
        grid[5][5] = json!({ "type": "enemy", "enemyType": "fighter", "enemyLevel": 9 });

        let mut errors = Vec::new();
        let room = import_room(
            &json!({ "name": "Hall", "tiles": grid }),
            "Standard room 1",
            &roster(),
            &mut errors,
        );
        assert_eq!(
            errors,
            vec![
                "Standard room 1 tile [3, 4] has unknown type 'lava'".to_owned(),
                "Standard room 1 tile [5, 5] key color is invalid".to_owned(),
                "Standard room 1 tile [6, 6] references unknown enemy 'fighter' level 9".to_owned(),
            ]
        );
        assert!(room.iter().all(|(_, tile)| tile == Tile::Empty));
    }

    #[test]
    fn short_grid_is_reported() {
        let mut errors = Vec::new();
        let room = import_room(
            &json!({ "name": "Tiny", "tiles": [[{ "type": "wall" }]] }),
            "Nexus room 2",
            &roster(),
            &mut errors,
        );
        assert_eq!(room.tile(Position::ORIGIN), Some(Tile::Wall));
        assert_eq!(
            errors,
            vec![
                "Nexus room 2 has 1 tile lines, expected 11".to_owned(),
                "Nexus room 2 tile line 1 has 1 tiles, expected 11".to_owned(),
            ]
        );
    }

    #[test]
    fn score_markers_round_trip() {
        let mut room = Room::new("Scored");
        room.set_score(ScoreMarker::new(Position::new(1, 2), ScoreType::Star));
        let tower = roster();
        let record = export_room(&room, &tower);
        assert_eq!(
            record[ATTRIBUTE_SCORES],
            json!([{ "line": 1, "column": 2, "score": "star" }])
        );

        let mut errors = Vec::new();
        let back = import_room(&record, "Standard room 1", &tower, &mut errors);
        assert!(errors.is_empty(), "{errors:?}");
        assert_eq!(back, room);
    }

    #[test]
    fn out_of_bounds_marker_is_rejected() {
        let mut errors = Vec::new();
        import_room(
            &json!({
                "name": "Hall",
                "tiles": empty_grid(),
                "scores": [{ "line": 11, "column": 0, "score": "check" }]
            }),
            "Standard room 3",
            &roster(),
            &mut errors,
        );
        assert_eq!(errors, vec!["Standard room 3 score marker 1 is invalid".to_owned()]);
    }

    #[test]
    fn repeated_marker_position_is_reported() {
        let mut errors = Vec::new();
        let room = import_room(
            &json!({
                "name": "Hall",
                "tiles": empty_grid(),
                "scores": [
                    { "line": 1, "column": 1, "score": "check" },
                    { "line": 4, "column": 2, "score": "crown" },
                    { "line": 1, "column": 1, "score": "star" }
                ]
            }),
            "Nexus room 1",
            &roster(),
            &mut errors,
        );
        assert_eq!(
            errors,
            vec!["Nexus room 1 score marker 3 repeats position [2, 2]".to_owned()]
        );
        assert_eq!(room.scores().len(), 2);
        assert_eq!(room.score_at(Position::new(1, 1)), Some(ScoreType::Check));
    }

    #[test]
    fn exported_tiles_carry_only_their_fields() {
        let tower = roster();
        assert_eq!(export_tile(Tile::Wall, &tower), json!({ "type": "wall" }));
        assert_eq!(
            export_tile(Tile::Key { color: Color::GreenBlue }, &tower),
            json!({ "type": "key", "color": "greenBlue" })
        );
        assert_eq!(
            export_tile(Tile::Enemy { enemy: EnemyId(0) }, &tower),
            json!({ "type": "enemy", "enemyType": "slasher", "enemyLevel": 2 })
        );
        assert_eq!(
            export_tile(Tile::StartingPosition, &tower),
            json!({ "type": "startingPosition" })
        );
    }
}
