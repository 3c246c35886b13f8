use serde_json::{Value, json};
use tower_core::Tower;

use super::enemy::export_enemy;
use super::level::{export_level, export_starting_stats};
use super::room::export_room;
use super::{
    ATTRIBUTE_ENEMIES, ATTRIBUTE_LEVELS, ATTRIBUTE_NAME, ATTRIBUTE_NEXUS, ATTRIBUTE_ROOMS,
    ATTRIBUTE_STANDARD, ATTRIBUTE_STARTING_STATS,
};

/// Maps a tower to its persisted record. Performs no validation.
pub fn export_tower(tower: &Tower) -> Value {
    let rooms = |rooms: &[tower_core::Room]| -> Vec<Value> {
        rooms.iter().map(|room| export_room(room, tower)).collect()
    };

    json!({
        ATTRIBUTE_NAME: tower.name,
        ATTRIBUTE_ENEMIES: tower.enemies.iter().map(export_enemy).collect::<Vec<_>>(),
        ATTRIBUTE_LEVELS: tower.levels.iter().map(export_level).collect::<Vec<_>>(),
        ATTRIBUTE_STARTING_STATS: export_starting_stats(&tower.starting_stats),
        ATTRIBUTE_ROOMS: {
            ATTRIBUTE_STANDARD: rooms(&tower.standard_rooms),
            ATTRIBUTE_NEXUS: rooms(&tower.nexus_rooms),
        },
    })
}

/// Pretty-printed JSON of [`export_tower`].
pub fn export_tower_string(tower: &Tower) -> String {
    format!("{:#}", export_tower(tower))
}
