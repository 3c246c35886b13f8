//! Conversion between the persisted tower record and [`Tower`].
//!
//! The record is a JSON document:
//!
//! ```text
//! { name, enemies: [Enemy], levels: [Level], startingStats,
//!   rooms: { standard: [Room], nexus: [Room] } }
//! Room = { name, tiles: [[Tile; 11]; 11], scores: [{ line, column, score }] }
//! Tile = { type, ...fields of that type }
//! ```
//!
//! [`import_tower`] never fails. Every problem it meets is appended to
//! [`ImportResult::errors`] as a human-readable message and the offending
//! value is skipped or degraded, so the caller always gets a best-effort
//! tower. [`export_tower`] is a pure read of an already valid tower.

mod enemy;
mod export;
mod fields;
mod import;
mod level;
mod room;
mod validate;

pub use export::{export_tower, export_tower_string};
pub use import::import_tower;

use tower_core::Tower;

// ===== tower record =====
pub(crate) const ATTRIBUTE_NAME: &str = "name";
pub(crate) const ATTRIBUTE_ENEMIES: &str = "enemies";
pub(crate) const ATTRIBUTE_LEVELS: &str = "levels";
pub(crate) const ATTRIBUTE_STARTING_STATS: &str = "startingStats";
pub(crate) const ATTRIBUTE_ROOMS: &str = "rooms";
pub(crate) const ATTRIBUTE_STANDARD: &str = "standard";
pub(crate) const ATTRIBUTE_NEXUS: &str = "nexus";

// ===== enemy, level and stats records =====
pub(crate) const ATTRIBUTE_TYPE: &str = "type";
pub(crate) const ATTRIBUTE_LEVEL: &str = "level";
pub(crate) const ATTRIBUTE_HP: &str = "hp";
pub(crate) const ATTRIBUTE_ATK: &str = "atk";
pub(crate) const ATTRIBUTE_DEF: &str = "def";
pub(crate) const ATTRIBUTE_EXP: &str = "exp";
pub(crate) const ATTRIBUTE_DROP: &str = "drop";

// ===== room and tile records =====
pub(crate) const ATTRIBUTE_TILES: &str = "tiles";
pub(crate) const ATTRIBUTE_SCORES: &str = "scores";
pub(crate) const ATTRIBUTE_LINE: &str = "line";
pub(crate) const ATTRIBUTE_COLUMN: &str = "column";
pub(crate) const ATTRIBUTE_COLOR: &str = "color";
pub(crate) const ATTRIBUTE_ENEMY_TYPE: &str = "enemyType";
pub(crate) const ATTRIBUTE_ENEMY_LEVEL: &str = "enemyLevel";
pub(crate) const ATTRIBUTE_DIRECTION: &str = "direction";
pub(crate) const ATTRIBUTE_SCORE: &str = "score";

/// Best-effort tower plus every problem found while importing it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImportResult {
    pub tower: Tower,
    pub errors: Vec<String>,
}

impl ImportResult {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}
