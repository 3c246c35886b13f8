//! One grid cell of a room.
//!
//! [`Tile`] is a closed sum type: each variant carries exactly the payload
//! its kind needs. Consumers match on it exhaustively, so adding a kind
//! forces every rule and every importer to handle it.

use crate::data::{Color, ItemName, ScoreType, StaircaseDirection};

use super::EnemyId;

/// Discriminant of a [`Tile`], with the persisted tag spelling.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[strum(serialize_all = "camelCase")]
pub enum TileKind {
    Empty,
    Wall,
    StartingPosition,
    Door,
    Key,
    Item,
    Enemy,
    Staircase,
    Score,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "camelCase"))]
pub enum Tile {
    #[default]
    Empty,
    Wall,
    StartingPosition,
    Door {
        color: Color,
    },
    Key {
        color: Color,
    },
    Item {
        name: ItemName,
    },
    Enemy {
        enemy: EnemyId,
    },
    Staircase {
        direction: StaircaseDirection,
    },
    Score {
        score: ScoreType,
    },
}

impl Tile {
    pub const fn kind(&self) -> TileKind {
        match self {
            Tile::Empty => TileKind::Empty,
            Tile::Wall => TileKind::Wall,
            Tile::StartingPosition => TileKind::StartingPosition,
            Tile::Door { .. } => TileKind::Door,
            Tile::Key { .. } => TileKind::Key,
            Tile::Item { .. } => TileKind::Item,
            Tile::Enemy { .. } => TileKind::Enemy,
            Tile::Staircase { .. } => TileKind::Staircase,
            Tile::Score { .. } => TileKind::Score,
        }
    }

    pub const fn is_empty(&self) -> bool {
        matches!(self, Tile::Empty)
    }

    pub const fn door_color(&self) -> Option<Color> {
        match self {
            Tile::Door { color } => Some(*color),
            _ => None,
        }
    }

    pub const fn key_color(&self) -> Option<Color> {
        match self {
            Tile::Key { color } => Some(*color),
            _ => None,
        }
    }

    pub const fn item_name(&self) -> Option<ItemName> {
        match self {
            Tile::Item { name } => Some(*name),
            _ => None,
        }
    }

    pub const fn enemy(&self) -> Option<EnemyId> {
        match self {
            Tile::Enemy { enemy } => Some(*enemy),
            _ => None,
        }
    }

    pub const fn staircase_direction(&self) -> Option<StaircaseDirection> {
        match self {
            Tile::Staircase { direction } => Some(*direction),
            _ => None,
        }
    }

    pub const fn score_type(&self) -> Option<ScoreType> {
        match self {
            Tile::Score { score } => Some(*score),
            _ => None,
        }
    }
}
