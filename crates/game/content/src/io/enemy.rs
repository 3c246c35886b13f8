use serde_json::{Value, json};
use tower_core::{Enemy, EnemyType, GameTables};

use super::fields::{Record, optional_i32, optional_str, optional_u32, report};
use super::{
    ATTRIBUTE_ATK, ATTRIBUTE_DEF, ATTRIBUTE_DROP, ATTRIBUTE_EXP, ATTRIBUTE_HP, ATTRIBUTE_LEVEL,
    ATTRIBUTE_NAME, ATTRIBUTE_TYPE,
};

/// Converts one roster record. `number` is the 1-based position used in
/// messages. Returns `None` only when the record is not an object.
pub(super) fn import_enemy(
    value: &Value,
    number: usize,
    tables: &GameTables,
    errors: &mut Vec<String>,
) -> Option<Enemy> {
    let Some(record) = value.as_object() else {
        errors.push(format!("Enemy {number} is not an object"));
        return None;
    };

    let mut enemy = Enemy {
        enemy_type: import_type(record, number, errors),
        level: report(optional_u32(record, ATTRIBUTE_LEVEL), errors, || {
            format!("Enemy {number} level is invalid")
        }),
        name: report(optional_str(record, ATTRIBUTE_NAME), errors, || {
            format!("Enemy {number} name is invalid")
        })
        .unwrap_or_default()
        .to_owned(),
        ..Enemy::default()
    };

    for (key, slot) in [
        (ATTRIBUTE_HP, &mut enemy.hp),
        (ATTRIBUTE_ATK, &mut enemy.atk),
        (ATTRIBUTE_DEF, &mut enemy.def),
        (ATTRIBUTE_EXP, &mut enemy.exp),
    ] {
        *slot = report(optional_i32(record, key), errors, || {
            format!("Enemy {number} {key} is invalid")
        });
    }

    let drop = report(optional_str(record, ATTRIBUTE_DROP), errors, || {
        format!("Enemy {number} drop is invalid")
    });
    enemy.drop = match drop {
        None | Some("") => None,
        Some(name) if tables.drops().contains(name) => Some(name.to_owned()),
        Some(name) => {
            // Unknown drops degrade to "no drop".
            tracing::debug!(enemy = number, drop = name, "ignoring unknown drop");
            None
        }
    };

    Some(enemy)
}

fn import_type(record: &Record, number: usize, errors: &mut Vec<String>) -> Option<EnemyType> {
    let text = report(optional_str(record, ATTRIBUTE_TYPE), errors, || {
        format!("Enemy {number} type is invalid")
    })?;
    match text.parse() {
        Ok(enemy_type) => Some(enemy_type),
        Err(_) => {
            errors.push(format!("Enemy {number} type '{text}' is unknown"));
            None
        }
    }
}

/// Tiles reference roster entries by `(type, level)`, so that pair must be
/// unique among authored entries.
pub(super) fn check_roster(enemies: &[Enemy], errors: &mut Vec<String>) {
    for (index, enemy) in enemies.iter().enumerate() {
        let (Some(enemy_type), Some(level)) = (enemy.enemy_type, enemy.level) else {
            continue;
        };
        let first = enemies[..index]
            .iter()
            .position(|other| other.enemy_type == Some(enemy_type) && other.level == Some(level));
        if let Some(first) = first {
            errors.push(format!(
                "Enemy {} repeats type '{enemy_type}' level {level} of enemy {}",
                index + 1,
                first + 1
            ));
        }
    }
}

pub(super) fn export_enemy(enemy: &Enemy) -> Value {
    json!({
        ATTRIBUTE_TYPE: enemy.enemy_type.map(|enemy_type| enemy_type.as_ref().to_owned()),
        ATTRIBUTE_LEVEL: enemy.level,
        ATTRIBUTE_NAME: enemy.name,
        ATTRIBUTE_HP: enemy.hp,
        ATTRIBUTE_ATK: enemy.atk,
        ATTRIBUTE_DEF: enemy.def,
        ATTRIBUTE_EXP: enemy.exp,
        ATTRIBUTE_DROP: enemy.drop,
    })
}
