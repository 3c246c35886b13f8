use serde_json::{Value, json};
use tower_core::{LevelDef, StartingStats};

use super::fields::{optional_i32, report};
use super::{ATTRIBUTE_ATK, ATTRIBUTE_DEF, ATTRIBUTE_EXP, ATTRIBUTE_HP};

pub(super) fn import_level(value: &Value, number: usize, errors: &mut Vec<String>) -> Option<LevelDef> {
    let Some(record) = value.as_object() else {
        errors.push(format!("Level {number} is not an object"));
        return None;
    };

    let mut level = LevelDef::default();
    for (key, slot) in [
        (ATTRIBUTE_EXP, &mut level.exp),
        (ATTRIBUTE_HP, &mut level.hp),
        (ATTRIBUTE_ATK, &mut level.atk),
        (ATTRIBUTE_DEF, &mut level.def),
    ] {
        *slot = report(optional_i32(record, key), errors, || {
            format!("Level {number} {key} is invalid")
        });
    }
    Some(level)
}

/// Callers have already checked that `value` is present.
pub(super) fn import_starting_stats(value: &Value, errors: &mut Vec<String>) -> StartingStats {
    let Some(record) = value.as_object() else {
        errors.push("Starting stats value is invalid".to_owned());
        return StartingStats::default();
    };

    let mut stats = StartingStats::default();
    for (key, slot) in [
        (ATTRIBUTE_HP, &mut stats.hp),
        (ATTRIBUTE_ATK, &mut stats.atk),
        (ATTRIBUTE_DEF, &mut stats.def),
    ] {
        *slot = report(optional_i32(record, key), errors, || {
            format!("Starting stats {key} is invalid")
        });
    }
    stats
}

pub(super) fn export_level(level: &LevelDef) -> Value {
    json!({
        ATTRIBUTE_EXP: level.exp,
        ATTRIBUTE_HP: level.hp,
        ATTRIBUTE_ATK: level.atk,
        ATTRIBUTE_DEF: level.def,
    })
}

pub(super) fn export_starting_stats(stats: &StartingStats) -> Value {
    json!({
        ATTRIBUTE_HP: stats.hp,
        ATTRIBUTE_ATK: stats.atk,
        ATTRIBUTE_DEF: stats.def,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_fields_are_optional_integers() {
        let mut errors = Vec::new();
        let level = import_level(
            &json!({ "exp": 100, "hp": null, "atk": 2.5, "def": 1 }),
            4,
            &mut errors,
        );
        assert_eq!(
            level,
            Some(LevelDef {
                exp: Some(100),
                hp: None,
                atk: None,
                def: Some(1),
            })
        );
        assert_eq!(errors, vec!["Level 4 atk is invalid".to_owned()]);
    }

    #[test]
    fn starting_stats_must_be_an_object() {
        let mut errors = Vec::new();
        let stats = import_starting_stats(&json!([1, 2, 3]), &mut errors);
        assert_eq!(stats, StartingStats::default());
        assert_eq!(errors, vec!["Starting stats value is invalid".to_owned()]);
    }

    #[test]
    fn starting_stats_export_keeps_nulls() {
        let stats = StartingStats {
            hp: Some(1000),
            atk: None,
            def: Some(10),
        };
        assert_eq!(
            export_starting_stats(&stats),
            json!({ "hp": 1000, "atk": null, "def": 10 })
        );
    }
}
