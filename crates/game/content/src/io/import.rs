use serde_json::Value;
use tower_core::{GameTables, Room, Tower};

use super::enemy::{check_roster, import_enemy};
use super::level::{import_level, import_starting_stats};
use super::room::import_room;
use super::validate::check_tower;
use super::{
    ATTRIBUTE_ENEMIES, ATTRIBUTE_LEVELS, ATTRIBUTE_NAME, ATTRIBUTE_NEXUS, ATTRIBUTE_ROOMS,
    ATTRIBUTE_STANDARD, ATTRIBUTE_STARTING_STATS, ImportResult,
};

/// Imports a tower record, collecting every problem instead of stopping at
/// the first one.
///
/// A document that is not JSON at all yields a single error and an empty
/// tower.
pub fn import_tower(data: &str) -> ImportResult {
    let parsed: Value = match serde_json::from_str(data) {
        Ok(parsed) => parsed,
        Err(error) => {
            tracing::warn!(%error, "tower record is not valid JSON");
            return ImportResult {
                tower: Tower::default(),
                errors: vec![format!("Tower record is not valid JSON: {error}")],
            };
        }
    };

    let mut importer = Importer::new(GameTables::shared());
    importer.import(&parsed);
    let result = importer.finish();
    if !result.is_clean() {
        tracing::warn!(
            tower = %result.tower.name,
            errors = result.errors.len(),
            "tower imported with errors"
        );
    }
    result
}

struct Importer<'a> {
    tables: &'a GameTables,
    tower: Tower,
    errors: Vec<String>,
}

impl<'a> Importer<'a> {
    fn new(tables: &'a GameTables) -> Self {
        Self {
            tables,
            tower: Tower::default(),
            errors: Vec::new(),
        }
    }

    fn import(&mut self, parsed: &Value) {
        match parsed.get(ATTRIBUTE_NAME).and_then(Value::as_str) {
            Some(name) => self.tower.name = name.to_owned(),
            None => self.errors.push("Tower name is missing".to_owned()),
        }

        self.import_enemies(parsed.get(ATTRIBUTE_ENEMIES));
        self.import_levels(parsed.get(ATTRIBUTE_LEVELS));
        self.import_starting_stats(parsed.get(ATTRIBUTE_STARTING_STATS));

        match parsed.get(ATTRIBUTE_ROOMS) {
            Some(rooms) if rooms.is_object() => {
                self.tower.standard_rooms =
                    self.import_rooms(rooms.get(ATTRIBUTE_STANDARD), "Standard");
                self.tower.nexus_rooms = self.import_rooms(rooms.get(ATTRIBUTE_NEXUS), "Nexus");
            }
            _ => self.errors.push("Rooms value is invalid".to_owned()),
        }

        check_tower(&self.tower, &mut self.errors);
    }

    fn import_enemies(&mut self, value: Option<&Value>) {
        let Some(records) = value.and_then(Value::as_array) else {
            self.errors.push("Enemies value is invalid".to_owned());
            return;
        };
        self.tower.enemies = records
            .iter()
            .enumerate()
            .filter_map(|(index, record)| {
                import_enemy(record, index + 1, self.tables, &mut self.errors)
            })
            .collect();
        check_roster(&self.tower.enemies, &mut self.errors);
    }

    fn import_levels(&mut self, value: Option<&Value>) {
        let Some(records) = value.and_then(Value::as_array) else {
            self.errors.push("Levels value is invalid".to_owned());
            return;
        };
        self.tower.levels = records
            .iter()
            .enumerate()
            .filter_map(|(index, record)| import_level(record, index + 1, &mut self.errors))
            .collect();
    }

    fn import_starting_stats(&mut self, value: Option<&Value>) {
        match value {
            Some(record) if !record.is_null() => {
                self.tower.starting_stats = import_starting_stats(record, &mut self.errors);
            }
            _ => self.errors.push("Starting stats value is invalid".to_owned()),
        }
    }

    /// Each room list is optional; a present list must be an array.
    fn import_rooms(&mut self, value: Option<&Value>, group: &str) -> Vec<Room> {
        let records = match value {
            None | Some(Value::Null) => return Vec::new(),
            Some(Value::Array(records)) => records,
            Some(_) => {
                self.errors.push(format!("{group} rooms value is invalid"));
                return Vec::new();
            }
        };
        records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                let label = format!("{group} room {}", index + 1);
                import_room(record, &label, &self.tower, &mut self.errors)
            })
            .collect()
    }

    fn finish(self) -> ImportResult {
        ImportResult {
            tower: self.tower,
            errors: self.errors,
        }
    }
}
