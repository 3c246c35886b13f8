//! Typed reads of record attributes.
//!
//! Every reader treats a missing attribute and an explicit `null` the same
//! way (`Ok(None)`) and reports a present value of the wrong shape as
//! [`Invalid`].

use std::str::FromStr;

use serde_json::{Map, Value};

pub(crate) type Record = Map<String, Value>;

/// Attribute present with an unusable value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Invalid;

fn present<'a>(record: &'a Record, key: &str) -> Option<&'a Value> {
    record.get(key).filter(|value| !value.is_null())
}

pub(crate) fn optional_i32(record: &Record, key: &str) -> Result<Option<i32>, Invalid> {
    present(record, key)
        .map(|value| {
            value
                .as_i64()
                .and_then(|number| i32::try_from(number).ok())
                .ok_or(Invalid)
        })
        .transpose()
}

pub(crate) fn optional_u32(record: &Record, key: &str) -> Result<Option<u32>, Invalid> {
    present(record, key)
        .map(|value| {
            value
                .as_u64()
                .and_then(|number| u32::try_from(number).ok())
                .ok_or(Invalid)
        })
        .transpose()
}

pub(crate) fn optional_str<'a>(record: &'a Record, key: &str) -> Result<Option<&'a str>, Invalid> {
    present(record, key)
        .map(|value| value.as_str().ok_or(Invalid))
        .transpose()
}

/// Reads a string attribute and parses it with the enum's persisted
/// spelling.
pub(crate) fn optional_parsed<T: FromStr>(record: &Record, key: &str) -> Result<Option<T>, Invalid> {
    optional_str(record, key)?
        .map(|text| text.parse().map_err(|_| Invalid))
        .transpose()
}

/// Like [`optional_parsed`] but the attribute must be present.
pub(crate) fn required_parsed<T: FromStr>(record: &Record, key: &str) -> Result<T, Invalid> {
    optional_parsed(record, key)?.ok_or(Invalid)
}

/// Unwraps a read, appending `describe()` to `errors` when it was invalid.
pub(crate) fn report<T>(
    read: Result<Option<T>, Invalid>,
    errors: &mut Vec<String>,
    describe: impl FnOnce() -> String,
) -> Option<T> {
    read.unwrap_or_else(|Invalid| {
        errors.push(describe());
        None
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tower_core::Color;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn null_and_missing_read_as_none() {
        let record = record(json!({ "hp": null }));
        assert_eq!(optional_i32(&record, "hp"), Ok(None));
        assert_eq!(optional_i32(&record, "atk"), Ok(None));
    }

    #[test]
    fn wrong_shapes_are_invalid() {
        let record = record(json!({ "hp": "ten", "level": -1, "big": 5_000_000_000i64 }));
        assert_eq!(optional_i32(&record, "hp"), Err(Invalid));
        assert_eq!(optional_u32(&record, "level"), Err(Invalid));
        assert_eq!(optional_i32(&record, "big"), Err(Invalid));
    }

    #[test]
    fn enums_parse_from_persisted_strings() {
        let record = record(json!({ "color": "greenBlue", "bad": "green" }));
        assert_eq!(
            required_parsed::<Color>(&record, "color"),
            Ok(Color::GreenBlue)
        );
        assert_eq!(required_parsed::<Color>(&record, "bad"), Err(Invalid));
        assert_eq!(required_parsed::<Color>(&record, "missing"), Err(Invalid));
    }
}
