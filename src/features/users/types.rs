use serde::{Deserialize, Deserializer};
use serde_json::{Map, Number, Value};
use std::fmt;

/// A user record as returned by the backend list endpoint.
///
/// Decoding never fails: the backend owns the record shape and the table
/// shows whatever it can. Missing fields render empty.
#[derive(Clone, Debug, PartialEq)]
pub struct User {
    /// Backend identifier, empty when the record carries none.
    pub id: String,
    pub name: String,
    pub email: String,
    pub age: Option<Age>,
}

/// Display-only age; backends disagree on whether it is a number or a string.
#[derive(Clone, Debug, PartialEq)]
pub enum Age {
    Number(Number),
    Text(String),
}

impl fmt::Display for Age {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Age::Number(value) => formatter.write_str(&number_text(value)),
            Age::Text(value) => formatter.write_str(value),
        }
    }
}

impl User {
    /// Builds a row from one element of the list body. Document-store
    /// backends send `_id`, sometimes next to a virtual `id`; `_id` wins.
    pub fn from_json(value: &Value) -> Self {
        let Some(record) = value.as_object() else {
            return Self {
                id: String::new(),
                name: String::new(),
                email: String::new(),
                age: None,
            };
        };

        Self {
            id: record_id(record),
            name: record.get("name").map(display_text).unwrap_or_default(),
            email: record.get("email").map(display_text).unwrap_or_default(),
            age: record.get("age").and_then(age_from_json),
        }
    }
}

impl<'de> Deserialize<'de> for User {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(|value| Self::from_json(&value))
    }
}

fn record_id(record: &Map<String, Value>) -> String {
    ["_id", "id"]
        .iter()
        .filter_map(|key| record.get(*key))
        .find_map(id_text)
        .unwrap_or_default()
}

fn id_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(number) => Some(number_text(number)),
        // Extended JSON object ids: {"$oid": "..."}
        Value::Object(object) => object.get("$oid").and_then(Value::as_str).map(str::to_string),
        _ => None,
    }
}

fn age_from_json(value: &Value) -> Option<Age> {
    match value {
        Value::Null => None,
        Value::Number(number) => Some(Age::Number(number.clone())),
        other => Some(Age::Text(display_text(other))),
    }
}

/// Renders any JSON value as table text.
fn display_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Number(number) => number_text(number),
        Value::Bool(flag) => flag.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Whole-valued floats print without a fraction, the way browsers show them.
fn number_text(number: &Number) -> String {
    match number.as_f64() {
        Some(value) if number.is_f64() && value.fract() == 0.0 && value.abs() < 1e15 => {
            (value as i64).to_string()
        }
        _ => number.to_string(),
    }
}
