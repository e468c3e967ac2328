use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_UNCLAIMED_SENTINEL: &str = "<UNCLAIMED>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub fn label(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
        }
    }
}

/// One entry of the pixel dataset.
///
/// Fields stay as raw JSON so that a record with a string coordinate or a
/// missing color can still be inspected and rejected with a precise reason
/// instead of failing to decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PixelRecord {
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub x: Value,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub y: Value,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub color: Value,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub username: Value,
    #[serde(flatten)]
    pub extensions: Map<String, Value>,
}

impl PixelRecord {
    pub fn from_value(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };
        let mut record = Self::default();
        for (key, field) in object {
            match key.as_str() {
                "x" => record.x = field.clone(),
                "y" => record.y = field.clone(),
                "color" => record.color = field.clone(),
                "username" => record.username = field.clone(),
                _ => {
                    record.extensions.insert(key.clone(), field.clone());
                }
            }
        }
        record
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_str()
    }

    pub fn is_unclaimed(&self, sentinel: &str) -> bool {
        self.username() == Some(sentinel)
    }

    pub fn is_owned_by(&self, submitter: &str) -> bool {
        self.username() == Some(submitter)
    }

    /// Username as it should be echoed back to the submitter.
    pub fn display_username(&self) -> String {
        match &self.username {
            Value::Null => "<missing>".to_string(),
            Value::String(name) => name.clone(),
            other => other.to_string(),
        }
    }

    pub fn coordinate(&self, axis: Axis) -> Option<f64> {
        match axis {
            Axis::X => self.x.as_f64(),
            Axis::Y => self.y.as_f64(),
        }
    }

    pub fn has_valid_coordinate(&self, axis: Axis) -> bool {
        self.coordinate(axis).is_some_and(|value| value >= 0.0)
    }

    pub fn has_color(&self) -> bool {
        match &self.color {
            Value::Null => false,
            Value::Bool(flag) => *flag,
            Value::Number(number) => number.as_f64().is_some_and(|value| value != 0.0),
            Value::String(text) => !text.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }
}

#[cfg(test)]
#[path = "record_test.rs"]
mod tests;
