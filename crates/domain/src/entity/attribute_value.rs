//! Typed attribute values attached to entity states.

use serde::{Deserialize, Serialize};

/// A single typed attribute value.
///
/// Serializes untagged, so downstream consumers only see plain JSON values.
/// When deserializing, integers that fit `i64` become [`Int`](Self::Int),
/// other numbers [`Float`](Self::Float), and the wrapper objects
/// `{"enum": "<label>"}` / `{"decimal": "<digits>"}` select
/// [`Labeled`](Self::Labeled) / [`Decimal`](Self::Decimal).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged, from = "serde_json::Value")]
pub enum AttributeValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// An enumerated value, identified by its label (e.g. `heat`, `°C`).
    Labeled(String),
    /// An exact decimal kept in its canonical text form.
    Decimal(String),
    Json(serde_json::Value),
}

impl AttributeValue {
    /// Numeric view of the value, for `Int` and `Float` only.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(value) => Some(*value as f64),
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// Canonical text of the kinds the exposure filter stringifies.
    ///
    /// Returns `None` for kinds that are passed through unchanged.
    #[must_use]
    pub fn canonical_string(&self) -> Option<String> {
        match self {
            Self::Int(value) => Some(value.to_string()),
            Self::Labeled(label) => Some(label.clone()),
            Self::Decimal(digits) => Some(digits.clone()),
            Self::Bool(_) | Self::Float(_) | Self::String(_) | Self::Json(_) => None,
        }
    }
}

impl From<serde_json::Value> for AttributeValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Bool(flag) => Self::Bool(flag),
            Value::Number(number) => {
                if let Some(int) = number.as_i64() {
                    Self::Int(int)
                } else if let Some(big) = number.as_u64() {
                    // past i64: keep the exact digits
                    Self::String(big.to_string())
                } else {
                    number
                        .as_f64()
                        .map_or(Self::Json(Value::Number(number)), Self::Float)
                }
            }
            Value::String(text) => Self::String(text),
            Value::Object(map) => {
                if map.len() == 1 {
                    if let Some(Value::String(label)) = map.get("enum") {
                        return Self::Labeled(label.clone());
                    }
                    if let Some(Value::String(digits)) = map.get("decimal") {
                        return Self::Decimal(digits.clone());
                    }
                }
                Self::Json(Value::Object(map))
            }
            other => Self::Json(other),
        }
    }
}
