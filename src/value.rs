//! Cell values held by DataFrame rows.
//!
//! Integral cells are 64-bit throughout (Spark-style inference maps every
//! integer width to long), so `Long` is the only integer variant.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::EngineError;
use crate::schema::DataType;

/// A single cell in a row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Null,
    Boolean(bool),
    Long(i64),
    Double(f64),
    Str(String),
    Array(Vec<Value>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Short type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Long(_) => "long",
            Value::Double(_) => "double",
            Value::Str(_) => "string",
            Value::Array(_) => "array",
        }
    }

    pub fn as_long(&self) -> Option<i64> {
        match self {
            Value::Long(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Long(n) => Some(*n as f64),
            Value::Double(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// True when the cell is valid under the declared column type.
    /// Null is accepted here; nullable enforcement happens at row validation.
    pub fn matches(&self, data_type: &DataType) -> bool {
        match (self, data_type) {
            (Value::Null, _) => true,
            (Value::Boolean(_), DataType::Boolean) => true,
            (Value::Long(_), DataType::Long) => true,
            (Value::Double(_), DataType::Double) => true,
            (Value::Str(_), DataType::String) => true,
            (Value::Array(items), DataType::Array(inner)) => {
                items.iter().all(|v| v.matches(inner))
            }
            _ => false,
        }
    }

    /// Convert to a JSON value for the embedding surface (collect).
    pub fn to_json(&self) -> JsonValue {
        match self {
            Value::Null => JsonValue::Null,
            Value::Boolean(b) => JsonValue::Bool(*b),
            Value::Long(n) => JsonValue::Number(serde_json::Number::from(*n)),
            Value::Double(d) => serde_json::Number::from_f64(*d)
                .map(JsonValue::Number)
                .unwrap_or(JsonValue::Null),
            Value::Str(s) => JsonValue::String(s.clone()),
            Value::Array(items) => JsonValue::Array(items.iter().map(Value::to_json).collect()),
        }
    }

    /// Build a cell from a JSON value under a declared column type.
    /// JSON numbers land as long or double per the declared type.
    pub fn from_json(value: &JsonValue, data_type: &DataType) -> Result<Value, EngineError> {
        match (value, data_type) {
            (JsonValue::Null, _) => Ok(Value::Null),
            (JsonValue::Bool(b), DataType::Boolean) => Ok(Value::Boolean(*b)),
            (JsonValue::Number(n), DataType::Long) => n
                .as_i64()
                .map(Value::Long)
                .ok_or_else(|| EngineError::TypeMismatch(format!("{n} is not a 64-bit integer"))),
            (JsonValue::Number(n), DataType::Double) => n
                .as_f64()
                .map(Value::Double)
                .ok_or_else(|| EngineError::TypeMismatch(format!("{n} is not a double"))),
            (JsonValue::String(s), DataType::String) => Ok(Value::Str(s.clone())),
            (JsonValue::Array(items), DataType::Array(inner)) => {
                let cells = items
                    .iter()
                    .map(|v| Value::from_json(v, inner))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Value::Array(cells))
            }
            (other, dt) => Err(EngineError::TypeMismatch(format!(
                "JSON value {other} does not fit declared type {dt}"
            ))),
        }
    }

    /// Three-valued comparison: `None` when either side is null or the
    /// types are not comparable. Long and double compare numerically.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Null, _) | (_, Value::Null) => None,
            (Value::Long(a), Value::Long(b)) => Some(a.cmp(b)),
            (Value::Double(_), _) | (_, Value::Double(_)) => {
                let a = self.as_f64()?;
                let b = other.as_f64()?;
                a.partial_cmp(&b)
            }
            (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
            (Value::Boolean(a), Value::Boolean(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

/// One row of a DataFrame, positionally aligned with the frame's schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row(pub Vec<Value>);

impl Row {
    pub fn new(values: Vec<Value>) -> Self {
        Row(values)
    }

    pub fn values(&self) -> &[Value] {
        &self.0
    }

    pub fn into_values(self) -> Vec<Value> {
        self.0
    }
}

impl std::ops::Deref for Row {
    type Target = [Value];

    fn deref(&self) -> &[Value] {
        &self.0
    }
}

impl From<Vec<Value>> for Row {
    fn from(values: Vec<Value>) -> Self {
        Row(values)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Long(n) => write!(f, "{n}"),
            Value::Double(d) => write!(f, "{d}"),
            Value::Str(s) => write!(f, "{s}"),
            Value::Array(items) => {
                write!(f, "[")?;
                for (i, v) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{v}")?;
                }
                write!(f, "]")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_declared_type() {
        assert!(Value::Long(1).matches(&DataType::Long));
        assert!(Value::Null.matches(&DataType::Long));
        assert!(!Value::Str("1".into()).matches(&DataType::Long));
        assert!(
            Value::Array(vec![Value::Long(1), Value::Null])
                .matches(&DataType::Array(Box::new(DataType::Long)))
        );
        assert!(
            !Value::Array(vec![Value::Str("x".into())])
                .matches(&DataType::Array(Box::new(DataType::Long)))
        );
    }

    #[test]
    fn test_compare_promotes_long_to_double() {
        assert_eq!(
            Value::Long(2).compare(&Value::Double(1.5)),
            Some(Ordering::Greater)
        );
        assert_eq!(
            Value::Double(1.5).compare(&Value::Long(2)),
            Some(Ordering::Less)
        );
    }

    #[test]
    fn test_compare_null_is_unknown() {
        assert_eq!(Value::Null.compare(&Value::Long(1)), None);
        assert_eq!(Value::Long(1).compare(&Value::Null), None);
    }

    #[test]
    fn test_compare_mismatched_types_is_unknown() {
        assert_eq!(Value::Str("5".into()).compare(&Value::Long(5)), None);
    }

    #[test]
    fn test_json_round_trip() {
        let v = Value::Array(vec![Value::Long(32), Value::Long(49)]);
        let json = v.to_json();
        let back = Value::from_json(&json, &DataType::Array(Box::new(DataType::Long))).unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn test_from_json_rejects_wrong_shape() {
        let err = Value::from_json(&serde_json::json!("abc"), &DataType::Long).unwrap_err();
        assert!(matches!(err, EngineError::TypeMismatch(_)));
    }

    #[test]
    fn test_display_array() {
        let v = Value::Array(vec![Value::Long(1), Value::Null, Value::Long(3)]);
        assert_eq!(v.to_string(), "[1, null, 3]");
    }
}
