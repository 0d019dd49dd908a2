//! Expression IR evaluated row by row.
//!
//! Comparisons follow PySpark's three-valued logic: any null operand makes
//! the comparison null, and boolean connectives are Kleene (`null AND false`
//! is false, `null OR true` is true, everything else with a null is null).

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::functions::split_literal;
use crate::schema::{DataType, StructType};
use crate::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CmpOp {
    Eq,
    Neq,
    Gt,
    GtEq,
    Lt,
    LtEq,
}

impl CmpOp {
    fn holds(self, ord: std::cmp::Ordering) -> bool {
        use std::cmp::Ordering::*;
        match self {
            CmpOp::Eq => ord == Equal,
            CmpOp::Neq => ord != Equal,
            CmpOp::Gt => ord == Greater,
            CmpOp::GtEq => ord != Less,
            CmpOp::Lt => ord == Less,
            CmpOp::LtEq => ord != Greater,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    Column(String),
    Literal(Value),
    Cmp {
        op: CmpOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
    Not(Box<Expr>),
    IsNull(Box<Expr>),
    IsNotNull(Box<Expr>),
    /// Split a string value on a literal delimiter into an array of strings.
    Split {
        inner: Box<Expr>,
        delimiter: String,
    },
    /// Index into an array value; out-of-range yields null.
    GetItem {
        inner: Box<Expr>,
        index: usize,
    },
    /// Cast a value to a target type; unparseable strings are `Parse` errors.
    Cast {
        inner: Box<Expr>,
        to: DataType,
    },
    /// Join values with a separator, skipping nulls.
    ConcatWs {
        separator: String,
        items: Vec<Expr>,
    },
}

impl Expr {
    /// Evaluate against one row. The result is a [`Value`]; predicates come
    /// back as `Boolean` or `Null`.
    pub fn eval(
        &self,
        row: &[Value],
        schema: &StructType,
        case_sensitive: bool,
    ) -> Result<Value, EngineError> {
        match self {
            Expr::Column(name) => {
                let idx = schema.index_of(name, case_sensitive).ok_or_else(|| {
                    EngineError::ColumnNotFound(format!(
                        "{name} (available: {})",
                        schema.field_names().join(", ")
                    ))
                })?;
                Ok(row[idx].clone())
            }
            Expr::Literal(v) => Ok(v.clone()),
            Expr::Cmp { op, left, right } => {
                let l = left.eval(row, schema, case_sensitive)?;
                let r = right.eval(row, schema, case_sensitive)?;
                if l.is_null() || r.is_null() {
                    return Ok(Value::Null);
                }
                match l.compare(&r) {
                    Some(ord) => Ok(Value::Boolean(op.holds(ord))),
                    None => Err(EngineError::TypeMismatch(format!(
                        "cannot compare {} with {}",
                        l.type_name(),
                        r.type_name()
                    ))),
                }
            }
            Expr::And(left, right) => {
                let l = as_tri_bool(left.eval(row, schema, case_sensitive)?)?;
                let r = as_tri_bool(right.eval(row, schema, case_sensitive)?)?;
                Ok(match (l, r) {
                    (Some(false), _) | (_, Some(false)) => Value::Boolean(false),
                    (Some(true), Some(true)) => Value::Boolean(true),
                    _ => Value::Null,
                })
            }
            Expr::Or(left, right) => {
                let l = as_tri_bool(left.eval(row, schema, case_sensitive)?)?;
                let r = as_tri_bool(right.eval(row, schema, case_sensitive)?)?;
                Ok(match (l, r) {
                    (Some(true), _) | (_, Some(true)) => Value::Boolean(true),
                    (Some(false), Some(false)) => Value::Boolean(false),
                    _ => Value::Null,
                })
            }
            Expr::Not(inner) => {
                match as_tri_bool(inner.eval(row, schema, case_sensitive)?)? {
                    Some(b) => Ok(Value::Boolean(!b)),
                    None => Ok(Value::Null),
                }
            }
            Expr::IsNull(inner) => {
                let v = inner.eval(row, schema, case_sensitive)?;
                Ok(Value::Boolean(v.is_null()))
            }
            Expr::IsNotNull(inner) => {
                let v = inner.eval(row, schema, case_sensitive)?;
                Ok(Value::Boolean(!v.is_null()))
            }
            Expr::Split { inner, delimiter } => {
                match inner.eval(row, schema, case_sensitive)? {
                    Value::Null => Ok(Value::Null),
                    Value::Str(s) => Ok(Value::Array(
                        split_literal(&s, delimiter)
                            .into_iter()
                            .map(Value::Str)
                            .collect(),
                    )),
                    other => Err(EngineError::TypeMismatch(format!(
                        "split expects a string, got {}",
                        other.type_name()
                    ))),
                }
            }
            Expr::GetItem { inner, index } => {
                match inner.eval(row, schema, case_sensitive)? {
                    Value::Null => Ok(Value::Null),
                    Value::Array(items) => Ok(items.get(*index).cloned().unwrap_or(Value::Null)),
                    other => Err(EngineError::TypeMismatch(format!(
                        "getItem expects an array, got {}",
                        other.type_name()
                    ))),
                }
            }
            Expr::Cast { inner, to } => {
                let v = inner.eval(row, schema, case_sensitive)?;
                cast_value(v, to)
            }
            Expr::ConcatWs { separator, items } => {
                let mut out = String::new();
                let mut first = true;
                for item in items {
                    let v = item.eval(row, schema, case_sensitive)?;
                    if v.is_null() {
                        continue;
                    }
                    if !first {
                        out.push_str(separator);
                    }
                    out.push_str(&v.to_string());
                    first = false;
                }
                Ok(Value::Str(out))
            }
        }
    }
}

/// Cast one value. Nulls pass through; string sources parse (failure is a
/// `Parse` error naming the offending text); long/double convert numerically
/// with Spark's truncating double-to-long rule.
fn cast_value(v: Value, to: &DataType) -> Result<Value, EngineError> {
    if v.is_null() {
        return Ok(Value::Null);
    }
    match to {
        DataType::Long => match v {
            Value::Long(n) => Ok(Value::Long(n)),
            Value::Double(d) => Ok(Value::Long(d as i64)),
            Value::Str(s) => s.parse::<i64>().map(Value::Long).map_err(|_| {
                EngineError::Parse(format!("cannot parse '{s}' as long"))
            }),
            other => Err(EngineError::TypeMismatch(format!(
                "cannot cast {} to long",
                other.type_name()
            ))),
        },
        DataType::Double => match v {
            Value::Double(d) => Ok(Value::Double(d)),
            Value::Long(n) => Ok(Value::Double(n as f64)),
            Value::Str(s) => s.parse::<f64>().map(Value::Double).map_err(|_| {
                EngineError::Parse(format!("cannot parse '{s}' as double"))
            }),
            other => Err(EngineError::TypeMismatch(format!(
                "cannot cast {} to double",
                other.type_name()
            ))),
        },
        DataType::String => match v {
            Value::Array(_) => Err(EngineError::TypeMismatch(
                "cannot cast array to string".to_string(),
            )),
            other => Ok(Value::Str(other.to_string())),
        },
        DataType::Boolean => match v {
            Value::Boolean(b) => Ok(Value::Boolean(b)),
            Value::Str(s) => match s.trim().to_lowercase().as_str() {
                "true" => Ok(Value::Boolean(true)),
                "false" => Ok(Value::Boolean(false)),
                _ => Err(EngineError::Parse(format!(
                    "cannot parse '{s}' as boolean"
                ))),
            },
            other => Err(EngineError::TypeMismatch(format!(
                "cannot cast {} to boolean",
                other.type_name()
            ))),
        },
        DataType::Array(_) => Err(EngineError::Unsupported(
            "cast to array types is not supported".to_string(),
        )),
    }
}

impl From<Value> for Expr {
    fn from(v: Value) -> Self {
        Expr::Literal(v)
    }
}

impl From<i64> for Expr {
    fn from(n: i64) -> Self {
        Expr::Literal(Value::Long(n))
    }
}

impl From<i32> for Expr {
    fn from(n: i32) -> Self {
        Expr::Literal(Value::Long(n as i64))
    }
}

impl From<f64> for Expr {
    fn from(d: f64) -> Self {
        Expr::Literal(Value::Double(d))
    }
}

impl From<bool> for Expr {
    fn from(b: bool) -> Self {
        Expr::Literal(Value::Boolean(b))
    }
}

impl From<&str> for Expr {
    fn from(s: &str) -> Self {
        Expr::Literal(Value::Str(s.to_string()))
    }
}

impl From<String> for Expr {
    fn from(s: String) -> Self {
        Expr::Literal(Value::Str(s))
    }
}

fn as_tri_bool(v: Value) -> Result<Option<bool>, EngineError> {
    match v {
        Value::Null => Ok(None),
        Value::Boolean(b) => Ok(Some(b)),
        other => Err(EngineError::TypeMismatch(format!(
            "expected boolean predicate, got {}",
            other.type_name()
        ))),
    }
}
