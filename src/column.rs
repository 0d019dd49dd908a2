//! Column - represents a column in a DataFrame, used for building expressions.
//! Thin wrapper around the row-evaluated [`Expr`] IR.

use crate::expr::{CmpOp, Expr};
use crate::schema::DataType;
use crate::value::Value;

#[derive(Debug, Clone)]
pub struct Column {
    name: String,
    expr: Expr,
}

impl Column {
    /// Create a new Column from a column name
    pub fn new(name: String) -> Self {
        Column {
            name: name.clone(),
            expr: Expr::Column(name),
        }
    }

    /// Create a Column from an Expr
    pub fn from_expr(expr: Expr, name: Option<String>) -> Self {
        let display_name = name.unwrap_or_else(|| "<expr>".to_string());
        Column {
            name: display_name,
            expr,
        }
    }

    /// Get the underlying Expr
    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    /// Convert to Expr (consumes self)
    pub fn into_expr(self) -> Expr {
        self.expr
    }

    /// Get the column name
    pub fn name(&self) -> &str {
        &self.name
    }

    fn cmp(&self, op: CmpOp, other: impl Into<Expr>, symbol: &str) -> Column {
        let rhs: Expr = other.into();
        Column {
            name: format!("({} {} {})", self.name, symbol, expr_label(&rhs)),
            expr: Expr::Cmp {
                op,
                left: Box::new(self.expr.clone()),
                right: Box::new(rhs),
            },
        }
    }

    /// Greater than a literal or another column. Null cells yield null, not true.
    pub fn gt(&self, other: impl Into<Expr>) -> Column {
        self.cmp(CmpOp::Gt, other, ">")
    }

    /// Greater than or equal
    pub fn gt_eq(&self, other: impl Into<Expr>) -> Column {
        self.cmp(CmpOp::GtEq, other, ">=")
    }

    /// Less than
    pub fn lt(&self, other: impl Into<Expr>) -> Column {
        self.cmp(CmpOp::Lt, other, "<")
    }

    /// Less than or equal
    pub fn lt_eq(&self, other: impl Into<Expr>) -> Column {
        self.cmp(CmpOp::LtEq, other, "<=")
    }

    /// Equal to
    pub fn eq(&self, other: impl Into<Expr>) -> Column {
        self.cmp(CmpOp::Eq, other, "==")
    }

    /// Not equal to
    pub fn neq(&self, other: impl Into<Expr>) -> Column {
        self.cmp(CmpOp::Neq, other, "!=")
    }

    /// Check if column is null
    pub fn is_null(&self) -> Column {
        Column {
            name: format!("({} IS NULL)", self.name),
            expr: Expr::IsNull(Box::new(self.expr.clone())),
        }
    }

    /// Check if column is not null
    pub fn is_not_null(&self) -> Column {
        Column {
            name: format!("({} IS NOT NULL)", self.name),
            expr: Expr::IsNotNull(Box::new(self.expr.clone())),
        }
    }

    /// Logical AND with another predicate column
    pub fn and(&self, other: &Column) -> Column {
        Column {
            name: format!("({} AND {})", self.name, other.name),
            expr: Expr::And(Box::new(self.expr.clone()), Box::new(other.expr.clone())),
        }
    }

    /// Logical OR with another predicate column
    pub fn or(&self, other: &Column) -> Column {
        Column {
            name: format!("({} OR {})", self.name, other.name),
            expr: Expr::Or(Box::new(self.expr.clone()), Box::new(other.expr.clone())),
        }
    }

    /// Logical NOT of a predicate column
    pub fn not(&self) -> Column {
        Column {
            name: format!("(NOT {})", self.name),
            expr: Expr::Not(Box::new(self.expr.clone())),
        }
    }

    /// Index into an array-valued column; out-of-range positions yield null.
    pub fn get_item(&self, index: usize) -> Column {
        Column {
            name: format!("{}[{}]", self.name, index),
            expr: Expr::GetItem {
                inner: Box::new(self.expr.clone()),
                index,
            },
        }
    }

    /// Cast to a target type. String sources parse; failures surface as
    /// `Parse` errors when the column is evaluated.
    pub fn cast(&self, to: DataType) -> Column {
        Column {
            name: format!("CAST({} AS {})", self.name, to),
            expr: Expr::Cast {
                inner: Box::new(self.expr.clone()),
                to,
            },
        }
    }
}

/// Short label for the right-hand side of a comparison, used in the derived
/// column name shown by `show()` and error messages.
fn expr_label(e: &Expr) -> String {
    match e {
        Expr::Literal(v) => v.to_string(),
        Expr::Column(name) => name.clone(),
        _ => "<expr>".to_string(),
    }
}

impl From<Column> for Expr {
    fn from(c: Column) -> Self {
        c.expr
    }
}

impl From<&Column> for Expr {
    fn from(c: &Column) -> Self {
        c.expr.clone()
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Long(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Long(n as i64)
    }
}

impl From<f64> for Value {
    fn from(d: f64) -> Self {
        Value::Double(d)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gt_builds_named_predicate() {
        let c = Column::new("Age".to_string()).gt(30);
        assert_eq!(c.name(), "(Age > 30)");
        assert!(matches!(c.expr(), Expr::Cmp { op: CmpOp::Gt, .. }));
    }

    #[test]
    fn test_literal_conversions() {
        assert_eq!(Value::from(3i32), Value::Long(3));
        assert_eq!(Value::from(2.5f64), Value::Double(2.5));
        assert_eq!(Value::from("x"), Value::Str("x".to_string()));
    }

    #[test]
    fn test_connective_names() {
        let a = Column::new("a".to_string()).is_null();
        let b = Column::new("b".to_string()).is_not_null();
        assert_eq!(a.and(&b).name(), "((a IS NULL) AND (b IS NOT NULL))");
        assert_eq!(a.not().name(), "(NOT (a IS NULL))");
    }

    #[test]
    fn test_get_item_and_cast_names() {
        let c = Column::new("arr".to_string()).get_item(2).cast(DataType::Long);
        assert_eq!(c.name(), "CAST(arr[2] AS long)");
    }

    #[test]
    fn test_column_to_column_comparison() {
        let a = Column::new("a".to_string());
        let b = Column::new("b".to_string());
        let c = a.gt(&b);
        assert_eq!(c.name(), "(a > b)");
        assert!(matches!(c.expr(), Expr::Cmp { op: CmpOp::Gt, .. }));
    }
}
