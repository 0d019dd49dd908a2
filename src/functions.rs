//! Free functions mirroring `pyspark.sql.functions`.

use crate::column::Column;
use crate::expr::Expr;
use crate::value::Value;

/// Get a column by name
pub fn col(name: &str) -> Column {
    Column::new(name.to_string())
}

/// Create a literal column from a value
pub fn lit(value: impl Into<Value>) -> Column {
    let v: Value = value.into();
    let name = v.to_string();
    Column::from_expr(Expr::Literal(v), Some(name))
}

pub fn lit_i64(value: i64) -> Column {
    lit(value)
}

pub fn lit_f64(value: f64) -> Column {
    lit(value)
}

pub fn lit_bool(value: bool) -> Column {
    lit(value)
}

pub fn lit_str(value: &str) -> Column {
    lit(value)
}

/// Null check, `isnull` style
pub fn is_null(col: &Column) -> Column {
    col.is_null()
}

/// Split a string column on a **literal** delimiter into an array column.
/// No regex interpretation: `split(col("Marks"), "|")` needs no escaping.
pub fn split(col: &Column, delimiter: &str) -> Column {
    Column::from_expr(
        Expr::Split {
            inner: Box::new(col.expr().clone()),
            delimiter: delimiter.to_string(),
        },
        Some(format!("split({}, {})", col.name(), delimiter)),
    )
}

/// Join columns with a separator, `concat_ws` style: null cells are skipped
/// rather than rendered.
pub fn concat_ws(separator: &str, cols: &[&Column]) -> Column {
    let names: Vec<&str> = cols.iter().map(|c| c.name()).collect();
    Column::from_expr(
        Expr::ConcatWs {
            separator: separator.to_string(),
            items: cols.iter().map(|c| c.expr().clone()).collect(),
        },
        Some(format!("concat_ws({}, {})", separator, names.join(", "))),
    )
}

/// Split a string on a literal delimiter. Splitting the empty string yields
/// one empty part, matching `str::split` on a string pattern.
pub fn split_literal(s: &str, delimiter: &str) -> Vec<String> {
    s.split(delimiter).map(|p| p.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::CmpOp;

    #[test]
    fn test_col_then_gt() {
        let pred = col("Age").gt(30);
        assert!(matches!(pred.expr(), Expr::Cmp { op: CmpOp::Gt, .. }));
    }

    #[test]
    fn test_lit_display_name() {
        assert_eq!(lit(30i64).name(), "30");
        assert_eq!(lit_str("x").name(), "x");
    }

    #[test]
    fn test_split_builds_named_expr() {
        let c = split(&col("Marks"), "|");
        assert_eq!(c.name(), "split(Marks, |)");
        assert!(matches!(c.expr(), Expr::Split { .. }));
    }

    #[test]
    fn test_concat_ws_builds_named_expr() {
        let a = col("sub_0");
        let b = col("sub_1");
        let c = concat_ws("|", &[&a, &b]);
        assert_eq!(c.name(), "concat_ws(|, sub_0, sub_1)");
        assert!(matches!(c.expr(), Expr::ConcatWs { .. }));
    }

    #[test]
    fn test_split_literal_keeps_empty_parts() {
        assert_eq!(split_literal("32||39", "|"), vec!["32", "", "39"]);
        assert_eq!(split_literal("", "|"), vec![""]);
    }
}
