//! DataFrame transformation operations: filter, select, with_column, drop,
//! limit, with_column_renamed.

use super::DataFrame;
use crate::column::Column;
use crate::error::EngineError;
use crate::schema::{DataType, StructField, StructType};
use crate::value::{Row, Value};

/// Select columns (returns a new DataFrame). Preserves case_sensitive on result.
pub fn select(
    df: &DataFrame,
    cols: Vec<&str>,
    case_sensitive: bool,
) -> Result<DataFrame, EngineError> {
    let mut indices = Vec::with_capacity(cols.len());
    for name in &cols {
        indices.push(df.resolve_column_index(name)?);
    }
    let fields: Vec<StructField> = indices
        .iter()
        .map(|&i| df.schema.fields()[i].clone())
        .collect();
    let rows: Vec<Row> = df
        .rows()
        .iter()
        .map(|row| Row::new(indices.iter().map(|&i| row[i].clone()).collect()))
        .collect();
    Ok(DataFrame::from_parts(
        rows,
        StructType::new(fields),
        case_sensitive,
    ))
}

/// Filter rows with a predicate column. Preserves case_sensitive on result.
/// Rows evaluating to null are dropped, not kept (PySpark filter semantics).
pub fn filter(
    df: &DataFrame,
    condition: &Column,
    case_sensitive: bool,
) -> Result<DataFrame, EngineError> {
    let mut kept = Vec::new();
    for row in df.rows() {
        match condition.expr().eval(row, &df.schema, case_sensitive)? {
            Value::Boolean(true) => kept.push(row.clone()),
            Value::Boolean(false) | Value::Null => {}
            other => {
                return Err(EngineError::TypeMismatch(format!(
                    "filter predicate '{}' must be boolean, got {}",
                    condition.name(),
                    other.type_name()
                )));
            }
        }
    }
    Ok(DataFrame::from_parts(
        kept,
        df.schema.as_ref().clone(),
        case_sensitive,
    ))
}

/// Add or replace a column computed from an expression. Preserves
/// case_sensitive on result. Replacing an existing column keeps its position.
pub fn with_column(
    df: &DataFrame,
    column_name: &str,
    col: &Column,
    case_sensitive: bool,
) -> Result<DataFrame, EngineError> {
    let mut values = Vec::with_capacity(df.count());
    for row in df.rows() {
        values.push(col.expr().eval(row, &df.schema, case_sensitive)?);
    }
    let data_type = infer_column_type(&values, column_name)?;
    let field = StructField::new(column_name, data_type, true);

    let existing = df.schema.index_of(column_name, case_sensitive);
    let mut fields = df.schema.fields().to_vec();
    match existing {
        Some(idx) => fields[idx] = field,
        None => fields.push(field),
    }
    let rows: Vec<Row> = df
        .rows()
        .iter()
        .zip(values)
        .map(|(row, value)| {
            let mut cells = row.to_vec();
            match existing {
                Some(idx) => cells[idx] = value,
                None => cells.push(value),
            }
            Row::new(cells)
        })
        .collect();
    Ok(DataFrame::from_parts(
        rows,
        StructType::new(fields),
        case_sensitive,
    ))
}

/// Drop one or more columns.
pub fn drop(
    df: &DataFrame,
    columns: Vec<&str>,
    case_sensitive: bool,
) -> Result<DataFrame, EngineError> {
    let mut dropped = vec![false; df.schema.len()];
    for name in &columns {
        dropped[df.resolve_column_index(name)?] = true;
    }
    let fields: Vec<StructField> = df
        .schema
        .fields()
        .iter()
        .enumerate()
        .filter(|(i, _)| !dropped[*i])
        .map(|(_, f)| f.clone())
        .collect();
    let rows: Vec<Row> = df
        .rows()
        .iter()
        .map(|row| {
            Row::new(
                row.iter()
                    .enumerate()
                    .filter(|(i, _)| !dropped[*i])
                    .map(|(_, v)| v.clone())
                    .collect(),
            )
        })
        .collect();
    Ok(DataFrame::from_parts(
        rows,
        StructType::new(fields),
        case_sensitive,
    ))
}

/// Limit: return first n rows.
pub fn limit(df: &DataFrame, n: usize, case_sensitive: bool) -> Result<DataFrame, EngineError> {
    let rows: Vec<Row> = df.rows().iter().take(n).cloned().collect();
    Ok(DataFrame::from_parts(
        rows,
        df.schema.as_ref().clone(),
        case_sensitive,
    ))
}

/// Rename a column (old_name -> new_name).
pub fn with_column_renamed(
    df: &DataFrame,
    old_name: &str,
    new_name: &str,
    case_sensitive: bool,
) -> Result<DataFrame, EngineError> {
    let resolved = df.resolve_column_name(old_name)?;
    if resolved != new_name && df.schema.index_of(new_name, case_sensitive).is_some() {
        return Err(EngineError::Unsupported(format!(
            "rename would duplicate column '{new_name}'"
        )));
    }
    let fields: Vec<StructField> = df
        .schema
        .fields()
        .iter()
        .map(|f| {
            if f.name == resolved {
                StructField::new(new_name, f.data_type.clone(), f.nullable)
            } else {
                f.clone()
            }
        })
        .collect();
    Ok(DataFrame::from_parts(
        df.rows().to_vec(),
        StructType::new(fields),
        case_sensitive,
    ))
}

/// Infer the declared type of a computed column from its values. Long and
/// double mix to double; an all-null column lands as string.
fn infer_column_type(values: &[Value], column_name: &str) -> Result<DataType, EngineError> {
    let mut inferred: Option<DataType> = None;
    for v in values {
        let vt = match v {
            Value::Null => continue,
            Value::Boolean(_) => DataType::Boolean,
            Value::Long(_) => DataType::Long,
            Value::Double(_) => DataType::Double,
            Value::Str(_) => DataType::String,
            Value::Array(_) => DataType::Array(Box::new(DataType::String)),
        };
        inferred = match inferred {
            None => Some(vt),
            Some(prev) if prev == vt => Some(prev),
            Some(DataType::Long) if vt == DataType::Double => Some(DataType::Double),
            Some(DataType::Double) if vt == DataType::Long => Some(DataType::Double),
            Some(prev) => {
                return Err(EngineError::TypeMismatch(format!(
                    "column '{column_name}' mixes {prev} and {vt} values"
                )));
            }
        };
    }
    Ok(inferred.unwrap_or(DataType::String))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn df() -> DataFrame {
        DataFrame::from_rows(
            vec![
                vec![Value::Str("A".into()), Value::Long(23)],
                vec![Value::Str("B".into()), Value::Long(39)],
                vec![Value::Str("C".into()), Value::Null],
            ],
            StructType::new(vec![
                StructField::new("Name", DataType::String, true),
                StructField::new("Age", DataType::Long, true),
            ]),
            false,
        )
        .unwrap()
    }

    #[test]
    fn test_select_projects_and_reorders() {
        let out = df().select(vec!["age", "name"]).unwrap();
        assert_eq!(out.columns(), vec!["Age", "Name"]);
        assert_eq!(
            out.collect()[0].values(),
            &[Value::Long(23), Value::Str("A".into())]
        );
    }

    #[test]
    fn test_filter_drops_null_predicate_rows() {
        let d = df();
        let out = d.filter(&d.column("Age").unwrap().gt(30)).unwrap();
        // row C has a null Age: predicate is null, row dropped
        assert_eq!(out.count(), 1);
        assert_eq!(out.collect()[0][0], Value::Str("B".into()));
    }

    #[test]
    fn test_with_column_replaces_in_place() {
        let d = df();
        let out = d.with_column("age", &crate::functions::lit(0i64)).unwrap();
        assert_eq!(out.columns(), vec!["Name", "Age"]);
        assert!(out.collect().iter().all(|r| r[1] == Value::Long(0)));
    }

    #[test]
    fn test_with_column_appends_new() {
        let d = df();
        let out = d.with_column("flag", &crate::functions::lit(true)).unwrap();
        assert_eq!(out.columns(), vec!["Name", "Age", "flag"]);
        assert_eq!(
            out.schema().field("flag", false).unwrap().data_type,
            DataType::Boolean
        );
    }

    #[test]
    fn test_drop_missing_column_fails() {
        let err = df().drop(vec!["Nope"]).unwrap_err();
        assert!(matches!(err, EngineError::ColumnNotFound(_)));
    }

    #[test]
    fn test_rename_collision_fails() {
        let err = df().with_column_renamed("Name", "Age").unwrap_err();
        assert!(matches!(err, EngineError::Unsupported(_)));
    }

    #[test]
    fn test_limit() {
        let out = df().limit(2).unwrap();
        assert_eq!(out.count(), 2);
        let all = df().limit(100).unwrap();
        assert_eq!(all.count(), 3);
    }

    #[test]
    fn test_infer_mixed_numeric_promotes() {
        let t = infer_column_type(&[Value::Long(1), Value::Double(2.5)], "x").unwrap();
        assert_eq!(t, DataType::Double);
    }

    #[test]
    fn test_infer_all_null_defaults_to_string() {
        let t = infer_column_type(&[Value::Null, Value::Null], "x").unwrap();
        assert_eq!(t, DataType::String);
    }
}
