//! Delimited-column expansion: split one string column into positional long
//! columns (`sub_0 .. sub_{width-1}`) and drop the source column.
//!
//! The packaged single-pass form of the notebook chain
//! `withColumn(split(...).getItem(i).cast(long))* .drop(source)`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::DataFrame;
use crate::error::EngineError;
use crate::functions::split_literal;
use crate::schema::{DataType, StructField, StructType};
use crate::value::{Row, Value};

/// What to do when rows split into differing part counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RaggedPolicy {
    /// Fail fast with a `Ragged` error on the first row whose part count
    /// differs from the first row's.
    #[default]
    Error,
    /// Pad short rows with nulls up to the widest row (`getItem` semantics).
    PadNull,
}

/// Split `source_column` by the literal `delimiter`, materialize one long
/// column per position and drop the source. Ragged input is rejected; use
/// [`expand_with_policy`] to pad short rows instead.
pub fn expand(
    df: &DataFrame,
    source_column: &str,
    delimiter: &str,
    case_sensitive: bool,
) -> Result<DataFrame, EngineError> {
    expand_with_policy(df, source_column, delimiter, RaggedPolicy::Error, case_sensitive)
}

/// [`expand`] with an explicit ragged-row policy.
///
/// The result schema is the input schema minus the source column, followed by
/// `sub_0 .. sub_{width-1}` (all `long`, nullable), where width is the
/// maximum split length over all rows. An empty frame has width 0 and only
/// loses the source column.
pub fn expand_with_policy(
    df: &DataFrame,
    source_column: &str,
    delimiter: &str,
    policy: RaggedPolicy,
    case_sensitive: bool,
) -> Result<DataFrame, EngineError> {
    if delimiter.is_empty() {
        return Err(EngineError::Unsupported(
            "empty delimiter: splitting needs a literal separator".to_string(),
        ));
    }
    let src = df.resolve_column_index(source_column)?;
    let source_field = &df.schema.fields()[src];
    if source_field.data_type != DataType::String {
        return Err(EngineError::TypeMismatch(format!(
            "column '{}' has type {}, expected string",
            source_field.name, source_field.data_type
        )));
    }

    let mut parts_per_row: Vec<Vec<i64>> = Vec::with_capacity(df.count());
    let mut expected_len: Option<usize> = None;
    for (row_idx, row) in df.rows().iter().enumerate() {
        let text = match &row[src] {
            Value::Str(s) => s,
            other => {
                return Err(EngineError::TypeMismatch(format!(
                    "row {row_idx}, column '{}': cannot split a {} cell",
                    source_field.name,
                    other.type_name()
                )));
            }
        };
        let parts = split_literal(text, delimiter);
        if policy == RaggedPolicy::Error {
            match expected_len {
                None => expected_len = Some(parts.len()),
                Some(expected) if parts.len() != expected => {
                    return Err(EngineError::Ragged(format!(
                        "row {row_idx} splits into {} parts where earlier rows have {expected}; \
                         use RaggedPolicy::PadNull to pad short rows",
                        parts.len()
                    )));
                }
                Some(_) => {}
            }
        }
        let mut nums = Vec::with_capacity(parts.len());
        for (pos, part) in parts.iter().enumerate() {
            let n = part.parse::<i64>().map_err(|_| {
                EngineError::Parse(format!(
                    "row {row_idx}, column '{}', part {pos}: cannot parse '{part}' as long",
                    source_field.name
                ))
            })?;
            nums.push(n);
        }
        parts_per_row.push(nums);
    }

    let width = parts_per_row.iter().map(Vec::len).max().unwrap_or(0);
    debug!(
        source = source_column,
        width,
        rows = df.count(),
        ?policy,
        "expansion width determined"
    );

    let mut fields: Vec<StructField> = df
        .schema
        .fields()
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != src)
        .map(|(_, f)| f.clone())
        .collect();
    for i in 0..width {
        fields.push(StructField::new(format!("sub_{i}"), DataType::Long, true));
    }

    let rows: Vec<Row> = df
        .rows()
        .iter()
        .zip(&parts_per_row)
        .map(|(row, parts)| {
            let mut cells: Vec<Value> = row
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != src)
                .map(|(_, v)| v.clone())
                .collect();
            for i in 0..width {
                cells.push(parts.get(i).map(|&n| Value::Long(n)).unwrap_or(Value::Null));
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
