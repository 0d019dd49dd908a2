//! DataFrame module: main tabular type and submodules for transformations and
//! delimited-column expansion.

mod expand;
mod transformations;

pub use expand::{expand, expand_with_policy, RaggedPolicy};
pub use transformations::{drop, filter, limit, select, with_column, with_column_renamed};

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value as JsonValue;

use crate::column::Column;
use crate::error::EngineError;
use crate::format::format_table;
use crate::schema::StructType;
use crate::value::{Row, Value};

/// Default for `spark.sql.caseSensitive` (PySpark default is false = case-insensitive).
pub const DEFAULT_CASE_SENSITIVE: bool = false;

/// DataFrame - main tabular data structure.
/// An immutable set of rows with a schema; every transformation returns a
/// new DataFrame and never touches the input.
#[derive(Debug, Clone)]
pub struct DataFrame {
    pub(crate) rows: Arc<Vec<Row>>,
    pub(crate) schema: Arc<StructType>,
    /// When false (default), column names are matched case-insensitively (PySpark behavior).
    pub(crate) case_sensitive: bool,
}

impl DataFrame {
    /// Create a DataFrame from typed rows, failing fast on the first row
    /// whose arity or cell types do not match the schema.
    pub fn from_rows(
        rows: Vec<Vec<Value>>,
        schema: StructType,
        case_sensitive: bool,
    ) -> Result<Self, EngineError> {
        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != schema.len() {
                return Err(EngineError::InvalidRow(format!(
                    "row {row_idx} has {} values but schema has {} fields",
                    row.len(),
                    schema.len()
                )));
            }
            for (cell, field) in row.iter().zip(schema.fields()) {
                if cell.is_null() {
                    if !field.nullable {
                        return Err(EngineError::InvalidRow(format!(
                            "row {row_idx}, column '{}' is null but the field is not nullable",
                            field.name
                        )));
                    }
                    continue;
                }
                if !cell.matches(&field.data_type) {
                    return Err(EngineError::TypeMismatch(format!(
                        "row {row_idx}, column '{}': expected {}, got {}",
                        field.name,
                        field.data_type,
                        cell.type_name()
                    )));
                }
            }
        }
        Ok(DataFrame {
            rows: Arc::new(rows.into_iter().map(Row::new).collect()),
            schema: Arc::new(schema),
            case_sensitive,
        })
    }

    /// Create an empty DataFrame with the given schema.
    pub fn empty(schema: StructType) -> Self {
        DataFrame {
            rows: Arc::new(Vec::new()),
            schema: Arc::new(schema),
            case_sensitive: DEFAULT_CASE_SENSITIVE,
        }
    }

    pub(crate) fn from_parts(rows: Vec<Row>, schema: StructType, case_sensitive: bool) -> Self {
        DataFrame {
            rows: Arc::new(rows),
            schema: Arc::new(schema),
            case_sensitive,
        }
    }

    /// Resolve a logical column name to the actual column name in the schema.
    /// When case_sensitive is false, matches case-insensitively.
    pub fn resolve_column_name(&self, name: &str) -> Result<String, EngineError> {
        self.resolve_column_index(name)
            .map(|idx| self.schema.fields()[idx].name.clone())
    }

    /// Resolve a logical column name to its position in the schema.
    pub(crate) fn resolve_column_index(&self, name: &str) -> Result<usize, EngineError> {
        self.schema
            .index_of(name, self.case_sensitive)
            .ok_or_else(|| {
                EngineError::ColumnNotFound(format!(
                    "'{}'. Available columns: [{}]. Check spelling and case sensitivity (spark.sql.caseSensitive).",
                    name,
                    self.schema.field_names().join(", ")
                ))
            })
    }

    /// Get the schema of the DataFrame
    pub fn schema(&self) -> &StructType {
        &self.schema
    }

    /// Get column names
    pub fn columns(&self) -> Vec<String> {
        self.schema.field_names()
    }

    /// Column names and dtype strings. PySpark dtypes.
    pub fn dtypes(&self) -> Vec<(String, String)> {
        self.schema
            .fields()
            .iter()
            .map(|f| (f.name.clone(), f.data_type.simple_string()))
            .collect()
    }

    /// Count the number of rows
    pub fn count(&self) -> usize {
        self.rows.len()
    }

    /// True if the DataFrame has zero rows. PySpark isEmpty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the first n rows as an ASCII table. PySpark `show()` look.
    pub fn show_string(&self, n: usize) -> String {
        format_table(&self.rows, &self.schema, n)
    }

    /// Print the first n rows (default 20).
    pub fn show(&self, n: Option<usize>) {
        println!("{}", self.show_string(n.unwrap_or(20)));
    }

    /// Return schema as tree string. PySpark printSchema (returns string; print to stdout if needed).
    pub fn print_schema(&self) -> String {
        self.schema.tree_string()
    }

    /// Collect all rows (the DataFrame itself stays untouched).
    pub fn collect(&self) -> Vec<Row> {
        self.rows.as_ref().clone()
    }

    pub(crate) fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Collect as rows of column-name -> JSON value. For use by embedding callers.
    pub fn collect_as_json_rows(&self) -> Vec<HashMap<String, JsonValue>> {
        let names = self.schema.field_names();
        self.rows
            .iter()
            .map(|row| {
                names
                    .iter()
                    .cloned()
                    .zip(row.iter().map(Value::to_json))
                    .collect()
            })
            .collect()
    }

    /// Collect rows as JSON strings (one object per row, columns in schema
    /// order). PySpark toJSON.
    pub fn to_json(&self) -> Result<Vec<String>, EngineError> {
        let mut out = Vec::with_capacity(self.rows.len());
        for row in self.rows.iter() {
            let mut s = String::from("{");
            for (i, (field, cell)) in self.schema.fields().iter().zip(row.iter()).enumerate() {
                if i > 0 {
                    s.push(',');
                }
                s.push_str(&serde_json::to_string(&field.name)?);
                s.push(':');
                s.push_str(&serde_json::to_string(&cell.to_json())?);
            }
            s.push('}');
            out.push(s);
        }
        Ok(out)
    }

    /// Select columns (returns a new DataFrame).
    /// Column names are resolved according to case sensitivity.
    pub fn select(&self, cols: Vec<&str>) -> Result<DataFrame, EngineError> {
        transformations::select(self, cols, self.case_sensitive)
    }

    /// Filter rows with a predicate column. Rows where the predicate is
    /// null are dropped, matching PySpark filter semantics.
    pub fn filter(&self, condition: &Column) -> Result<DataFrame, EngineError> {
        transformations::filter(self, condition, self.case_sensitive)
    }

    /// Get a column reference by name (for building expressions).
    /// Respects case sensitivity: when false, "Age" resolves to column "age" if present.
    pub fn column(&self, name: &str) -> Result<Column, EngineError> {
        let resolved = self.resolve_column_name(name)?;
        Ok(Column::new(resolved))
    }

    /// Add or replace a column computed from a [`Column`] expression.
    pub fn with_column(&self, column_name: &str, col: &Column) -> Result<DataFrame, EngineError> {
        transformations::with_column(self, column_name, col, self.case_sensitive)
    }

    /// Rename a column (old_name -> new_name).
    pub fn with_column_renamed(
        &self,
        old_name: &str,
        new_name: &str,
    ) -> Result<DataFrame, EngineError> {
        transformations::with_column_renamed(self, old_name, new_name, self.case_sensitive)
    }

    /// Drop one or more columns.
    pub fn drop(&self, columns: Vec<&str>) -> Result<DataFrame, EngineError> {
        transformations::drop(self, columns, self.case_sensitive)
    }

    /// Limit: return first n rows.
    pub fn limit(&self, n: usize) -> Result<DataFrame, EngineError> {
        transformations::limit(self, n, self.case_sensitive)
    }

    /// First n rows. PySpark head(n).
    pub fn head(&self, n: usize) -> Result<DataFrame, EngineError> {
        transformations::limit(self, n, self.case_sensitive)
    }

    /// Count rows whose numeric `column` is strictly greater than `threshold`.
    /// Null cells never satisfy the predicate; non-numeric cells fail fast.
    pub fn count_above(&self, column: &str, threshold: i64) -> Result<u64, EngineError> {
        crate::counter::count_above(self, column, threshold)
    }

    /// Split a delimited string column into `sub_0 .. sub_{width-1}` long
    /// columns and drop the source column. Ragged rows are rejected; use
    /// [`expand_with_policy`](Self::expand_with_policy) to pad instead.
    pub fn expand(&self, source_column: &str, delimiter: &str) -> Result<DataFrame, EngineError> {
        expand::expand(self, source_column, delimiter, self.case_sensitive)
    }

    /// Delimited expansion with an explicit ragged-row policy.
    pub fn expand_with_policy(
        &self,
        source_column: &str,
        delimiter: &str,
        policy: RaggedPolicy,
    ) -> Result<DataFrame, EngineError> {
        expand::expand_with_policy(self, source_column, delimiter, policy, self.case_sensitive)
    }
}
