//! Row counting against a numeric threshold.

use tracing::debug;

use crate::dataframe::DataFrame;
use crate::error::EngineError;
use crate::value::Value;

/// Local accumulator, the single-process stand-in for an engine-managed
/// counter. Starts at zero and is only ever incremented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter {
    count: u64,
}

impl Counter {
    pub fn new() -> Self {
        Counter { count: 0 }
    }

    pub fn add(&mut self, step: u64) {
        self.count += step;
    }

    pub fn value(&self) -> u64 {
        self.count
    }
}

/// Count rows whose numeric `column` is strictly greater than `threshold`.
///
/// Long and double cells both compare against the integer threshold. Null
/// cells never satisfy the predicate (the comparison is unknown, not true).
/// A missing column is `ColumnNotFound`; the first non-numeric cell fails
/// fast with `TypeMismatch`. The input frame is never mutated.
pub fn count_above(df: &DataFrame, column: &str, threshold: i64) -> Result<u64, EngineError> {
    let idx = df.resolve_column_index(column)?;
    let bound = Value::Long(threshold);
    let mut counter = Counter::new();
    for (row_idx, row) in df.rows().iter().enumerate() {
        match &row[idx] {
            Value::Null => {}
            cell @ (Value::Long(_) | Value::Double(_)) => {
                if cell.compare(&bound) == Some(std::cmp::Ordering::Greater) {
                    counter.add(1);
                }
            }
            other => {
                return Err(EngineError::TypeMismatch(format!(
                    "row {row_idx}, column '{column}': expected a numeric cell, got {}",
                    other.type_name()
                )));
            }
        }
    }
    debug!(
        column,
        threshold,
        matched = counter.value(),
        rows = df.count(),
        "count_above finished"
    );
    Ok(counter.value())
}
