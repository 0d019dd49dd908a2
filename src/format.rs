//! Formatting functions for displaying DataFrames as ASCII tables

use crate::schema::StructType;
use crate::value::{Row, Value};

/// Calculate optimal column widths by scanning through all rows (up to limit).
/// Widths count chars, not bytes, to match the padding done by `format!`.
fn calculate_column_widths(rows: &[Row], schema: &StructType, limit: usize) -> Vec<usize> {
    let mut col_widths: Vec<usize> = schema
        .fields()
        .iter()
        .map(|f| f.name.chars().count())
        .collect();

    for row in rows.iter().take(limit) {
        for (col_idx, cell) in row.iter().enumerate() {
            let value_str = format_cell(cell);
            col_widths[col_idx] = col_widths[col_idx].max(value_str.chars().count());
        }
    }

    // Limit width to 50 chars per column for readability
    for width in &mut col_widths {
        *width = (*width).min(50);
    }

    col_widths
}

/// Draw a border line with given column widths
fn draw_border(col_widths: &[usize]) -> String {
    let mut border = String::new();
    border.push('+');
    for width in col_widths {
        border.push_str(&"-".repeat(width + 2));
        border.push('+');
    }
    border.push('\n');
    border
}

/// Draw the header row with column names
fn draw_header(schema: &StructType, col_widths: &[usize]) -> String {
    let mut header = String::new();
    header.push('|');
    for (i, field) in schema.fields().iter().enumerate() {
        header.push(' ');
        header.push_str(&format!("{:<width$}", field.name, width = col_widths[i]));
        header.push_str(" |");
    }
    header.push('\n');
    header
}

/// Draw data rows (up to limit)
fn draw_rows(rows: &[Row], col_widths: &[usize], limit: usize) -> String {
    let mut out = String::new();

    for row in rows.iter().take(limit) {
        out.push('|');
        for (col_idx, cell) in row.iter().enumerate() {
            out.push(' ');
            let truncated = truncate_cell(format_cell(cell), 50);
            out.push_str(&format!("{:<width$}", truncated, width = col_widths[col_idx]));
            out.push_str(" |");
        }
        out.push('\n');
    }

    out
}

/// Format rows as a pretty-printed ASCII table, `show()` style.
///
/// Shows up to `limit` rows.
pub fn format_table(rows: &[Row], schema: &StructType, limit: usize) -> String {
    let col_widths = calculate_column_widths(rows, schema, limit);

    let mut output = String::new();
    output.push_str(&draw_border(&col_widths));
    output.push_str(&draw_header(schema, &col_widths));
    output.push_str(&draw_border(&col_widths));
    output.push_str(&draw_rows(rows, &col_widths, limit));
    output.push_str(&draw_border(&col_widths));

    output
}

/// Truncate to `max_chars` display characters, ending in `...`. Operates on
/// chars so a multi-byte character is never split.
fn truncate_cell(value: String, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value;
    }
    let kept: String = value.chars().take(max_chars - 3).collect();
    format!("{kept}...")
}

/// Format a single cell value
pub fn format_cell(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{DataType, StructField};

    #[test]
    fn test_format_table_shape() {
        let schema = StructType::new(vec![
            StructField::new("Name", DataType::String, true),
            StructField::new("Age", DataType::Long, true),
        ]);
        let rows = vec![
            Row::new(vec![Value::Str("Arabinda".into()), Value::Long(23)]),
            Row::new(vec![Value::Null, Value::Long(39)]),
        ];
        let table = format_table(&rows, &schema, 20);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with('+'));
        assert!(lines[1].contains("Name"));
        assert!(lines[1].contains("Age"));
        assert!(lines[3].contains("Arabinda"));
        assert!(lines[4].contains("null"));
    }

    #[test]
    fn test_limit_truncates_rows() {
        let schema = StructType::new(vec![StructField::new("n", DataType::Long, true)]);
        let rows: Vec<Row> = (0..10).map(|i| Row::new(vec![Value::Long(i)])).collect();
        let table = format_table(&rows, &schema, 3);
        assert!(table.contains("| 2 |"));
        assert!(!table.contains("| 3 |"));
    }

    #[test]
    fn test_long_cell_truncated() {
        let schema = StructType::new(vec![StructField::new("s", DataType::String, true)]);
        let rows = vec![Row::new(vec![Value::Str("x".repeat(80))])];
        let table = format_table(&rows, &schema, 20);
        assert!(table.contains("..."));
        assert!(!table.contains(&"x".repeat(51)));
    }

    #[test]
    fn test_multibyte_cell_over_fifty_bytes_renders_whole() {
        // 26 two-byte chars: 52 bytes but only 26 display chars, so no
        // truncation applies and no byte boundary is ever sliced.
        let schema = StructType::new(vec![StructField::new("s", DataType::String, true)]);
        let rows = vec![Row::new(vec![Value::Str("é".repeat(26))])];
        let table = format_table(&rows, &schema, 20);
        assert!(table.contains(&"é".repeat(26)));
        assert!(!table.contains("..."));
    }

    #[test]
    fn test_long_multibyte_cell_truncates_on_char_boundary() {
        let schema = StructType::new(vec![StructField::new("s", DataType::String, true)]);
        let rows = vec![Row::new(vec![Value::Str("é".repeat(60))])];
        let table = format_table(&rows, &schema, 20);
        assert!(table.contains(&format!("{}...", "é".repeat(47))));
        assert!(!table.contains(&"é".repeat(48)));
    }

    #[test]
    fn test_multibyte_column_padding_counts_chars() {
        // "naïve" is 5 display chars; the header "labels" (6) sets the width
        // and the cell pads with a single trailing space.
        let schema = StructType::new(vec![StructField::new("labels", DataType::String, true)]);
        let rows = vec![Row::new(vec![Value::Str("naïve".into())])];
        let table = format_table(&rows, &schema, 20);
        assert!(table.contains("| naïve  |"));
    }
}
