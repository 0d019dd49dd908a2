//! Shared helpers for integration tests (SparkSession and DataFrame setup).

use serde_json::json;
use sparklet::{DataFrame, SparkSession};

/// Create a SparkSession with a descriptive app name for tests.
pub fn spark() -> SparkSession {
    SparkSession::builder()
        .app_name("sparklet_tests")
        .get_or_create()
}

/// The four-person (Name, Age) table from the row-counting walkthrough.
pub fn people_df() -> DataFrame {
    spark()
        .create_dataframe_from_rows(
            vec![
                vec![json!("A"), json!(23)],
                vec![json!("B"), json!(39)],
                vec![json!("C"), json!(34)],
                vec![json!("D"), json!(32)],
            ],
            vec![("Name", "string"), ("Age", "long")],
        )
        .unwrap()
}

/// The six-student (ID, Name, Age, Marks) table from the expansion
/// walkthrough: every Marks cell is three `|`-separated integers.
pub fn students_df() -> DataFrame {
    spark()
        .create_dataframe_from_rows(
            vec![
                vec![json!(1), json!("Arabinda"), json!(23), json!("32|49|39")],
                vec![json!(2), json!("Rakesh"), json!(25), json!("45|65|78")],
                vec![json!(3), json!("Sourav"), json!(24), json!("56|43|71")],
                vec![json!(4), json!("Monica"), json!(22), json!("63|58|80")],
                vec![json!(5), json!("Leena"), json!(26), json!("41|77|52")],
                vec![json!(6), json!("Sagar"), json!(23), json!("68|54|66")],
            ],
            vec![
                ("ID", "bigint"),
                ("Name", "string"),
                ("Age", "long"),
                ("Marks", "string"),
            ],
        )
        .unwrap()
}
