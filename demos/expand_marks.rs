//! Expanding a delimited string column, the notebook walkthrough.
//!
//! Builds the six-student table whose Marks column holds three
//! `|`-separated integers per row, splits it into `sub_0..sub_2` long
//! columns, and drops the original column.
//! Run with: `cargo run --example expand_marks`

use serde_json::json;
use sparklet::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let spark = SparkSession::builder()
        .app_name("ExpandDelimitedColumn")
        .master("local[1]")
        .get_or_create();

    let df = spark.create_dataframe_from_rows(
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
    )?;

    df.show(None);
    print!("{}", df.print_schema());

    let expanded = df.expand("Marks", "|")?;
    expanded.show(None);
    print!("{}", expanded.print_schema());

    spark.stop();
    Ok(())
}
