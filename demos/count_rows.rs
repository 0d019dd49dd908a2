//! Counting rows above a threshold, the notebook walkthrough.
//!
//! Builds the four-person table, shows it, and counts people older than 30.
//! Run with: `cargo run --example count_rows`

use serde_json::json;
use sparklet::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let spark = SparkSession::builder()
        .app_name("CountRowsAboveThreshold")
        .master("local[1]")
        .get_or_create();

    let df = spark.create_dataframe_from_rows(
        vec![
            vec![json!("A"), json!(23)],
            vec![json!("B"), json!(39)],
            vec![json!("C"), json!(34)],
            vec![json!("D"), json!(32)],
        ],
        vec![("Name", "string"), ("Age", "long")],
    )?;

    df.show(None);

    let above_thirty = df.count_above("Age", 30)?;
    println!("Number of people with age greater than 30: {above_thirty}");

    // Same count through the expression layer.
    let filtered = df.filter(&col("Age").gt(30))?;
    assert_eq!(filtered.count() as u64, above_thirty);

    spark.stop();
    Ok(())
}
