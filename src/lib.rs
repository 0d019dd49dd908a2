//! Sparklet - a single-process DataFrame library with a PySpark-like API
//!
//! Typed in-memory rows behind an immutable [`DataFrame`], a [`Column`]
//! expression layer, and two packaged table transformations: counting rows
//! above a numeric threshold and expanding a delimited string column into
//! positional integer columns.
//!
//! ```
//! use sparklet::prelude::*;
//! use serde_json::json;
//!
//! fn main() -> Result<(), EngineError> {
//!     let spark = SparkSession::builder().app_name("demo").get_or_create();
//!     let df = spark.create_dataframe_from_rows(
//!         vec![
//!             vec![json!("A"), json!(23)],
//!             vec![json!("B"), json!(39)],
//!             vec![json!("C"), json!(34)],
//!             vec![json!("D"), json!(32)],
//!         ],
//!         vec![("Name", "string"), ("Age", "long")],
//!     )?;
//!     assert_eq!(df.count_above("Age", 30)?, 3);
//!     Ok(())
//! }
//! ```

pub mod column;
pub mod config;
pub mod counter;
pub mod dataframe;
pub mod error;
pub mod expr;
pub mod format;
pub mod functions;
pub mod prelude;
pub mod schema;
pub mod session;
pub mod value;

pub use column::Column;
pub use config::SparkletConfig;
pub use counter::{count_above, Counter};
pub use dataframe::{DataFrame, RaggedPolicy};
pub use error::EngineError;
pub use schema::{DataType, StructField, StructType};
pub use session::{SparkSession, SparkSessionBuilder};
pub use value::{Row, Value};
