//! One-stop prelude for application code and embedding.
//!
//! Use `use sparklet::prelude::*` to get the most common types and functions.
//! For the full API, see the crate root and [`crate::functions`].

pub use crate::column::Column;
pub use crate::config::SparkletConfig;
pub use crate::counter::{count_above, Counter};
pub use crate::dataframe::{DataFrame, RaggedPolicy};
pub use crate::error::EngineError;
pub use crate::functions::{
    col, concat_ws, is_null, lit, lit_bool, lit_f64, lit_i64, lit_str, split,
};
pub use crate::schema::{DataType, StructField, StructType};
pub use crate::session::{SparkSession, SparkSessionBuilder};
pub use crate::value::{Row, Value};
