//! Session entry point, mirroring PySpark's `SparkSession`.

use std::collections::HashMap;

use serde_json::Value as JsonValue;
use tracing::debug;

use crate::config::{parse_bool_flag, SparkletConfig};
use crate::dataframe::{DataFrame, DEFAULT_CASE_SENSITIVE};
use crate::error::EngineError;
use crate::schema::StructType;
use crate::value::Value;

/// Builder for creating a SparkSession with configuration options
#[derive(Debug, Clone, Default)]
pub struct SparkSessionBuilder {
    app_name: Option<String>,
    master: Option<String>,
    config: HashMap<String, String>,
}

impl SparkSessionBuilder {
    pub fn new() -> Self {
        SparkSessionBuilder {
            app_name: None,
            master: None,
            config: HashMap::new(),
        }
    }

    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = Some(name.into());
        self
    }

    pub fn master(mut self, master: impl Into<String>) -> Self {
        self.master = Some(master.into());
        self
    }

    pub fn config(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.insert(key.into(), value.into());
        self
    }

    /// Apply configuration from a [`SparkletConfig`].
    /// Merges app name, case sensitivity, and extra keys into the builder config.
    pub fn with_config(mut self, config: &SparkletConfig) -> Self {
        for (k, v) in config.to_session_config() {
            self.config.insert(k, v);
        }
        self
    }

    pub fn get_or_create(self) -> SparkSession {
        SparkSession::new(self.app_name, self.master, self.config)
    }
}

/// Main entry point for creating DataFrames.
/// Similar to PySpark's SparkSession, single-process and in-memory.
#[derive(Debug, Clone)]
pub struct SparkSession {
    app_name: Option<String>,
    master: Option<String>,
    config: HashMap<String, String>,
}

impl SparkSession {
    pub fn new(
        app_name: Option<String>,
        master: Option<String>,
        config: HashMap<String, String>,
    ) -> Self {
        let app_name = app_name.or_else(|| config.get("spark.app.name").cloned());
        debug!(
            app_name = app_name.as_deref().unwrap_or("<unset>"),
            "session created"
        );
        SparkSession {
            app_name,
            master,
            config,
        }
    }

    pub fn builder() -> SparkSessionBuilder {
        SparkSessionBuilder::new()
    }

    /// Build a session directly from a [`SparkletConfig`], typically one
    /// read from the environment with [`SparkletConfig::from_env`].
    pub fn from_config(config: &SparkletConfig) -> Self {
        Self::builder().with_config(config).get_or_create()
    }

    pub fn app_name(&self) -> Option<&str> {
        self.app_name.as_deref()
    }

    pub fn master(&self) -> Option<&str> {
        self.master.as_deref()
    }

    /// Look up a session config value.
    pub fn conf_get(&self, key: &str) -> Option<&str> {
        self.config.get(key).map(|s| s.as_str())
    }

    /// Column-name matching for DataFrames created by this session.
    /// Controlled by `spark.sql.caseSensitive`.
    pub fn case_sensitive(&self) -> bool {
        self.config
            .get("spark.sql.caseSensitive")
            .map(|v| parse_bool_flag(v))
            .unwrap_or(DEFAULT_CASE_SENSITIVE)
    }

    /// Create a DataFrame from typed rows and an explicit schema.
    ///
    /// Fails fast on the first row whose arity or cell types do not match
    /// the schema.
    pub fn create_dataframe(
        &self,
        rows: Vec<Vec<Value>>,
        schema: StructType,
    ) -> Result<DataFrame, EngineError> {
        DataFrame::from_rows(rows, schema, self.case_sensitive())
    }

    /// Create a DataFrame from JSON rows and `(name, dtype)` pairs, the way
    /// `createDataFrame(data, schema)` takes plain Python rows.
    ///
    /// # Example
    /// ```
    /// use sparklet::session::SparkSession;
    /// use serde_json::json;
    ///
    /// let spark = SparkSession::builder().app_name("demo").get_or_create();
    /// let df = spark
    ///     .create_dataframe_from_rows(
    ///         vec![vec![json!("A"), json!(23)], vec![json!("B"), json!(39)]],
    ///         vec![("Name", "string"), ("Age", "long")],
    ///     )
    ///     .unwrap();
    /// assert_eq!(df.count(), 2);
    /// ```
    pub fn create_dataframe_from_rows(
        &self,
        rows: Vec<Vec<JsonValue>>,
        schema: Vec<(&str, &str)>,
    ) -> Result<DataFrame, EngineError> {
        let pairs: Vec<(String, String)> = schema
            .into_iter()
            .map(|(n, t)| (n.to_string(), t.to_string()))
            .collect();
        let schema = StructType::from_pairs(&pairs)?;
        let mut typed = Vec::with_capacity(rows.len());
        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != schema.len() {
                return Err(EngineError::InvalidRow(format!(
                    "row {row_idx} has {} values but schema has {} fields",
                    row.len(),
                    schema.len()
                )));
            }
            let cells = row
                .iter()
                .zip(schema.fields())
                .map(|(json, field)| {
                    Value::from_json(json, &field.data_type).map_err(|e| {
                        EngineError::TypeMismatch(format!(
                            "row {row_idx}, column '{}': {e}",
                            field.name
                        ))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            typed.push(cells);
        }
        DataFrame::from_rows(typed, schema, self.case_sensitive())
    }

    /// Stop the session. In-memory sessions hold no external resources, so
    /// this only exists for API parity.
    pub fn stop(&self) {}
}

impl Default for SparkSession {
    fn default() -> Self {
        Self::builder().get_or_create()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder_carries_config() {
        let spark = SparkSession::builder()
            .app_name("t")
            .master("local[1]")
            .config("spark.sql.caseSensitive", "true")
            .get_or_create();
        assert_eq!(spark.app_name(), Some("t"));
        assert_eq!(spark.master(), Some("local[1]"));
        assert!(spark.case_sensitive());
    }

    #[test]
    fn test_case_insensitive_by_default() {
        let spark = SparkSession::builder().get_or_create();
        assert!(!spark.case_sensitive());
    }

    #[test]
    fn test_with_config_merges_pairs() {
        let config = SparkletConfig::new()
            .with_app_name("merged")
            .with_case_sensitive(true);
        let spark = SparkSession::builder().with_config(&config).get_or_create();
        assert_eq!(spark.app_name(), Some("merged"));
        assert!(spark.case_sensitive());
        assert_eq!(spark.conf_get("spark.app.name"), Some("merged"));
    }

    #[test]
    fn test_from_config_shortcut() {
        let config = SparkletConfig::new().with_app_name("shortcut");
        let spark = SparkSession::from_config(&config);
        assert_eq!(spark.app_name(), Some("shortcut"));
    }

    #[test]
    fn test_create_dataframe_from_rows_rejects_arity_mismatch() {
        let spark = SparkSession::builder().get_or_create();
        let err = spark
            .create_dataframe_from_rows(
                vec![vec![json!(1), json!("x")], vec![json!(2)]],
                vec![("id", "long"), ("name", "string")],
            )
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidRow(_)));
    }

    #[test]
    fn test_create_dataframe_from_rows_rejects_bad_cell() {
        let spark = SparkSession::builder().get_or_create();
        let err = spark
            .create_dataframe_from_rows(
                vec![vec![json!("not a number")]],
                vec![("id", "long")],
            )
            .unwrap_err();
        match err {
            EngineError::TypeMismatch(msg) => {
                assert!(msg.contains("row 0"));
                assert!(msg.contains("'id'"));
            }
            other => panic!("expected TypeMismatch, got {other:?}"),
        }
    }
}
