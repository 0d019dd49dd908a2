//! Schema types mirroring PySpark's `StructType` / `StructField` / `DataType`.
//!
//! Schemas are declared with dtype strings (`"long"`, `"string"`, ...) the way
//! PySpark DDL does, and render back as JSON for inspection.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DataType {
    String,
    Long,
    Double,
    Boolean,
    Array(Box<DataType>),
}

impl DataType {
    /// Parse a dtype string. Integer widths all map to `Long`: schema
    /// inference uses 64-bit for integral types.
    pub fn parse(s: &str) -> Result<DataType, EngineError> {
        let lowered = s.trim().to_lowercase();
        if let Some(inner) = lowered
            .strip_prefix("array<")
            .and_then(|rest| rest.strip_suffix('>'))
        {
            return Ok(DataType::Array(Box::new(DataType::parse(inner)?)));
        }
        match lowered.as_str() {
            "string" | "str" | "varchar" | "text" => Ok(DataType::String),
            "long" | "bigint" | "int" | "integer" | "smallint" | "tinyint" => Ok(DataType::Long),
            "double" | "float" | "real" => Ok(DataType::Double),
            "boolean" | "bool" => Ok(DataType::Boolean),
            other => Err(EngineError::Unsupported(format!(
                "unknown data type: {other}"
            ))),
        }
    }

    /// PySpark-style simple string (`long`, `array<long>`, ...).
    pub fn simple_string(&self) -> String {
        match self {
            DataType::String => "string".to_string(),
            DataType::Long => "long".to_string(),
            DataType::Double => "double".to_string(),
            DataType::Boolean => "boolean".to_string(),
            DataType::Array(inner) => format!("array<{}>", inner.simple_string()),
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructField {
    pub name: String,
    pub data_type: DataType,
    pub nullable: bool,
}

impl StructField {
    pub fn new(name: impl Into<String>, data_type: DataType, nullable: bool) -> Self {
        StructField {
            name: name.into(),
            data_type,
            nullable,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructType {
    fields: Vec<StructField>,
}

impl StructType {
    pub fn new(fields: Vec<StructField>) -> Self {
        StructType { fields }
    }

    /// Build from `(name, dtype string)` pairs; every field is nullable,
    /// matching createDataFrame defaults.
    pub fn from_pairs(pairs: &[(String, String)]) -> Result<Self, EngineError> {
        let fields = pairs
            .iter()
            .map(|(name, dtype)| {
                Ok(StructField::new(
                    name.clone(),
                    DataType::parse(dtype)?,
                    true,
                ))
            })
            .collect::<Result<Vec<_>, EngineError>>()?;
        Ok(StructType { fields })
    }

    pub fn fields(&self) -> &[StructField] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field_names(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.name.clone()).collect()
    }

    /// Position of a column, resolved case-sensitively or not.
    pub fn index_of(&self, name: &str, case_sensitive: bool) -> Option<usize> {
        if case_sensitive {
            self.fields.iter().position(|f| f.name == name)
        } else {
            self.fields
                .iter()
                .position(|f| f.name.eq_ignore_ascii_case(name))
        }
    }

    pub fn field(&self, name: &str, case_sensitive: bool) -> Option<&StructField> {
        self.index_of(name, case_sensitive).map(|i| &self.fields[i])
    }

    /// JSON rendering of the schema, PySpark `schema.json()` style.
    pub fn to_json(&self) -> Result<String, EngineError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, EngineError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// PySpark-style tree rendering for `printSchema()`.
    pub fn tree_string(&self) -> String {
        let mut out = String::from("root\n");
        for f in &self.fields {
            out.push_str(&format!(
                " |-- {}: {} (nullable = {})\n",
                f.name,
                f.data_type.simple_string(),
                f.nullable
            ));
        }
        out
    }
}
