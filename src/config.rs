//! Configuration for sparklet sessions.
//!
//! Use [`SparkletConfig`] to configure a session from code or environment
//! variables, then apply it with
//! [`SparkSessionBuilder::with_config`](crate::session::SparkSessionBuilder::with_config).

use std::collections::HashMap;

/// Session configuration assembled from code or from `SPARKLET_*` env vars.
#[derive(Debug, Clone, Default)]
pub struct SparkletConfig {
    app_name: Option<String>,
    case_sensitive: Option<bool>,
    extra: HashMap<String, String>,
}

impl SparkletConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read configuration from the environment:
    /// `SPARKLET_APP_NAME`, `SPARKLET_CASE_SENSITIVE` (`1`/`true`), plus any
    /// `SPARKLET_CONF_<key>` entries, where underscores in `<key>` map to
    /// dots and case is preserved: `SPARKLET_CONF_spark_sql_caseSensitive`
    /// sets `spark.sql.caseSensitive`.
    pub fn from_env() -> Self {
        let mut config = SparkletConfig::new();
        if let Ok(name) = std::env::var("SPARKLET_APP_NAME") {
            config.app_name = Some(name);
        }
        if let Ok(flag) = std::env::var("SPARKLET_CASE_SENSITIVE") {
            config.case_sensitive = Some(parse_bool_flag(&flag));
        }
        for (key, value) in std::env::vars() {
            if let Some(suffix) = key.strip_prefix("SPARKLET_CONF_") {
                config.extra.insert(conf_key(suffix), value);
            }
        }
        config
    }

    pub fn with_app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = Some(name.into());
        self
    }

    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = Some(case_sensitive);
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn app_name(&self) -> Option<&str> {
        self.app_name.as_deref()
    }

    pub fn case_sensitive(&self) -> Option<bool> {
        self.case_sensitive
    }

    /// Flatten into Spark-style session config pairs.
    pub fn to_session_config(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(name) = &self.app_name {
            pairs.push(("spark.app.name".to_string(), name.clone()));
        }
        if let Some(flag) = self.case_sensitive {
            pairs.push(("spark.sql.caseSensitive".to_string(), flag.to_string()));
        }
        for (k, v) in &self.extra {
            pairs.push((k.clone(), v.clone()));
        }
        pairs
    }
}

/// Session key for a `SPARKLET_CONF_` env suffix. Env-var names cannot
/// contain dots, so underscores stand in for them.
fn conf_key(suffix: &str) -> String {
    suffix.replace('_', ".")
}

pub(crate) fn parse_bool_flag(s: &str) -> bool {
    matches!(s.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_session_config_pairs() {
        let config = SparkletConfig::new()
            .with_app_name("notebook")
            .with_case_sensitive(true);
        let pairs = config.to_session_config();
        assert!(pairs.contains(&("spark.app.name".to_string(), "notebook".to_string())));
        assert!(pairs.contains(&("spark.sql.caseSensitive".to_string(), "true".to_string())));
    }

    #[test]
    fn test_conf_key_maps_underscores_to_dots() {
        assert_eq!(conf_key("spark_sql_caseSensitive"), "spark.sql.caseSensitive");
        assert_eq!(conf_key("spark_app_name"), "spark.app.name");
    }

    #[test]
    fn test_parse_bool_flag() {
        assert!(parse_bool_flag("1"));
        assert!(parse_bool_flag("TRUE"));
        assert!(parse_bool_flag(" yes "));
        assert!(!parse_bool_flag("0"));
        assert!(!parse_bool_flag("nope"));
    }

    #[test]
    fn test_default_is_empty() {
        let config = SparkletConfig::new();
        assert!(config.app_name().is_none());
        assert!(config.case_sensitive().is_none());
        assert!(config.to_session_config().is_empty());
    }
}
