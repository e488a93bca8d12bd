//! Selection limits applied when a set is built.

use serde::{Deserialize, Serialize};

use crate::error::{EsetError, Result};

/// Configuration for building an expansion set.
///
/// Missing fields take their default when deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpansionConfig {
    /// Maximum number of terms kept in the set. `0` yields an empty set.
    pub max_terms: usize,
    /// Terms weighted strictly below this are dropped. `None` keeps every
    /// weight, negative ones included.
    pub min_weight: Option<f64>,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            max_terms: usize::MAX,
            min_weight: None,
        }
    }
}

impl ExpansionConfig {
    /// Set the maximum number of terms kept.
    pub fn with_max_terms(mut self, max_terms: usize) -> Self {
        self.max_terms = max_terms;
        self
    }

    /// Set the minimum weight a term needs to be kept.
    pub fn with_min_weight(mut self, min_weight: f64) -> Self {
        self.min_weight = Some(min_weight);
        self
    }

    /// Check the configuration values.
    pub fn validate(&self) -> Result<()> {
        if let Some(min_weight) = self.min_weight.filter(|w| w.is_nan()) {
            return Err(EsetError::invalid_config(format!(
                "min_weight must be a number, got {}",
                min_weight
            )));
        }
        Ok(())
    }

    /// Parse a configuration from JSON and validate it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ExpansionConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keeps_everything() {
        let config = ExpansionConfig::default();
        assert_eq!(config.max_terms, usize::MAX);
        assert_eq!(config.min_weight, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = ExpansionConfig::from_json_str(r#"{"max_terms": 5}"#).unwrap();
        assert_eq!(config, ExpansionConfig::default().with_max_terms(5));
    }

    #[test]
    fn test_from_json_malformed() {
        match ExpansionConfig::from_json_str("{max_terms").unwrap_err() {
            EsetError::Json(_) => {}
            other => panic!("Expected JSON error, got {other:?}"),
        }
    }

    #[test]
    fn test_infinite_min_weight_accepted() {
        let config = ExpansionConfig::default().with_min_weight(f64::NEG_INFINITY);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_null_min_weight_from_json() {
        let config = ExpansionConfig::from_json_str(r#"{"min_weight": null}"#).unwrap();
        assert_eq!(config.min_weight, None);
    }

    #[test]
    fn test_nan_min_weight_rejected() {
        let config = ExpansionConfig::default().with_min_weight(f64::NAN);
        assert!(matches!(config.validate(), Err(EsetError::InvalidConfig(_))));
    }
}
