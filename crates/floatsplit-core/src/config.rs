//! Codec configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Configuration for a split codec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Fraction of the mantissa deferred to the residual stream, in [0, 1].
    #[serde(default = "default_aggression")]
    pub aggression: f32,

    /// Elements per chunk for chunk-parallel encoding (multiple of 8).
    #[serde(default = "default_parallel_chunk_elements")]
    pub parallel_chunk_elements: usize,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            aggression: default_aggression(),
            parallel_chunk_elements: default_parallel_chunk_elements(),
        }
    }
}

impl SplitConfig {
    /// Create a config with the given aggression and default chunking.
    pub fn new(aggression: f32) -> Self {
        Self {
            aggression,
            ..Self::default()
        }
    }

    /// Set aggression.
    pub fn with_aggression(mut self, aggression: f32) -> Self {
        self.aggression = aggression;
        self
    }

    /// Set parallel chunk size in elements.
    pub fn with_parallel_chunk_elements(mut self, elements: usize) -> Self {
        self.parallel_chunk_elements = elements;
        self
    }

    /// Check every field is in range.
    pub fn validate(&self) -> Result<()> {
        validate_aggression(self.aggression)?;
        if self.parallel_chunk_elements == 0 || self.parallel_chunk_elements % 8 != 0 {
            return Err(Error::invalid_parameter(
                "parallel_chunk_elements",
                format!(
                    "must be a non-zero multiple of 8, got {}",
                    self.parallel_chunk_elements
                ),
            ));
        }
        Ok(())
    }

    /// Parse a config from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SplitConfig = serde_json::from_str(json)
            .map_err(|e| Error::invalid_parameter("config", e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

/// Reject aggression values that are non-finite or outside [0, 1].
pub fn validate_aggression(aggression: f32) -> Result<()> {
    if !aggression.is_finite() || !(0.0..=1.0).contains(&aggression) {
        return Err(Error::invalid_parameter(
            "aggression",
            format!("must be a finite value in [0, 1], got {aggression}"),
        ));
    }
    Ok(())
}

fn default_aggression() -> f32 {
    0.5
}

fn default_parallel_chunk_elements() -> usize {
    64 * 1024
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SplitConfig::default();
        assert_eq!(config.aggression, 0.5);
        assert_eq!(config.parallel_chunk_elements, 65536);
        config.validate().unwrap();
    }

    #[test]
    fn test_rejects_bad_aggression() {
        for bad in [-0.01, 1.01, f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            let err = SplitConfig::new(bad).validate().unwrap_err();
            assert!(matches!(err, Error::InvalidParameter { name: "aggression", .. }));
        }
        for good in [0.0, 0.3, 1.0] {
            SplitConfig::new(good).validate().unwrap();
        }
    }

    #[test]
    fn test_rejects_unaligned_chunks() {
        let config = SplitConfig::default().with_parallel_chunk_elements(12);
        assert!(config.validate().is_err());
        let config = SplitConfig::default().with_parallel_chunk_elements(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = SplitConfig::from_json(r#"{"aggression": 0.75}"#).unwrap();
        assert_eq!(config.aggression, 0.75);
        assert_eq!(config.parallel_chunk_elements, 65536);

        assert!(SplitConfig::from_json(r#"{"aggression": 2.0}"#).is_err());
        assert!(SplitConfig::from_json("not json").is_err());
    }
}
