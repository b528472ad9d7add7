//! Configuration for batch decoding.

use crate::error::BatchError;
use serde::{Deserialize, Serialize};

/// Real missing-data indicator used by Unified Model fieldsfiles (-2^30).
pub const UM_MISSING_DATA: f64 = -1_073_741_824.0;

/// Configuration for the field-level batch driver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// What to do when a word overflows the binary32 range.
    pub policy: OverflowPolicy,

    /// Substitute written for overflowing words under [`OverflowPolicy::Fill`].
    pub fill_value: f64,

    /// Allow decoding on the rayon thread pool.
    pub parallel: bool,

    /// Minimum number of words before the parallel path is taken.
    pub parallel_threshold: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            policy: OverflowPolicy::Abort,
            fill_value: UM_MISSING_DATA,
            parallel: true,
            parallel_threshold: 16_384,
        }
    }
}

impl BatchConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("IBM_FLOAT_OVERFLOW_POLICY") {
            config.policy = OverflowPolicy::from_str(&val);
        }

        if let Ok(val) = std::env::var("IBM_FLOAT_FILL_VALUE") {
            if let Ok(fill) = val.parse() {
                config.fill_value = fill;
            }
        }

        if let Ok(val) = std::env::var("IBM_FLOAT_PARALLEL") {
            config.parallel = val.to_lowercase() == "true" || val == "1";
        }

        if let Ok(val) = std::env::var("IBM_FLOAT_PARALLEL_THRESHOLD") {
            if let Ok(threshold) = val.parse() {
                config.parallel_threshold = threshold;
            }
        }

        config
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), BatchError> {
        if self.parallel_threshold == 0 {
            return Err(BatchError::invalid_config("parallel_threshold must be > 0"));
        }

        Ok(())
    }

    /// Whether a field of `len` words should be decoded in parallel.
    pub fn use_parallel(&self, len: usize) -> bool {
        self.parallel && len >= self.parallel_threshold
    }
}

/// Handling of words that overflow the binary32 range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Fail the whole field on the first overflow.
    #[default]
    Abort,
    /// Substitute the fill value and record the index.
    Fill,
}

impl OverflowPolicy {
    /// Parse from string (case-insensitive). Unknown values fall back to `Abort`.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "fill" | "skip" => Self::Fill,
            _ => Self::Abort,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Abort => "abort",
            Self::Fill => "fill",
        }
    }
}

impl std::fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
