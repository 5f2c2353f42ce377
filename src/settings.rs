//! Settings for the fractionalize filters
//!
//! Settings are plain values injected by the caller. They can be built in code
//! with the `with_*` methods or loaded from a TOML document such as:
//!
//! ```toml
//! tolerance = 0.001
//! max_iterations = 64
//! dev_mode = true
//! clamp_hex_to_byte = false
//! ```

use serde::Deserialize;
use tracing::warn;

use crate::error::{FractionalizeError, Result};

/// Relative tolerance used when none is configured
pub const DEFAULT_TOLERANCE: f64 = 1.0e-3;

/// Iteration cap for the continued-fraction expansion
pub const DEFAULT_MAX_ITERATIONS: usize = 64;

/// Configuration shared by all filters
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Relative tolerance `|x - h/k| <= |x| * tolerance` that stops the expansion
    pub tolerance: f64,
    /// Maximum number of continued-fraction steps before giving up
    pub max_iterations: usize,
    /// Whether the `devMode` filter lets its text through
    pub dev_mode: bool,
    /// Render every value above 255 as `ff`
    pub clamp_hex_to_byte: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            dev_mode: false,
            clamp_hex_to_byte: false,
        }
    }
}

impl Settings {
    /// Parse and validate settings from TOML; missing keys keep their defaults
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(toml_str).map_err(|e| {
            warn!(error = %e, "rejecting fractionalize settings");
            FractionalizeError::Settings(e.to_string())
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check that the numeric settings can drive a terminating expansion
    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(FractionalizeError::Settings(format!(
                "tolerance must be a finite, non-negative number, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(FractionalizeError::Settings(
                "max_iterations must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_dev_mode(mut self, dev_mode: bool) -> Self {
        self.dev_mode = dev_mode;
        self
    }

    pub fn with_clamp_hex_to_byte(mut self, clamp: bool) -> Self {
        self.clamp_hex_to_byte = clamp;
        self
    }
}
