//! Alignment configuration parsed from environment variables.

use crate::consts::{ALIGN_EPSILON_ENV, DEFAULT_ALIGN_EPSILON, PIXEL_ALIGN_EPSILON};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?} (expected a finite, non-negative number)")]
    InvalidEpsilon { var: &'static str, value: String },
}

/// Tolerance policy for [`crate::align`].
///
/// A single `epsilon` drives both decisions the engine makes: whether a set is
/// already aligned (every item within `epsilon` of the reference line) and
/// whether an individual item is far enough off to be moved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignConfig {
    pub epsilon: f64,
}

impl AlignConfig {
    /// Half-pixel tolerance for screen-space editing.
    pub const PIXEL: Self = Self { epsilon: PIXEL_ALIGN_EPSILON };

    /// Build a config with an explicit epsilon.
    ///
    /// # Errors
    ///
    /// Returns `InvalidEpsilon` for negative, NaN, or infinite values.
    pub fn with_epsilon(epsilon: f64) -> Result<Self, ConfigError> {
        if !epsilon.is_finite() || epsilon < 0.0 {
            return Err(ConfigError::InvalidEpsilon { var: "epsilon", value: epsilon.to_string() });
        }
        Ok(Self { epsilon })
    }

    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `SHAPEKIT_ALIGN_EPSILON`: default `1e-6`
    ///
    /// # Errors
    ///
    /// Returns `InvalidEpsilon` when the variable is set but does not parse
    /// to a finite, non-negative number.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(ALIGN_EPSILON_ENV) {
            Ok(raw) => parse_epsilon(&raw),
            Err(_) => Ok(Self::default()),
        }
    }
}

impl Default for AlignConfig {
    fn default() -> Self {
        Self { epsilon: DEFAULT_ALIGN_EPSILON }
    }
}

fn parse_epsilon(raw: &str) -> Result<AlignConfig, ConfigError> {
    let invalid = || ConfigError::InvalidEpsilon { var: ALIGN_EPSILON_ENV, value: raw.to_string() };
    let epsilon = raw.trim().parse::<f64>().map_err(|_| invalid())?;
    if !epsilon.is_finite() || epsilon < 0.0 {
        return Err(invalid());
    }
    Ok(AlignConfig { epsilon })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
