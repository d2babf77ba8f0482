use thiserror::Error;

/// Parameters shared by the line-search strategies.
///
/// `c1` is the sufficient decrease constant and `c2` the curvature constant,
/// with `0 < c1 < c2 < 1`. Backtracking only uses `c1`. CG_DESCENT expects
/// `c1 < 0.5`; `(0.1, 0.9)` is the usual choice there.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    c1: f64,
    c2: f64,
    max_iters: usize,
    max_step: f64,
}

/// Errors that can occur when validating a line-search config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("c1 must be in (0, 1)")]
    C1,

    #[error("c2 must be in (c1, 1)")]
    C2,

    #[error("max_iters must be at least 1")]
    MaxIters,

    #[error("max_step must be finite and greater than the minimum step")]
    MaxStep,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::wolfe(1e-4, 0.9).unwrap()
    }
}

impl Config {
    /// Creates a validated config.
    ///
    /// # Errors
    ///
    /// Returns an error if the constants are out of order or out of range,
    /// if `max_iters` is zero, or if `max_step` is not a usable step length.
    pub fn new(c1: f64, c2: f64, max_iters: usize, max_step: f64) -> Result<Self, ConfigError> {
        if !(c1 > 0.0 && c1 < 1.0) {
            return Err(ConfigError::C1);
        }
        if !(c2 > c1 && c2 < 1.0) {
            return Err(ConfigError::C2);
        }
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        if !(max_step.is_finite() && max_step > super::MIN_STEP) {
            return Err(ConfigError::MaxStep);
        }

        Ok(Self {
            c1,
            c2,
            max_iters,
            max_step,
        })
    }

    /// Creates a config with the given constants and default limits.
    ///
    /// # Errors
    ///
    /// Returns an error if the constants are invalid.
    pub fn wolfe(c1: f64, c2: f64) -> Result<Self, ConfigError> {
        Self::new(c1, c2, 100, 1e10)
    }

    #[must_use]
    pub fn c1(&self) -> f64 {
        self.c1
    }

    #[must_use]
    pub fn c2(&self) -> f64 {
        self.c2
    }

    /// Returns the maximum number of trial evaluations per phase.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the largest step length a search will try.
    #[must_use]
    pub fn max_step(&self) -> f64 {
        self.max_step
    }
}
