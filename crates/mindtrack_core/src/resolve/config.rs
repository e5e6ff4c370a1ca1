//! Resolver tuning.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Default acceptance threshold for approximate similarity matches.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.6;

/// Tunable knobs of the resolution chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolverConfig {
    similarity_threshold: f64,
}

impl ResolverConfig {
    /// Creates a config with a custom similarity threshold.
    ///
    /// A similarity match is accepted only when its score is strictly greater
    /// than `similarity_threshold`.
    ///
    /// # Errors
    /// - Returns an error when the threshold is not finite or outside `[0, 1]`.
    pub fn new(similarity_threshold: f64) -> Result<Self, ResolverConfigError> {
        if !similarity_threshold.is_finite() || !(0.0..=1.0).contains(&similarity_threshold) {
            return Err(ResolverConfigError::InvalidThreshold(similarity_threshold));
        }
        Ok(Self {
            similarity_threshold,
        })
    }

    pub fn similarity_threshold(&self) -> f64 {
        self.similarity_threshold
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
        }
    }
}

/// Resolver config validation error.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolverConfigError {
    InvalidThreshold(f64),
}

impl Display for ResolverConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidThreshold(value) => write!(
                f,
                "similarity threshold must be a finite number in [0, 1], got {value}"
            ),
        }
    }
}

impl Error for ResolverConfigError {}
