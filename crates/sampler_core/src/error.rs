//! Error types for sampling operations.
//!
//! Every failure is a caller-input problem reported synchronously at the
//! call that caused it; no sampler returns a partial result.

use thiserror::Error;

/// Errors raised while resolving seeds, normalising bounds or sampling.
///
/// # Examples
/// ```
/// use sampler_core::SamplingError;
///
/// let err = SamplingError::InvalidBounds("lower bound 2 exceeds upper bound 1".to_string());
/// assert_eq!(
///     err.to_string(),
///     "Invalid bounds: lower bound 2 exceeds upper bound 1"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SamplingError {
    /// Seed specification is neither absent, a non-negative integer, nor a state.
    #[error("Invalid seed: {0}")]
    InvalidSeed(String),

    /// Bounds are empty, non-finite, inverted or malformed.
    #[error("Invalid bounds: {0}")]
    InvalidBounds(String),

    /// The Sobol generator does not support the requested dimensionality.
    #[error("Sobol sequence supports at most {max} dimensions, {requested} requested")]
    DimensionLimitExceeded {
        /// Number of dimensions requested.
        requested: usize,
        /// Largest supported dimensionality.
        max: usize,
    },

    /// The grid point count `n^d` does not fit in `usize`.
    #[error("Grid of {n} points in {dimensions} dimensions is too large")]
    GridTooLarge {
        /// Points per dimension.
        n: usize,
        /// Number of dimensions.
        dimensions: usize,
    },

    /// Sampling method name not recognised.
    #[error("Unknown sampling method: {0}. Supported: uniform, latin, sobol, grid")]
    UnknownMethod(String),
}

/// Result alias for sampling operations.
pub type Result<T> = std::result::Result<T, SamplingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SamplingError::InvalidSeed("foo".to_string());
        assert_eq!(err.to_string(), "Invalid seed: foo");

        let err = SamplingError::DimensionLimitExceeded {
            requested: 41,
            max: 40,
        };
        assert!(err.to_string().contains("at most 40"));
        assert!(err.to_string().contains("41 requested"));

        let err = SamplingError::GridTooLarge {
            n: 1_000,
            dimensions: 10,
        };
        assert!(err.to_string().contains("1000 points in 10 dimensions"));
    }
}
