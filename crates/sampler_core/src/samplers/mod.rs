//! # Samplers
//!
//! Point sets over an axis-aligned box, one function per strategy:
//!
//! | Sampler | Random state | Rows |
//! |---|---|---|
//! | [`uniform`] | `n × d` draws | `n` |
//! | [`latin`] | `n × d` draws + `d` permutations | `n` |
//! | [`sobol`] | one skip draw | `n` |
//! | [`grid`] | none | `n^d` |
//!
//! Every sampler normalises its bounds first, so invalid bounds fail
//! before any random state is touched. [`SamplingMethod`] selects a
//! strategy by name, e.g. for the initial design of an optimiser.

mod grid;
mod latin;
mod sobol;
mod uniform;

use std::fmt;
use std::str::FromStr;

pub use grid::{grid, linspace};
pub use latin::latin;
pub use sobol::{sobol, SOBOL_SKIP_RANGE};
pub use uniform::uniform;

use crate::bounds::IntoBounds;
use crate::error::{Result, SamplingError};
use crate::matrix::SampleMatrix;
use crate::rng::Seed;

/// Sampling strategy selectable at runtime.
///
/// # Examples
///
/// ```rust
/// use sampler_core::samplers::SamplingMethod;
///
/// let method: SamplingMethod = "lhs".parse().unwrap();
/// assert_eq!(method, SamplingMethod::Latin);
///
/// let sample = method.sample([(0.0, 1.0), (3.0, 4.0)], 10, 42u64).unwrap();
/// assert_eq!(sample.shape(), (10, 2));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum SamplingMethod {
    /// Independent uniform draws.
    Uniform,
    /// Latin hypercube.
    #[default]
    Latin,
    /// Randomly offset Sobol sequence.
    Sobol,
    /// Regular Cartesian grid, `n^d` points.
    Grid,
}

impl SamplingMethod {
    /// All strategies, in declaration order.
    pub const ALL: [SamplingMethod; 4] = [
        SamplingMethod::Uniform,
        SamplingMethod::Latin,
        SamplingMethod::Sobol,
        SamplingMethod::Grid,
    ];

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            SamplingMethod::Uniform => "uniform",
            SamplingMethod::Latin => "latin",
            SamplingMethod::Sobol => "sobol",
            SamplingMethod::Grid => "grid",
        }
    }

    /// Whether the strategy consumes random state.
    pub fn is_random(&self) -> bool {
        !matches!(self, SamplingMethod::Grid)
    }

    /// Number of rows produced for `n` points in `dimensions` dimensions,
    /// or `None` if it overflows.
    pub fn rows(&self, n: usize, dimensions: usize) -> Option<usize> {
        match self {
            SamplingMethod::Grid => n.checked_pow(u32::try_from(dimensions).ok()?),
            _ => Some(n),
        }
    }

    /// Runs the strategy. `seed` is ignored by [`SamplingMethod::Grid`].
    pub fn sample<'a>(
        &self,
        bounds: impl IntoBounds,
        n: usize,
        seed: impl Into<Seed<'a>>,
    ) -> Result<SampleMatrix> {
        match self {
            SamplingMethod::Uniform => uniform(bounds, n, seed),
            SamplingMethod::Latin => latin(bounds, n, seed),
            SamplingMethod::Sobol => sobol(bounds, n, seed),
            SamplingMethod::Grid => grid(bounds, n),
        }
    }
}

impl fmt::Display for SamplingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SamplingMethod {
    type Err = SamplingError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "uniform" | "random" => Ok(SamplingMethod::Uniform),
            "latin" | "lhs" => Ok(SamplingMethod::Latin),
            "sobol" => Ok(SamplingMethod::Sobol),
            "grid" => Ok(SamplingMethod::Grid),
            _ => Err(SamplingError::UnknownMethod(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SamplerRng;

    #[test]
    fn test_parse_and_display() {
        for method in SamplingMethod::ALL {
            assert_eq!(method.to_string().parse::<SamplingMethod>(), Ok(method));
        }
        assert_eq!("Random".parse(), Ok(SamplingMethod::Uniform));
        assert_eq!(" LHS ".parse(), Ok(SamplingMethod::Latin));
        assert_eq!(
            "halton".parse::<SamplingMethod>(),
            Err(SamplingError::UnknownMethod("halton".to_string()))
        );
    }

    #[test]
    fn test_dispatch_matches_functions() {
        let bounds = [(0.0, 1.0), (3.0, 4.0)];

        for method in SamplingMethod::ALL {
            let dispatched = method.sample(bounds, 6, 11u64).unwrap();
            let direct = match method {
                SamplingMethod::Uniform => uniform(bounds, 6, 11u64),
                SamplingMethod::Latin => latin(bounds, 6, 11u64),
                SamplingMethod::Sobol => sobol(bounds, 6, 11u64),
                SamplingMethod::Grid => grid(bounds, 6),
            }
            .unwrap();

            assert_eq!(dispatched, direct, "{}", method);
            assert_eq!(Some(dispatched.nrows()), method.rows(6, 2));
        }
    }

    #[test]
    fn test_grid_ignores_state() {
        let mut rng = SamplerRng::from_seed(6);
        let mut untouched = rng.clone();

        SamplingMethod::Grid
            .sample((0.0, 1.0), 4, &mut rng)
            .unwrap();

        assert!(!SamplingMethod::Grid.is_random());
        assert_eq!(rng.gen_uniform(), untouched.gen_uniform());
    }
}
