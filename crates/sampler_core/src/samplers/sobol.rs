//! Sobol quasi-random sampling.

use std::ops::Range;

use tracing::debug;

use crate::bounds::IntoBounds;
use crate::error::Result;
use crate::matrix::SampleMatrix;
use crate::qmc::{LowDiscrepancySequence, SobolSequence};
use crate::rng::{resolve, Seed};

/// Range the number of discarded leading Sobol points is drawn from.
///
/// The first points of a Sobol sequence are badly spread (the origin, then
/// points on the main diagonal), so a random offset in this range is
/// skipped on every call.
pub const SOBOL_SKIP_RANGE: Range<usize> = 100..200;

/// Draws `n` points of a randomly offset Sobol sequence, mapped into the box.
///
/// One integer `skip` in [`SOBOL_SKIP_RANGE`] is drawn from the random
/// state; the points are Sobol indices `skip..skip + n`.
///
/// # Errors
///
/// - [`SamplingError::InvalidBounds`](crate::SamplingError::InvalidBounds)
///   for malformed bounds
/// - [`SamplingError::DimensionLimitExceeded`](crate::SamplingError::DimensionLimitExceeded)
///   above [`SOBOL_MAX_DIMENSION`](crate::qmc::SOBOL_MAX_DIMENSION)
///   dimensions; the random state is left untouched
///
/// # Examples
///
/// ```rust
/// use sampler_core::samplers::sobol;
///
/// let a = sobol([(0.0, 1.0)], 5, 1u64).unwrap();
/// let b = sobol([(0.0, 1.0)], 5, 1u64).unwrap();
/// assert_eq!(a.shape(), (5, 1));
/// assert_eq!(a, b);
/// ```
pub fn sobol<'a>(
    bounds: impl IntoBounds,
    n: usize,
    seed: impl Into<Seed<'a>>,
) -> Result<SampleMatrix> {
    let bounds = bounds.into_bounds()?;
    let d = bounds.dimensions();
    let mut sequence = SobolSequence::new(d)?;

    let (skip, rng_seed) = {
        let mut rng = resolve(seed.into());
        (rng.gen_index(SOBOL_SKIP_RANGE), rng.seed())
    };
    debug!(method = "sobol", n, dimensions = d, skip, seed = rng_seed, "Sampling");

    sequence.skip(skip as u64);
    let mut data = vec![0.0; n * d];
    sequence.fill_points(&mut data);
    bounds.scale_rows(&mut data);

    Ok(SampleMatrix::from_vec(n, d, data))
}
