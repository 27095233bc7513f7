//! Latin hypercube sampling.
//!
//! Each dimension is cut into `n` equal-width strata and receives exactly
//! one point per stratum. The stratum order is then shuffled independently
//! per dimension; without that shuffle row `k` would sit in stratum `k` of
//! every dimension, i.e. on the diagonal.

use tracing::debug;

use crate::bounds::IntoBounds;
use crate::error::Result;
use crate::matrix::SampleMatrix;
use crate::rng::{resolve, Seed};

/// Draws `n` points from a Latin hypercube over the box.
///
/// Draw order: `n × d` uniform offsets row by row, then one permutation
/// per dimension in dimension order. `n == 0` yields an empty `0 × d`
/// matrix and consumes nothing.
///
/// # Errors
///
/// [`SamplingError::InvalidBounds`](crate::SamplingError::InvalidBounds)
/// for malformed bounds.
///
/// # Examples
///
/// ```rust
/// use sampler_core::samplers::latin;
///
/// let sample = latin([(0.0, 1.0)], 4, 9u64).unwrap();
/// let mut strata: Vec<usize> = sample.column(0).map(|x| (x * 4.0) as usize).collect();
/// strata.sort_unstable();
/// assert_eq!(strata, vec![0, 1, 2, 3]);
/// ```
pub fn latin<'a>(
    bounds: impl IntoBounds,
    n: usize,
    seed: impl Into<Seed<'a>>,
) -> Result<SampleMatrix> {
    let bounds = bounds.into_bounds()?;
    let d = bounds.dimensions();
    if n == 0 {
        return Ok(SampleMatrix::empty(d));
    }

    let mut rng = resolve(seed.into());
    debug!(method = "latin", n, dimensions = d, seed = rng.seed(), "Sampling");

    let mut data = vec![0.0; n * d];
    rng.fill_uniform(&mut data);

    let strata = n as f64;
    for (k, row) in data.chunks_exact_mut(d).enumerate() {
        for (dim, value) in row.iter_mut().enumerate() {
            *value = bounds.scale(dim, (k as f64 + *value) / strata);
        }
    }

    let mut column = vec![0.0; n];
    for dim in 0..d {
        for (k, x) in column.iter_mut().enumerate() {
            *x = data[k * d + dim];
        }
        rng.shuffle(&mut column);
        for (k, &x) in column.iter().enumerate() {
            data[k * d + dim] = x;
        }
    }

    Ok(SampleMatrix::from_vec(n, d, data))
}
