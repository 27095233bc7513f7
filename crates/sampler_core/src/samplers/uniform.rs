//! Uniform random sampling.

use tracing::debug;

use crate::bounds::IntoBounds;
use crate::error::Result;
use crate::matrix::SampleMatrix;
use crate::rng::{resolve, Seed};

/// Draws `n` points uniformly at random from the box.
///
/// Each coordinate is `lo_i + (hi_i - lo_i) * u` with `u` uniform on
/// [0, 1); dimensions are independent. Draws are consumed row by row.
///
/// # Errors
///
/// [`SamplingError::InvalidBounds`](crate::SamplingError::InvalidBounds)
/// for malformed bounds.
///
/// # Examples
///
/// ```rust
/// use sampler_core::samplers::uniform;
///
/// let sample = uniform([(0.0, 1.0), (3.0, 4.0)], 10, 42u64).unwrap();
/// assert_eq!(sample.shape(), (10, 2));
/// assert!(sample.column(1).all(|x| (3.0..=4.0).contains(&x)));
/// ```
pub fn uniform<'a>(
    bounds: impl IntoBounds,
    n: usize,
    seed: impl Into<Seed<'a>>,
) -> Result<SampleMatrix> {
    let bounds = bounds.into_bounds()?;
    let d = bounds.dimensions();
    let mut rng = resolve(seed.into());
    debug!(method = "uniform", n, dimensions = d, seed = rng.seed(), "Sampling");

    let mut data = vec![0.0; n * d];
    rng.fill_uniform(&mut data);
    bounds.scale_rows(&mut data);

    Ok(SampleMatrix::from_vec(n, d, data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SamplerRng;
    use crate::SamplingError;
    use approx::assert_relative_eq;

    #[test]
    fn test_shape_and_bounds() {
        let bounds = [(0.0, 1.0), (3.0, 4.0)];
        let sample = uniform(bounds, 10, Seed::Unseeded).unwrap();

        assert_eq!(sample.shape(), (10, 2));
        assert!(sample.column(0).all(|x| (0.0..=1.0).contains(&x)));
        assert!(sample.column(1).all(|x| (3.0..=4.0).contains(&x)));
    }

    #[test]
    fn test_zero_points() {
        let sample = uniform([(0.0, 1.0), (3.0, 4.0), (5.0, 6.0)], 0, 1u64).unwrap();
        assert_eq!(sample.shape(), (0, 3));
    }

    #[test]
    fn test_matches_raw_draws() {
        let sample = uniform([(-2.0, 2.0), (10.0, 11.0)], 3, 7u64).unwrap();

        let mut rng = SamplerRng::from_seed(7);
        for row in sample.rows() {
            assert_relative_eq!(row[0], -2.0 + 4.0 * rng.gen_uniform(), epsilon = 1e-12);
            assert_relative_eq!(row[1], 10.0 + rng.gen_uniform(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let a = uniform((0.0, 5.0), 50, 3u64).unwrap();
        let b = uniform((0.0, 5.0), 50, 3u64).unwrap();
        let c = uniform((0.0, 5.0), 50, 4u64).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_shared_state_advances() {
        let mut rng = SamplerRng::from_seed(10);
        let first = uniform((0.0, 1.0), 5, &mut rng).unwrap();
        let second = uniform((0.0, 1.0), 5, &mut rng).unwrap();

        let both = uniform((0.0, 1.0), 10, 10u64).unwrap();
        assert_eq!(first.as_slice(), &both.as_slice()[..5]);
        assert_eq!(second.as_slice(), &both.as_slice()[5..]);
    }

    #[test]
    fn test_invalid_bounds() {
        assert!(matches!(
            uniform((1.0, 0.0), 3, 1u64),
            Err(SamplingError::InvalidBounds(_))
        ));
    }
}
