//! Regular grid "sampler".

use tracing::debug;

use crate::bounds::IntoBounds;
use crate::error::{Result, SamplingError};
use crate::matrix::SampleMatrix;

/// `n` evenly spaced values covering `[lo, hi]`, both endpoints included.
///
/// `n == 1` gives `[lo]`; `n == 0` gives nothing.
///
/// ```rust
/// use sampler_core::samplers::linspace;
///
/// assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// assert_eq!(linspace(3.0, 4.0, 1), vec![3.0]);
/// ```
pub fn linspace(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![lo],
        _ => {
            let step = (hi - lo) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n)
                .map(|i| (lo + step * i as f64).clamp(lo, hi))
                .collect();
            values[n - 1] = hi;
            values
        }
    }
}

/// Full Cartesian grid with `n` points per dimension, `n^d` rows.
///
/// Rows are in lexicographic order with **dimension 0 varying slowest**
/// and the last dimension fastest. Deterministic; consumes no random state.
///
/// # Errors
///
/// - [`SamplingError::InvalidBounds`] for malformed bounds
/// - [`SamplingError::GridTooLarge`] if `n^d` values do not fit in memory
///   addressing (`usize`)
///
/// # Examples
///
/// ```rust
/// use sampler_core::samplers::grid;
///
/// let sample = grid([(0.0, 1.0), (3.0, 4.0)], 2).unwrap();
/// assert_eq!(
///     sample.to_rows(),
///     vec![vec![0.0, 3.0], vec![0.0, 4.0], vec![1.0, 3.0], vec![1.0, 4.0]]
/// );
/// ```
pub fn grid(bounds: impl IntoBounds, n: usize) -> Result<SampleMatrix> {
    let bounds = bounds.into_bounds()?;
    let d = bounds.dimensions();
    let too_large = || SamplingError::GridTooLarge { n, dimensions: d };

    let rows = u32::try_from(d)
        .ok()
        .and_then(|exponent| n.checked_pow(exponent))
        .ok_or_else(too_large)?;
    let len = rows.checked_mul(d).ok_or_else(too_large)?;
    debug!(method = "grid", n, dimensions = d, rows, "Sampling");

    let axes: Vec<Vec<f64>> = bounds
        .pairs()
        .iter()
        .map(|&(lo, hi)| linspace(lo, hi, n))
        .collect();

    let mut data = vec![0.0; len];
    for (row, point) in data.chunks_exact_mut(d).enumerate() {
        let mut rest = row;
        for (value, axis) in point.iter_mut().zip(&axes).rev() {
            *value = axis[rest % n];
            rest /= n;
        }
    }

    Ok(SampleMatrix::from_vec(rows, d, data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_one_dimension() {
        let sample = grid((0.0, 1.0), 10).unwrap();

        assert_eq!(sample.shape(), (10, 1));
        let values: Vec<f64> = sample.column(0).collect();
        assert_eq!(values[0], 0.0);
        assert_eq!(values[9], 1.0);
        for (i, &x) in values.iter().enumerate() {
            assert_relative_eq!(x, i as f64 / 9.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_two_dimensions() {
        let sample = grid([(0.0, 1.0), (3.0, 4.0)], 10).unwrap();

        assert_eq!(sample.shape(), (100, 2));
        assert!(sample.column(0).all(|x| (0.0..=1.0).contains(&x)));
        assert!(sample.column(1).all(|x| (3.0..=4.0).contains(&x)));

        let mut rows = sample.to_rows();
        rows.dedup();
        assert_eq!(rows.len(), 100, "grid points must be distinct");
    }

    #[test]
    fn test_dimension_zero_varies_slowest() {
        let sample = grid([(0.0, 2.0), (0.0, 1.0), (5.0, 6.0)], 3).unwrap();

        assert_eq!(sample.shape(), (27, 3));
        assert_eq!(sample.row(0), &[0.0, 0.0, 5.0]);
        assert_eq!(sample.row(1), &[0.0, 0.0, 5.5]);
        assert_eq!(sample.row(3), &[0.0, 0.5, 5.0]);
        assert_eq!(sample.row(9), &[1.0, 0.0, 5.0]);
        assert_eq!(sample.row(26), &[2.0, 1.0, 6.0]);
    }

    #[test]
    fn test_small_n() {
        assert_eq!(grid([(0.0, 1.0), (2.0, 3.0)], 1).unwrap().to_rows(), vec![vec![0.0, 2.0]]);
        assert_eq!(grid([(0.0, 1.0), (2.0, 3.0)], 0).unwrap().shape(), (0, 2));
    }

    #[test]
    fn test_degenerate_dimension() {
        let sample = grid([(1.0, 1.0), (0.0, 1.0)], 3).unwrap();
        assert!(sample.column(0).all(|x| x == 1.0));
    }

    #[test]
    fn test_too_large() {
        let err = grid(vec![(0.0, 1.0); 40], 10).unwrap_err();
        assert_eq!(
            err,
            SamplingError::GridTooLarge {
                n: 10,
                dimensions: 40
            }
        );
    }

    #[test]
    fn test_linspace_endpoints() {
        let values = linspace(-1.0, 0.3, 7);
        assert_eq!(values.len(), 7);
        assert_eq!(values[0], -1.0);
        assert_eq!(values[6], 0.3);
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }
}
