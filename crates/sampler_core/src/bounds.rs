//! Axis-aligned box bounds.
//!
//! Samplers accept either a single `(lo, hi)` pair or a sequence of pairs;
//! both are normalised here into [`Bounds`] before any sampling logic runs.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SamplingError};

/// Validated per-dimension `(lo, hi)` bounds with `lo <= hi`, both finite.
///
/// # Examples
///
/// ```rust
/// use sampler_core::Bounds;
///
/// let bounds = Bounds::new(vec![(0.0, 1.0), (3.0, 4.0)]).unwrap();
/// assert_eq!(bounds.dimensions(), 2);
/// assert_eq!(bounds.width(1), 1.0);
///
/// let parsed: Bounds = "0:1, 3:4".parse().unwrap();
/// assert_eq!(parsed, bounds);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Bounds {
    pairs: Vec<(f64, f64)>,
}

impl Bounds {
    /// Validates and wraps a sequence of `(lo, hi)` pairs.
    ///
    /// # Errors
    ///
    /// [`SamplingError::InvalidBounds`] if `pairs` is empty, a bound is not
    /// finite, or `lo > hi` in some dimension.
    pub fn new(pairs: Vec<(f64, f64)>) -> Result<Self> {
        if pairs.is_empty() {
            return Err(SamplingError::InvalidBounds(
                "at least one dimension is required".to_string(),
            ));
        }
        for (dim, &(lo, hi)) in pairs.iter().enumerate() {
            if !lo.is_finite() || !hi.is_finite() {
                return Err(SamplingError::InvalidBounds(format!(
                    "dimension {} has non-finite bounds ({}, {})",
                    dim, lo, hi
                )));
            }
            if lo > hi {
                return Err(SamplingError::InvalidBounds(format!(
                    "dimension {} has lower bound {} above upper bound {}",
                    dim, lo, hi
                )));
            }
        }
        Ok(Self { pairs })
    }

    /// Number of dimensions `d`.
    #[inline]
    pub fn dimensions(&self) -> usize {
        self.pairs.len()
    }

    /// The `(lo, hi)` pairs, one per dimension.
    #[inline]
    pub fn pairs(&self) -> &[(f64, f64)] {
        &self.pairs
    }

    /// Lower bound of dimension `dim`.
    #[inline]
    pub fn lo(&self, dim: usize) -> f64 {
        self.pairs[dim].0
    }

    /// Upper bound of dimension `dim`.
    #[inline]
    pub fn hi(&self, dim: usize) -> f64 {
        self.pairs[dim].1
    }

    /// Width `hi - lo` of dimension `dim`.
    #[inline]
    pub fn width(&self, dim: usize) -> f64 {
        let (lo, hi) = self.pairs[dim];
        hi - lo
    }

    /// Maps a unit-interval coordinate `t` into dimension `dim`.
    ///
    /// The result is clamped to `[lo, hi]`, so rounding in `lo + w * t`
    /// can never leave the box.
    #[inline]
    pub fn scale(&self, dim: usize, t: f64) -> f64 {
        let (lo, hi) = self.pairs[dim];
        (lo + (hi - lo) * t).clamp(lo, hi)
    }

    /// Maps every row of a row-major unit-cube buffer into the box, in place.
    ///
    /// `unit.len()` must be a multiple of [`Bounds::dimensions`].
    pub(crate) fn scale_rows(&self, unit: &mut [f64]) {
        let d = self.dimensions();
        for row in unit.chunks_exact_mut(d) {
            for (dim, value) in row.iter_mut().enumerate() {
                *value = self.scale(dim, *value);
            }
        }
    }

    /// Returns true if `point` lies in the closed box.
    pub fn contains(&self, point: &[f64]) -> bool {
        point.len() == self.dimensions()
            && point
                .iter()
                .zip(&self.pairs)
                .all(|(&x, &(lo, hi))| lo <= x && x <= hi)
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (dim, (lo, hi)) in self.pairs.iter().enumerate() {
            if dim > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}:{}", lo, hi)?;
        }
        Ok(())
    }
}

/// Parses `lo:hi[,lo:hi...]`, e.g. `"0:1,3:4"`.
impl FromStr for Bounds {
    type Err = SamplingError;

    fn from_str(s: &str) -> Result<Self> {
        let pairs = s
            .split(',')
            .map(|pair| {
                let (lo, hi) = pair.split_once(':').ok_or_else(|| {
                    SamplingError::InvalidBounds(format!(
                        "expected 'lo:hi', got '{}'",
                        pair.trim()
                    ))
                })?;
                Ok((parse_bound(lo)?, parse_bound(hi)?))
            })
            .collect::<Result<Vec<_>>>()?;
        Bounds::new(pairs)
    }
}

fn parse_bound(text: &str) -> Result<f64> {
    let text = text.trim();
    text.parse::<f64>()
        .map_err(|_| SamplingError::InvalidBounds(format!("'{}' is not a number", text)))
}

/// Conversion of the accepted bounds shapes into [`Bounds`].
///
/// Implemented for a single `(lo, hi)` pair (one dimension), slices,
/// arrays and vectors of pairs, and [`Bounds`] itself.
pub trait IntoBounds {
    /// Validates and normalises into [`Bounds`].
    fn into_bounds(self) -> Result<Bounds>;
}

impl IntoBounds for Bounds {
    fn into_bounds(self) -> Result<Bounds> {
        Ok(self)
    }
}

impl IntoBounds for &Bounds {
    fn into_bounds(self) -> Result<Bounds> {
        Ok(self.clone())
    }
}

impl IntoBounds for (f64, f64) {
    fn into_bounds(self) -> Result<Bounds> {
        Bounds::new(vec![self])
    }
}

impl IntoBounds for &[(f64, f64)] {
    fn into_bounds(self) -> Result<Bounds> {
        Bounds::new(self.to_vec())
    }
}

impl<const N: usize> IntoBounds for [(f64, f64); N] {
    fn into_bounds(self) -> Result<Bounds> {
        Bounds::new(self.to_vec())
    }
}

impl<const N: usize> IntoBounds for &[(f64, f64); N] {
    fn into_bounds(self) -> Result<Bounds> {
        Bounds::new(self.to_vec())
    }
}

impl IntoBounds for Vec<(f64, f64)> {
    fn into_bounds(self) -> Result<Bounds> {
        Bounds::new(self)
    }
}

impl IntoBounds for &Vec<(f64, f64)> {
    fn into_bounds(self) -> Result<Bounds> {
        Bounds::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_pair_is_one_dimension() {
        let bounds = (0.0, 1.0).into_bounds().unwrap();
        assert_eq!(bounds.dimensions(), 1);
        assert_eq!(bounds.pairs(), &[(0.0, 1.0)]);
    }

    #[test]
    fn test_sequence_of_pairs() {
        let bounds = [(0.0, 1.0), (3.0, 4.0)].into_bounds().unwrap();
        assert_eq!(bounds.dimensions(), 2);
        assert_eq!(bounds.lo(1), 3.0);
        assert_eq!(bounds.hi(1), 4.0);

        let from_vec = vec![(0.0, 1.0), (3.0, 4.0)].into_bounds().unwrap();
        assert_eq!(from_vec, bounds);
    }

    #[test]
    fn test_degenerate_dimension_allowed() {
        let bounds = Bounds::new(vec![(2.0, 2.0)]).unwrap();
        assert_eq!(bounds.width(0), 0.0);
        assert_eq!(bounds.scale(0, 0.7), 2.0);
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let err = [(0.0, 1.0), (4.0, 3.0)].into_bounds().unwrap_err();
        assert!(matches!(err, SamplingError::InvalidBounds(_)));
        assert!(err.to_string().contains("dimension 1"));
    }

    #[test]
    fn test_empty_and_non_finite_rejected() {
        assert!(matches!(
            Vec::<(f64, f64)>::new().into_bounds(),
            Err(SamplingError::InvalidBounds(_))
        ));
        assert!(matches!(
            (f64::NAN, 1.0).into_bounds(),
            Err(SamplingError::InvalidBounds(_))
        ));
        assert!(matches!(
            (0.0, f64::INFINITY).into_bounds(),
            Err(SamplingError::InvalidBounds(_))
        ));
    }

    #[test]
    fn test_scale_stays_in_box() {
        let bounds = Bounds::new(vec![(-1e300, 1e300), (0.1, 0.3)]).unwrap();
        for t in [0.0, 0.25, 0.5, 0.999_999_999_999, 1.0] {
            let x = bounds.scale(0, t);
            let y = bounds.scale(1, t);
            assert!(bounds.contains(&[x, y]), "t = {} gave ({}, {})", t, x, y);
        }
    }

    #[test]
    fn test_parse() {
        let bounds: Bounds = "0:1,3:4".parse().unwrap();
        assert_eq!(bounds.pairs(), &[(0.0, 1.0), (3.0, 4.0)]);
        assert_eq!(bounds.to_string(), "0:1,3:4");

        let negative: Bounds = " -2.5 : 1e1 ".parse().unwrap();
        assert_eq!(negative.pairs(), &[(-2.5, 10.0)]);
    }

    #[test]
    fn test_parse_malformed() {
        for text in ["", "0", "0:1,", "a:1", "0:1:2", "1:0"] {
            assert!(
                matches!(text.parse::<Bounds>(), Err(SamplingError::InvalidBounds(_))),
                "'{}' should be rejected",
                text
            );
        }
    }
}
