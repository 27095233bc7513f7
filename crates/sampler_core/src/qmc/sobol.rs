//! Sobol low-discrepancy sequence.
//!
//! Direction numbers come from the primitive polynomials and initial
//! values tabulated by Bratley & Fox (ACM TOMS Algorithm 659) for 40
//! dimensions. Points are produced in Gray-code order (Antonov–Saleev):
//! consecutive points differ by a single XOR with one direction number,
//! and point `i` can be reached directly from the Gray code of `i`.

use tracing::trace;

use super::LowDiscrepancySequence;
use crate::error::{Result, SamplingError};
use crate::matrix::SampleMatrix;

/// Number of bits of precision per coordinate.
const SOBOL_BITS: usize = 32;

/// Scaling factor to convert 32-bit integers to [0, 1).
const SOBOL_SCALE: f64 = 1.0 / (1u64 << SOBOL_BITS) as f64;

/// Highest dimensionality supported by the direction number table.
pub const SOBOL_MAX_DIMENSION: usize = 40;

/// Primitive polynomial (bit-encoded, leading term included) and initial
/// direction values `m_1..m_s` for each dimension.
const DIRECTION_TABLE: [(u32, &[u32]); SOBOL_MAX_DIMENSION] = [
    (1, &[1]),
    (3, &[1]),
    (7, &[1, 1]),
    (11, &[1, 3, 7]),
    (13, &[1, 1, 5]),
    (19, &[1, 3, 1, 1]),
    (25, &[1, 1, 3, 7]),
    (37, &[1, 3, 3, 9, 9]),
    (59, &[1, 3, 7, 13, 3]),
    (47, &[1, 1, 5, 11, 27]),
    (61, &[1, 3, 5, 1, 15]),
    (55, &[1, 1, 7, 3, 29]),
    (41, &[1, 3, 7, 7, 21]),
    (67, &[1, 1, 1, 9, 23, 37]),
    (97, &[1, 3, 3, 5, 19, 33]),
    (91, &[1, 1, 3, 13, 11, 7]),
    (109, &[1, 1, 7, 13, 25, 5]),
    (103, &[1, 3, 5, 11, 7, 11]),
    (115, &[1, 1, 1, 3, 13, 39]),
    (131, &[1, 3, 1, 15, 17, 63, 13]),
    (193, &[1, 1, 5, 5, 1, 27, 33]),
    (137, &[1, 3, 3, 3, 25, 17, 115]),
    (145, &[1, 1, 3, 15, 29, 15, 41]),
    (143, &[1, 3, 1, 7, 3, 23, 79]),
    (241, &[1, 3, 7, 9, 31, 29, 17]),
    (157, &[1, 1, 5, 13, 11, 3, 29]),
    (185, &[1, 3, 1, 9, 5, 21, 119]),
    (167, &[1, 1, 3, 1, 23, 13, 75]),
    (229, &[1, 3, 3, 11, 27, 31, 73]),
    (171, &[1, 1, 7, 7, 19, 25, 105]),
    (213, &[1, 3, 5, 5, 21, 9, 7]),
    (191, &[1, 1, 1, 15, 5, 49, 59]),
    (253, &[1, 1, 1, 1, 1, 33, 65]),
    (203, &[1, 3, 5, 15, 17, 19, 21]),
    (211, &[1, 1, 7, 11, 13, 29, 3]),
    (239, &[1, 3, 7, 5, 7, 11, 113]),
    (247, &[1, 1, 5, 3, 15, 19, 61]),
    (285, &[1, 3, 1, 1, 9, 27, 89, 7]),
    (369, &[1, 1, 3, 7, 31, 15, 45, 23]),
    (299, &[1, 3, 3, 9, 9, 25, 107, 39]),
];

/// Expands one table row into 32 direction numbers `v_j = m_j << (31 - j)`.
fn direction_numbers(polynomial: u32, initial: &[u32]) -> [u32; SOBOL_BITS] {
    let degree = (u32::BITS - 1 - polynomial.leading_zeros()) as usize;
    let mut m = [1u64; SOBOL_BITS];

    // Degree 0 is the van der Corput dimension: every m_j is 1.
    if degree > 0 {
        for (mj, &v) in m.iter_mut().zip(initial) {
            *mj = u64::from(v);
        }
        for j in degree..SOBOL_BITS {
            // m_j = 2 a_1 m_{j-1} ^ 4 a_2 m_{j-2} ^ ... ^ 2^s m_{j-s} ^ m_{j-s}
            let mut value = m[j - degree];
            for k in 1..=degree {
                if (polynomial >> (degree - k)) & 1 == 1 {
                    value ^= m[j - k] << k;
                }
            }
            m[j] = value;
        }
    }

    let mut directions = [0u32; SOBOL_BITS];
    for (j, direction) in directions.iter_mut().enumerate() {
        // m_j < 2^(j + 1), so the shifted value fits in 32 bits.
        *direction = (m[j] << (SOBOL_BITS - 1 - j)) as u32;
    }
    directions
}

/// Sobol sequence generator over `[0, 1)^d`.
///
/// Point 0 is the origin. The sequence has period `2^32`; advancing past
/// the last point wraps back to the start.
///
/// # Examples
///
/// ```rust
/// use sampler_core::qmc::{LowDiscrepancySequence, SobolSequence};
///
/// let mut sobol = SobolSequence::new(2).unwrap();
/// assert_eq!(sobol.next_point(), &[0.0, 0.0]);
/// assert_eq!(sobol.next_point(), &[0.5, 0.5]);
/// assert_eq!(sobol.next_point(), &[0.75, 0.25]);
/// ```
#[derive(Clone, Debug)]
pub struct SobolSequence {
    /// Direction numbers, one row per dimension.
    directions: Vec<[u32; SOBOL_BITS]>,
    /// Integer coordinates of the point at `index`.
    state: Vec<u32>,
    /// Scaled copy of the last point handed out.
    point: Vec<f64>,
    /// Index of the next point.
    index: u64,
}

impl SobolSequence {
    /// Creates a generator for `dimension` dimensions.
    ///
    /// # Errors
    ///
    /// [`SamplingError::DimensionLimitExceeded`] if `dimension` exceeds
    /// [`SOBOL_MAX_DIMENSION`].
    pub fn new(dimension: usize) -> Result<Self> {
        if dimension > SOBOL_MAX_DIMENSION {
            return Err(SamplingError::DimensionLimitExceeded {
                requested: dimension,
                max: SOBOL_MAX_DIMENSION,
            });
        }

        let directions = DIRECTION_TABLE[..dimension]
            .iter()
            .map(|&(polynomial, initial)| direction_numbers(polynomial, initial))
            .collect();

        Ok(Self {
            directions,
            state: vec![0; dimension],
            point: vec![0.0; dimension],
            index: 0,
        })
    }

    /// Recomputes `state` for point `index` from its Gray code.
    fn seek(&mut self, index: u64) {
        let index = index % (1u64 << SOBOL_BITS);
        let gray = index ^ (index >> 1);
        for (state, directions) in self.state.iter_mut().zip(&self.directions) {
            *state = directions
                .iter()
                .enumerate()
                .filter(|&(bit, _)| (gray >> bit) & 1 == 1)
                .fold(0, |acc, (_, &v)| acc ^ v);
        }
        self.index = index;
    }
}

impl LowDiscrepancySequence for SobolSequence {
    fn dimension(&self) -> usize {
        self.directions.len()
    }

    fn index(&self) -> u64 {
        self.index
    }

    fn next_point(&mut self) -> &[f64] {
        for (x, &s) in self.point.iter_mut().zip(&self.state) {
            *x = s as f64 * SOBOL_SCALE;
        }

        // Gray codes of i and i + 1 differ in the lowest zero bit of i.
        let bit = self.index.trailing_ones() as usize;
        if bit < SOBOL_BITS {
            for (state, directions) in self.state.iter_mut().zip(&self.directions) {
                *state ^= directions[bit];
            }
            self.index += 1;
        } else {
            self.seek(0);
        }

        &self.point
    }

    fn reset(&mut self) {
        self.state.fill(0);
        self.point.fill(0.0);
        self.index = 0;
    }

    fn skip(&mut self, n: u64) {
        self.seek(self.index.wrapping_add(n));
    }
}

/// Generates `count` points of the `dimensions`-dimensional Sobol sequence,
/// after discarding the first `skip` points (indices `skip..skip + count`).
///
/// Returns a `count × dimensions` matrix with values in [0, 1).
///
/// # Errors
///
/// [`SamplingError::DimensionLimitExceeded`] above [`SOBOL_MAX_DIMENSION`].
///
/// ```rust
/// use sampler_core::qmc::sobol_generate;
///
/// let points = sobol_generate(1, 3, 1).unwrap();
/// assert_eq!(points.as_slice(), &[0.5, 0.75, 0.25]);
/// ```
pub fn sobol_generate(dimensions: usize, count: usize, skip: u64) -> Result<SampleMatrix> {
    let mut sequence = SobolSequence::new(dimensions)?;
    sequence.skip(skip);
    trace!(dimensions, count, skip, "Generating Sobol points");

    let mut data = vec![0.0; count * dimensions];
    sequence.fill_points(&mut data);
    Ok(SampleMatrix::from_vec(count, dimensions, data))
}
