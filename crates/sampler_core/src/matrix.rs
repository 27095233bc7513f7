//! Sample matrix returned by every sampler.

/// `n × d` matrix of sample points stored row-major.
///
/// Row `k` is the `k`-th point; column `i` holds dimension `i`.
///
/// # Examples
///
/// ```rust
/// use sampler_core::SampleMatrix;
///
/// let matrix = SampleMatrix::from_vec(2, 2, vec![0.1, 3.2, 0.9, 3.8]);
/// assert_eq!(matrix.shape(), (2, 2));
/// assert_eq!(matrix.row(1), &[0.9, 3.8]);
/// assert_eq!(matrix.column(1).collect::<Vec<_>>(), vec![3.2, 3.8]);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SampleMatrix {
    nrows: usize,
    ncols: usize,
    data: Vec<f64>,
}

impl SampleMatrix {
    /// Wraps row-major `data` as an `nrows × ncols` matrix.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != nrows * ncols`.
    pub fn from_vec(nrows: usize, ncols: usize, data: Vec<f64>) -> Self {
        assert_eq!(
            data.len(),
            nrows * ncols,
            "data length {} does not match shape ({}, {})",
            data.len(),
            nrows,
            ncols
        );
        Self { nrows, ncols, data }
    }

    /// Empty matrix with `ncols` columns.
    pub fn empty(ncols: usize) -> Self {
        Self::from_vec(0, ncols, Vec::new())
    }

    /// Number of points `n`.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of dimensions `d`.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// `(nrows, ncols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nrows == 0
    }

    /// Value at `(row, col)`, or `None` when out of range.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.nrows && col < self.ncols {
            Some(self.data[row * self.ncols + col])
        } else {
            None
        }
    }

    /// Point `row` as a slice of length `ncols`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= nrows`.
    #[inline]
    pub fn row(&self, row: usize) -> &[f64] {
        assert!(row < self.nrows, "row {} out of range", row);
        let start = row * self.ncols;
        &self.data[start..start + self.ncols]
    }

    /// Iterates over the points.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        // chunks_exact(0) panics, and a zero-column matrix has no data anyway.
        self.data.chunks_exact(self.ncols.max(1)).take(self.nrows)
    }

    /// Iterates over the values of dimension `col`.
    ///
    /// # Panics
    ///
    /// Panics if `col >= ncols`.
    pub fn column(&self, col: usize) -> impl Iterator<Item = f64> + '_ {
        assert!(col < self.ncols, "column {} out of range", col);
        self.data
            .iter()
            .skip(col)
            .step_by(self.ncols)
            .copied()
    }

    /// Row-major backing data.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Consumes the matrix, returning the row-major data.
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Copies the points into one `Vec` per row.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }
}
