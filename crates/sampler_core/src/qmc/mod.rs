//! Quasi-Monte Carlo sequences.
//!
//! This module defines the interface for low-discrepancy sequences and
//! provides the Sobol generator the Sobol sampler delegates to.
//!
//! ## Module Structure
//!
//! - [`LowDiscrepancySequence`]: point-by-point access to a sequence
//! - [`SobolSequence`]: Sobol sequence with Bratley–Fox direction numbers
//! - [`sobol_generate`]: first `n` points after skipping `skip`, as a matrix

mod sobol;

pub use sobol::{sobol_generate, SobolSequence, SOBOL_MAX_DIMENSION};

/// Trait for low-discrepancy sequences used in quasi-Monte Carlo methods.
///
/// Low-discrepancy sequences provide more uniform coverage of the unit
/// hypercube than pseudo-random sequences.
pub trait LowDiscrepancySequence {
    /// Returns the dimensionality of the sequence.
    fn dimension(&self) -> usize;

    /// Returns the index of the point the next call to
    /// [`next_point`](Self::next_point) will yield.
    fn index(&self) -> u64;

    /// Advances the sequence and returns the next point.
    ///
    /// The slice has `dimension()` values, each in the interval [0, 1).
    fn next_point(&mut self) -> &[f64];

    /// Resets the sequence to its initial state.
    ///
    /// After calling this method, the sequence will produce the same
    /// points as a newly initialised instance.
    fn reset(&mut self);

    /// Skips ahead by `n` points in the sequence.
    ///
    /// Useful to discard poor leading points, or to give parallel workers
    /// non-overlapping portions of the sequence.
    fn skip(&mut self, n: u64);

    /// Writes successive points row-major into `buffer`.
    ///
    /// `buffer.len()` should be a multiple of `dimension()`; a trailing
    /// partial row is left untouched.
    fn fill_points(&mut self, buffer: &mut [f64]) {
        let d = self.dimension();
        if d == 0 {
            return;
        }
        for row in buffer.chunks_exact_mut(d) {
            row.copy_from_slice(self.next_point());
        }
    }
}
