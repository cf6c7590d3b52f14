//! Errors returned by [`sample`](crate::sample) and [`choice`](crate::choice).

use thiserror::Error;

/// Errors for weighted sampling.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SampleError {
    /// The input sequence has no elements to sample from.
    #[error("input sequence is empty")]
    EmptyInput,

    /// The requested sample is at least as large as the input.
    ///
    /// `requested == available` is rejected too: a sample never covers the
    /// whole population.
    #[error("requested sample size {requested} must be smaller than the input size {available}")]
    SampleTooLarge {
        /// The requested `k`.
        requested: usize,
        /// Number of elements in the input.
        available: usize,
    },

    /// The weighted scan finished without landing on an element.
    ///
    /// Unreachable for finite, non-negative weights; seeing it means a bug or
    /// invalid weights, not a condition worth retrying.
    #[error("internal invariant violated: weighted scan exhausted input with residual threshold {residual}")]
    InternalInvariant {
        /// Threshold left over after subtracting every weight.
        residual: f64,
    },
}
