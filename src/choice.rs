//! Single weighted choice by linear scan.
//!
//! Picks one element with probability `w_i / Σ w_j`: sum the weights, draw a
//! threshold uniformly in `[0, W)`, and walk the input subtracting weights
//! until the threshold drops to zero or below. O(n) time, O(1) memory.

use rand::Rng;

use crate::error::SampleError;
use crate::weighted::Weighted;

/// Choose one element with probability proportional to its weight.
///
/// Uses the thread-local RNG. See [`choice_with_rng`] for the deterministic form.
pub fn choice<T: Weighted>(input: &[T]) -> Result<&T, SampleError> {
    let mut rng = rand::rng();
    choice_with_rng(input, &mut rng)
}

/// [`choice`] with a caller-supplied RNG (for tests/benchmarks).
///
/// If every weight is zero the first element is returned.
pub fn choice_with_rng<'a, T: Weighted, R: Rng + ?Sized>(
    input: &'a [T],
    rng: &mut R,
) -> Result<&'a T, SampleError> {
    if input.is_empty() {
        return Err(SampleError::EmptyInput);
    }

    let total: f64 = input.iter().map(Weighted::weight).sum();
    let mut threshold = rng.random::<f64>() * total;

    for item in input {
        threshold -= item.weight();
        if threshold <= 0.0 {
            return Ok(item);
        }
    }

    tracing::error!(
        residual = threshold,
        total,
        len = input.len(),
        "weighted scan ran past the last element"
    );
    Err(SampleError::InternalInvariant {
        residual: threshold,
    })
}
