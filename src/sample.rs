//! Weighted sampling without replacement.
//!
//! Validates the request, then takes one of two paths:
//! - `k == 1`: a single linear [`choice`](crate::choice()).
//! - otherwise: every element goes through a [`SampleHeap`] of capacity `k`.
//!
//! Both paths draw from the same distribution for `k == 1`. The result order
//! carries no meaning.

use rand::Rng;

use crate::choice::choice_with_rng;
use crate::error::SampleError;
use crate::reservoir::SampleHeap;
use crate::weighted::Weighted;

/// Sample `k` elements without replacement, each drawn with probability
/// proportional to its weight among the elements not yet drawn.
///
/// Uses the thread-local RNG. See [`sample_with_rng`] for the deterministic form.
///
/// Complexity is O(n·log k) time and O(k) memory.
pub fn sample<T: Weighted>(input: &[T], k: usize) -> Result<Vec<&T>, SampleError> {
    let mut rng = rand::rng();
    sample_with_rng(input, k, &mut rng)
}

/// [`sample`] with a caller-supplied RNG (for tests/benchmarks).
///
/// # Errors
///
/// - [`SampleError::EmptyInput`] if `input` is empty.
/// - [`SampleError::SampleTooLarge`] if `k >= input.len()`. Asking for the
///   whole population is rejected as well.
///
/// `k == 0` on a non-empty input yields an empty sample.
pub fn sample_with_rng<'a, T: Weighted, R: Rng + ?Sized>(
    input: &'a [T],
    k: usize,
    rng: &mut R,
) -> Result<Vec<&'a T>, SampleError> {
    let n = input.len();
    if n == 0 {
        tracing::debug!(k, "rejecting sample of empty input");
        return Err(SampleError::EmptyInput);
    }
    if k >= n {
        tracing::debug!(k, n, "rejecting sample at least as large as input");
        return Err(SampleError::SampleTooLarge {
            requested: k,
            available: n,
        });
    }

    if k == 1 {
        tracing::debug!(n, "sampling via single weighted choice");
        return choice_with_rng(input, rng).map(|picked| vec![picked]);
    }

    tracing::debug!(n, k, "sampling via sample heap");
    let mut heap = SampleHeap::new(k);
    for item in input {
        heap.push_with_rng(item, rng);
    }
    Ok(heap.into_result())
}
