//! The weight capability.
//!
//! Anything that can report a non-negative, finite weight can be sampled.
//! Weights are not validated: negative or non-finite weights give
//! unspecified (but memory-safe) results.

/// An element that carries a sampling weight.
///
/// A weight of `0.0` is allowed. Such an element gets an infinite priority
/// key in [`SampleHeap`](crate::SampleHeap), so it is only retained when fewer
/// than `k` other elements have finite keys.
pub trait Weighted {
    /// The element's weight. Must be non-negative and finite.
    fn weight(&self) -> f64;
}

impl<W: Weighted + ?Sized> Weighted for &W {
    #[inline]
    fn weight(&self) -> f64 {
        (**self).weight()
    }
}

/// A bare weight is its own element.
impl Weighted for f64 {
    #[inline]
    fn weight(&self) -> f64 {
        *self
    }
}

/// A payload paired with its weight.
impl<T> Weighted for (T, f64) {
    #[inline]
    fn weight(&self) -> f64 {
        self.1
    }
}
