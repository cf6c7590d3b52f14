//! `wsample`: weighted sampling without replacement.
//!
//! Draws `k` elements from an in-memory weighted population, each chosen with
//! probability proportional to its weight among those not yet chosen. One pass,
//! O(n·log k) time, O(k) memory.
//!
//! Exposed modules:
//! - `weighted`: the [`Weighted`] capability trait.
//! - `reservoir`: the bounded [`SampleHeap`] (Efraimidis–Spirakis, exponential keys).
//! - `choice`: O(n) single weighted choice.
//! - `sample`: validation and dispatch between the two.
//!
//! Every entrypoint has a `*_with_rng` form taking the random source
//! explicitly; the plain forms use `rand::rng()`.
//!
//! ```
//! use wsample::{sample_with_rng, Weighted};
//! use rand::SeedableRng;
//!
//! struct Server {
//!     name: &'static str,
//!     capacity: f64,
//! }
//!
//! impl Weighted for Server {
//!     fn weight(&self) -> f64 {
//!         self.capacity
//!     }
//! }
//!
//! let servers = [
//!     Server { name: "a", capacity: 1.0 },
//!     Server { name: "b", capacity: 4.0 },
//!     Server { name: "c", capacity: 2.0 },
//! ];
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let picked = sample_with_rng(&servers, 2, &mut rng)?;
//! assert_eq!(picked.len(), 2);
//! assert_ne!(picked[0].name, picked[1].name);
//! # Ok::<(), wsample::SampleError>(())
//! ```

#![forbid(unsafe_code)]

pub mod choice;
pub mod error;
pub mod reservoir;
pub mod sample;
pub mod weighted;

pub use choice::{choice, choice_with_rng};
pub use error::SampleError;
pub use reservoir::SampleHeap;
pub use sample::{sample, sample_with_rng};
pub use weighted::Weighted;
