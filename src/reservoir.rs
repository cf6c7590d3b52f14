//! Weighted reservoir: the bounded "sample heap".
//!
//! Keeps the `k` elements with the smallest exponential priority keys seen so
//! far. Each element gets
//!
//! \[
//! \mathrm{key}_i = \frac{E_i}{w_i}, \quad E_i \sim \mathrm{Exp}(1)
//! \]
//!
//! and retaining the `k` smallest keys reproduces weighted sampling without
//! replacement exactly (Efraimidis & Spirakis, A-ExpJ formulation).
//!
//! ## Phases
//!
//! - *Filling*: fewer than `k` entries. Entries are appended unordered; the
//!   `k`-th push heapifies all of them in one O(k) pass.
//! - *Full*: a max-heap keyed on priority. A new key smaller than the root
//!   replaces it; anything else is discarded. O(log k) per push.
//!
//! There is no way back from *full* to *filling*.
//!
//! ## References
//!
//! - Efraimidis & Spirakis (2006): *Weighted random sampling with a reservoir*.
//!
//! Notes:
//! - `push_with_rng` exists for deterministic testing/benchmarking.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rand::Rng;
use rand_distr::{Distribution, Exp1};

use crate::weighted::Weighted;

/// Priority key with a total order.
///
/// Numbers compare numerically. NaN compares greater than every number and
/// equal to NaN, so degenerate keys sit at the heap root and are evicted first.
#[derive(Debug, Clone, Copy)]
struct PriorityKey(f64);

impl Ord for PriorityKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.0.is_nan(), other.0.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            // Neither is NaN, so partial_cmp is always Some.
            (false, false) => self.0.partial_cmp(&other.0).unwrap_or(Ordering::Equal),
        }
    }
}

impl PartialOrd for PriorityKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for PriorityKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PriorityKey {}

/// An element together with its key. Ordered by key only.
#[derive(Debug, Clone)]
struct Entry<T> {
    key: PriorityKey,
    item: T,
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<T> Eq for Entry<T> {}

#[derive(Debug, Clone)]
enum Retained<T> {
    Filling(Vec<Entry<T>>),
    Full(BinaryHeap<Entry<T>>),
}

/// A bounded weighted reservoir (Efraimidis–Spirakis with exponential keys).
///
/// Holds at most `capacity` elements. After every element of a sequence has
/// been pushed, [`into_result`](Self::into_result) is a weighted sample
/// without replacement of that sequence.
///
/// Weights are not validated; see [`Weighted`].
#[derive(Debug, Clone)]
pub struct SampleHeap<T> {
    capacity: usize,
    seen: usize,
    retained: Retained<T>,
}

impl<T: Weighted> SampleHeap<T> {
    /// Create a heap that retains at most `capacity` elements.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            seen: 0,
            retained: Retained::Filling(Vec::with_capacity(capacity)),
        }
    }

    /// Push an element, drawing its key from the thread-local RNG.
    #[inline]
    pub fn push(&mut self, item: T) {
        let mut rng = rand::rng();
        self.push_with_rng(item, &mut rng);
    }

    /// Push an element, using a caller-supplied RNG for its key.
    ///
    /// If `capacity == 0`, this discards all elements.
    pub fn push_with_rng<R: Rng + ?Sized>(&mut self, item: T, rng: &mut R) {
        self.seen += 1;

        if self.capacity == 0 {
            return;
        }

        let exp: f64 = Exp1.sample(rng);
        let key = PriorityKey(exp / item.weight());

        match &mut self.retained {
            Retained::Filling(entries) => {
                entries.push(Entry { key, item });
                if entries.len() == self.capacity {
                    // BinaryHeap::from heapifies bottom-up in O(k).
                    let heap = BinaryHeap::from(std::mem::take(entries));
                    tracing::trace!(capacity = self.capacity, seen = self.seen, "sample heap full");
                    self.retained = Retained::Full(heap);
                }
            }
            Retained::Full(heap) => {
                if let Some(mut root) = heap.peek_mut() {
                    if key < root.key {
                        // Dropping PeekMut sifts the new root down.
                        *root = Entry { key, item };
                    }
                }
            }
        }
    }

    /// Largest retained key, i.e. the key a new element has to beat once full.
    ///
    /// `None` while empty. While filling, this is a linear scan.
    pub fn max_key(&self) -> Option<f64> {
        match &self.retained {
            Retained::Filling(entries) => entries.iter().map(|e| e.key).max().map(|k| k.0),
            Retained::Full(heap) => heap.peek().map(|e| e.key.0),
        }
    }

    /// Consume the heap and return the retained elements, in arbitrary order.
    pub fn into_result(self) -> Vec<T> {
        match self.retained {
            Retained::Filling(entries) => entries.into_iter().map(|e| e.item).collect(),
            Retained::Full(heap) => heap.into_vec().into_iter().map(|e| e.item).collect(),
        }
    }
}

impl<T> SampleHeap<T> {
    /// Maximum number of retained elements.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of elements currently retained (≤ capacity).
    pub fn len(&self) -> usize {
        match &self.retained {
            Retained::Filling(entries) => entries.len(),
            Retained::Full(heap) => heap.len(),
        }
    }

    /// True if nothing is retained.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True once `capacity` elements have been pushed (and `capacity > 0`).
    pub fn is_full(&self) -> bool {
        matches!(self.retained, Retained::Full(_))
    }

    /// Number of elements pushed so far.
    pub fn seen(&self) -> usize {
        self.seen
    }
}
