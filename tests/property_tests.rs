use std::collections::{HashMap, HashSet};

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use wsample::{choice_with_rng, sample_with_rng, SampleError, SampleHeap, Weighted};

#[derive(Debug, Clone, Copy, PartialEq)]
struct WeightedInt {
    id: u32,
    weight: f64,
}

impl Weighted for WeightedInt {
    fn weight(&self) -> f64 {
        self.weight
    }
}

/// Ids 1..=7 with weight equal to the id.
fn ramp() -> Vec<WeightedInt> {
    (1..8)
        .map(|id| WeightedInt {
            id,
            weight: id as f64,
        })
        .collect()
}

/// Draw `trials` times and check that ordering ids by selection count
/// yields ascending ids.
fn assert_monotone<F>(trials: u64, mut draw: F)
where
    F: FnMut(&[WeightedInt], &mut ChaCha8Rng) -> Vec<u32>,
{
    let input = ramp();
    let mut counts: HashMap<u32, usize> = HashMap::new();
    for t in 0..trials {
        let mut rng = ChaCha8Rng::seed_from_u64(t);
        for id in draw(&input, &mut rng) {
            *counts.entry(id).or_default() += 1;
        }
    }

    let mut by_count: Vec<(u32, usize)> = counts.into_iter().collect();
    by_count.sort_by_key(|&(id, c)| (c, id));
    let ids: Vec<u32> = by_count.iter().map(|&(id, _)| id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted, "counts not monotone in weight: {by_count:?}");
}

// Enough trials that adjacent weights (6 vs 7) separate reliably.
const TRIALS: u64 = 20_000;

#[test]
fn sample_k3_frequency_follows_weight() {
    assert_monotone(TRIALS, |input, rng| {
        sample_with_rng(input, 3, rng)
            .expect("valid k")
            .into_iter()
            .map(|e| e.id)
            .collect()
    });
}

#[test]
fn sample_k1_frequency_follows_weight() {
    assert_monotone(TRIALS, |input, rng| {
        sample_with_rng(input, 1, rng)
            .expect("valid k")
            .into_iter()
            .map(|e| e.id)
            .collect()
    });
}

#[test]
fn choice_frequency_follows_weight() {
    assert_monotone(TRIALS, |input, rng| {
        vec![choice_with_rng(input, rng).expect("non-empty").id]
    });
}

#[test]
fn k1_paths_share_a_distribution() {
    // The fast path and a forced heap path should agree on P(i) = w_i / Σw.
    let input = ramp();
    let total: f64 = input.iter().map(|e| e.weight).sum();
    let trials = 30_000;
    let mut via_choice = [0usize; 8];
    let mut via_heap = [0usize; 8];
    let mut rng = ChaCha8Rng::seed_from_u64(99);

    for _ in 0..trials {
        via_choice[choice_with_rng(&input, &mut rng).expect("non-empty").id as usize] += 1;

        let mut heap = SampleHeap::new(1);
        for e in &input {
            heap.push_with_rng(e, &mut rng);
        }
        via_heap[heap.into_result()[0].id as usize] += 1;
    }

    for e in &input {
        let expected = e.weight / total;
        let pc = via_choice[e.id as usize] as f64 / trials as f64;
        let ph = via_heap[e.id as usize] as f64 / trials as f64;
        assert!((pc - expected).abs() < 0.015, "choice id={}: {pc:.4} vs {expected:.4}", e.id);
        assert!((ph - expected).abs() < 0.015, "heap id={}: {ph:.4} vs {expected:.4}", e.id);
    }
}

#[test]
fn equal_weights_look_uniform() {
    let n = 40;
    let k = 8;
    let trials = 5_000;
    let input: Vec<WeightedInt> = (0..n)
        .map(|id| WeightedInt { id, weight: 3.0 })
        .collect();
    let mut counts = vec![0usize; n as usize];

    for t in 0..trials {
        let mut rng = ChaCha8Rng::seed_from_u64(t);
        for e in sample_with_rng(&input, k, &mut rng).expect("valid k") {
            counts[e.id as usize] += 1;
        }
    }

    let expected = trials as f64 * (k as f64 / n as f64);
    let chi2: f64 = counts
        .iter()
        .map(|&c| {
            let diff = c as f64 - expected;
            (diff * diff) / expected
        })
        .sum();

    // df = 39; conservative cutoff.
    assert!(chi2 < 110.0, "chi2 too large (chi2={chi2:.2}). counts={counts:?}");
}

#[test]
fn boundaries() {
    let input = ramp();
    let empty: Vec<WeightedInt> = Vec::new();
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    assert_eq!(sample_with_rng(&empty, 1, &mut rng), Err(SampleError::EmptyInput));
    assert_eq!(choice_with_rng(&empty, &mut rng), Err(SampleError::EmptyInput));
    assert_eq!(
        sample_with_rng(&input, input.len(), &mut rng),
        Err(SampleError::SampleTooLarge {
            requested: 7,
            available: 7
        })
    );
}

proptest! {
    #[test]
    fn prop_sample_is_k_distinct_members(
        weights in prop::collection::vec(0.01f64..100.0, 2..60),
        k_seed in any::<usize>(),
        seed in any::<u64>(),
    ) {
        let input: Vec<WeightedInt> = weights
            .iter()
            .enumerate()
            .map(|(i, &w)| WeightedInt { id: i as u32, weight: w })
            .collect();
        let k = k_seed % input.len();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let picked = sample_with_rng(&input, k, &mut rng).expect("k < n");

        prop_assert_eq!(picked.len(), k);
        let ids: HashSet<u32> = picked.iter().map(|e| e.id).collect();
        prop_assert_eq!(ids.len(), k);
        prop_assert!(ids.iter().all(|&id| (id as usize) < input.len()));
    }

    #[test]
    fn prop_too_large_is_rejected(
        weights in prop::collection::vec(0.0f64..10.0, 1..30),
        extra in 0usize..5,
    ) {
        let k = weights.len() + extra;
        let res = wsample::sample(&weights, k);
        prop_assert_eq!(
            res,
            Err(SampleError::SampleTooLarge { requested: k, available: weights.len() })
        );
    }

    #[test]
    fn prop_seeded_sample_is_reproducible(
        weights in prop::collection::vec(0.0f64..10.0, 2..40),
        k_seed in any::<usize>(),
        seed in any::<u64>(),
    ) {
        let k = k_seed % weights.len();
        let a = sample_with_rng(&weights, k, &mut ChaCha8Rng::seed_from_u64(seed));
        let b = sample_with_rng(&weights, k, &mut ChaCha8Rng::seed_from_u64(seed));
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_heap_size_invariant(
        k in 0usize..20,
        weights in prop::collection::vec(0.0f64..1000.0, 0..50),
    ) {
        let mut h = SampleHeap::new(k);
        for &w in &weights {
            h.push(w);
            prop_assert!(h.len() <= k);
        }

        let n = weights.len();
        prop_assert_eq!(h.len(), std::cmp::min(n, k));
        prop_assert_eq!(h.is_full(), k > 0 && n >= k);
        prop_assert_eq!(h.seen(), n);
    }

    #[test]
    fn prop_choice_returns_positive_weight_member(
        weights in prop::collection::vec(0.0f64..10.0, 1..40),
        seed in any::<u64>(),
    ) {
        prop_assume!(weights.iter().any(|&w| w > 0.0));
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let picked = choice_with_rng(&weights, &mut rng).expect("non-empty");
        prop_assert!(*picked > 0.0);
    }
}
