//! Weighted sampling without replacement vs. a single weighted choice.
//!
//! Samples shards proportionally to their size, then tallies how often each
//! shard lands in a k=3 sample over many seeded runs.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use wsample::{choice_with_rng, sample_with_rng, Weighted};

#[derive(Debug)]
struct Shard {
    name: &'static str,
    rows: u64,
}

impl Weighted for Shard {
    fn weight(&self) -> f64 {
        self.rows as f64
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let shards = [
        Shard { name: "eu-1", rows: 1_000 },
        Shard { name: "eu-2", rows: 4_000 },
        Shard { name: "us-1", rows: 12_000 },
        Shard { name: "us-2", rows: 500 },
        Shard { name: "ap-1", rows: 7_500 },
        Shard { name: "ap-2", rows: 0 },
    ];

    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let pick = sample_with_rng(&shards, 3, &mut rng)?;
    let names: Vec<&str> = pick.iter().map(|s| s.name).collect();
    println!("one k=3 sample:  {names:?}");
    println!("one choice:      {}", choice_with_rng(&shards, &mut rng)?.name);
    println!();

    let runs = 10_000;
    let mut counts = vec![0usize; shards.len()];
    for _ in 0..runs {
        for s in sample_with_rng(&shards, 3, &mut rng)? {
            if let Some(i) = shards.iter().position(|x| std::ptr::eq(x, s)) {
                counts[i] += 1;
            }
        }
    }

    println!("inclusion frequency over {runs} samples of k=3:");
    for (s, c) in shards.iter().zip(&counts) {
        println!("  {:5}  rows={:6}  {:.3}", s.name, s.rows, *c as f64 / runs as f64);
    }

    Ok(())
}
