use log::trace;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Produces the synthetic input arrays for a benchmark run. The random source
/// is seeded once at construction and advances with every draw; it is never
/// reset between calls.
pub(crate) struct ArrayGenerator {
    max_size: usize,
    range: i32,
    rng: StdRng,
}

impl ArrayGenerator {
    pub(crate) fn new(max_size: usize, range: i32) -> Self {
        Self {
            max_size,
            range,
            rng: StdRng::from_entropy(),
        }
    }

    /// Same as `new`, but with a fixed seed so runs can be reproduced.
    pub(crate) fn with_seed(max_size: usize, range: i32, seed: u64) -> Self {
        Self {
            max_size,
            range,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A full-size array of elements drawn uniformly from `[0, range]`
    /// inclusive.
    pub(crate) fn random(&mut self) -> Vec<i32> {
        trace!("generating {} random elements in [0, {}]", self.max_size, self.range);
        (0..self.max_size)
            .map(|_| self.rng.gen_range(0..=self.range))
            .collect()
    }

    /// The descending sequence `[max_size, max_size-1, .., 1]`.
    pub(crate) fn reversed(&self) -> Vec<i32> {
        (1..=self.max_size as i32).rev().collect()
    }

    /// The ascending sequence `[1..=max_size]` with `swaps` random index-pair
    /// transpositions applied. A drawn pair may coincide, in which case the
    /// swap is a no-op.
    pub(crate) fn nearly_sorted(&mut self, swaps: usize) -> Vec<i32> {
        let mut arr: Vec<i32> = (1..=self.max_size as i32).collect();
        if self.max_size == 0 {
            return arr;
        }
        for _ in 0..swaps {
            let a = self.rng.gen_range(0..self.max_size);
            let b = self.rng.gen_range(0..self.max_size);
            arr.swap(a, b);
        }
        arr
    }
}

#[test]
fn test_lengths() {
    let mut generator = ArrayGenerator::with_seed(1000, 6000, 1);
    assert_eq!(generator.random().len(), 1000);
    assert_eq!(generator.reversed().len(), 1000);
    assert_eq!(generator.nearly_sorted(10).len(), 1000);
}

#[test]
fn test_random_within_range() {
    let mut generator = ArrayGenerator::with_seed(5000, 50, 7);
    assert!(generator.random().iter().all(|&x| (0..=50).contains(&x)));
}

#[test]
fn test_reversed_is_descending_permutation() {
    let generator = ArrayGenerator::with_seed(100, 6000, 1);
    let arr = generator.reversed();
    assert!(arr.windows(2).all(|w| w[0] > w[1]));

    let mut sorted = arr.clone();
    sorted.sort();
    assert_eq!(sorted, (1..=100).collect::<Vec<_>>());
}

#[test]
fn test_reversed_small() {
    let generator = ArrayGenerator::with_seed(5, 6000, 1);
    assert_eq!(generator.reversed(), vec![5, 4, 3, 2, 1]);
}

#[test]
fn test_nearly_sorted_zero_swaps_is_identity() {
    let mut generator = ArrayGenerator::with_seed(50, 6000, 1);
    assert_eq!(generator.nearly_sorted(0), (1..=50).collect::<Vec<_>>());
}

#[test]
fn test_nearly_sorted_is_permutation() {
    let mut generator = ArrayGenerator::with_seed(200, 6000, 99);
    let mut arr = generator.nearly_sorted(10);
    arr.sort();
    assert_eq!(arr, (1..=200).collect::<Vec<_>>());
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let mut g1 = ArrayGenerator::with_seed(500, 6000, 42);
    let mut g2 = ArrayGenerator::with_seed(500, 6000, 42);
    assert_eq!(g1.random(), g2.random());
    assert_eq!(g1.nearly_sorted(10), g2.nearly_sorted(10));
}

#[test]
fn test_empty_generator() {
    let mut generator = ArrayGenerator::with_seed(0, 6000, 1);
    assert!(generator.random().is_empty());
    assert!(generator.reversed().is_empty());
    assert!(generator.nearly_sorted(10).is_empty());
}
