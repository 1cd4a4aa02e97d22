use featurestats_core::tensor::Tensor;
use featurestats_core::Batch;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

// Each integration test binary pulls in a different subset of these helpers.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[allow(dead_code)]
pub fn dense_f64(data: Vec<f64>, shape: Vec<usize>) -> Batch {
    Batch::from(Tensor::new_f64(data, shape).expect("Test tensor creation failed"))
}

#[allow(dead_code)]
pub fn dense_i64(data: Vec<i64>, shape: Vec<usize>) -> Batch {
    Batch::from(Tensor::new_i64(data, shape).expect("Test tensor creation failed"))
}

/// `n` draws from `Normal(mean, std)` with a fixed seed.
#[allow(dead_code)]
pub fn normal_samples(seed: u64, n: usize, mean: f64, std: f64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(mean, std).expect("valid normal parameters");
    (0..n).map(|_| normal.sample(&mut rng)).collect()
}

/// Cuts `0..n` into contiguous non-empty ranges at random points.
#[allow(dead_code)]
pub fn random_splits(seed: u64, n: usize, max_parts: usize) -> Vec<std::ops::Range<usize>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let parts = rng.gen_range(1..=max_parts.min(n).max(1));
    let mut cuts: Vec<usize> = (1..n).collect();
    cuts.shuffle(&mut rng);
    let mut cuts: Vec<usize> = cuts.into_iter().take(parts - 1).collect();
    cuts.sort_unstable();
    let mut ranges = Vec::with_capacity(parts);
    let mut start = 0;
    for c in cuts.into_iter().chain(std::iter::once(n)) {
        ranges.push(start..c);
        start = c;
    }
    ranges
}

/// Shuffles `items` with a fixed seed.
#[allow(dead_code)]
pub fn shuffled<T>(mut items: Vec<T>, seed: u64) -> Vec<T> {
    let mut rng = StdRng::seed_from_u64(seed);
    items.shuffle(&mut rng);
    items
}
