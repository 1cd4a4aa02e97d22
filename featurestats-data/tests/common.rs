use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// `n` rows of `width` draws from `Normal(mean, std)`, with a fixed seed.
#[allow(dead_code)]
pub fn normal_rows(seed: u64, n: usize, width: usize, mean: f64, std: f64) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(mean, std).expect("valid normal parameters");
    (0..n)
        .map(|_| (0..width).map(|_| normal.sample(&mut rng)).collect())
        .collect()
}
