// Streams a synthetic dataset through the loader and prints merged statistics.
//
// Run with `RUST_LOG=debug cargo run --example running_statistics`.

use featurestats_core::{
    reduce_batch_count_l_moments, reduce_batch_count_mean_and_var,
    reduce_batch_minus_min_and_max, StatsError,
};
use featurestats_data::{analyze, collate_f64_rows, DataLoader, RandomSampler, VecDataset};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn loader(rows: &[Vec<f64>], seed: u64) -> DataLoader<VecDataset<Vec<f64>>, RandomSampler, featurestats_core::Batch> {
    DataLoader::new(
        VecDataset::new(rows.to_vec()),
        16,
        RandomSampler::new().with_seed(seed),
        false,
        Box::new(collate_f64_rows),
    )
}

fn main() -> Result<(), StatsError> {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(7);
    let rows: Vec<Vec<f64>> = (0..250)
        .map(|_| vec![rng.gen_range(0.0..10.0), rng.gen_range(-1.0..1.0)])
        .collect();

    if let Some(m) = analyze(loader(&rows, 1), |b| {
        reduce_batch_count_mean_and_var::<f64>(b, false)
    })? {
        println!("count: {:?}", m.count);
        println!("mean:  {:?}", m.mean);
        println!("var:   {:?}", m.var);
    }

    if let Some(mm) = analyze(loader(&rows, 2), |b| {
        reduce_batch_minus_min_and_max::<f64>(b, false)
    })? {
        let min: Vec<f64> = mm.minus_min.iter().map(|v| -v).collect();
        println!("min:   {:?}", min);
        println!("max:   {:?}", mm.max);
    }

    if let Some(l) = analyze(loader(&rows, 3), |b| {
        reduce_batch_count_l_moments::<f64>(b, false)
    })? {
        for (k, moments) in l.moments.iter().enumerate() {
            println!("l{}:    {:?}", k + 1, moments);
        }
    }
    Ok(())
}
