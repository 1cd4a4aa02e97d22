mod common;

use approx::assert_relative_eq;
use common::{init_logger, normal_rows};
use featurestats_core::{
    reduce_batch_count_mean_and_var, reduce_batch_count_mean_and_var_per_key,
    reduce_batch_minus_min_and_max, Batch, MeanAndVar, StatsError, VocabKey,
};
use featurestats_data::{
    analyze, collate_f64_rows, collate_keyed_rows, Accumulator, DataLoader, RandomSampler,
    SequentialSampler, VecDataset,
};

fn single_batch_moments(rows: &[Vec<f64>]) -> Result<MeanAndVar<f64>, StatsError> {
    let batch = collate_f64_rows(rows.to_vec())?;
    reduce_batch_count_mean_and_var::<f64>(&batch, false)
}

#[test]
fn test_moments_do_not_depend_on_batching_or_order() -> Result<(), StatsError> {
    init_logger();
    let rows = normal_rows(1, 200, 3, 5.0, 2.0);
    let expected = single_batch_moments(&rows)?;
    for (seed, batch_size) in [(0u64, 1usize), (1, 7), (2, 32), (3, 200), (4, 500)] {
        let loader = DataLoader::new(
            VecDataset::new(rows.clone()),
            batch_size,
            RandomSampler::new().with_seed(seed),
            false,
            Box::new(collate_f64_rows),
        );
        let merged = analyze(loader, |b: &Batch| {
            reduce_batch_count_mean_and_var::<f64>(b, false)
        })?
        .expect("non-empty dataset");
        assert_eq!(merged.count, expected.count);
        for i in 0..3 {
            assert_relative_eq!(merged.mean[i], expected.mean[i], epsilon = 1e-9);
            assert_relative_eq!(merged.var[i], expected.var[i], epsilon = 1e-9);
        }
    }
    Ok(())
}

#[test]
fn test_min_max_over_shuffled_batches() -> Result<(), StatsError> {
    let rows = normal_rows(2, 64, 2, 0.0, 10.0);
    let expected = reduce_batch_minus_min_and_max::<f64>(&collate_f64_rows(rows.clone())?, false)?;
    let loader = DataLoader::new(
        VecDataset::new(rows),
        5,
        RandomSampler::new().with_seed(9),
        false,
        Box::new(collate_f64_rows),
    );
    let merged = analyze(loader, |b| reduce_batch_minus_min_and_max::<f64>(b, false))?
        .expect("non-empty dataset");
    assert_eq!(merged.minus_min, expected.minus_min);
    assert_eq!(merged.max, expected.max);
    Ok(())
}

#[test]
fn test_parallel_accumulators_merge() -> Result<(), StatsError> {
    init_logger();
    let rows = normal_rows(3, 90, 1, -3.0, 1.0);
    let expected = single_batch_moments(&rows)?;

    // Two workers, each fed a disjoint half of the data.
    let mut workers = Vec::new();
    for half in rows.chunks(45) {
        let loader = DataLoader::new(
            VecDataset::new(half.to_vec()),
            8,
            SequentialSampler,
            false,
            Box::new(collate_f64_rows),
        );
        let mut acc = Accumulator::new();
        for batch in loader {
            acc.add(reduce_batch_count_mean_and_var::<f64>(&batch?, false)?)?;
        }
        workers.push(acc);
    }
    let left = workers.pop().expect("two workers");
    let mut merged = workers.pop().expect("two workers");
    merged.merge(left)?;
    assert_eq!(merged.num_partials(), 12);
    let merged = merged.finish().expect("non-empty");
    assert_eq!(merged.count, expected.count);
    assert_relative_eq!(merged.mean[0], expected.mean[0], epsilon = 1e-9);
    assert_relative_eq!(merged.var[0], expected.var[0], epsilon = 1e-9);
    Ok(())
}

#[test]
fn test_per_key_moments_through_loader() -> Result<(), StatsError> {
    init_logger();
    let records: Vec<(String, Vec<f64>)> = vec![
        ("a".to_string(), vec![1.0]),
        ("b".to_string(), vec![10.0]),
        ("a".to_string(), vec![2.0]),
        ("a".to_string(), vec![3.0]),
        ("b".to_string(), vec![20.0]),
    ];
    let loader = DataLoader::new(
        VecDataset::new(records),
        2,
        SequentialSampler,
        false,
        Box::new(collate_keyed_rows),
    );
    let per_key = analyze(loader, |(keys, values): &(Batch, Batch)| {
        reduce_batch_count_mean_and_var_per_key::<f64>(values, keys, true)
    })?
    .expect("non-empty dataset");
    assert_eq!(per_key.len(), 2);
    let a = per_key.get(&VocabKey::from("a")).expect("key a");
    assert_eq!(a.count, vec![3]);
    assert_relative_eq!(a.mean[0], 2.0, epsilon = 1e-12);
    assert_relative_eq!(a.var[0], 2.0 / 3.0, epsilon = 1e-12);
    let b = per_key.get(&VocabKey::from("b")).expect("key b");
    assert_relative_eq!(b.mean[0], 15.0, epsilon = 1e-12);
    assert_relative_eq!(b.var[0], 25.0, epsilon = 1e-12);
    Ok(())
}
