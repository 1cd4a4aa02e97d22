use super::*;
use std::collections::HashSet;

#[test]
fn test_random_sampler_is_permutation() {
    let sampler = RandomSampler::new().with_seed(3);
    assert_eq!(sampler.len(10), 10);
    let indices: Vec<usize> = sampler.iter(10).collect();
    assert_eq!(indices.len(), 10);
    let unique: HashSet<usize> = indices.into_iter().collect();
    assert_eq!(unique, (0..10).collect::<HashSet<usize>>());
}

#[test]
fn test_random_sampler_unseeded_is_permutation() {
    let mut indices: Vec<usize> = RandomSampler::new().iter(25).collect();
    indices.sort_unstable();
    assert_eq!(indices, (0..25).collect::<Vec<usize>>());
}

#[test]
fn test_random_sampler_seed_is_reproducible() {
    let sampler = RandomSampler::new().with_seed(42);
    let a: Vec<usize> = sampler.iter(20).collect();
    let b: Vec<usize> = sampler.iter(20).collect();
    assert_eq!(a, b);
}

#[test]
fn test_random_sampler_empty_dataset() {
    assert_eq!(RandomSampler::new().with_seed(1).iter(0).count(), 0);
}
