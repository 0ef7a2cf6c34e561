//! Repeatable random inputs for tests.
use rand::distr::StandardUniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SEED: [u8; 32] = [
    3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5, 8, 9, 7, 9, 3, 2, 3, 8, 4, 6, 2, 6, 4, 3, 3, 8, 3, 2, 7, 9,
    5,
];

pub fn rng_fixed_seed() -> StdRng {
    StdRng::from_seed(SEED)
}

/// `n` samples of the standard uniform distribution
pub fn randn<T>(rng: &mut StdRng, n: usize) -> Vec<T>
where
    StandardUniform: rand::distr::Distribution<T>,
{
    std::iter::repeat_with(|| rng.random::<T>())
        .take(n)
        .collect()
}

/// `n` speeds drawn uniformly from `[lo, hi)`, in m/s
pub fn speeds(rng: &mut StdRng, n: usize, lo: f64, hi: f64) -> Vec<f64> {
    std::iter::repeat_with(|| rng.random_range(lo..hi))
        .take(n)
        .collect()
}
