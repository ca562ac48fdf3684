//! Uniform and weighted selection from finite sets.

use serde::{Deserialize, Serialize};

use crate::error::GenError;
use crate::source::RandomSource;

/// A candidate value paired with a positive selection weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weighted<T> {
    /// Candidate value
    pub value: T,
    /// Relative selection weight, must be positive and finite
    pub weight: f64,
}

impl<T> Weighted<T> {
    /// Create a weighted option.
    pub fn new(value: T, weight: f64) -> Self {
        Self { value, weight }
    }
}

/// Pick one element uniformly.
pub fn pick<'a, R: RandomSource, T>(rng: &mut R, options: &'a [T]) -> Result<&'a T, GenError> {
    if options.is_empty() {
        return Err(GenError::EmptyInput);
    }
    let index = rng.next_below(options.len() as u64) as usize;
    Ok(&options[index])
}

/// Pick one element with probability proportional to its weight.
///
/// Draws a target in `[0, total_weight)` and scans the cumulative prefix
/// sums; the first option whose cumulative weight strictly exceeds the
/// target wins, so boundary ties go to the lower index.
pub fn pick_weighted<'a, R: RandomSource, T>(
    rng: &mut R,
    options: &'a [Weighted<T>],
) -> Result<&'a T, GenError> {
    if options.is_empty() {
        return Err(GenError::EmptyInput);
    }

    let mut total = 0.0;
    for option in options {
        if !option.weight.is_finite() || option.weight <= 0.0 {
            return Err(GenError::InvalidWeight(option.weight));
        }
        total += option.weight;
    }

    let target = rng.next_f64() * total;
    let mut cumulative = 0.0;
    for option in options {
        cumulative += option.weight;
        if cumulative > target {
            return Ok(&option.value);
        }
    }
    // Accumulation error can leave the final boundary unreached.
    Ok(&options[options.len() - 1].value)
}

/// Pick `count` elements, optionally with replacement.
///
/// Without replacement the selection is an O(count) partial Fisher-Yates
/// shuffle: each step swaps a uniformly chosen remaining candidate to the
/// front and shrinks the pool, so every subset is equally likely.
pub fn pick_set<R: RandomSource, T: Clone>(
    rng: &mut R,
    options: &[T],
    count: usize,
    allow_duplicates: bool,
) -> Result<Vec<T>, GenError> {
    if options.is_empty() {
        return Err(GenError::EmptyInput);
    }
    if count == 0 {
        return Ok(Vec::new());
    }

    if allow_duplicates {
        let mut picked = Vec::with_capacity(count);
        for _ in 0..count {
            picked.push(pick(rng, options)?.clone());
        }
        return Ok(picked);
    }

    if count > options.len() {
        return Err(GenError::InvalidCount {
            requested: count,
            available: options.len(),
        });
    }

    let mut pool = options.to_vec();
    for i in 0..count {
        let j = i + rng.next_below((pool.len() - i) as u64) as usize;
        pool.swap(i, j);
    }
    pool.truncate(count);
    Ok(pool)
}

/// Shuffle a slice in place with a full Fisher-Yates pass.
pub fn shuffle<R: RandomSource, T>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.next_below(i as u64 + 1) as usize;
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ChaChaSource;
    use std::collections::HashSet;

    #[test]
    fn test_pick_empty() {
        let mut rng = ChaChaSource::from_seed(42);
        let options: Vec<u32> = vec![];
        assert_eq!(pick(&mut rng, &options), Err(GenError::EmptyInput));
    }

    #[test]
    fn test_pick_covers_all_options() {
        let mut rng = ChaChaSource::from_seed(42);
        let options = ["a", "b", "c"];

        let mut seen = HashSet::new();
        for _ in 0..100 {
            seen.insert(*pick(&mut rng, &options).unwrap());
        }
        assert_eq!(seen.len(), options.len());
    }

    #[test]
    fn test_pick_weighted_single_option() {
        let mut rng = ChaChaSource::from_seed(42);
        let options = [Weighted::new("only", 0.5)];
        for _ in 0..10 {
            assert_eq!(*pick_weighted(&mut rng, &options).unwrap(), "only");
        }
    }

    #[test]
    fn test_pick_weighted_rejects_zero_weight() {
        let mut rng = ChaChaSource::from_seed(42);
        let options = [Weighted::new("a", 1.0), Weighted::new("b", 0.0)];
        assert_eq!(
            pick_weighted(&mut rng, &options),
            Err(GenError::InvalidWeight(0.0))
        );
    }

    #[test]
    fn test_pick_weighted_rejects_negative_weight() {
        let mut rng = ChaChaSource::from_seed(42);
        let options = [Weighted::new("a", -1.0)];
        assert_eq!(
            pick_weighted(&mut rng, &options),
            Err(GenError::InvalidWeight(-1.0))
        );
    }

    #[test]
    fn test_pick_weighted_empty() {
        let mut rng = ChaChaSource::from_seed(42);
        let options: Vec<Weighted<u32>> = vec![];
        assert_eq!(pick_weighted(&mut rng, &options), Err(GenError::EmptyInput));
    }

    #[test]
    fn test_pick_set_distinct() {
        let mut rng = ChaChaSource::from_seed(42);
        let options = [1, 2, 3, 4, 5, 6, 7, 8];

        for _ in 0..100 {
            let picked = pick_set(&mut rng, &options, 4, false).unwrap();
            assert_eq!(picked.len(), 4);
            let unique: HashSet<i32> = picked.iter().copied().collect();
            assert_eq!(unique.len(), 4);
            assert!(picked.iter().all(|value| options.contains(value)));
        }
    }

    #[test]
    fn test_pick_set_full_population_is_permutation() {
        let mut rng = ChaChaSource::from_seed(42);
        let options = [1, 2, 3, 4, 5];

        let mut picked = pick_set(&mut rng, &options, 5, false).unwrap();
        picked.sort_unstable();
        assert_eq!(picked, options);
    }

    #[test]
    fn test_pick_set_count_exceeds_population() {
        let mut rng = ChaChaSource::from_seed(42);
        let options = [1, 2, 3];
        assert_eq!(
            pick_set(&mut rng, &options, 4, false),
            Err(GenError::InvalidCount {
                requested: 4,
                available: 3,
            })
        );
    }

    #[test]
    fn test_pick_set_with_duplicates_exceeds_population() {
        let mut rng = ChaChaSource::from_seed(42);
        let options = [1, 2];
        let picked = pick_set(&mut rng, &options, 10, true).unwrap();
        assert_eq!(picked.len(), 10);
        assert!(picked.iter().all(|value| options.contains(value)));
    }

    #[test]
    fn test_pick_set_empty_pool() {
        let mut rng = ChaChaSource::from_seed(42);
        let options: Vec<u32> = vec![];
        assert_eq!(
            pick_set(&mut rng, &options, 0, false),
            Err(GenError::EmptyInput)
        );
    }

    #[test]
    fn test_shuffle_preserves_elements() {
        let mut rng = ChaChaSource::from_seed(42);
        let mut items = vec![1, 2, 3, 4, 5, 6];
        shuffle(&mut rng, &mut items);

        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_deterministic_generation() {
        let options = ["a", "b", "c", "d", "e"];

        let mut rng1 = ChaChaSource::from_seed(42);
        let mut rng2 = ChaChaSource::from_seed(42);

        for _ in 0..100 {
            assert_eq!(
                pick(&mut rng1, &options).unwrap(),
                pick(&mut rng2, &options).unwrap()
            );
        }
    }
}
