//! Pure arithmetic helpers for the puzzle rules.
//!
//! Everything here is free of game state: inclusive ranges, summation, and
//! the subset-sum machinery that keeps every drawn star target solvable
//! from the tiles still on the board.

use std::collections::BTreeSet;

use super::error::GameError;
use super::rng::GameRng;

/// How many random subset draws to attempt before falling back to a
/// direct pick from the enumerated achievable sums.
const MAX_DRAW_ATTEMPTS: usize = 32;

/// The ordered sequence of integers in `[min, max]` inclusive.
///
/// Returns an empty vec when `min > max`.
#[must_use]
pub fn range(min: u8, max: u8) -> Vec<u8> {
    (min..=max).collect()
}

/// Arithmetic sum of a sequence of tile values. Sum of nothing is 0.
pub fn sum<I>(numbers: I) -> u32
where
    I: IntoIterator<Item = u8>,
{
    numbers.into_iter().map(u32::from).sum()
}

/// All sums achievable by a non-empty subset of `numbers`.
///
/// Built incrementally (one element at a time), so the cost is bounded by
/// the number of distinct sums rather than 2^n subsets. Pools here are at
/// most 9 tiles, so this is tiny either way.
#[must_use]
pub fn subset_sums(numbers: &[u8]) -> BTreeSet<u32> {
    let mut sums: BTreeSet<u32> = BTreeSet::new();
    for &n in numbers {
        let n = u32::from(n);
        let with_n: Vec<u32> = sums.iter().map(|s| s + n).collect();
        sums.extend(with_n);
        sums.insert(n);
    }
    sums
}

/// Draw a random sum achievable by some non-empty subset of `numbers`,
/// constrained to `1..=max_value`.
///
/// Policy: repeatedly draw a random subset size and a random subset of that
/// size, accepting the first sum inside the bound. After
/// [`MAX_DRAW_ATTEMPTS`] misses, picks uniformly from the enumerated
/// achievable sums instead, so the draw always terminates.
///
/// ## Errors
///
/// - `GameError::InvalidInput` if `numbers` is empty, or if no non-empty
///   subset sums to a value within `1..=max_value`.
pub fn random_sum_target_from(
    numbers: &[u8],
    max_value: u8,
    rng: &mut GameRng,
) -> Result<u8, GameError> {
    if numbers.is_empty() {
        return Err(GameError::InvalidInput("empty tile pool"));
    }

    let bound = u32::from(max_value);
    let mut scratch = numbers.to_vec();

    for _ in 0..MAX_DRAW_ATTEMPTS {
        let size = rng.gen_range_usize(1..scratch.len() + 1);
        rng.shuffle(&mut scratch);
        let drawn = sum(scratch[..size].iter().copied());
        if (1..=bound).contains(&drawn) {
            return Ok(drawn as u8);
        }
    }

    // Rejection sampling missed; pick directly from the achievable sums.
    let achievable: Vec<u32> = subset_sums(numbers)
        .into_iter()
        .filter(|&s| s <= bound)
        .collect();

    match rng.choose(&achievable) {
        Some(&s) => Ok(s as u8),
        None => Err(GameError::InvalidInput("no subset sum within bound")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_one_to_nine() {
        let r = range(1, 9);
        assert_eq!(r.len(), 9);
        assert_eq!(r, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert!(r.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_range_empty_when_inverted() {
        assert!(range(5, 4).is_empty());
    }

    #[test]
    fn test_sum() {
        assert_eq!(sum(range(1, 9)), 45);
        assert_eq!(sum(Vec::new()), 0);
        assert_eq!(sum(vec![4]), 4);
    }

    #[test]
    fn test_subset_sums_small_pool() {
        let sums = subset_sums(&[2, 3]);
        let expected: BTreeSet<u32> = [2, 3, 5].into_iter().collect();
        assert_eq!(sums, expected);
    }

    #[test]
    fn test_subset_sums_full_board() {
        let sums = subset_sums(&range(1, 9));
        // Every value 1..=45 is achievable from {1..9}.
        assert_eq!(sums.len(), 45);
        assert_eq!(sums.first(), Some(&1));
        assert_eq!(sums.last(), Some(&45));
    }

    #[test]
    fn test_subset_sums_empty() {
        assert!(subset_sums(&[]).is_empty());
    }

    #[test]
    fn test_target_is_achievable_and_bounded() {
        let mut rng = GameRng::new(42);
        let pool = [1, 4, 6, 7, 8, 9];
        let sums = subset_sums(&pool);

        for _ in 0..100 {
            let target = random_sum_target_from(&pool, 9, &mut rng).unwrap();
            assert!((1..=9).contains(&target));
            assert!(sums.contains(&u32::from(target)));
        }
    }

    #[test]
    fn test_target_from_pool_above_bound() {
        // Rejection sampling rarely hits; the fallback must still succeed.
        let mut rng = GameRng::new(7);
        for _ in 0..50 {
            let target = random_sum_target_from(&[8, 9], 9, &mut rng).unwrap();
            assert!(target == 8 || target == 9);
        }
    }

    #[test]
    fn test_target_from_empty_pool_errs() {
        let mut rng = GameRng::new(1);
        assert_eq!(
            random_sum_target_from(&[], 9, &mut rng),
            Err(GameError::InvalidInput("empty tile pool"))
        );
    }

    #[test]
    fn test_target_unreachable_bound_errs() {
        let mut rng = GameRng::new(1);
        let result = random_sum_target_from(&[7, 8], 5, &mut rng);
        assert!(matches!(result, Err(GameError::InvalidInput(_))));
    }

    #[test]
    fn test_target_deterministic_per_seed() {
        let pool = [1, 2, 3, 4, 5];
        let mut rng1 = GameRng::new(99);
        let mut rng2 = GameRng::new(99);

        for _ in 0..20 {
            assert_eq!(
                random_sum_target_from(&pool, 9, &mut rng1),
                random_sum_target_from(&pool, 9, &mut rng2)
            );
        }
    }
}
