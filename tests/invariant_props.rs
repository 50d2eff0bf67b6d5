//! Property tests for the arithmetic helpers and the round invariants.

use proptest::prelude::*;

use star_match::core::math::{random_sum_target_from, subset_sums, sum};
use star_match::core::GameRng;
use star_match::{Intent, RoundStatus, Session, TileStatus};

/// Brute-force enumeration of all non-empty subset sums, independent of
/// the incremental implementation under test.
fn brute_force_sums(pool: &[u8]) -> Vec<u32> {
    let mut sums = Vec::new();
    for mask in 1u32..(1 << pool.len()) {
        let s = pool
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, &t)| u32::from(t))
            .sum();
        if !sums.contains(&s) {
            sums.push(s);
        }
    }
    sums
}

proptest! {
    #[test]
    fn subset_sums_matches_brute_force(
        pool in proptest::sample::subsequence(vec![1u8, 2, 3, 4, 5, 6, 7, 8, 9], 0..=9),
    ) {
        let incremental: Vec<u32> = subset_sums(&pool).into_iter().collect();
        let mut brute = brute_force_sums(&pool);
        brute.sort_unstable();
        prop_assert_eq!(incremental, brute);
    }

    #[test]
    fn drawn_target_is_bounded_and_achievable(
        pool in proptest::sample::subsequence(vec![1u8, 2, 3, 4, 5, 6, 7, 8, 9], 1..=9),
        seed in any::<u64>(),
    ) {
        let mut rng = GameRng::new(seed);
        // Pools drawn from 1..=9 always contain a singleton <= 9.
        let target = random_sum_target_from(&pool, 9, &mut rng).unwrap();

        prop_assert!((1..=9).contains(&target));
        prop_assert!(brute_force_sums(&pool).contains(&u32::from(target)));
    }

    #[test]
    fn sum_agrees_with_manual_fold(values in proptest::collection::vec(0u8..=9, 0..20)) {
        let expected: u32 = values.iter().map(|&v| u32::from(v)).sum();
        prop_assert_eq!(sum(values), expected);
    }

    #[test]
    fn click_sequences_preserve_round_invariants(
        seed in any::<u64>(),
        clicks in proptest::collection::vec(1u8..=9, 0..40),
    ) {
        let mut session = Session::new(seed);

        for tile in clicks {
            session.handle(Intent::TileClicked(tile));

            let round = session.round();
            let available: Vec<u8> = round.available_tiles().collect();

            // Candidates stay a subset of available tiles.
            prop_assert!(round.candidates().iter().all(|c| available.contains(c)));

            // Tile statuses are consistent with the owned state.
            for t in 1..=9u8 {
                match round.tile_status(t) {
                    TileStatus::Used => prop_assert!(!available.contains(&t)),
                    TileStatus::Candidate | TileStatus::Wrong => {
                        prop_assert!(round.candidates().contains(&t));
                        prop_assert!(available.contains(&t));
                    }
                    TileStatus::Available => {
                        prop_assert!(available.contains(&t));
                        prop_assert!(!round.candidates().contains(&t));
                    }
                }
            }

            // While the round is active its target stays achievable.
            if round.status() == RoundStatus::Active {
                prop_assert!(
                    brute_force_sums(&available).contains(&u32::from(round.star_target()))
                );
            }
        }
    }

    #[test]
    fn mixed_intents_never_drive_clock_negative(
        seed in any::<u64>(),
        ops in proptest::collection::vec(0u8..=10, 0..60),
    ) {
        let mut session = Session::new(seed);

        for op in ops {
            let intent = match op {
                0 => Intent::SecondTick { round: session.round_id() },
                10 => Intent::NewGameRequested,
                tile => Intent::TileClicked(tile),
            };
            session.handle(intent);

            let round = session.round();
            // Terminal rounds stay frozen; the clock floor is zero.
            if round.status() == RoundStatus::Lost {
                prop_assert_eq!(round.seconds_remaining(), 0);
                prop_assert!(round.available_tiles().count() > 0);
            }
            if round.status() == RoundStatus::Won {
                prop_assert_eq!(round.available_tiles().count(), 0);
            }
        }
    }
}
