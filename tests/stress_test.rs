//! Stress and property tests for the gift exchange engine.
//!
//! These tests verify:
//! 1. Every valid partition produces a valid assignment
//! 2. The conflict resolver never runs out of prior givers on valid input
//! 3. Determinism is preserved for a fixed seed
//!
//! ## Running Stress Tests
//!
//! ```bash
//! cargo test --release --test stress_test -- --nocapture
//! ```

use std::collections::BTreeSet;
use std::time::Instant;

use family_gift_exchange::types::{universe, UnitIndex};
use family_gift_exchange::validation::{
    check_complete, check_no_intra_unit_gifts, check_no_self_gifts, check_unique_receivers,
};
use family_gift_exchange::{
    generate, validate, Assignment, ExchangeConfig, ExchangeError, FamilyUnit, GiftExchange,
};

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// ============================================================================
// TEST CONSTANTS
// ============================================================================

/// Number of random partitions in the property test
const RANDOM_PARTITIONS: u64 = 2_000;

/// Largest population used for random partitions
const MAX_POPULATION: usize = 40;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Generate a random valid partition: at least two units, none larger than
/// half the population. Ids are shuffled so units are not contiguous ranges.
fn random_partition(rng: &mut ChaCha8Rng) -> Vec<FamilyUnit> {
    let population = rng.gen_range(2..=MAX_POPULATION);
    let mut ids: Vec<u64> = (0..population as u64).map(|i| i * 3 + 1).collect();
    ids.shuffle(rng);

    let max_unit = population / 2;
    let mut units = Vec::new();
    let mut rest = ids.as_slice();
    while !rest.is_empty() {
        let size = rng.gen_range(1..=max_unit.min(rest.len()));
        let (unit, tail) = rest.split_at(size);
        units.push(unit.to_vec());
        rest = tail;
    }
    units
}

/// Check every invariant independently of the crate's own validator.
fn assert_derangement(assignment: &Assignment, units: &[FamilyUnit]) {
    let members: BTreeSet<u64> = universe(units).into_iter().collect();
    let index = UnitIndex::new(units);

    let givers: BTreeSet<u64> = assignment.givers().collect();
    let receivers: BTreeSet<u64> = assignment.receivers().collect();

    assert_eq!(givers, members, "every member gives");
    assert_eq!(receivers, members, "every member receives");
    assert_eq!(assignment.len(), members.len(), "no receiver is shared");

    for (giver, receiver) in assignment.iter() {
        assert_ne!(giver, receiver, "{giver} gifts themselves");
        assert!(
            !index.same_unit(giver, receiver),
            "{giver} gifts {receiver} in their own unit"
        );
    }
}

// ============================================================================
// SCENARIOS
// ============================================================================

#[test]
fn two_families_of_three() {
    let units = vec![vec![0, 1, 2], vec![3, 4, 5]];
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    let assignment = generate(&units, &mut rng).unwrap();

    assert_derangement(&assignment, &units);
    for (giver, receiver) in assignment.iter() {
        assert_ne!(giver < 3, receiver < 3);
    }
}

#[test]
fn single_family_is_rejected() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    assert_eq!(
        generate(&[vec![0, 1]], &mut rng),
        Err(ExchangeError::TooFewUnits { found: 1 })
    );
}

#[test]
fn family_of_four_in_five_is_rejected() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    assert_eq!(
        generate(&[vec![0, 1, 2, 3], vec![4]], &mut rng),
        Err(ExchangeError::UnitTooLarge { unit: 0, size: 4, total: 5 })
    );
}

#[test]
fn two_singletons_have_one_answer() {
    for seed in 0..20 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let assignment = generate(&[vec![0], vec![1]], &mut rng).unwrap();

        let expected: Assignment = [(0, 1), (1, 0)].into_iter().collect();
        assert_eq!(assignment, expected);
    }
}

#[test]
fn input_errors_are_not_internal() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let cases: Vec<Vec<FamilyUnit>> = vec![
        vec![],
        vec![vec![0], vec![]],
        vec![vec![0, 0], vec![1]],
        vec![vec![0, 1], vec![1, 2]],
        vec![vec![0, 1, 2], vec![3]],
    ];

    for units in cases {
        let err = generate(&units, &mut rng).unwrap_err();
        assert!(err.is_input_error(), "{err}");
        assert!(!err.is_internal(), "{err}");
    }
}

// ============================================================================
// EXTERNAL MAPPINGS
// ============================================================================

#[test]
fn validator_checks_work_on_hand_built_mappings() {
    let units = vec![vec![10, 11], vec![20, 21]];

    let good: Assignment = [(10, 20), (11, 21), (20, 11), (21, 10)].into_iter().collect();
    assert_eq!(validate(&good, &units), Ok(()));

    let missing: Assignment = [(10, 20), (11, 21), (20, 11)].into_iter().collect();
    assert_eq!(
        check_complete(&missing, &units),
        Err(ExchangeError::NullGiverOrReceiver { member: 21 })
    );

    let selfish: Assignment = [(10, 10)].into_iter().collect();
    assert_eq!(check_no_self_gifts(&selfish), Err(ExchangeError::SelfGift { member: 10 }));

    let shared: Assignment = [(10, 20), (11, 20)].into_iter().collect();
    assert!(matches!(
        check_unique_receivers(&shared),
        Err(ExchangeError::DuplicateReceiver { receiver: 20, .. })
    ));

    let siblings: Assignment = [(20, 21)].into_iter().collect();
    assert_eq!(
        check_no_intra_unit_gifts(&siblings, &units),
        Err(ExchangeError::IntraUnitGift { giver: 20, receiver: 21, unit: 1 })
    );
}

// ============================================================================
// STRESS TESTS
// ============================================================================

/// Singleton families of growing size, as in a plain office exchange.
#[test]
fn stress_growing_singletons() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for population in 2..=200u64 {
        let units: Vec<FamilyUnit> = (0..population).map(|id| vec![id]).collect();
        let assignment = generate(&units, &mut rng).unwrap();

        assert_derangement(&assignment, &units);
        assert_eq!(assignment.len(), population as usize);
    }
}

/// One family grows up to half the population, placed first and last.
#[test]
fn stress_units_up_to_half() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);

    for population in 2..=60u64 {
        for big in 1..=population / 2 {
            let big_unit: FamilyUnit = (0..big).collect();
            let others: Vec<FamilyUnit> = (big..population).map(|id| vec![id]).collect();

            let mut first = vec![big_unit.clone()];
            first.extend(others.iter().cloned());
            let mut last = others;
            last.push(big_unit);

            for units in [first, last] {
                let assignment = generate(&units, &mut rng).unwrap();
                assert_derangement(&assignment, &units);
            }
        }
    }
}

/// Random valid partitions never hit the internal failure.
#[test]
fn stress_random_partitions() {
    println!("\n=== RANDOM PARTITIONS ===\n");

    let mut partition_rng = ChaCha8Rng::seed_from_u64(2024);
    let exchange = GiftExchange::new(ExchangeConfig::default().with_verify_partial(true));

    let start = Instant::now();
    let mut members_total = 0usize;

    for seed in 0..RANDOM_PARTITIONS {
        let units = random_partition(&mut partition_rng);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        match exchange.generate(&units, &mut rng) {
            Ok(assignment) => {
                assert_derangement(&assignment, &units);
                members_total += assignment.len();
            }
            Err(err) => panic!("seed {seed}, units {units:?}: {err}"),
        }
    }

    println!("  Partitions:        {:>12}", RANDOM_PARTITIONS);
    println!("  Members assigned:  {:>12}", members_total);
    println!("  Elapsed time:      {:>12.2?}", start.elapsed());
}

/// Same partition and seed, same assignment; different seeds diverge.
#[test]
fn verify_determinism() {
    let units: Vec<FamilyUnit> = (0..30u64).collect::<Vec<_>>().chunks(3).map(<[u64]>::to_vec).collect();

    let run = |seed: u64| generate(&units, &mut ChaCha8Rng::seed_from_u64(seed)).unwrap();

    assert_eq!(run(12345), run(12345), "same seed must give the same assignment");

    let distinct: BTreeSet<Vec<(u64, u64)>> =
        (0..10).map(|seed| run(seed).iter().collect()).collect();
    assert!(distinct.len() > 1, "different seeds should give different assignments");
}
