//! Pair enumeration integration tests
//!
//! Covers the pair-count contract, the fixed enumeration order the
//! reporting layer indexes by, and the accessor bounds discipline.

use cmpy::combinations::{count_combinations, CombinationSet};
use cmpy::types::{Pair, Verdict};

#[test]
fn test_count_matches_closed_form_for_small_n() {
    for n in 0..=100usize {
        assert_eq!(
            count_combinations(n),
            n * n.saturating_sub(1) / 2,
            "pair count diverged at n = {}",
            n
        );
    }
}

#[test]
fn test_count_zero_and_one_elements() {
    assert_eq!(count_combinations(0), 0);
    assert_eq!(count_combinations(1), 0);
}

#[test]
fn test_enumeration_order_is_lexicographic_sweep() {
    let set = CombinationSet::new(5);
    let expected = [
        (0, 1),
        (0, 2),
        (0, 3),
        (0, 4),
        (1, 2),
        (1, 3),
        (1, 4),
        (2, 3),
        (2, 4),
        (3, 4),
    ];

    assert_eq!(set.len(), expected.len());
    for (position, &(a, b)) in expected.iter().enumerate() {
        assert_eq!(
            set.get(position),
            Some(Pair::new(a, b)),
            "wrong pair at position {}",
            position
        );
    }
}

#[test]
fn test_get_set_round_trip_every_position() {
    let mut set = CombinationSet::new(6);

    for position in 0..set.len() {
        let original = set.get(position).expect("pair within range");
        assert!(set.set(position, original));
        assert_eq!(set.get(position), Some(original));
    }
}

#[test]
fn test_accessors_fail_past_the_end() {
    let mut set = CombinationSet::new(4);
    let count = set.len();

    assert_eq!(set.get(count), None);
    assert_eq!(set.verdict(count), None);
    assert!(!set.set(count, Pair::new(0, 1)));
    assert!(!set.record(count, Verdict::Matched));
}

#[test]
fn test_rebuild_restores_order_and_clears_verdicts() {
    let mut set = CombinationSet::new(4);

    for position in 0..set.len() {
        set.record(position, Verdict::NotMatched);
    }
    set.set(0, Pair::new(2, 3));

    assert!(set.rebuild());

    assert_eq!(set.get(0), Some(Pair::new(0, 1)));
    for position in 0..set.len() {
        assert_eq!(set.verdict(position), Some(Verdict::Unknown));
    }
}
