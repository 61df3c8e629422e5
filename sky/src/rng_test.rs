#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn seed_state_sums_character_codes() {
    // o=111 r=114 i=105 o=111 n=110
    assert_eq!(seed_state("orion"), 551);
}

#[test]
fn empty_seed_folds_to_zero() {
    assert_eq!(seed_state(""), 0);
    assert_eq!(SeededRandom::new("").state(), 0);
}

#[test]
fn anagrams_share_a_state() {
    assert_eq!(seed_state("abc"), seed_state("cba"));
}

#[test]
fn first_value_of_zero_state_is_zero() {
    let mut rng = SeededRandom::new("");
    assert_eq!(rng.next(), 0.0);
    assert_eq!(rng.state(), 1);
}

#[test]
fn next_matches_sine_hash() {
    let mut rng = SeededRandom::new("orion");
    let x = 551_f64.sin() * 10_000.0;
    assert_eq!(rng.next(), x - x.floor());
    let x = 552_f64.sin() * 10_000.0;
    assert_eq!(rng.next(), x - x.floor());
}

#[test]
fn next_advances_state_by_one() {
    let mut rng = SeededRandom::new("a");
    let start = rng.state();
    for i in 1..=10 {
        rng.next();
        assert_eq!(rng.state(), start + i);
    }
}

#[test]
fn values_stay_in_unit_interval() {
    for seed in ["orion", "lyra", "z9", "a", ""] {
        let mut rng = SeededRandom::new(seed);
        for _ in 0..2000 {
            let v = rng.next();
            assert!((0.0..1.0).contains(&v), "{seed}: {v}");
        }
    }
}

#[test]
fn same_seed_same_sequence() {
    let mut a = SeededRandom::new("cassiopeia");
    let mut b = SeededRandom::new("cassiopeia");
    for _ in 0..100 {
        assert_eq!(a.next(), b.next());
    }
}

#[test]
fn set_seed_resets_sequence() {
    let mut rng = SeededRandom::new("draco");
    let first = rng.next();
    rng.next();
    rng.next();
    rng.set_seed("draco");
    assert_eq!(rng.next(), first);
}
