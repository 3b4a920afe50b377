//! Shuffle uniformity and bias checks.

use std::collections::HashMap;
use studylab_core::entropy::{self, ScriptedRng};
use studylab_core::shuffle::{random_index, secure_shuffle, shuffled};

#[test]
fn all_24_permutations_appear_with_equal_frequency() {
    let mut rng = entropy::seeded(31_337);
    let draws = 24_000u32;

    let mut counts: HashMap<[u8; 4], u32> = HashMap::new();
    for _ in 0..draws {
        let mut items = [0u8, 1, 2, 3];
        secure_shuffle(&mut items, &mut rng);
        *counts.entry(items).or_default() += 1;
    }

    assert_eq!(counts.len(), 24, "not every permutation was produced");

    let expected = f64::from(draws) / 24.0;
    let chi_squared: f64 = counts
        .values()
        .map(|&count| {
            let delta = f64::from(count) - expected;
            delta * delta / expected
        })
        .sum();
    // 23 degrees of freedom; the 0.999 quantile sits near 49.7. The seeded
    // source makes this exact, so a pass today is a pass forever.
    assert!(
        chi_squared < 60.0,
        "chi-squared {chi_squared:.2} indicates a biased shuffle"
    );
}

#[test]
fn index_helper_covers_the_range_evenly() {
    let mut rng = entropy::seeded(4242);
    let draws = 60_000u32;
    let mut counts = [0u32; 6];
    for _ in 0..draws {
        counts[random_index(&mut rng, 5)] += 1;
    }
    let expected = f64::from(draws) / 6.0;
    for (value, &count) in counts.iter().enumerate() {
        let deviation = (f64::from(count) - expected).abs() / expected;
        assert!(
            deviation < 0.05,
            "value {value}: count {count} deviates {deviation:.3} from uniform"
        );
    }
}

#[test]
fn exhaustive_byte_patterns_never_escape_the_range() {
    // Every possible byte, fed in order: rejection sampling must either
    // produce an in-range value or consume another byte, never wrap.
    for max in [1usize, 2, 3, 5, 6, 7] {
        let mut rng = ScriptedRng::new((0..=255u8).collect::<Vec<_>>());
        let mut produced = 0u32;
        // Leave a few bytes unconsumed: a draw that starts on a run of
        // rejected trailing bytes would otherwise drain the script mid-call.
        while rng.remaining() > 4 {
            let value = random_index(&mut rng, max);
            assert!(value <= max, "max {max}: produced {value}");
            produced += 1;
        }
        assert!(produced > 0);
    }
}

#[test]
fn forced_low_entropy_regression_vector() {
    // Descending Fisher–Yates over [1,2,3] with j forced to 0:
    // swap(2,0) -> [3,2,1], then swap(1,0) -> [2,3,1].
    let mut rng = ScriptedRng::new(vec![0, 0]);
    let mut items = vec![1, 2, 3];
    secure_shuffle(&mut items, &mut rng);
    assert_eq!(items, vec![2, 3, 1]);
}

#[test]
fn shuffled_copy_keeps_canonical_order_intact() {
    let mut rng = entropy::seeded(9);
    let canonical: Vec<u32> = (0..32).collect();
    let mut saw_reorder = false;
    for _ in 0..10 {
        let copy = shuffled(&canonical, &mut rng);
        assert_eq!(canonical, (0..32).collect::<Vec<u32>>());
        let mut sorted = copy.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, canonical);
        if copy != canonical {
            saw_reorder = true;
        }
    }
    assert!(saw_reorder);
}
