use std::collections::BTreeSet;

use distances::sets::{hamming, intersection_size, jaccard};
use float_cmp::approx_eq;
use rand::prelude::*;
use test_case::test_case;

/// Generates a sorted set over `0..dim` with each member included with probability one half.
fn gen_set(dim: usize, rng: &mut StdRng) -> Vec<usize> {
    (0..dim).filter(|_| rng.gen_bool(0.5)).collect()
}

#[test_case(&[], &[], 0.0 ; "both empty")]
#[test_case(&[1, 2, 3], &[], 1.0 ; "one empty")]
#[test_case(&[1, 2, 3], &[1, 2, 3], 0.0 ; "identical")]
#[test_case(&[1, 2, 3], &[4, 5, 6], 1.0 ; "disjoint")]
#[test_case(&[1, 2, 3, 4], &[3, 4, 5, 6], 2.0 / 3.0 ; "half overlap")]
fn jaccard_fixtures(x: &[usize], y: &[usize], expected: f64) {
    let distance: f64 = jaccard(x, y);
    assert!(approx_eq!(f64, distance, expected, ulps = 4));
}

#[test]
fn random_sets_agree_with_btree_sets() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..1_000 {
        let x = gen_set(64, &mut rng);
        let y = gen_set(64, &mut rng);

        let bx = x.iter().copied().collect::<BTreeSet<_>>();
        let by = y.iter().copied().collect::<BTreeSet<_>>();
        let intersection = bx.intersection(&by).count();
        let union = bx.union(&by).count();

        assert_eq!(intersection_size(&x, &y), intersection);

        let expected = if union == 0 {
            0.0
        } else {
            1.0 - intersection as f64 / union as f64
        };
        let actual: f64 = jaccard(&x, &y);
        assert!(approx_eq!(f64, actual, expected, epsilon = 1e-12));

        let expected = bx.symmetric_difference(&by).count() as f64;
        let actual: f64 = hamming(&x, &y);
        assert!(approx_eq!(f64, actual, expected, ulps = 2));
    }
}
