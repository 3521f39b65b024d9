//! Property tests for LCSS similarity.

use proptest::prelude::*;
use tslcss::{Lcss, MatchWindow};

fn arb_series() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-5.0f64..5.0, 1..24)
}

fn score(a: &[f64], b: &[f64], delta: i64, epsilon: f64) -> f64 {
    Lcss::new(delta, epsilon)
        .expect("valid tolerances")
        .similarity(a, b)
        .expect("finite, non-empty series")
        .value()
}

proptest! {
    #[test]
    fn self_match_is_one(a in arb_series(), delta in 0i64..6, epsilon in 0.0f64..2.0) {
        prop_assert_eq!(score(&a, &a, delta, epsilon), 1.0);
        prop_assert_eq!(score(&a, &a, 0, 0.0), 1.0);
    }

    #[test]
    fn symmetric(a in arb_series(), b in arb_series(), delta in 0i64..6, epsilon in 0.0f64..2.0) {
        prop_assert_eq!(score(&a, &b, delta, epsilon), score(&b, &a, delta, epsilon));
    }

    #[test]
    fn monotonic_in_epsilon(
        a in arb_series(),
        b in arb_series(),
        delta in 0i64..6,
        epsilon in 0.0f64..2.0,
        extra in 0.0f64..2.0,
    ) {
        prop_assert!(score(&a, &b, delta, epsilon + extra) >= score(&a, &b, delta, epsilon));
    }

    #[test]
    fn monotonic_in_delta(
        a in arb_series(),
        b in arb_series(),
        delta in 0i64..6,
        extra in 0i64..4,
        epsilon in 0.0f64..2.0,
    ) {
        prop_assert!(score(&a, &b, delta + extra, epsilon) >= score(&a, &b, delta, epsilon));
    }

    #[test]
    fn bounded_in_unit_interval(a in arb_series(), b in arb_series(), delta in 0i64..30, epsilon in 0.0f64..10.0) {
        let s = score(&a, &b, delta, epsilon);
        prop_assert!((0.0..=1.0).contains(&s));
    }

    #[test]
    fn disjoint_ranges_score_zero(a in arb_series(), b in arb_series(), delta in 0i64..30) {
        // a lies in [-5, 5), b shifted into [15, 25): every difference exceeds 9.
        let shifted: Vec<f64> = b.iter().map(|v| v + 20.0).collect();
        prop_assert_eq!(score(&a, &shifted, delta, 9.0), 0.0);
    }

    #[test]
    fn rolling_agrees_with_table(
        a in arb_series(),
        b in arb_series(),
        delta in 0i64..6,
        epsilon in 0.0f64..2.0,
        lagged in any::<bool>(),
    ) {
        let window = if lagged { MatchWindow::Lagged } else { MatchWindow::Centered };
        let lcss = Lcss::new(delta, epsilon).unwrap().with_window(window);
        prop_assert_eq!(
            lcss.similarity(&a, &b).unwrap(),
            lcss.table(&a, &b).unwrap().similarity()
        );
    }
}
