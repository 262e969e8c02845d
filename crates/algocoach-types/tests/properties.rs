//! Property-based tests for `algocoach-types`.
//!
//! Uses `proptest` to verify invariants that must hold for all inputs.

use std::cmp::Ordering;

use proptest::prelude::*;

use algocoach_types::{ComplexityLevel, CyclomaticTier};

fn arb_known_level() -> impl Strategy<Value = ComplexityLevel> {
    prop_oneof![
        Just(ComplexityLevel::Constant),
        Just(ComplexityLevel::Logarithmic),
        Just(ComplexityLevel::Linear),
        Just(ComplexityLevel::Linearithmic),
        Just(ComplexityLevel::Polynomial(2)),
        Just(ComplexityLevel::Exponential),
    ]
}

// ===========================================================================
// Property: every known level survives a display/parse round trip
// ===========================================================================
proptest! {
    #[test]
    fn prop_known_levels_parse_back(level in arb_known_level()) {
        let parsed: ComplexityLevel = level.to_string().parse().unwrap();
        prop_assert_eq!(parsed, level);
    }
}

// ===========================================================================
// Property: comparison of known levels is antisymmetric and reflexive
// ===========================================================================
proptest! {
    #[test]
    fn prop_compare_is_antisymmetric(a in arb_known_level(), b in arb_known_level()) {
        let ab = a.compare(&b).unwrap();
        let ba = b.compare(&a).unwrap();
        prop_assert_eq!(ab, ba.reverse());
        prop_assert_eq!(a.compare(&a), Some(Ordering::Equal));
    }
}

// ===========================================================================
// Property: polynomials above degree two have no rank
// ===========================================================================
proptest! {
    #[test]
    fn prop_higher_polynomials_are_incomparable(k in 3u32..50, other in arb_known_level()) {
        let level = ComplexityLevel::Polynomial(k);
        prop_assert_eq!(level.rank(), None);
        prop_assert_eq!(level.compare(&other), None);
        prop_assert_eq!(other.compare(&level), None);
    }
}

// ===========================================================================
// Property: tier is monotonic in the cyclomatic value
// ===========================================================================
proptest! {
    #[test]
    fn prop_tier_monotonic(a in 1usize..100, b in 1usize..100) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let rank = |t: CyclomaticTier| match t {
            CyclomaticTier::Low => 0,
            CyclomaticTier::Medium => 1,
            CyclomaticTier::High => 2,
        };
        prop_assert!(rank(CyclomaticTier::from_value(lo)) <= rank(CyclomaticTier::from_value(hi)));
    }
}
