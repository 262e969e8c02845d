//! Property-based tests for `algocoach-core`.
//!
//! Uses `proptest` to verify invariants that must hold for all inputs.

use proptest::prelude::*;

use algocoach_core::{AnalysisEngine, compare_with_optimal};
use algocoach_types::{ComplexityLevel, SourceText, Verdict};

// ---------------------------------------------------------------------------
// Strategy: small programs built from loops, branches and plain statements
// ---------------------------------------------------------------------------
fn arb_statement() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("x += 1;".to_string()),
        Just("if (x > y) { y = x; }".to_string()),
        Just("const seen = [];".to_string()),
        Just("for (let i = 0; i < n; i++) { s += i; }".to_string()),
        Just("while (lo < hi) { lo++; }".to_string()),
        Just("const r = ok ? a : b;".to_string()),
        "[a-z]{1,8}".prop_map(|w| format!("{w}();")),
    ]
}

fn arb_program() -> impl Strategy<Value = String> {
    proptest::collection::vec(arb_statement(), 0..12).prop_map(|lines| lines.join("\n"))
}

fn nested(depth: usize) -> String {
    let mut text = String::new();
    for d in 0..depth {
        text.push_str(&format!("for (let i{d} = 0; i{d} < n; i{d}++) {{\n"));
    }
    text.push_str("total++;\n");
    text.push_str(&"}\n".repeat(depth));
    text
}

// ===========================================================================
// Property: analysis is idempotent apart from the timestamp
// ===========================================================================
proptest! {
    #[test]
    fn prop_analysis_idempotent(code in arb_program()) {
        let engine = AnalysisEngine::with_builtin_catalog();
        let source = SourceText::new(code, "javascript");
        let a = engine.generate_analysis_report(&source).unwrap();
        let b = engine.generate_analysis_report(&source).unwrap();
        prop_assert_eq!(a.complexity, b.complexity);
        prop_assert_eq!(a.cyclomatic, b.cyclomatic);
        prop_assert_eq!(a.patterns, b.patterns);
        prop_assert_eq!(a.suggestions, b.suggestions);
    }
}

// ===========================================================================
// Property: comparing a text with itself is always same / same
// ===========================================================================
proptest! {
    #[test]
    fn prop_self_comparison_is_same(code in arb_program()) {
        let cmp = compare_with_optimal(&code, &code, "javascript").unwrap();
        prop_assert_eq!(cmp.time.verdict, Verdict::Same);
        prop_assert_eq!(cmp.space.verdict, Verdict::Same);
        prop_assert!(cmp.suggestions.is_empty());
    }
}

// ===========================================================================
// Property: a chain of d loops gives O(n^d); only O(n) and O(n^2) are ranked
// ===========================================================================
proptest! {
    #[test]
    fn prop_nesting_verdicts(a in 1usize..6, b in 1usize..6) {
        let cmp = compare_with_optimal(&nested(a), &nested(b), "javascript").unwrap();
        prop_assert_eq!(&cmp.time.user.level, &ComplexityLevel::polynomial(a as u32));
        let expected = match a.cmp(&b) {
            std::cmp::Ordering::Equal => Verdict::Same,
            _ if a > 2 || b > 2 => Verdict::Unknown,
            std::cmp::Ordering::Less => Verdict::Better,
            std::cmp::Ordering::Greater => Verdict::Worse,
        };
        prop_assert_eq!(cmp.time.verdict, expected);
        prop_assert_eq!(cmp.suggestions.is_empty(), a == b);
    }
}

// ===========================================================================
// Property: every report suggestion set is drawn from the advice rules
// ===========================================================================
proptest! {
    #[test]
    fn prop_suggestions_from_rule_table(code in arb_program()) {
        let report = algocoach_core::generate_analysis_report(&code, "javascript").unwrap();
        let known: Vec<&str> = algocoach_advisor::ADVICE_RULES.iter().map(|r| r.message).collect();
        for s in &report.suggestions {
            prop_assert!(known.contains(&s.as_str()));
        }
        prop_assert!(report.cyclomatic.value >= 1);
    }
}
