//! # algocoach-advisor
//!
//! **Tier 2 (Advice)**
//!
//! Turns estimator output into human-readable suggestions, and hosts the
//! [`QualityScorer`] hook for code-quality scoring.
//!
//! ## What belongs here
//! * The ordered advice rule table
//! * Quality scorer trait and the placeholder implementation
//!
//! ## What does NOT belong here
//! * Any scanning of source text for structure (use `algocoach-scan`)
//! * Comparison suggestions between two reports (use `algocoach-core`)

use std::fmt;

use algocoach_types::{
    ComplexityClass, CyclomaticScore, CyclomaticTier, PatternMatch, QualityAssessment, SourceText,
};
use tracing::debug;

/// The joined estimator results the advice rules look at.
#[derive(Debug, Clone, Copy)]
pub struct AdvisorInput<'a> {
    pub cyclomatic: &'a CyclomaticScore,
    pub time: &'a ComplexityClass,
    pub patterns: &'a [PatternMatch],
}

/// One advice rule: when `applies` holds, `message` is emitted.
#[derive(Debug, Clone, Copy)]
pub struct AdviceRule {
    pub name: &'static str,
    pub applies: fn(&AdvisorInput<'_>) -> bool,
    pub message: &'static str,
}

/// Evaluated in order; every rule that applies contributes its message.
pub const ADVICE_RULES: &[AdviceRule] = &[
    AdviceRule {
        name: "high-cyclomatic",
        applies: |input| input.cyclomatic.tier == CyclomaticTier::High,
        message: "Consider breaking down complex functions into smaller, more manageable pieces",
    },
    AdviceRule {
        name: "polynomial-time",
        applies: |input| input.time.level.is_polynomial(),
        message: "Look for opportunities to optimize the algorithm to reduce time complexity",
    },
    AdviceRule {
        name: "no-recognized-technique",
        applies: |input| input.patterns.is_empty(),
        message: "Consider using standard DSA patterns to solve this problem more efficiently",
    },
];

/// Suggestions for `input`, in rule order.
pub fn suggest(input: &AdvisorInput<'_>) -> Vec<String> {
    ADVICE_RULES
        .iter()
        .filter(|rule| (rule.applies)(input))
        .map(|rule| {
            debug!(rule = rule.name, "advice rule fired");
            rule.message.to_string()
        })
        .collect()
}

/// Scores code quality for a report.
///
/// Implementations must be pure: the same text gives the same assessment.
pub trait QualityScorer: fmt::Debug + Send + Sync {
    fn assess(&self, source: &SourceText) -> QualityAssessment;
}

/// Fixed-output scorer.
///
/// This is a stub: it ignores the text and always returns `0.8` with three
/// generic tips. Swap in a real implementation through
/// [`QualityScorer`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderScorer;

pub const PLACEHOLDER_SCORE: f64 = 0.8;

pub const PLACEHOLDER_TIPS: [&str; 3] = [
    "Consider adding more comments",
    "Break down complex functions",
    "Use more descriptive variable names",
];

impl QualityScorer for PlaceholderScorer {
    fn assess(&self, _source: &SourceText) -> QualityAssessment {
        QualityAssessment {
            score: PLACEHOLDER_SCORE,
            tips: PLACEHOLDER_TIPS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algocoach_types::ComplexityLevel;

    fn cyclomatic(value: usize) -> CyclomaticScore {
        let tier = CyclomaticTier::from_value(value);
        CyclomaticScore {
            value,
            tier,
            explanation: String::new(),
        }
    }

    fn matched(name: &str) -> PatternMatch {
        PatternMatch {
            name: name.into(),
            score: 0.8,
            description: String::new(),
        }
    }

    #[test]
    fn clean_code_with_a_pattern_gets_no_advice() {
        let cc = cyclomatic(2);
        let time = ComplexityClass::new(ComplexityLevel::Linear, "");
        let patterns = [matched("two-pointer")];
        let input = AdvisorInput {
            cyclomatic: &cc,
            time: &time,
            patterns: &patterns,
        };
        assert!(suggest(&input).is_empty());
    }

    #[test]
    fn every_rule_fires_in_order() {
        let cc = cyclomatic(14);
        let time = ComplexityClass::new(ComplexityLevel::Polynomial(2), "");
        let input = AdvisorInput {
            cyclomatic: &cc,
            time: &time,
            patterns: &[],
        };
        let expected: Vec<String> = ADVICE_RULES.iter().map(|r| r.message.to_string()).collect();
        assert_eq!(suggest(&input), expected);
    }

    #[test]
    fn polynomial_rule_ignores_other_classes() {
        let cc = cyclomatic(1);
        let patterns = [matched("dfs")];
        for level in [
            ComplexityLevel::Constant,
            ComplexityLevel::Logarithmic,
            ComplexityLevel::Linear,
            ComplexityLevel::Linearithmic,
            ComplexityLevel::Exponential,
        ] {
            let time = ComplexityClass::new(level, "");
            let input = AdvisorInput {
                cyclomatic: &cc,
                time: &time,
                patterns: &patterns,
            };
            assert!(suggest(&input).is_empty());
        }
    }

    #[test]
    fn medium_tier_is_not_high() {
        let cc = cyclomatic(10);
        let time = ComplexityClass::new(ComplexityLevel::Constant, "");
        let input = AdvisorInput {
            cyclomatic: &cc,
            time: &time,
            patterns: &[],
        };
        assert_eq!(
            suggest(&input),
            vec!["Consider using standard DSA patterns to solve this problem more efficiently"]
        );
    }

    #[test]
    fn placeholder_is_fixed() {
        let a = PlaceholderScorer.assess(&SourceText::new("x", "js"));
        let b = PlaceholderScorer.assess(&SourceText::new("", "py"));
        assert_eq!(a, b);
        assert_eq!(a.score, PLACEHOLDER_SCORE);
        assert_eq!(a.tips.len(), 3);
    }
}
