//! Per-dimension verdicts between a submission and a reference solution.

use std::cmp::Ordering;

use algocoach_types::{ComplexityClass, ComplexityComparison, ComplexityLevel, Verdict};

/// Verdict of `user` against `optimal`.
///
/// Identical levels are always `same`. Otherwise the level order decides,
/// and a level outside the ranked sequence on either side gives `unknown`.
pub fn verdict(user: &ComplexityLevel, optimal: &ComplexityLevel) -> Verdict {
    if user == optimal {
        return Verdict::Same;
    }
    match user.compare(optimal) {
        Some(Ordering::Less) => Verdict::Better,
        Some(Ordering::Equal) => Verdict::Same,
        Some(Ordering::Greater) => Verdict::Worse,
        None => Verdict::Unknown,
    }
}

pub fn compare_classes(user: &ComplexityClass, optimal: &ComplexityClass) -> ComplexityComparison {
    ComplexityComparison {
        user: user.clone(),
        optimal: optimal.clone(),
        verdict: verdict(&user.level, &optimal.level),
    }
}

/// One sentence for a dimension whose levels differ, `None` when they match.
pub fn dimension_suggestion(dimension: &str, cmp: &ComplexityComparison) -> Option<String> {
    let (user, optimal) = (&cmp.user.level, &cmp.optimal.level);
    match cmp.verdict {
        Verdict::Same => None,
        Verdict::Worse => Some(format!(
            "Consider optimizing {dimension} complexity from {user} to {optimal}"
        )),
        Verdict::Better => Some(format!(
            "Your {dimension} complexity {user} already beats the reference {optimal}"
        )),
        Verdict::Unknown => Some(format!(
            "Could not rank {dimension} complexity {user} against the reference {optimal}"
        )),
    }
}
