//! Learner-facing explanation of a reference solution.

use algocoach_types::{AnalysisReport, ProblemExplanation};

/// Summarise `report` for a learner.
///
/// The first matched technique leads the approach sentence, so the result
/// depends on catalog order. Suggestions become the optimization tips.
pub fn explain(report: &AnalysisReport) -> ProblemExplanation {
    let mut approach = String::new();
    if let Some(lead) = report.patterns.first() {
        approach.push_str(&format!(
            "This problem can be solved using the {} pattern. ",
            lead.name
        ));
    }
    approach.push_str(&format!(
        "The optimal solution has a time complexity of {} and space complexity of {}.",
        report.complexity.time.level, report.complexity.space.level
    ));

    ProblemExplanation {
        approach,
        key_concepts: report
            .patterns
            .iter()
            .map(|m| m.description.clone())
            .collect(),
        optimization_tips: report.suggestions.clone(),
    }
}
