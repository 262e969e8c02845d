//! # algocoach-core
//!
//! This crate is the **primary library interface** for `algocoach`.
//! It coordinates the estimator, the cyclomatic calculator, the pattern
//! detector and the advisor to produce analysis and comparison reports.
//!
//! If you are embedding `algocoach` into another Rust application (an HTTP
//! handler, a grader), depend on this crate and `algocoach-types`.
//!
//! ## Example
//!
//! ```rust
//! use algocoach_core::{AnalysisEngine, types::SourceText};
//!
//! let engine = AnalysisEngine::with_builtin_catalog();
//! let code = "for (let i = 0; i < n; i++) { for (let j = 0; j < n; j++) { c++; } }";
//! let report = engine
//!     .generate_analysis_report(&SourceText::new(code, "javascript"))
//!     .expect("built-in catalog is valid");
//!
//! assert_eq!(report.complexity.time.level.to_string(), "O(n^2)");
//! assert_eq!(report.complexity.space.level.to_string(), "O(1)");
//! ```

pub mod compare;
pub mod explain;

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use algocoach_advisor::{AdvisorInput, suggest};
use algocoach_complexity::{calculate, estimate_text};
use algocoach_types::{
    AnalysisError, AnalysisReport, ComparisonReport, ProblemExplanation, REPORT_SCHEMA_VERSION,
    SourceText,
};
use tracing::debug;

// Re-export types for convenience
pub use algocoach_advisor::{PlaceholderScorer, QualityScorer};
pub use algocoach_catalog::PatternCatalog;
pub use algocoach_types as types;
pub use explain::explain;

fn now_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "analysis stage panicked".to_string())
}

/// The analysis engine.
///
/// Holds the pattern catalog and the quality scorer behind `Arc`, so clones
/// are cheap and the engine can be shared across request handlers. Every call
/// is independent; the engine keeps no per-call state.
#[derive(Debug, Clone)]
pub struct AnalysisEngine {
    catalog: Arc<PatternCatalog>,
    scorer: Arc<dyn QualityScorer>,
}

impl AnalysisEngine {
    pub fn new(catalog: PatternCatalog) -> Self {
        Self::from_shared(Arc::new(catalog))
    }

    pub fn from_shared(catalog: Arc<PatternCatalog>) -> Self {
        Self {
            catalog,
            scorer: Arc::new(PlaceholderScorer),
        }
    }

    pub fn with_builtin_catalog() -> Self {
        Self::new(PatternCatalog::builtin())
    }

    /// Replace the quality scorer.
    pub fn with_scorer(mut self, scorer: Arc<dyn QualityScorer>) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }

    /// Analyse one source text.
    ///
    /// Complexity estimation, cyclomatic scoring and pattern detection run
    /// concurrently; advice is derived from their joined results. Blank text
    /// yields the baseline report. A broken catalog entry or a panic in any
    /// stage aborts the report with an `AnalysisError`.
    pub fn generate_analysis_report(
        &self,
        source: &SourceText,
    ) -> Result<AnalysisReport, AnalysisError> {
        let code = source.code();
        debug!(
            language = source.language(),
            bytes = code.len(),
            "analysing source"
        );

        let analysed = panic::catch_unwind(AssertUnwindSafe(|| {
            let ((complexity, cyclomatic), patterns) = rayon::join(
                || rayon::join(|| estimate_text(code), || calculate(code)),
                || algocoach_patterns::detect(code, &self.catalog),
            );
            let quality = self.scorer.assess(source);
            patterns.map(|patterns| (complexity, cyclomatic, patterns, quality))
        }))
        .map_err(|payload| AnalysisError::internal(panic_message(payload.as_ref())))?;
        let (complexity, cyclomatic, patterns, quality) = analysed?;

        let suggestions = suggest(&AdvisorInput {
            cyclomatic: &cyclomatic,
            time: &complexity.time,
            patterns: &patterns,
        });

        debug!(
            time = %complexity.time.level,
            space = %complexity.space.level,
            cyclomatic = cyclomatic.value,
            patterns = patterns.len(),
            "analysis complete"
        );

        Ok(AnalysisReport {
            schema_version: REPORT_SCHEMA_VERSION,
            generated_at_ms: now_ms(),
            language: source.language().to_string(),
            complexity,
            cyclomatic,
            patterns,
            quality,
            suggestions,
        })
    }

    /// Analyse a submission and a reference solution and compare them.
    ///
    /// Both texts are analysed concurrently; an error from either aborts the
    /// comparison. Suggestions are emitted for each dimension whose levels
    /// differ, time first.
    pub fn compare_with_optimal(
        &self,
        user_code: &str,
        reference_code: &str,
        language: &str,
    ) -> Result<ComparisonReport, AnalysisError> {
        let user_source = SourceText::new(user_code, language);
        let reference_source = SourceText::new(reference_code, language);

        let (user, optimal) = rayon::join(
            || self.generate_analysis_report(&user_source),
            || self.generate_analysis_report(&reference_source),
        );
        let (user, optimal) = (user?, optimal?);

        let time = compare::compare_classes(&user.complexity.time, &optimal.complexity.time);
        let space = compare::compare_classes(&user.complexity.space, &optimal.complexity.space);
        let suggestions: Vec<String> = [("time", &time), ("space", &space)]
            .into_iter()
            .filter_map(|(dimension, cmp)| compare::dimension_suggestion(dimension, cmp))
            .collect();

        debug!(
            time = %time.verdict,
            space = %space.verdict,
            "comparison complete"
        );

        Ok(ComparisonReport {
            schema_version: REPORT_SCHEMA_VERSION,
            generated_at_ms: now_ms(),
            language: language.to_string(),
            time,
            space,
            suggestions,
            user,
            optimal,
        })
    }

    /// Analyse a reference solution and summarise it for a learner.
    pub fn explain_solution(
        &self,
        source: &SourceText,
    ) -> Result<ProblemExplanation, AnalysisError> {
        self.generate_analysis_report(source).map(|report| explain(&report))
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::with_builtin_catalog()
    }
}

/// Analyse `code` with the built-in catalog.
pub fn generate_analysis_report(
    code: &str,
    language: &str,
) -> Result<AnalysisReport, AnalysisError> {
    AnalysisEngine::with_builtin_catalog()
        .generate_analysis_report(&SourceText::new(code, language))
}

/// Compare `user_code` against `reference_code` with the built-in catalog.
pub fn compare_with_optimal(
    user_code: &str,
    reference_code: &str,
    language: &str,
) -> Result<ComparisonReport, AnalysisError> {
    AnalysisEngine::with_builtin_catalog().compare_with_optimal(user_code, reference_code, language)
}

#[cfg(test)]
mod tests {
    use super::*;
    use algocoach_types::{CyclomaticTier, QualityAssessment, Verdict};

    #[test]
    fn engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AnalysisEngine>();
    }

    #[test]
    fn blank_text_gives_baseline_report() {
        let report = generate_analysis_report("", "plaintext").unwrap();
        assert_eq!(report.schema_version, REPORT_SCHEMA_VERSION);
        assert_eq!(report.language, "plaintext");
        assert_eq!(report.complexity.time.level.to_string(), "O(1)");
        assert_eq!(report.complexity.space.level.to_string(), "O(1)");
        assert_eq!(report.cyclomatic.value, 1);
        assert_eq!(report.cyclomatic.tier, CyclomaticTier::Low);
        assert!(report.patterns.is_empty());
        assert_eq!(
            report.suggestions,
            vec!["Consider using standard DSA patterns to solve this problem more efficiently"]
        );
    }

    #[test]
    fn custom_scorer_is_used() {
        #[derive(Debug)]
        struct Strict;
        impl QualityScorer for Strict {
            fn assess(&self, _: &SourceText) -> QualityAssessment {
                QualityAssessment {
                    score: 0.1,
                    tips: vec!["rewrite".into()],
                }
            }
        }

        let engine = AnalysisEngine::with_builtin_catalog().with_scorer(Arc::new(Strict));
        let report = engine
            .generate_analysis_report(&SourceText::new("x", "js"))
            .unwrap();
        assert_eq!(report.quality.score, 0.1);
    }

    #[test]
    fn panicking_stage_becomes_internal_error() {
        #[derive(Debug)]
        struct Broken;
        impl QualityScorer for Broken {
            fn assess(&self, _: &SourceText) -> QualityAssessment {
                panic!("scorer exploded");
            }
        }

        let engine = AnalysisEngine::with_builtin_catalog().with_scorer(Arc::new(Broken));
        let err = engine
            .generate_analysis_report(&SourceText::new("x", "js"))
            .unwrap_err();
        assert_eq!(err, AnalysisError::Internal("scorer exploded".into()));

        let err = engine.compare_with_optimal("a", "b", "js").unwrap_err();
        assert!(matches!(err, AnalysisError::Internal(_)));
    }

    #[test]
    fn explain_solution_uses_the_report() {
        let engine = AnalysisEngine::with_builtin_catalog();
        let explanation = engine
            .explain_solution(&SourceText::new("queue level bfs", "python"))
            .unwrap();
        assert!(explanation.approach.starts_with(
            "This problem can be solved using the breadth-first-search pattern."
        ));
        assert_eq!(
            explanation.key_concepts,
            vec!["Breadth-first search for graph/tree traversal"]
        );
    }

    #[test]
    fn self_comparison_is_same() {
        let code = "for (const x of xs) { out.push(x); }";
        let cmp = compare_with_optimal(code, code, "javascript").unwrap();
        assert_eq!(cmp.time.verdict, Verdict::Same);
        assert_eq!(cmp.space.verdict, Verdict::Same);
        assert!(cmp.suggestions.is_empty());
        assert_eq!(cmp.user.complexity, cmp.optimal.complexity);
    }

    #[test]
    fn clones_share_the_catalog() {
        let engine = AnalysisEngine::with_builtin_catalog();
        let clone = engine.clone();
        assert!(Arc::ptr_eq(&engine.catalog, &clone.catalog));
    }
}
