//! # algocoach-patterns
//!
//! **Tier 2 (Estimators)**
//!
//! Scores every catalog technique by how many of its indicator tokens appear
//! in the text. Pure and stateless: the same text and catalog always give the
//! same matches.
//!
//! ## Scoring
//! `score = distinct indicator tokens present / indicator tokens defined`,
//! matched as whole, case-insensitive tokens. A technique is reported when its
//! score is strictly above [`MATCH_THRESHOLD`]. Several techniques may match
//! the same text; results keep catalog order.

use std::collections::HashSet;

use algocoach_catalog::PatternCatalog;
use algocoach_scan::word_tokens;
use algocoach_types::{AnalysisError, PatternDefinition, PatternMatch};
use tracing::{debug, trace};

/// Scores must be strictly greater than this to be reported.
pub const MATCH_THRESHOLD: f64 = 0.5;

/// Fraction of `pattern`'s indicator tokens present in `words`.
///
/// `words` is the lower-cased token set of the text (see
/// [`algocoach_scan::word_tokens`]).
pub fn pattern_score(
    words: &HashSet<String>,
    pattern: &PatternDefinition,
) -> Result<f64, AnalysisError> {
    let total = pattern.indicator_tokens.len();
    if total == 0 {
        return Err(AnalysisError::EmptyPattern {
            name: pattern.name.clone(),
        });
    }

    let hits = pattern
        .indicator_tokens
        .iter()
        .filter(|token| words.contains(&token.to_lowercase()))
        .count();

    Ok(hits as f64 / total as f64)
}

/// Detect every catalog technique whose score clears [`MATCH_THRESHOLD`].
///
/// # Example
/// ```
/// use algocoach_catalog::PatternCatalog;
/// use algocoach_patterns::detect;
///
/// let code = "let left = 0, right = n - 1; while (left < right) { let mid = (left + right) >> 1; }";
/// let found = detect(code, &PatternCatalog::builtin()).unwrap();
/// let names: Vec<_> = found.iter().map(|m| m.name.as_str()).collect();
/// assert!(names.contains(&"binary-search"));
/// ```
pub fn detect(text: &str, catalog: &PatternCatalog) -> Result<Vec<PatternMatch>, AnalysisError> {
    let words = word_tokens(text);
    let mut matches = Vec::new();

    for pattern in catalog {
        let score = pattern_score(&words, pattern)?;
        trace!(pattern = %pattern.name, score, "pattern scored");
        if score > MATCH_THRESHOLD {
            matches.push(PatternMatch {
                name: pattern.name.clone(),
                score,
                description: pattern.description.clone(),
            });
        }
    }

    debug!(matched = matches.len(), of = catalog.len(), "pattern detection done");
    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> HashSet<String> {
        word_tokens(text)
    }

    #[test]
    fn score_counts_distinct_tokens() {
        let def = PatternDefinition::new("w", ["window", "sum", "max", "min"], "");
        let score = pattern_score(&words("window window window"), &def).unwrap();
        assert!((score - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn score_is_case_insensitive_and_whole_token() {
        let def = PatternDefinition::new("dp", ["dp", "memo"], "");
        assert_eq!(pattern_score(&words("const DP = {}; Memo()"), &def).unwrap(), 1.0);
        assert_eq!(pattern_score(&words("dpTable memoized"), &def).unwrap(), 0.0);
    }

    #[test]
    fn empty_definition_is_an_error() {
        let def = PatternDefinition::new("empty", Vec::<String>::new(), "");
        assert_eq!(
            pattern_score(&words("anything"), &def),
            Err(AnalysisError::EmptyPattern {
                name: "empty".into()
            })
        );
    }

    #[test]
    fn exactly_half_is_not_reported() {
        let catalog =
            PatternCatalog::new(vec![PatternDefinition::new("pair", ["alpha", "beta"], "")])
                .unwrap();
        assert!(detect("alpha", &catalog).unwrap().is_empty());
        assert_eq!(detect("alpha beta", &catalog).unwrap().len(), 1);
    }

    #[test]
    fn matches_follow_catalog_order() {
        let code = "left right start end mid binary search window sum max";
        let found = detect(code, &PatternCatalog::builtin()).unwrap();
        let names: Vec<_> = found.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["two-pointer", "sliding-window", "binary-search"]);
    }

    #[test]
    fn no_tokens_no_matches() {
        let found = detect("x = y + z", &PatternCatalog::builtin()).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn match_carries_description() {
        let found = detect("queue level bfs", &PatternCatalog::builtin()).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "breadth-first-search");
        assert_eq!(
            found[0].description,
            "Breadth-first search for graph/tree traversal"
        );
        assert!((found[0].score - 0.6).abs() < 1e-9);
    }
}
