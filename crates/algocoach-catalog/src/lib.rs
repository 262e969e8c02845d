//! # algocoach-catalog
//!
//! **Tier 0 (Reference Data)**
//!
//! The table of algorithmic techniques the pattern detector scores against.
//! A catalog is validated once when built and never mutated afterwards;
//! share it with `Arc` instead of reaching for a global.
//!
//! ## Invariants
//! * Every pattern has a non-empty name, unique within the catalog
//! * Every pattern has at least one indicator token
//! * Indicator tokens are single lower-case identifiers
//! * Iteration order is insertion order

use std::collections::BTreeSet;

use algocoach_types::{AnalysisError, PatternDefinition};

/// Built-in techniques: (name, indicator tokens, description).
const BUILTIN: &[(&str, &[&str], &str)] = &[
    (
        "two-pointer",
        &["left", "right", "pointer", "start", "end"],
        "Two-pointer technique for array/string problems",
    ),
    (
        "sliding-window",
        &["window", "start", "end", "sum", "max", "min"],
        "Sliding window technique for subarray/substring problems",
    ),
    (
        "binary-search",
        &["mid", "left", "right", "binary", "search"],
        "Binary search pattern for sorted array problems",
    ),
    (
        "dynamic-programming",
        &["dp", "memo", "cache", "recurrence", "subproblem"],
        "Dynamic programming approach for optimization problems",
    ),
    (
        "breadth-first-search",
        &["queue", "level", "breadth", "bfs", "neighbor"],
        "Breadth-first search for graph/tree traversal",
    ),
    (
        "depth-first-search",
        &["stack", "recursive", "dfs", "depth", "backtrack"],
        "Depth-first search for graph/tree traversal",
    ),
];

/// An immutable, validated list of pattern definitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternCatalog {
    patterns: Vec<PatternDefinition>,
}

impl PatternCatalog {
    /// Validate and normalize `patterns` into a catalog.
    ///
    /// Tokens are trimmed and lower-cased; the first invalid entry aborts
    /// construction.
    pub fn new(patterns: Vec<PatternDefinition>) -> Result<Self, AnalysisError> {
        let mut seen = BTreeSet::new();
        let mut normalized = Vec::with_capacity(patterns.len());

        for pattern in patterns {
            let pattern = normalize(pattern)?;
            if !seen.insert(pattern.name.clone()) {
                return Err(AnalysisError::DuplicatePattern { name: pattern.name });
            }
            normalized.push(pattern);
        }

        Ok(Self {
            patterns: normalized,
        })
    }

    /// The six built-in DSA techniques, in their documented order.
    pub fn builtin() -> Self {
        let patterns = BUILTIN
            .iter()
            .map(|(name, tokens, description)| {
                PatternDefinition::new(*name, tokens.iter().copied(), *description)
            })
            .collect();
        Self { patterns }
    }

    /// Layer `overrides` on top of this catalog.
    ///
    /// An override whose name already exists replaces that entry in place;
    /// new names are appended in the order given.
    pub fn merged(self, overrides: Vec<PatternDefinition>) -> Result<Self, AnalysisError> {
        let mut patterns = self.patterns;
        for pattern in overrides {
            let pattern = normalize(pattern)?;
            match patterns.iter_mut().find(|p| p.name == pattern.name) {
                Some(existing) => *existing = pattern,
                None => patterns.push(pattern),
            }
        }
        Self::new(patterns)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PatternDefinition> {
        self.patterns.iter()
    }

    pub fn get(&self, name: &str) -> Option<&PatternDefinition> {
        self.patterns.iter().find(|p| p.name == name)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.patterns.iter().map(|p| p.name.as_str()).collect()
    }
}

impl Default for PatternCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a PatternCatalog {
    type Item = &'a PatternDefinition;
    type IntoIter = std::slice::Iter<'a, PatternDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.iter()
    }
}

fn is_identifier(token: &str) -> bool {
    !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

fn normalize(pattern: PatternDefinition) -> Result<PatternDefinition, AnalysisError> {
    let name = pattern.name.trim().to_string();
    if name.is_empty() {
        return Err(AnalysisError::UnnamedPattern);
    }
    if pattern.indicator_tokens.is_empty() {
        return Err(AnalysisError::EmptyPattern { name });
    }

    let mut tokens = BTreeSet::new();
    for token in &pattern.indicator_tokens {
        let token = token.trim().to_lowercase();
        if !is_identifier(&token) {
            return Err(AnalysisError::InvalidIndicatorToken {
                pattern: name,
                token,
            });
        }
        tokens.insert(token);
    }

    Ok(PatternDefinition {
        name,
        indicator_tokens: tokens,
        description: pattern.description.trim().to_string(),
    })
}
