//! # algocoach-types
//!
//! **Tier 0 (Analysis Contract)**
//!
//! Pure data structures for analysis and comparison reports. No I/O or
//! business logic.
//!
//! ## What belongs here
//! * Report value objects and their serde shape
//! * Complexity levels and their total order
//! * The shared `AnalysisError` taxonomy
//!
//! ## What does NOT belong here
//! * Scanning, estimation or detection logic
//! * Rendering (use algocoach-format)
//! * Settings and file loading (use algocoach-settings)

mod error;

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use error::AnalysisError;

/// Schema version for analysis and comparison reports.
/// v2: Embedded per-side reports in comparisons, added `quality`.
pub const REPORT_SCHEMA_VERSION: u32 = 2;

/// Highest cyclomatic value still considered `low`.
pub const CYCLOMATIC_LOW_MAX: usize = 5;
/// Highest cyclomatic value still considered `medium`.
pub const CYCLOMATIC_MEDIUM_MAX: usize = 10;

/// A blob of submitted code plus its declared language.
///
/// The language tag is display metadata only; no analysis branches on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceText {
    code: String,
    language: String,
}

impl SourceText {
    pub fn new(code: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            language: language.into(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// True when the code has no non-whitespace content.
    pub fn is_blank(&self) -> bool {
        self.code.trim().is_empty()
    }
}

/// A named algorithmic technique and the tokens that hint at it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternDefinition {
    pub name: String,
    pub indicator_tokens: BTreeSet<String>,
    #[serde(default)]
    pub description: String,
}

impl PatternDefinition {
    pub fn new<I, S>(name: impl Into<String>, tokens: I, description: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            indicator_tokens: tokens.into_iter().map(Into::into).collect(),
            description: description.into(),
        }
    }
}

/// Coarse big-O bucket.
///
/// Serialized as its display string (`"O(n^2)"`) so reports read the same in
/// JSON and Markdown. Anything that does not parse as a known bucket is kept
/// verbatim as `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum ComplexityLevel {
    Constant,
    Logarithmic,
    Linear,
    Linearithmic,
    /// `O(n^k)` with `k >= 2`.
    Polynomial(u32),
    Exponential,
    Unknown(String),
}

impl ComplexityLevel {
    /// `O(n^degree)`, folding degrees below 2 onto `O(1)` / `O(n)`.
    pub fn polynomial(degree: u32) -> Self {
        match degree {
            0 => ComplexityLevel::Constant,
            1 => ComplexityLevel::Linear,
            k => ComplexityLevel::Polynomial(k),
        }
    }

    /// Position in the fixed sequence
    /// `O(1) < O(log n) < O(n) < O(n log n) < O(n^2) < O(2^n)`.
    ///
    /// Levels outside that sequence (`O(n^3)` and higher polynomials as well
    /// as `Unknown`) have no rank.
    pub fn rank(&self) -> Option<u8> {
        match self {
            ComplexityLevel::Constant => Some(0),
            ComplexityLevel::Logarithmic => Some(1),
            ComplexityLevel::Linear => Some(2),
            ComplexityLevel::Linearithmic => Some(3),
            ComplexityLevel::Polynomial(2) => Some(4),
            ComplexityLevel::Exponential => Some(5),
            ComplexityLevel::Polynomial(_) | ComplexityLevel::Unknown(_) => None,
        }
    }

    /// Compare two ranked levels; `None` when either side has no rank.
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        Some(self.rank()?.cmp(&other.rank()?))
    }

    /// True for `O(n^k)` with `k >= 2`.
    pub fn is_polynomial(&self) -> bool {
        matches!(self, ComplexityLevel::Polynomial(k) if *k >= 2)
    }
}

impl fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComplexityLevel::Constant => write!(f, "O(1)"),
            ComplexityLevel::Logarithmic => write!(f, "O(log n)"),
            ComplexityLevel::Linear => write!(f, "O(n)"),
            ComplexityLevel::Linearithmic => write!(f, "O(n log n)"),
            ComplexityLevel::Polynomial(k) => write!(f, "O(n^{k})"),
            ComplexityLevel::Exponential => write!(f, "O(2^n)"),
            ComplexityLevel::Unknown(raw) => write!(f, "{raw}"),
        }
    }
}

impl FromStr for ComplexityLevel {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();

        let level = match compact.as_str() {
            "o(1)" => ComplexityLevel::Constant,
            "o(logn)" => ComplexityLevel::Logarithmic,
            "o(n)" => ComplexityLevel::Linear,
            "o(nlogn)" => ComplexityLevel::Linearithmic,
            "o(2^n)" => ComplexityLevel::Exponential,
            other => match other
                .strip_prefix("o(n^")
                .and_then(|rest| rest.strip_suffix(')'))
                .and_then(|k| k.parse::<u32>().ok())
            {
                Some(k) if k >= 2 => ComplexityLevel::Polynomial(k),
                _ => ComplexityLevel::Unknown(s.trim().to_string()),
            },
        };
        Ok(level)
    }
}

impl From<String> for ComplexityLevel {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(level) => level,
            Err(never) => match never {},
        }
    }
}

impl From<ComplexityLevel> for String {
    fn from(value: ComplexityLevel) -> Self {
        value.to_string()
    }
}

/// A complexity level plus the reason it was chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexityClass {
    pub level: ComplexityLevel,
    pub explanation: String,
}

impl ComplexityClass {
    pub fn new(level: ComplexityLevel, explanation: impl Into<String>) -> Self {
        Self {
            level,
            explanation: explanation.into(),
        }
    }
}

/// Time and space estimates for one source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexityEstimate {
    pub time: ComplexityClass,
    pub space: ComplexityClass,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CyclomaticTier {
    Low,
    Medium,
    High,
}

impl CyclomaticTier {
    pub fn from_value(value: usize) -> Self {
        if value <= CYCLOMATIC_LOW_MAX {
            CyclomaticTier::Low
        } else if value <= CYCLOMATIC_MEDIUM_MAX {
            CyclomaticTier::Medium
        } else {
            CyclomaticTier::High
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CyclomaticTier::Low => "low",
            CyclomaticTier::Medium => "medium",
            CyclomaticTier::High => "high",
        }
    }
}

impl fmt::Display for CyclomaticTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CyclomaticScore {
    /// Always at least 1 (one linear path).
    pub value: usize,
    pub tier: CyclomaticTier,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternMatch {
    pub name: String,
    /// Fraction of the pattern's indicator tokens present, in `[0, 1]`.
    pub score: f64,
    pub description: String,
}

/// Overall code-quality verdict from a `QualityScorer`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityAssessment {
    /// Quality in `[0, 1]`.
    pub score: f64,
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub schema_version: u32,
    pub generated_at_ms: u128,
    pub language: String,
    pub complexity: ComplexityEstimate,
    pub cyclomatic: CyclomaticScore,
    /// Matches in catalog order.
    pub patterns: Vec<PatternMatch>,
    pub quality: QualityAssessment,
    pub suggestions: Vec<String>,
}

/// Learner-facing summary of a reference solution's report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemExplanation {
    /// Leading technique (if any) plus the time and space classes.
    pub approach: String,
    /// Descriptions of every matched technique, in catalog order.
    pub key_concepts: Vec<String>,
    pub optimization_tips: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Better,
    Same,
    Worse,
    Unknown,
}

impl Verdict {
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Better => "better",
            Verdict::Same => "same",
            Verdict::Worse => "worse",
            Verdict::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rendering format for reports and catalog listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Md,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "md" | "markdown" => Ok(OutputFormat::Md),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format `{other}` (expected md or json)")),
        }
    }
}

/// One dimension (time or space) of a learner-vs-reference comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexityComparison {
    pub user: ComplexityClass,
    pub optimal: ComplexityClass,
    pub verdict: Verdict,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub schema_version: u32,
    pub generated_at_ms: u128,
    pub language: String,
    pub time: ComplexityComparison,
    pub space: ComplexityComparison,
    pub suggestions: Vec<String>,
    pub user: AnalysisReport,
    pub optimal: AnalysisReport,
}
