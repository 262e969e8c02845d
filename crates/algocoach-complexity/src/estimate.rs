//! Time and space estimation as explicit, ordered rule tables.
//!
//! Each table is evaluated top to bottom and the first rule that returns a
//! class wins. The last rule of each table always fires.

use algocoach_scan::{StructuralFacts, scan};
use algocoach_types::{ComplexityClass, ComplexityEstimate, ComplexityLevel};
use tracing::debug;

/// A time-complexity rule: `None` passes to the next rule.
#[derive(Debug, Clone, Copy)]
pub struct TimeRule {
    pub name: &'static str,
    pub apply: fn(&StructuralFacts) -> Option<ComplexityClass>,
}

/// A space-complexity rule: `None` passes to the next rule.
#[derive(Debug, Clone, Copy)]
pub struct SpaceRule {
    pub name: &'static str,
    pub apply: fn(&StructuralFacts) -> Option<ComplexityClass>,
}

pub const TIME_RULES: &[TimeRule] = &[
    TimeRule {
        name: "binary-search",
        apply: binary_search_time,
    },
    TimeRule {
        name: "nested-loops",
        apply: nested_loop_time,
    },
    TimeRule {
        name: "single-loop",
        apply: single_loop_time,
    },
    TimeRule {
        name: "constant",
        apply: constant_time,
    },
];

pub const SPACE_RULES: &[SpaceRule] = &[
    SpaceRule {
        name: "recursion",
        apply: recursion_space,
    },
    SpaceRule {
        name: "allocation",
        apply: allocation_space,
    },
    SpaceRule {
        name: "constant",
        apply: constant_space,
    },
];

fn binary_search_time(facts: &StructuralFacts) -> Option<ComplexityClass> {
    facts.has_binary_search_indices.then(|| {
        ComplexityClass::new(
            ComplexityLevel::Logarithmic,
            "Logarithmic time complexity (likely binary search)",
        )
    })
}

fn nested_loop_time(facts: &StructuralFacts) -> Option<ComplexityClass> {
    if facts.loop_nesting_depth == 0 {
        return None;
    }
    let loops = facts.loop_nesting_depth.saturating_add(1);
    let degree = u32::try_from(loops).unwrap_or(u32::MAX);
    Some(ComplexityClass::new(
        ComplexityLevel::polynomial(degree),
        format!("{loops} nested loops detected"),
    ))
}

fn single_loop_time(facts: &StructuralFacts) -> Option<ComplexityClass> {
    facts.has_loop().then(|| {
        ComplexityClass::new(
            ComplexityLevel::Linear,
            "Linear time complexity with single loop",
        )
    })
}

fn constant_time(_: &StructuralFacts) -> Option<ComplexityClass> {
    Some(ComplexityClass::new(
        ComplexityLevel::Constant,
        "Constant time complexity",
    ))
}

fn recursion_space(facts: &StructuralFacts) -> Option<ComplexityClass> {
    facts.has_recursion().then(|| {
        ComplexityClass::new(
            ComplexityLevel::Linear,
            "Linear space complexity due to recursion",
        )
    })
}

fn allocation_space(facts: &StructuralFacts) -> Option<ComplexityClass> {
    facts.has_allocation().then(|| {
        ComplexityClass::new(
            ComplexityLevel::Linear,
            "Linear space complexity due to array/list usage",
        )
    })
}

fn constant_space(_: &StructuralFacts) -> Option<ComplexityClass> {
    Some(ComplexityClass::new(
        ComplexityLevel::Constant,
        "Constant space complexity",
    ))
}

pub fn estimate_time(facts: &StructuralFacts) -> ComplexityClass {
    TIME_RULES
        .iter()
        .find_map(|rule| {
            let class = (rule.apply)(facts)?;
            debug!(rule = rule.name, level = %class.level, "time rule fired");
            Some(class)
        })
        .unwrap_or_else(|| {
            ComplexityClass::new(ComplexityLevel::Constant, "Constant time complexity")
        })
}

pub fn estimate_space(facts: &StructuralFacts) -> ComplexityClass {
    SPACE_RULES
        .iter()
        .find_map(|rule| {
            let class = (rule.apply)(facts)?;
            debug!(rule = rule.name, level = %class.level, "space rule fired");
            Some(class)
        })
        .unwrap_or_else(|| {
            ComplexityClass::new(ComplexityLevel::Constant, "Constant space complexity")
        })
}

/// Estimate time and space classes from already-scanned facts.
pub fn estimate(facts: &StructuralFacts) -> ComplexityEstimate {
    ComplexityEstimate {
        time: estimate_time(facts),
        space: estimate_space(facts),
    }
}

/// Scan `text` and estimate its classes.
///
/// # Example
/// ```
/// use algocoach_complexity::estimate_text;
///
/// let est = estimate_text("for (const a of xs) { for (const b of xs) { n++; } }");
/// assert_eq!(est.time.level.to_string(), "O(n^2)");
/// assert_eq!(est.space.level.to_string(), "O(1)");
/// ```
pub fn estimate_text(text: &str) -> ComplexityEstimate {
    estimate(&scan(text))
}
