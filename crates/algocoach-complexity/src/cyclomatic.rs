//! Heuristic cyclomatic complexity over a whole source text.
//!
//! Base complexity is 1, plus one per decision point:
//!
//! - `if`, `else`, `for`, `while`, `do`, `switch`, `case`, `catch` as whole
//!   tokens (so `else if` counts twice)
//! - `&&`, `||`, `??`
//! - ternary `?`
//!
//! Keywords in strings and comments are counted like code.

use algocoach_scan::count_token;
use algocoach_types::{CyclomaticScore, CyclomaticTier};
use tracing::trace;

pub const DECISION_KEYWORDS: [&str; 8] = [
    "if", "else", "for", "while", "do", "switch", "case", "catch",
];

pub const DECISION_OPERATORS: [&str; 3] = ["&&", "||", "??"];

/// Fixed sentence for each tier.
pub fn tier_explanation(tier: CyclomaticTier) -> &'static str {
    match tier {
        CyclomaticTier::Low => "Code is simple and easy to maintain",
        CyclomaticTier::Medium => "Code has moderate complexity, consider refactoring some parts",
        CyclomaticTier::High => "Code is complex, consider breaking it into smaller functions",
    }
}

/// Count ternary `?` operators.
///
/// Excluded: either half of `??`, optional chaining `?.`, format specifiers
/// (`{:?}`, `{:#?}`), and a `?` whose next non-blank character on the line
/// closes an expression or a type (`)`, `;`, `,`, `}`, `>`, `:`) or is
/// missing. That last rule also drops Rust's try operator and TypeScript
/// optional members.
pub fn count_ternaries(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut count = 0;

    for (i, &b) in bytes.iter().enumerate() {
        if b != b'?' {
            continue;
        }
        let prev = i.checked_sub(1).map(|p| bytes[p]);
        if matches!(prev, Some(b'?' | b':' | b'#')) {
            continue;
        }
        if bytes.get(i + 1) == Some(&b'?') || bytes.get(i + 1) == Some(&b'.') {
            continue;
        }
        let next = bytes[i + 1..]
            .iter()
            .copied()
            .find(|c| *c != b' ' && *c != b'\t' && *c != b'\r');
        match next {
            None | Some(b'\n' | b')' | b';' | b',' | b'}' | b'>' | b':') => {}
            Some(_) => count += 1,
        }
    }

    count
}

fn count_operator(text: &str, op: &str) -> usize {
    text.matches(op).count()
}

/// Count decision points (everything except the base 1).
pub fn decision_points(text: &str) -> usize {
    let keywords: usize = DECISION_KEYWORDS
        .iter()
        .map(|kw| count_token(text, kw))
        .sum();
    let operators: usize = DECISION_OPERATORS
        .iter()
        .map(|op| count_operator(text, op))
        .sum();
    let ternaries = count_ternaries(text);
    trace!(keywords, operators, ternaries, "decision points");
    keywords + operators + ternaries
}

/// Score `text`: value, tier and the tier's fixed explanation.
///
/// # Example
/// ```
/// use algocoach_complexity::calculate;
/// use algocoach_types::CyclomaticTier;
///
/// let score = calculate("if (a && b) { x(); } else { y(); }");
/// assert_eq!(score.value, 4);
/// assert_eq!(score.tier, CyclomaticTier::Low);
/// ```
pub fn calculate(text: &str) -> CyclomaticScore {
    let value = 1 + decision_points(text);
    let tier = CyclomaticTier::from_value(value);
    CyclomaticScore {
        value,
        tier,
        explanation: tier_explanation(tier).to_string(),
    }
}
