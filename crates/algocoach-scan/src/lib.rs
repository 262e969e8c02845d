//! # algocoach-scan
//!
//! **Tier 1 (Lexical Signals)**
//!
//! Structural scanning of raw source text. Everything here is lexical: no
//! parsing, no language dispatch, no errors. Missing signals are reported as
//! zero or `false`.
//!
//! ## Signals
//!
//! - Loop constructs (`for`, `foreach`, `while`, `do`) and how many of them
//!   contain another loop
//! - Binary-search index names (`mid`, `left`, `right` together)
//! - Array/list allocation idioms (`new Array`, `[]`, `vec![`, `ArrayList`, ...)
//! - Functions that call themselves by name
//!
//! ## Limitations
//!
//! Keywords inside strings and comments are counted like code, and loop
//! bodies are found with bracket/indentation heuristics. Downstream
//! components treat these facts as advisory.

mod blocks;
pub mod loops;
pub mod recursion;
pub mod tokens;

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

pub use tokens::{contains_token, count_token, word_tokens};

/// Index names that together suggest a binary search.
pub const BINARY_SEARCH_INDICES: [&str; 3] = ["mid", "left", "right"];

static ALLOCATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"\bnew\s+(?:Array\b|Map\b|Set\b|[A-Za-z_]\w*\s*\[)",
        r"|\[\s*\]",
        r"|\[[^\[\]\n]*\]\s*\*\s*[\w(]",
        r"|\bvec!\s*\[",
        r"|\bVec::(?:new|with_capacity)\b",
        r"|\b(?:ArrayList|LinkedList|ArrayDeque|HashMap|HashSet|TreeMap|vector|deque|defaultdict)\b",
        r"|\b(?:dict|list|set)\(\)",
    ))
    .expect("valid regex literal")
});

/// Lexical facts about one source text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuralFacts {
    /// Number of loop constructs.
    pub loop_count: usize,
    /// Number of loop constructs whose body contains another loop construct.
    pub loop_nesting_depth: usize,
    /// `mid`, `left` and `right` all appear as whole tokens.
    pub has_binary_search_indices: bool,
    /// Number of array/list allocation idioms.
    pub allocation_count: usize,
    /// Functions whose body calls them by name, sorted.
    pub recursive_functions: Vec<String>,
}

impl StructuralFacts {
    pub fn has_loop(&self) -> bool {
        self.loop_count > 0
    }

    pub fn has_allocation(&self) -> bool {
        self.allocation_count > 0
    }

    pub fn has_recursion(&self) -> bool {
        !self.recursive_functions.is_empty()
    }
}

/// Count array/list allocation idioms.
pub fn count_allocations(text: &str) -> usize {
    ALLOCATION.find_iter(text).count()
}

/// True when every binary-search index name appears as a whole token
/// (case-insensitive).
pub fn has_binary_search_indices(text: &str) -> bool {
    let words = word_tokens(text);
    BINARY_SEARCH_INDICES.iter().all(|w| words.contains(*w))
}

/// Scan `text` for every structural signal.
///
/// # Example
/// ```
/// use algocoach_scan::scan;
///
/// let facts = scan("for (let i = 0; i < n; i++) { for (let j = 0; j < n; j++) { c++; } }");
/// assert_eq!(facts.loop_count, 2);
/// assert_eq!(facts.loop_nesting_depth, 1);
/// assert!(!facts.has_allocation());
/// ```
pub fn scan(text: &str) -> StructuralFacts {
    let found = loops::find_loops(text);
    StructuralFacts {
        loop_count: found.len(),
        loop_nesting_depth: loops::nesting_depth(&found),
        has_binary_search_indices: has_binary_search_indices(text),
        allocation_count: count_allocations(text),
        recursive_functions: recursion::recursive_functions(text).into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_has_no_signals() {
        assert_eq!(scan(""), StructuralFacts::default());
        assert_eq!(scan("   \n\t"), StructuralFacts::default());
    }

    #[test]
    fn allocation_idioms() {
        let cases = [
            ("const a = new Array(n);", 1),
            ("let seen = [];", 1),
            ("List<Integer> xs = new ArrayList<>();", 1),
            ("std::vector<int> v(n);", 1),
            ("let mut v = Vec::new();", 1),
            ("let v = vec![0; n];", 1),
            ("int[] dp = new int[n + 1];", 2),
            ("dp = [0] * (n + 1)", 1),
            ("memo = dict()", 1),
            ("const m = new Map(); const s = new Set();", 2),
            ("return a + b;", 0),
            ("x = arr[i]", 0),
        ];
        for (text, expected) in cases {
            assert_eq!(count_allocations(text), expected, "{text}");
        }
    }

    #[test]
    fn binary_search_needs_all_three_whole_tokens() {
        assert!(has_binary_search_indices(
            "let left = 0, right = n - 1; let mid = (left + right) >> 1;"
        ));
        assert!(has_binary_search_indices("MID LEFT RIGHT"));
        assert!(!has_binary_search_indices("let left = 0, right = n;"));
        assert!(!has_binary_search_indices("middle leftover righteous"));
    }

    #[test]
    fn recursion_feeds_facts() {
        let facts = scan("def f(n):\n    return f(n - 1) if n else 0\n");
        assert!(facts.has_recursion());
        assert_eq!(facts.recursive_functions, vec!["f".to_string()]);
    }

    #[test]
    fn while_loop_with_allocation() {
        let facts = scan("const out = new Array();\nwhile (i < n) { out.push(i); i++; }");
        assert_eq!(facts.loop_count, 1);
        assert_eq!(facts.loop_nesting_depth, 0);
        assert_eq!(facts.allocation_count, 1);
    }
}
