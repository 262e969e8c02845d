//! Self-referential function detection.
//!
//! Best-effort only: a function counts as recursive when its body mentions
//! its own literal name followed by `(`. Calls through aliases, mutual
//! recursion and shadowed names are not tracked.

use std::collections::BTreeSet;
use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::blocks::{line_header_body, matching_close, skip_ws};
use crate::tokens::token_positions;

// `function name(`, `def name(`, `fn name<T>(`, `func name(`
static KEYWORD_DEF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:function\*?|def|fn|func)\s+([A-Za-z_$][\w$]*)\s*(?:<[^<>{}()]*>)?\s*\(")
        .expect("valid regex literal")
});

// Go methods: `func (s *Solver) name(`
static GO_METHOD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bfunc\s*\([^)]*\)\s*([A-Za-z_]\w*)\s*\(").expect("valid regex literal")
});

// `const name = (`, `let name = async (`, `var name = function (`
static BINDING_DEF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:const|let|var)\s+([A-Za-z_$][\w$]*)\s*=\s*(?:async\s+)?(?:function\b\s*\*?\s*[A-Za-z_$]*\s*)?\(",
    )
    .expect("valid regex literal")
});

// `const name = n =>`
static ARROW_DEF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:const|let|var)\s+([A-Za-z_$][\w$]*)\s*=\s*(?:async\s+)?[A-Za-z_$][\w$]*\s*=>")
        .expect("valid regex literal")
});

// C-family and class methods: `int fib(int n) {`, `static long go(...) {`, `solve(n) {`
static TYPED_DEF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*((?:[A-Za-z_$][\w$<>\[\],.:*&?]*[ \t]+)*)[*&]*([A-Za-z_$][\w$]*)[ \t]*\(")
        .expect("valid regex literal")
});

/// Words that can precede `name(` without it being a definition.
const STATEMENT_WORDS: &[&str] = &[
    "if", "else", "elif", "for", "foreach", "while", "do", "switch", "case", "catch", "return",
    "new", "throw", "await", "yield", "delete", "typeof", "sizeof", "with", "match", "in", "of",
    "and", "or", "not", "print", "echo", "function", "fn", "func", "def", "lambda", "assert",
];

#[derive(Debug, Clone, PartialEq, Eq)]
struct Definition {
    name: String,
    body: Range<usize>,
}

fn params_then_body(bytes: &[u8], open_paren: usize) -> Range<usize> {
    line_header_body(bytes, matching_close(bytes, open_paren))
}

/// Index of the `{` opening a typed definition's body, if the text after the
/// parameter list looks like `) const {`, `) throws E {` or `): T {`.
fn brace_after_signature(bytes: &[u8], from: usize) -> Option<usize> {
    let mut newlines = 0;
    for (offset, &b) in bytes[from..].iter().enumerate() {
        match b {
            b'{' => return Some(from + offset),
            b'\n' => {
                newlines += 1;
                if newlines > 1 {
                    return None;
                }
            }
            b if b.is_ascii_whitespace() => {}
            b if b.is_ascii_alphanumeric() => {}
            b'_' | b'$' | b',' | b'.' | b':' | b'<' | b'>' | b'-' | b'&' | b'*' | b'[' | b']'
            | b'?' => {}
            _ => return None,
        }
    }
    None
}

fn definitions(text: &str) -> Vec<Definition> {
    let bytes = text.as_bytes();
    let mut defs = Vec::new();

    for re in [&*KEYWORD_DEF, &*GO_METHOD, &*BINDING_DEF] {
        for caps in re.captures_iter(text) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            defs.push(Definition {
                name: name.as_str().to_string(),
                body: params_then_body(bytes, whole.end() - 1),
            });
        }
    }

    for caps in ARROW_DEF.captures_iter(text) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        defs.push(Definition {
            name: name.as_str().to_string(),
            body: line_header_body(bytes, whole.end()),
        });
    }

    for caps in TYPED_DEF.captures_iter(text) {
        let (Some(whole), Some(prefix), Some(name)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            continue;
        };
        let is_statement = STATEMENT_WORDS.contains(&name.as_str())
            || prefix
                .as_str()
                .split_whitespace()
                .any(|word| STATEMENT_WORDS.contains(&word));
        if is_statement {
            continue;
        }
        let close = matching_close(bytes, whole.end() - 1);
        if let Some(open) = brace_after_signature(bytes, close) {
            defs.push(Definition {
                name: name.as_str().to_string(),
                body: open..matching_close(bytes, open),
            });
        }
    }

    defs
}

fn calls_itself(text: &str, def: &Definition) -> bool {
    let body = &text[def.body.clone()];
    let bytes = body.as_bytes();
    token_positions(body, &def.name).any(|pos| {
        let next = skip_ws(bytes, pos + def.name.len());
        bytes.get(next) == Some(&b'(')
    })
}

/// Names of functions whose body calls the function by its own name.
pub fn recursive_functions(text: &str) -> BTreeSet<String> {
    definitions(text)
        .into_iter()
        .filter(|def| calls_itself(text, def))
        .map(|def| def.name)
        .collect()
}
