//! Loop construct detection and textual nesting.

use std::ops::Range;

use crate::blocks::{
    line_header_body, matching_close, prev_non_ws, skip_ws, statement_body,
};
use crate::tokens::token_positions;

/// Keywords that introduce a loop construct.
pub const LOOP_KEYWORDS: [&str; 4] = ["for", "foreach", "while", "do"];

/// A loop keyword together with the text its body covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopSpan {
    pub keyword: &'static str,
    /// From the keyword to the end of the body.
    pub span: Range<usize>,
}

impl LoopSpan {
    fn contains(&self, other: &LoopSpan) -> bool {
        self.span.start < other.span.start && other.span.end <= self.span.end
    }
}

/// Find every loop construct, ordered by position.
pub fn find_loops(text: &str) -> Vec<LoopSpan> {
    let bytes = text.as_bytes();
    let mut loops = Vec::new();

    for keyword in LOOP_KEYWORDS {
        for start in token_positions(text, keyword) {
            // `obj.for`, `builder.do(...)`
            if start > 0 && bytes[start - 1] == b'.' {
                continue;
            }
            let after = start + keyword.len();
            let next = skip_ws(bytes, after);

            let body = match (keyword, bytes.get(next)) {
                ("do", Some(b'{')) => next..matching_close(bytes, next),
                ("do", _) => continue,
                (_, Some(b'(')) => {
                    let body = statement_body(bytes, matching_close(bytes, next));
                    if keyword == "while" && is_do_while_tail(bytes, start, &body) {
                        continue;
                    }
                    body
                }
                _ => line_header_body(bytes, after),
            };

            loops.push(LoopSpan {
                keyword,
                span: start..body.end.max(after),
            });
        }
    }

    loops.sort_by_key(|l| l.span.start);
    loops
}

/// `} while (cond);` closing a `do { ... }` block.
fn is_do_while_tail(bytes: &[u8], start: usize, body: &Range<usize>) -> bool {
    prev_non_ws(bytes, start) == Some(b'}') && bytes[body.clone()].trim_ascii() == b";"
}

/// Number of loop constructs whose body textually contains another loop
/// construct.
///
/// Zero when no loop contains another. A chain of three nested loops gives 2,
/// and so do two separate nested pairs.
pub fn nesting_depth(loops: &[LoopSpan]) -> usize {
    loops
        .iter()
        .filter(|outer| loops.iter().any(|inner| outer.contains(inner)))
        .count()
}
