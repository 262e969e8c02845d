//! Lexical block boundaries.
//!
//! Finds where the body of a construct (loop, function) ends without parsing:
//! brace blocks, single statements terminated by `;`, and indentation blocks
//! opened by a header line ending in `:`. String literals and C-style comments
//! are skipped while matching brackets.

use std::ops::Range;

/// First index at or after `i` that is not ASCII whitespace.
pub(crate) fn skip_ws(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    i
}

/// Last non-whitespace byte strictly before `i`.
pub(crate) fn prev_non_ws(bytes: &[u8], i: usize) -> Option<u8> {
    bytes[..i]
        .iter()
        .rev()
        .find(|b| !b.is_ascii_whitespace())
        .copied()
}

fn skip_string(bytes: &[u8], start: usize) -> Option<usize> {
    let quote = bytes[start];
    if quote == b'\'' && start > 0 {
        // Rust lifetimes (`&'a`, `<'a>`) and apostrophes inside words.
        let prev = bytes[start - 1];
        if prev == b'&' || prev == b'<' || prev.is_ascii_alphanumeric() {
            return None;
        }
    }
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => {
                i += 2;
                continue;
            }
            b'\n' if quote != b'`' => return None,
            b if b == quote => return Some(i + 1),
            _ => {}
        }
        i += 1;
    }
    None
}

fn skip_comment(bytes: &[u8], start: usize) -> Option<usize> {
    match bytes.get(start + 1) {
        Some(b'/') => Some(
            bytes[start..]
                .iter()
                .position(|&b| b == b'\n')
                .map_or(bytes.len(), |p| start + p),
        ),
        Some(b'*') => Some(
            bytes[start + 2..]
                .windows(2)
                .position(|w| w == b"*/")
                .map_or(bytes.len(), |p| start + 2 + p + 2),
        ),
        _ => None,
    }
}

/// Index past a string literal or comment starting at `i`, if one starts there.
pub(crate) fn skip_trivia(bytes: &[u8], i: usize) -> Option<usize> {
    match bytes[i] {
        b'"' | b'\'' | b'`' => skip_string(bytes, i),
        b'/' => skip_comment(bytes, i),
        _ => None,
    }
}

/// Index just past the bracket that closes the one at `open`.
///
/// Unbalanced input runs to the end of the text.
pub(crate) fn matching_close(bytes: &[u8], open: usize) -> usize {
    let (opener, closer) = match bytes.get(open) {
        Some(b'(') => (b'(', b')'),
        Some(b'[') => (b'[', b']'),
        Some(b'{') => (b'{', b'}'),
        _ => return (open + 1).min(bytes.len()),
    };

    let mut depth = 0usize;
    let mut i = open;
    while i < bytes.len() {
        if let Some(next) = skip_trivia(bytes, i) {
            i = next;
            continue;
        }
        let b = bytes[i];
        if b == opener {
            depth += 1;
        } else if b == closer {
            depth -= 1;
            if depth == 0 {
                return i + 1;
            }
        }
        i += 1;
    }
    bytes.len()
}

fn line_start(bytes: &[u8], pos: usize) -> usize {
    bytes[..pos]
        .iter()
        .rposition(|&b| b == b'\n')
        .map_or(0, |p| p + 1)
}

fn indent_width(line: &[u8]) -> usize {
    line.iter()
        .take_while(|&&b| b == b' ' || b == b'\t')
        .count()
}

/// True when the line ending at `newline` ends with `:` (ignoring a trailing `#` comment).
fn opens_indented_block(bytes: &[u8], newline: usize) -> bool {
    let line = &bytes[line_start(bytes, newline)..newline];
    let ends_with_colon = |code: &[u8]| code.trim_ascii_end().ends_with(b":");
    ends_with_colon(line)
        || line
            .iter()
            .rposition(|&b| b == b'#')
            .is_some_and(|hash| ends_with_colon(&line[..hash]))
}

/// Lines after `newline` that are indented deeper than the header line.
fn indented_block(bytes: &[u8], newline: usize) -> Range<usize> {
    let header_indent = indent_width(&bytes[line_start(bytes, newline)..newline]);
    let body_start = newline + 1;
    let mut end = body_start;
    let mut pos = body_start;

    while pos < bytes.len() {
        let line_end = bytes[pos..]
            .iter()
            .position(|&b| b == b'\n')
            .map_or(bytes.len(), |p| pos + p);
        let line = &bytes[pos..line_end];
        if !line.iter().all(u8::is_ascii_whitespace) {
            if indent_width(line) <= header_indent {
                break;
            }
            end = line_end;
        }
        pos = line_end + 1;
    }

    body_start..end
}

/// Body of a construct whose header runs to the end of its line:
/// `for x in xs:`, `for i in 0..n {`, `def f(n) -> int:`.
///
/// Without a brace or a trailing `:` the body is the rest of the line.
pub(crate) fn line_header_body(bytes: &[u8], from: usize) -> Range<usize> {
    let mut i = from;
    while i < bytes.len() {
        if let Some(next) = skip_trivia(bytes, i) {
            i = next;
            continue;
        }
        match bytes[i] {
            b'{' => return i..matching_close(bytes, i),
            b'(' | b'[' => {
                i = matching_close(bytes, i);
                continue;
            }
            b'\n' if opens_indented_block(bytes, i) => return indented_block(bytes, i),
            b'\n' => return from..i,
            _ => {}
        }
        i += 1;
    }
    from..bytes.len()
}

/// Body following a parenthesized header such as `for (...)` or `while (...)`.
///
/// `from` is the index just past the closing parenthesis. The body is a brace
/// block, a single statement up to `;` (possibly spanning lines), or an
/// indentation block for `while (cond):`.
pub(crate) fn statement_body(bytes: &[u8], from: usize) -> Range<usize> {
    let next = skip_ws(bytes, from);
    if bytes.get(next) == Some(&b':') {
        return line_header_body(bytes, next + 1);
    }

    let mut i = from;
    while i < bytes.len() {
        if let Some(skip) = skip_trivia(bytes, i) {
            i = skip;
            continue;
        }
        match bytes[i] {
            b'{' => return i..matching_close(bytes, i),
            b';' => return from..i + 1,
            b'(' | b'[' => {
                i = matching_close(bytes, i);
                continue;
            }
            b'\n' if opens_indented_block(bytes, i) => return indented_block(bytes, i),
            _ => {}
        }
        i += 1;
    }
    from..bytes.len()
}
