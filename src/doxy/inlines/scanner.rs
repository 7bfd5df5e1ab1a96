//! Character-level scanner for markdown delimiters.
//!
//! Inline code gets a pass of its own: a backtick opens a span wherever
//! another backtick follows on the same line with at least one character
//! in between, whatever the neighbors are. Each emphasis spelling then
//! gets a left-to-right pass where a span opens at a delimiter run whose
//! left neighbor is neither alphanumeric nor the delimiter character and
//! whose right neighbor is neither whitespace nor the delimiter character,
//! and closes at the nearest run satisfying the mirrored test on the same
//! line. Emphasis runs that fail both tests are plain text, which is what
//! keeps `snake_case` and `a * b` untouched.

use std::ops::Range;

use super::{MarkdownKind, MarkdownSpan};

/// Emphasis delimiter passes: the marker character, its run length, and
/// the kind of span it delimits.
const PASSES: [(char, usize, MarkdownKind); 5] = [
    ('*', 2, MarkdownKind::Bold),
    ('_', 2, MarkdownKind::Bold),
    ('~', 2, MarkdownKind::Strikethrough),
    ('*', 1, MarkdownKind::Italic),
    ('_', 1, MarkdownKind::Italic),
];

/// Finds every well-delimited span in `text[window]`.
///
/// `window` must lie on character boundaries. Returned ranges are absolute
/// within `text`, include their delimiters, and are sorted by start. Spans
/// of different kinds may overlap each other; no arbitration happens here.
pub fn scan_markdown_spans(text: &str, window: Range<usize>) -> Vec<MarkdownSpan> {
    let slice = &text[window.clone()];
    let mut spans = Vec::new();
    scan_code(slice, window.start, &mut spans);
    for (mark, count, kind) in PASSES {
        scan_one(slice, window.start, mark, count, kind, &mut spans);
    }
    spans.sort_by_key(|s| (s.range.start, s.range.end));
    spans
}

/// Backtick pass. Unlike emphasis, code spans put no constraint on their
/// neighbors or contents beyond the same-line, non-empty rule.
fn scan_code(slice: &str, base: usize, out: &mut Vec<MarkdownSpan>) {
    let mut pos = 0;
    while pos < slice.len() {
        let Some(found) = slice[pos..].find('`') else {
            break;
        };
        let open = pos + found;
        match code_closer(slice, open + 1) {
            Some(close) if close > open + 1 => {
                out.push(MarkdownSpan {
                    range: base + open..base + close + 1,
                    kind: MarkdownKind::InlineCode,
                });
                pos = close + 1;
            }
            // An empty pair leaves its second backtick free to open.
            _ => pos = open + 1,
        }
    }
}

/// Nearest backtick on the same line, starting at `from`.
fn code_closer(slice: &str, from: usize) -> Option<usize> {
    let line_end = slice[from..]
        .find(['\r', '\n'])
        .map_or(slice.len(), |i| from + i);
    slice[from..line_end].find('`').map(|i| from + i)
}

fn scan_one(
    slice: &str,
    base: usize,
    mark: char,
    count: usize,
    kind: MarkdownKind,
    out: &mut Vec<MarkdownSpan>,
) {
    let needle: String = mark.to_string().repeat(count);
    let d = needle.len();
    let mut pos = 0;
    while pos < slice.len() {
        let Some(found) = slice[pos..].find(&needle) else {
            break;
        };
        let open = pos + found;
        if !is_opener(slice, open, d, mark) {
            pos = open + 1;
            continue;
        }
        match find_closer(slice, open + d, &needle, mark) {
            Some(close) => {
                out.push(MarkdownSpan {
                    range: base + open..base + close + d,
                    kind,
                });
                pos = close + d;
            }
            None => pos = open + d,
        }
    }
}

/// Nearest valid closing run on the same line, starting at `from`.
fn find_closer(slice: &str, from: usize, needle: &str, mark: char) -> Option<usize> {
    let line_end = slice[from..]
        .find(['\r', '\n'])
        .map_or(slice.len(), |i| from + i);
    let mut pos = from;
    while pos < line_end {
        let at = pos + slice[pos..line_end].find(needle)?;
        if is_closer(slice, at, needle.len(), mark) {
            return Some(at);
        }
        pos = at + 1;
    }
    None
}

fn is_opener(slice: &str, at: usize, d: usize, mark: char) -> bool {
    let prev = slice[..at].chars().next_back();
    let next = slice[at + d..].chars().next();
    !is_word(prev) && prev != Some(mark) && !is_space(next) && next != Some(mark)
}

fn is_closer(slice: &str, at: usize, d: usize, mark: char) -> bool {
    let prev = slice[..at].chars().next_back();
    let next = slice[at + d..].chars().next();
    !is_space(prev) && prev != Some(mark) && !is_word(next) && next != Some(mark)
}

/// Text boundaries count as non-word for the opener side.
fn is_word(c: Option<char>) -> bool {
    c.map_or(false, char::is_alphanumeric)
}

/// Text boundaries count as whitespace for the closer side.
fn is_space(c: Option<char>) -> bool {
    c.map_or(true, char::is_whitespace)
}
