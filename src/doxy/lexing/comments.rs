//! Splits raw source text into comment spans.
//!
//! The splitter walks the [`RawToken`] stream with a three-state machine
//! (code, line comment, block comment). Comment text is never copied: each
//! span records byte ranges into the original buffer, one for the whole
//! comment including delimiters and one for the content the markup parser
//! should scan.

use std::fmt;
use std::ops::Range;

use logos::Logos;
use serde::{Deserialize, Serialize};

use super::tokens::RawToken;

/// The six recognized comment spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommentStyle {
    /// `// ...`
    Line,
    /// `/// ...`
    LineDoc,
    /// `//! ...`
    LineDocBang,
    /// `/* ... */`
    Block,
    /// `/** ... */`
    BlockDoc,
    /// `/*! ... */`
    BlockDocBang,
}

impl CommentStyle {
    /// The opening delimiter spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            CommentStyle::Line => "//",
            CommentStyle::LineDoc => "///",
            CommentStyle::LineDocBang => "//!",
            CommentStyle::Block => "/*",
            CommentStyle::BlockDoc => "/**",
            CommentStyle::BlockDocBang => "/*!",
        }
    }

    /// True for the three `//` spellings.
    pub fn is_line(self) -> bool {
        matches!(
            self,
            CommentStyle::Line | CommentStyle::LineDoc | CommentStyle::LineDocBang
        )
    }

    /// True for the three `/*` spellings.
    pub fn is_block(self) -> bool {
        !self.is_line()
    }

    /// True for the four documentation spellings (`///`, `//!`, `/**`, `/*!`).
    pub fn is_doc(self) -> bool {
        !matches!(self, CommentStyle::Line | CommentStyle::Block)
    }
}

impl fmt::Display for CommentStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One comment found in the source buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentSpan {
    /// Full comment range, delimiters included.
    pub range: Range<usize>,
    /// Range the markup parser scans: the comment body without the opening
    /// delimiter and, for terminated block comments, without the closing `*/`.
    pub content: Range<usize>,
    /// Which spelling opened this comment.
    pub style: CommentStyle,
}

impl CommentSpan {
    /// Full comment text, delimiters included.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.range.clone()]
    }

    /// The scannable body text.
    pub fn content_text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.content.clone()]
    }
}

enum State {
    Code,
    Line {
        start: usize,
        content_start: usize,
        style: CommentStyle,
        /// Consecutive `Backslash` tokens seen immediately before the
        /// current position; decides whether a `\<newline>` pair is an
        /// escaped backslash or a line continuation.
        backslashes: usize,
    },
    Block {
        start: usize,
        content_start: usize,
        style: CommentStyle,
    },
}

/// Finds every comment in `source`, in source order.
///
/// Line comments run to the end of the physical line, or further when the
/// line ends in an unescaped backslash. Block comments run to the first
/// `*/`; an unterminated block comment runs to the end of input. `/**/` is a
/// plain block comment (the second `*` belongs to the closer), `/***/` is a
/// doc block comment.
pub fn split_comments(source: &str) -> Vec<CommentSpan> {
    let mut spans = Vec::new();
    let mut state = State::Code;
    let mut lexer = RawToken::lexer(source);

    while let Some(result) = lexer.next() {
        let token = result.unwrap_or(RawToken::Text);
        let span = lexer.span();
        state = match state {
            State::Code => match token {
                RawToken::LineOpen => {
                    let (style, content_start) = line_style(source, span.end);
                    State::Line {
                        start: span.start,
                        content_start,
                        style,
                        backslashes: 0,
                    }
                }
                RawToken::BlockOpen => {
                    let (style, content_start) = block_style(source, span.end);
                    State::Block {
                        start: span.start,
                        content_start,
                        style,
                    }
                }
                _ => State::Code,
            },
            State::Line {
                start,
                content_start,
                style,
                backslashes,
            } => match token {
                RawToken::Newline => {
                    push_line(&mut spans, source, start, content_start, style, span.start);
                    State::Code
                }
                RawToken::Continuation if backslashes % 2 == 1 => {
                    // The continuation backslash is itself escaped; the
                    // comment ends at the newline, keeping the backslash.
                    push_line(&mut spans, source, start, content_start, style, span.start + 1);
                    State::Code
                }
                RawToken::Continuation => State::Line {
                    start,
                    content_start,
                    style,
                    backslashes: 0,
                },
                RawToken::Backslash => State::Line {
                    start,
                    content_start,
                    style,
                    backslashes: backslashes + 1,
                },
                _ => State::Line {
                    start,
                    content_start,
                    style,
                    backslashes: 0,
                },
            },
            State::Block {
                start,
                content_start,
                style,
            } => match token {
                RawToken::BlockClose => {
                    spans.push(CommentSpan {
                        range: start..span.end,
                        content: content_start.min(span.start)..span.start,
                        style,
                    });
                    State::Code
                }
                _ => State::Block {
                    start,
                    content_start,
                    style,
                },
            },
        };
    }

    let end = source.len();
    match state {
        State::Code => {}
        State::Line {
            start,
            content_start,
            style,
            ..
        } => push_line(&mut spans, source, start, content_start, style, end),
        State::Block {
            start,
            content_start,
            style,
        } => spans.push(CommentSpan {
            range: start..end,
            content: content_start.min(end)..end,
            style,
        }),
    }

    spans
}

fn push_line(
    spans: &mut Vec<CommentSpan>,
    _source: &str,
    start: usize,
    content_start: usize,
    style: CommentStyle,
    end: usize,
) {
    spans.push(CommentSpan {
        range: start..end,
        content: content_start.min(end)..end,
        style,
    });
}

/// Sub-style of a line comment, given the offset right after `//`.
fn line_style(source: &str, after: usize) -> (CommentStyle, usize) {
    match source.as_bytes().get(after) {
        Some(b'/') => (CommentStyle::LineDoc, after + 1),
        Some(b'!') => (CommentStyle::LineDocBang, after + 1),
        _ => (CommentStyle::Line, after),
    }
}

/// Sub-style of a block comment, given the offset right after `/*`.
///
/// A `*` that is immediately consumed by `*/` does not make the comment a
/// doc comment, so `/**/` stays plain.
fn block_style(source: &str, after: usize) -> (CommentStyle, usize) {
    let rest = &source[after.min(source.len())..];
    if rest.starts_with('*') && !rest.starts_with("*/") {
        (CommentStyle::BlockDoc, after + 1)
    } else if rest.starts_with('!') {
        (CommentStyle::BlockDocBang, after + 1)
    } else {
        (CommentStyle::Block, after)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn styles(source: &str) -> Vec<CommentStyle> {
        split_comments(source).into_iter().map(|s| s.style).collect()
    }

    #[test]
    fn recognizes_all_six_styles() {
        assert_eq!(styles("// a"), vec![CommentStyle::Line]);
        assert_eq!(styles("/// a"), vec![CommentStyle::LineDoc]);
        assert_eq!(styles("//! a"), vec![CommentStyle::LineDocBang]);
        assert_eq!(styles("/* a */"), vec![CommentStyle::Block]);
        assert_eq!(styles("/** a */"), vec![CommentStyle::BlockDoc]);
        assert_eq!(styles("/*! a */"), vec![CommentStyle::BlockDocBang]);
    }

    #[test]
    fn empty_block_is_plain_and_star_block_is_doc() {
        let spans = split_comments("/**/");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].style, CommentStyle::Block);
        assert_eq!(spans[0].range, 0..4);
        assert_eq!(spans[0].content, 2..2);

        let spans = split_comments("/***/");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].style, CommentStyle::BlockDoc);
        assert_eq!(spans[0].range, 0..5);
        assert_eq!(spans[0].content, 3..3);
    }

    #[test]
    fn line_comment_stops_at_newline() {
        let source = "int x; // trailing\nint y;";
        let spans = split_comments(source);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text(source), "// trailing");
        assert_eq!(spans[0].content_text(source), " trailing");
    }

    #[test]
    fn crlf_is_not_part_of_the_comment() {
        let source = "// one\r\n// two\r\n";
        let spans = split_comments(source);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].text(source), "// one");
        assert_eq!(spans[1].text(source), "// two");
    }

    #[test]
    fn backslash_continuation_extends_line_comment() {
        let source = "// first \\\nsecond\nint x;";
        let spans = split_comments(source);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text(source), "// first \\\nsecond");
    }

    #[test]
    fn escaped_backslash_does_not_continue() {
        let source = "// first \\\\\nsecond";
        let spans = split_comments(source);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text(source), "// first \\\\");
    }

    #[test]
    fn double_escape_then_backslash_continues() {
        let source = "// first \\\\\\\nsecond\nrest";
        let spans = split_comments(source);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text(source), "// first \\\\\\\nsecond");
    }

    #[test]
    fn block_comment_owns_inner_line_markers() {
        let source = "/* line one\n// not nested\nline three */ after";
        let spans = split_comments(source);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].style, CommentStyle::Block);
        assert!(spans[0].text(source).ends_with("*/"));
    }

    #[test]
    fn unterminated_block_runs_to_end_of_input() {
        let source = "/** open\nstill inside";
        let spans = split_comments(source);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].range, 0..source.len());
        assert_eq!(spans[0].content, 3..source.len());
    }

    #[test]
    fn slash_star_slash_is_unterminated() {
        let spans = split_comments("/*/");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].style, CommentStyle::Block);
        assert_eq!(spans[0].range, 0..3);
    }

    #[test]
    fn adjacent_blocks_split_into_separate_spans() {
        let source = "/**/ /***/ /*!*/";
        let spans = split_comments(source);
        let styles: Vec<_> = spans.iter().map(|s| s.style).collect();
        assert_eq!(
            styles,
            vec![
                CommentStyle::Block,
                CommentStyle::BlockDoc,
                CommentStyle::BlockDocBang
            ]
        );
        assert_eq!(spans[0].range, 0..4);
        assert_eq!(spans[1].range, 5..10);
        assert_eq!(spans[2].range, 11..16);
    }

    #[test]
    fn line_doc_swallows_block_open_on_same_line() {
        let source = "///*!*//**//***/";
        let spans = split_comments(source);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].style, CommentStyle::LineDoc);
        assert_eq!(spans[0].range, 0..source.len());
    }

    #[test]
    fn star_slash_inside_line_comment_is_text() {
        let source = "// ends with */\nint x;";
        let spans = split_comments(source);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text(source), "// ends with */");
    }

    #[test]
    fn code_between_comments_is_skipped() {
        let source = "int a; /* one */ int b; // two\nint c;";
        let spans = split_comments(source);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].text(source), "/* one */");
        assert_eq!(spans[1].text(source), "// two");
    }

    #[test]
    fn doc_line_prefix_offsets() {
        let source = "//! bang";
        let spans = split_comments(source);
        assert_eq!(spans[0].content, 3..source.len());
        assert_eq!(spans[0].content_text(source), " bang");
    }
}
