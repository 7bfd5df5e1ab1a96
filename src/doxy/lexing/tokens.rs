//! Raw token set for comment extraction.
//!
//! The lexer only needs to see comment delimiters, newlines, and backslash
//! line continuations; everything else is opaque text. Characters the token
//! set does not cover (a lone carriage return, stray bytes) surface as lexer
//! errors and are treated as plain text by the comment splitter.

use logos::Logos;

#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum RawToken {
    /// Start of a line comment.
    #[token("//")]
    LineOpen,

    /// Start of a block comment.
    #[token("/*")]
    BlockOpen,

    /// End of a block comment.
    #[token("*/")]
    BlockClose,

    /// Backslash immediately followed by a line break.
    #[regex(r"\\\r?\n")]
    Continuation,

    /// Line break without a preceding backslash.
    #[regex(r"\r?\n")]
    Newline,

    /// Backslash not followed by a line break.
    #[token("\\")]
    Backslash,

    /// A `/` that does not open or close a comment.
    #[token("/")]
    Slash,

    /// A `*` that does not close a comment.
    #[token("*")]
    Star,

    /// Longest run of characters with no structural meaning.
    #[regex(r"[^/*\\\r\n]+")]
    Text,
}
