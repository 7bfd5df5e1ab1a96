//! Markdown inline spans inside comment text.
//!
//! Comments carry a small markdown subset alongside structural commands:
//! `**bold**`, `__bold__`, `*italic*`, `_italic_`, `~~strikethrough~~` and
//! `` `inline code` ``. The scanner in [`scanner`] finds well-delimited
//! spans; arbitration against command matches happens later, so a span
//! reported here may still lose to an overlapping command.

pub mod scanner;

pub use scanner::scan_markdown_spans;

use std::ops::Range;

use crate::doxy::fragments::Classification;

/// The inline markdown shapes recognized in comment text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkdownKind {
    Bold,
    Italic,
    Strikethrough,
    InlineCode,
}

impl MarkdownKind {
    /// The classification carried by a span of this kind.
    pub fn classification(self) -> Classification {
        match self {
            MarkdownKind::Bold => Classification::EmphasisMajor,
            MarkdownKind::Italic => Classification::EmphasisMinor,
            MarkdownKind::Strikethrough => Classification::Strikethrough,
            MarkdownKind::InlineCode => Classification::InlineCode,
        }
    }
}

/// One delimited markdown span. The range includes the delimiters on both
/// sides and is absolute within the scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownSpan {
    pub range: Range<usize>,
    pub kind: MarkdownKind,
}

impl MarkdownSpan {
    pub fn len(&self) -> usize {
        self.range.end - self.range.start
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}
