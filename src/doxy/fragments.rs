//! Fragment data model.
//!
//! A [`Fragment`] is a half-open byte range of the original buffer together
//! with the [`Classification`] a renderer should apply to it. Fragments never
//! have zero length and the parser never returns two fragments that overlap.

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Rendering category attached to a fragment.
///
/// The set is closed: downstream renderers map each variant to a style, so a
/// new variant is an API change, not a data change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Classification {
    /// A recognized command token, e.g. `\brief` or `@param`.
    Command,
    /// Command token of a warning-style section (`\warning`, `\bug`).
    Warning,
    /// Command token of a note-style section (`\note`, `\todo`).
    Note,
    /// Command token of an exception section (`\throws`, `\exception`).
    Exceptions,
    /// Primary command argument.
    Parameter1,
    /// Secondary command argument.
    Parameter2,
    /// A validated clamp such as `[in]` or `{lineno}`.
    ParameterClamped,
    /// Free-text title argument.
    Title,
    /// Italic markdown span.
    EmphasisMinor,
    /// Bold markdown span.
    EmphasisMajor,
    /// Strikethrough markdown span.
    Strikethrough,
    /// Inline code span delimited by backticks.
    InlineCode,
}

/// All classifications in a stable order.
pub const CLASSIFICATIONS: &[Classification] = &[
    Classification::Command,
    Classification::Warning,
    Classification::Note,
    Classification::Exceptions,
    Classification::Parameter1,
    Classification::Parameter2,
    Classification::ParameterClamped,
    Classification::Title,
    Classification::EmphasisMinor,
    Classification::EmphasisMajor,
    Classification::Strikethrough,
    Classification::InlineCode,
];

impl Classification {
    /// Stable string form, matching the serialized spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Classification::Command => "command",
            Classification::Warning => "warning",
            Classification::Note => "note",
            Classification::Exceptions => "exceptions",
            Classification::Parameter1 => "parameter1",
            Classification::Parameter2 => "parameter2",
            Classification::ParameterClamped => "parameter-clamped",
            Classification::Title => "title",
            Classification::EmphasisMinor => "emphasis-minor",
            Classification::EmphasisMajor => "emphasis-major",
            Classification::Strikethrough => "strikethrough",
            Classification::InlineCode => "inline-code",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified byte range of the parsed buffer.
///
/// `start` and `len` index the original text passed to the parser; the text
/// of a fragment is always recoverable as `&text[start..start + len]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Fragment {
    /// Byte offset of the first byte of the fragment.
    pub start: usize,
    /// Fragment length in bytes, always at least one.
    pub len: usize,
    /// Rendering category for this range.
    pub classification: Classification,
}

impl Fragment {
    /// Creates a fragment. `len` must be non-zero.
    pub fn new(start: usize, len: usize, classification: Classification) -> Self {
        debug_assert!(len > 0, "fragments are never empty");
        Fragment {
            start,
            len,
            classification,
        }
    }

    /// Creates a fragment from a byte range, or `None` for an empty range.
    pub fn from_range(range: Range<usize>, classification: Classification) -> Option<Self> {
        if range.end > range.start {
            Some(Fragment::new(range.start, range.end - range.start, classification))
        } else {
            None
        }
    }

    /// Byte offset one past the last byte.
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// The fragment as a half-open byte range.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// True if the two fragments share at least one byte.
    pub fn overlaps(&self, other: &Fragment) -> bool {
        self.start < other.end() && other.start < self.end()
    }

    /// The text this fragment covers.
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.range()]
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{} {}", self.start, self.end(), self.classification)
    }
}

/// One resolved match: a command together with its argument fragments, or a
/// single markdown span.
///
/// The `extent` covers everything the match claimed, including unclassified
/// filler between fragments (whitespace between a command and its arguments).
/// Groups returned by the parser are ordered by `extent.start` and their
/// extents never overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FragmentGroup {
    /// Byte range claimed by the whole match.
    pub extent: Range<usize>,
    /// Classified fragments inside `extent`, in source order.
    pub fragments: Vec<Fragment>,
}

impl FragmentGroup {
    pub fn new(extent: Range<usize>, fragments: Vec<Fragment>) -> Self {
        FragmentGroup { extent, fragments }
    }

    /// Byte offset where the group starts.
    pub fn start(&self) -> usize {
        self.extent.start
    }

    /// The leading fragment. For command matches this is the command token.
    pub fn head(&self) -> Option<&Fragment> {
        self.fragments.first()
    }
}

impl fmt::Display for FragmentGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{} [", self.extent.start, self.extent.end)?;
        for (i, fragment) in self.fragments.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{fragment}")?;
        }
        f.write_str("]")
    }
}
