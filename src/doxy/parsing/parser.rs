//! The parsing entry points.
//!
//! A parser walks the comments of a source text, runs every command
//! matcher plus the markdown scanner over each comment's content, and
//! resolves the collected candidates into non-overlapping fragment
//! groups.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::doxy::catalog::{default_catalog, CommandCatalog};
use crate::doxy::fragments::{Fragment, FragmentGroup};
use crate::doxy::inlines::{scan_markdown_spans, MarkdownKind};
use crate::doxy::lexing::{split_comments, CommentStyle};

use super::atoms::CommentFamily;
use super::resolver::{
    resolve, Candidate, PRIORITY_BOLD, PRIORITY_INLINE_CODE, PRIORITY_ITALIC,
    PRIORITY_STRIKETHROUGH,
};

/// Selects which comment styles are parsed.
///
/// Disabled styles are skipped entirely: their text produces no fragments,
/// not even for well-formed commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct EnabledStyles {
    pub line: bool,
    pub line_doc: bool,
    pub line_doc_bang: bool,
    pub block: bool,
    pub block_doc: bool,
    pub block_doc_bang: bool,
}

impl EnabledStyles {
    /// Every style, documentation or not.
    pub fn all() -> Self {
        EnabledStyles {
            line: true,
            line_doc: true,
            line_doc_bang: true,
            block: true,
            block_doc: true,
            block_doc_bang: true,
        }
    }

    pub fn none() -> Self {
        EnabledStyles {
            line: false,
            line_doc: false,
            line_doc_bang: false,
            block: false,
            block_doc: false,
            block_doc_bang: false,
        }
    }

    /// Only the four documentation styles.
    pub fn docs_only() -> Self {
        EnabledStyles {
            line: false,
            block: false,
            ..Self::all()
        }
    }

    pub fn contains(&self, style: CommentStyle) -> bool {
        match style {
            CommentStyle::Line => self.line,
            CommentStyle::LineDoc => self.line_doc,
            CommentStyle::LineDocBang => self.line_doc_bang,
            CommentStyle::Block => self.block,
            CommentStyle::BlockDoc => self.block_doc,
            CommentStyle::BlockDocBang => self.block_doc_bang,
        }
    }
}

impl Default for EnabledStyles {
    fn default() -> Self {
        Self::all()
    }
}

/// Parses comment text against a command catalog.
///
/// Construction is cheap when the shared builtin catalog is used; parsers
/// built from a [`CatalogConfig`](crate::doxy::catalog::config::CatalogConfig)
/// carry their own catalog.
#[derive(Debug, Clone)]
pub struct DoxygenParser {
    catalog: Arc<CommandCatalog>,
    styles: EnabledStyles,
}

impl DoxygenParser {
    /// A parser over the builtin catalog with every comment style enabled.
    pub fn new() -> Self {
        DoxygenParser {
            catalog: Arc::clone(default_catalog()),
            styles: EnabledStyles::default(),
        }
    }

    pub fn with_catalog(catalog: Arc<CommandCatalog>) -> Self {
        DoxygenParser {
            catalog,
            styles: EnabledStyles::default(),
        }
    }

    pub fn with_styles(mut self, styles: EnabledStyles) -> Self {
        self.styles = styles;
        self
    }

    pub fn catalog(&self) -> &Arc<CommandCatalog> {
        &self.catalog
    }

    pub fn styles(&self) -> EnabledStyles {
        self.styles
    }

    /// Parses `text` and returns the surviving matches as groups, in text
    /// order. Text outside comments never produces fragments.
    pub fn parse(&self, text: &str) -> Vec<FragmentGroup> {
        let mut groups = Vec::new();
        for span in split_comments(text) {
            if !self.styles.contains(span.style) || span.content.is_empty() {
                continue;
            }
            let family = CommentFamily::of(span.style);
            let mut candidates = Vec::new();
            for matcher in self.catalog.matchers() {
                matcher.scan(text, span.content.clone(), family, &mut candidates);
            }
            for md in scan_markdown_spans(text, span.content.clone()) {
                candidates.push(Candidate {
                    start: md.range.start,
                    end: md.range.end,
                    priority: markdown_priority(md.kind),
                    fragments: vec![Fragment::new(
                        md.range.start,
                        md.len(),
                        md.kind.classification(),
                    )],
                });
            }
            groups.extend(resolve(candidates));
        }
        groups
    }

    /// Like [`parse`](Self::parse), flattened to the individual fragments.
    pub fn parse_flat(&self, text: &str) -> Vec<Fragment> {
        self.parse(text)
            .into_iter()
            .flat_map(|group| group.fragments)
            .collect()
    }
}

impl Default for DoxygenParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses `text` with the builtin catalog and every style enabled.
pub fn parse(text: &str) -> Vec<FragmentGroup> {
    DoxygenParser::new().parse(text)
}

/// Like [`parse`], but takes the enabled styles and the catalog as
/// explicit inputs instead of using the builtin defaults.
pub fn parse_with(
    text: &str,
    styles: EnabledStyles,
    catalog: &Arc<CommandCatalog>,
) -> Vec<FragmentGroup> {
    DoxygenParser::with_catalog(Arc::clone(catalog))
        .with_styles(styles)
        .parse(text)
}

fn markdown_priority(kind: MarkdownKind) -> u8 {
    match kind {
        MarkdownKind::InlineCode => PRIORITY_INLINE_CODE,
        MarkdownKind::Bold => PRIORITY_BOLD,
        MarkdownKind::Strikethrough => PRIORITY_STRIKETHROUGH,
        MarkdownKind::Italic => PRIORITY_ITALIC,
    }
}
