//! The command catalog.
//!
//! A [`CommandCatalog`] holds one compiled matcher per command shape and a
//! name index over every recognized spelling. Catalogs are immutable once
//! built: configuration is applied during construction and validated
//! eagerly, so a successfully built catalog can be wrapped in an [`Arc`] and
//! shared between threads or swapped atomically by embedders.

pub mod commands;
pub mod config;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;

use super::fragments::Classification;
use super::parsing::matchers::CommandMatcher;
use commands::BUILTIN_COMMANDS;

pub use config::CatalogConfig;

/// Shape of a command's arguments.
///
/// Every catalog rule pairs one of these with a classification list; the
/// list length must equal [`MatcherKind::capture_groups`] for that kind.
#[derive(Debug, Clone, Copy)]
pub enum MatcherKind {
    /// Command token only.
    Bare,
    /// Up to `forms.len()` whitespace-separated arguments on the same
    /// logical line, each matched against its slot's [`ArgForm`].
    Args(&'static [ArgForm]),
    /// The rest of the logical line as one right-trimmed argument.
    RestOfLine,
    /// One word, then the rest of the logical line.
    WordThenRest,
    /// Optional `[clamp]` validated against a vocabulary, then one word.
    /// Whitespace may separate the command from the clamp; the clamp
    /// itself must end at a whitespace boundary.
    ClampedWord(&'static OptionVocab),
    /// Optional `{options}` after the command, nothing else. `adjacent`
    /// forbids whitespace between the command and the opening brace.
    Options {
        vocab: &'static OptionVocab,
        adjacent: bool,
    },
    /// Optional `{options}` directly after the command, then a file
    /// argument, then an optional trailing title.
    OptionsFile {
        options: Option<&'static OptionVocab>,
        title: TitleForm,
    },
    /// Optional `[option]` directly after the command and ending at a
    /// whitespace boundary, then an optional file argument.
    BracketFile {
        options: &'static OptionVocab,
        file: bool,
    },
    /// Link target with optional call parentheses, then an optional quoted
    /// title.
    RefTarget,
    /// One double-quoted argument, kept verbatim.
    Quoted1,
    /// Diagram command: optional `{options}`, optional file, optional
    /// quoted caption, then up to two `width=`/`height=` arguments.
    Diagram {
        options: Option<&'static OptionVocab>,
        file: bool,
    },
    /// `\image`: optional `{options}`, output format keyword, file,
    /// optional quoted caption, then up to two size arguments.
    Image(&'static OptionVocab),
    /// Language switch: a keyword from a fixed set directly after the
    /// command, no whitespace in between.
    AdjacentKeyword(&'static [&'static str]),
}

impl MatcherKind {
    /// Number of capture groups a rule of this kind produces, the command
    /// token included.
    pub fn capture_groups(&self) -> usize {
        match self {
            MatcherKind::Bare => 1,
            MatcherKind::Args(forms) => 1 + forms.len(),
            MatcherKind::RestOfLine => 2,
            MatcherKind::WordThenRest => 3,
            MatcherKind::ClampedWord(_) => 3,
            MatcherKind::Options { .. } => 2,
            MatcherKind::OptionsFile { options, title } => {
                2 + usize::from(options.is_some()) + usize::from(*title != TitleForm::None)
            }
            MatcherKind::BracketFile { file, .. } => 2 + usize::from(*file),
            MatcherKind::RefTarget => 3,
            MatcherKind::Quoted1 => 2,
            MatcherKind::Diagram { options, file } => {
                4 + usize::from(options.is_some()) + usize::from(*file)
            }
            MatcherKind::Image(_) => 7,
            MatcherKind::AdjacentKeyword(_) => 2,
        }
    }
}

/// Shape of one positional argument in a [`MatcherKind::Args`] rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgForm {
    /// Any whitespace-delimited token.
    Word,
    /// Token starting with a letter or underscore.
    IdentWord,
    /// Double-quoted string, kept verbatim.
    Quoted,
    /// Quoted string or word.
    WordOrQuoted,
    /// Quoted string or angle-bracketed name, but not a bare word.
    QuotedOrAngle,
    /// Quoted string, angle-bracketed name, or word.
    WordQuotedOrAngle,
}

/// Trailing title accepted by [`MatcherKind::OptionsFile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleForm {
    /// No title argument.
    None,
    /// Rest of the logical line, unquoted.
    Rest,
}

/// Vocabulary for a `{...}` or `[...]` clamp.
#[derive(Debug)]
pub struct OptionVocab {
    /// Accepted option spellings.
    pub keys: &'static [OptionKey],
    /// Whether key comparison respects case.
    pub case_sensitive: bool,
    /// Whether whitespace may pad items inside the clamp.
    pub padding: bool,
    /// Maximum number of options, `None` for unlimited.
    pub max: Option<usize>,
    /// Whether an empty clamp (`{}`) is accepted.
    pub empty_ok: bool,
    /// Whether the same key may appear more than once.
    pub repeats: bool,
}

/// One accepted option spelling.
#[derive(Debug)]
pub enum OptionKey {
    /// Bare flag such as `lineno`.
    Flag(&'static str),
    /// Key with a separated value, such as `raise=2` or `anchor:label`.
    Keyed {
        key: &'static str,
        sep: char,
        value: ValueKind,
        value_required: bool,
    },
    /// File extension form used by `\code`, e.g. `.py`.
    FileExt,
    /// Any non-empty item.
    Any,
}

/// Value accepted after a [`OptionKey::Keyed`] separator.
#[derive(Debug, Clone, Copy)]
pub enum ValueKind {
    Int { min: i64, max: i64 },
    Text,
}

impl OptionVocab {
    /// Validates the text between the clamp delimiters.
    ///
    /// Items are comma-separated; empty items are skipped so trailing
    /// commas are harmless. An all-empty list is accepted only when
    /// `empty_ok` is set.
    pub(crate) fn validate(&self, inner: &str) -> bool {
        if !self.padding && inner.contains([' ', '\t']) {
            return false;
        }
        let mut seen: Vec<String> = Vec::new();
        let mut count = 0usize;
        for raw in inner.split(',') {
            let item = if self.padding { raw.trim() } else { raw };
            if item.is_empty() {
                continue;
            }
            let Some(canonical) = self.match_item(item) else {
                return false;
            };
            count += 1;
            if !self.repeats {
                if seen.contains(&canonical) {
                    return false;
                }
                seen.push(canonical);
            }
        }
        if count == 0 {
            return self.empty_ok;
        }
        match self.max {
            Some(max) => count <= max,
            None => true,
        }
    }

    /// Returns the canonical key spelling if `item` matches a key.
    fn match_item(&self, item: &str) -> Option<String> {
        for key in self.keys {
            match key {
                OptionKey::Flag(name) => {
                    if keys_equal(item, name, self.case_sensitive) {
                        return Some((*name).to_string());
                    }
                }
                OptionKey::Keyed {
                    key,
                    sep,
                    value,
                    value_required,
                } => {
                    if let Some((head, tail)) = item.split_once(*sep) {
                        if keys_equal(head.trim(), key, self.case_sensitive)
                            && value_matches(tail.trim(), *value)
                        {
                            return Some((*key).to_string());
                        }
                    } else if !value_required && keys_equal(item, key, self.case_sensitive) {
                        return Some((*key).to_string());
                    }
                }
                OptionKey::FileExt => {
                    if is_file_extension(item) {
                        return Some(item.to_ascii_lowercase());
                    }
                }
                OptionKey::Any => return Some(item.to_ascii_lowercase()),
            }
        }
        None
    }
}

fn keys_equal(a: &str, b: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        a == b
    } else {
        a.eq_ignore_ascii_case(b)
    }
}

fn value_matches(value: &str, kind: ValueKind) -> bool {
    match kind {
        ValueKind::Int { min, max } => value
            .parse::<i64>()
            .map_or(false, |n| n >= min && n <= max),
        ValueKind::Text => !value.is_empty(),
    }
}

fn is_file_extension(item: &str) -> bool {
    match item.strip_prefix('.') {
        Some(rest) => {
            !rest.is_empty()
                && rest
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.' | '#'))
        }
        None => false,
    }
}

/// Error produced while building a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The same command name was defined twice.
    DuplicateCommand { name: String },
    /// A classification list does not match its matcher's group count.
    ClassificationCount {
        name: String,
        expected: usize,
        found: usize,
    },
    /// A configuration entry names a command the catalog does not define.
    UnknownCommand { name: String },
    /// The configuration document itself could not be read.
    InvalidDocument { message: String },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::DuplicateCommand { name } => {
                write!(f, "command '{name}' is defined more than once")
            }
            CatalogError::ClassificationCount {
                name,
                expected,
                found,
            } => write!(
                f,
                "command '{name}' needs {expected} classifications, found {found}"
            ),
            CatalogError::UnknownCommand { name } => {
                write!(f, "configuration references unknown command '{name}'")
            }
            CatalogError::InvalidDocument { message } => {
                write!(f, "invalid catalog configuration: {message}")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// Immutable set of compiled command matchers plus a name index.
pub struct CommandCatalog {
    matchers: Vec<CommandMatcher>,
    /// Command name (without prefix) to index into `matchers`.
    names: BTreeMap<&'static str, usize>,
}

impl CommandCatalog {
    /// Builds the catalog from the builtin command table.
    pub fn with_defaults() -> Self {
        // The builtin table is fixed at compile time and covered by tests;
        // failing to build it is a bug, not an input error.
        Self::with_config(&CatalogConfig::default()).expect("builtin command table is valid")
    }

    /// Builds the catalog with per-command classification overrides.
    ///
    /// Fails fast: any unknown command name or classification list of the
    /// wrong length rejects the whole configuration.
    pub fn with_config(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let mut overrides = config.classification_overrides.clone();
        let mut matchers = Vec::new();
        let mut names: BTreeMap<&'static str, usize> = BTreeMap::new();

        for group in BUILTIN_COMMANDS {
            let expected = group.kind.capture_groups();
            if group.classifications.len() != expected {
                return Err(CatalogError::ClassificationCount {
                    name: group.names.first().copied().unwrap_or("").to_string(),
                    expected,
                    found: group.classifications.len(),
                });
            }

            let mut default_names = Vec::new();
            let mut overridden: Vec<(&'static str, Vec<Classification>)> = Vec::new();
            for &name in group.names {
                if names.contains_key(name) {
                    return Err(CatalogError::DuplicateCommand {
                        name: name.to_string(),
                    });
                }
                // Reserve the slot now; the final index is fixed below.
                names.insert(name, usize::MAX);
                match overrides.remove(name) {
                    Some(classes) => {
                        if classes.len() != expected {
                            return Err(CatalogError::ClassificationCount {
                                name: name.to_string(),
                                expected,
                                found: classes.len(),
                            });
                        }
                        overridden.push((name, classes));
                    }
                    None => default_names.push(name),
                }
            }

            if !default_names.is_empty() {
                let index = matchers.len();
                matchers.push(CommandMatcher::compile(
                    default_names.clone(),
                    group.kind,
                    group.classifications.to_vec(),
                ));
                for name in default_names {
                    names.insert(name, index);
                }
            }
            for (name, classes) in overridden {
                let index = matchers.len();
                matchers.push(CommandMatcher::compile(vec![name], group.kind, classes));
                names.insert(name, index);
            }
        }

        if let Some(name) = overrides.keys().next() {
            return Err(CatalogError::UnknownCommand { name: name.clone() });
        }

        Ok(CommandCatalog { matchers, names })
    }

    /// Number of distinct command spellings (prefix variants not counted).
    pub fn command_count(&self) -> usize {
        self.names.len()
    }

    /// True if `name` (without the `\`/`@` prefix) is a recognized command.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    /// The classification list of a command, command token first.
    pub fn classifications_of(&self, name: &str) -> Option<&[Classification]> {
        let &index = self.names.get(name)?;
        Some(self.matchers[index].classifications())
    }

    /// The matcher kind of a command.
    pub fn kind_of(&self, name: &str) -> Option<MatcherKind> {
        let &index = self.names.get(name)?;
        Some(self.matchers[index].kind())
    }

    /// All command names in lexicographic order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.names.keys().copied()
    }

    pub(crate) fn matchers(&self) -> &[CommandMatcher] {
        &self.matchers
    }
}

impl fmt::Debug for CommandCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandCatalog")
            .field("commands", &self.names.len())
            .field("matchers", &self.matchers.len())
            .finish()
    }
}

/// The shared default catalog, built on first use.
pub fn default_catalog() -> &'static Arc<CommandCatalog> {
    static CATALOG: Lazy<Arc<CommandCatalog>> =
        Lazy::new(|| Arc::new(CommandCatalog::with_defaults()));
    &CATALOG
}
