//! Command name completion for editor integrations.

use super::catalog::{ArgForm, CommandCatalog, MatcherKind, TitleForm};
use super::fragments::Classification;

/// One completion suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionCandidate {
    /// The command name, without its `\` or `@` prefix.
    pub label: String,
    /// A short sketch of the arguments the command accepts.
    pub detail: String,
    /// How the command token itself is classified.
    pub classification: Classification,
}

/// Lists the catalog commands starting with `prefix`, in name order.
///
/// A leading `\` or `@` on the prefix is ignored, so callers can pass the
/// text from the prefix character to the cursor as is.
pub fn completion_candidates(
    catalog: &CommandCatalog,
    prefix: &str,
) -> Vec<CompletionCandidate> {
    let prefix = prefix.strip_prefix(['\\', '@']).unwrap_or(prefix);
    catalog
        .names()
        .filter(|name| name.starts_with(prefix))
        .map(|name| CompletionCandidate {
            label: name.to_owned(),
            detail: catalog.kind_of(name).map(argument_sketch).unwrap_or_default(),
            classification: catalog
                .classifications_of(name)
                .and_then(|list| list.first().copied())
                .unwrap_or(Classification::Command),
        })
        .collect()
}

fn argument_sketch(kind: MatcherKind) -> String {
    match kind {
        MatcherKind::Bare => String::new(),
        MatcherKind::Args(forms) => forms
            .iter()
            .copied()
            .map(form_sketch)
            .collect::<Vec<_>>()
            .join(" "),
        MatcherKind::RestOfLine => "text".to_owned(),
        MatcherKind::WordThenRest => "name title".to_owned(),
        MatcherKind::ClampedWord(_) => "[options] name".to_owned(),
        MatcherKind::Options { .. } => "{options}".to_owned(),
        MatcherKind::OptionsFile { options, title } => {
            let mut sketch = String::new();
            if options.is_some() {
                sketch.push_str("{options} ");
            }
            sketch.push_str("file");
            if title == TitleForm::Rest {
                sketch.push_str(" caption");
            }
            sketch
        }
        MatcherKind::BracketFile { file, .. } => {
            if file {
                "[option] file".to_owned()
            } else {
                "[option]".to_owned()
            }
        }
        MatcherKind::RefTarget => "target \"title\"".to_owned(),
        MatcherKind::Quoted1 => "\"text\"".to_owned(),
        MatcherKind::Diagram { options, file } => {
            let mut sketch = String::new();
            if options.is_some() {
                sketch.push_str("{options} ");
            }
            if file {
                sketch.push_str("file ");
            }
            sketch.push_str("\"caption\" sizes");
            sketch
        }
        MatcherKind::Image(_) => "{options} format file \"caption\" sizes".to_owned(),
        MatcherKind::AdjacentKeyword(_) => "language".to_owned(),
    }
}

fn form_sketch(form: ArgForm) -> &'static str {
    match form {
        ArgForm::Word | ArgForm::WordOrQuoted => "word",
        ArgForm::IdentWord => "name",
        ArgForm::Quoted | ArgForm::QuotedOrAngle => "\"text\"",
        ArgForm::WordQuotedOrAngle => "word-or-header",
    }
}
