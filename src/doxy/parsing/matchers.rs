//! Compiled command matchers.
//!
//! Each matcher covers one group of commands sharing an argument shape. The
//! shape is compiled into two regexes, one per comment family, built from
//! the atoms in [`super::atoms`]. Matching never fails the parse: anything
//! a pattern or a clamp vocabulary rejects simply produces a shorter match
//! or none at all.

use std::ops::Range;

use regex::{Captures, Match, Regex};

use crate::doxy::catalog::{ArgForm, MatcherKind, TitleForm};
use crate::doxy::fragments::{Classification, Fragment};

use super::atoms::{
    Atoms, CommentFamily, ANGLE, BRACE_RAW, BRACKET_RAW, FILE, IDENT_WORD, IMAGE_FORMATS,
    QUOTED, REF_TARGET, SIZE, WORD,
};
use super::resolver::{Candidate, PRIORITY_COMMAND};

/// One compiled command rule.
pub(crate) struct CommandMatcher {
    kind: MatcherKind,
    classifications: Vec<Classification>,
    line: Regex,
    block: Regex,
}

impl CommandMatcher {
    /// Compiles a rule for `names`, which share `kind` and `classifications`.
    pub(crate) fn compile(
        mut names: Vec<&'static str>,
        kind: MatcherKind,
        classifications: Vec<Classification>,
    ) -> Self {
        // Longer spellings first, so the alternation prefers `returns`
        // over `return` and `---` over `--`.
        names.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
        let line = build_pattern(&names, kind, CommentFamily::Line.atoms());
        let block = build_pattern(&names, kind, CommentFamily::Block.atoms());
        CommandMatcher {
            kind,
            classifications,
            line: Regex::new(&line).expect("builtin command pattern compiles"),
            block: Regex::new(&block).expect("builtin command pattern compiles"),
        }
    }

    pub(crate) fn kind(&self) -> MatcherKind {
        self.kind
    }

    pub(crate) fn classifications(&self) -> &[Classification] {
        &self.classifications
    }

    /// Scans `text[window]` and appends one candidate per match.
    ///
    /// `window` must lie on character boundaries; all emitted offsets are
    /// absolute within `text`.
    pub(crate) fn scan(
        &self,
        text: &str,
        window: Range<usize>,
        family: CommentFamily,
        out: &mut Vec<Candidate>,
    ) {
        let slice = &text[window.clone()];
        let re = match family {
            CommentFamily::Line => &self.line,
            CommentFamily::Block => &self.block,
        };
        let mut pos = 0;
        while pos < slice.len() {
            let Some(caps) = re.captures_at(slice, pos) else {
                break;
            };
            let (Some(whole), Some(cmd)) = (caps.get(0), caps.name("cmd")) else {
                break;
            };
            // A command name ending in an identifier character must not be
            // the prefix of a longer word: `\par` never matches in `\param`.
            if ends_in_ident(cmd.as_str()) && is_ident_byte(slice.as_bytes().get(cmd.end())) {
                pos = whole.start() + 1;
                continue;
            }
            let extraction = self.extract(&caps, slice, family);
            if !extraction.fragments.is_empty() {
                let base = window.start;
                out.push(Candidate {
                    start: base + cmd.start(),
                    end: base + extraction.end,
                    priority: PRIORITY_COMMAND,
                    fragments: extraction
                        .fragments
                        .into_iter()
                        .map(|f| Fragment::new(base + f.start, f.len, f.classification))
                        .collect(),
                });
            }
            pos = whole.end().max(whole.start() + 1);
        }
    }

    /// Turns a regex match into fragments, applying clamp validation.
    ///
    /// Invalid clamp contents, or a clamp without its required boundary,
    /// back the match off to the command token alone; the would-be
    /// arguments stay unclassified.
    fn extract<'a>(
        &self,
        caps: &Captures<'_>,
        slice: &'a str,
        family: CommentFamily,
    ) -> Extraction<'a> {
        let Some(cmd) = caps.name("cmd") else {
            return Extraction::empty(slice);
        };
        let mut ex = Extraction::starting_with(slice, cmd, self.classifications[0]);

        match self.kind {
            MatcherKind::Bare => {}
            MatcherKind::Args(forms) => {
                for slot in 1..=forms.len() {
                    // Quoted alternatives capture under their own name.
                    let m = caps
                        .name(&format!("a{}", slot - 1))
                        .or_else(|| caps.name(&format!("q{}", slot - 1)));
                    if let Some(m) = m {
                        ex.push(m.range(), self.class(slot));
                    }
                }
            }
            MatcherKind::RestOfLine => {
                if let Some(m) = caps.name("rest") {
                    ex.push(m.range(), self.class(1));
                }
            }
            MatcherKind::WordThenRest => {
                if let Some(m) = caps.name("word") {
                    ex.push(m.range(), self.class(1));
                }
                if let Some(m) = caps.name("rest") {
                    ex.push(m.range(), self.class(2));
                }
            }
            MatcherKind::ClampedWord(vocab) => {
                if let Some(clamp) = caps.name("clamp") {
                    if !vocab.validate(clamp_inner(clamp.as_str()))
                        || !ws_follows(slice, clamp.end(), family)
                    {
                        return ex.backed_off();
                    }
                    ex.push(clamp.range(), self.class(1));
                }
                if let Some(m) = caps.name("word") {
                    ex.push(m.range(), self.class(2));
                }
            }
            MatcherKind::Options { vocab, .. } => {
                if let Some(opts) = caps.name("opts") {
                    if !vocab.validate(clamp_inner(opts.as_str()))
                        || brace_follows(slice, opts.end())
                    {
                        return ex.backed_off();
                    }
                    ex.push(opts.range(), self.class(1));
                }
            }
            MatcherKind::OptionsFile { options, title } => {
                let mut slot = 1;
                if let Some(vocab) = options {
                    if let Some(opts) = caps.name("opts") {
                        if !vocab.validate(clamp_inner(opts.as_str()))
                            || brace_follows(slice, opts.end())
                        {
                            return ex.backed_off();
                        }
                        ex.push(opts.range(), self.class(slot));
                    }
                    slot += 1;
                }
                if let Some(m) = caps.name("file") {
                    ex.push(m.range(), self.class(slot));
                }
                slot += 1;
                if title == TitleForm::Rest {
                    if let Some(m) = caps.name("title") {
                        ex.push(m.range(), self.class(slot));
                    }
                }
            }
            MatcherKind::BracketFile { options, file } => {
                if let Some(opt) = caps.name("opt") {
                    if !options.validate(clamp_inner(opt.as_str()))
                        || !ws_follows(slice, opt.end(), family)
                    {
                        return ex.backed_off();
                    }
                    ex.push(opt.range(), self.class(1));
                }
                if file {
                    if let Some(m) = caps.name("file") {
                        ex.push(m.range(), self.class(2));
                    }
                }
            }
            MatcherKind::RefTarget => {
                if let Some(m) = caps.name("target") {
                    ex.push(m.range(), self.class(1));
                }
                if let Some(m) = caps.name("title") {
                    ex.push(m.range(), self.class(2));
                }
            }
            MatcherKind::Quoted1 => {
                if let Some(m) = caps.name("quoted") {
                    ex.push(m.range(), self.class(1));
                }
            }
            MatcherKind::Diagram { options, file } => {
                let mut slot = 1;
                if let Some(vocab) = options {
                    if let Some(opts) = caps.name("opts") {
                        if !vocab.validate(clamp_inner(opts.as_str()))
                            || brace_follows(slice, opts.end())
                        {
                            return ex.backed_off();
                        }
                        ex.push(opts.range(), self.class(slot));
                    }
                    slot += 1;
                }
                if file {
                    if let Some(m) = caps.name("file") {
                        ex.push(m.range(), self.class(slot));
                    }
                    slot += 1;
                }
                if let Some(m) = caps.name("caption") {
                    ex.push(m.range(), self.class(slot));
                }
                for (offset, group) in ["s1", "s2"].iter().enumerate() {
                    if let Some(m) = caps.name(group) {
                        ex.push(m.range(), self.class(slot + 1 + offset));
                    }
                }
            }
            MatcherKind::Image(vocab) => {
                if let Some(opts) = caps.name("opts") {
                    if !vocab.validate(clamp_inner(opts.as_str()))
                        || brace_follows(slice, opts.end())
                    {
                        return ex.backed_off();
                    }
                    ex.push(opts.range(), self.class(1));
                }
                if let Some(fmt) = caps.name("fmt") {
                    // `latexs` must not pass as the `latex` format.
                    if is_ident_byte(slice.as_bytes().get(fmt.end())) {
                        return ex.backed_off();
                    }
                    ex.push(fmt.range(), self.class(2));
                    if let Some(m) = caps.name("file") {
                        ex.push(m.range(), self.class(3));
                    }
                    if let Some(m) = caps.name("caption") {
                        ex.push(m.range(), self.class(4));
                    }
                    for (offset, group) in ["s1", "s2"].iter().enumerate() {
                        if let Some(m) = caps.name(group) {
                            ex.push(m.range(), self.class(5 + offset));
                        }
                    }
                }
            }
            MatcherKind::AdjacentKeyword(_) => {
                if let Some(kw) = caps.name("kw") {
                    // Keywords may contain hyphens, so a trailing hyphen
                    // means a longer, unknown keyword.
                    let next = slice.as_bytes().get(kw.end());
                    if !is_ident_byte(next) && next != Some(&b'-') {
                        ex.push(kw.range(), self.class(1));
                    }
                }
            }
        }
        ex
    }

    fn class(&self, slot: usize) -> Classification {
        self.classifications[slot]
    }
}

/// Working state of one extraction, in window-relative offsets.
struct Extraction<'a> {
    slice: &'a str,
    fragments: Vec<Fragment>,
    /// End of the claimed extent: the end of the last emitted fragment.
    end: usize,
}

impl<'a> Extraction<'a> {
    fn empty(slice: &'a str) -> Self {
        Extraction {
            slice,
            fragments: Vec::new(),
            end: 0,
        }
    }

    fn starting_with(slice: &'a str, cmd: Match<'_>, classification: Classification) -> Self {
        let fragment = Fragment::new(cmd.start(), cmd.len(), classification);
        Extraction {
            slice,
            end: fragment.end(),
            fragments: vec![fragment],
        }
    }

    /// Adds a fragment for `range`, stripping the quotes of a fully quoted
    /// title. Empty ranges are dropped, so a quoted empty title vanishes
    /// while the surrounding match stands.
    fn push(&mut self, range: Range<usize>, classification: Classification) {
        let range = if classification == Classification::Title {
            strip_title_quotes(self.slice, range)
        } else {
            range
        };
        if let Some(fragment) = Fragment::from_range(range, classification) {
            self.end = self.end.max(fragment.end());
            self.fragments.push(fragment);
        }
    }

    /// Truncates the match to the command token alone.
    fn backed_off(mut self) -> Self {
        self.fragments.truncate(1);
        self.end = self.fragments.first().map_or(0, Fragment::end);
        self
    }
}

/// Fully quoted titles are highlighted without their quotes.
fn strip_title_quotes(slice: &str, range: Range<usize>) -> Range<usize> {
    let text = &slice[range.clone()];
    if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        range.start + 1..range.end - 1
    } else {
        range
    }
}

/// Strips the delimiters of a `{...}` or `[...]` clamp.
fn clamp_inner(raw: &str) -> &str {
    &raw[1..raw.len() - 1]
}

/// True when a whitespace boundary follows `pos`: blank, end of input,
/// or a line continuation in the line family.
fn ws_follows(slice: &str, pos: usize, family: CommentFamily) -> bool {
    let bytes = slice.as_bytes();
    match bytes.get(pos) {
        None => true,
        Some(b' ' | b'\t' | b'\r' | b'\n') => true,
        Some(b'\\') if family == CommentFamily::Line => match bytes.get(pos + 1) {
            Some(b'\n') => true,
            Some(b'\r') => bytes.get(pos + 2) == Some(&b'\n'),
            _ => false,
        },
        _ => false,
    }
}

/// A clamp directly followed by another brace has mismatched braces.
fn brace_follows(slice: &str, pos: usize) -> bool {
    matches!(slice.as_bytes().get(pos), Some(b'{' | b'}'))
}

fn ends_in_ident(name: &str) -> bool {
    name.chars()
        .last()
        .map_or(false, |c| c.is_ascii_alphanumeric() || c == '_')
}

fn is_ident_byte(byte: Option<&u8>) -> bool {
    byte.map_or(false, |b| b.is_ascii_alphanumeric() || *b == b'_')
}

/// Builds the pattern for one rule against one comment family.
fn build_pattern(names: &[&str], kind: MatcherKind, atoms: &Atoms) -> String {
    let cmd = command_atom(names);
    let ws = atoms.ws;
    let ws_opt = atoms.ws_opt;
    let rest = atoms.rest;
    match kind {
        MatcherKind::Bare => cmd,
        MatcherKind::Args(forms) => {
            let mut tail = String::new();
            for (i, form) in forms.iter().enumerate().rev() {
                tail = arg_slot(*form, i, atoms, &tail);
            }
            format!("{cmd}{tail}")
        }
        MatcherKind::RestOfLine => format!("{cmd}(?:{ws}(?P<rest>{rest}))?"),
        MatcherKind::WordThenRest => {
            format!("{cmd}(?:{ws}(?P<word>{WORD})(?:{ws}(?P<rest>{rest}))?)?")
        }
        MatcherKind::ClampedWord(_) => format!(
            "{cmd}(?:{ws_opt}(?P<clamp>{BRACKET_RAW}))?(?:{ws}(?P<word>{IDENT_WORD}))?"
        ),
        MatcherKind::Options { adjacent, .. } => {
            if adjacent {
                format!("{cmd}(?P<opts>{BRACE_RAW})?")
            } else {
                format!("{cmd}(?:{ws_opt}(?P<opts>{BRACE_RAW}))?")
            }
        }
        MatcherKind::OptionsFile { options, title } => {
            let opts = if options.is_some() {
                format!("(?P<opts>{BRACE_RAW})?")
            } else {
                String::new()
            };
            let title = match title {
                TitleForm::None => String::new(),
                TitleForm::Rest => format!("(?:{ws}(?P<title>{rest}))?"),
            };
            format!("{cmd}{opts}(?:{ws}(?P<file>{FILE}){title})?")
        }
        MatcherKind::BracketFile { file, .. } => {
            let file = if file {
                format!("(?:{ws}(?P<file>{FILE}))?")
            } else {
                String::new()
            };
            format!("{cmd}(?P<opt>{BRACKET_RAW})?{file}")
        }
        MatcherKind::RefTarget => format!(
            r#"{cmd}(?:{ws}(?P<target>{REF_TARGET})(?:{ws}"(?P<title>[^"\r\n]*)")?)?"#
        ),
        MatcherKind::Quoted1 => format!("{cmd}(?:{ws_opt}(?P<quoted>{QUOTED}))?"),
        MatcherKind::Diagram { options, file } => {
            let opts = if options.is_some() {
                format!("(?P<opts>{BRACE_RAW})?")
            } else {
                String::new()
            };
            let file = if file {
                format!("(?:{ws}(?P<file>{FILE}))?")
            } else {
                String::new()
            };
            format!(
                r#"{cmd}{opts}{file}(?:{ws}"(?P<caption>[^"\r\n]*)")?(?:{ws}(?P<s1>{SIZE}))?(?:{ws}(?P<s2>{SIZE}))?"#
            )
        }
        MatcherKind::Image(_) => format!(
            r#"{cmd}(?P<opts>{BRACE_RAW})?(?:{ws}(?P<fmt>{IMAGE_FORMATS})(?:{ws}(?P<file>{FILE})(?:{ws}"(?P<caption>[^"\r\n]*)")?)?(?:{ws}(?P<s1>{SIZE}))?(?:{ws}(?P<s2>{SIZE}))?)?"#
        ),
        MatcherKind::AdjacentKeyword(words) => {
            let mut sorted: Vec<&str> = words.to_vec();
            sorted.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
            let alternation = sorted
                .iter()
                .map(|w| regex::escape(w))
                .collect::<Vec<_>>()
                .join("|");
            format!("{cmd}(?P<kw>{alternation})?")
        }
    }
}

/// `(?P<cmd>...)` matching either prefix plus one of `names`.
///
/// `names` must already be sorted longest-first.
fn command_atom(names: &[&str]) -> String {
    let alternation = names
        .iter()
        .map(|name| regex::escape(name))
        .collect::<Vec<_>>()
        .join("|");
    format!(r"(?P<cmd>[\\@](?:{alternation}))")
}

/// One optional argument slot wrapping `tail`, the slots after it.
///
/// A quoted string delimits itself, so the quoted alternatives may touch
/// the token before them; bare words and angle names always need leading
/// whitespace. The quoted branch captures under `q<i>` where the slot
/// also has a non-quoted branch.
fn arg_slot(form: ArgForm, i: usize, atoms: &Atoms, tail: &str) -> String {
    let ws = atoms.ws;
    let ws_opt = atoms.ws_opt;
    match form {
        ArgForm::Word => format!("(?:{ws}(?P<a{i}>{WORD}){tail})?"),
        ArgForm::IdentWord => format!("(?:{ws}(?P<a{i}>{IDENT_WORD}){tail})?"),
        ArgForm::Quoted => format!("(?:{ws_opt}(?P<a{i}>{QUOTED}){tail})?"),
        ArgForm::WordOrQuoted => format!(
            r#"(?:(?:{ws_opt}(?P<q{i}>{QUOTED})|{ws}(?P<a{i}>[^ \t\r\n"][^ \t\r\n]*)){tail})?"#
        ),
        ArgForm::QuotedOrAngle => {
            format!("(?:(?:{ws_opt}(?P<q{i}>{QUOTED})|{ws}(?P<a{i}>{ANGLE})){tail})?")
        }
        ArgForm::WordQuotedOrAngle => format!(
            r#"(?:(?:{ws_opt}(?P<q{i}>{QUOTED})|{ws}(?P<a{i}>(?:{ANGLE}|[^ \t\r\n"<][^ \t\r\n]*))){tail})?"#
        ),
    }
}
