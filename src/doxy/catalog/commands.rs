//! Builtin command table.
//!
//! One [`CommandGroup`] per argument shape; commands sharing a shape and a
//! classification list share one compiled matcher. Names are stored without
//! the `\`/`@` prefix; both prefixes are recognized for every entry.
//!
//! The table follows the Doxygen manual's grouping: structural indicators,
//! section indicators, links and references, example inclusion, and visual
//! markup, with the escaped-literal commands at the end.

use crate::doxy::fragments::Classification::{self, *};

use super::{ArgForm, MatcherKind, OptionKey, OptionVocab, TitleForm, ValueKind};

/// A set of command names sharing one matcher shape.
pub(crate) struct CommandGroup {
    pub names: &'static [&'static str],
    pub kind: MatcherKind,
    pub classifications: &'static [Classification],
}

// --- Clamp vocabularies ------------------------------------------------

/// `\param[in]`, `\param[out]`, `\param[in,out]` in either order. Padding
/// is free, repetition and any other word are not.
pub(crate) static PARAM_DIRECTION: OptionVocab = OptionVocab {
    keys: &[OptionKey::Flag("in"), OptionKey::Flag("out")],
    case_sensitive: true,
    padding: true,
    max: Some(2),
    empty_ok: false,
    repeats: false,
};

pub(crate) static INHERITANCE_OPTIONS: OptionVocab = OptionVocab {
    keys: &[
        OptionKey::Flag("no"),
        OptionKey::Flag("yes"),
        OptionKey::Flag("text"),
        OptionKey::Flag("graph"),
        OptionKey::Flag("builtin"),
    ],
    case_sensitive: false,
    padding: true,
    max: Some(1),
    empty_ok: false,
    repeats: false,
};

pub(crate) static FILEINFO_OPTIONS: OptionVocab = OptionVocab {
    keys: &[
        OptionKey::Flag("name"),
        OptionKey::Flag("extension"),
        OptionKey::Flag("filename"),
        OptionKey::Flag("directory"),
        OptionKey::Flag("full"),
    ],
    case_sensitive: false,
    padding: true,
    max: Some(1),
    empty_ok: false,
    repeats: false,
};

pub(crate) static TOC_OPTIONS: OptionVocab = OptionVocab {
    keys: &[
        OptionKey::Keyed {
            key: "xml",
            sep: ':',
            value: ValueKind::Int { min: 1, max: 6 },
            value_required: false,
        },
        OptionKey::Keyed {
            key: "html",
            sep: ':',
            value: ValueKind::Int { min: 1, max: 6 },
            value_required: false,
        },
        OptionKey::Keyed {
            key: "latex",
            sep: ':',
            value: ValueKind::Int { min: 1, max: 6 },
            value_required: false,
        },
        OptionKey::Keyed {
            key: "docbook",
            sep: ':',
            value: ValueKind::Int { min: 1, max: 6 },
            value_required: false,
        },
    ],
    case_sensitive: false,
    padding: true,
    max: None,
    empty_ok: false,
    repeats: true,
};

pub(crate) static EXAMPLE_OPTIONS: OptionVocab = OptionVocab {
    keys: &[OptionKey::Flag("lineno")],
    case_sensitive: true,
    padding: true,
    max: Some(1),
    empty_ok: false,
    repeats: false,
};

pub(crate) static INCLUDE_OPTIONS: OptionVocab = OptionVocab {
    keys: &[
        OptionKey::Flag("lineno"),
        OptionKey::Flag("doc"),
        OptionKey::Flag("local"),
        OptionKey::Flag("strip"),
        OptionKey::Flag("nostrip"),
        OptionKey::Keyed {
            key: "raise",
            sep: '=',
            value: ValueKind::Int { min: 0, max: 5 },
            value_required: true,
        },
        OptionKey::Keyed {
            key: "prefix",
            sep: '=',
            value: ValueKind::Text,
            value_required: true,
        },
    ],
    case_sensitive: true,
    padding: true,
    max: None,
    empty_ok: true,
    repeats: true,
};

pub(crate) static SNIPPET_OPTIONS: OptionVocab = OptionVocab {
    keys: &[
        OptionKey::Flag("lineno"),
        OptionKey::Flag("doc"),
        OptionKey::Flag("local"),
        OptionKey::Flag("strip"),
        OptionKey::Flag("nostrip"),
        OptionKey::Flag("trimleft"),
        OptionKey::Keyed {
            key: "raise",
            sep: '=',
            value: ValueKind::Int { min: 0, max: 5 },
            value_required: true,
        },
        OptionKey::Keyed {
            key: "prefix",
            sep: '=',
            value: ValueKind::Text,
            value_required: true,
        },
    ],
    case_sensitive: true,
    padding: true,
    max: None,
    empty_ok: true,
    repeats: true,
};

/// Options of the `*doc` inclusion forms (`\includedoc`, `\snippetdoc`).
pub(crate) static DOC_INCLUDE_OPTIONS: OptionVocab = OptionVocab {
    keys: &[
        OptionKey::Flag("doc"),
        OptionKey::Keyed {
            key: "raise",
            sep: '=',
            value: ValueKind::Int { min: 0, max: 5 },
            value_required: true,
        },
        OptionKey::Keyed {
            key: "prefix",
            sep: '=',
            value: ValueKind::Text,
            value_required: true,
        },
    ],
    case_sensitive: true,
    padding: true,
    max: None,
    empty_ok: true,
    repeats: true,
};

/// `\code{.py}`: a single file extension, no padding anywhere.
pub(crate) static CODE_EXTENSION: OptionVocab = OptionVocab {
    keys: &[OptionKey::FileExt],
    case_sensitive: false,
    padding: false,
    max: Some(1),
    empty_ok: false,
    repeats: false,
};

/// `[block]` of `\htmlonly` and `\htmlinclude`.
pub(crate) static BLOCK_OPTION: OptionVocab = OptionVocab {
    keys: &[OptionKey::Flag("block")],
    case_sensitive: true,
    padding: true,
    max: Some(1),
    empty_ok: false,
    repeats: false,
};

pub(crate) static IMAGE_OPTIONS: OptionVocab = OptionVocab {
    keys: &[
        OptionKey::Flag("inline"),
        OptionKey::Keyed {
            key: "anchor",
            sep: ':',
            value: ValueKind::Text,
            value_required: true,
        },
    ],
    case_sensitive: false,
    padding: true,
    max: None,
    empty_ok: false,
    repeats: false,
};

/// `\startuml{...}` takes a free-form format/file list.
pub(crate) static STARTUML_OPTIONS: OptionVocab = OptionVocab {
    keys: &[OptionKey::Any],
    case_sensitive: true,
    padding: true,
    max: None,
    empty_ok: true,
    repeats: true,
};

/// Language identifiers accepted directly after `\~`.
pub(crate) static LANGUAGE_IDS: &[&str] = &[
    "afrikaans",
    "arabic",
    "armenian",
    "brazilian",
    "bulgarian",
    "catalan",
    "chinese",
    "chinese-traditional",
    "croatian",
    "czech",
    "danish",
    "dutch",
    "english",
    "esperanto",
    "farsi",
    "finnish",
    "french",
    "german",
    "greek",
    "hungarian",
    "indonesian",
    "italian",
    "japanese",
    "japanese-en",
    "korean",
    "korean-en",
    "latvian",
    "lithuanian",
    "macedonian",
    "norwegian",
    "persian",
    "polish",
    "portuguese",
    "romanian",
    "russian",
    "serbian",
    "serbian-cyrillic",
    "slovak",
    "slovene",
    "spanish",
    "swedish",
    "turkish",
    "ukrainian",
    "vietnamese",
];

// --- Shared classification lists ---------------------------------------

const BARE: &[Classification] = &[Command];
const BARE_NOTE: &[Classification] = &[Note];
const BARE_WARNING: &[Classification] = &[Warning];
const WITH_WORD: &[Classification] = &[Command, Parameter1];
const WITH_CLAMP: &[Classification] = &[Command, ParameterClamped];
const NAME_AND_TITLE: &[Classification] = &[Command, Parameter1, Title];
const CLAMP_AND_FILE: &[Classification] = &[Command, ParameterClamped, Parameter1];

// --- The table ----------------------------------------------------------

pub(crate) const BUILTIN_COMMANDS: &[CommandGroup] = &[
    // Structural indicators.
    CommandGroup {
        names: &[
            "callgraph",
            "hidecallgraph",
            "callergraph",
            "hidecallergraph",
            "showrefby",
            "hiderefby",
            "showrefs",
            "hiderefs",
            "referencedbyrelation",
            "referencesrelation",
            "showinlinesource",
            "hideinlinesource",
            "includegraph",
            "hideincludegraph",
            "includedbygraph",
            "hideincludedbygraph",
            "directorygraph",
            "hidedirectorygraph",
            "collaborationgraph",
            "hidecollaborationgraph",
            "hideinheritancegraph",
            "groupgraph",
            "hidegroupgraph",
            "showenumvalues",
            "hideenumvalues",
        ],
        kind: MatcherKind::Bare,
        classifications: BARE,
    },
    CommandGroup {
        names: &["inheritancegraph"],
        kind: MatcherKind::Options {
            vocab: &INHERITANCE_OPTIONS,
            adjacent: true,
        },
        classifications: WITH_CLAMP,
    },
    CommandGroup {
        names: &[
            "endinternal",
            "hideinitializer",
            "internal",
            "lineinfo",
            "nosubgrouping",
            "private",
            "privatesection",
            "protected",
            "protectedsection",
            "public",
            "publicsection",
            "pure",
            "showinitializer",
            "static",
        ],
        kind: MatcherKind::Bare,
        classifications: BARE,
    },
    CommandGroup {
        names: &["qualifier"],
        kind: MatcherKind::Args(&[ArgForm::WordOrQuoted]),
        classifications: WITH_WORD,
    },
    CommandGroup {
        names: &["category", "class", "interface", "protocol", "struct", "union"],
        kind: MatcherKind::Args(&[ArgForm::Word, ArgForm::Word, ArgForm::QuotedOrAngle]),
        classifications: &[Command, Parameter1, Parameter2, Title],
    },
    CommandGroup {
        names: &["headerfile"],
        kind: MatcherKind::Args(&[ArgForm::WordOrQuoted, ArgForm::WordQuotedOrAngle]),
        classifications: &[Command, Parameter1, Parameter2],
    },
    CommandGroup {
        names: &[
            "concept",
            "dir",
            "enum",
            "extends",
            "file",
            "ifile",
            "implements",
            "ingroup",
            "memberof",
            "module",
            "namespace",
            "package",
            "related",
            "relatedalso",
            "relates",
            "relatesalso",
        ],
        kind: MatcherKind::Args(&[ArgForm::Word]),
        classifications: WITH_WORD,
    },
    CommandGroup {
        names: &["def", "event", "fn", "overload", "property", "typedef", "var"],
        kind: MatcherKind::RestOfLine,
        classifications: WITH_WORD,
    },
    CommandGroup {
        names: &["addtogroup", "defgroup", "page", "weakgroup"],
        kind: MatcherKind::WordThenRest,
        classifications: NAME_AND_TITLE,
    },
    CommandGroup {
        names: &["mainpage", "name", "vhdlflow"],
        kind: MatcherKind::RestOfLine,
        classifications: &[Command, Title],
    },
    CommandGroup {
        names: &["fileinfo"],
        kind: MatcherKind::Options {
            vocab: &FILEINFO_OPTIONS,
            adjacent: true,
        },
        classifications: WITH_CLAMP,
    },
    CommandGroup {
        names: &["example"],
        kind: MatcherKind::OptionsFile {
            options: Some(&EXAMPLE_OPTIONS),
            title: TitleForm::None,
        },
        classifications: CLAMP_AND_FILE,
    },
    // Section indicators.
    CommandGroup {
        names: &[
            "author",
            "authors",
            "brief",
            "copyright",
            "date",
            "details",
            "invariant",
            "parblock",
            "endparblock",
            "post",
            "pre",
            "result",
            "return",
            "returns",
            "sa",
            "see",
            "short",
            "since",
            "version",
            "noop",
            "else",
            "endcond",
            "endif",
        ],
        kind: MatcherKind::Bare,
        classifications: BARE,
    },
    CommandGroup {
        names: &[
            "deprecated",
            "important",
            "note",
            "remark",
            "remarks",
            "test",
            "todo",
        ],
        kind: MatcherKind::Bare,
        classifications: BARE_NOTE,
    },
    CommandGroup {
        names: &["attention", "bug", "warning", "raisewarning"],
        kind: MatcherKind::Bare,
        classifications: BARE_WARNING,
    },
    CommandGroup {
        names: &["exception", "idlexcept", "throw", "throws"],
        kind: MatcherKind::Args(&[ArgForm::Word]),
        classifications: &[Exceptions, Parameter1],
    },
    CommandGroup {
        names: &["cond", "elseif", "if", "ifnot"],
        kind: MatcherKind::RestOfLine,
        classifications: WITH_WORD,
    },
    CommandGroup {
        names: &["par"],
        kind: MatcherKind::RestOfLine,
        classifications: &[Command, Title],
    },
    CommandGroup {
        names: &["param"],
        kind: MatcherKind::ClampedWord(&PARAM_DIRECTION),
        classifications: &[Command, ParameterClamped, Parameter1],
    },
    CommandGroup {
        names: &["retval", "tparam"],
        kind: MatcherKind::Args(&[ArgForm::IdentWord]),
        classifications: WITH_WORD,
    },
    CommandGroup {
        names: &["showdate"],
        kind: MatcherKind::Quoted1,
        classifications: WITH_WORD,
    },
    CommandGroup {
        names: &["xrefitem"],
        kind: MatcherKind::Args(&[ArgForm::IdentWord, ArgForm::Quoted, ArgForm::Quoted]),
        classifications: &[Command, Parameter1, Title, Title],
    },
    // Links and references.
    CommandGroup {
        names: &["addindex"],
        kind: MatcherKind::RestOfLine,
        classifications: &[Command, Title],
    },
    CommandGroup {
        names: &["anchor", "cite", "ianchor", "link", "refitem"],
        kind: MatcherKind::Args(&[ArgForm::Word]),
        classifications: WITH_WORD,
    },
    CommandGroup {
        names: &["endlink", "secreflist", "endsecreflist"],
        kind: MatcherKind::Bare,
        classifications: BARE,
    },
    CommandGroup {
        names: &["ref", "subpage"],
        kind: MatcherKind::RefTarget,
        classifications: NAME_AND_TITLE,
    },
    CommandGroup {
        names: &["tableofcontents"],
        kind: MatcherKind::Options {
            vocab: &TOC_OPTIONS,
            adjacent: true,
        },
        classifications: WITH_CLAMP,
    },
    CommandGroup {
        names: &[
            "section",
            "subsection",
            "subsubsection",
            "paragraph",
            "subparagraph",
            "subsubparagraph",
        ],
        kind: MatcherKind::WordThenRest,
        classifications: NAME_AND_TITLE,
    },
    // Example inclusion.
    CommandGroup {
        names: &["dontinclude", "include"],
        kind: MatcherKind::OptionsFile {
            options: Some(&INCLUDE_OPTIONS),
            title: TitleForm::None,
        },
        classifications: CLAMP_AND_FILE,
    },
    CommandGroup {
        names: &["includedoc"],
        kind: MatcherKind::OptionsFile {
            options: Some(&DOC_INCLUDE_OPTIONS),
            title: TitleForm::None,
        },
        classifications: CLAMP_AND_FILE,
    },
    CommandGroup {
        names: &["includelineno", "verbinclude"],
        kind: MatcherKind::Args(&[ArgForm::WordOrQuoted]),
        classifications: WITH_WORD,
    },
    CommandGroup {
        names: &["snippet"],
        kind: MatcherKind::OptionsFile {
            options: Some(&SNIPPET_OPTIONS),
            title: TitleForm::Rest,
        },
        classifications: &[Command, ParameterClamped, Parameter1, Title],
    },
    CommandGroup {
        names: &["snippetdoc"],
        kind: MatcherKind::OptionsFile {
            options: Some(&DOC_INCLUDE_OPTIONS),
            title: TitleForm::Rest,
        },
        classifications: &[Command, ParameterClamped, Parameter1, Title],
    },
    CommandGroup {
        names: &["snippetlineno"],
        kind: MatcherKind::OptionsFile {
            options: None,
            title: TitleForm::Rest,
        },
        classifications: NAME_AND_TITLE,
    },
    CommandGroup {
        names: &["skip", "skipline", "iskipline", "until", "line", "iline"],
        kind: MatcherKind::RestOfLine,
        classifications: WITH_WORD,
    },
    CommandGroup {
        names: &["htmlinclude"],
        kind: MatcherKind::BracketFile {
            options: &BLOCK_OPTION,
            file: true,
        },
        classifications: CLAMP_AND_FILE,
    },
    CommandGroup {
        names: &[
            "latexinclude",
            "rtfinclude",
            "maninclude",
            "docbookinclude",
            "xmlinclude",
        ],
        kind: MatcherKind::Args(&[ArgForm::WordOrQuoted]),
        classifications: WITH_WORD,
    },
    // Visual markup.
    CommandGroup {
        names: &["a", "e", "em"],
        kind: MatcherKind::Args(&[ArgForm::Word]),
        classifications: &[Command, EmphasisMinor],
    },
    CommandGroup {
        names: &["b"],
        kind: MatcherKind::Args(&[ArgForm::Word]),
        classifications: &[Command, EmphasisMajor],
    },
    CommandGroup {
        names: &["c", "p"],
        kind: MatcherKind::Args(&[ArgForm::Word]),
        classifications: &[Command, InlineCode],
    },
    CommandGroup {
        names: &["arg", "li", "n"],
        kind: MatcherKind::Bare,
        classifications: BARE,
    },
    CommandGroup {
        names: &["code", "icode"],
        // Alone among the `{...}` commands, the code pair tolerates
        // whitespace before the extension clamp.
        kind: MatcherKind::Options {
            vocab: &CODE_EXTENSION,
            adjacent: false,
        },
        classifications: WITH_CLAMP,
    },
    CommandGroup {
        names: &["copybrief", "copydetails", "copydoc"],
        kind: MatcherKind::Args(&[ArgForm::Word]),
        classifications: WITH_WORD,
    },
    CommandGroup {
        names: &["doxyconfig"],
        kind: MatcherKind::Args(&[ArgForm::IdentWord]),
        classifications: WITH_WORD,
    },
    CommandGroup {
        names: &["emoji"],
        kind: MatcherKind::Args(&[ArgForm::Word]),
        classifications: WITH_WORD,
    },
    CommandGroup {
        names: &[
            "endcode",
            "endicode",
            "docbookonly",
            "enddocbookonly",
            "enddot",
            "endmsc",
            "enduml",
            "endhtmlonly",
            "latexonly",
            "endlatexonly",
            "manonly",
            "endmanonly",
            "rtfonly",
            "endrtfonly",
            "verbatim",
            "endverbatim",
            "xmlonly",
            "endxmlonly",
        ],
        kind: MatcherKind::Bare,
        classifications: BARE,
    },
    CommandGroup {
        names: &["htmlonly"],
        kind: MatcherKind::BracketFile {
            options: &BLOCK_OPTION,
            file: false,
        },
        classifications: WITH_CLAMP,
    },
    CommandGroup {
        names: &["dot", "msc"],
        kind: MatcherKind::Diagram {
            options: None,
            file: false,
        },
        classifications: &[Command, Title, Parameter2, Parameter2],
    },
    CommandGroup {
        names: &["startuml"],
        kind: MatcherKind::Diagram {
            options: Some(&STARTUML_OPTIONS),
            file: false,
        },
        classifications: &[Command, ParameterClamped, Title, Parameter2, Parameter2],
    },
    CommandGroup {
        names: &["diafile", "dotfile", "mscfile", "plantumlfile"],
        kind: MatcherKind::Diagram {
            options: None,
            file: true,
        },
        classifications: &[Command, Parameter1, Title, Parameter2, Parameter2],
    },
    CommandGroup {
        names: &["image"],
        kind: MatcherKind::Image(&IMAGE_OPTIONS),
        classifications: &[
            Command,
            ParameterClamped,
            Parameter1,
            Parameter2,
            Title,
            Parameter2,
            Parameter2,
        ],
    },
    CommandGroup {
        names: &["~"],
        kind: MatcherKind::AdjacentKeyword(LANGUAGE_IDS),
        classifications: WITH_WORD,
    },
    // Formula delimiters.
    CommandGroup {
        names: &["f$", "f(", "f)", "f[", "f]", "f{", "f}"],
        kind: MatcherKind::Bare,
        classifications: BARE,
    },
    // Escaped literals.
    CommandGroup {
        names: &[
            "\\", "@", "&", "$", "#", "<", ">", "%", "\"", ".", "?", "!", "=", "::", "|",
            "---", "--", "{", "}",
        ],
        kind: MatcherKind::Bare,
        classifications: BARE,
    },
];
