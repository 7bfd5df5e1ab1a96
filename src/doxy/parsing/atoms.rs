//! Regex building blocks shared by the command matchers.
//!
//! Matchers are compiled twice, once per comment family. In line comments a
//! backslash directly before a line break splices the next physical line
//! onto the logical line, so the whitespace and rest-of-line atoms treat
//! `\<newline>` as transparent. Block comments have no continuations; there
//! a logical line is the physical line.

use crate::doxy::lexing::CommentStyle;

/// The two matcher compilation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum CommentFamily {
    Line,
    Block,
}

impl CommentFamily {
    pub(crate) fn of(style: CommentStyle) -> CommentFamily {
        if style.is_line() {
            CommentFamily::Line
        } else {
            CommentFamily::Block
        }
    }

    pub(crate) fn atoms(self) -> &'static Atoms {
        match self {
            CommentFamily::Line => &LINE_ATOMS,
            CommentFamily::Block => &BLOCK_ATOMS,
        }
    }
}

/// Family-dependent pattern pieces.
pub(crate) struct Atoms {
    /// One or more horizontal whitespace characters.
    pub ws: &'static str,
    /// Zero or more horizontal whitespace characters.
    pub ws_opt: &'static str,
    /// Rest of the logical line, right-trimmed, at least one character.
    pub rest: &'static str,
}

pub(crate) static LINE_ATOMS: Atoms = Atoms {
    ws: r"(?:[ \t]|\\\r?\n)+",
    ws_opt: r"(?:[ \t]|\\\r?\n)*",
    rest: r"(?:[^\r\n]|\\\r?\n)*[^ \t\r\n]",
};

pub(crate) static BLOCK_ATOMS: Atoms = Atoms {
    ws: r"[ \t]+",
    ws_opt: r"[ \t]*",
    rest: r"[^\r\n]*[^ \t\r\n]",
};

/// Whitespace-delimited token.
pub(crate) const WORD: &str = r"[^ \t\r\n]+";

/// Token that starts like an identifier (parameter names).
pub(crate) const IDENT_WORD: &str = r"[A-Za-z_][^ \t\r\n]*";

/// Double-quoted string, quotes included.
pub(crate) const QUOTED: &str = r#""[^"\r\n]*""#;

/// Angle-bracketed token such as `<header.h>`.
pub(crate) const ANGLE: &str = r"<[^<>\r\n]*>";

/// File argument: a quoted string, or a word that cannot be mistaken for a
/// stray quote, brace, or bracket clamp.
pub(crate) const FILE: &str = r#"(?:"[^"\r\n]*"|[^ \t\r\n"{\[][^ \t\r\n]*)"#;

/// Raw `{...}` group, contents validated separately.
pub(crate) const BRACE_RAW: &str = r"\{[^{}\r\n]*\}";

/// Raw `[...]` group, contents validated separately.
pub(crate) const BRACKET_RAW: &str = r"\[[^\[\]\r\n]*\]";

/// Width or height argument of the diagram commands.
pub(crate) const SIZE: &str = r"(?:width|height)=[^ \t\r\n]+";

/// Link target: identifier path joined by `::` or `.`, with one optional
/// argument list in parentheses.
pub(crate) const REF_TARGET: &str =
    r"[A-Za-z_][A-Za-z0-9_]*(?:(?:::|\.)[A-Za-z_][A-Za-z0-9_]*)*(?:\([^()\r\n]*\))?";

/// Output format keywords of `\image`, longest spelling first.
pub(crate) const IMAGE_FORMATS: &str = r"(?i:docbook|latex|html|rtf|xml)";

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn line_rest_crosses_continuations() {
        let re = Regex::new(&format!("^{}$", LINE_ATOMS.rest)).unwrap();
        assert!(re.is_match("title \\\ncontinued"));
        assert!(!re.is_match("title \nsplit"));
    }

    #[test]
    fn block_rest_stays_on_the_physical_line() {
        let re = Regex::new(&format!("^{}$", BLOCK_ATOMS.rest)).unwrap();
        assert!(re.is_match("a plain title"));
        assert!(!re.is_match("no \\\ncrossing"));
    }

    #[test]
    fn rest_is_right_trimmed() {
        let re = Regex::new(BLOCK_ATOMS.rest).unwrap();
        let found = re.find("some title   ").unwrap();
        assert_eq!(found.as_str(), "some title");
    }

    #[test]
    fn file_rejects_leading_clamp_characters() {
        let re = Regex::new(&format!("^{FILE}$")).unwrap();
        assert!(re.is_match("dir/file.cpp"));
        assert!(re.is_match("\"a name with spaces.cpp\""));
        assert!(!re.is_match("{local}"));
        assert!(!re.is_match("[block]"));
    }

    #[test]
    fn ref_target_shapes() {
        let re = Regex::new(&format!("^{REF_TARGET}$")).unwrap();
        assert!(re.is_match("subsection1"));
        assert!(re.is_match("Class::Func(double,int)"));
        assert!(re.is_match("Class.Func()"));
        assert!(!re.is_match("Class::"));
    }
}
