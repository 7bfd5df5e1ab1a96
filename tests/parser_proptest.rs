//! Property-based tests for the whole parse pipeline.
//!
//! These tests throw generated text at the parser and check the guarantees
//! that must hold for any input at all:
//! - parsing never panics and every fragment passes the integrity checks
//! - fragments only ever appear inside comment content
//! - the grouped and flat views describe the same fragments
//! - parsing is deterministic

use doxy_parser::doxy::fragments::{Classification, Fragment};
use doxy_parser::doxy::lexing::split_comments;
use doxy_parser::doxy::parsing::{parse, DoxygenParser, EnabledStyles};
use doxy_parser::doxy::testing::{assert_fragment_integrity, labeled_fragments};
use proptest::prelude::*;

/// Generate text dense in structural bytes so comment delimiters, commands,
/// and markdown markers actually collide.
fn comment_soup() -> impl Strategy<Value = String> {
    prop_oneof![
        "[/*!@a-z0-9 \\t\\n`_~\"<>.={}\\[\\]\\\\-]{0,80}",
        // Anything printable, multibyte included.
        "\\PC{0,40}",
    ]
}

fn doc_opener() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("///"), Just("//!")]
}

/// Commands that take no arguments and classify as plain commands.
fn bare_command() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("brief"),
        Just("author"),
        Just("return"),
        Just("see"),
        Just("since"),
    ]
}

/// A doc line with one bare command between two harmless words, paired with
/// the command token the parse must find.
fn composed_doc_line() -> impl Strategy<Value = (String, String)> {
    (doc_opener(), bare_command(), "[a-z]{1,8}", "[a-z]{1,8}").prop_map(
        |(opener, command, before, after)| {
            (
                format!("{opener} {before} \\{command} {after}"),
                format!("\\{command}"),
            )
        },
    )
}

#[cfg(test)]
mod proptest_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn parsing_never_breaks_fragment_integrity(text in comment_soup()) {
            let groups = parse(&text);
            assert_fragment_integrity(&text, &groups);
        }

        #[test]
        fn fragments_stay_inside_comment_content(text in comment_soup()) {
            let spans = split_comments(&text);
            for fragment in DoxygenParser::new().parse_flat(&text) {
                let inside = spans.iter().any(|span| {
                    span.content.start <= fragment.start
                        && fragment.end() <= span.content.end
                });
                prop_assert!(
                    inside,
                    "fragment {} lies outside every comment",
                    fragment
                );
            }
        }

        #[test]
        fn flat_and_grouped_views_agree(text in comment_soup()) {
            let parser = DoxygenParser::new();
            let grouped: Vec<Fragment> = parser
                .parse(&text)
                .iter()
                .flat_map(|group| group.fragments.iter().copied())
                .collect();
            prop_assert_eq!(parser.parse_flat(&text), grouped);
        }

        #[test]
        fn parsing_is_deterministic(text in comment_soup()) {
            prop_assert_eq!(parse(&text), parse(&text));
        }

        #[test]
        fn disabled_parser_emits_nothing(text in comment_soup()) {
            let parser = DoxygenParser::new().with_styles(EnabledStyles::none());
            prop_assert!(parser.parse(&text).is_empty());
        }

        #[test]
        fn doc_lines_always_classify_their_bare_command(
            (text, command) in composed_doc_line()
        ) {
            let groups = parse(&text);
            assert_fragment_integrity(&text, &groups);
            prop_assert_eq!(
                labeled_fragments(&text, &groups),
                vec![(command.as_str(), Classification::Command)],
                "text: {:?}", text
            );
        }
    }
}
