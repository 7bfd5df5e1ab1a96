//! End-to-end coverage of the structural and section commands.
//!
//! Every check goes through the public parser so it exercises comment
//! splitting, matching, and overlap resolution together.

use doxy_parser::doxy::fragments::Classification::{self, *};
use doxy_parser::doxy::parsing::parse;
use doxy_parser::doxy::testing::{assert_fragment_integrity, labeled_fragments};

fn check(text: &str, expected: &[(&str, Classification)]) {
    let groups = parse(text);
    assert_fragment_integrity(text, &groups);
    assert_eq!(labeled_fragments(text, &groups), expected, "text: {text:?}");
}

#[test]
fn every_comment_style_recognizes_commands() {
    for text in [
        "// \\brief x",
        "/// \\brief x",
        "//! \\brief x",
        "/* \\brief x */",
        "/** \\brief x */",
        "/*! \\brief x */",
    ] {
        check(text, &[("\\brief", Command)]);
    }
}

#[test]
fn bare_structural_indicators_claim_only_their_token() {
    check("/// \\callgraph", &[("\\callgraph", Command)]);
    check("/// \\hideincludedbygraph", &[("\\hideincludedbygraph", Command)]);
    check(
        "/// \\static \\public text after",
        &[("\\static", Command), ("\\public", Command)],
    );
}

#[test]
fn word_commands_take_one_token() {
    check(
        "/// \\namespace core::detail",
        &[("\\namespace", Command), ("core::detail", Parameter1)],
    );
    check(
        "/// \\ingroup group_io extra words",
        &[("\\ingroup", Command), ("group_io", Parameter1)],
    );
    check(
        "/// \\copydoc Foo::bar()",
        &[("\\copydoc", Command), ("Foo::bar()", Parameter1)],
    );
}

#[test]
fn declaration_commands_take_the_rest_of_the_line() {
    check(
        "/// \\fn int add(int a, int b)",
        &[("\\fn", Command), ("int add(int a, int b)", Parameter1)],
    );
    check(
        "/// \\var int counter = 0\n/// next line",
        &[("\\var", Command), ("int counter = 0", Parameter1)],
    );
}

#[test]
fn group_definitions_split_name_and_title() {
    check(
        "/// \\defgroup math Math functions",
        &[
            ("\\defgroup", Command),
            ("math", Parameter1),
            ("Math functions", Title),
        ],
    );
    check(
        "/// \\addtogroup math",
        &[("\\addtogroup", Command), ("math", Parameter1)],
    );
}

#[test]
fn sections_and_pages_carry_titles() {
    check(
        "/// \\section sec_intro The Introduction",
        &[
            ("\\section", Command),
            ("sec_intro", Parameter1),
            ("The Introduction", Title),
        ],
    );
    check(
        "/// \\mainpage My Project",
        &[("\\mainpage", Command), ("My Project", Title)],
    );
    check(
        "/// \\page pg1 \"Quoted Title\"",
        &[("\\page", Command), ("pg1", Parameter1), ("Quoted Title", Title)],
    );
    check(
        "/// \\subsubparagraph p1 Deep",
        &[("\\subsubparagraph", Command), ("p1", Parameter1), ("Deep", Title)],
    );
}

#[test]
fn note_and_warning_families_use_their_classifications() {
    check("/// \\note careful here", &[("\\note", Note)]);
    check("/// \\todo finish this", &[("\\todo", Note)]);
    check("/// \\deprecated old", &[("\\deprecated", Note)]);
    check("/// \\warning hot surface", &[("\\warning", Warning)]);
    check("/// \\bug fails on empty input", &[("\\bug", Warning)]);
    check("/// \\raisewarning custom", &[("\\raisewarning", Warning)]);
}

#[test]
fn exception_commands_have_their_own_token_classification() {
    check(
        "/// \\throw std::out_of_range when empty",
        &[("\\throw", Exceptions), ("std::out_of_range", Parameter1)],
    );
    check(
        "/// \\exception overflow_error on wrap",
        &[("\\exception", Exceptions), ("overflow_error", Parameter1)],
    );
}

#[test]
fn par_carries_a_free_form_title() {
    check(
        "/// \\par User Section Heading",
        &[("\\par", Command), ("User Section Heading", Title)],
    );
    check("/// \\par\n/// body", &[("\\par", Command)]);
}

#[test]
fn xrefitem_takes_key_and_two_quoted_headings() {
    check(
        "/// \\xrefitem todo \"Todo\" \"The todo list\" rest",
        &[
            ("\\xrefitem", Command),
            ("todo", Parameter1),
            ("Todo", Title),
            ("The todo list", Title),
        ],
    );
    // A missing key leaves the headings unclaimed.
    check(
        "/// \\xrefitem \"Todo\" \"The todo list\"",
        &[("\\xrefitem", Command)],
    );
}

#[test]
fn conditionals_capture_their_expression() {
    check("/// \\if DEBUG", &[("\\if", Command), ("DEBUG", Parameter1)]);
    check(
        "/// \\cond A && !B",
        &[("\\cond", Command), ("A && !B", Parameter1)],
    );
    check("/// \\endcond", &[("\\endcond", Command)]);
}

#[test]
fn class_like_commands_take_up_to_three_arguments() {
    check(
        "/// \\class Test test.h <test/inc.h>",
        &[
            ("\\class", Command),
            ("Test", Parameter1),
            ("test.h", Parameter2),
            ("<test/inc.h>", Title),
        ],
    );
    check(
        "/// \\struct Point",
        &[("\\struct", Command), ("Point", Parameter1)],
    );
    check(
        "/// \\headerfile test.h \"inc\"",
        &[
            ("\\headerfile", Command),
            ("test.h", Parameter1),
            ("\"inc\"", Parameter2),
        ],
    );
}

#[test]
fn option_clamps_validate_their_vocabulary() {
    check(
        "/// \\fileinfo{name}",
        &[("\\fileinfo", Command), ("{name}", ParameterClamped)],
    );
    check(
        "/// \\inheritancegraph{YES}",
        &[("\\inheritancegraph", Command), ("{YES}", ParameterClamped)],
    );
    // Two keys where one is allowed: the command stands alone.
    check("/// \\fileinfo{full,name}", &[("\\fileinfo", Command)]);
}

#[test]
fn retval_and_tparam_need_identifier_names() {
    check(
        "/// \\retval SUCCESS on completion",
        &[("\\retval", Command), ("SUCCESS", Parameter1)],
    );
    check(
        "/// \\tparam T element type",
        &[("\\tparam", Command), ("T", Parameter1)],
    );
    // `-1` does not start like an identifier.
    check("/// \\retval -1 on error", &[("\\retval", Command)]);
}

#[test]
fn overlapping_commands_keep_the_earlier_match() {
    // `\namespace` claims `\ref` as its argument word; the suppressed
    // `\ref` match leaves no fragments behind.
    check(
        "/// \\namespace \\ref after",
        &[("\\namespace", Command), ("\\ref", Parameter1)],
    );
}

#[test]
fn prefix_spelling_applies_per_command() {
    check(
        "/// @defgroup g1 Title words",
        &[("@defgroup", Command), ("g1", Parameter1), ("Title words", Title)],
    );
    check("/// @brief @note", &[("@brief", Command), ("@note", Note)]);
}
