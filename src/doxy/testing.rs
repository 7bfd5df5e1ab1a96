//! Assertion and rendering helpers shared by the test suites.
//!
//! Kept in the library so integration tests and doctests can use the same
//! checks; nothing here is useful outside of tests.

use super::fragments::{Classification, FragmentGroup};

/// Panics unless `groups` is internally consistent against `text`.
///
/// Checks, across all groups in order: extents and fragments stay inside
/// `text` on character boundaries, every fragment is non-empty and lies
/// within its group's extent, and no two fragments overlap anywhere.
pub fn assert_fragment_integrity(text: &str, groups: &[FragmentGroup]) {
    let mut previous_end = 0;
    let mut previous_start = 0;
    for group in groups {
        assert!(
            group.extent.start <= group.extent.end && group.extent.end <= text.len(),
            "group extent {:?} escapes the text (len {})",
            group.extent,
            text.len(),
        );
        assert!(
            previous_start <= group.start(),
            "groups out of order at {}",
            group.start(),
        );
        previous_start = group.start();
        assert!(
            !group.fragments.is_empty(),
            "group {:?} carries no fragments",
            group.extent,
        );
        for fragment in &group.fragments {
            assert!(fragment.len > 0, "empty fragment at {}", fragment.start);
            assert!(
                fragment.end() <= text.len(),
                "fragment {fragment} escapes the text",
            );
            assert!(
                text.is_char_boundary(fragment.start) && text.is_char_boundary(fragment.end()),
                "fragment {fragment} splits a character",
            );
            assert!(
                group.extent.start <= fragment.start && fragment.end() <= group.extent.end,
                "fragment {fragment} escapes its group {:?}",
                group.extent,
            );
            assert!(
                fragment.start >= previous_end,
                "fragment {fragment} overlaps the previous one",
            );
            previous_end = fragment.end();
        }
    }
}

/// The fragment texts of `groups`, flattened in order.
pub fn fragment_texts<'a>(text: &'a str, groups: &[FragmentGroup]) -> Vec<&'a str> {
    groups
        .iter()
        .flat_map(|group| group.fragments.iter().map(|f| f.slice(text)))
        .collect()
}

/// Fragment texts paired with their classifications, flattened in order.
pub fn labeled_fragments<'a>(
    text: &'a str,
    groups: &[FragmentGroup],
) -> Vec<(&'a str, Classification)> {
    groups
        .iter()
        .flat_map(|group| {
            group
                .fragments
                .iter()
                .map(|f| (f.slice(text), f.classification))
        })
        .collect()
}

/// Renders `groups` as one line per fragment, for snapshot assertions.
pub fn render_fragments(text: &str, groups: &[FragmentGroup]) -> String {
    let mut out = String::new();
    for group in groups {
        out.push_str(&format!(
            "group {}..{}\n",
            group.extent.start, group.extent.end
        ));
        for fragment in &group.fragments {
            out.push_str(&format!(
                "  {}..{} {} {:?}\n",
                fragment.start,
                fragment.end(),
                fragment.classification,
                fragment.slice(text),
            ));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doxy::fragments::Fragment;
    use crate::doxy::parsing::parse;

    #[test]
    fn real_parses_pass_the_integrity_check() {
        let text = "/// \\brief One **two** `three`\n/* \\param[in] x value */";
        let groups = parse(text);
        assert!(!groups.is_empty());
        assert_fragment_integrity(text, &groups);
    }

    #[test]
    #[should_panic(expected = "overlaps")]
    fn overlapping_fragments_are_rejected() {
        let text = "0123456789";
        let groups = vec![FragmentGroup::new(
            0..9,
            vec![
                Fragment::new(0, 5, Classification::Command),
                Fragment::new(4, 5, Classification::Title),
            ],
        )];
        assert_fragment_integrity(text, &groups);
    }

    #[test]
    #[should_panic(expected = "escapes the text")]
    fn out_of_bounds_fragments_are_rejected() {
        let groups = vec![FragmentGroup::new(
            0..4,
            vec![Fragment::new(0, 4, Classification::Command)],
        )];
        assert_fragment_integrity("ab", &groups);
    }

    #[test]
    fn labeled_fragments_flatten_in_order() {
        let text = "/// \\a one and \\b two";
        let groups = parse(text);
        let labels = labeled_fragments(text, &groups);
        assert_eq!(
            labels,
            vec![
                ("\\a", Classification::Command),
                ("one", Classification::EmphasisMinor),
                ("\\b", Classification::Command),
                ("two", Classification::EmphasisMajor),
            ]
        );
        assert_eq!(fragment_texts(text, &groups), vec!["\\a", "one", "\\b", "two"]);
    }

    #[test]
    fn render_lists_one_line_per_fragment() {
        let text = "/// \\brief";
        let rendered = render_fragments(text, &parse(text));
        assert_eq!(rendered, "group 4..10\n  4..10 command \"\\\\brief\"\n");
    }
}
