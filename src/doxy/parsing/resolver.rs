//! Arbitration between overlapping candidate matches.
//!
//! Command matches and markdown spans are collected independently and may
//! claim overlapping text. A single left-to-right sweep settles ownership:
//! the earliest-starting candidate wins, ties go to the lowest priority
//! number, and a losing candidate is discarded whole. Regions claimed only
//! by losers stay open for later candidates.

use std::ops::Range;

use crate::doxy::fragments::{Fragment, FragmentGroup};

pub(crate) const PRIORITY_COMMAND: u8 = 0;
pub(crate) const PRIORITY_INLINE_CODE: u8 = 1;
pub(crate) const PRIORITY_BOLD: u8 = 2;
pub(crate) const PRIORITY_STRIKETHROUGH: u8 = 3;
pub(crate) const PRIORITY_ITALIC: u8 = 4;

/// One match claiming `start..end`, produced by a command matcher or the
/// markdown scanner. Offsets are absolute within the parsed text.
pub(crate) struct Candidate {
    pub start: usize,
    pub end: usize,
    pub priority: u8,
    pub fragments: Vec<Fragment>,
}

impl Candidate {
    pub(crate) fn extent(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Resolves overlaps and returns the surviving matches as groups, in text
/// order.
pub(crate) fn resolve(mut candidates: Vec<Candidate>) -> Vec<FragmentGroup> {
    candidates.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then(a.priority.cmp(&b.priority))
            .then(b.end.cmp(&a.end))
    });
    let mut groups = Vec::new();
    let mut claimed_to = 0;
    for candidate in candidates {
        if candidate.start < claimed_to {
            continue;
        }
        claimed_to = candidate.end;
        groups.push(FragmentGroup::new(candidate.extent(), candidate.fragments));
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doxy::fragments::Classification;

    fn candidate(start: usize, end: usize, priority: u8) -> Candidate {
        Candidate {
            start,
            end,
            priority,
            fragments: vec![Fragment::new(start, end - start, Classification::Command)],
        }
    }

    #[test]
    fn earlier_start_wins_over_higher_priority() {
        let italic = candidate(0, 12, PRIORITY_ITALIC);
        let command = candidate(4, 10, PRIORITY_COMMAND);
        let groups = resolve(vec![command, italic]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].extent, 0..12);
    }

    #[test]
    fn priority_breaks_ties_at_the_same_start() {
        let italic = candidate(3, 20, PRIORITY_ITALIC);
        let command = candidate(3, 9, PRIORITY_COMMAND);
        let groups = resolve(vec![italic, command]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].extent, 3..9);
    }

    #[test]
    fn longer_extent_breaks_full_ties() {
        let short = candidate(3, 6, PRIORITY_BOLD);
        let long = candidate(3, 11, PRIORITY_BOLD);
        let groups = resolve(vec![short, long]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].extent, 3..11);
    }

    #[test]
    fn losers_do_not_block_later_candidates() {
        let winner = candidate(0, 5, PRIORITY_COMMAND);
        let loser = candidate(3, 10, PRIORITY_ITALIC);
        let after = candidate(6, 9, PRIORITY_BOLD);
        let groups = resolve(vec![loser, after, winner]);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].extent, 0..5);
        assert_eq!(groups[1].extent, 6..9);
    }

    #[test]
    fn disjoint_candidates_all_survive_in_text_order() {
        let groups = resolve(vec![
            candidate(10, 14, PRIORITY_ITALIC),
            candidate(0, 4, PRIORITY_COMMAND),
            candidate(5, 9, PRIORITY_INLINE_CODE),
        ]);
        let extents: Vec<_> = groups.iter().map(|g| g.extent.clone()).collect();
        assert_eq!(extents, vec![0..4, 5..9, 10..14]);
    }

    #[test]
    fn adjacent_extents_do_not_conflict() {
        let groups = resolve(vec![
            candidate(0, 4, PRIORITY_COMMAND),
            candidate(4, 8, PRIORITY_COMMAND),
        ]);
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn empty_input_resolves_to_nothing() {
        assert!(resolve(Vec::new()).is_empty());
    }
}
