//! Ordering of the publication list.
//!
//! Newest papers first; within a year, venues earlier in the precedence list
//! first; remaining ties alphabetical by venue code.

use std::cmp::Reverse;

use crate::entry::NormalizedPaper;

/// Built-in venue precedence, in the order papers of one year are listed.
const BUILTIN_PRECEDENCE: &[&str] = &[
    "TPAMI", "NAACL", "EMNLP", "ICLR", "AAAI", "COLING", "NeurIPS", "ICCV", "ECCV", "ACL", "CVPR",
    "CONLL",
];

/// An ordered list of venue codes used as the secondary sort key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConferenceOrder {
    codes: Vec<String>,
}

impl ConferenceOrder {
    pub fn new(codes: Vec<String>) -> Self {
        Self { codes }
    }

    /// The compiled-in precedence list.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_PRECEDENCE.iter().map(|c| c.to_string()).collect())
    }

    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    /// Index of `venue` in the list, or the list length for unlisted venues.
    pub fn rank(&self, venue: &str) -> usize {
        self.codes
            .iter()
            .position(|code| code == venue)
            .unwrap_or(self.codes.len())
    }
}

impl Default for ConferenceOrder {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Sorts papers in place by `(-year, rank(venue), lowercase(venue))`.
///
/// The sort is stable: papers with identical keys keep their input order.
pub fn sort_papers(papers: &mut [NormalizedPaper], order: &ConferenceOrder) {
    papers.sort_by_cached_key(|paper| {
        (
            Reverse(paper.year),
            order.rank(&paper.venue),
            paper.venue.to_lowercase(),
        )
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paper(key: &str, year: i32, venue: &str) -> NormalizedPaper {
        NormalizedPaper {
            key: key.to_string(),
            year,
            venue: venue.to_string(),
            text: format!("{} {} {}", key, venue, year),
        }
    }

    fn keys(papers: &[NormalizedPaper]) -> Vec<&str> {
        papers.iter().map(|p| p.key.as_str()).collect()
    }

    #[test]
    fn test_rank_listed_and_unlisted() {
        let order = ConferenceOrder::builtin();
        assert_eq!(order.rank("TPAMI"), 0);
        assert_eq!(order.rank("ACL"), 9);
        assert_eq!(order.rank("ISCA"), order.codes().len());
    }

    #[test]
    fn test_rank_is_case_sensitive() {
        let order = ConferenceOrder::builtin();
        assert_eq!(order.rank("acl"), order.codes().len());
    }

    #[test]
    fn test_sort_newest_year_first() {
        // Given: an older paper at a top-ranked venue and a newer one anywhere
        let mut papers = vec![paper("old", 2022, "TPAMI"), paper("new", 2023, "Nature")];

        // When: we sort
        sort_papers(&mut papers, &ConferenceOrder::builtin());

        // Then: the year decides first
        assert_eq!(keys(&papers), vec!["new", "old"]);
    }

    #[test]
    fn test_sort_precedence_within_year() {
        let mut papers = vec![
            paper("isca", 2023, "ISCA"),
            paper("cvpr", 2023, "CVPR"),
            paper("acl", 2023, "ACL"),
        ];

        sort_papers(&mut papers, &ConferenceOrder::builtin());

        // ACL (index 9) before CVPR (index 10) before unlisted ISCA
        assert_eq!(keys(&papers), vec!["acl", "cvpr", "isca"]);
    }

    #[test]
    fn test_sort_unlisted_venues_alphabetical_ignoring_case() {
        let mut papers = vec![
            paper("z", 2020, "zeta Journal"),
            paper("b", 2020, "Beta"),
            paper("a", 2020, "alpha"),
        ];

        sort_papers(&mut papers, &ConferenceOrder::builtin());

        assert_eq!(keys(&papers), vec!["a", "b", "z"]);
    }

    #[test]
    fn test_sort_empty_venue_first_among_unlisted() {
        let mut papers = vec![paper("named", 2020, "Nature"), paper("blank", 2020, "")];

        sort_papers(&mut papers, &ConferenceOrder::builtin());

        assert_eq!(keys(&papers), vec!["blank", "named"]);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let mut papers = vec![
            paper("first", 2021, "ICLR"),
            paper("second", 2021, "ICLR"),
            paper("third", 2021, "ICLR"),
        ];

        sort_papers(&mut papers, &ConferenceOrder::builtin());

        assert_eq!(keys(&papers), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_sort_with_custom_order() {
        let order = ConferenceOrder::new(vec!["CVPR".to_string(), "ACL".to_string()]);
        let mut papers = vec![paper("acl", 2023, "ACL"), paper("cvpr", 2023, "CVPR")];

        sort_papers(&mut papers, &order);

        assert_eq!(keys(&papers), vec!["cvpr", "acl"]);
    }
}
