//! Venue abbreviation.
//!
//! Maps free-text venue names (proceedings titles, journal names) to short
//! codes by case-insensitive substring matching against an ordered table.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Built-in abbreviation rules as (pattern, code), in match order.
///
/// Order matters: the first pattern found in a venue wins.
const BUILTIN_VENUES: &[(&str, &str)] = &[
    ("ACM SIGKDD", "KDD"),
    ("Computer Vision and Pattern Recognition", "CVPR"),
    ("arXiv preprint", "Preprint"),
    ("International Conference on Learning Representations", "ICLR"),
    ("Advances in Neural Information Processing Systems", "NeurIPS"),
    ("Association for Computational Linguistics", "ACL"),
    ("International Conference on Data Mining", "ICDM"),
    ("International Joint Conference on Artificial Intelligence", "IJCAI"),
    ("Conference on Computer Vision and Pattern Recognition", "CVPR"),
    ("International Conference on Computer Vision", "ICCV"),
    (
        "International Conference on Database Systems for Advanced Applications",
        "DASFAA",
    ),
    ("Symposium on Theory of Computing", "STOC"),
    ("International Symposium on Computer Architecture", "ISCA"),
    ("ACM Conference on Information and Knowledge Management", "CIKM"),
    ("International Conference on Web Search and Data Mining", "WSDM"),
    ("International Conference on Very Large Data Bases", "VLDB"),
    (
        "Annual Meeting of the Association for Computational Linguistics",
        "ACL",
    ),
    (
        "International Conference on Automated Planning and Scheduling",
        "ICAPS",
    ),
    ("International Symposium on Information Theory", "ISIT"),
    ("IEEE International Conference on Robotics and Automation", "ICRA"),
    ("European Conference on Computer Vision", "ECCV"),
    (
        "International Symposium on Software Testing and Analysis",
        "ISSTA",
    ),
    (
        "International Symposium on Theoretical Aspects of Software Engineering",
        "TASE",
    ),
    (
        "International Conference on Artificial Intelligence and Statistics",
        "AISTATS",
    ),
    ("IEEE International Conference on Data Engineering", "ICDE"),
    (
        "International Conference on Principles of Knowledge Representation and Reasoning",
        "KR",
    ),
    ("Conference on Uncertainty in Artificial Intelligence", "UAI"),
    ("International Conference on Knowledge Capture", "K-CAP"),
    ("IEEE International Conference on Computer Communications", "INFOCOM"),
    ("IEEE Transactions on Signal Processing", "TSP"),
    ("Proceedings of the Web Conference", "WWW"),
    (
        "Machine Learning and Knowledge Discovery in Databases: European",
        "ECML",
    ),
    ("Learning on Graph", "LOG"),
    ("AAAI", "AAAI"),
    ("Transactions on Knowledge and Data Engineering", "TKDE"),
    ("European Conference on Machine Learning", "ECML"),
    ("CONLL", "CONLL"),
    ("EMNLP", "EMNLP"),
    ("Empirical Methods", "EMNLP"),
    ("CHI Conference on Human Factors in Computing Systems", "CHI"),
    ("pattern analysis and machine intelligence", "TPAMI"),
    ("Conference on Computational Linguistics", "COLING"),
];

/// A single abbreviation rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueRule {
    /// Text searched for (case-insensitively) inside the venue name
    pub pattern: String,
    /// Short code emitted when the pattern matches
    pub code: String,
}

impl VenueRule {
    pub fn new(pattern: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            code: code.into(),
        }
    }
}

/// An ordered abbreviation table where the first matching rule wins.
///
/// Patterns are lowercased once at construction so lookups only lower the
/// venue being matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueTable {
    rules: Vec<VenueRule>,
    lowered: Vec<String>,
}

impl VenueTable {
    /// Builds a table from rules, keeping their order.
    pub fn new(rules: Vec<VenueRule>) -> Self {
        let lowered = rules.iter().map(|r| r.pattern.to_lowercase()).collect();
        Self { rules, lowered }
    }

    /// The compiled-in table.
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_VENUES
                .iter()
                .map(|(pattern, code)| VenueRule::new(*pattern, *code))
                .collect(),
        )
    }

    /// The rules in match order.
    pub fn rules(&self) -> &[VenueRule] {
        &self.rules
    }

    /// Returns the code of the first rule whose pattern occurs in `venue`,
    /// or `venue` itself when nothing matches.
    pub fn abbreviate(&self, venue: &str) -> String {
        let venue_lower = venue.to_lowercase();
        self.lowered
            .iter()
            .position(|pattern| venue_lower.contains(pattern.as_str()))
            .map(|i| self.rules[i].code.clone())
            .unwrap_or_else(|| venue.to_string())
    }
}

impl Default for VenueTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// The built-in table, constructed on first use.
static BUILTIN: Lazy<VenueTable> = Lazy::new(VenueTable::builtin);

/// Abbreviates a venue using the built-in table.
pub fn abbreviate_venue(venue: &str) -> String {
    BUILTIN.abbreviate(venue)
}
