//! Entry normalization.
//!
//! Turns one [`BibEntry`] into a [`NormalizedPaper`]: the sort keys plus the
//! rendered citation line.

use thiserror::Error;

use crate::authors::format_author_names;
use crate::bib::BibEntry;
use crate::venue::VenueTable;

const DEFAULT_AUTHOR: &str = "Unknown";
const DEFAULT_TITLE: &str = "Title not available";

/// Errors that stop the conversion of an entry (and with it the batch).
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EntryError {
    #[error("Entry '{key}' has no year")]
    MissingYear { key: String },

    #[error("Entry '{key}' has a non-numeric year: '{value}'")]
    InvalidYear { key: String, value: String },
}

/// A citation ready for sorting and rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedPaper {
    /// Citation key of the source entry
    pub key: String,
    /// Publication year
    pub year: i32,
    /// Abbreviated venue code (or the raw venue when no rule matched)
    pub venue: String,
    /// The rendered citation line, without the `\item` marker
    pub text: String,
}

/// Returns true for entries whose journal names arXiv.
pub fn is_arxiv(entry: &BibEntry) -> bool {
    entry
        .journal()
        .map_or(false, |journal| journal.to_lowercase().contains("arxiv"))
}

/// Normalizes an entry.
///
/// Returns `Ok(None)` for arXiv preprints, which are left out of the list.
///
/// # Errors
///
/// Returns an error if the year is missing or is not an integer.
pub fn normalize_entry(
    entry: &BibEntry,
    venues: &VenueTable,
) -> Result<Option<NormalizedPaper>, EntryError> {
    if is_arxiv(entry) {
        return Ok(None);
    }

    let authors = format_author_names(entry.get("author").unwrap_or(DEFAULT_AUTHOR));
    let title = strip_trailing_period(entry.get("title").unwrap_or(DEFAULT_TITLE));

    let year_text = entry
        .get("year")
        .map(str::trim)
        .filter(|year| !year.is_empty())
        .ok_or_else(|| EntryError::MissingYear {
            key: entry.key.clone(),
        })?;
    let year: i32 = year_text.parse().map_err(|_| EntryError::InvalidYear {
        key: entry.key.clone(),
        value: year_text.to_string(),
    })?;

    // booktitle wins even when empty
    let raw_venue = entry
        .get("booktitle")
        .or_else(|| entry.journal())
        .unwrap_or("");
    let venue = venues.abbreviate(raw_venue);

    let text = render_citation(&authors, title, &venue, year_text);

    Ok(Some(NormalizedPaper {
        key: entry.key.clone(),
        year,
        venue,
        text,
    }))
}

/// Removes at most one trailing `.`.
fn strip_trailing_period(title: &str) -> &str {
    title.strip_suffix('.').unwrap_or(title)
}

/// Renders `First, Second, Third. Title, \textit{Venue Year}.`
///
/// A single author is followed directly by the period.
fn render_citation(authors: &[String], title: &str, venue: &str, year: &str) -> String {
    let byline = match authors.split_first() {
        Some((first, rest)) if !rest.is_empty() => format!("{}, {}", first, rest.join(", ")),
        Some((first, _)) => first.clone(),
        None => String::new(),
    };

    format!("{}. {}, \\textit{{{} {}}}.", byline, title, venue, year)
        .trim()
        .to_string()
}
