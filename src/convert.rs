//! The conversion pipeline: parse, normalize, sort, render.
//!
//! Everything happens in memory; callers write the document only once the
//! whole batch has succeeded.

use std::path::Path;

use thiserror::Error;
use tracing::{debug, info};

use crate::bib::{load_entries, parse_bibliography, BibEntry, BibError};
use crate::config::Config;
use crate::entry::{normalize_entry, EntryError};
use crate::ordering::sort_papers;
use crate::output::render_paper_list;

/// Errors that abort a conversion.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error(transparent)]
    Bib(#[from] BibError),

    #[error(transparent)]
    Entry(#[from] EntryError),
}

/// The result of converting a bibliography.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// The rendered LaTeX list
    pub document: String,
    /// Number of papers in the list
    pub included: usize,
    /// Number of arXiv entries left out
    pub skipped_arxiv: usize,
}

/// Converts BibTeX source into a LaTeX publication list.
///
/// # Errors
///
/// Fails on malformed BibTeX or on the first entry whose year cannot be read.
pub fn convert(content: &str, config: &Config) -> Result<Conversion, ConvertError> {
    let entries = parse_bibliography(content)?;
    convert_entries(&entries, config)
}

/// Reads a BibTeX file and converts it.
pub fn convert_file(path: &Path, config: &Config) -> Result<Conversion, ConvertError> {
    let entries = load_entries(path)?;
    convert_entries(&entries, config)
}

/// Converts already-parsed entries.
pub fn convert_entries(entries: &[BibEntry], config: &Config) -> Result<Conversion, ConvertError> {
    let mut papers = Vec::with_capacity(entries.len());
    let mut skipped_arxiv = 0;

    for entry in entries {
        match normalize_entry(entry, &config.venues)? {
            Some(paper) => {
                debug!(key = %paper.key, venue = %paper.venue, year = paper.year, "normalized entry");
                papers.push(paper);
            }
            None => {
                debug!(key = %entry.key, "skipping arXiv entry");
                skipped_arxiv += 1;
            }
        }
    }

    sort_papers(&mut papers, &config.precedence);

    info!(
        included = papers.len(),
        skipped_arxiv, "rendered publication list"
    );

    Ok(Conversion {
        document: render_paper_list(&papers),
        included: papers.len(),
        skipped_arxiv,
    })
}
