//! paper-list: turn a BibTeX database into a sorted LaTeX publication list.
//!
//! This library provides functionality to:
//! - Load BibTeX entries
//! - Abbreviate venue names and reorder author names
//! - Sort papers by year, venue precedence and venue code
//! - Render the result as a LaTeX `enumerate` list

pub mod authors;
pub mod bib;
pub mod config;
pub mod convert;
pub mod entry;
pub mod ordering;
pub mod output;
pub mod venue;

pub use authors::format_author_names;
pub use bib::{load_entries, parse_bibliography, BibEntry};
pub use config::Config;
pub use convert::{convert, convert_entries, convert_file, Conversion, ConvertError};
pub use entry::{normalize_entry, NormalizedPaper};
pub use ordering::{sort_papers, ConferenceOrder};
pub use output::render_paper_list;
pub use venue::{abbreviate_venue, VenueRule, VenueTable};
