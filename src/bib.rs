//! BibTeX loading.
//!
//! Reads a `.bib` database and flattens each record into a [`BibEntry`]:
//! a citation key plus field values with their LaTeX left as written, in
//! file order.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use biblatex::{RawBibliography, RawChunk, Spanned};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Errors that can occur when loading a bibliography.
#[derive(Error, Debug)]
pub enum BibError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid BibTeX: {0}")]
    ParseError(#[from] biblatex::ParseError),
}

/// One bibliographic record with its fields flattened to text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BibEntry {
    /// The citation key (e.g. "vaswani2017attention")
    pub key: String,
    /// The entry type as written, lowercased (e.g. "inproceedings")
    pub entry_type: String,
    /// Field values keyed by lowercase field name
    pub fields: BTreeMap<String, String>,
}

impl BibEntry {
    /// Creates an entry with no fields.
    pub fn new(key: impl Into<String>, entry_type: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            entry_type: entry_type.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style field setter, mostly useful in tests.
    pub fn with_field(mut self, name: &str, value: impl Into<String>) -> Self {
        self.fields.insert(name.to_lowercase(), value.into());
        self
    }

    /// Looks up a field by name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(&name.to_lowercase()).map(String::as_str)
    }

    /// The journal field, falling back to the biblatex `journaltitle` alias.
    pub fn journal(&self) -> Option<&str> {
        self.get("journal").or_else(|| self.get("journaltitle"))
    }
}

/// Loads and parses a BibTeX file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid BibTeX.
pub fn load_entries(path: &Path) -> Result<Vec<BibEntry>, BibError> {
    let content = fs::read_to_string(path)?;
    parse_bibliography(&content)
}

/// Month macros BibTeX predefines, expanded to full names.
const MONTH_MACROS: &[(&str, &str)] = &[
    ("jan", "January"),
    ("feb", "February"),
    ("mar", "March"),
    ("apr", "April"),
    ("may", "May"),
    ("jun", "June"),
    ("jul", "July"),
    ("aug", "August"),
    ("sep", "September"),
    ("oct", "October"),
    ("nov", "November"),
    ("dec", "December"),
];

/// Parses BibTeX source into entries, preserving file order.
///
/// Field values keep their LaTeX as written: escapes such as `\&`, inner
/// braces, math and `--` pass through. Only the outer `{}` or `""` delimiters
/// are removed, `@string` and month macros are expanded, and whitespace runs
/// collapse to a single space. Repeated citation keys are all kept.
///
/// Empty input (or input with only comments) yields an empty list.
pub fn parse_bibliography(content: &str) -> Result<Vec<BibEntry>, BibError> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let raw = RawBibliography::parse(content)?;

    // @string definitions may refer to earlier ones
    let mut macros: HashMap<String, String> = MONTH_MACROS
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();
    for pair in &raw.abbreviations {
        let value = field_to_text(&pair.value.v, &macros);
        macros.insert(pair.key.v.to_lowercase(), value);
    }

    let entries = raw
        .entries
        .iter()
        .map(|entry| {
            let entry = &entry.v;
            BibEntry {
                key: entry.key.v.to_string(),
                entry_type: entry.kind.v.to_lowercase(),
                fields: entry
                    .fields
                    .iter()
                    .map(|pair| {
                        (
                            pair.key.v.to_lowercase(),
                            field_to_text(&pair.value.v, &macros),
                        )
                    })
                    .collect(),
            }
        })
        .collect();

    Ok(entries)
}

/// Joins the `#`-concatenated parts of a field into one string.
///
/// Unknown macros are kept under their own name.
fn field_to_text(field: &[Spanned<RawChunk<'_>>], macros: &HashMap<String, String>) -> String {
    static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

    let mut text = String::new();
    for chunk in field {
        match chunk.v {
            RawChunk::Normal(s) => text.push_str(s),
            RawChunk::Abbreviation(name) => match macros.get(&name.to_lowercase()) {
                Some(value) => text.push_str(value),
                None => text.push_str(name),
            },
        }
    }

    WHITESPACE_RE.replace_all(text.trim(), " ").into_owned()
}
