//! Author name reordering.

/// Separator between authors in a BibTeX author field.
const AUTHOR_SEPARATOR: &str = " and ";

/// Splits a BibTeX author list and turns each "Family, Given" into "Given Family".
///
/// Names that do not split into exactly two parts on ", " (single tokens,
/// "Family, Jr, Given", organisations) are kept as written.
///
/// # Examples
///
/// ```
/// use paper_list::format_author_names;
///
/// assert_eq!(
///     format_author_names("Smith, John and Doe, Jane"),
///     vec!["John Smith", "Jane Doe"]
/// );
/// assert_eq!(format_author_names("Madonna"), vec!["Madonna"]);
/// ```
pub fn format_author_names(authors: &str) -> Vec<String> {
    authors
        .split(AUTHOR_SEPARATOR)
        .map(|author| {
            let parts: Vec<&str> = author.split(", ").collect();
            match parts.as_slice() {
                [family, given] => format!("{} {}", given, family),
                _ => author.to_string(),
            }
        })
        .collect()
}
