//! LaTeX list rendering.
//!
//! Wraps the sorted citations in an `enumerate` environment. Numbering is
//! left to LaTeX.

use crate::entry::NormalizedPaper;

const LIST_BEGIN: &str = "\\begin{enumerate}";
const LIST_END: &str = "\\end{enumerate}";
const ITEM_MARKER: &str = "\\item";

/// Renders papers, in the given order, as a LaTeX `enumerate` block.
///
/// Items are separated by a blank line. The block has no trailing newline.
pub fn render_paper_list(papers: &[NormalizedPaper]) -> String {
    let items: Vec<String> = papers
        .iter()
        .map(|paper| format!("{} {}", ITEM_MARKER, paper.text))
        .collect();

    format!("{}\n{}\n{}", LIST_BEGIN, items.join("\n\n"), LIST_END)
}
