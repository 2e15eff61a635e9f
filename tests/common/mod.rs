//! Shared test constants and helpers for integration tests.

#![allow(dead_code)]

/// A small publication database covering every ordering rule:
/// two years, a precedence-listed venue pair (ACL before CVPR), an unlisted
/// venue, a single-author entry and an arXiv preprint that must be dropped.
pub const SAMPLE_BIB: &str = r#"
@article{preprint2023,
  title = {Something On arXiv},
  author = {Nobody, Some},
  journal = {arXiv preprint arXiv:2301.00001},
  year = {2023}
}

@inproceedings{cvpr2023,
  title = {Seeing Things.},
  author = {Lee, Ann and Kim, Bo},
  booktitle = {Proceedings of the IEEE/CVF Conference on Computer Vision and Pattern Recognition},
  year = {2023}
}

@inproceedings{isca2023,
  title = {Fast Chips},
  author = {Hennessy, John and Patterson, David},
  booktitle = {Proceedings of the 50th Annual International Symposium on Computer Architecture},
  year = {2023}
}

@inproceedings{acl2023,
  title = {Reading Things},
  author = {Smith, John and Doe, Jane},
  booktitle = {Proceedings of the 61st Annual Meeting of the Association for Computational Linguistics},
  year = {2023}
}

@article{tkde2022,
  title = {Old Graphs},
  author = {Turing, Alan},
  journal = {IEEE Transactions on Knowledge and Data Engineering},
  year = {2022}
}
"#;

/// The LaTeX list expected for [`SAMPLE_BIB`] with the built-in tables.
pub const SAMPLE_LIST: &str = "\\begin{enumerate}
\\item John Smith, Jane Doe. Reading Things, \\textit{ACL 2023}.

\\item Ann Lee, Bo Kim. Seeing Things, \\textit{CVPR 2023}.

\\item John Hennessy, David Patterson. Fast Chips, \\textit{ISCA 2023}.

\\item Alan Turing. Old Graphs, \\textit{TKDE 2022}.
\\end{enumerate}";

/// Build a BibTeX entry for a conference paper.
pub fn inproceedings(key: &str, author: &str, title: &str, booktitle: &str, year: &str) -> String {
    format!(
        "@inproceedings{{{},\n  author = {{{}}},\n  title = {{{}}},\n  booktitle = {{{}}},\n  year = {{{}}}\n}}\n",
        key, author, title, booktitle, year
    )
}
