//! Markdown format implementation using tree-sitter-md.
//!
//! Headings are ATX-style (`#` syntax). Fenced and indented code blocks are the regions where a
//! leading `#` is a comment or prompt rather than a heading.

use crate::formats::Format;

/// ATX heading marker and code block queries for markdown.
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn heading_marker(&self) -> char {
        '#'
    }

    fn language(&self) -> tree_sitter::Language {
        tree_sitter_md::LANGUAGE.into()
    }

    fn code_block_query(&self) -> &'static str {
        "[(fenced_code_block) (indented_code_block)] @code"
    }
}
