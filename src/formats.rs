//! Format trait and implementations for different document types.
//!
//! A format names its heading marker character and, for documents that embed code, provides the
//! tree-sitter grammar and query used to find regions where marker lines are not headings.

use crate::error::{Error, Result};
use std::ops::Range;
use streaming_iterator::StreamingIterator;
use tree_sitter::{Parser, Query, QueryCursor};

pub mod markdown;

/// Syntax knowledge about a document type.
pub trait Format {
    /// Character repeated at the start of a line to mark a heading.
    fn heading_marker(&self) -> char;
    /// Grammar used to locate code blocks.
    fn language(&self) -> tree_sitter::Language;
    /// Query whose captures are code blocks.
    fn code_block_query(&self) -> &str;
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
/// Zero-based line rows covered by code blocks.
pub struct CodeBlocks {
    rows: Vec<Range<usize>>,
}

impl CodeBlocks {
    #[must_use]
    /// Whether a zero-based line row lies inside a code block.
    pub fn contains(&self, row: usize) -> bool {
        self.rows.iter().any(|range| range.contains(&row))
    }

    #[must_use]
    /// Row ranges in document order.
    pub fn ranges(&self) -> &[Range<usize>] {
        &self.rows
    }
}

/// Locate the code blocks of `source` using the format's grammar.
///
/// # Errors
///
/// Returns [`Error::Syntax`] if the grammar cannot be loaded, the query does not compile, or the
/// source cannot be parsed.
pub fn find_code_blocks<F: Format>(source: &str, format: &F) -> Result<CodeBlocks> {
    let language = format.language();
    let mut parser = Parser::new();
    parser
        .set_language(&language)
        .map_err(|e| Error::Syntax(e.to_string()))?;
    let tree = parser
        .parse(source, None)
        .ok_or_else(|| Error::Syntax("parser produced no tree".to_string()))?;
    let query = Query::new(&language, format.code_block_query())
        .map_err(|e| Error::Syntax(e.to_string()))?;

    let mut rows = Vec::new();
    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(&query, tree.root_node(), source.as_bytes());
    while let Some(m) = matches.next() {
        for capture in m.captures {
            let start = capture.node.start_position();
            let end = capture.node.end_position();
            // A block that ends at column 0 stops before that row.
            let end_row = if end.column == 0 { end.row } else { end.row + 1 };
            if end_row > start.row {
                rows.push(start.row..end_row);
            }
        }
    }
    rows.sort_by_key(|range| range.start);
    Ok(CodeBlocks { rows })
}

#[cfg(test)]
#[path = "tests/formats.rs"]
mod tests;
