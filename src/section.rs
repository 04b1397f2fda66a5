//! Section numbering for the heading hierarchy.
//!
//! A section is a heading that has been placed in the document tree. Its path records the
//! position among its ancestors and siblings, and doubles as the dotted section number shown
//! in headings, the table of contents and chapter links.

use serde::Serialize;
use std::fmt;

#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
/// One-based position of a section at every level of nesting, outermost first.
///
/// Ordering is lexicographic over the components, which is document order for paths
/// assigned in a single forward pass.
pub struct SectionPath(Vec<u32>);

impl SectionPath {
    #[must_use]
    /// The empty path above all top-level sections.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    /// Nesting depth in the reconstructed tree (1 for top-level).
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    /// Components of the path, outermost first.
    pub fn components(&self) -> &[u32] {
        &self.0
    }

    /// Open a first child below the current innermost level.
    pub(crate) fn push_child(&mut self) {
        self.0.push(1);
    }

    /// Advance to the next sibling at the current innermost level.
    pub(crate) fn next_sibling(&mut self) {
        if let Some(last) = self.0.last_mut() {
            *last += 1;
        }
    }

    /// Close levels until at most `depth` remain.
    pub(crate) fn truncate(&mut self, depth: usize) {
        self.0.truncate(depth);
    }
}

impl From<Vec<u32>> for SectionPath {
    fn from(components: Vec<u32>) -> Self {
        Self(components)
    }
}

impl fmt::Display for SectionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, component) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{component}")?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// Heading registered at a fixed position in the document hierarchy.
pub struct Section {
    /// Dotted section number, e.g. `2.1.3`.
    pub number: String,
    /// Position in the hierarchy.
    pub path: SectionPath,
    /// Heading text without markup symbols.
    pub title: String,
    /// Anchor target derived from the title.
    pub slug: String,
}

impl Section {
    #[must_use]
    /// Build a section, deriving the number from the path.
    pub fn new(path: SectionPath, title: &str, slug: String) -> Self {
        Self {
            number: path.to_string(),
            path,
            title: title.to_string(),
            slug,
        }
    }
}
