//! Single-pass reconstruction of the heading tree.
//!
//! Headings arrive as a flat sequence. The parser keeps the path of the innermost open section
//! and, for each heading, compares its marker depth with the number of open levels:
//!
//! ```text
//! deeper    -> open a child at 1           ## a      1.1
//! same      -> advance the last component  ## b      1.2
//! shallower -> close levels, then advance  # c       2
//! ```
//!
//! Depth is relative to the open levels rather than the parent's marker count, so `#` followed
//! directly by `###` nests the second heading one level down, not two.

use crate::error::{Error, Result};
use crate::heading::Heading;
use crate::registry::SectionRegistry;
use crate::section::SectionPath;
use std::cmp::Ordering;

/// Assigns section paths to headings in document order.
pub struct HierarchyParser {
    registry: SectionRegistry,
    open: SectionPath,
    strict_levels: bool,
}

impl HierarchyParser {
    #[must_use]
    /// Create a parser with an empty registry.
    ///
    /// With `strict_levels`, a heading more than one level below the open section is an error
    /// instead of being absorbed as a single level of nesting.
    pub fn new(strict_levels: bool) -> Self {
        Self {
            registry: SectionRegistry::new(),
            open: SectionPath::root(),
            strict_levels,
        }
    }

    /// Place one heading in the tree and register it.
    ///
    /// # Errors
    ///
    /// Returns a duplicate error from the registry, or [`Error::SkippedLevel`] in strict mode.
    pub fn feed(&mut self, heading: &Heading<'_>) -> Result<()> {
        let open = self.open.depth();

        match heading.depth.cmp(&open) {
            Ordering::Greater => {
                if self.strict_levels && heading.depth > open + 1 {
                    return Err(Error::SkippedLevel {
                        title: heading.title.to_string(),
                        depth: heading.depth,
                        expected: open + 1,
                    });
                }
                self.open.push_child();
            }
            Ordering::Equal => self.open.next_sibling(),
            Ordering::Less => {
                self.open.truncate(heading.depth);
                self.open.next_sibling();
            }
        }

        self.registry
            .insert(heading.title, heading.slug(), self.open.clone())
    }

    #[must_use]
    /// Stop parsing and hand over the populated registry.
    pub fn finish(self) -> SectionRegistry {
        self.registry
    }
}

/// Build a registry from a heading sequence in one pass.
///
/// # Errors
///
/// Returns the first error raised by [`HierarchyParser::feed`].
pub fn build_registry<'a, I>(headings: I, strict_levels: bool) -> Result<SectionRegistry>
where
    I: IntoIterator<Item = Heading<'a>>,
{
    let mut parser = HierarchyParser::new(strict_levels);
    for heading in headings {
        parser.feed(&heading)?;
    }
    Ok(parser.finish())
}

#[cfg(test)]
#[path = "tests/hierarchy.rs"]
mod tests;
