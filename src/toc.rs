//! Table of contents generation.

use crate::registry::SectionRegistry;
use crate::section::Section;

/// Opening line of the navigation block wrapping the entries.
pub const NAV_OPEN: &str = "<nav id=\"TOC\">";
/// Closing line of the navigation block.
pub const NAV_CLOSE: &str = "</nav>";

const MAX_HTML_HEADING: usize = 6;

/// Renders registered sections as a navigation block.
pub struct TableOfContents<'r> {
    entries: Vec<&'r Section>,
    heading_offset: usize,
}

impl<'r> TableOfContents<'r> {
    #[must_use]
    /// Collect the registry's sections in path order.
    ///
    /// Each entry uses the same level as its numbered heading, shifted by `heading_offset`.
    pub fn new(registry: &'r SectionRegistry, heading_offset: usize) -> Self {
        let mut entries: Vec<&Section> = registry.sections().iter().collect();
        entries.sort_by(|a, b| a.path.cmp(&b.path));
        Self {
            entries,
            heading_offset,
        }
    }

    #[must_use]
    /// Sections in the order they are listed.
    pub fn entries(&self) -> &[&'r Section] {
        &self.entries
    }

    #[must_use]
    /// Navigation line for a single section.
    pub fn entry_line(&self, section: &Section) -> String {
        let level = (section.path.depth() + self.heading_offset).min(MAX_HTML_HEADING);
        format!(
            "<h{level}>{} <a href=\"#{}\">{}</a></h{level}>",
            section.number, section.slug, section.title
        )
    }

    #[must_use]
    /// The full block, wrapper lines included, one line per element.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.entries.len() + 2);
        lines.push(NAV_OPEN.to_string());
        lines.extend(self.entries.iter().map(|section| self.entry_line(section)));
        lines.push(NAV_CLOSE.to_string());
        lines
    }
}

#[cfg(test)]
#[path = "tests/toc.rs"]
mod tests;
