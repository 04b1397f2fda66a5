//! Lookup tables from heading titles and slugs to numbered sections.
//!
//! The registry is filled once while parsing and only read while rewriting. Titles and slugs
//! must both be unique, since either collision would make two sections share an anchor.

use crate::error::{Error, Result};
use crate::section::{Section, SectionPath};
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Default)]
/// Sections in registration order plus title and slug indices into them.
pub struct SectionRegistry {
    sections: Vec<Section>,
    by_title: HashMap<String, usize>,
    by_slug: HashMap<String, usize>,
}

impl SectionRegistry {
    #[must_use]
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a heading at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateTitle`] if the title is already registered, or
    /// [`Error::DuplicateSlug`] if a different title already produced the same slug.
    pub fn insert(&mut self, title: &str, slug: String, path: SectionPath) -> Result<()> {
        if self.by_title.contains_key(title) {
            return Err(Error::DuplicateTitle {
                title: title.to_string(),
            });
        }
        if let Some(&existing) = self.by_slug.get(&slug) {
            return Err(Error::DuplicateSlug {
                slug,
                title: title.to_string(),
                existing: self.sections[existing].title.clone(),
            });
        }

        let index = self.sections.len();
        let section = Section::new(path, title, slug);
        debug!(number = %section.number, title, slug = %section.slug, "registered section");
        self.by_title.insert(section.title.clone(), index);
        self.by_slug.insert(section.slug.clone(), index);
        self.sections.push(section);
        Ok(())
    }

    #[must_use]
    /// Look up a section by its heading title.
    pub fn by_title(&self, title: &str) -> Option<&Section> {
        self.by_title.get(title).map(|&i| &self.sections[i])
    }

    #[must_use]
    /// Look up a section by its anchor slug.
    pub fn by_slug(&self, slug: &str) -> Option<&Section> {
        self.by_slug.get(slug).map(|&i| &self.sections[i])
    }

    #[must_use]
    /// Sections in the order they were registered.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[must_use]
    /// Number of registered sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    /// Whether no section has been registered.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/registry.rs"]
mod tests;
