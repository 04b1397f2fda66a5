//! Resolution of `CHAPTER_LINK_<slug>` placeholders into numbered links.
//!
//! A placeholder is the literal prefix followed by a run of lowercase letters and hyphens, using
//! the same Unicode letter class that slugs are built from. Each one on a line is resolved on its
//! own against the slug index; an unknown slug fails the run.

use crate::error::{Error, Result};
use crate::registry::SectionRegistry;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;

/// Prefix that introduces a chapter link placeholder.
pub const PLACEHOLDER_PREFIX: &str = "CHAPTER_LINK_";

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"CHAPTER_LINK_((?:[\p{Alphabetic}--\p{Uppercase}]|-)+)").unwrap()
});

/// Replaces chapter link placeholders using a populated registry.
pub struct CrossReferenceResolver<'r> {
    registry: &'r SectionRegistry,
}

impl<'r> CrossReferenceResolver<'r> {
    #[must_use]
    /// Create a resolver over a fully populated registry.
    pub fn new(registry: &'r SectionRegistry) -> Self {
        Self { registry }
    }

    /// Resolve every placeholder on one line.
    ///
    /// `line_number` is only used to locate the placeholder in error messages. Lines without a
    /// placeholder are returned borrowed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DanglingReference`] for the first slug with no registered section.
    pub fn resolve_line<'l>(&self, line: &'l str, line_number: usize) -> Result<Cow<'l, str>> {
        if !line.contains(PLACEHOLDER_PREFIX) {
            return Ok(Cow::Borrowed(line));
        }

        let mut dangling = None;
        let resolved = PLACEHOLDER.replace_all(line, |caps: &Captures<'_>| {
            let slug = &caps[1];
            if let Some(section) = self.registry.by_slug(slug) {
                format!("[{}](#{})", section.number, section.slug)
            } else {
                if dangling.is_none() {
                    dangling = Some(slug.to_string());
                }
                caps[0].to_string()
            }
        });

        match dangling {
            Some(slug) => Err(Error::DanglingReference {
                slug,
                line: line_number,
            }),
            None => Ok(resolved),
        }
    }
}

#[cfg(test)]
#[path = "tests/xref.rs"]
mod tests;
