//! Line classification and slug derivation.
//!
//! A heading is a line that starts with one or more marker characters followed by whitespace.
//! Everything else, including `#hashtag` style lines, is plain text.

/// A heading line split into its nesting depth and title text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading<'a> {
    /// Number of leading marker characters.
    pub depth: usize,
    /// Title text with markers and surrounding whitespace removed.
    pub title: &'a str,
}

impl Heading<'_> {
    #[must_use]
    /// Anchor slug for this heading's title.
    pub fn slug(&self) -> String {
        slugify(self.title)
    }
}

#[must_use]
/// Classify a line (without its terminator) as a heading or plain text.
pub fn classify(line: &str, marker: char) -> Option<Heading<'_>> {
    let rest = line.trim_start_matches(marker);
    let depth = line.len() - rest.len();
    if depth == 0 {
        return None;
    }
    if !rest.is_empty() && !rest.starts_with([' ', '\t']) {
        return None;
    }
    let title = rest.trim();
    if title.is_empty() {
        return None;
    }
    Some(Heading {
        depth: depth / marker.len_utf8(),
        title,
    })
}

#[must_use]
/// Derive the anchor slug of a title.
///
/// Lowercases, turns spaces into hyphens, then keeps only alphabetic characters and hyphens.
/// Digits and punctuation are dropped, so "Version 2" and "Version 3" share the slug `version-`.
pub fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .replace(' ', "-")
        .chars()
        .filter(|c| c.is_alphabetic() || *c == '-')
        .collect()
}

#[cfg(test)]
#[path = "tests/heading.rs"]
mod tests;
