//! Two-pass numbering of a whole document.
//!
//! The marker line splits the document in two. Everything above it is front matter: ignored
//! while parsing and copied verbatim while rewriting. Below it, headings are numbered and every
//! line has its chapter links resolved.
//!
//! ```text
//! pass 1: front matter (skip) | marker | body -> HierarchyParser -> SectionRegistry
//! pass 2: front matter (copy) | TOC    | body -> numbered headings + resolved links
//! ```

use crate::config::DEFAULT_MARKER;
use crate::error::{Error, Result};
use crate::formats::markdown::MarkdownFormat;
use crate::formats::{find_code_blocks, CodeBlocks, Format};
use crate::heading::{classify, Heading};
use crate::hierarchy::HierarchyParser;
use crate::registry::SectionRegistry;
use crate::toc::TableOfContents;
use crate::xref::CrossReferenceResolver;
use std::borrow::Cow;
use tracing::{debug, info};

#[derive(Clone, Debug, PartialEq, Eq)]
/// Settings that change the rewritten text.
pub struct RewriteOptions {
    /// Exact line separating front matter from the numbered body.
    pub marker: String,
    /// Wrap each numbered heading title in a link to its own anchor.
    pub self_links: bool,
    /// Extra heading levels added to every numbered heading.
    pub heading_offset: usize,
    /// Reject headings that skip a level.
    pub strict_levels: bool,
    /// Treat marker lines inside code blocks as plain text.
    pub skip_code_blocks: bool,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            self_links: true,
            heading_offset: 0,
            strict_levels: false,
            skip_code_blocks: false,
        }
    }
}

#[derive(Debug)]
/// A numbered document together with the registry it was numbered from.
pub struct Rewritten {
    /// Full output text.
    pub text: String,
    /// Sections found below the marker.
    pub registry: SectionRegistry,
}

/// Orchestrates both passes over a document.
pub struct DocumentRewriter<F: Format = MarkdownFormat> {
    options: RewriteOptions,
    format: F,
}

impl DocumentRewriter<MarkdownFormat> {
    #[must_use]
    /// Create a rewriter for markdown documents.
    pub fn new(options: RewriteOptions) -> Self {
        Self::with_format(options, MarkdownFormat)
    }
}

impl<F: Format> DocumentRewriter<F> {
    #[must_use]
    /// Create a rewriter for an arbitrary format.
    pub fn with_format(options: RewriteOptions, format: F) -> Self {
        Self { options, format }
    }

    #[must_use]
    /// Options this rewriter was built with.
    pub fn options(&self) -> &RewriteOptions {
        &self.options
    }

    /// Run both passes and return the numbered text.
    ///
    /// # Errors
    ///
    /// Fails on a missing or repeated marker, duplicate titles or slugs, skipped levels in
    /// strict mode, and dangling chapter links. No partial output is produced.
    pub fn rewrite(&self, source: &str) -> Result<Rewritten> {
        let code = self.code_blocks(source)?;
        let registry = self.collect_sections(source, &code)?;
        info!(sections = registry.len(), "numbered document body");
        let text = self.emit(source, &registry, &code)?;
        Ok(Rewritten { text, registry })
    }

    /// Run only the first pass and return the registry.
    ///
    /// # Errors
    ///
    /// Fails on a missing or repeated marker, duplicate titles or slugs, and skipped levels in
    /// strict mode.
    pub fn build_registry(&self, source: &str) -> Result<SectionRegistry> {
        let code = self.code_blocks(source)?;
        self.collect_sections(source, &code)
    }

    fn code_blocks(&self, source: &str) -> Result<CodeBlocks> {
        if self.options.skip_code_blocks {
            let code = find_code_blocks(source, &self.format)?;
            debug!(blocks = code.ranges().len(), "located code blocks");
            Ok(code)
        } else {
            Ok(CodeBlocks::default())
        }
    }

    fn heading_at<'l>(&self, row: usize, line: &'l str, code: &CodeBlocks) -> Option<Heading<'l>> {
        if code.contains(row) {
            return None;
        }
        classify(line, self.format.heading_marker())
    }

    fn is_marker(&self, row: usize, line: &str, code: &CodeBlocks) -> bool {
        line == self.options.marker && !code.contains(row)
    }

    fn collect_sections(&self, source: &str, code: &CodeBlocks) -> Result<SectionRegistry> {
        let mut parser = HierarchyParser::new(self.options.strict_levels);
        let mut after_marker = false;

        for (row, raw) in source.split_inclusive('\n').enumerate() {
            let (line, _) = split_terminator(raw);
            if self.is_marker(row, line, code) {
                if after_marker {
                    return Err(Error::RepeatedMarker {
                        marker: self.options.marker.clone(),
                        line: row + 1,
                    });
                }
                after_marker = true;
                continue;
            }
            if !after_marker {
                continue;
            }
            if let Some(heading) = self.heading_at(row, line, code) {
                parser.feed(&heading)?;
            }
        }

        if !after_marker {
            return Err(Error::MissingMarker {
                marker: self.options.marker.clone(),
            });
        }
        Ok(parser.finish())
    }

    fn emit(&self, source: &str, registry: &SectionRegistry, code: &CodeBlocks) -> Result<String> {
        let toc = TableOfContents::new(registry, self.options.heading_offset);
        let resolver = CrossReferenceResolver::new(registry);
        let mut out = String::with_capacity(source.len() * 2);
        let mut after_marker = false;

        for (row, raw) in source.split_inclusive('\n').enumerate() {
            let (line, terminator) = split_terminator(raw);

            if !after_marker {
                if self.is_marker(row, line, code) {
                    let separator = if terminator.is_empty() { "\n" } else { terminator };
                    out.push_str(&toc.lines().join(separator));
                    out.push_str(terminator);
                    after_marker = true;
                } else {
                    out.push_str(raw);
                }
                continue;
            }

            let numbered = match self.heading_at(row, line, code) {
                Some(heading) => Cow::Owned(self.number_heading(&heading, registry)?),
                None => Cow::Borrowed(line),
            };
            out.push_str(&resolver.resolve_line(&numbered, row + 1)?);
            out.push_str(terminator);
        }

        Ok(out)
    }

    fn number_heading(&self, heading: &Heading<'_>, registry: &SectionRegistry) -> Result<String> {
        let section = registry
            .by_title(heading.title)
            .ok_or_else(|| Error::UnregisteredHeading {
                title: heading.title.to_string(),
            })?;
        let markers = self
            .format
            .heading_marker()
            .to_string()
            .repeat(section.path.depth() + self.options.heading_offset);

        Ok(if self.options.self_links {
            format!(
                "{markers} {} [{}](#{})",
                section.number, section.title, section.slug
            )
        } else {
            format!("{markers} {} {}", section.number, section.title)
        })
    }
}

/// Split a line into its content and its `\n` or `\r\n` terminator.
fn split_terminator(raw: &str) -> (&str, &str) {
    if let Some(line) = raw.strip_suffix("\r\n") {
        (line, "\r\n")
    } else if let Some(line) = raw.strip_suffix('\n') {
        (line, "\n")
    } else {
        (raw, "")
    }
}

#[cfg(test)]
#[path = "tests/rewriter.rs"]
mod tests;
