//! Configuration to acknowledge author preferences as well as set defaults.
//!
//! Specifically, we try to find a chapterize.toml, and if present we load settings from there.
//! Every field has a default, so an empty or missing file gives a working setup. Command line
//! flags are applied on top by the binary.

use crate::error::{Error, Result};
use crate::pipeline::RunPlan;
use crate::rewriter::RewriteOptions;
use facet::Facet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory when no config path is given.
pub const CONFIG_FILE: &str = "chapterize.toml";

/// Marker line used when the config does not name one.
pub const DEFAULT_MARKER: &str = "TABLE_OF_CONTENTS_HERE";

#[derive(Facet, Clone, Debug)]
#[allow(clippy::struct_excessive_bools)]
/// User preferences loaded from chapterize.toml or falling back to defaults.
pub struct Config {
    #[facet(default = "document.md".to_string())]
    /// Markdown document to number.
    pub input: String,
    #[facet(default = "public".to_string())]
    /// Directory receiving the rendered HTML and stylesheet.
    pub output_dir: String,
    #[facet(default = "index.html".to_string())]
    /// File name of the rendered HTML inside `output_dir`.
    pub html_name: String,
    #[facet(default = "style.css".to_string())]
    /// Stylesheet linked from and copied next to the rendered HTML.
    pub stylesheet: String,
    #[facet(default = DEFAULT_MARKER.to_string())]
    /// Exact line separating front matter from the numbered body.
    pub marker: String,
    #[facet(default = true)]
    /// Wrap each numbered heading title in a link to its own anchor.
    pub self_links: bool,
    #[facet(default = 0)]
    /// Extra heading levels added to every numbered heading.
    pub heading_offset: usize,
    #[facet(default = false)]
    /// Reject headings that skip a level instead of nesting them one level down.
    pub strict_levels: bool,
    #[facet(default = false)]
    /// Treat marker lines inside code blocks as plain text.
    pub skip_code_blocks: bool,
    #[facet(default = Vec::new())]
    /// Fragments spliced into the head of the rendered HTML.
    pub header_includes: Vec<String>,
    #[facet(default = false)]
    /// Keep the intermediate numbered markdown after rendering.
    pub keep_markdown: bool,
    #[facet(default = "pandoc".to_string())]
    /// Program used to render the numbered markdown.
    pub renderer: String,
}

impl Config {
    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the text is not a valid configuration.
    pub fn parse(contents: &str) -> Result<Self> {
        facet_toml::from_str::<Self>(contents).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load configuration from `path`, or from chapterize.toml if present.
    ///
    /// A missing chapterize.toml yields the defaults; a missing explicit path is an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let target = path.unwrap_or_else(|| Path::new(CONFIG_FILE));
        match fs::read_to_string(target) {
            Ok(contents) => Self::parse(&contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound && path.is_none() => Self::parse(""),
            Err(e) => Err(e.into()),
        }
    }

    #[must_use]
    /// Options controlling how the document text is rewritten.
    pub fn rewrite_options(&self) -> RewriteOptions {
        RewriteOptions {
            marker: self.marker.clone(),
            self_links: self.self_links,
            heading_offset: self.heading_offset,
            strict_levels: self.strict_levels,
            skip_code_blocks: self.skip_code_blocks,
        }
    }

    #[must_use]
    /// File locations for a full run.
    ///
    /// The numbered markdown is written into the output directory as `<stem>_sections.md`.
    pub fn run_plan(&self) -> RunPlan {
        let input = PathBuf::from(&self.input);
        let output_dir = PathBuf::from(&self.output_dir);
        let stem = input
            .file_stem()
            .map_or_else(|| "document".into(), |s| s.to_string_lossy());

        RunPlan {
            markdown_out: output_dir.join(format!("{stem}_sections.md")),
            html_out: output_dir.join(&self.html_name),
            stylesheet: PathBuf::from(&self.stylesheet),
            header_includes: self.header_includes.iter().map(PathBuf::from).collect(),
            keep_markdown: self.keep_markdown,
            input,
        }
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
