//! Error types for numbering and cross-linking a document.
//!
//! Every failure aborts the whole run, so there is a single error enum rather than one per stage.
//! Messages always name the offending title or slug, since that is what the author has to fix.

use std::io;
use std::process::ExitStatus;
use thiserror::Error;

/// Result type for chapterize operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for a chapterize run.
#[derive(Error, Debug)]
pub enum Error {
    /// Two headings share the same title text.
    #[error("duplicate section name '{title}': links to it would be ambiguous")]
    DuplicateTitle {
        /// The repeated heading title.
        title: String,
    },

    /// Two distinct titles reduce to the same anchor slug.
    #[error("duplicate section slug '{slug}': '{title}' collides with '{existing}'")]
    DuplicateSlug {
        /// The colliding slug.
        slug: String,
        /// Title of the heading being registered.
        title: String,
        /// Title of the heading that already owns the slug.
        existing: String,
    },

    /// A `CHAPTER_LINK_` placeholder names a slug no heading produces.
    #[error("dangling chapter link '{slug}' on line {line}")]
    DanglingReference {
        /// The unresolved slug.
        slug: String,
        /// One-based line number of the placeholder in the input.
        line: usize,
    },

    /// The designated marker line never appears in the input.
    #[error("marker line '{marker}' not found")]
    MissingMarker {
        /// The expected marker text.
        marker: String,
    },

    /// The designated marker line appears more than once.
    #[error("marker line '{marker}' repeated on line {line}")]
    RepeatedMarker {
        /// The marker text.
        marker: String,
        /// One-based line number of the second occurrence.
        line: usize,
    },

    /// A heading jumps more than one level below its parent (strict mode only).
    #[error("heading '{title}' has depth {depth} but at most {expected} is allowed here")]
    SkippedLevel {
        /// Title of the offending heading.
        title: String,
        /// Marker count of the offending heading.
        depth: usize,
        /// Deepest marker count that would have been accepted.
        expected: usize,
    },

    /// A heading seen while rewriting was never registered while parsing.
    #[error("heading '{title}' was not registered in the first pass")]
    UnregisteredHeading {
        /// Title of the heading.
        title: String,
    },

    /// The renderer ran but exited unsuccessfully.
    #[error("renderer '{program}' failed with {status}")]
    RendererFailure {
        /// Program that was invoked.
        program: String,
        /// Exit status it reported.
        status: ExitStatus,
    },

    /// The renderer could not be started.
    #[error("could not launch renderer '{program}': {source}")]
    RendererLaunch {
        /// Program that was invoked.
        program: String,
        /// Underlying spawn error.
        #[source]
        source: io::Error,
    },

    /// The configuration file could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The markdown grammar or code block query could not be set up.
    #[error("syntax tree error: {0}")]
    Syntax(String),

    /// Reading or writing a file failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}
