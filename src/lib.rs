//! chapterize: numbered sections, a table of contents and chapter links for one markdown document.
//!
//! # Pipeline
//!
//! 1. **Parse**: headings below the marker line are placed in a tree in one forward pass and
//!    registered by title and slug ([`hierarchy`], [`registry`]).
//!
//! 2. **Rewrite**: the document is read again; the marker becomes the table of contents, body
//!    headings gain their dotted numbers and `CHAPTER_LINK_<slug>` placeholders become links
//!    ([`rewriter`], [`toc`], [`xref`]).
//!
//! 3. **Render**: the numbered markdown is handed to an external renderer ([`render`],
//!    [`pipeline`]).
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod error;
pub mod formats;
pub mod heading;
pub mod hierarchy;
pub mod pipeline;
pub mod registry;
pub mod render;
pub mod rewriter;
pub mod section;
pub mod toc;
pub mod xref;

pub use error::{Error, Result};
pub use registry::SectionRegistry;
pub use rewriter::{DocumentRewriter, RewriteOptions};
