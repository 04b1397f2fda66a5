//! External rendering of the numbered markdown.
//!
//! The renderer is a separate program. chapterize only hands it the numbered document, the
//! destination, the stylesheet and any head fragments, and treats a failing exit as fatal.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::info;

/// Inputs for one render.
pub struct RenderJob<'a> {
    /// Numbered markdown to render.
    pub document: &'a Path,
    /// HTML file to produce.
    pub destination: &'a Path,
    /// Stylesheet to link from the HTML.
    pub stylesheet: &'a Path,
    /// Fragments spliced into the head of the HTML.
    pub header_includes: &'a [PathBuf],
}

/// Turns a numbered markdown document into its published form.
pub trait Renderer {
    /// Render one document.
    ///
    /// # Errors
    ///
    /// Returns an error if the renderer cannot run or reports failure.
    fn render(&self, job: &RenderJob<'_>) -> Result<()>;
}

/// Renders through the `pandoc` command line.
pub struct Pandoc {
    program: String,
}

impl Pandoc {
    #[must_use]
    /// Use `program` as the pandoc executable.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    #[must_use]
    /// Command line for a job, without running it.
    ///
    /// The stylesheet is linked by file name, since it is copied next to the HTML.
    pub fn command(&self, job: &RenderJob<'_>) -> Command {
        let css = job
            .stylesheet
            .file_name()
            .unwrap_or(job.stylesheet.as_os_str());

        let mut command = Command::new(&self.program);
        command
            .arg(job.document)
            .arg("-o")
            .arg(job.destination)
            .arg("--css")
            .arg(css);
        for include in job.header_includes {
            command.arg("-H").arg(include);
        }
        command
    }
}

impl Default for Pandoc {
    fn default() -> Self {
        Self::new("pandoc")
    }
}

impl Renderer for Pandoc {
    fn render(&self, job: &RenderJob<'_>) -> Result<()> {
        info!(
            program = %self.program,
            document = %job.document.display(),
            destination = %job.destination.display(),
            "rendering"
        );
        let status = self
            .command(job)
            .status()
            .map_err(|source| Error::RendererLaunch {
                program: self.program.clone(),
                source,
            })?;
        if !status.success() {
            return Err(Error::RendererFailure {
                program: self.program.clone(),
                status,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/render.rs"]
mod tests;
