//! One complete run: read, number, write, render, clean up.
//!
//! The numbered markdown is staged in a temporary file beside its destination and only
//! persisted once the whole document has been rewritten, so a failed run never leaves a
//! half-numbered document behind.

use crate::error::Result;
use crate::formats::Format;
use crate::registry::SectionRegistry;
use crate::render::{RenderJob, Renderer};
use crate::rewriter::DocumentRewriter;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{info, warn};

#[derive(Clone, Debug, PartialEq, Eq)]
/// File locations for a run.
pub struct RunPlan {
    /// Source document.
    pub input: PathBuf,
    /// Where the numbered markdown is written.
    pub markdown_out: PathBuf,
    /// Where the rendered HTML is written.
    pub html_out: PathBuf,
    /// Stylesheet linked from and copied next to the HTML.
    pub stylesheet: PathBuf,
    /// Fragments spliced into the head of the HTML.
    pub header_includes: Vec<PathBuf>,
    /// Keep the numbered markdown after rendering.
    pub keep_markdown: bool,
}

/// Number `input` and atomically write the result to `output`.
///
/// # Errors
///
/// Returns any rewrite error, or an I/O error while reading or writing. `output` is left
/// untouched on failure.
pub fn write_numbered<F: Format>(
    rewriter: &DocumentRewriter<F>,
    input: &Path,
    output: &Path,
) -> Result<SectionRegistry> {
    let source = fs::read_to_string(input)?;
    let rewritten = rewriter.rewrite(&source)?;

    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;
    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(rewritten.text.as_bytes())?;
    staged.persist(output).map_err(|e| e.error)?;

    info!(output = %output.display(), "wrote numbered markdown");
    Ok(rewritten.registry)
}

/// Number the document and render it.
///
/// The stylesheet is copied next to the HTML after a successful render. The intermediate
/// markdown is removed afterwards, whether rendering succeeded or not, unless the plan keeps it.
///
/// # Errors
///
/// Returns the first rewrite, I/O or renderer error.
pub fn run<F: Format, R: Renderer>(
    plan: &RunPlan,
    rewriter: &DocumentRewriter<F>,
    renderer: &R,
) -> Result<SectionRegistry> {
    let registry = write_numbered(rewriter, &plan.input, &plan.markdown_out)?;

    let rendered = render_and_publish(plan, renderer);

    if !plan.keep_markdown {
        if let Err(e) = fs::remove_file(&plan.markdown_out) {
            warn!(
                path = %plan.markdown_out.display(),
                error = %e,
                "could not remove numbered markdown"
            );
        }
    }

    rendered.map(|()| registry)
}

fn render_and_publish<R: Renderer>(plan: &RunPlan, renderer: &R) -> Result<()> {
    if let Some(dir) = plan.html_out.parent() {
        fs::create_dir_all(dir)?;
    }

    renderer.render(&RenderJob {
        document: &plan.markdown_out,
        destination: &plan.html_out,
        stylesheet: &plan.stylesheet,
        header_includes: &plan.header_includes,
    })?;

    if let (Some(dir), Some(name)) = (plan.html_out.parent(), plan.stylesheet.file_name()) {
        let target = dir.join(name);
        if target != plan.stylesheet {
            fs::copy(&plan.stylesheet, &target)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/pipeline.rs"]
mod tests;
