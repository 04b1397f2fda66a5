use super::{run, write_numbered, RunPlan};
use crate::error::{Error, Result};
use crate::render::{RenderJob, Renderer};
use crate::rewriter::{DocumentRewriter, RewriteOptions};
use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const GUIDE: &str = "\
# Guide
TABLE_OF_CONTENTS_HERE
# Intro
See CHAPTER_LINK_design.
# Design
";

/// Records each job and writes the document it was given as the "HTML".
#[derive(Default)]
struct RecordingRenderer {
    seen: RefCell<Vec<(PathBuf, String)>>,
}

impl Renderer for RecordingRenderer {
    fn render(&self, job: &RenderJob<'_>) -> Result<()> {
        let document = fs::read_to_string(job.document)?;
        fs::write(job.destination, &document)?;
        self.seen
            .borrow_mut()
            .push((job.destination.to_path_buf(), document));
        Ok(())
    }
}

struct FailingRenderer;

impl Renderer for FailingRenderer {
    fn render(&self, _job: &RenderJob<'_>) -> Result<()> {
        Err(Error::Io(io::Error::other("renderer exploded")))
    }
}

fn setup(source: &str, keep_markdown: bool) -> (TempDir, RunPlan) {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("guide.md");
    let stylesheet = dir.path().join("style.css");
    fs::write(&input, source).unwrap();
    fs::write(&stylesheet, "body { margin: 0 }").unwrap();

    let out = dir.path().join("public");
    let plan = RunPlan {
        input,
        markdown_out: out.join("guide_sections.md"),
        html_out: out.join("index.html"),
        stylesheet,
        header_includes: Vec::new(),
        keep_markdown,
    };
    (dir, plan)
}

fn rewriter() -> DocumentRewriter {
    DocumentRewriter::new(RewriteOptions::default())
}

#[test]
fn test_full_run() {
    let (_dir, plan) = setup(GUIDE, false);
    let renderer = RecordingRenderer::default();

    let registry = run(&plan, &rewriter(), &renderer).unwrap();
    assert_eq!(registry.len(), 2);

    let seen = renderer.seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0, plan.html_out);
    assert!(seen[0].1.contains("# 1 [Intro](#intro)"));
    assert!(seen[0].1.contains("See [2](#design)."));

    assert!(plan.html_out.exists());
    let copied = plan.html_out.parent().unwrap().join("style.css");
    assert_eq!(fs::read_to_string(copied).unwrap(), "body { margin: 0 }");
    assert!(!plan.markdown_out.exists(), "intermediate markdown removed");
}

#[test]
fn test_keep_markdown() {
    let (_dir, plan) = setup(GUIDE, true);
    run(&plan, &rewriter(), &RecordingRenderer::default()).unwrap();

    let kept = fs::read_to_string(&plan.markdown_out).unwrap();
    assert!(kept.contains("<nav id=\"TOC\">"));
}

#[test]
fn test_renderer_failure_propagates_and_cleans_up() {
    let (_dir, plan) = setup(GUIDE, false);
    let err = run(&plan, &rewriter(), &FailingRenderer).unwrap_err();

    assert!(err.to_string().contains("renderer exploded"));
    assert!(!plan.markdown_out.exists());
    assert!(!plan.html_out.exists());
}

#[test]
fn test_rewrite_failure_skips_rendering() {
    let (_dir, plan) = setup("TABLE_OF_CONTENTS_HERE\n# Overview\n# Overview\n", false);
    let renderer = RecordingRenderer::default();

    let err = run(&plan, &rewriter(), &renderer).unwrap_err();
    assert!(matches!(err, Error::DuplicateTitle { .. }));
    assert!(renderer.seen.borrow().is_empty());
    assert!(!plan.markdown_out.exists());
}

#[test]
fn test_failed_rewrite_leaves_existing_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("guide.md");
    let output = dir.path().join("numbered.md");
    fs::write(&input, "TABLE_OF_CONTENTS_HERE\nCHAPTER_LINK_nowhere\n").unwrap();
    fs::write(&output, "previous run").unwrap();

    let err = write_numbered(&rewriter(), &input, &output).unwrap_err();
    assert!(matches!(err, Error::DanglingReference { .. }));
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous run");

    let leftovers: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(leftovers.len(), 2, "no staging file left behind");
}

#[test]
fn test_write_numbered_creates_directories() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("guide.md");
    fs::write(&input, GUIDE).unwrap();
    let output = dir.path().join("nested").join("deeper").join("out.md");

    write_numbered(&rewriter(), &input, &output).unwrap();
    let text = fs::read_to_string(Path::new(&output)).unwrap();
    assert!(text.starts_with("# Guide\n<nav id=\"TOC\">\n"));
}
