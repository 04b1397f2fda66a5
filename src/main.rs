//! chapterize: number a markdown document's sections and render it.
#![allow(clippy::multiple_crate_versions)]

use chapterize::{config, pipeline, render, toc, DocumentRewriter};
use clap::{ArgAction, Parser};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[allow(clippy::struct_excessive_bools)]
#[command(name = "chapterize")]
#[command(about = "Number headings, build a table of contents and resolve chapter links", long_about = None)]
struct Args {
    /// Markdown document to number
    #[arg(value_name = "PATH")]
    input: Option<PathBuf>,

    /// Configuration file (defaults to chapterize.toml if present)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Directory receiving the rendered HTML
    #[arg(long, short = 'o', value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Stylesheet to link and copy next to the HTML
    #[arg(long, value_name = "PATH")]
    stylesheet: Option<PathBuf>,

    /// Line marking where the table of contents goes
    #[arg(long)]
    marker: Option<String>,

    /// Emit headings without links to their own anchors
    #[arg(long)]
    plain_headings: bool,

    /// Reject headings that skip a level
    #[arg(long)]
    strict_levels: bool,

    /// Ignore heading markers inside code blocks
    #[arg(long)]
    skip_code_blocks: bool,

    /// Fragment to include in the HTML head (repeatable)
    #[arg(long = "include-in-header", short = 'H', value_name = "PATH")]
    header_includes: Vec<PathBuf>,

    /// Keep the intermediate numbered markdown
    #[arg(long)]
    keep_markdown: bool,

    /// Write the numbered markdown here and skip rendering
    #[arg(long, value_name = "PATH", conflicts_with = "outline")]
    markdown_only: Option<PathBuf>,

    /// Print the numbered outline as JSON and skip rendering
    #[arg(long)]
    outline: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(long, short = 'v', action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: Args) -> chapterize::Result<()> {
    let mut cfg = config::Config::load(args.config.as_deref())?;

    // Override config with command line args
    if let Some(input) = args.input {
        cfg.input = input.to_string_lossy().into_owned();
    }
    if let Some(dir) = args.output_dir {
        cfg.output_dir = dir.to_string_lossy().into_owned();
    }
    if let Some(stylesheet) = args.stylesheet {
        cfg.stylesheet = stylesheet.to_string_lossy().into_owned();
    }
    if let Some(marker) = args.marker {
        cfg.marker = marker;
    }
    if !args.header_includes.is_empty() {
        cfg.header_includes = args
            .header_includes
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect();
    }
    cfg.self_links &= !args.plain_headings;
    cfg.strict_levels |= args.strict_levels;
    cfg.skip_code_blocks |= args.skip_code_blocks;
    cfg.keep_markdown |= args.keep_markdown;

    let rewriter = DocumentRewriter::new(cfg.rewrite_options());
    let plan = cfg.run_plan();

    if args.outline {
        let source = std::fs::read_to_string(&plan.input)?;
        let registry = rewriter.build_registry(&source)?;
        let outline = toc::TableOfContents::new(&registry, cfg.heading_offset);
        let json = serde_json::to_string_pretty(outline.entries()).map_err(io::Error::other)?;
        println!("{json}");
        return Ok(());
    }

    if let Some(path) = args.markdown_only {
        pipeline::write_numbered(&rewriter, &plan.input, &path)?;
        return Ok(());
    }

    let renderer = render::Pandoc::new(cfg.renderer.clone());
    let registry = pipeline::run(&plan, &rewriter, &renderer)?;
    tracing::info!(
        sections = registry.len(),
        html = %plan.html_out.display(),
        "done"
    );
    Ok(())
}
