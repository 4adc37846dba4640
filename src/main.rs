//! gdsummary — summarize a directory of GDScript files into one Markdown report.
//!
//! Default layout, relative to the project root:
//!
//! ```text
//! src/
//!   Main.gd              <- entry point, rendered in full
//!   PlotInfo.gd          <- class file, placeholder summary
//!   *.gd                 <- listed in the file index
//!   dev-view-src/
//!     Main.md            <- the report (overwritten on every run)
//! ```

mod inventory;
mod model;
mod parser;
mod report;
mod toc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use model::SourceFile;

#[derive(Parser)]
#[command(
    name = "gdsummary",
    about = "Summarize GDScript source files in a single Markdown document",
    version
)]
struct Cli {
    /// Project root
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Source directory [default: <ROOT>/src]
    #[arg(short = 's', long)]
    src: Option<PathBuf>,

    /// Report file [default: <SRC>/dev-view-src/Main.md]
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Entry-point script rendered in full
    #[arg(short = 'm', long = "main", default_value = "Main.gd")]
    main_file: String,

    /// Script that gets the class summary
    #[arg(short = 'c', long = "class", default_value = "PlotInfo.gd")]
    class_file: String,

    /// Leave the global-variable count column out of the file index
    #[arg(long)]
    no_global_count: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    info!("Running gdsummary v{}", env!("CARGO_PKG_VERSION"));

    let src = cli.src.clone().unwrap_or_else(|| cli.root.join("src"));
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| src.join("dev-view-src").join("Main.md"));

    // Preconditions: nothing is written unless both directories exist
    if !src.is_dir() {
        bail!("source directory not found: {}", src.display());
    }
    let output_dir = match output.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    if !output_dir.is_dir() {
        bail!("output directory not found: {}", output_dir.display());
    }

    let files = discover(&src)?;
    info!("Found {} GDScript files in {}", files.len(), src.display());
    if files.is_empty() {
        warn!("no *.gd files in {}", src.display());
    }

    let fallback;
    let main = match files.iter().find(|f| f.name == cli.main_file) {
        Some(file) => file,
        None => {
            warn!("{} not among discovered files, reading it directly", cli.main_file);
            fallback = read_source(&src.join(&cli.main_file))?;
            &fallback
        }
    };

    let target = output
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let config = report::ReportConfig {
        main_name: &cli.main_file,
        class_name: &cli.class_file,
        target: &target,
        with_globals: !cli.no_global_count,
    };
    let doc = report::render(&files, main, &config);

    fs::write(&output, doc).with_context(|| format!("failed to write {}", output.display()))?;
    info!("Wrote {}", output.display());

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Collect `*.gd` files directly inside `src`, sorted by path.
fn discover(src: &Path) -> Result<Vec<SourceFile>> {
    let pattern = format!(
        "{}/*.gd",
        glob::Pattern::escape(&src.to_string_lossy())
    );
    let mut paths: Vec<PathBuf> = glob::glob(&pattern)
        .with_context(|| format!("invalid glob pattern: {}", pattern))?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect();
    // Sort for deterministic output
    paths.sort();

    paths.iter().map(|p| read_source(p)).collect()
}

fn read_source(path: &Path) -> Result<SourceFile> {
    let text =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let file = SourceFile {
        path: path.to_path_buf(),
        name,
        text,
    };
    debug!(
        "{}: {} lines, {} globals, kind {}",
        file.path.display(),
        inventory::effective_lines(&file.text),
        parser::globals::collect(&file.text).count(),
        inventory::infer_kind(&file.text, false).0
    );
    Ok(file)
}
