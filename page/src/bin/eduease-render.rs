//! # eduease-render
//!
//! Exports the EduEase landing page as a static HTML document, or dumps the
//! render tree as JSON for inspection.
//!
//! ```bash
//! eduease-render --out dist/index.html
//! eduease-render --content content/landing.toml --format tree --year 2026
//! ```

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;

use eduease_page::{FixedYear, PageContent, SystemClock, YearProvider, render, render_tree};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// Complete HTML document
    Html,
    /// Render tree as pretty-printed JSON
    Tree,
}

#[derive(Parser, Debug)]
#[command(name = "eduease-render")]
#[command(about = "Render the EduEase landing page to static HTML")]
#[command(version)]
struct Args {
    /// Content file (.toml or .json); built-in content when omitted
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Output file; stdout when omitted
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "html")]
    format: Format,

    /// Pin the copyright year instead of reading the system clock
    #[arg(long)]
    year: Option<i32>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&args.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let content = match &args.content {
        Some(path) => PageContent::from_path(path)
            .with_context(|| format!("failed to load content from {}", path.display()))?,
        None => PageContent::default(),
    };

    let clock: Box<dyn YearProvider> = match args.year {
        Some(year) => Box::new(FixedYear(year)),
        None => Box::new(SystemClock),
    };

    let tree = render(&content, clock.as_ref());
    let output = match args.format {
        Format::Html => render_tree(tree),
        Format::Tree => serde_json::to_string_pretty(&tree).context("failed to serialize tree")?,
    };

    match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            std::fs::write(path, &output)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("Wrote {} ({} bytes)", path.display(), output.len());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}
