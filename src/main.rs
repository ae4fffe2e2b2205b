use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use ps_relax::{run, OutputFormat, RunOptions};

#[derive(Parser)]
#[command(name = "ps-relax")]
#[command(about = "Relax strict [Logger] type annotations across a PowerShell script tree")]
#[command(long_about = "Batch text patcher for PowerShell codebases hit by the module double-loading
class identity bug: a [Logger] typed property or parameter rejects a Logger
instance that came from an independently loaded copy of the same module.

ps-relax walks a directory tree, rewrites every strict [Logger] annotation in
.ps1/.psm1 files to [object], and reports what changed. Matching is literal
substring replacement, not syntax-aware: comments and here-strings are
rewritten like any other text. Files are edited in place with no backup;
use --dry-run to preview first.")]
#[command(after_help = "EXAMPLES:
  # Patch the default tree (./working)
  ps-relax

  # Patch a specific tree
  ps-relax path/to/modules

  # Preview without writing anything
  ps-relax path/to/modules --dry-run --format diff

  # Skip vendored scripts
  ps-relax --exclude vendor --exclude \"*.tests.ps1\"")]
#[command(version)]
struct Cli {
    /// Root directory to scan (falls back to $PS_RELAX_ROOT, then "working")
    root: Option<PathBuf>,

    /// Report would-be changes without writing anything
    #[arg(long)]
    dry_run: bool,

    /// Output format: "default" or "diff"
    #[arg(long, default_value = "default")]
    format: String,

    /// Show summary statistics after the run
    #[arg(long)]
    summary: bool,

    /// Exclude paths matching these patterns (can be used multiple times)
    #[arg(long, num_args = 0..)]
    exclude: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let root = cli
        .root
        .or_else(|| std::env::var("PS_RELAX_ROOT").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("working"));

    let format: OutputFormat = cli.format.parse().map_err(anyhow::Error::msg)?;

    run(&RunOptions {
        root,
        dry_run: cli.dry_run,
        format,
        summary: cli.summary,
        exclude: cli.exclude,
    })?;

    Ok(())
}
