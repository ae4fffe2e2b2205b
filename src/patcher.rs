use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

use crate::diff::{self, DiffStats};
use crate::report::{Outcome, Reporter};
use crate::rules::apply_rules;
use crate::walker::collect_script_files;

/// Output format for changed files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One line per changed file
    Default,
    /// Unified diff of every change, then the per-file line
    Diff,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Default
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Default => write!(f, "default"),
            OutputFormat::Diff => write!(f, "diff"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" => Ok(OutputFormat::Default),
            "diff" => Ok(OutputFormat::Diff),
            _ => Err(format!(
                "Invalid output format: {}. Valid values are 'default' or 'diff'",
                s
            )),
        }
    }
}

/// Options for one batch run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub root: PathBuf,
    pub dry_run: bool,
    pub format: OutputFormat,
    pub summary: bool,
    pub exclude: Vec<String>,
}

impl RunOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            dry_run: false,
            format: OutputFormat::Default,
            summary: false,
            exclude: Vec::new(),
        }
    }
}

/// Patch a single candidate file.
///
/// Read and write failures are captured in the outcome, never propagated. The
/// file is only rewritten when the patched text differs from the original;
/// `dry_run` suppresses the write while still yielding `Changed`.
pub fn patch_file(path: &Path, dry_run: bool) -> Outcome {
    let original = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => return Outcome::Failed { reason: e.to_string() },
    };

    let patched = apply_rules(&original);
    if patched == original {
        return Outcome::Unchanged;
    }

    if !dry_run {
        if let Err(e) = fs::write(path, &patched) {
            return Outcome::Failed { reason: e.to_string() };
        }
    }

    Outcome::Changed { original, patched }
}

/// Walk the tree under `opts.root` and patch every candidate file.
///
/// Fails only when the root itself cannot be walked; per-file failures are
/// reported and the run continues with the next file.
pub fn run(opts: &RunOptions) -> Result<Reporter> {
    let files = collect_script_files(&opts.root, &opts.exclude)?;

    let mut reporter = Reporter::new(opts.dry_run);
    let mut stats = DiffStats::default();

    for path in &files {
        let outcome = patch_file(path, opts.dry_run);

        if let Outcome::Changed { original, patched } = &outcome {
            if opts.format == OutputFormat::Diff {
                stats.add(&diff::print_diff(path, original, patched));
            } else if opts.summary {
                let (_, file_stats) = diff::generate_unified_diff(path, original, patched, 3);
                stats.add(&file_stats);
            }
        }

        reporter.record(path, &outcome);
    }

    reporter.finish();
    if opts.summary {
        stats.print_summary();
    }

    Ok(reporter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_patch_file_rewrites_matching_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Host.ps1");
        fs::write(&path, "hidden [Logger]$_logger\n").unwrap();

        let outcome = patch_file(&path, false);

        assert!(matches!(outcome, Outcome::Changed { .. }));
        let on_disk = fs::read_to_string(&path).unwrap();
        assert_eq!(on_disk, "hidden [object]$_logger\n");
    }

    #[test]
    fn test_patch_file_leaves_unmatched_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plain.ps1");
        fs::write(&path, "Write-Host 'hello'\n").unwrap();

        let outcome = patch_file(&path, false);

        assert_eq!(outcome, Outcome::Unchanged);
        assert_eq!(fs::read_to_string(&path).unwrap(), "Write-Host 'hello'\n");
    }

    #[test]
    fn test_patch_file_dry_run_does_not_write() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Host.ps1");
        fs::write(&path, "hidden [Logger]$_logger\n").unwrap();

        let outcome = patch_file(&path, true);

        assert!(matches!(outcome, Outcome::Changed { .. }));
        let on_disk = fs::read_to_string(&path).unwrap();
        assert_eq!(on_disk, "hidden [Logger]$_logger\n");
    }

    #[test]
    fn test_patch_file_missing_file_is_a_per_file_failure() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gone.ps1");

        let outcome = patch_file(&path, false);

        assert!(matches!(outcome, Outcome::Failed { .. }));
    }

    #[test]
    fn test_patch_file_invalid_utf8_is_a_per_file_failure() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("binary.ps1");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x41]).unwrap();

        let outcome = patch_file(&path, false);

        assert!(matches!(outcome, Outcome::Failed { .. }));
        // The bytes on disk are untouched
        assert_eq!(fs::read(&path).unwrap(), vec![0xff, 0xfe, 0x00, 0x41]);
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("default".parse::<OutputFormat>(), Ok(OutputFormat::Default));
        assert_eq!("diff".parse::<OutputFormat>(), Ok(OutputFormat::Diff));
        assert_eq!("DIFF".parse::<OutputFormat>(), Ok(OutputFormat::Diff));
        assert!("json".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_output_format_display_round_trip() {
        for format in [OutputFormat::Default, OutputFormat::Diff] {
            assert_eq!(format.to_string().parse::<OutputFormat>(), Ok(format));
        }
    }
}
