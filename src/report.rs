use std::path::Path;

/// Per-file processing outcome, produced by the patcher and collected by the
/// reporter.
///
/// `Changed` carries both text buffers so diff output can be rendered without
/// a second read. A `Failed` file is neither counted as fixed nor retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Changed { original: String, patched: String },
    Unchanged,
    Failed { reason: String },
}

/// Tallies outcomes and prints the per-file and final count lines.
#[derive(Debug)]
pub struct Reporter {
    dry_run: bool,
    pub scanned: usize,
    pub fixed: usize,
    pub failed: usize,
}

impl Reporter {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            scanned: 0,
            fixed: 0,
            failed: 0,
        }
    }

    /// Record one file's outcome.
    ///
    /// Changed files get a stdout line, failures a stderr line with the
    /// underlying error; unchanged files are silent.
    pub fn record(&mut self, path: &Path, outcome: &Outcome) {
        self.scanned += 1;
        match outcome {
            Outcome::Changed { .. } => {
                if self.dry_run {
                    println!("Would relax [Logger] type constraint in: {}", path.display());
                } else {
                    println!("Relaxed [Logger] type constraint in: {}", path.display());
                }
                self.fixed += 1;
            }
            Outcome::Unchanged => {}
            Outcome::Failed { reason } => {
                eprintln!("Failed to process {}: {}", path.display(), reason);
                self.failed += 1;
            }
        }
    }

    /// Print the final count line.
    pub fn finish(&self) {
        if self.dry_run {
            println!("Total files that would be fixed: {}", self.fixed);
        } else {
            println!("Total files fixed: {}", self.fixed);
        }
    }
}
