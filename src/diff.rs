use similar::{ChangeTag, TextDiff};
use std::path::Path;

/// Aggregate statistics across all diffed files.
#[derive(Debug, Default)]
pub struct DiffStats {
    pub files_changed: usize,
    pub lines_added: usize,
    pub lines_removed: usize,
}

impl DiffStats {
    pub fn add(&mut self, other: &DiffStats) {
        self.files_changed += other.files_changed;
        self.lines_added += other.lines_added;
        self.lines_removed += other.lines_removed;
    }

    pub fn print_summary(&self) {
        println!("\nSummary:");
        println!("Files changed: {}", self.files_changed);
        println!("Lines added: {}", self.lines_added);
        println!("Lines removed: {}", self.lines_removed);
    }
}

/// Generate a unified diff between the original and patched content.
///
/// The `---`/`+++` headers name the file; `context_lines` controls the
/// context radius around each hunk.
pub fn generate_unified_diff(
    path: &Path,
    original: &str,
    patched: &str,
    context_lines: usize,
) -> (String, DiffStats) {
    let diff = TextDiff::from_lines(original, patched);

    let mut output = String::new();
    let mut stats = DiffStats::default();

    let path_str = path.display().to_string();
    output.push_str(&format!("--- {}\n", path_str));
    output.push_str(&format!("+++ {}\n", path_str));

    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Insert => stats.lines_added += 1,
            ChangeTag::Delete => stats.lines_removed += 1,
            ChangeTag::Equal => {}
        }
    }

    let unified = diff
        .unified_diff()
        .context_radius(context_lines)
        .to_string();
    output.push_str(&unified);

    if stats.lines_added > 0 || stats.lines_removed > 0 {
        stats.files_changed = 1;
    }

    (output, stats)
}

/// Print a unified diff to stdout, returning its statistics.
///
/// Nothing is printed when the contents are identical.
pub fn print_diff(path: &Path, original: &str, patched: &str) -> DiffStats {
    let (diff_output, stats) = generate_unified_diff(path, original, patched, 3);

    if stats.files_changed > 0 {
        print!("{}", diff_output);
    }

    stats
}
