use anyhow::{bail, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extensions accepted by the candidate filter.
pub const SCRIPT_EXTENSIONS: &[&str] = &["ps1", "psm1"];

/// True if the path names a PowerShell script file.
///
/// Exact extension match; case folding is left to the filesystem.
pub fn is_candidate(path: &Path) -> bool {
    match path.extension().and_then(|s| s.to_str()) {
        Some(ext) => SCRIPT_EXTENSIONS.contains(&ext),
        None => false,
    }
}

/// Recursively collect candidate script files under `root`.
///
/// The root itself must be a listable directory. Unreadable entries deeper in
/// the tree are skipped with a warning rather than aborting the walk, in the
/// same spirit as the per-file processing policy.
pub fn collect_script_files(root: &Path, exclude_patterns: &[String]) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        bail!(
            "Root directory {} does not exist or is not a directory",
            root.display()
        );
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_file() && is_candidate(entry.path()) {
                    files.push(entry.path().to_path_buf());
                }
            }
            Err(e) => eprintln!("Warning: skipping unreadable entry: {}", e),
        }
    }

    // Filter out excluded paths
    if !exclude_patterns.is_empty() {
        files.retain(|file| {
            let file_str = file.to_string_lossy();
            !exclude_patterns.iter().any(|pattern| {
                if pattern.contains('*') || pattern.contains('?') || pattern.contains('[') {
                    // Glob matching
                    glob::Pattern::new(pattern)
                        .map(|p| p.matches(&file_str))
                        .unwrap_or(false)
                } else {
                    // Simple substring matching for non-glob patterns
                    file_str.contains(pattern.as_str())
                }
            })
        });
    }

    Ok(files)
}
