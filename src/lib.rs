pub mod diff;
pub mod patcher;
pub mod report;
pub mod rules;
pub mod walker;


pub use diff::{generate_unified_diff, print_diff, DiffStats};
pub use patcher::{patch_file, run, OutputFormat, RunOptions};
pub use report::{Outcome, Reporter};
pub use rules::{apply_rules, Rule, RULES};
pub use walker::{collect_script_files, is_candidate, SCRIPT_EXTENSIONS};
