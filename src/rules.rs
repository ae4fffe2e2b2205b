//! The fixed substitution table.
//!
//! PowerShell classes loaded twice through independent `Import-Module` calls
//! get distinct type identities, so a strict `[Logger]` annotation rejects a
//! perfectly good Logger instance that came from the other copy. Widening the
//! annotation to `[object]` avoids the identity check entirely. The rules
//! below are plain substring substitutions, not regexes, and are never
//! mutated after startup.

/// A single literal find/replace pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub find: &'static str,
    pub replace: &'static str,
}

/// Substitution rules, applied top to bottom.
///
/// Covers the strict annotation in its three syntactic positions:
/// property definitions (`[Logger]$_logger`, with and without a space),
/// constructor/method parameters (`([Logger]$logger)`), and the fully
/// qualified form (`[SpeedTUI.Core.Logger]`).
pub const RULES: &[Rule] = &[
    Rule { find: "[Logger]$_logger", replace: "[object]$_logger" },
    Rule { find: "[Logger] $_logger", replace: "[object] $_logger" },
    Rule { find: "([Logger]$logger)", replace: "([object]$logger)" },
    Rule { find: "([Logger] $logger)", replace: "([object] $logger)" },
    Rule { find: "[SpeedTUI.Core.Logger]", replace: "[object]" },
];

/// Apply every rule in order, each global replacement feeding the next.
///
/// No replacement string contains any find string, so applying the table a
/// second time is a no-op.
pub fn apply_rules(content: &str) -> String {
    let mut patched = content.to_string();
    for rule in RULES {
        patched = patched.replace(rule.find, rule.replace);
    }
    patched
}
