//! Version extraction from `--version` output.

use regex::Regex;
use std::sync::OnceLock;

/// First dotted-numeric run in the output, at least two components.
fn version_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\d+(?:\.\d+)+").expect("Invalid regex pattern"))
}

/// Extract a dotted version string from CLI output.
///
/// Handles the formats the supported CLIs print:
///
/// - `2.1.12 (Claude Code)` -> `2.1.12`
/// - `codex-cli 0.87.0` -> `0.87.0`
/// - `v0.2.4.1` -> `0.2.4.1`
///
/// The string is returned as printed; comparison happens later in
/// [`crate::features`], which is where malformed values are rejected.
pub(crate) fn parse_version(output: &str) -> Option<String> {
    version_pattern()
        .find(output)
        .map(|m| m.as_str().to_string())
}
