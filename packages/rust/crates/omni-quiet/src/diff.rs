//! Diff generation utilities.
//!
//! Renders what the commenter changed as a unified diff via the `similar`
//! crate, for debug logging and previews.

use similar::TextDiff;

/// Lines of unchanged context kept around each hunk.
const CONTEXT_RADIUS: usize = 3;

/// Generate a unified diff between two strings.
///
/// Hunks carry `@@ -a,b +c,d @@` headers; changed lines are prefixed with
/// `-` and `+`, context lines with a space. Identical inputs yield an empty
/// string.
#[must_use]
pub fn generate_unified_diff(original: &str, modified: &str) -> String {
    if original == modified {
        return String::new();
    }

    TextDiff::from_lines(original, modified)
        .unified_diff()
        .context_radius(CONTEXT_RADIUS)
        .missing_newline_hint(false)
        .to_string()
}
