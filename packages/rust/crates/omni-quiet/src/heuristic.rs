//! Surface-text heuristics deciding what a diagnostic call looks like.
//!
//! None of this parses the host language. A call is recognized by name, a
//! call is considered closed by the first line holding `);` or ending in
//! `)`. Nested calls spanning lines, `)` inside string literals and
//! trailing comments after the closer can all fool it; the rewrite is then
//! wrong but never fails.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{COMMENT_MARKER, LOG_RECEIVER, LogMethod};

static TARGET_CALL: Lazy<Regex> = Lazy::new(|| {
    let names: Vec<&str> = LogMethod::ALL.iter().map(|m| m.as_str()).collect();
    let pattern = format!(r"\b{LOG_RECEIVER}\.({})\(", names.join("|"));
    Regex::new(&pattern).expect("Failed to compile console call pattern")
});

/// Whether the line contains a call to one of the recognized methods.
#[must_use]
pub fn is_target_call(line: &str) -> bool {
    TARGET_CALL.is_match(line)
}

/// Whether the line already starts with the comment marker after indentation.
#[must_use]
pub fn is_commented(line: &str) -> bool {
    line.trim_start().starts_with(COMMENT_MARKER)
}

/// Whether the line terminates a call: holds `);` or ends with `)`.
#[must_use]
pub fn closes_call(line: &str) -> bool {
    line.contains(");") || line.trim_end().ends_with(')')
}

/// Split a line into its leading whitespace and the remaining content.
#[must_use]
pub fn split_indent(line: &str) -> (&str, &str) {
    let content = line.trim_start();
    (&line[..line.len() - content.len()], content)
}

/// Rewrite a line as a comment, keeping its indentation byte-identical.
#[must_use]
pub fn comment_line(line: &str) -> String {
    let (indent, content) = split_indent(line);
    format!("{indent}{COMMENT_MARKER} {content}")
}
