//! Core line commenter implementation.
//!
//! Turns recognized `console.*` calls into line comments, one physical
//! line at a time, preserving every line's indentation.

use std::fmt::Write as _;
use std::path::Path;

use tracing::{debug, error};

use crate::diff::generate_unified_diff;
use crate::error::CommentError;
use crate::heuristic::{closes_call, comment_line, is_commented, is_target_call};
use crate::types::{CommentResult, CommentedSpan, FileOutcome, MAX_FILE_SIZE};

/// Log a per-file failure as `Error processing <path>: <reason>`.
pub(crate) fn report_failure(path: &Path, err: &CommentError) {
    error!("Error processing {}: {}", path.display(), err);
}

/// LineCommenter - comments out console diagnostics in place.
///
/// # Example
///
/// ```rust,ignore
/// use omni_quiet::LineCommenter;
///
/// let result = LineCommenter::comment_source("  console.log(\"hi\");\n");
/// assert_eq!(result.modified, "  // console.log(\"hi\");\n");
/// ```
pub struct LineCommenter;

impl LineCommenter {
    /// Comment out every recognized call in `content`.
    ///
    /// Lines are split on `\n` and joined back with `\n`, so a `\r` before
    /// the newline stays part of its line and CRLF or mixed line endings
    /// come out byte-identical.
    #[must_use]
    pub fn comment_source(content: &str) -> CommentResult {
        let lines: Vec<&str> = content.split('\n').collect();
        let mut out: Vec<String> = Vec::with_capacity(lines.len());
        let mut spans = Vec::new();
        let mut i = 0;

        while i < lines.len() {
            let line = lines[i];

            if !is_target_call(line) || is_commented(line) {
                out.push(line.to_string());
                i += 1;
                continue;
            }

            let start = i;
            if !closes_call(line) {
                // Open call: extend through the first closing line or EOF.
                while i + 1 < lines.len() {
                    i += 1;
                    if closes_call(lines[i]) {
                        break;
                    }
                }
            }

            for span_line in &lines[start..=i] {
                if is_commented(span_line) {
                    out.push((*span_line).to_string());
                } else {
                    out.push(comment_line(span_line));
                }
            }
            spans.push(CommentedSpan {
                start_line: start + 1,
                end_line: i + 1,
            });
            i += 1;
        }

        CommentResult {
            original: content.to_string(),
            modified: out.join("\n"),
            spans,
        }
    }

    /// Comment out calls in a file, writing it back only when it changed.
    ///
    /// # Errors
    /// Returns `CommentError::Read` or `CommentError::Write` when the file
    /// cannot be decoded or replaced. A failed write leaves the original
    /// content in place.
    pub fn comment_file<P: AsRef<Path>>(path: P) -> Result<FileOutcome, CommentError> {
        let path = path.as_ref();
        let content =
            omni_io::read_text_safe(path, MAX_FILE_SIZE).map_err(|source| CommentError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        let result = Self::comment_source(&content);
        let changed = result.changed();

        if changed {
            omni_io::write_text_in_place(path, &result.modified).map_err(|source| {
                CommentError::Write {
                    path: path.to_path_buf(),
                    source,
                }
            })?;
            let shown = path.display().to_string();
            debug!("{}", Self::format_result(&result, Some(shown.as_str())));
        }

        Ok(FileOutcome {
            path: path.to_path_buf(),
            changed,
            spans: result.spans,
        })
    }

    /// Process one file, reporting failures instead of returning them.
    ///
    /// Returns whether the file was rewritten. Any read or write failure is
    /// logged and reported as `false`.
    pub fn process_file<P: AsRef<Path>>(path: P) -> bool {
        let path = path.as_ref();
        match Self::comment_file(path) {
            Ok(outcome) => outcome.changed,
            Err(e) => {
                report_failure(path, &e);
                false
            }
        }
    }

    /// Format a comment result for display.
    ///
    /// Returns a human-readable summary of the commented spans and the diff.
    #[must_use]
    pub fn format_result(result: &CommentResult, path: Option<&str>) -> String {
        let mut output = String::new();

        if let Some(p) = path {
            let _ = writeln!(output, "// FILE: {p}");
        }
        let _ = writeln!(output, "// Commented calls: {}", result.spans.len());

        if result.spans.is_empty() {
            output.push_str("[No console calls found]\n");
            return output;
        }

        output.push_str("\n// Spans:\n");
        for span in &result.spans {
            if span.is_single_line() {
                let _ = writeln!(output, "L{}", span.start_line);
            } else {
                let _ = writeln!(
                    output,
                    "L{}-L{} ({} lines)",
                    span.start_line,
                    span.end_line,
                    span.len()
                );
            }
        }

        output.push_str("\n// Diff:\n");
        output.push_str(&generate_unified_diff(&result.original, &result.modified));

        output
    }
}
