//! Core types for comment rewriting.
//!
//! Defines the recognized call names, the scanned file extensions and the
//! results produced by the commenter.

use std::path::PathBuf;

/// Line-comment marker prefixed to every rewritten line.
pub const COMMENT_MARKER: &str = "//";

/// Receiver object of the recognized diagnostic calls.
pub const LOG_RECEIVER: &str = "console";

/// Extension of compiled output files, never edited even when matched.
pub const COMPILED_EXTENSION: &str = "js";

/// Root directory scanned by the binary.
pub const DEFAULT_ROOT: &str = "frontend/src";

/// Upper bound on the size of a file the commenter will read (16 MiB).
pub const MAX_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// Diagnostic method names whose calls get commented out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogMethod {
    /// `console.log`
    Log,
    /// `console.error`
    Error,
    /// `console.warn`
    Warn,
    /// `console.debug`
    Debug,
    /// `console.info`
    Info,
}

impl LogMethod {
    /// Every recognized method, in matching order.
    pub const ALL: [Self; 5] = [Self::Log, Self::Error, Self::Warn, Self::Debug, Self::Info];

    /// Method name as written in source.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Log => "log",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }
}

/// Source file kinds scanned for diagnostic calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceExtension {
    /// Single-file components (`.vue`).
    Vue,
    /// TypeScript sources (`.ts`).
    Ts,
}

impl SourceExtension {
    /// Extension without the leading dot.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vue => "vue",
            Self::Ts => "ts",
        }
    }

    /// File-name suffix including the leading dot.
    #[must_use]
    pub fn suffix(self) -> String {
        format!(".{}", self.as_str())
    }
}

/// Configuration for a directory run.
#[derive(Debug, Clone)]
pub struct CommenterConfig {
    /// Directory scanned recursively.
    pub root: PathBuf,
    /// Extensions to scan, processed in this order.
    pub extensions: Vec<SourceExtension>,
}

impl Default for CommenterConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            extensions: vec![SourceExtension::Vue, SourceExtension::Ts],
        }
    }
}

/// Lines of one commented call (1-indexed, inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentedSpan {
    /// Line holding the opening call.
    pub start_line: usize,
    /// Last line of the call.
    pub end_line: usize,
}

impl CommentedSpan {
    /// Number of physical lines in the span.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end_line - self.start_line + 1
    }

    /// Whether the call sits on a single line.
    #[must_use]
    pub const fn is_single_line(&self) -> bool {
        self.start_line == self.end_line
    }
}

/// Result of commenting out calls in one buffer.
#[derive(Debug, Clone)]
pub struct CommentResult {
    /// Content before rewriting.
    pub original: String,
    /// Content after rewriting.
    pub modified: String,
    /// Spans that were commented, in file order.
    pub spans: Vec<CommentedSpan>,
}

impl CommentResult {
    /// Whether the rewritten content differs byte-for-byte from the original.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.original != self.modified
    }
}

/// Outcome of processing one file on disk.
#[derive(Debug, Clone)]
pub struct FileOutcome {
    /// File that was processed.
    pub path: PathBuf,
    /// Whether the file was rewritten.
    pub changed: bool,
    /// Spans that were commented.
    pub spans: Vec<CommentedSpan>,
}
