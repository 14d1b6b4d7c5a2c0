#![allow(clippy::doc_markdown)]

//! omni-quiet - Silence console diagnostics across a frontend source tree
//!
//! Walks a source directory, finds `console.log/error/warn/debug/info`
//! calls and turns them into line comments in place. Files are rewritten
//! only when their content actually changes, so reruns are no-ops.
//!
//! # Features
//!
//! - **Indentation-preserving**: `  console.log(x);` becomes `  // console.log(x);`
//! - **Multi-line calls**: every line of an open call is commented individually
//! - **Idempotent**: already-commented calls are left alone
//! - **Per-file recovery**: a failing file is reported and the run continues
//!
//! # Architecture (ODF-REP Compliant)
//!
//! ```text
//! omni-quiet/src/
//! ├── lib.rs        # Re-exports (this file)
//! ├── main.rs       # Binary entry point
//! ├── error.rs      # CommentError enum (thiserror)
//! ├── types.rs      # LogMethod, SourceExtension, CommenterConfig, results
//! ├── heuristic.rs  # Call detection & closing-line predicates
//! ├── commenter.rs  # LineCommenter implementation
//! ├── diff.rs       # Diff generation utilities
//! └── directory.rs  # File discovery & sequential directory runs
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use omni_quiet::{CommenterConfig, LineCommenter};
//!
//! // Single file
//! let changed = LineCommenter::process_file("src/main.ts");
//!
//! // Whole tree
//! let summary = LineCommenter::process_directory(&CommenterConfig::default());
//! println!("Modified {} files", summary.modified_count());
//! ```

// ============================================================================
// Module Declarations (ODF-REP: Atomic Structure)
// ============================================================================

mod commenter;
mod diff;
mod directory;
mod error;
pub mod heuristic;
mod types;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use commenter::LineCommenter;
pub use error::CommentError;
pub use types::{
    COMMENT_MARKER, COMPILED_EXTENSION, CommentResult, CommentedSpan, CommenterConfig,
    DEFAULT_ROOT, FileOutcome, LOG_RECEIVER, LogMethod, MAX_FILE_SIZE, SourceExtension,
};

// Directory run exports
pub use directory::{CommentSummary, discover_files};

// Re-export diff utility for external use
pub use diff::generate_unified_diff;
