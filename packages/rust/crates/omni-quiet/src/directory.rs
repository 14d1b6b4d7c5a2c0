//! Directory runs - discover candidate files and comment them one by one.
//!
//! Files are processed sequentially in traversal order. A failure on one
//! file is recorded and the run moves on.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::LineCommenter;
use crate::commenter::report_failure;
use crate::types::{COMPILED_EXTENSION, CommenterConfig};

/// Aggregated outcome of a directory run.
#[derive(Debug, Default)]
pub struct CommentSummary {
    /// Number of candidate files processed
    pub files_scanned: usize,
    /// Total number of commented spans across modified files
    pub spans_commented: usize,
    /// Files rewritten, in processing order
    pub modified_files: Vec<PathBuf>,
    /// Files that failed (path, error message), in processing order
    pub errors: Vec<(PathBuf, String)>,
}

impl CommentSummary {
    /// Number of files actually rewritten.
    #[must_use]
    pub fn modified_count(&self) -> usize {
        self.modified_files.len()
    }
}

/// Whether a path is a compiled output file.
fn is_compiled(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(COMPILED_EXTENSION))
}

/// Enumerate candidate files under `config.root`.
///
/// Each configured extension gets its own recursive pass, so a file is
/// listed once per extension it matches, grouped by extension in config
/// order. Within a pass the order is whatever the filesystem yields.
/// Compiled `.js` files are never listed. Unreadable directory entries are
/// skipped.
#[must_use]
pub fn discover_files(config: &CommenterConfig) -> Vec<PathBuf> {
    if !config.root.is_dir() {
        warn!("Root directory not found: {}", config.root.display());
        return Vec::new();
    }

    let mut files = Vec::new();
    for ext in &config.extensions {
        let suffix = ext.suffix();
        for entry in WalkDir::new(&config.root).into_iter().filter_map(Result::ok) {
            // Follows symlinks so linked sources are edited through the link.
            if !entry.path().is_file() {
                continue;
            }
            let path = entry.path();
            let matches = path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.ends_with(&suffix));
            if !matches {
                continue;
            }
            if is_compiled(path) {
                debug!("Skipping compiled file: {}", path.display());
                continue;
            }
            files.push(entry.into_path());
        }
    }
    files
}

impl LineCommenter {
    /// Comment out console calls in every candidate file under the root.
    ///
    /// Progress is reported per file through `tracing`; the returned
    /// summary carries the modified count and any per-file errors.
    #[must_use]
    pub fn process_directory(config: &CommenterConfig) -> CommentSummary {
        let mut summary = CommentSummary::default();

        for path in discover_files(config) {
            summary.files_scanned += 1;
            info!("Processing: {}", path.display());

            match Self::comment_file(&path) {
                Ok(outcome) if outcome.changed => {
                    info!("  ✓ Modified");
                    summary.spans_commented += outcome.spans.len();
                    summary.modified_files.push(outcome.path);
                }
                Ok(_) => info!("  - No changes"),
                Err(e) => {
                    report_failure(&path, &e);
                    info!("  - No changes");
                    summary.errors.push((path, e.to_string()));
                }
            }
        }

        summary
    }
}
