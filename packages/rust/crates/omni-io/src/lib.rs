#![allow(clippy::doc_markdown)]

//! omni-io - Safe text file I/O for Omni DevEnv
//!
//! Reads source files as strict UTF-8 text and writes them back as a
//! single whole-content replacement.
//!
//! # Features
//!
//! - **Safety**: Binary detection & Size limits
//! - **Strict decoding**: Invalid UTF-8 is an error, never replaced
//! - **In-place writes**: Same inode, permissions honored, links kept
//!
//! # Architecture (ODF-REP Compliant)
//!
//! ```text
//! omni-io/src/
//! ├── lib.rs      # Re-exports (this file)
//! ├── error.rs    # IoError enum
//! ├── detect.rs   # Binary detection & decoding
//! └── sync.rs     # Synchronous read/write API
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use omni_io::{read_text_safe, write_text_in_place};
//!
//! let content = read_text_safe("App.vue", 1024 * 1024)?;
//! write_text_in_place("App.vue", &content.replace("foo", "bar"))?;
//! ```

// ============================================================================
// Module Declarations (ODF-REP: Atomic Structure)
// ============================================================================

mod detect;
mod error;
mod sync;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use error::IoError;
pub use sync::{read_text_safe, write_text_in_place};

// Re-export detection utilities for advanced use
pub use detect::{decode_utf8, is_binary};
