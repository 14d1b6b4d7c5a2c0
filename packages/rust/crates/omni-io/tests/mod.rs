//! Tests for omni-io crate.
//!
//! Integration tests for safe file I/O operations.
