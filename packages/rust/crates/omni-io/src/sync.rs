//! Synchronous file I/O operations.

use std::fs as std_fs;
use std::io::{Read, Write};
use std::path::Path;

use tracing::debug;

use crate::detect::decode_utf8;
use crate::error::IoError;

/// Read text from a file with size and binary checks (synchronous).
///
/// # Arguments
/// * `path` - Path to the file
/// * `max_bytes` - Maximum file size in bytes
///
/// # Returns
/// Decoded text content or an error.
///
/// # Example
///
/// ```rust,ignore
/// use omni_io::read_text_safe;
///
/// let content = read_text_safe("src/App.vue", 1024 * 1024)?;
/// ```
pub fn read_text_safe<P: AsRef<Path>>(path: P, max_bytes: u64) -> Result<String, IoError> {
    let path = path.as_ref();

    let metadata = std_fs::metadata(path)
        .map_err(|_| IoError::NotFound(path.to_string_lossy().to_string()))?;

    if metadata.len() > max_bytes {
        return Err(IoError::TooLarge(metadata.len(), max_bytes));
    }

    let mut file = std_fs::File::open(path)?;
    let mut buffer = Vec::with_capacity(usize::try_from(metadata.len()).unwrap_or_default());
    file.read_to_end(&mut buffer)?;

    decode_utf8(buffer)
}

/// Replace the whole content of an existing file, in place.
///
/// The target is opened for writing without creating or renaming anything,
/// so permissions are honored, hard links keep sharing the new content and
/// a symlink writes through to its target. The content goes down in one
/// `write_all` before the length is trimmed to it.
///
/// # Errors
/// Returns `IoError::NotFound` when the target does not exist and
/// `IoError::System` when it cannot be opened for writing or written.
pub fn write_text_in_place<P: AsRef<Path>>(path: P, content: &str) -> Result<(), IoError> {
    let path = path.as_ref();

    std_fs::metadata(path).map_err(|_| IoError::NotFound(path.to_string_lossy().to_string()))?;

    let mut file = std_fs::OpenOptions::new().write(true).open(path)?;
    file.write_all(content.as_bytes())?;
    file.set_len(content.len() as u64)?;
    file.sync_all()?;

    debug!(path = %path.display(), bytes = content.len(), "replaced file content");
    Ok(())
}
