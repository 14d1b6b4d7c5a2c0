//! Binary detection and decoding utilities.
//!
//! Quick binary detection using NULL byte scanning.

use memchr::memchr;

use crate::error::IoError;

/// Number of leading bytes inspected by [`is_binary`].
const BINARY_SNIFF_LEN: usize = 8192;

/// Quick binary detection - checks first 8KB for NULL bytes.
///
/// Files containing NULL bytes in the first 8KB are considered binary.
#[must_use]
pub fn is_binary(buffer: &[u8]) -> bool {
    let check_len = buffer.len().min(BINARY_SNIFF_LEN);
    memchr(0, &buffer[..check_len]).is_some()
}

/// Decode bytes to a String, rejecting binary and non-UTF-8 content.
///
/// Decoding is strict: callers write the text back to disk, so a lossy
/// U+FFFD substitution would silently corrupt the file.
///
/// # Errors
/// Returns `IoError::BinaryFile` when binary content is detected and
/// `IoError::Encoding` with the offset of the first invalid byte otherwise.
pub fn decode_utf8(buffer: Vec<u8>) -> Result<String, IoError> {
    if is_binary(&buffer) {
        return Err(IoError::BinaryFile);
    }

    String::from_utf8(buffer).map_err(|e| IoError::Encoding(e.utf8_error().valid_up_to()))
}
