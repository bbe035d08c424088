//! Percent-decoding of a single path segment.
//!
//! `+` is left alone here; it is a literal until the cleanup step.
//! A `%` that is not followed by two hex digits passes through unchanged in
//! lossy mode and is rejected in strict mode.

use percent_encoding::percent_decode_str;
use std::borrow::Cow;

use super::error::TitleError;

/// Decodes `%XX` escapes, replacing bytes that are not valid UTF-8 with U+FFFD.
pub fn decode_lossy(segment: &str) -> Cow<'_, str> {
    percent_decode_str(segment).decode_utf8_lossy()
}

/// Decodes `%XX` escapes, failing on a malformed escape or when the result is
/// not valid UTF-8.
pub fn decode_strict(segment: &str) -> Result<Cow<'_, str>, TitleError> {
    if let Some(offset) = find_malformed_escape(segment) {
        return Err(TitleError::MalformedEscape {
            segment: segment.to_string(),
            offset,
        });
    }
    percent_decode_str(segment)
        .decode_utf8()
        .map_err(|source| TitleError::InvalidUtf8 {
            segment: segment.to_string(),
            source,
        })
}

/// Byte offset of the first `%` not followed by two hex digits.
fn find_malformed_escape(segment: &str) -> Option<usize> {
    let bytes = segment.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let well_formed = bytes.len() > i + 2
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !well_formed {
                return Some(i);
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    None
}
