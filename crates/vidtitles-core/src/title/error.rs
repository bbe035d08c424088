//! Error type for checked title extraction.

use std::str::Utf8Error;

#[derive(Debug, thiserror::Error)]
pub enum TitleError {
    /// Percent-decoding produced bytes that are not valid UTF-8.
    #[error("segment '{segment}' does not decode to valid UTF-8: {source}")]
    InvalidUtf8 {
        segment: String,
        #[source]
        source: Utf8Error,
    },
    /// A `%` at `offset` is not followed by two hex digits.
    #[error("segment '{segment}' has a malformed percent escape at byte {offset}")]
    MalformedEscape { segment: String, offset: usize },
}
