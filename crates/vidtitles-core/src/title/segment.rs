//! Last path segment of a raw URL string.

/// Returns the text after the final `/` in `url`, or the whole string when
/// there is no `/`.
///
/// The URL is not parsed: query strings and fragments stay attached to the
/// segment, and a trailing `/` yields an empty segment.
pub fn last_segment(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}
