//! Cleanup applied after decoding.

/// Removes the first occurrence of `needle` from `s`, wherever it appears.
pub fn strip_first(s: &str, needle: &str) -> String {
    if needle.is_empty() {
        return s.to_string();
    }
    s.replacen(needle, "", 1)
}

/// Replaces every `+` with a single space.
pub fn plus_to_space(s: &str) -> String {
    s.replace('+', " ")
}
