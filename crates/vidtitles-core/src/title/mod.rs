//! Title derivation from video URLs.
//!
//! A title is the URL's last path segment, percent-decoded, with the first
//! occurrence of the strip literal (`.mp4` by default) removed and every `+`
//! turned into a space. The steps run once, in that order, so running
//! extraction on its own output is not a no-op in general.

mod clean;
mod decode;
mod error;
mod segment;

pub use clean::{plus_to_space, strip_first};
pub use decode::{decode_lossy, decode_strict};
pub use error::TitleError;
pub use segment::last_segment;

/// Literal removed from decoded segments unless configured otherwise.
pub const DEFAULT_STRIP: &str = ".mp4";

/// Rules for turning a URL into a title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleRules {
    /// Literal removed once from the decoded segment. Empty disables removal.
    pub strip: String,
}

impl Default for TitleRules {
    fn default() -> Self {
        Self {
            strip: DEFAULT_STRIP.to_string(),
        }
    }
}

impl TitleRules {
    pub fn new(strip: impl Into<String>) -> Self {
        Self {
            strip: strip.into(),
        }
    }

    /// Derives a title. Total over all inputs: malformed escapes pass through
    /// and invalid UTF-8 becomes U+FFFD.
    pub fn apply(&self, url: &str) -> String {
        let decoded = decode_lossy(last_segment(url));
        self.finish(&decoded)
    }

    /// Like [`TitleRules::apply`], but rejects malformed escapes and segments that
    /// do not decode to UTF-8.
    pub fn apply_strict(&self, url: &str) -> Result<String, TitleError> {
        let decoded = decode_strict(last_segment(url))?;
        Ok(self.finish(&decoded))
    }

    fn finish(&self, decoded: &str) -> String {
        plus_to_space(&strip_first(decoded, &self.strip))
    }
}

/// Derives a title from `url` with the default rules.
///
/// # Examples
///
/// - `extract("https://example.com/path/My+Video%27s+Title.mp4")` → `"My Video's Title"`
/// - `extract("https://example.com/a.mp4.mp4")` → `"a.mp4"`
pub fn extract(url: &str) -> String {
    TitleRules::default().apply(url)
}

/// Checked variant of [`extract`].
pub fn extract_strict(url: &str) -> Result<String, TitleError> {
    TitleRules::default().apply_strict(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_decodes_and_cleans() {
        assert_eq!(
            extract("https://example.com/path/My+Video%27s+Title.mp4"),
            "My Video's Title"
        );
    }

    #[test]
    fn extract_without_extension() {
        assert_eq!(extract("https://example.com/novideoext"), "novideoext");
    }

    #[test]
    fn extract_removes_first_mp4_only() {
        assert_eq!(extract("https://example.com/a.mp4.mp4"), "a.mp4");
        assert_eq!(extract("https://example.com/foo.mp4.backup"), "foo.backup");
    }

    #[test]
    fn extract_empty_and_degenerate() {
        assert_eq!(extract(""), "");
        assert_eq!(extract("/"), "");
        assert_eq!(extract("https://example.com/"), "");
        assert_eq!(extract("///a//b"), "b");
        assert_eq!(extract("bare+name.mp4"), "bare name");
    }

    #[test]
    fn encoded_plus_also_becomes_space() {
        // Decoding runs before the `+` replacement.
        assert_eq!(extract("https://example.com/a%2Bb.mp4"), "a b");
    }

    #[test]
    fn encoded_extension_is_stripped() {
        assert_eq!(extract("https://example.com/clip%2Emp4"), "clip");
    }

    #[test]
    fn extract_is_total_on_odd_input() {
        assert_eq!(extract("https://example.com/50%+off.mp4"), "50% off");
        assert_eq!(extract("https://example.com/%FF.mp4"), "\u{FFFD}");
        assert_eq!(extract("https://例え.jp/動画/タイトル+一.mp4"), "タイトル 一");
        assert_eq!(extract("https://example.com/v.mp4?dl=1"), "v?dl=1");
    }

    #[test]
    fn extract_strict_rejects_bad_segments() {
        assert!(extract_strict("https://example.com/%FF.mp4").is_err());
        assert!(matches!(
            extract_strict("https://x/50%zz+off.mp4"),
            Err(TitleError::MalformedEscape { offset: 2, .. })
        ));
        assert_eq!(extract("https://x/50%zz+off.mp4"), "50%zz off");
        assert_eq!(
            extract_strict("https://example.com/Caf%C3%A9+Tour.mp4").unwrap(),
            "Café Tour"
        );
    }

    #[test]
    fn custom_strip_literal() {
        let rules = TitleRules::new(".webm");
        assert_eq!(rules.apply("https://example.com/Intro+Talk.webm"), "Intro Talk");
        assert_eq!(rules.apply("https://example.com/Intro.mp4"), "Intro.mp4");

        let keep_all = TitleRules::new("");
        assert_eq!(keep_all.apply("https://example.com/clip.mp4"), "clip.mp4");
    }

    #[test]
    fn default_rules_strip_mp4() {
        assert_eq!(TitleRules::default().strip, DEFAULT_STRIP);
    }
}
