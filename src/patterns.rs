//! Field pattern table and CSS selectors for work extraction.
//!
//! Every required text field is validated against exactly one pattern
//! listed here, and every node is located by one selector listed here.
//! Decoders and extractors refer to these items instead of embedding
//! their own regexes or selector strings.

use std::sync::{LazyLock, OnceLock};

use regex::{Captures, Regex};

use crate::error::{Error, Result};

/// An anchored pattern that a field's text must match.
///
/// The regex is compiled on first use. Capture group 1 holds the value the
/// decoder is interested in.
#[derive(Debug)]
pub struct FieldPattern {
    /// Field name used in error reports.
    pub field: &'static str,
    /// Human-readable shape shown in error reports.
    pub expected: &'static str,
    pattern: &'static str,
    compiled: OnceLock<Regex>,
}

impl FieldPattern {
    const fn new(field: &'static str, expected: &'static str, pattern: &'static str) -> Self {
        Self {
            field,
            expected,
            pattern,
            compiled: OnceLock::new(),
        }
    }

    /// The compiled regex.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn regex(&self) -> &Regex {
        self.compiled
            .get_or_init(|| Regex::new(self.pattern).expect("field pattern regex"))
    }

    /// Whether `value` matches this pattern.
    #[must_use]
    pub fn is_match(&self, value: &str) -> bool {
        self.regex().is_match(value)
    }

    /// Match `value`, returning all capture groups.
    ///
    /// # Errors
    ///
    /// Returns `Error::Format` when `value` does not match.
    pub fn captures<'t>(&self, value: &'t str) -> Result<Captures<'t>> {
        self.regex().captures(value).ok_or_else(|| self.mismatch(value))
    }

    /// Match `value`, returning capture group 1.
    ///
    /// # Errors
    ///
    /// Returns `Error::Format` when `value` does not match.
    pub fn capture<'t>(&self, value: &'t str) -> Result<&'t str> {
        self.captures(value)?
            .get(1)
            .map(|m| m.as_str())
            .ok_or_else(|| self.mismatch(value))
    }

    /// Build the format error for a value that failed this pattern.
    pub(crate) fn mismatch(&self, value: &str) -> Error {
        Error::Format {
            field: self.field,
            value: value.to_string(),
            expected: self.expected,
        }
    }
}

// =============================================================================
// Field Patterns
// =============================================================================

/// `/works/<digits>` on the title link.
pub static WORK_URL: FieldPattern = FieldPattern::new("workId", "/works/<digits>", r"^/works/([0-9]+)$");

/// `/users/<handle>`, either the whole href or the path of a full URL.
pub static USER_PATH: FieldPattern =
    FieldPattern::new("userId", "/users/<handle>", r"^/users/([-_0-9a-zA-Z]+)$");

/// `★<digits>`.
pub static REVIEW_POINTS_PLAIN: FieldPattern =
    FieldPattern::new("reviewPoints", "★<digits>", r"^★([0-9]+)$");

/// `★<digits with optional commas>`.
pub static REVIEW_POINTS_SEPARATED: FieldPattern =
    FieldPattern::new("reviewPoints", "★<digits(,)>", r"^★([0-9,]+)$");

/// `<digits>話`.
pub static EPISODE_COUNT_PLAIN: FieldPattern =
    FieldPattern::new("episodeCount", "<digits>話", r"^([0-9]+)話$");

/// `<digits with optional commas>話`.
pub static EPISODE_COUNT_SEPARATED: FieldPattern =
    FieldPattern::new("episodeCount", "<digits(,)>話", r"^([0-9,]+)話$");

/// `<digits with optional commas>文字`. Separators are always allowed here.
pub static CHARACTER_COUNT: FieldPattern =
    FieldPattern::new("characterCount", "<digits(,)>文字", r"^([0-9,]+)文字$");

/// `<date> 更新`; group 1 is handed to the date decoder.
pub static DATE_MODIFIED: FieldPattern =
    FieldPattern::new("dateModified", "<date> 更新", r"^(.+) 更新$");

/// `<year>年<month>月<day>日 <hour>:<minute>`.
pub static DATE: FieldPattern = FieldPattern::new(
    "dateModified",
    "<year>年<month>月<day>日 <hour>:<minute>",
    r"^([0-9]+)年([0-9]+)月([0-9]+)日 ([0-9]+):([0-9]+)$",
);

/// Digits with optional `,` separators, for standalone numbers.
pub static SEPARATED_DECIMAL: FieldPattern =
    FieldPattern::new("number", "<digits(,)>", r"^([0-9,]+)$");

/// Digits only, for standalone numbers.
pub static PLAIN_INTEGER: FieldPattern = FieldPattern::new("number", "<digits>", r"^([0-9]+)$");

/// `/works/<digits>/episodes/<digits>` on the button links.
pub static FIRST_EPISODE_URL: FieldPattern = FieldPattern::new(
    "firstEpisodeId",
    "/works/<digits>/episodes/<digits>",
    r"^/works/[0-9]+/episodes/([0-9]+)$",
);

/// Inline `color: <value>` declaration in a review's style attribute.
#[allow(clippy::expect_used)]
pub static STYLE_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"color:\s*([^;]+)").expect("STYLE_COLOR regex"));

// =============================================================================
// CSS Selectors
// =============================================================================

/// Work fragments inside the catalog list container.
pub const WORK_ITEM_SELECTOR: &str =
    r#".widget-media-genresWorkList .widget-work[itemtype="https://schema.org/CreativeWork"]"#;

/// Title link (text is the name, href carries the work id).
pub const NAME_SELECTOR: &str = r#"[itemprop="name"]"#;

/// Author profile link.
pub const AUTHOR_SELECTOR: &str = r#"[itemprop="author"]"#;

/// Review point total.
pub const REVIEW_POINTS_SELECTOR: &str = ".widget-work-reviewPoints";

/// Genre label.
pub const GENRE_SELECTOR: &str = r#"[itemprop="genre"]"#;

/// Serialization status label.
pub const STATUS_SELECTOR: &str = ".widget-work-statusLabel";

/// Episode count.
pub const EPISODE_COUNT_SELECTOR: &str = ".widget-work-episodeCount";

/// Character count.
pub const CHARACTER_COUNT_SELECTOR: &str = r#"[itemprop="characterCount"]"#;

/// Last update timestamp.
pub const DATE_MODIFIED_SELECTOR: &str = r#"[itemprop="dateModified"]"#;

/// Introduction excerpt.
pub const INTRODUCTION_SELECTOR: &str = ".widget-work-introduction";

/// Content flags.
pub const FLAGS_SELECTOR: &str = r#".widget-work-flags [itemprop="keywords"]"#;

/// Free-form tags.
pub const TAGS_SELECTOR: &str = r#".widget-work-tags [itemprop="keywords"]"#;

/// Episode links in the card's button row.
pub const FIRST_EPISODE_SELECTOR: &str =
    r#".widget-work-buttons a[href^="/works"][href*="/episodes/"]"#;

/// Review fragments.
pub const REVIEW_SELECTOR: &str = r#"[itemtype="https://schema.org/Review"]"#;

/// Reviewer link. Review author anchors carry no itemprop, so match on href.
pub const REVIEW_AUTHOR_SELECTOR: &str = r#"a[href^="/users/"]"#;

/// Review text.
pub const REVIEW_BODY_SELECTOR: &str = r#"[itemprop="reviewBody"]"#;

/// Review-scoped element whose inline style carries the image colour.
pub const IMAGE_COLOR_SELECTOR: &str =
    r#"[itemtype="https://schema.org/Review"] [style*="color"]"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn work_url_captures_long_ids() {
        assert_eq!(WORK_URL.capture("/works/1177354054880238351").ok(), Some("1177354054880238351"));
        assert!(WORK_URL.capture("/works/abc").is_err());
        assert!(WORK_URL.capture("/works/123/episodes/456").is_err());
    }

    #[test]
    fn review_points_plain_rejects_separators() {
        assert!(REVIEW_POINTS_PLAIN.is_match("★1234"));
        assert!(!REVIEW_POINTS_PLAIN.is_match("★1,234"));
        assert!(REVIEW_POINTS_SEPARATED.is_match("★1,234"));
        assert!(!REVIEW_POINTS_SEPARATED.is_match("★"));
    }

    #[test]
    fn digits_are_ascii_only() {
        assert!(!EPISODE_COUNT_PLAIN.is_match("１２話"));
        assert!(EPISODE_COUNT_PLAIN.is_match("12話"));
    }

    #[test]
    fn mismatch_reports_field_and_expected_shape() {
        match CHARACTER_COUNT.capture("たくさん") {
            Err(Error::Format { field, value, expected }) => {
                assert_eq!(field, "characterCount");
                assert_eq!(value, "たくさん");
                assert_eq!(expected, "<digits(,)>文字");
            }
            other => panic!("expected format error, got {other:?}"),
        }
    }

    #[test]
    fn style_color_captures_declaration_value() {
        let caps = STYLE_COLOR.captures("border: 1px; color: rgb(1, 2, 3); margin: 0");
        assert_eq!(caps.and_then(|c| c.get(1)).map(|m| m.as_str()), Some("rgb(1, 2, 3)"));
    }
}
