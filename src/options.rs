//! Configuration options for work extraction.
//!
//! Kakuyomu renders the same work card on several listing pages, but the
//! pages disagree on two details: whether counts carry thousands separators
//! and whether profile links are bare paths or absolute URLs. `Options`
//! selects the decoding strategy for each.

/// How review points and episode counts are decoded.
///
/// Character counts are always decoded as [`NumberFormat::Separated`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberFormat {
    /// Digits only, e.g. `★1234`.
    Plain,
    /// Digits with optional `,` thousands separators, e.g. `★1,234`.
    #[default]
    Separated,
}

/// How user profile links are turned into handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserUrlMode {
    /// The `href` must itself be exactly `/users/<handle>`.
    BarePath,
    /// The `href` may be an absolute URL or a site-relative path; its
    /// path must be `/users/<handle>`.
    #[default]
    FullUrl,
}

/// Configuration options for work extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_kakuyomu::{NumberFormat, Options, UserUrlMode};
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     number_format: NumberFormat::Plain,
///     user_url_mode: UserUrlMode::BarePath,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    /// Decoder for review points and episode counts.
    ///
    /// Default: `NumberFormat::Separated`
    pub number_format: NumberFormat,

    /// Profile link handling for authors and reviewers.
    ///
    /// Default: `UserUrlMode::FullUrl`
    pub user_url_mode: UserUrlMode,
}

impl Options {
    /// Settings for the genre widget listing: plain counts, bare-path links.
    #[must_use]
    pub fn widget_list() -> Self {
        Self {
            number_format: NumberFormat::Plain,
            user_url_mode: UserUrlMode::BarePath,
        }
    }

    /// Settings for the recently-updated listing: separated counts,
    /// full-URL links. Equivalent to `Options::default()`.
    #[must_use]
    pub fn recent_list() -> Self {
        Self {
            number_format: NumberFormat::Separated,
            user_url_mode: UserUrlMode::FullUrl,
        }
    }
}
