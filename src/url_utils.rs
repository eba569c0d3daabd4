//! URL Utility Functions
//!
//! Path extraction for link targets found on listing pages. Links are
//! usually site-relative (`/users/foo`) but may be absolute on some page
//! variants.

use url::{ParseError, Url};

use crate::error::{Error, Result};

/// Path component of a link target.
///
/// Absolute URLs are parsed and their path returned, so
/// `https://kakuyomu.jp/users/foo?ref=top#x` yields `/users/foo`. Anything
/// without a scheme is taken as written up to the first `?` or `#`. It is
/// never joined onto a base and its `.`/`..` segments are left alone.
///
/// # Errors
///
/// Returns `Error::InvalidUrl` if `href` has a scheme but is not a valid
/// URL.
///
/// # Example
///
/// ```rust
/// use rs_kakuyomu::url_utils::link_path;
///
/// assert_eq!(link_path("https://example.com/users/foo?ref=top")?, "/users/foo");
/// assert_eq!(link_path("users/foo#reviews")?, "users/foo");
/// # Ok::<(), rs_kakuyomu::Error>(())
/// ```
pub fn link_path(href: &str) -> Result<String> {
    let href = href.trim();
    match Url::parse(href) {
        Ok(url) => Ok(url.path().to_string()),
        Err(ParseError::RelativeUrlWithoutBase) => {
            let end = href.find(['?', '#']).unwrap_or(href.len());
            Ok(href[..end].to_string())
        }
        Err(source) => Err(Error::InvalidUrl {
            value: href.to_string(),
            source,
        }),
    }
}
