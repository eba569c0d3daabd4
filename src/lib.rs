//! # rs-kakuyomu
//!
//! Typed work records from Kakuyomu catalog listing pages.
//!
//! Given the HTML of a listing page (fetched elsewhere), this library finds
//! every work card and turns its markup (class names, `itemprop`
//! microdata, Japanese-formatted numbers and dates) into a [`Work`].
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_kakuyomu::scrape_works;
//!
//! let html = r#"<div class="widget-media-genresWorkList">
//!   <div class="widget-work" itemscope itemtype="https://schema.org/CreativeWork">
//!     <a href="/works/1177354054880238351" itemprop="name">異世界の本屋さん</a>
//!     <a href="/users/kaku-yomu" itemprop="author">カクヨム運営</a>
//!     <span class="widget-work-reviewPoints">★1,234</span>
//!     <span itemprop="genre">異世界ファンタジー</span>
//!     <span class="widget-work-statusLabel">連載中</span>
//!     <span class="widget-work-episodeCount">12話</span>
//!     <span itemprop="characterCount">123,456文字</span>
//!     <time itemprop="dateModified">2016年3月1日 12:05 更新</time>
//!   </div>
//! </div>"#;
//!
//! let works = scrape_works(html)?;
//! assert_eq!(works[0].work_id, "1177354054880238351");
//! assert_eq!(works[0].review_points, 1234);
//! # Ok::<(), rs_kakuyomu::Error>(())
//! ```
//!
//! ## Required and optional fields
//!
//! Every field of [`Work`] except `introduction_snippet`, `first_episode_id`
//! and `image_color` must be present and well-formed; otherwise the work
//! fails with an [`Error`]. Optional fields and the `flags`, `keywords` and
//! `reviews` lists simply come back empty.
//!
//! ## Page variants
//!
//! [`Options`] selects how counts and profile links are decoded; see
//! [`Options::widget_list`] and [`Options::recent_list`].

mod error;
mod options;
mod result;

/// DOM query adapter over `dom_query`.
pub mod dom;

/// Field pattern table and CSS selectors.
pub mod patterns;

/// Field decoders (dates, counts, user handles).
pub mod decode;

/// Author, review and work extractors.
pub mod extractor;

/// Listing walker (eager and lazy).
pub mod listing;

/// URL resolution for profile links.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use error::{Error, Result};
pub use extractor::scrape_work;
pub use listing::{Scraper, WorkIter};
pub use options::{NumberFormat, Options, UserUrlMode};
pub use result::{Author, Review, Work};

/// Extracts every work on a listing page using default options.
///
/// # Errors
///
/// Returns the first malformed work's error; see [`Scraper::works`].
pub fn scrape_works(html: &str) -> Result<Vec<Work>> {
    scrape_works_with_options(html, &Options::default())
}

/// Extracts every work on a listing page with custom options.
///
/// # Example
///
/// ```rust
/// use rs_kakuyomu::{scrape_works_with_options, Options};
///
/// let works = scrape_works_with_options("<html></html>", &Options::widget_list())?;
/// assert!(works.is_empty());
/// # Ok::<(), rs_kakuyomu::Error>(())
/// ```
///
/// # Errors
///
/// Returns the first malformed work's error; see [`Scraper::works`].
pub fn scrape_works_with_options(html: &str, options: &Options) -> Result<Vec<Work>> {
    Scraper::with_options(html, *options).works()
}

/// Extracts every work from raw page bytes, detecting the charset from a
/// BOM or `<meta>` declaration.
///
/// # Errors
///
/// Returns the first malformed work's error; see [`Scraper::works`].
pub fn scrape_works_bytes(html: &[u8]) -> Result<Vec<Work>> {
    scrape_works_bytes_with_options(html, &Options::default())
}

/// Extracts every work from raw page bytes with custom options.
///
/// # Errors
///
/// Returns the first malformed work's error; see [`Scraper::works`].
pub fn scrape_works_bytes_with_options(html: &[u8], options: &Options) -> Result<Vec<Work>> {
    let html = encoding::transcode_to_utf8(html);
    scrape_works_with_options(&html, options)
}
