//! Review extraction.

use dom_query::Selection;

use crate::dom;
use crate::error::Result;
use crate::patterns::{REVIEW_AUTHOR_SELECTOR, REVIEW_BODY_SELECTOR};
use crate::result::Review;
use crate::Options;

use super::user::scrape_user;

/// Build a `Review` from a review fragment.
///
/// Reviewer links carry no `itemprop`, so the reviewer is the first link
/// whose `href` starts with `/users/`.
///
/// # Errors
///
/// Returns an error if the reviewer link or the review body is missing, or
/// if the reviewer link is not a valid profile link.
pub fn scrape_review(node: &Selection, opts: &Options) -> Result<Review> {
    let author_node = dom::fetch_at(node, REVIEW_AUTHOR_SELECTOR, "reviews.author")?;
    let author = scrape_user(&author_node, "reviews.author", opts)?;
    let body = dom::textrim(&dom::fetch_at(node, REVIEW_BODY_SELECTOR, "reviews.body")?);

    Ok(Review { author, body })
}
