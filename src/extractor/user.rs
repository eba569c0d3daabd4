//! Author extraction from profile links.

use dom_query::Selection;

use crate::decode;
use crate::dom;
use crate::error::Result;
use crate::result::Author;
use crate::Options;

/// Build an `Author` from a profile link node.
///
/// The display name is the link text; the handle comes from the `href`,
/// decoded with `opts.user_url_mode`. `field` names the link in errors.
///
/// # Errors
///
/// Returns `Error::MissingAttribute` if the node has no `href`, or the
/// handle decoder's error if the link is not a profile link.
pub fn scrape_user(node: &Selection, field: &'static str, opts: &Options) -> Result<Author> {
    let href = dom::require_attr(node, "href", field)?;
    let user_id = decode::decode_user_handle(&href, opts.user_url_mode)?;

    Ok(Author {
        name: dom::textrim(node),
        user_id,
    })
}
