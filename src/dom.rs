//! DOM Operations Adapter
//!
//! The small set of document queries the extractors need, on top of the
//! `dom_query` crate:
//!
//! - select every match under a root ([`select_all`])
//! - require the first match, failing when there is none ([`fetch_at`])
//! - find the first match, tolerating absence ([`find_at`])
//! - read an attribute ([`attr`], [`require_attr`])
//! - read trimmed aggregate text ([`textrim`])

// Re-export core types for external use
pub use dom_query::{Document, Selection};

use crate::error::{Error, Result};

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Querying ===

/// All elements under `root` matching `selector`, in document order.
#[must_use]
pub fn select_all<'a>(root: &Selection<'a>, selector: &str) -> Vec<Selection<'a>> {
    root.select(selector)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect()
}

/// First element under `root` matching `selector`, or `None`.
#[must_use]
pub fn find_at<'a>(root: &Selection<'a>, selector: &str) -> Option<Selection<'a>> {
    let found = root.select_single(selector);
    if found.is_empty() {
        None
    } else {
        Some(found)
    }
}

/// First element under `root` matching `selector`.
///
/// # Errors
///
/// Returns `Error::MissingNode` naming `field` when nothing matches.
pub fn fetch_at<'a>(
    root: &Selection<'a>,
    selector: &'static str,
    field: &'static str,
) -> Result<Selection<'a>> {
    find_at(root, selector).ok_or(Error::MissingNode { field, selector })
}

// === Attributes ===

/// Attribute value of the first node in `sel`.
#[inline]
#[must_use]
pub fn attr(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Attribute value of the first node in `sel`.
///
/// # Errors
///
/// Returns `Error::MissingAttribute` naming `field` when the attribute is
/// not set.
pub fn require_attr(sel: &Selection, name: &'static str, field: &'static str) -> Result<String> {
    attr(sel, name).ok_or(Error::MissingAttribute {
        field,
        attribute: name,
    })
}

// === Text Content ===

/// Aggregated text of the selection and its descendants, trimmed at both
/// ends. Interior whitespace is left as is.
///
/// An empty string is a valid result and is distinct from a missing node.
#[must_use]
pub fn textrim(sel: &Selection) -> String {
    sel.text().trim().to_string()
}
