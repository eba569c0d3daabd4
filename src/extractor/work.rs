//! Work extraction.
//!
//! A work fragment is one `.widget-work` card. Required fields are looked
//! up in card order and the first failure aborts the whole work; optional
//! decorations are collected afterwards and never fail.

use dom_query::Selection;

use crate::decode;
use crate::dom;
use crate::error::Result;
use crate::options::NumberFormat;
use crate::patterns::{
    self, AUTHOR_SELECTOR, CHARACTER_COUNT_SELECTOR, DATE_MODIFIED_SELECTOR,
    EPISODE_COUNT_SELECTOR, FIRST_EPISODE_SELECTOR, FLAGS_SELECTOR, GENRE_SELECTOR,
    IMAGE_COLOR_SELECTOR, INTRODUCTION_SELECTOR, NAME_SELECTOR, REVIEW_POINTS_SELECTOR,
    REVIEW_SELECTOR, STATUS_SELECTOR, STYLE_COLOR, TAGS_SELECTOR,
};
use crate::result::{Review, Work};
use crate::Options;

use super::review::scrape_review;
use super::user::scrape_user;

/// Build a `Work` from a work fragment.
///
/// # Errors
///
/// Returns the first error raised by a required field: a missing node, a
/// missing `href`, or text that fails its pattern. Review fragments are
/// required to be well-formed once present, so a broken review also fails
/// the work.
pub fn scrape_work(node: &Selection, opts: &Options) -> Result<Work> {
    let name_node = dom::fetch_at(node, NAME_SELECTOR, "name")?;
    let name = dom::textrim(&name_node);
    let href = dom::require_attr(&name_node, "href", "workId")?;
    let work_id = patterns::WORK_URL.capture(&href)?.to_string();

    let author = scrape_user(&dom::fetch_at(node, AUTHOR_SELECTOR, "author")?, "author", opts)?;

    let review_points_pattern = match opts.number_format {
        NumberFormat::Plain => &patterns::REVIEW_POINTS_PLAIN,
        NumberFormat::Separated => &patterns::REVIEW_POINTS_SEPARATED,
    };
    let review_points = decode::decode_count(
        review_points_pattern,
        &required_text(node, REVIEW_POINTS_SELECTOR, "reviewPoints")?,
        opts.number_format,
    )?;

    let genre = required_text(node, GENRE_SELECTOR, "genre")?;
    let status = required_text(node, STATUS_SELECTOR, "status")?;

    let episode_count_pattern = match opts.number_format {
        NumberFormat::Plain => &patterns::EPISODE_COUNT_PLAIN,
        NumberFormat::Separated => &patterns::EPISODE_COUNT_SEPARATED,
    };
    let episode_count = decode::decode_count(
        episode_count_pattern,
        &required_text(node, EPISODE_COUNT_SELECTOR, "episodeCount")?,
        opts.number_format,
    )?;

    let character_count = decode::decode_count(
        &patterns::CHARACTER_COUNT,
        &required_text(node, CHARACTER_COUNT_SELECTOR, "characterCount")?,
        NumberFormat::Separated,
    )?;

    let modified = required_text(node, DATE_MODIFIED_SELECTOR, "dateModified")?;
    let date_modified = decode::parse_date(patterns::DATE_MODIFIED.capture(&modified)?)?;

    let introduction_snippet = dom::find_at(node, INTRODUCTION_SELECTOR).map(|n| dom::textrim(&n));
    let flags = text_list(node, FLAGS_SELECTOR);
    let keywords = text_list(node, TAGS_SELECTOR);
    let first_episode_id = first_episode_id(node);
    let reviews = dom::select_all(node, REVIEW_SELECTOR)
        .iter()
        .map(|review| scrape_review(review, opts))
        .collect::<Result<Vec<Review>>>()?;
    let image_color = image_color(node);

    tracing::trace!(%work_id, reviews = reviews.len(), "scraped work");

    Ok(Work {
        name,
        work_id,
        author,
        review_points,
        genre,
        status,
        episode_count,
        character_count,
        date_modified,
        introduction_snippet,
        flags,
        keywords,
        first_episode_id,
        reviews,
        image_color,
    })
}

/// Trimmed text of a node that must exist.
fn required_text(node: &Selection, selector: &'static str, field: &'static str) -> Result<String> {
    dom::fetch_at(node, selector, field).map(|n| dom::textrim(&n))
}

/// Trimmed text of every match, in document order.
fn text_list(node: &Selection, selector: &str) -> Vec<String> {
    dom::select_all(node, selector).iter().map(dom::textrim).collect()
}

/// Episode id from the first button link shaped like
/// `/works/<id>/episodes/<id>`.
fn first_episode_id(node: &Selection) -> Option<String> {
    let id = dom::select_all(node, FIRST_EPISODE_SELECTOR)
        .iter()
        .filter_map(|link| dom::attr(link, "href"))
        .find_map(|href| {
            patterns::FIRST_EPISODE_URL
                .capture(&href)
                .ok()
                .map(str::to_string)
        });

    if id.is_none() {
        tracing::debug!("work card has no first-episode link");
    }
    id
}

/// Image colour from the first review-scoped element with an inline
/// `color` declaration. Cards without reviews never expose it.
///
/// The declared value is kept verbatim, trailing whitespace included. A
/// blank declaration counts as absent.
fn image_color(node: &Selection) -> Option<String> {
    let color = dom::find_at(node, IMAGE_COLOR_SELECTOR)
        .and_then(|styled| dom::attr(&styled, "style"))
        .and_then(|style| {
            STYLE_COLOR
                .captures(&style)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().to_string())
        })
        .filter(|color| !color.trim().is_empty());

    if color.is_none() {
        tracing::debug!("image colour not observable on this card");
    }
    color
}
