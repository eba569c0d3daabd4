//! Result types for extraction output.
//!
//! Records are plain immutable values. Each `Work` owns its `Author` and
//! `Review`s outright; nothing is shared between works.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A user referenced by a profile link.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    /// Display name (link text).
    pub name: String,

    /// Stable handle taken from the `/users/<handle>` path.
    pub user_id: String,
}

/// A review snippet shown under a work card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Reviewer.
    pub author: Author,

    /// Review text.
    pub body: String,
}

/// One work listed on a catalog page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Work {
    /// Title.
    pub name: String,

    /// Numeric work id, kept as a digit string since it can exceed 2^53.
    pub work_id: String,

    /// Author of the work.
    pub author: Author,

    /// Total review points (the ★ count).
    pub review_points: u64,

    /// Genre label.
    pub genre: String,

    /// Serialization status label (e.g. 連載中, 完結済).
    pub status: String,

    /// Number of published episodes.
    pub episode_count: u64,

    /// Number of characters across all episodes.
    pub character_count: u64,

    /// Last update time, naive local time as printed on the page.
    pub date_modified: NaiveDateTime,

    /// Catch-copy or introduction excerpt, when the card shows one.
    pub introduction_snippet: Option<String>,

    /// Content flags (e.g. 残酷描写有り), in page order.
    pub flags: Vec<String>,

    /// Free-form tags, in page order.
    pub keywords: Vec<String>,

    /// Id of the first episode, when a "read from the start" link exists.
    pub first_episode_id: Option<String>,

    /// Review snippets, in page order.
    pub reviews: Vec<Review>,

    /// The work's image colour.
    ///
    /// Only observable through a review's inline style, so works listed
    /// without reviews always have `None` here even though the site assigns
    /// every work a colour.
    pub image_color: Option<String>,
}
