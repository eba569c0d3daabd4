//! Entity extractors.
//!
//! Compose the field decoders against fixed locations inside one work
//! fragment to build the output records.
//!
//! # Module Structure
//!
//! - `user`: `Author` from a profile link
//! - `review`: `Review` from a review fragment
//! - `work`: `Work` from a work fragment, required fields first, then
//!   optional decorations
//!
//! Required lookups fail fast with an `Error`; optional lookups resolve to
//! `None` or an empty `Vec` and never fail.

pub mod review;
pub mod user;
pub mod work;

pub use review::scrape_review;
pub use user::scrape_user;
pub use work::scrape_work;
