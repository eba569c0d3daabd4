//! Listing walker.
//!
//! Finds every work fragment in the catalog list container and runs the
//! work extractor over each one, in document order. Results are available
//! eagerly ([`Scraper::works`]) or lazily ([`Scraper::iter_works`]); both
//! walk the same fragments and apply the same validation.

use std::iter::FusedIterator;

use dom_query::{NodeRef, Selection};

use crate::dom::{self, Document};
use crate::error::Result;
use crate::extractor::scrape_work;
use crate::patterns::WORK_ITEM_SELECTOR;
use crate::result::Work;
use crate::Options;

/// A parsed listing page plus the options used to read it.
///
/// # Example
///
/// ```rust
/// use rs_kakuyomu::Scraper;
///
/// let scraper = Scraper::new("<html><body>no listing here</body></html>");
/// assert!(scraper.is_empty());
/// assert!(scraper.works()?.is_empty());
/// # Ok::<(), rs_kakuyomu::Error>(())
/// ```
pub struct Scraper {
    document: Document,
    options: Options,
}

impl Scraper {
    /// Parse `html` with default options.
    #[must_use]
    pub fn new(html: &str) -> Self {
        Self::with_options(html, Options::default())
    }

    /// Parse `html` with the given options.
    #[must_use]
    pub fn with_options(html: &str, options: Options) -> Self {
        Self::from_document(dom::parse(html), options)
    }

    /// Wrap an already-parsed document.
    #[must_use]
    pub fn from_document(document: Document, options: Options) -> Self {
        Self { document, options }
    }

    /// Options in effect.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Number of work fragments on the page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fragments().nodes().len()
    }

    /// Whether the page lists no works.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Extract every work on the page.
    ///
    /// # Errors
    ///
    /// Fails with the first work's error if any fragment is malformed; no
    /// partial list is returned. Use [`Scraper::iter_works`] to handle
    /// failures per work.
    pub fn works(&self) -> Result<Vec<Work>> {
        self.iter_works().collect()
    }

    /// Lazily extract works one at a time.
    ///
    /// Each call starts a fresh walk from the first fragment. A fragment is
    /// only extracted when the iterator is advanced.
    #[must_use]
    pub fn iter_works(&self) -> WorkIter<'_> {
        let nodes = self.fragments().nodes().to_vec();
        tracing::debug!(fragments = nodes.len(), "walking work listing");
        WorkIter {
            nodes: nodes.into_iter(),
            options: &self.options,
        }
    }

    fn fragments(&self) -> Selection<'_> {
        self.document.select(WORK_ITEM_SELECTOR)
    }
}

/// Lazy, forward-only iterator over the works of a [`Scraper`].
///
/// Yields one `Result<Work>` per fragment; a malformed fragment yields an
/// `Err` and the walk can continue with the next one.
pub struct WorkIter<'a> {
    nodes: std::vec::IntoIter<NodeRef<'a>>,
    options: &'a Options,
}

impl Iterator for WorkIter<'_> {
    type Item = Result<Work>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.next()?;
        Some(scrape_work(&Selection::from(node), self.options))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.nodes.size_hint()
    }
}

impl ExactSizeIterator for WorkIter<'_> {}

impl FusedIterator for WorkIter<'_> {}
