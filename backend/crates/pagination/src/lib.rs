//! Page-number pagination envelope primitives.
//!
//! Collection endpoints that opt into pagination wrap their results in a
//! `count`/`next`/`previous`/`results` envelope addressed by a one-based
//! `page` query parameter. [`PageNumberPaginator`] slices an already-fetched
//! collection and builds absolute navigation links from the request URL,
//! leaving every other query parameter intact.

use std::num::NonZeroUsize;

use serde::Serialize;
use url::Url;

/// Query parameter carrying the requested page number.
pub const PAGE_QUERY_PARAM: &str = "page";

/// Failure raised when a requested page cannot be served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    /// The page number was not a positive integer or lies past the last page.
    #[error("invalid page number")]
    InvalidPage,
}

/// A validated one-based page number taken from the request query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageNumber(NonZeroUsize);

impl PageNumber {
    /// The first page, used when the client sends no `page` parameter.
    pub const FIRST: Self = Self(NonZeroUsize::MIN);

    /// Parses the raw `page` query value.
    ///
    /// A missing parameter selects the first page. Anything other than a
    /// positive integer is rejected.
    ///
    /// # Errors
    /// Returns [`PageError::InvalidPage`] when the value is present but not a
    /// positive integer.
    pub fn parse(raw: Option<&str>) -> Result<Self, PageError> {
        match raw {
            None => Ok(Self::FIRST),
            Some(value) => value
                .parse::<NonZeroUsize>()
                .map(Self)
                .map_err(|_| PageError::InvalidPage),
        }
    }

    /// Returns the page number as a plain integer.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

/// One page of results plus navigation metadata.
///
/// `next` and `previous` are absolute URLs reusing the request's scheme,
/// authority, path, and remaining query parameters. A link back to the first
/// page omits the `page` parameter entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    /// Total number of items across all pages.
    pub count: usize,
    /// Absolute URL of the following page, if one exists.
    pub next: Option<String>,
    /// Absolute URL of the preceding page, if one exists.
    pub previous: Option<String>,
    /// The items on this page.
    pub results: Vec<T>,
}

/// Splits collections into fixed-size pages addressed by page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageNumberPaginator {
    page_size: NonZeroUsize,
}

impl PageNumberPaginator {
    /// Creates a paginator producing pages of `page_size` items.
    #[must_use]
    pub const fn new(page_size: NonZeroUsize) -> Self {
        Self { page_size }
    }

    /// Returns the configured page size.
    #[must_use]
    pub const fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    /// Number of pages needed for `count` items.
    ///
    /// An empty collection still has one (empty) page so that requesting the
    /// first page of nothing succeeds.
    #[must_use]
    pub fn total_pages(&self, count: usize) -> usize {
        count.div_ceil(self.page_size.get()).max(1)
    }

    /// Slices `items` down to the requested page and builds the envelope.
    ///
    /// `base_url` is the URL the collection was requested under; navigation
    /// links are derived from it by replacing only the `page` parameter.
    ///
    /// # Errors
    /// Returns [`PageError::InvalidPage`] when `number` lies past the last
    /// page.
    pub fn paginate<T>(
        &self,
        items: Vec<T>,
        number: PageNumber,
        base_url: &Url,
    ) -> Result<Page<T>, PageError> {
        let count = items.len();
        let total = self.total_pages(count);
        let page = number.get();
        if page > total {
            return Err(PageError::InvalidPage);
        }
        let size = self.page_size.get();
        let start = (page - 1) * size;
        let results: Vec<T> = items.into_iter().skip(start).take(size).collect();
        let next = (page < total).then(|| page_url(base_url, page + 1));
        let previous = (page > 1).then(|| page_url(base_url, page - 1));
        Ok(Page {
            count,
            next,
            previous,
            results,
        })
    }
}

/// Rebuilds `base` pointing at `number`, preserving unrelated query
/// parameters. Page one is addressed without a `page` parameter.
fn page_url(base: &Url, number: usize) -> String {
    let retained: Vec<(String, String)> = base
        .query_pairs()
        .filter(|(key, _)| key != PAGE_QUERY_PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();
    let mut link = base.clone();
    link.set_query(None);
    if !retained.is_empty() || number > 1 {
        let mut pairs = link.query_pairs_mut();
        for (key, value) in &retained {
            pairs.append_pair(key, value);
        }
        if number > 1 {
            pairs.append_pair(PAGE_QUERY_PARAM, &number.to_string());
        }
    }
    link.to_string()
}
