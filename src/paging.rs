//! Page arithmetic for filtered result sets
//!
//! Pure functions: given how many results matched, how many fit on a page and
//! which page the user asked for, work out the page that can actually be
//! shown and the slice of results it covers.

use std::ops::Range;

/// Largest page size the limit control accepts
pub const MAX_SEARCH_LIMIT: usize = 1000;

/// The visible window over a sorted result list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// 1-based page actually shown
    pub page: usize,
    /// Number of pages, at least 1
    pub page_count: usize,
    /// Index of the first visible result
    pub offset: usize,
    /// Number of visible results
    pub len: usize,
}

impl PageWindow {
    /// Range of result indices covered by this page
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.len
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self {
            page: 1,
            page_count: 1,
            offset: 0,
            len: 0,
        }
    }
}

/// Compute the window for `requested_page`
///
/// A `search_limit` of 0 disables paging: everything lands on one page.
/// The requested page is clamped into `1..=page_count`, so callers can
/// keep a stale page number across refreshes that shrink the result set.
#[must_use]
pub fn paginate(match_count: usize, search_limit: usize, requested_page: usize) -> PageWindow {
    if search_limit == 0 {
        return PageWindow {
            page: 1,
            page_count: 1,
            offset: 0,
            len: match_count,
        };
    }

    let page_count = match_count.div_ceil(search_limit).max(1);
    let page = requested_page.clamp(1, page_count);
    let offset = match_count.min((page - 1) * search_limit);
    let len = search_limit.min(match_count - offset);

    tracing::trace!(page, page_count, match_count, offset, len, "paginate");

    PageWindow {
        page,
        page_count,
        offset,
        len,
    }
}

/// Page before `current`, wrapping from the first page to the last
#[must_use]
pub const fn previous_page(current: usize, page_count: usize) -> usize {
    if current <= 1 { page_count } else { current - 1 }
}

/// Page after `current`, wrapping from the last page to the first
#[must_use]
pub const fn next_page(current: usize, page_count: usize) -> usize {
    if current >= page_count { 1 } else { current + 1 }
}

/// Clamp a raw value from the limit field into `0..=MAX_SEARCH_LIMIT`
#[must_use]
pub fn clamp_search_limit(raw: i64) -> usize {
    usize::try_from(raw.max(0)).map_or(MAX_SEARCH_LIMIT, |limit| limit.min(MAX_SEARCH_LIMIT))
}
