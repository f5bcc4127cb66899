//! Pagination state machine.
//!
//! `Pagination` stores the requested page and the size of the last filtered
//! result it was reconciled against. Page count is always derived, never
//! stored, and every navigation clamps instead of failing.
//!
//! # Invariant
//! `1 <= current_page <= total_pages()` after every public method returns.

use serde::Serialize;
use std::num::NonZeroUsize;
use std::ops::{Range, RangeInclusive};

// ===== PageSize =====

/// Number of items per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageSize {
    /// At most this many items per page.
    Fixed(NonZeroUsize),
    /// Everything on one page (no pagination).
    Unbounded,
}

impl PageSize {
    /// Page size used by the blog index.
    pub const BLOG_DEFAULT: usize = 3;

    /// Interpret a configured count; `0` means unbounded.
    pub fn from_count(count: usize) -> Self {
        match NonZeroUsize::new(count) {
            Some(n) => PageSize::Fixed(n),
            None => PageSize::Unbounded,
        }
    }

    /// Items per page, or `None` when unbounded.
    pub fn get(&self) -> Option<usize> {
        match self {
            PageSize::Fixed(n) => Some(n.get()),
            PageSize::Unbounded => None,
        }
    }
}

// ===== PageRegion =====

/// Where the current page sits, for enabling/disabling navigation controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRegion {
    /// At most one page: controls are not rendered at all.
    NoPagination,
    /// First of several pages: "previous" disabled.
    AtFirstPage,
    /// Strictly between first and last.
    Interior,
    /// Last of several pages: "next" disabled.
    AtLastPage,
}

// ===== Pagination =====

/// Current page plus the result size it is bounded by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    page_size: PageSize,
    current_page: usize,
    filtered_count: usize,
}

impl Pagination {
    /// Start on page 1 of an empty result.
    pub fn new(page_size: PageSize) -> Self {
        Self {
            page_size,
            current_page: 1,
            filtered_count: 0,
        }
    }

    /// Configured page size.
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// 1-based current page.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Size of the filtered result last reconciled against.
    pub fn filtered_count(&self) -> usize {
        self.filtered_count
    }

    /// `ceil(filtered_count / page_size)`; may be 0 for an empty result.
    pub fn raw_total_pages(&self) -> usize {
        match self.page_size {
            PageSize::Fixed(n) => self.filtered_count.div_ceil(n.get()),
            PageSize::Unbounded => usize::from(self.filtered_count > 0),
        }
    }

    /// Page count with an empty result counted as one page of zero items.
    pub fn total_pages(&self) -> usize {
        self.raw_total_pages().max(1)
    }

    /// Record a new filtered result size and reclamp the current page.
    pub fn reconcile(&mut self, filtered_count: usize) {
        self.filtered_count = filtered_count;
        self.current_page = self.clamp(self.current_page);
    }

    /// Back to page 1.
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Jump to page `n`, clamped into `1..=total_pages()`.
    pub fn go_to_page(&mut self, n: usize) {
        self.current_page = self.clamp(n);
    }

    /// One page back; no-op on the first page.
    pub fn previous(&mut self) {
        self.go_to_page(self.current_page.saturating_sub(1));
    }

    /// One page forward; no-op on the last page.
    pub fn next(&mut self) {
        self.go_to_page(self.current_page.saturating_add(1));
    }

    /// Jump to the first page.
    pub fn first(&mut self) {
        self.go_to_page(1);
    }

    /// Jump to the last page.
    pub fn last(&mut self) {
        self.go_to_page(self.total_pages());
    }

    /// Whether a previous page exists.
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Whether a next page exists.
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Whether navigation controls should be shown.
    pub fn shows_controls(&self) -> bool {
        self.total_pages() > 1
    }

    /// Region of the current page.
    pub fn region(&self) -> PageRegion {
        if !self.shows_controls() {
            PageRegion::NoPagination
        } else if self.current_page == 1 {
            PageRegion::AtFirstPage
        } else if self.current_page == self.total_pages() {
            PageRegion::AtLastPage
        } else {
            PageRegion::Interior
        }
    }

    /// Page buttons to render, `1..=total_pages()`.
    pub fn page_numbers(&self) -> RangeInclusive<usize> {
        1..=self.total_pages()
    }

    /// Index range of the current page within a sequence of length `len`.
    ///
    /// Clipped to `0..len`; never reaches past the end.
    pub fn visible_range(&self, len: usize) -> Range<usize> {
        match self.page_size {
            PageSize::Fixed(n) => {
                let start = (self.current_page - 1).saturating_mul(n.get()).min(len);
                let end = start.saturating_add(n.get()).min(len);
                start..end
            }
            PageSize::Unbounded => 0..len,
        }
    }

    /// The items on the current page.
    pub fn visible_slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.visible_range(items.len())]
    }

    /// 1-based numbers of the first and last item shown, `None` when empty.
    pub fn item_range(&self) -> Option<(usize, usize)> {
        let range = self.visible_range(self.filtered_count);
        if range.is_empty() {
            None
        } else {
            Some((range.start + 1, range.end))
        }
    }

    fn clamp(&self, n: usize) -> usize {
        n.clamp(1, self.total_pages())
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "pagination_tests.rs"]
mod tests;
