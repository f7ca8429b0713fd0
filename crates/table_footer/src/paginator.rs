//! Pagination component for table footers.
//!
//! This module provides pagination state management and display. The page
//! window itself comes from [`page_range`]; this model owns everything the
//! window computation leaves to its caller: the current page, navigation,
//! page size and how the tokens are drawn.
//!
//! # Example
//!
//! ```rust
//! use table_footer::Paginator;
//!
//! let mut paginator = Paginator::new()
//!     .per_page(10)
//!     .total_pages(5);
//!
//! // Navigate
//! paginator.next_page();
//! assert_eq!(paginator.page(), 2);
//!
//! // Get slice bounds for rendering
//! let items: Vec<u32> = (1..=42).collect();
//! let (start, end) = paginator.slice_bounds(items.len());
//! assert_eq!(&items[start..end], &[11, 12, 13, 14, 15, 16, 17, 18, 19, 20]);
//! ```

use page_range::{PageToken, PaginationRequest};
use tracing::trace;

use crate::config::{Config, DEFAULT_PER_PAGE, Style};

/// Pagination model.
#[derive(Debug, Clone)]
pub struct Paginator {
    /// Current page (1-based).
    page: usize,
    /// Items per page.
    per_page: usize,
    /// Total number of pages; zero for an empty dataset.
    total_pages: usize,
    /// Pages shown on each side of the current page.
    sibling_count: usize,
    /// Rendering markers.
    pub style: Style,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new()
    }
}

impl Paginator {
    /// Creates a new paginator with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            total_pages: 1,
            sibling_count: page_range::DEFAULT_SIBLING_COUNT,
            style: Style::default(),
        }
    }

    /// Creates a paginator from loaded settings.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new()
            .per_page(config.per_page)
            .sibling_count(config.sibling_count)
            .style(config.style.clone())
    }

    /// Sets the number of items per page.
    #[must_use]
    pub fn per_page(mut self, n: usize) -> Self {
        self.per_page = n.max(1);
        self
    }

    /// Sets the total number of pages.
    ///
    /// Zero describes an empty dataset, which renders no page labels.
    #[must_use]
    pub fn total_pages(mut self, n: usize) -> Self {
        self.total_pages = n;
        self.page = self.page.clamp(1, n.max(1));
        self
    }

    /// Sets the number of pages shown on each side of the current page.
    #[must_use]
    pub const fn sibling_count(mut self, n: usize) -> Self {
        self.sibling_count = n;
        self
    }

    /// Sets the rendering markers.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Returns the current page (1-based).
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Sets the current page, clamped to the valid range.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.total_pages.max(1));
        trace!(page = self.page, "paginator page set");
    }

    /// Returns the items per page.
    #[must_use]
    pub const fn get_per_page(&self) -> usize {
        self.per_page
    }

    /// Returns the total number of pages.
    #[must_use]
    pub const fn get_total_pages(&self) -> usize {
        self.total_pages
    }

    /// Returns the sibling count.
    #[must_use]
    pub const fn get_sibling_count(&self) -> usize {
        self.sibling_count
    }

    /// Calculates and sets the total pages from item count.
    ///
    /// Returns the calculated total pages. A count of zero leaves the
    /// current total untouched.
    pub fn set_total_pages_from_items(&mut self, items: usize) -> usize {
        if items < 1 {
            return self.total_pages;
        }

        self.total_pages = items.div_ceil(self.per_page);
        self.page = self.page.min(self.total_pages);
        trace!(items, total_pages = self.total_pages, "paginator resized");
        self.total_pages
    }

    /// Returns the number of items on the current page.
    #[must_use]
    pub fn items_on_page(&self, total_items: usize) -> usize {
        let (start, end) = self.slice_bounds(total_items);
        end - start
    }

    /// Returns slice bounds for the current page.
    ///
    /// Both bounds are clamped to `length`, so slicing never panics.
    #[must_use]
    pub fn slice_bounds(&self, length: usize) -> (usize, usize) {
        let start = (self.page - 1).saturating_mul(self.per_page).min(length);
        let end = start.saturating_add(self.per_page).min(length);
        (start, end)
    }

    /// Describes the visible rows, e.g. `"11–20 of 95"`.
    #[must_use]
    pub fn range_label(&self, total_items: usize) -> String {
        let (start, end) = self.slice_bounds(total_items);
        if start == end {
            return format!("0 of {total_items}");
        }
        format!("{}–{end} of {total_items}", start + 1)
    }

    /// Navigates to the previous page.
    pub fn prev_page(&mut self) {
        if !self.on_first_page() {
            self.page -= 1;
            trace!(page = self.page, "paginator prev");
        }
    }

    /// Navigates to the next page.
    pub fn next_page(&mut self) {
        if !self.on_last_page() {
            self.page += 1;
            trace!(page = self.page, "paginator next");
        }
    }

    /// Jumps to the first page.
    pub fn first_page(&mut self) {
        self.set_page(1);
    }

    /// Jumps to the last page.
    pub fn last_page(&mut self) {
        self.set_page(self.total_pages);
    }

    /// Returns whether we're on the last page.
    #[must_use]
    pub const fn on_last_page(&self) -> bool {
        self.page >= self.total_pages
    }

    /// Returns whether we're on the first page.
    #[must_use]
    pub const fn on_first_page(&self) -> bool {
        self.page == 1
    }

    /// Returns the page labels to render, left to right.
    #[must_use]
    pub fn tokens(&self) -> Vec<PageToken> {
        PaginationRequest::from_parts(self.page, self.total_pages, self.sibling_count)
            .tokens()
    }

    /// Returns the page behind the token at `index`, if it is clickable.
    #[must_use]
    pub fn page_at(&self, index: usize) -> Option<usize> {
        self.tokens().get(index).and_then(PageToken::page)
    }

    /// Handles a click on the token at `index`.
    ///
    /// Returns the newly selected page, or `None` when the token is an
    /// ellipsis or out of range.
    pub fn click(&mut self, index: usize) -> Option<usize> {
        let page = self.page_at(index)?;
        self.set_page(page);
        Some(page)
    }

    /// Renders the footer line.
    #[must_use]
    pub fn view(&self) -> String {
        let tokens = self.tokens();
        if tokens.is_empty() {
            return String::new();
        }

        let style = &self.style;
        let mut parts = Vec::with_capacity(tokens.len() + 2);
        if style.show_arrows && !self.on_first_page() {
            parts.push(style.prev_label.clone());
        }
        for token in tokens {
            parts.push(match token {
                PageToken::Page(n) if n == self.page => {
                    format!("{}{n}{}", style.current_open, style.current_close)
                }
                PageToken::Page(n) => n.to_string(),
                PageToken::Ellipsis => style.ellipsis.clone(),
            });
        }
        if style.show_arrows && !self.on_last_page() {
            parts.push(style.next_label.clone());
        }
        parts.join(" ")
    }
}
