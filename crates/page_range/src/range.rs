//! Page window computation.

use std::fmt;

use tracing::{debug, trace};

use crate::error::{Error, Field, Result};

/// Pages shown on each side of the current page when the caller does not say.
pub const DEFAULT_SIBLING_COUNT: usize = 1;

/// Glyph used when an ellipsis token is displayed.
pub const ELLIPSIS: &str = "…";

/// A single entry in the rendered pagination sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageToken {
    /// A clickable page number (1-based).
    Page(usize),
    /// A non-interactive placeholder for two or more hidden pages.
    Ellipsis,
}

impl PageToken {
    /// Returns the page number, or `None` for an ellipsis.
    pub const fn page(&self) -> Option<usize> {
        match *self {
            Self::Page(n) => Some(n),
            Self::Ellipsis => None,
        }
    }

    /// Returns whether this token is an ellipsis.
    pub const fn is_ellipsis(&self) -> bool {
        matches!(self, Self::Ellipsis)
    }
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(n) => write!(f, "{n}"),
            Self::Ellipsis => f.write_str(ELLIPSIS),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PageToken {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Page(n) => serializer.serialize_u64(*n as u64),
            Self::Ellipsis => serializer.serialize_str("ellipsis"),
        }
    }
}

/// A validated pagination request.
///
/// The current page is always inside `1..=total_pages` (or `1` when there
/// are no pages at all).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaginationRequest {
    current_page: usize,
    total_pages: usize,
    sibling_count: usize,
}

impl PaginationRequest {
    /// Validates signed caller input.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `total_pages` or `sibling_count`
    /// is negative. `current_page` is clamped, never rejected.
    pub fn new(current_page: i64, total_pages: i64, sibling_count: i64) -> Result<Self> {
        let total_pages = non_negative(Field::TotalPages, total_pages)?;
        let sibling_count = non_negative(Field::SiblingCount, sibling_count)?;
        let current_page = if current_page < 1 {
            1
        } else {
            usize::try_from(current_page).unwrap_or(usize::MAX)
        };
        Ok(Self::from_parts(current_page, total_pages, sibling_count))
    }

    /// Like [`PaginationRequest::new`] with [`DEFAULT_SIBLING_COUNT`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `total_pages` is negative.
    #[allow(clippy::cast_possible_wrap)]
    pub fn with_default_siblings(current_page: i64, total_pages: i64) -> Result<Self> {
        Self::new(current_page, total_pages, DEFAULT_SIBLING_COUNT as i64)
    }

    /// Validates textual input, e.g. command-line arguments or query strings.
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if any argument is not an integer,
    /// or if `total_pages` or `sibling_count` is negative.
    pub fn parse(current_page: &str, total_pages: &str, sibling_count: &str) -> Result<Self> {
        let current_page = parse_integer(Field::CurrentPage, current_page)?;
        let total_pages = parse_integer(Field::TotalPages, total_pages)?;
        let sibling_count = parse_integer(Field::SiblingCount, sibling_count)?;
        Self::new(current_page, total_pages, sibling_count)
    }

    /// Builds a request from values that are unsigned already.
    ///
    /// The current page is clamped into `1..=total_pages`.
    pub fn from_parts(current_page: usize, total_pages: usize, sibling_count: usize) -> Self {
        Self {
            current_page: current_page.clamp(1, total_pages.max(1)),
            total_pages,
            sibling_count,
        }
    }

    /// Returns the clamped current page.
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    /// Returns the total number of pages.
    pub const fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Returns the number of pages shown on each side of the current page.
    pub const fn sibling_count(&self) -> usize {
        self.sibling_count
    }

    /// Upper bound on the length of [`PaginationRequest::tokens`].
    pub const fn max_len(&self) -> usize {
        self.sibling_count.saturating_mul(2).saturating_add(5)
    }

    /// Computes the tokens to render, left to right.
    ///
    /// An empty dataset (`total_pages == 0`) yields no tokens.
    pub fn tokens(&self) -> Vec<PageToken> {
        let total = self.total_pages;
        if total == 0 {
            return Vec::new();
        }

        let first = self.current_page.saturating_sub(self.sibling_count).max(1);
        let last = self.current_page.saturating_add(self.sibling_count).min(total);

        let mut tokens = Vec::new();
        // Boundary decorations are only added when the window does not
        // reach that boundary, so the two sides never overlap.
        if first > 1 {
            tokens.push(PageToken::Page(1));
            push_gap(&mut tokens, 1, first);
        }
        tokens.extend((first..=last).map(PageToken::Page));
        if last < total {
            push_gap(&mut tokens, last, total);
            tokens.push(PageToken::Page(total));
        }

        trace!(
            current_page = self.current_page,
            total_pages = total,
            sibling_count = self.sibling_count,
            len = tokens.len(),
            "computed page range"
        );
        tokens
    }
}

/// Computes the tokens for `current_page` out of `total_pages`.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `total_pages` or `sibling_count` is
/// negative.
///
/// # Example
///
/// ```rust
/// use page_range::{compute, PageToken::{Ellipsis, Page}};
///
/// assert_eq!(compute(1, 10, 1).unwrap(), vec![Page(1), Page(2), Ellipsis, Page(10)]);
/// assert_eq!(compute(2, 3, 1).unwrap(), vec![Page(1), Page(2), Page(3)]);
/// ```
pub fn compute(current_page: i64, total_pages: i64, sibling_count: i64) -> Result<Vec<PageToken>> {
    let request = PaginationRequest::new(current_page, total_pages, sibling_count)?;
    Ok(request.tokens())
}

/// Iterates over the page numbers in `tokens`, skipping ellipses.
pub fn page_numbers(tokens: &[PageToken]) -> impl Iterator<Item = usize> + '_ {
    tokens.iter().filter_map(PageToken::page)
}

/// Bridges the hidden pages strictly between `from` and `to`.
fn push_gap(tokens: &mut Vec<PageToken>, from: usize, to: usize) {
    match to - from - 1 {
        0 => {}
        // Never hide a single page behind an ellipsis.
        1 => tokens.push(PageToken::Page(from + 1)),
        _ => tokens.push(PageToken::Ellipsis),
    }
}

fn non_negative(field: Field, value: i64) -> Result<usize> {
    if value < 0 {
        debug!(%field, value, "rejected negative pagination input");
        return Err(Error::negative(field, value));
    }
    Ok(usize::try_from(value).unwrap_or(usize::MAX))
}

fn parse_integer(field: Field, raw: &str) -> Result<i64> {
    raw.trim().parse::<i64>().map_err(|_| {
        debug!(%field, raw, "rejected non-integer pagination input");
        Error::not_an_integer(field, raw)
    })
}
