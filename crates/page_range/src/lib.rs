#![forbid(unsafe_code)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]

//! # Page Range
//!
//! Computes the sequence of page labels a pagination control should render:
//! which page numbers are visible and where ellipsis markers go.
//!
//! The first and last pages are always shown, together with a window of
//! `sibling_count` pages on each side of the current page. A gap of two or
//! more hidden pages collapses into a single [`PageToken::Ellipsis`]; a gap
//! of exactly one page shows that page instead.
//!
//! ## Example
//!
//! ```rust
//! use page_range::{compute, PageToken::{Ellipsis, Page}};
//!
//! let tokens = compute(5, 10, 1).unwrap();
//! assert_eq!(
//!     tokens,
//!     vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
//! );
//! ```
//!
//! The output length never exceeds `2 * sibling_count + 5`, no matter how
//! many pages exist, so the control stays usable for page counts in the
//! thousands.
//!
//! ## Validation
//!
//! Negative page totals or sibling counts, and non-integer text, are
//! rejected with [`Error::InvalidInput`]. The current page is clamped into
//! `1..=total_pages` instead.
//!
//! ```rust
//! use page_range::{compute, Field};
//!
//! let err = compute(1, 10, -1).unwrap_err();
//! assert_eq!(err.field(), Field::SiblingCount);
//! ```
//!
//! ## Feature flags
//!
//! - `serde` (default): `Serialize` for [`PageToken`], pages as numbers and
//!   ellipses as the string `"ellipsis"`

mod error;
mod range;

pub use error::{Error, Field, Result};
pub use range::{
    DEFAULT_SIBLING_COUNT, ELLIPSIS, PageToken, PaginationRequest, compute, page_numbers,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{Error, Field};
    pub use crate::range::{DEFAULT_SIBLING_COUNT, PageToken, PaginationRequest, compute};
}
