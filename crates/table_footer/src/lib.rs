#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::doc_markdown)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]

//! # Table Footer
//!
//! The stateful side of a paginated table: it owns the current page, the
//! page size and the display style, and asks [`page_range`] which page
//! labels to show.
//!
//! - **paginator** - Navigation, slice bounds and the rendered footer line
//! - **config** - Serializable settings loaded from TOML or JSON
//!
//! ## Example
//!
//! ```rust
//! use table_footer::Paginator;
//!
//! let mut paginator = Paginator::new().per_page(10);
//! paginator.set_total_pages_from_items(95);
//! paginator.set_page(5);
//!
//! assert_eq!(paginator.view(), "‹ 1 … 4 [5] 6 … 10 ›");
//! assert_eq!(paginator.range_label(95), "41–50 of 95");
//! ```

pub mod config;
pub mod paginator;

pub use config::{Config, ConfigError, Style};
pub use page_range::PageToken;
pub use paginator::Paginator;
