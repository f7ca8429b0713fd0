//! Command-line interface for `pages`.
//!
//! # Examples
//!
//! ```bash
//! # Footer for page 5 of 10
//! pages 5 10
//!
//! # Wider window, machine-readable
//! pages 50 100 --siblings 2 --format json
//!
//! # Derive the page count from a row count
//! pages 3 --items 95 --per-page 10
//! ```

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Print the page labels a pagination control shows.
///
/// The first and last pages are always listed, along with a window around
/// the current page. Runs of two or more hidden pages collapse into an
/// ellipsis.
#[derive(Parser, Debug, Clone)]
#[command(name = "pages", author, version, allow_negative_numbers = true)]
pub struct Cli {
    /// Current page (1-based, clamped into range)
    pub current: String,

    /// Total number of pages
    #[arg(required_unless_present = "items")]
    pub total: Option<String>,

    /// Pages shown on each side of the current page [default: 1]
    #[arg(long, short = 's', env = "PAGES_SIBLINGS")]
    pub siblings: Option<String>,

    /// Derive the page count from a number of rows
    #[arg(long, conflicts_with = "total")]
    pub items: Option<usize>,

    /// Rows per page when using --items [default: 10]
    #[arg(long, requires = "items")]
    pub per_page: Option<NonZeroUsize>,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Path to a TOML or JSON footer config
    #[arg(long, short = 'c', env = "PAGES_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// How the page labels are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// The rendered footer line, with arrows and current-page markers.
    #[default]
    Text,
    /// Bare tokens separated by spaces.
    Tokens,
    /// A JSON array of numbers and "ellipsis".
    Json,
}

impl Cli {
    /// Returns the log filter implied by `-v` flags.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
