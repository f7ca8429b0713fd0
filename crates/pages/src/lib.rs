#![forbid(unsafe_code)]
#![allow(clippy::doc_markdown)]

//! # Pages
//!
//! Command-line front end for [`page_range`] and [`table_footer`].
//!
//! ## Usage
//!
//! ```bash
//! pages 5 10                      # ‹ 1 … 4 [5] 6 … 10 ›
//! pages 5 10 --format tokens      # 1 … 4 5 6 … 10
//! pages 5 10 --format json        # [1,"ellipsis",4,5,6,"ellipsis",10]
//! pages 3 --items 95              # footer plus "21–30 of 95"
//! ```

pub mod cli;

use std::num::NonZeroUsize;
use std::path::Path;

use anyhow::{Context, Result};
use page_range::PaginationRequest;
use table_footer::{Config, Paginator};
use tracing::{debug, info};

pub use cli::{Cli, Format};

/// Exit code for arguments that break the pagination input contract.
pub const EXIT_INVALID_INPUT: u8 = 2;

/// Runs the command and returns what should be printed.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded or the arguments are
/// not valid pagination input.
pub fn run(cli: &Cli) -> Result<String> {
    let config = cli
        .config
        .as_deref()
        .map_or_else(|| Ok(Config::default()), load_config)?;
    debug!(?config, "loaded footer config");

    let per_page = cli.per_page.map_or(config.per_page, NonZeroUsize::get);
    let siblings = cli
        .siblings
        .clone()
        .unwrap_or_else(|| config.sibling_count.to_string());
    let total = match (cli.items, &cli.total) {
        (Some(items), _) => items.div_ceil(per_page).to_string(),
        (None, Some(total)) => total.clone(),
        (None, None) => anyhow::bail!("either TOTAL or --items is required"),
    };

    let request = PaginationRequest::parse(&cli.current, &total, &siblings)
        .context("invalid pagination arguments")?;
    info!(
        current_page = request.current_page(),
        total_pages = request.total_pages(),
        sibling_count = request.sibling_count(),
        "computing page range"
    );

    let tokens = request.tokens();
    let output = match cli.format {
        Format::Tokens => tokens
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" "),
        Format::Json => serde_json::to_string(&tokens)?,
        Format::Text => {
            let mut paginator = Paginator::from_config(&config)
                .per_page(per_page)
                .sibling_count(request.sibling_count())
                .total_pages(request.total_pages());
            paginator.set_page(request.current_page());

            let view = paginator.view();
            match cli.items {
                Some(items) if view.is_empty() => paginator.range_label(items),
                Some(items) => format!("{view}\n{}", paginator.range_label(items)),
                None => view,
            }
        }
    };
    Ok(output)
}

fn load_config(path: &Path) -> Result<Config> {
    Config::from_file(path)
        .with_context(|| format!("failed to load config from {}", path.display()))
}

/// Returns whether `err` was caused by invalid pagination input.
#[must_use]
pub fn is_invalid_input(err: &anyhow::Error) -> bool {
    err.downcast_ref::<page_range::Error>().is_some()
}
