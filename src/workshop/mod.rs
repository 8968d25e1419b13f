//! Workshop collection scraping.
//!
//! A collection page lists its items as anchors carrying the item ID and
//! title. Each item becomes a `resource.AddFile('<id>') -- <title>` line
//! ahead of the server block.

mod parse;
mod source;

pub use parse::{WorkshopEntry, parse_collection};
pub use source::{HttpSource, WorkshopSource};

use thiserror::Error;

/// Failure to fetch a collection page.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("request for `{url}` failed")]
    Request {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    #[error("reading the body of `{url}` failed")]
    Body {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },
}

/// Fetch collection `id` and extract its items, in page order.
pub fn scrape_collection(
    source: &dyn WorkshopSource,
    id: u64,
) -> Result<Vec<WorkshopEntry>, ScrapeError> {
    let body = source.fetch_collection(id)?;
    let entries = parse_collection(&body);
    crate::debug!("workshop"; "collection {} lists {} item(s)", id, entries.len());
    Ok(entries)
}
