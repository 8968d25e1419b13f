//! Fetching workshop collection pages.

use super::ScrapeError;

/// Host serving workshop collection pages
const WORKSHOP_HOST: &str = "steamcommunity.com";

/// Detail page URL of a workshop item or collection.
pub fn collection_url(id: u64) -> String {
    format!("https://{WORKSHOP_HOST}/sharedfiles/filedetails/?id={id}")
}

/// Where collection pages come from.
pub trait WorkshopSource {
    /// Raw HTML of the collection's detail page.
    fn fetch_collection(&self, id: u64) -> Result<String, ScrapeError>;
}

/// Fetches pages over HTTPS with transport defaults (no retry).
#[derive(Debug, Default)]
pub struct HttpSource;

impl WorkshopSource for HttpSource {
    fn fetch_collection(&self, id: u64) -> Result<String, ScrapeError> {
        let url = collection_url(id);
        crate::debug!("workshop"; "GET {}", url);

        let response = ureq::get(url.as_str()).call().map_err(|e| ScrapeError::Request {
            url: url.clone(),
            source: Box::new(e),
        })?;

        response
            .into_body()
            .read_to_string()
            .map_err(|e| ScrapeError::Body {
                url,
                source: Box::new(e),
            })
    }
}
