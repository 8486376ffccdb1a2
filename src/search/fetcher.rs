// src/search/fetcher.rs
use crate::domain::{FilterState, Listing};
use crate::search::query::query_string;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

const LISTINGS_PATH: &str = "api/listings";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid listings URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("listings API returned HTTP {0}")]
    Status(StatusCode),
    #[error("malformed listings payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Issues one GET per search against `{base}/api/listings`.
/// No retries; failures are reported to the caller or flattened to `[]`.
pub struct ListingFetcher {
    client: Client,
    endpoint: Url,
}

impl ListingFetcher {
    pub fn new(backend_base: &str, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let base = format!("{}/", backend_base.trim_end_matches('/'));
        let endpoint = Url::parse(&base)?.join(LISTINGS_PATH)?;

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { client, endpoint })
    }

    pub fn listings_url(&self, filters: &FilterState) -> Url {
        let mut url = self.endpoint.clone();
        let qs = query_string(filters);
        if !qs.is_empty() {
            url.set_query(Some(&qs));
        }
        url
    }

    pub fn fetch(&self, filters: &FilterState) -> Result<Vec<Listing>, FetchError> {
        let url = self.listings_url(filters);
        debug!(%url, "fetching listings");

        let resp = self.client.get(url).send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = resp.text()?;
        let listings: Vec<Listing> = serde_json::from_str(&body)?;

        debug!(count = listings.len(), "listings received");
        Ok(listings)
    }

    /// Like `fetch`, but every failure becomes an empty result.
    pub fn fetch_or_empty(&self, filters: &FilterState) -> Vec<Listing> {
        match self.fetch(filters) {
            Ok(listings) => listings,
            Err(err) => {
                warn!(url = %self.listings_url(filters), error = %err, "listing fetch failed");
                Vec::new()
            }
        }
    }
}
