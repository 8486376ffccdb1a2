// src/search/page.rs
use crate::domain::{FilterState, Listing};
use crate::search::fetcher::ListingFetcher;
use crate::search::sort::sorted_listings;
use tracing::debug;

/// Handed out by `begin_search`; only the newest ticket may complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket(u64);

/// State behind one rendering of the search page: the submitted filters,
/// whatever the last applied search returned, and whether one is in flight.
///
/// The generation counter only orders searches issued against the same
/// `SearchPage`. The router builds a fresh page per request, so overlapping
/// browser submits are ordered by the form's `hx-sync="this:replace"`, not here.
#[derive(Debug, Default)]
pub struct SearchPage {
    pub filters: FilterState,
    listings: Vec<Listing>,
    loading: bool,
    generation: u64,
}

impl SearchPage {
    pub fn new(filters: FilterState) -> Self {
        Self {
            filters,
            ..Default::default()
        }
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// Starts a search and supersedes any ticket handed out earlier.
    pub fn begin_search(&mut self) -> SearchTicket {
        self.generation += 1;
        self.loading = true;
        SearchTicket(self.generation)
    }

    /// Applies `listings` if `ticket` is the latest search issued.
    /// Results of superseded searches are dropped and `false` is returned.
    pub fn complete(&mut self, ticket: SearchTicket, listings: Vec<Listing>) -> bool {
        if ticket.0 != self.generation {
            debug!(
                stale = ticket.0,
                current = self.generation,
                "dropping superseded search result"
            );
            return false;
        }

        self.listings = listings;
        self.loading = false;
        true
    }

    pub fn run(&mut self, fetcher: &ListingFetcher) {
        let ticket = self.begin_search();
        let listings = fetcher.fetch_or_empty(&self.filters);
        self.complete(ticket, listings);
    }

    /// Listings in display order for the current sort key.
    pub fn visible_listings(&self) -> Vec<&Listing> {
        sorted_listings(&self.listings, self.filters.sort)
    }
}
