use crate::domain::FilterState;
use crate::errors::ServerError;
use crate::responses::{html_response, ResultResp};
use crate::search::{ListingFetcher, SearchPage};
use crate::templates;
use astra::Request;
use tracing::info;
use url::form_urlencoded;

pub fn handle(req: Request, fetcher: &ListingFetcher) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        // Full page. A query string means the form was submitted without htmx.
        ("GET", "/") => {
            let mut page = SearchPage::new(filters_from(&req));
            if req.uri().query().is_some() {
                search(&mut page, fetcher);
            }
            html_response(templates::pages::search_page(&page))
        }

        // htmx target: just the #results region.
        ("GET", "/listings") => {
            let mut page = SearchPage::new(filters_from(&req));
            search(&mut page, fetcher);
            html_response(templates::results_panel(&page))
        }

        _ => Err(ServerError::NotFound),
    }
}

fn search(page: &mut SearchPage, fetcher: &ListingFetcher) {
    page.run(fetcher);
    info!(
        results = page.listings().len(),
        sort = page.filters.sort.as_str(),
        "search completed"
    );
}

fn filters_from(req: &Request) -> FilterState {
    FilterState::from_pairs(parse_query(req))
}

// Repeated keys (amenities) are kept, in order.
fn parse_query(req: &Request) -> Vec<(String, String)> {
    req.uri()
        .query()
        .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
