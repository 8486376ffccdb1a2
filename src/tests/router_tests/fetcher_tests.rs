// src/tests/router_tests/fetcher_tests.rs

use crate::domain::FilterState;
use crate::search::fetcher::FetchError;
use crate::search::SearchPage;
use crate::tests::utils::{spawn_backend, unreachable_fetcher};

#[test]
fn fetch_decodes_listings() {
    let backend = spawn_backend(
        200,
        r#"[{"title":"Furnished room near campus","price":700,"location":"Waterloo",
             "amenities":["wifi","laundry","furnished"],"matchability":64.5}]"#,
    );

    let listings = backend.fetcher().fetch(&FilterState::default()).unwrap();

    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].title, "Furnished room near campus");
    assert_eq!(listings[0].matchability, Some(64.5));
    assert_eq!(backend.requests(), vec!["/api/listings".to_string()]);
}

#[test]
fn non_success_status_is_an_error_but_flattens_to_empty() {
    let backend = spawn_backend(503, "[]");
    let fetcher = backend.fetcher();

    match fetcher.fetch(&FilterState::default()) {
        Err(FetchError::Status(status)) => assert_eq!(status.as_u16(), 503),
        other => panic!("expected status error, got {other:?}"),
    }
    assert!(fetcher.fetch_or_empty(&FilterState::default()).is_empty());
}

#[test]
fn bad_json_is_a_decode_error() {
    let backend = spawn_backend(200, "<html>oops</html>");

    assert!(matches!(
        backend.fetcher().fetch(&FilterState::default()),
        Err(FetchError::Decode(_))
    ));
}

#[test]
fn connection_failure_is_a_request_error() {
    assert!(matches!(
        unreachable_fetcher().fetch(&FilterState::default()),
        Err(FetchError::Request(_))
    ));
}

#[test]
fn failed_search_clears_loading() {
    let backend = spawn_backend(500, "");
    let mut page = SearchPage::new(FilterState::from_pairs([("budget", "1500")]));

    page.run(&backend.fetcher());

    assert!(!page.loading());
    assert!(page.listings().is_empty());
}

#[test]
fn run_supersedes_an_earlier_pending_search() {
    let backend = spawn_backend(
        200,
        r#"[{"title":"Studio downtown","price":950,"location":"Kitchener","amenities":["gym"]}]"#,
    );
    let mut page = SearchPage::default();

    let earlier = page.begin_search();
    page.run(&backend.fetcher());

    assert!(!page.complete(earlier, Vec::new()));
    assert_eq!(page.listings().len(), 1);
    assert!(!page.loading());
}

#[test]
fn fractional_budget_reaches_the_backend() {
    let backend = spawn_backend(200, "[]");

    backend
        .fetcher()
        .fetch(&FilterState::from_pairs([("budget", "1500.5")]))
        .unwrap();
    backend
        .fetcher()
        .fetch(&FilterState::from_pairs([("budget", "-200")]))
        .unwrap();

    assert_eq!(
        backend.requests(),
        vec![
            "/api/listings?budget=1500.5".to_string(),
            "/api/listings?budget=-200".to_string()
        ]
    );
}
