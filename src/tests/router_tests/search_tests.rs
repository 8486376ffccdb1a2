// src/tests/router_tests/search_tests.rs

use crate::router::handle;
use crate::errors::ServerError;
use crate::templates::components::EMPTY_MESSAGE;
use crate::tests::utils::{body_string, get, spawn_backend, unreachable_fetcher};
use scraper::{Html, Selector};

const TWO_LISTINGS: &str = r#"[
    {"title":"Shared apartment close to UW","price":100,"location":"Waterloo","amenities":["wifi"],"matchability":50},
    {"title":"Studio downtown","price":50,"location":"Kitchener","amenities":["gym"],"matchability":90}
]"#;

fn select_text(html: &str, css: &str) -> Vec<String> {
    let doc = Html::parse_document(html);
    let sel = Selector::parse(css).unwrap();
    doc.select(&sel)
        .map(|e| e.text().collect::<String>().trim().to_string())
        .collect()
}

#[test]
fn home_page_renders_form_without_searching() {
    let backend = spawn_backend(200, TWO_LISTINGS);
    let fetcher = backend.fetcher();

    let resp = handle(get("/"), &fetcher).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("id=\"search-form\""));
    assert!(body.contains(EMPTY_MESSAGE));
    assert!(backend.requests().is_empty(), "no search before submit");
}

#[test]
fn submitted_form_forwards_only_set_filters() {
    let backend = spawn_backend(200, TWO_LISTINGS);
    let fetcher = backend.fetcher();

    let uri = "/?budget=1500&location=&amenities=wifi&walkable=true&sort=match";
    let body = body_string(handle(get(uri), &fetcher).unwrap());

    assert_eq!(
        backend.requests(),
        vec!["/api/listings?budget=1500&amenities=wifi&walkable=true".to_string()]
    );
    assert_eq!(select_text(&body, ".listing-card").len(), 2);
    // Submitted values are reflected back into the form.
    assert_eq!(select_text(&body, "input[name=budget][value='1500']").len(), 1);
    assert_eq!(select_text(&body, "input[name=walkable][checked]").len(), 1);
}

#[test]
fn multiple_amenities_are_sent_comma_joined() {
    let backend = spawn_backend(200, "[]");
    let fetcher = backend.fetcher();

    handle(get("/listings?amenities=laundry&amenities=gym"), &fetcher).unwrap();

    assert_eq!(
        backend.requests(),
        vec!["/api/listings?amenities=laundry%2Cgym".to_string()]
    );
}

#[test]
fn listings_fragment_follows_sort_key() {
    let backend = spawn_backend(200, TWO_LISTINGS);
    let fetcher = backend.fetcher();

    let by_price = body_string(handle(get("/listings?sort=price-asc"), &fetcher).unwrap());
    assert_eq!(select_text(&by_price, ".price"), vec!["$50", "$100"]);
    assert!(!by_price.contains("<html"), "fragment only");

    let by_match = body_string(handle(get("/listings?sort=match"), &fetcher).unwrap());
    assert_eq!(
        select_text(&by_match, ".match-badge"),
        vec!["90% match", "50% match"]
    );
}

#[test]
fn backend_error_renders_empty_state() {
    let backend = spawn_backend(500, r#"{"error":"boom"}"#);
    let fetcher = backend.fetcher();

    let resp = handle(get("/listings?budget=900"), &fetcher).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains(EMPTY_MESSAGE));
    assert!(body.contains("aria-busy=\"false\""));
    assert_eq!(backend.requests().len(), 1, "no retry");
}

#[test]
fn malformed_payload_renders_empty_state() {
    let backend = spawn_backend(200, r#"{"listings":"not an array"}"#);
    let fetcher = backend.fetcher();

    let body = body_string(handle(get("/?location=Waterloo"), &fetcher).unwrap());
    assert!(body.contains(EMPTY_MESSAGE));
}

#[test]
fn unreachable_backend_renders_empty_state() {
    let fetcher = unreachable_fetcher();

    let body = body_string(handle(get("/listings?transit=true"), &fetcher).unwrap());
    assert!(body.contains(EMPTY_MESSAGE));
}

#[test]
fn accessibility_estimate_uses_submitted_filters() {
    let backend = spawn_backend(
        200,
        r#"[{"title":"Room","price":700,"location":"Waterloo","amenities":[],
             "matchability":80,"walkable_score":90,"transit_score":70}]"#,
    );
    let fetcher = backend.fetcher();

    let body = body_string(
        handle(get("/listings?walkable=true&transit=true&amenities=wifi"), &fetcher).unwrap(),
    );

    // mean(90, 70) * 0.2 = 16
    assert_eq!(select_text(&body, ".accessibility-estimate strong"), vec!["16%"]);
}

#[test]
fn unknown_path_is_not_found() {
    let fetcher = unreachable_fetcher();

    match handle(get("/api/listings"), &fetcher) {
        Err(ServerError::NotFound) => {}
        other => panic!("expected NotFound, got {:?}", other.map(|r| r.status())),
    }
}
