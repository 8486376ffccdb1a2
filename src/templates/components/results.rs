use crate::search::SearchPage;
use crate::templates::components::listing_card;
use maud::{html, Markup};

pub const EMPTY_MESSAGE: &str = "No listings found.";

/// The `#results` region; htmx swaps this whole element on each search.
pub fn results_panel(page: &SearchPage) -> Markup {
    let visible = page.visible_listings();

    html! {
        section id="results" aria-busy=(if page.loading() { "true" } else { "false" }) {
            @if page.loading() {
                div class="empty" { "Loading listings…" }
            } @else if visible.is_empty() {
                div class="empty" { (EMPTY_MESSAGE) }
            } @else {
                p class="result-count" { (visible.len()) " listings" }
                div class="grid" {
                    @for listing in &visible {
                        (listing_card(listing, &page.filters))
                    }
                }
            }
        }
    }
}
