// templates/pages/search.rs

use crate::search::SearchPage;
use crate::templates::{
    components::{results_panel, search_form},
    desktop_layout,
};
use maud::{html, Markup};

pub fn search_page(page: &SearchPage) -> Markup {
    desktop_layout(
        "Listings",
        html! {
            main class="container" {
                (search_form(&page.filters))

                div id="loading" class="htmx-indicator empty" { "Loading listings…" }

                (results_panel(page))
            }
        },
    )
}
