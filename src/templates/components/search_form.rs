use crate::domain::{FilterState, SortKey, AMENITY_CHOICES};
use maud::{html, Markup};

/// The filter form. Submits with htmx when available, plain GET otherwise.
/// `hx-sync="this:replace"` aborts an in-flight search when a newer one starts.
pub fn search_form(filters: &FilterState) -> Markup {
    html! {
        form
            id="search-form"
            class="search-form"
            method="get"
            action="/"
            hx-get="/listings"
            hx-target="#results"
            hx-swap="outerHTML"
            hx-sync="this:replace"
            hx-indicator="#loading"
            hx-trigger="submit, change from:#sort"
        {
            fieldset {
                label {
                    "Budget "
                    input
                        type="number"
                        name="budget"
                        step="any"
                        placeholder="Max monthly rent"
                        value=[filters.budget];
                }
                label {
                    "Location "
                    input
                        type="text"
                        name="location"
                        placeholder="Waterloo"
                        value=[filters.location.as_deref()];
                }
            }

            fieldset class="amenities" {
                legend { "Amenities" }
                @for amenity in AMENITY_CHOICES {
                    label {
                        input
                            type="checkbox"
                            name="amenities"
                            value=(amenity)
                            checked[filters.has_amenity(amenity)];
                        " " (amenity)
                    }
                }
            }

            fieldset class="accessibility" {
                legend { "Getting around" }
                (toggle("walkable", "Walkable", filters.walkable))
                (toggle("transit", "Transit", filters.transit))
                (toggle("car_friendly", "Car friendly", filters.car_friendly))
            }

            fieldset {
                label for="sort" { "Sort by " }
                select id="sort" name="sort" {
                    @for key in SortKey::ALL {
                        option value=(key.as_str()) selected[filters.sort == key] { (key.label()) }
                    }
                }
                button type="submit" class="primary" { "Search" }
            }
        }
    }
}

fn toggle(name: &str, label: &str, checked: bool) -> Markup {
    html! {
        label {
            input type="checkbox" name=(name) value="true" checked[checked];
            " " (label)
        }
    }
}
