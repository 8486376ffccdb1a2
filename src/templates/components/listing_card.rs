use crate::domain::{FilterState, Listing};
use crate::search::explain::{
    accessibility_contribution, accessibility_weight, active_accessibility_scores, MatchTier,
    MATCH_FORMULA,
};
use maud::{html, Markup};

pub fn listing_card(listing: &Listing, filters: &FilterState) -> Markup {
    html! {
        article class="listing-card" {
            div class="listing-head" {
                h2 { (listing.title) }
                div class="price" { (listing.display_price()) }
            }
            div class="location" { (listing.location) }

            @if !listing.amenities.is_empty() {
                div class="tags" {
                    @for amenity in &listing.amenities {
                        span class="tag" { (amenity) }
                    }
                }
            }

            @if listing.has_accessibility_scores() {
                ul class="scores" {
                    @if let Some(s) = listing.walkable_score {
                        li { "Walkable " strong { (format!("{s:.0}")) } }
                    }
                    @if let Some(s) = listing.transit_score {
                        li { "Transit " strong { (format!("{s:.0}")) } }
                    }
                    @if let Some(s) = listing.car_score {
                        li { "Car " strong { (format!("{s:.0}")) } }
                    }
                }
            }

            @if let Some(score) = listing.matchability {
                (match_badge(listing, score, filters))
            }
        }
    }
}

fn match_badge(listing: &Listing, score: f64, filters: &FilterState) -> Markup {
    let tier = MatchTier::for_score(score);

    html! {
        div class="match" {
            span class=(format!("match-badge {}", tier.css_class())) {
                (format!("{score:.0}% match"))
            }
            details class="match-explain" {
                summary aria-label="How is the match calculated?" { "ⓘ" }
                (explain_overlay(listing, filters))
            }
        }
    }
}

fn explain_overlay(listing: &Listing, filters: &FilterState) -> Markup {
    let labels: Vec<&str> = active_accessibility_scores(listing, filters)
        .into_iter()
        .map(|(label, _)| label)
        .collect();

    html! {
        div class="overlay" {
            p { "Matchability = " (MATCH_FORMULA) }
            @if let Some(pct) = accessibility_contribution(listing, filters) {
                p class="accessibility-estimate" {
                    "Accessibility contribution ≈ " strong { (pct) "%" }
                }
                p class="microcopy" {
                    "Average of the " (labels.join(", ")) " scores × "
                    (accessibility_weight(filters)) ". Estimate only."
                }
            }
        }
    }
}
