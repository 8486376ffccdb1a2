// src/search/explain.rs
//
// Client-side explanation of the server's matchability score. The estimate
// below is illustrative only; the real weighting lives in the listings API.

use crate::domain::{FilterState, Listing};

pub const MATCH_FORMULA: &str = "60% amenity match + 40% price";

const ACCESSIBILITY_WEIGHT_ALONE: f64 = 0.4;
const ACCESSIBILITY_WEIGHT_WITH_AMENITIES: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    Low,
    Medium,
    High,
}

impl MatchTier {
    pub fn for_score(score: f64) -> Self {
        if score < 40.0 {
            MatchTier::Low
        } else if score < 75.0 {
            MatchTier::Medium
        } else {
            MatchTier::High
        }
    }

    /// CSS class for the badge (red / orange / green).
    pub fn css_class(&self) -> &'static str {
        match self {
            MatchTier::Low => "match-low",
            MatchTier::Medium => "match-medium",
            MatchTier::High => "match-high",
        }
    }
}

/// Scores of the listing that correspond to the toggles the user switched on,
/// labelled for display. Missing scores count as 0.
pub fn active_accessibility_scores(
    listing: &Listing,
    filters: &FilterState,
) -> Vec<(&'static str, f64)> {
    let mut scores = Vec::with_capacity(3);
    if filters.walkable {
        scores.push(("walkable", listing.walkable_score.unwrap_or(0.0)));
    }
    if filters.transit {
        scores.push(("transit", listing.transit_score.unwrap_or(0.0)));
    }
    if filters.car_friendly {
        scores.push(("car friendly", listing.car_score.unwrap_or(0.0)));
    }
    scores
}

pub fn accessibility_weight(filters: &FilterState) -> f64 {
    if filters.amenities().is_empty() {
        ACCESSIBILITY_WEIGHT_ALONE
    } else {
        ACCESSIBILITY_WEIGHT_WITH_AMENITIES
    }
}

/// Estimated percentage points the accessibility filters add to the match.
/// `None` when no accessibility toggle is on.
pub fn accessibility_contribution(listing: &Listing, filters: &FilterState) -> Option<u32> {
    if !filters.has_accessibility_filter() {
        return None;
    }

    let scores = active_accessibility_scores(listing, filters);
    let mean = scores.iter().map(|(_, s)| s).sum::<f64>() / scores.len() as f64;
    Some((mean * accessibility_weight(filters)).round().max(0.0) as u32)
}
