// src/search/query.rs

use crate::domain::FilterState;
use url::form_urlencoded;

/// Maps the filters that are actually set to API query parameters.
/// Unset filters are left out so the backend applies its own defaults.
pub fn query_pairs(filters: &FilterState) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();

    if let Some(budget) = filters.budget.filter(|b| *b != 0.0) {
        pairs.push(("budget", budget.to_string()));
    }
    if let Some(location) = filters.location.as_deref().filter(|l| !l.is_empty()) {
        pairs.push(("location", location.to_string()));
    }
    if !filters.amenities().is_empty() {
        pairs.push(("amenities", filters.amenities().join(",")));
    }
    if filters.walkable {
        pairs.push(("walkable", "true".to_string()));
    }
    if filters.transit {
        pairs.push(("transit", "true".to_string()));
    }
    if filters.car_friendly {
        pairs.push(("car_friendly", "true".to_string()));
    }

    pairs
}

/// Form-urlencoded query, without the leading `?`. Empty when nothing is set.
pub fn query_string(filters: &FilterState) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(query_pairs(filters))
        .finish()
}
