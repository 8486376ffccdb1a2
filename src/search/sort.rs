use crate::domain::{Listing, SortKey};

/// Orders listings for display without touching the source slice.
/// Stable: ties keep the order the API returned them in.
pub fn sorted_listings(listings: &[Listing], key: SortKey) -> Vec<&Listing> {
    let mut ordered: Vec<&Listing> = listings.iter().collect();

    match key {
        SortKey::PriceAsc => ordered.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceDesc => ordered.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortKey::Match => ordered.sort_by(|a, b| b.match_score().total_cmp(&a.match_score())),
    }

    ordered
}
