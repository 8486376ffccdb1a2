pub mod filters;
pub mod listing;

pub use filters::{FilterState, SortKey, AMENITY_CHOICES};
pub use listing::Listing;
