pub mod error;
pub mod listing_card;
pub mod results;
pub mod search_form;

pub use error::html_error_response;
pub use listing_card::listing_card;
pub use results::{results_panel, EMPTY_MESSAGE};
pub use search_form::search_form;
