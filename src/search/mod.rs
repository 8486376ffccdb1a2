pub mod explain;
pub mod fetcher;
pub mod page;
pub mod query;
pub mod sort;

pub use fetcher::ListingFetcher;
pub use page::SearchPage;
