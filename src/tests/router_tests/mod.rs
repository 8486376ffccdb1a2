mod fetcher_tests;
mod search_tests;
