use crate::config::Config;
use crate::router::handle;
use crate::search::ListingFetcher;
use astra::Server;
use tracing::{error, info};

mod config;
mod domain;
mod errors;
mod responses;
mod router;
mod search;
mod templates;


fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("listings_search=info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Configuration error: {e}");
            std::process::exit(1);
        }
    };

    // The backend base is injected here and nowhere else.
    let fetcher = match ListingFetcher::new(&config.backend_base, config.fetch_timeout) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            eprintln!("❌ Could not set up listings client: {e}");
            std::process::exit(1);
        }
    };

    info!(
        addr = %config.bind_addr,
        backend = %config.backend_base,
        "starting server"
    );

    let server = Server::bind(&config.bind_addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &fetcher) {
        Ok(resp) => resp,
        Err(err) => templates::html_error_response(err),
    });

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
    }

    info!("server shut down cleanly");
}
