use astra::Response;
// errors.rs
use thiserror::Error;

/// Errors raised while routing and rendering a request.
/// Backend failures never show up here; the fetcher swallows them.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::InternalError => 500,
        }
    }
}
