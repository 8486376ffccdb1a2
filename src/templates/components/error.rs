use crate::errors::ServerError;
use crate::templates::desktop_layout;
use astra::{Body, Response, ResponseBuilder};
use maud::{html, Markup};

/// Convert a ServerError into a proper HTML response page
pub fn html_error_response(err: ServerError) -> Response {
    let status = err.status();
    let body = error_page(status, &err.to_string()).into_string();

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(body))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}

fn error_page(status: u16, message: &str) -> Markup {
    desktop_layout(
        &format!("Error {status}"),
        html! {
            main class="container" {
                h2 { "Error " (status) }
                p { (message) }
                p { a href="/" { "← Back to search" } }
            }
        },
    )
}
