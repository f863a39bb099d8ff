use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::error;

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate<'a> {
    title: &'a str,
    message: &'a str,
}

pub fn render_page<T: Template>(template: &T) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("Template render failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub fn error_page(status: StatusCode, message: &str) -> Response {
    let title = status.canonical_reason().unwrap_or("Error");
    let mut response = render_page(&ErrorTemplate { title, message });
    if response.status().is_success() {
        *response.status_mut() = status;
    }
    response
}

pub fn not_found() -> Response {
    error_page(
        StatusCode::NOT_FOUND,
        "The page you were looking for does not exist.",
    )
}

pub fn internal_error() -> Response {
    error_page(
        StatusCode::INTERNAL_SERVER_ERROR,
        "Something went wrong while loading this page.",
    )
}

pub async fn fallback_handler() -> Response {
    not_found()
}
