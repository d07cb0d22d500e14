use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde_json::json;

use stockroom_infra::ServiceError;

use crate::app::views::ViewError;

fn status_for(err: &ServiceError) -> StatusCode {
    match err {
        ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
        ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        ServiceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// JSON surface: `{"error": <message>, "code": <kind>}`.
pub fn service_error_to_json(err: ServiceError) -> Response {
    json_error(status_for(&err), err.kind(), err.to_string())
}

/// Page surface, plain-text variant used by the edit/supplier forms.
pub fn service_error_to_text(err: ServiceError) -> Response {
    let status = status_for(&err);
    let body = match &err {
        ServiceError::Validation(msg) => format!("Error: {msg}"),
        ServiceError::NotFound(_) => err.to_string(),
        ServiceError::Store(e) => format!("An error occurred: {e}"),
    };
    (status, body).into_response()
}

/// Page surface, rendered-page variant used by the index form.
pub fn service_error_to_page(
    err: &ServiceError,
    render: impl FnOnce(&str) -> Result<String, ViewError>,
) -> Response {
    let message = match err {
        ServiceError::Store(e) => format!("An error occurred: {e}"),
        _ => err.to_string(),
    };
    match render(&message) {
        Ok(html) => (status_for(err), Html(html)).into_response(),
        Err(e) => view_error(e),
    }
}

/// A rendered page, or a plain-text 500 when the template fails.
pub fn page(rendered: Result<String, ViewError>) -> Response {
    match rendered {
        Ok(html) => Html(html).into_response(),
        Err(e) => view_error(e),
    }
}

fn view_error(err: ViewError) -> Response {
    tracing::error!(error = %err, "page rendering failed");
    (StatusCode::INTERNAL_SERVER_ERROR, format!("An error occurred: {err}")).into_response()
}

/// Malformed, mistyped, or unknown-field JSON bodies. These never reach the
/// service, so they are logged here.
pub fn json_body_rejection(operation: &'static str, rejection: JsonRejection) -> Response {
    let message = rejection.body_text();
    tracing::error!(
        operation,
        kind = "invalid_body",
        status = rejection.status().as_u16(),
        %message,
        "request body rejected"
    );
    json_error(StatusCode::BAD_REQUEST, "invalid_body", message)
}

/// An id segment that is not an integer cannot name an item.
pub fn json_path_rejection(operation: &'static str, rejection: PathRejection) -> Response {
    tracing::info!(operation, reason = %rejection.body_text(), "unparseable item id");
    json_error(StatusCode::NOT_FOUND, "not_found", "Item not found")
}

pub fn json_error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    (
        status,
        axum::Json(json!({
            "error": message.into(),
            "code": code,
        })),
    )
        .into_response()
}
