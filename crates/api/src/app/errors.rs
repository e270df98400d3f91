use axum::http::StatusCode;
use axum::response::IntoResponse;

use shopfront_core::{CatalogError, ErrorResult};

pub fn catalog_error_to_response(err: CatalogError) -> axum::response::Response {
    let body = ErrorResult::from(&err);
    let status = StatusCode::from_u16(body.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, axum::Json(body)).into_response()
}

/// `{ "error": message, "code": status }` with the matching HTTP status.
pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (status, axum::Json(ErrorResult::new(message, status.as_u16()))).into_response()
}
