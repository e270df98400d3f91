use axum::{
    Json,
    extract::OriginalUri,
    http::StatusCode,
    response::IntoResponse,
};

use crate::app::{dto, errors};

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn index() -> impl IntoResponse {
    Json(dto::ServiceInfo::current())
}

/// Fallback for every unmatched path.
///
/// Paths under `products` that match no route are a 404; anything else gets
/// the generic unsupported-route body.
pub async fn unsupported_route(OriginalUri(uri): OriginalUri) -> axum::response::Response {
    if uri.path().trim_start_matches('/').starts_with("products") {
        return errors::json_error(StatusCode::NOT_FOUND, "Not found");
    }

    (StatusCode::OK, Json(serde_json::json!(["Unsupported route"]))).into_response()
}
