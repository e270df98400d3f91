use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use shopfront_core::ProductId;
use shopfront_infra::CatalogService;

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products))
        .route("/:id", get(get_product))
}

/// A query string that cannot be decoded falls back to the default page.
pub async fn list_products(
    Extension(services): Extension<Arc<CatalogService>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> axum::response::Response {
    let query = match query {
        Ok(Query(pairs)) => dto::ListProductsQuery::from_pairs(pairs),
        Err(e) => {
            tracing::debug!("ignoring undecodable query string: {}", e);
            dto::ListProductsQuery::default()
        }
    };

    match services.list(query.to_page_request()).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}

/// A missing product is an empty object with 200, not a 404.
pub async fn get_product(
    Extension(services): Extension<Arc<CatalogService>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::catalog_error_to_response(e),
    };

    match services.get(id).await {
        Ok(Some(product)) => (StatusCode::OK, Json(product)).into_response(),
        Ok(None) => (StatusCode::OK, Json(serde_json::json!({}))).into_response(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}
