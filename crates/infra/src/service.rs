//! Catalog service: fetch the upstream documents, then run the pure catalog.
//!
//! Every call builds its own [`CatalogSnapshot`]; the service holds only the
//! source handle, so concurrent requests never see each other's data.

use std::sync::Arc;

use shopfront_catalog::{CatalogSnapshot, ProductCatalog, ProductListResult, ResolvedProduct};
use shopfront_core::{CatalogError, CatalogResult, PageRequest, ProductId};

use crate::external::{CatalogSource, Document, FetchError};

#[derive(Clone)]
pub struct CatalogService {
    source: Arc<dyn CatalogSource>,
}

impl CatalogService {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self { source }
    }

    /// Fetch both documents concurrently.
    ///
    /// Either failing fails the whole snapshot; so does an empty product feed.
    pub async fn load_snapshot(&self) -> CatalogResult<CatalogSnapshot> {
        let products = async {
            self.source
                .fetch_products()
                .await
                .map_err(|e| upstream_error(Document::Products, e))
        };
        let attributes = async {
            self.source
                .fetch_attributes()
                .await
                .map_err(|e| upstream_error(Document::Attributes, e))
        };

        let (products, definitions) = tokio::try_join!(products, attributes)?;

        if products.is_empty() {
            tracing::warn!("upstream products document is empty");
            return Err(CatalogError::upstream(
                Document::Products.as_str(),
                "feed contains no products",
            ));
        }

        Ok(CatalogSnapshot::new(products, definitions))
    }

    pub async fn list(&self, request: PageRequest) -> CatalogResult<ProductListResult> {
        let snapshot = self.load_snapshot().await?;
        let result = ProductCatalog::new(&snapshot).list(request);

        tracing::debug!(
            "listed page {}/{} ({} products, page_size {})",
            result.page,
            result.total_pages,
            result.products.len(),
            request.page_size()
        );

        Ok(result)
    }

    /// `Ok(None)` when no product has this id.
    pub async fn get(&self, id: ProductId) -> CatalogResult<Option<ResolvedProduct>> {
        let snapshot = self.load_snapshot().await?;
        let product = ProductCatalog::new(&snapshot).get(id);

        if product.is_none() {
            tracing::debug!("product {} not found in feed", id);
        }

        Ok(product)
    }
}

fn upstream_error(document: Document, err: FetchError) -> CatalogError {
    tracing::warn!("failed to fetch {} document: {}", document, err);
    CatalogError::upstream(document.as_str(), err.to_string())
}
