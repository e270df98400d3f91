//! Upstream catalog clients.
//!
//! The facade reads two JSON documents: the product feed and the attribute
//! metadata. [`CatalogSource`] is the seam between the service and whatever
//! transport delivers them.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use shopfront_catalog::{AttributeDefinition, RawProduct};

pub mod http;
pub mod in_memory;

pub use http::HttpCatalogSource;
pub use in_memory::InMemoryCatalogSource;

/// Which upstream document a fetch was for.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Document {
    Products,
    Attributes,
}

impl Document {
    pub fn as_str(&self) -> &'static str {
        match self {
            Document::Products => "products",
            Document::Attributes => "attributes",
        }
    }
}

impl core::fmt::Display for Document {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure to obtain one upstream document.
///
/// All variants are treated the same by the service.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("malformed document: {0}")]
    Parse(String),
}

/// Source of the two upstream documents.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<RawProduct>, FetchError>;

    async fn fetch_attributes(&self) -> Result<Vec<AttributeDefinition>, FetchError>;
}

#[async_trait]
impl<S> CatalogSource for Arc<S>
where
    S: CatalogSource + ?Sized,
{
    async fn fetch_products(&self) -> Result<Vec<RawProduct>, FetchError> {
        (**self).fetch_products().await
    }

    async fn fetch_attributes(&self) -> Result<Vec<AttributeDefinition>, FetchError> {
        (**self).fetch_attributes().await
    }
}
