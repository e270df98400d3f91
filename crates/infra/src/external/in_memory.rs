use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use shopfront_catalog::{AttributeDefinition, RawProduct};

use super::{CatalogSource, FetchError};

/// In-memory catalog source for tests/dev.
///
/// Each document can be swapped or made to fail at any time; fetch counters
/// show how often the service actually went to the source.
#[derive(Debug)]
pub struct InMemoryCatalogSource {
    products: RwLock<Result<Vec<RawProduct>, FetchError>>,
    attributes: RwLock<Result<Vec<AttributeDefinition>, FetchError>>,
    product_fetches: AtomicUsize,
    attribute_fetches: AtomicUsize,
}

impl InMemoryCatalogSource {
    pub fn new(products: Vec<RawProduct>, attributes: Vec<AttributeDefinition>) -> Self {
        Self {
            products: RwLock::new(Ok(products)),
            attributes: RwLock::new(Ok(attributes)),
            product_fetches: AtomicUsize::new(0),
            attribute_fetches: AtomicUsize::new(0),
        }
    }

    pub fn set_products(&self, products: Result<Vec<RawProduct>, FetchError>) {
        *self.products.write().unwrap_or_else(|e| e.into_inner()) = products;
    }

    pub fn set_attributes(&self, attributes: Result<Vec<AttributeDefinition>, FetchError>) {
        *self.attributes.write().unwrap_or_else(|e| e.into_inner()) = attributes;
    }

    pub fn product_fetches(&self) -> usize {
        self.product_fetches.load(Ordering::SeqCst)
    }

    pub fn attribute_fetches(&self) -> usize {
        self.attribute_fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogSource for InMemoryCatalogSource {
    async fn fetch_products(&self) -> Result<Vec<RawProduct>, FetchError> {
        self.product_fetches.fetch_add(1, Ordering::SeqCst);
        self.products
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    async fn fetch_attributes(&self) -> Result<Vec<AttributeDefinition>, FetchError> {
        self.attribute_fetches.fetch_add(1, Ordering::SeqCst);
        self.attributes
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}
