use crate::attribute::{AttributeCatalog, AttributeDefinition};
use crate::product::RawProduct;

/// Upstream documents fetched for a single request.
///
/// A snapshot is built per call and dropped with it; nothing is shared
/// between requests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogSnapshot {
    products: Vec<RawProduct>,
    attributes: AttributeCatalog,
}

impl CatalogSnapshot {
    pub fn new(products: Vec<RawProduct>, definitions: Vec<AttributeDefinition>) -> Self {
        Self {
            products,
            attributes: AttributeCatalog::new(definitions),
        }
    }

    pub fn products(&self) -> &[RawProduct] {
        &self.products
    }

    pub fn attributes(&self) -> &AttributeCatalog {
        &self.attributes
    }
}
