use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use shopfront_core::{PageRequest, ProductId};

use crate::attribute::ResolvedAttribute;
use crate::pagination::paginate;
use crate::snapshot::CatalogSnapshot;

/// Product record as published by the upstream feed.
///
/// `id` and `name` are echoed exactly as published, whatever their type.
/// `attributes` maps axis codes to comma-separated value codes; it may be
/// absent or of an unexpected shape. Any other fields are kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawProduct {
    #[serde(default)]
    pub id: JsonValue,
    #[serde(default)]
    pub name: JsonValue,
    #[serde(default)]
    pub attributes: Option<JsonValue>,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

impl RawProduct {
    /// Integer id of the record. Records without one are still listed but
    /// never match a lookup by id.
    pub fn product_id(&self) -> Option<ProductId> {
        self.id.as_i64().map(ProductId::new)
    }

    /// The attribute object, if present, object-shaped and non-empty.
    pub fn attribute_map(&self) -> Option<&Map<String, JsonValue>> {
        self.attributes
            .as_ref()
            .and_then(JsonValue::as_object)
            .filter(|map| !map.is_empty())
    }
}

/// Product with its coded attributes replaced by display pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedProduct {
    pub id: JsonValue,
    pub name: JsonValue,
    pub attributes: Vec<ResolvedAttribute>,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

/// One page of resolved products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductListResult {
    pub products: Vec<ResolvedProduct>,
    pub page: usize,
    #[serde(rename = "totalPages")]
    pub total_pages: usize,
}

/// Listing and lookup over one [`CatalogSnapshot`].
#[derive(Debug, Clone, Copy)]
pub struct ProductCatalog<'a> {
    snapshot: &'a CatalogSnapshot,
}

impl<'a> ProductCatalog<'a> {
    pub fn new(snapshot: &'a CatalogSnapshot) -> Self {
        Self { snapshot }
    }

    /// Select the requested page (clamped to the available range) and
    /// resolve the attributes of its products.
    pub fn list(&self, request: PageRequest) -> ProductListResult {
        let page = paginate(self.snapshot.products(), request.page_size(), request.page());

        ProductListResult {
            products: page.items.iter().map(|p| self.resolve(p)).collect(),
            page: page.page,
            total_pages: page.total_pages,
        }
    }

    /// First product whose id equals `id`, resolved.
    pub fn get(&self, id: ProductId) -> Option<ResolvedProduct> {
        self.snapshot
            .products()
            .iter()
            .find(|p| p.product_id() == Some(id))
            .map(|p| self.resolve(p))
    }

    pub fn resolve(&self, product: &RawProduct) -> ResolvedProduct {
        let attributes = product
            .attribute_map()
            .map(|map| self.snapshot.attributes().resolve_product_attributes(map))
            .unwrap_or_default();

        ResolvedProduct {
            id: product.id.clone(),
            name: product.name.clone(),
            attributes,
            extra: product.extra.clone(),
        }
    }
}
