//! Catalog domain module.
//!
//! This crate contains the transform pipeline for the upstream catalog:
//! attribute resolution, pagination and product assembly, implemented purely
//! as deterministic logic (no IO, no HTTP).

pub mod attribute;
pub mod feed;
pub mod pagination;
pub mod product;
pub mod snapshot;

pub use attribute::{
    ATTRIBUTE_SEPARATOR, AttributeCatalog, AttributeDefinition, AttributeValueDefinition,
    ResolvedAttribute,
};
pub use feed::{Decoded, decode_records};
pub use pagination::{Page, force_valid_page, page_index, paginate, total_pages};
pub use product::{ProductCatalog, ProductListResult, RawProduct, ResolvedProduct};
pub use snapshot::CatalogSnapshot;
