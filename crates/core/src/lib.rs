//! `shopfront-core` — shared building blocks for the catalog facade.
//!
//! This crate contains **pure** primitives (no IO, no HTTP).

pub mod error;
pub mod id;
pub mod page;

pub use error::{CatalogError, CatalogResult, ErrorResult, UPSTREAM_ERROR_MESSAGE};
pub use id::ProductId;
pub use page::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, PageRequest};
