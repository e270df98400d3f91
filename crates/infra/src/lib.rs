//! Infrastructure layer: configuration, upstream catalog clients, services.

pub mod config;
pub mod external;
pub mod service;

pub use config::{AppConfig, ConfigError, ServerConfig, UpstreamConfig};
pub use external::{CatalogSource, Document, FetchError, HttpCatalogSource, InMemoryCatalogSource};
pub use service::CatalogService;
