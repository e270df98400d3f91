use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use shopfront_catalog::{AttributeDefinition, RawProduct, decode_records};

use super::{CatalogSource, Document, FetchError};
use crate::config::UpstreamConfig;

/// Fetches both documents over HTTP GET.
///
/// Anything other than `200 OK` with a JSON array body is a [`FetchError`].
/// Array elements that do not fit the record type are skipped. No retries.
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    client: reqwest::Client,
    products_url: String,
    attributes_url: String,
}

impl HttpCatalogSource {
    pub fn new(config: &UpstreamConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self::with_client(
            client,
            config.products_url.clone(),
            config.attributes_url.clone(),
        ))
    }

    pub fn with_client(client: reqwest::Client, products_url: String, attributes_url: String) -> Self {
        Self {
            client,
            products_url,
            attributes_url,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, document: Document, url: &str) -> Result<T, FetchError> {
        tracing::debug!("fetching {} document from {}", document, url);

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if resp.status() != StatusCode::OK {
            return Err(FetchError::Status(resp.status().as_u16()));
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| FetchError::Parse(e.to_string()))
    }

    async fn get_records<T: DeserializeOwned>(&self, document: Document, url: &str) -> Result<Vec<T>, FetchError> {
        let raw: Vec<JsonValue> = self.get_json(document, url).await?;
        let decoded = decode_records(raw);

        if decoded.skipped > 0 {
            tracing::warn!(
                "skipped {} malformed record(s) in {} document",
                decoded.skipped,
                document
            );
        }

        Ok(decoded.records)
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_products(&self) -> Result<Vec<RawProduct>, FetchError> {
        self.get_records(Document::Products, &self.products_url).await
    }

    async fn fetch_attributes(&self) -> Result<Vec<AttributeDefinition>, FetchError> {
        self.get_records(Document::Attributes, &self.attributes_url).await
    }
}
