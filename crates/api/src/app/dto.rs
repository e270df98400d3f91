use serde::Serialize;

use shopfront_core::PageRequest;

// -------------------------
// Request DTOs
// -------------------------

/// Raw `page_size` / `page` query values; coercion happens in [`PageRequest`].
#[derive(Debug, Default)]
pub struct ListProductsQuery {
    pub page_size: Option<String>,
    pub page: Option<String>,
}

impl ListProductsQuery {
    /// Collect from decoded query pairs. A repeated key keeps its last value;
    /// unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        pairs.into_iter().fold(Self::default(), |mut query, (key, value)| {
            match key.as_str() {
                "page_size" => query.page_size = Some(value),
                "page" => query.page = Some(value),
                _ => {}
            }
            query
        })
    }

    pub fn to_page_request(&self) -> PageRequest {
        PageRequest::from_query(self.page_size.as_deref(), self.page.as_deref())
    }
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub service: &'static str,
    pub version: &'static str,
}

impl ServiceInfo {
    pub fn current() -> Self {
        Self {
            service: "shopfront",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn last_repeated_key_wins() {
        let query = ListProductsQuery::from_pairs(pairs(&[
            ("page", "1"),
            ("page_size", "3"),
            ("page", "4"),
            ("sort", "name"),
        ]));

        assert_eq!(query.page.as_deref(), Some("4"));
        assert_eq!(query.to_page_request(), PageRequest::new(3, 4));
    }

    #[test]
    fn no_pairs_means_defaults() {
        let query = ListProductsQuery::from_pairs(Vec::new());
        assert_eq!(query.to_page_request(), PageRequest::default());
    }
}
