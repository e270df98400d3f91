//! Record-by-record decoding of upstream documents.

use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

/// Records that decoded, and how many did not.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded<T> {
    pub records: Vec<T>,
    pub skipped: usize,
}

/// Decode each element of a document array on its own.
///
/// A record of the wrong shape is skipped instead of failing the document.
pub fn decode_records<T: DeserializeOwned>(raw: Vec<JsonValue>) -> Decoded<T> {
    let total = raw.len();
    let records: Vec<T> = raw
        .into_iter()
        .filter_map(|record| serde_json::from_value(record).ok())
        .collect();

    Decoded {
        skipped: total - records.len(),
        records,
    }
}
