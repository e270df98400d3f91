//! Attribute metadata and value-code resolution.
//!
//! Products reference attributes by code: an axis code (e.g. `color`) mapped
//! to one or more value codes (e.g. `color_red_dark`). Value codes may encode
//! their ancestry with `_` segments; `color_red_dark` is a child of
//! `color_red`. Resolution turns those codes into display names, joining a
//! nested chain root-first: `"Red > Dark"`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::feed::decode_records;

/// Separator placed between ancestor and child names of a nested value.
pub const ATTRIBUTE_SEPARATOR: &str = " > ";

/// Separator between segments of a value code.
const CODE_SEGMENT_SEPARATOR: char = '_';

/// Separator between value codes in a product's attribute field.
const VALUE_CODE_LIST_SEPARATOR: char = ',';

/// A code with more segments than this has a parent (`{axis}_{parent}_{child}`).
const MAX_FLAT_SEGMENTS: usize = 2;

/// One axis of the attribute metadata document (e.g. `color`).
///
/// A `null` name or a `null`/non-array `values` decodes as empty, which makes
/// the definition unusable for resolution rather than invalid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeDefinition {
    pub code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "usable_values")]
    pub values: Vec<AttributeValueDefinition>,
}

/// One value of an axis (e.g. `color_red_dark` → `"Dark"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeValueDefinition {
    pub code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// Human-readable attribute delivered to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedAttribute {
    pub name: String,
    pub value: String,
}

impl ResolvedAttribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Attribute metadata for one request, with resolution helpers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeCatalog {
    definitions: Vec<AttributeDefinition>,
}

impl AttributeCatalog {
    pub fn new(definitions: Vec<AttributeDefinition>) -> Self {
        Self { definitions }
    }

    /// Resolve a single value code of `axis`.
    ///
    /// Returns `None` when the axis or the value is unknown, or when either
    /// resolves to an empty name. If several definitions share the axis code,
    /// the first one producing a result wins.
    pub fn resolve_value(&self, axis: &str, value_code: &str) -> Option<ResolvedAttribute> {
        self.definitions
            .iter()
            .filter(|def| def.code == axis && !def.values.is_empty())
            .find_map(|def| {
                if def.name.is_empty() {
                    return None;
                }
                let value = value_chain(value_code, &def.values)?;
                Some(ResolvedAttribute::new(def.name.clone(), value))
            })
    }

    /// Resolve every code of one axis, dropping the ones that miss.
    pub fn resolve_axis<'a, I>(&self, axis: &str, value_codes: I) -> Vec<ResolvedAttribute>
    where
        I: IntoIterator<Item = &'a str>,
    {
        value_codes
            .into_iter()
            .filter_map(|code| self.resolve_value(axis, code))
            .collect()
    }

    /// Resolve a comma-separated list of value codes for one axis.
    pub fn resolve_csv(&self, axis: &str, value_codes_csv: &str) -> Vec<ResolvedAttribute> {
        self.resolve_axis(axis, value_codes_csv.split(VALUE_CODE_LIST_SEPARATOR))
    }

    /// Concatenate per-axis results, axis first then value order.
    pub fn flatten<I>(per_axis: I) -> Vec<ResolvedAttribute>
    where
        I: IntoIterator<Item = Vec<ResolvedAttribute>>,
    {
        per_axis.into_iter().flatten().collect()
    }

    /// Resolve a product's raw `attributes` object (`axis -> "code,code"`).
    ///
    /// Numbers are read as their decimal text; other non-string values
    /// contribute nothing.
    pub fn resolve_product_attributes(
        &self,
        attributes: &Map<String, JsonValue>,
    ) -> Vec<ResolvedAttribute> {
        let per_axis = attributes.iter().map(|(axis, raw)| match raw {
            JsonValue::String(csv) => self.resolve_csv(axis, csv),
            JsonValue::Number(n) => self.resolve_csv(axis, &n.to_string()),
            _ => Vec::new(),
        });
        Self::flatten(per_axis)
    }
}

/// Display value for `code`, walking up the parent chain for nested codes.
///
/// Names are collected leaf-first and emitted root-first. A missing ancestor
/// leaves an empty segment in the chain and stops the walk.
fn value_chain(code: &str, values: &[AttributeValueDefinition]) -> Option<String> {
    let leaf = find_value(code, values)?;

    let mut segments: Vec<&str> = code.split(CODE_SEGMENT_SEPARATOR).collect();
    let mut names: Vec<&str> = Vec::with_capacity(segments.len());
    names.push(leaf.name.as_str());

    // Each step drops one segment, so this runs at most `segments.len()` times.
    while segments.len() > MAX_FLAT_SEGMENTS {
        segments.pop();
        let parent_code = segments.join("_");
        match find_value(&parent_code, values) {
            Some(parent) => names.push(parent.name.as_str()),
            None => {
                names.push("");
                break;
            }
        }
    }

    names.reverse();
    let chain = names.join(ATTRIBUTE_SEPARATOR);
    (!chain.is_empty()).then_some(chain)
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Value entries that decode; anything else in `values` is dropped.
fn usable_values<'de, D>(deserializer: D) -> Result<Vec<AttributeValueDefinition>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<JsonValue>::deserialize(deserializer)? {
        Some(JsonValue::Array(items)) => decode_records(items).records,
        _ => Vec::new(),
    })
}

fn find_value<'a>(
    code: &str,
    values: &'a [AttributeValueDefinition],
) -> Option<&'a AttributeValueDefinition> {
    values.iter().find(|v| v.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn value(code: &str, name: &str) -> AttributeValueDefinition {
        AttributeValueDefinition {
            code: code.to_string(),
            name: name.to_string(),
        }
    }

    fn test_catalog() -> AttributeCatalog {
        AttributeCatalog::new(vec![
            AttributeDefinition {
                code: "color".to_string(),
                name: "Color".to_string(),
                values: vec![
                    value("color_red", "Red"),
                    value("color_red_dark", "Dark"),
                    value("color_red_dark_wine", "Wine"),
                    value("color_blue", "Blue"),
                    value("color_green_light", "Light"),
                    value("color_red_x_y", "Y"),
                ],
            },
            AttributeDefinition {
                code: "size".to_string(),
                name: "Size".to_string(),
                values: vec![value("size_m", "M"), value("size_l", "L")],
            },
        ])
    }

    #[test]
    fn flat_value_resolves_to_bare_name() {
        let resolved = test_catalog().resolve_value("size", "size_m").unwrap();
        assert_eq!(resolved, ResolvedAttribute::new("Size", "M"));
    }

    #[test]
    fn nested_value_joins_parent_then_child() {
        let resolved = test_catalog().resolve_value("color", "color_red_dark").unwrap();
        assert_eq!(resolved.name, "Color");
        assert_eq!(resolved.value, "Red > Dark");
    }

    #[test]
    fn deeply_nested_value_walks_every_ancestor() {
        let resolved = test_catalog()
            .resolve_value("color", "color_red_dark_wine")
            .unwrap();
        assert_eq!(resolved.value, "Red > Dark > Wine");
    }

    #[test]
    fn missing_ancestor_leaves_empty_segment() {
        let resolved = test_catalog()
            .resolve_value("color", "color_green_light")
            .unwrap();
        assert_eq!(resolved.value, " > Light");
    }

    #[test]
    fn walk_stops_at_first_missing_ancestor() {
        // `color_red_x` is absent, so `color_red` is never reached.
        let resolved = test_catalog()
            .resolve_value("color", "color_red_x_y")
            .unwrap();
        assert_eq!(resolved.value, " > Y");
    }

    #[test]
    fn unknown_axis_or_value_resolves_to_nothing() {
        let catalog = test_catalog();
        assert_eq!(catalog.resolve_value("material", "material_wool"), None);
        assert_eq!(catalog.resolve_value("color", "color_purple"), None);
        assert_eq!(catalog.resolve_value("size", "color_red"), None);
    }

    #[test]
    fn empty_axis_name_or_empty_values_resolve_to_nothing() {
        let catalog = AttributeCatalog::new(vec![
            AttributeDefinition {
                code: "cat".to_string(),
                name: String::new(),
                values: vec![value("cat_a", "A")],
            },
            AttributeDefinition {
                code: "tag".to_string(),
                name: "Tag".to_string(),
                values: vec![value("tag_x", "")],
            },
        ]);

        assert_eq!(catalog.resolve_value("cat", "cat_a"), None);
        assert_eq!(catalog.resolve_value("tag", "tag_x"), None);
    }

    #[test]
    fn duplicate_axis_definitions_fall_through_to_first_match() {
        let catalog = AttributeCatalog::new(vec![
            AttributeDefinition {
                code: "size".to_string(),
                name: "Size".to_string(),
                values: Vec::new(),
            },
            AttributeDefinition {
                code: "size".to_string(),
                name: "Size (EU)".to_string(),
                values: vec![value("size_40", "40")],
            },
        ]);

        let resolved = catalog.resolve_value("size", "size_40").unwrap();
        assert_eq!(resolved.name, "Size (EU)");
    }

    #[test]
    fn csv_keeps_input_order_and_drops_misses() {
        let resolved = test_catalog().resolve_csv("color", "color_blue,color_unknown,color_red");
        let values: Vec<_> = resolved.iter().map(|a| a.value.as_str()).collect();
        assert_eq!(values, vec!["Blue", "Red"]);
    }

    #[test]
    fn product_attributes_flatten_axis_then_value() {
        let raw = json!({
            "size": "size_l",
            "material": "material_wool",
            "color": "color_red_dark,color_blue",
        });

        let resolved = test_catalog().resolve_product_attributes(raw.as_object().unwrap());

        assert_eq!(
            resolved,
            vec![
                ResolvedAttribute::new("Size", "L"),
                ResolvedAttribute::new("Color", "Red > Dark"),
                ResolvedAttribute::new("Color", "Blue"),
            ]
        );
    }

    #[test]
    fn non_string_attribute_values_are_ignored_or_stringified() {
        let catalog = AttributeCatalog::new(vec![AttributeDefinition {
            code: "year".to_string(),
            name: "Year".to_string(),
            values: vec![value("2024", "2024")],
        }]);
        let raw = json!({ "year": 2024, "flags": ["a"], "none": null });

        let resolved = catalog.resolve_product_attributes(raw.as_object().unwrap());
        assert_eq!(resolved, vec![ResolvedAttribute::new("Year", "2024")]);
    }

    #[test]
    fn definitions_deserialize_with_missing_optional_fields() {
        let defs: Vec<AttributeDefinition> = serde_json::from_value(json!([
            { "code": "color", "name": "Color", "values": [{ "code": "color_red", "name": "Red" }] },
            { "code": "bare" },
            { "code": "nulls", "name": null, "values": null },
            { "code": "odd", "name": "Odd", "values": [{ "code": "odd_a", "name": null }, 7, { "name": "no code" }] }
        ]))
        .unwrap();

        assert_eq!(defs.len(), 4);
        assert!(defs[1].values.is_empty());
        assert!(defs[1].name.is_empty());
        assert!(defs[2].values.is_empty() && defs[2].name.is_empty());
        assert_eq!(defs[3].values, vec![value("odd_a", "")]);
    }
}
