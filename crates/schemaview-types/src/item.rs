use crate::value::{display_text, is_truthy};
use crate::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A structured record tagged with a schema.org type name
///
/// Items arrive in two shapes: search results that wrap the schema.org data
/// in a `schema_object` field, and bare schema.org records. Both are accepted
/// by [`Item::from_value`]; a bare record becomes its own schema object.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Item {
    #[serde(rename = "@type")]
    pub item_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_object: Option<Value>,
}

impl Item {
    pub fn new(item_type: impl Into<String>) -> Self {
        Self {
            item_type: item_type.into(),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    pub fn with_schema(mut self, schema_object: Value) -> Self {
        self.schema_object = Some(schema_object);
        self
    }

    /// Build an item from a loosely-shaped JSON record
    ///
    /// The type is read from `@type` or `type` (first entry when it is a
    /// list), falling back to the schema object's own `@type`.
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(mut map) = value else {
            return Err(Error::InvalidItem(format!(
                "expected a JSON object, found {}",
                json_kind(&value)
            )));
        };

        let top_level_type = map.get("@type").or_else(|| map.get("type")).and_then(type_name);
        let name = text_field(&map, "name");
        let url = text_field(&map, "url");
        let site = text_field(&map, "site");
        let description = text_field(&map, "description");
        let explanation = text_field(&map, "explanation");

        let schema_object = match map.remove("schema_object") {
            Some(Value::Null) => None,
            Some(schema) => Some(schema),
            None => Some(Value::Object(map)),
        };

        let mut item = Item {
            item_type: String::new(),
            name,
            url,
            site,
            description,
            explanation,
            schema_object,
        };
        let item_type = top_level_type
            .or_else(|| item.schema().and_then(|s| s.get("@type")).and_then(type_name))
            .unwrap_or_default();
        item.item_type = item_type;

        Ok(item)
    }

    /// Parse a single JSON document into an item
    pub fn from_json(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        Self::from_value(value)
    }

    /// The schema object to read type-specific fields from
    ///
    /// Returns the first object when `schema_object` is a list, and `None`
    /// when it is absent or not an object at all.
    pub fn schema(&self) -> Option<&Value> {
        match self.schema_object.as_ref()? {
            Value::Array(entries) => entries.iter().find(|v| v.is_object()),
            schema @ Value::Object(_) => Some(schema),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for Item {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Item::from_value(value).map_err(serde::de::Error::custom)
    }
}

fn type_name(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(entries) => entries.iter().find_map(|v| v.as_str()).map(str::to_string),
        _ => None,
    }
}

fn text_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).filter(|v| is_truthy(v)).map(display_text)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
