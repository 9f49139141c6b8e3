//! Company sanction record as served by `sanction/company/{id}/`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A company placed under sanctions.
///
/// Every field is optional: the backend omits or nulls whatever it does not
/// know. Free-text fields also accept numbers, which some registries use for
/// taxpayer and registration numbers.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CompanySanction {
    #[serde(deserialize_with = "identifier")]
    pub id: Option<String>,
    #[serde(deserialize_with = "text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "text")]
    pub name_original: Option<String>,
    #[serde(deserialize_with = "text")]
    pub taxpayer_number: Option<String>,
    #[serde(deserialize_with = "text")]
    pub registration_number: Option<String>,
    #[serde(deserialize_with = "text")]
    pub address: Option<String>,
    /// Localized-name object, e.g. `{ "name_en": "...", "name_uk": "..." }`.
    pub country_of_registration: Option<Value>,
    #[serde(deserialize_with = "text")]
    pub registration_date: Option<String>,
    #[serde(deserialize_with = "text")]
    pub start_date: Option<String>,
    #[serde(deserialize_with = "text")]
    pub end_date: Option<String>,
    #[serde(deserialize_with = "text")]
    pub reasoning_date: Option<String>,
    #[serde(deserialize_with = "text")]
    pub updated_at: Option<String>,
    #[serde(deserialize_with = "text")]
    pub reasoning: Option<String>,
    #[serde(deserialize_with = "text")]
    pub additional_info: Option<String>,
    #[serde(deserialize_with = "text")]
    pub cancellation_condition: Option<String>,
    #[serde(deserialize_with = "text")]
    pub decree: Option<String>,
    #[serde(deserialize_with = "labels")]
    pub types_of_sanctions: Vec<String>,
}

impl CompanySanction {
    /// Decode a response object. Unknown keys are ignored.
    pub fn from_object(
        object: serde_json::Map<String, Value>,
    ) -> Result<Self, serde_json::Error> {
        serde_json::from_value(Value::Object(object))
    }
}

/// Value for fields where falsy backend values (`""`, `0`, `false`, `null`)
/// mean "not set".
fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| match value {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Number(n) if !is_zero(&n) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }))
}

/// Like [`text`], but keeps zero: `0` is a valid record id.
fn identifier<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }))
}

fn labels<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let value = Option::<Vec<Value>>::deserialize(deserializer)?;
    Ok(value
        .unwrap_or_default()
        .into_iter()
        .filter_map(|label| match label {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
        .collect())
}

fn is_zero(n: &serde_json::Number) -> bool {
    n.as_f64() == Some(0.0)
}
