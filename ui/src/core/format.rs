//! Formatting helpers shared by dataset views.

use serde_json::Value;
use time::{format_description::well_known::Rfc3339, macros::format_description, Date, OffsetDateTime};

/// Render a backend date for display.
///
/// Accepts RFC 3339 timestamps and plain `YYYY-MM-DD` dates and shows the
/// calendar date. Anything else is shown verbatim so odd backend values stay
/// visible instead of disappearing.
pub fn render_date(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return String::new();
    };

    let date = OffsetDateTime::parse(raw, &Rfc3339)
        .map(|ts| ts.date())
        .or_else(|_| Date::parse(raw, &format_description!("[year]-[month]-[day]")));

    match date {
        Ok(date) => date
            .format(&format_description!("[year]-[month]-[day]"))
            .unwrap_or_else(|_| raw.to_string()),
        Err(_) => raw.to_string(),
    }
}

/// Pick the `field` value matching `lang` out of a localized backend object.
///
/// Lookup order: `{field}_{lang}`, `{field}`, `{field}_en`, then the first
/// non-empty `{field}_*` entry. Plain strings are returned as they are.
pub fn localized_field(value: &Value, field: &str, lang: &str) -> Option<String> {
    let object = match value {
        Value::String(text) => return non_empty(text),
        Value::Object(object) => object,
        _ => return None,
    };

    let text_at = |key: &str| object.get(key).and_then(Value::as_str).and_then(non_empty);

    text_at(&format!("{field}_{lang}"))
        .or_else(|| text_at(field))
        .or_else(|| text_at(&format!("{field}_en")))
        .or_else(|| {
            let prefix = format!("{field}_");
            object
                .iter()
                .filter(|(key, _)| key.starts_with(&prefix))
                .find_map(|(_, value)| value.as_str().and_then(non_empty))
        })
}

fn non_empty(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}
