//! Forgiving field decoders for externally produced records.
//!
//! Records arrive from forms, imports and language-model output, so field
//! types drift. Every decoder here accepts any JSON shape and coerces what it
//! cannot use to an empty value instead of failing the record.

use crate::model::records::RecordId;
use serde::de::{Deserializer, IgnoredAny};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseText {
    Text(String),
    Other(IgnoredAny),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseNumber {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseList {
    Many(Vec<LooseText>),
    One(String),
    Other(IgnoredAny),
}

/// Non-blank string, otherwise `None`.
pub(crate) fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match LooseText::deserialize(deserializer)? {
        LooseText::Text(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    })
}

/// String content, otherwise empty.
pub(crate) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_text(deserializer)?.unwrap_or_default())
}

/// Finite number or numeric string, otherwise `None`.
pub(crate) fn optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match LooseNumber::deserialize(deserializer)? {
        LooseNumber::Number(value) => Some(value),
        LooseNumber::Text(value) => value.trim().parse::<f64>().ok(),
        LooseNumber::Other(_) => None,
    };
    Ok(value.filter(|number| number.is_finite()))
}

/// Epoch-millisecond timestamp, otherwise `None`.
pub(crate) fn optional_timestamp<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_number(deserializer)?.map(|value| value.trunc() as i64))
}

/// List of non-blank strings.
///
/// A single string is split on commas; non-string items are dropped.
pub(crate) fn text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = match LooseList::deserialize(deserializer)? {
        LooseList::Many(items) => items
            .into_iter()
            .filter_map(|item| match item {
                LooseText::Text(value) => Some(value),
                LooseText::Other(_) => None,
            })
            .collect(),
        LooseList::One(value) => value.split(',').map(str::to_string).collect(),
        LooseList::Other(_) => Vec::new(),
    };
    Ok(values
        .into_iter()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .collect())
}

/// Record reference, `None` when absent or not a valid UUID.
pub(crate) fn optional_record_id<'de, D>(deserializer: D) -> Result<Option<RecordId>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_text(deserializer)?.and_then(|value| Uuid::parse_str(value.trim()).ok()))
}
