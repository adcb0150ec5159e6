//! Lenient field decoders for browser forms.
//!
//! A field holding the wrong JSON type decodes to "absent" instead of failing
//! the whole body, so validation can still report every field at once.

use serde::{Deserialize, Deserializer, de::IgnoredAny};

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose<T> {
    Value(T),
    Other(IgnoredAny),
}

fn loose<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(match Option::<Loose<T>>::deserialize(deserializer)? {
        Some(Loose::Value(value)) => Some(value),
        Some(Loose::Other(_)) | None => None,
    })
}

/// Only a JSON `true` or `false` is kept. `"on"`, `1` or `null` decode to `None`.
pub fn flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    loose(deserializer)
}

/// Like [`flag`] but collapses to `false`.
pub fn flag_or_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(flag(deserializer)?.unwrap_or_default())
}

pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(loose(deserializer)?.unwrap_or_default())
}

pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    loose(deserializer)
}
