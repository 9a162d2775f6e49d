//! JSON Normalizer — the trust boundary between raw model text and typed pipeline data.
//!
//! `parse_json` turns model output into a `serde_json::Value`; the typed adapters
//! (`JobPostings::from_value`, `Resume::from_value`) then check the value against the
//! shape the rest of the pipeline relies on.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("model output is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("model output does not match the {what} schema: {reason}")]
    Schema { what: &'static str, reason: String },
}

/// Parses model output as JSON. A single surrounding Markdown code fence is tolerated;
/// anything else around the JSON (a preamble, trailing commentary) is an error.
pub fn parse_json(content: &str) -> Result<Value, NormalizeError> {
    let text = strip_json_fences(content);
    Ok(serde_json::from_str(text)?)
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

/// Short name of a JSON value's type, for schema error messages.
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Forgiving field deserializers for model-produced JSON.
pub mod lenient {
    use serde::de::{Deserialize, Deserializer, Error};
    use serde_json::Value;

    /// A string, or a number/boolean rendered as text. Null and missing are errors.
    pub fn required_string<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(s),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            other => Err(D::Error::custom(format!(
                "expected a string, got {}",
                super::kind_of(&other)
            ))),
        }
    }

    /// Like `required_string`, but null or blank become `None`.
    pub fn optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(None),
            Value::String(s) if s.trim().is_empty() => Ok(None),
            Value::String(s) => Ok(Some(s)),
            Value::Number(n) => Ok(Some(n.to_string())),
            Value::Bool(b) => Ok(Some(b.to_string())),
            other => Err(D::Error::custom(format!(
                "expected a string, got {}",
                super::kind_of(&other)
            ))),
        }
    }

    /// A list of strings. A single comma-separated string is split; null is empty;
    /// scalar items are rendered as text and null items skipped.
    pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(Vec::new()),
            Value::String(s) => Ok(s
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(String::from)
                .collect()),
            Value::Array(items) => items
                .into_iter()
                .filter(|item| !item.is_null())
                .map(|item| match item {
                    Value::String(s) => Ok(s),
                    Value::Number(n) => Ok(n.to_string()),
                    Value::Bool(b) => Ok(b.to_string()),
                    other => Err(D::Error::custom(format!(
                        "expected a list of strings, found {}",
                        super::kind_of(&other)
                    ))),
                })
                .collect(),
            other => Err(D::Error::custom(format!(
                "expected a list of strings, got {}",
                super::kind_of(&other)
            ))),
        }
    }

    /// Treats an explicit null like a missing field.
    pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + Default,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }
}
