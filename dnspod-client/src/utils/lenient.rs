//! 宽松标量反序列化
//!
//! DNSPod 在不同接口中会把同一个值序列化为 JSON 数字或 JSON 字符串
//! （例如 `"id": 2238269` 与 `"id": "2238269"`）。这里统一规范为文本。

use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

/// A JSON scalar whose wire type the provider does not keep stable.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum LooseValue {
    /// JSON string.
    Text(String),
    /// JSON number.
    Number(Number),
    /// Anything else (`null`, booleans, arrays, objects).
    Other(Value),
}

impl Default for LooseValue {
    fn default() -> Self {
        Self::Other(Value::Null)
    }
}

impl LooseValue {
    /// The value when it is a JSON string, `None` for every other shape.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Canonical text form.
    ///
    /// Strings pass through, numbers render in decimal, booleans as
    /// `true`/`false` and `null` as the empty string. Arrays and objects have
    /// no text form.
    pub fn into_canonical_text(self) -> Option<String> {
        match self {
            Self::Text(s) => Some(s),
            Self::Number(n) => Some(n.to_string()),
            Self::Other(Value::Bool(b)) => Some(b.to_string()),
            Self::Other(Value::Null) => Some(String::new()),
            Self::Other(_) => None,
        }
    }
}

/// `deserialize_with` helper: string or number into `String`.
///
/// Combine with `#[serde(default)]` so an absent key also yields `""`.
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match LooseValue::deserialize(deserializer)? {
        LooseValue::Other(other @ (Value::Array(_) | Value::Object(_))) => Err(Error::custom(
            format!("expected text or number, got {other}"),
        )),
        value => Ok(value.into_canonical_text().unwrap_or_default()),
    }
}

/// `deserialize_with` helper: number or numeric string into `i64`.
///
/// Empty strings and `null` count as zero.
pub fn integer<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match LooseValue::deserialize(deserializer)? {
        LooseValue::Number(n) => n
            .as_i64()
            .ok_or_else(|| Error::custom(format!("integer out of range: {n}"))),
        LooseValue::Text(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(0);
            }
            trimmed
                .parse()
                .map_err(|e| Error::custom(format!("invalid integer '{s}': {e}")))
        }
        LooseValue::Other(Value::Null) => Ok(0),
        LooseValue::Other(other) => Err(Error::custom(format!(
            "expected integer or numeric text, got {other}"
        ))),
    }
}
