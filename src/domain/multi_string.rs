use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use tracing::trace;

use crate::utils::error::{Result, RtbError};

/// A string field that tolerates unquoted numeric input.
///
/// Some exchanges send identifier fields (campaign IDs in particular) as
/// bare numbers rather than strings. `MultiString` accepts either form and
/// always holds text; it serializes back as a plain JSON string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiString(String);

impl MultiString {
    /// Decodes one parsed JSON scalar. Strings are stored verbatim; numbers
    /// are formatted with the fewest digits that still round-trip. Any other
    /// shape is an [`RtbError::UnknownType`].
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(Self(s)),
            Value::Number(n) => {
                let text = format_number(&n);
                trace!(%text, "numeric scalar coerced to string");
                Ok(Self(text))
            }
            other => Err(RtbError::UnknownType {
                kind: json_kind(&other),
            }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for MultiString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for MultiString {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for MultiString {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for MultiString {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(D::Error::custom)
    }
}

impl Serialize for MultiString {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

// Integers keep their exact digits; floats use the shortest representation
// that parses back to the same f64, with no exponent.
fn format_number(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        n.as_f64().unwrap_or_default().to_string()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
