//! Conversion kinds, and JSON ⇄ YAML conversion.
//!
//! [`Conversion`] covers every direction the editor offers; the CSV ones
//! live in [`crate::delimited`].
//!
//! JSON → YAML is a direct re-serialization: `serde_json` keeps object key
//! order (`preserve_order`) and `serde_yaml` emits block style.
//!
//! YAML → JSON needs a mapping step because YAML is the richer format:
//!
//! | YAML                      | JSON                               |
//! |---------------------------|------------------------------------|
//! | scalar key `1`, `true`, `~` | string key `"1"`, `"true"`, `"null"` |
//! | sequence or mapping key   | error                              |
//! | `!tag value`              | `value` (tag dropped)              |
//! | `.nan`, `.inf`            | `null`                             |

use serde_json::Value as Json;
use serde_yaml::Value as Yaml;

use crate::delimited::{csv_to_json, json_to_csv};
use crate::error::{Error, Result};

/// A conversion direction, as offered to the host editor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Conversion {
    JsonToYaml,
    YamlToJson,
    CsvToJson,
    JsonToCsv,
}

impl Conversion {
    /// Output when the selection is empty.
    #[must_use]
    pub const fn empty_message(self) -> &'static str {
        match self {
            Self::JsonToYaml | Self::JsonToCsv => "No JSON data selected for conversion.",
            Self::YamlToJson => "No YAML data selected for conversion.",
            Self::CsvToJson => "No CSV data selected for conversion.",
        }
    }

    /// Convert `input`.
    ///
    /// # Errors
    ///
    /// Returns an error if `input` does not parse in the source format or
    /// cannot be represented in the target format.
    pub fn convert(self, input: &str) -> Result<String> {
        match self {
            Self::JsonToYaml => json_to_yaml(input),
            Self::YamlToJson => yaml_to_json(input),
            Self::CsvToJson => csv_to_json(input),
            Self::JsonToCsv => json_to_csv(input),
        }
    }

    /// Run the filter: converted text, the empty-selection message, or the
    /// error message. Never fails.
    #[must_use]
    pub fn run(self, input: &str) -> String {
        if input.is_empty() {
            return self.empty_message().to_string();
        }
        match self.convert(input) {
            Ok(out) => out,
            Err(e) => {
                log::warn!("{self:?}: {e}");
                e.to_string()
            }
        }
    }
}

/// Parse JSON and emit block-style YAML, keeping key order.
///
/// # Errors
///
/// [`Error::Json`] if `input` is not valid JSON.
pub fn json_to_yaml(input: &str) -> Result<String> {
    let value: Json = serde_json::from_str(input)?;
    Ok(serde_yaml::to_string(&value)?)
}

/// Parse YAML and emit JSON pretty-printed with two-space indentation.
///
/// Non-ASCII text is written as is, not `\u` escaped.
///
/// # Errors
///
/// [`Error::Yaml`] if `input` is not valid YAML, [`Error::UnsupportedKey`]
/// if a mapping uses a list or map as a key.
pub fn yaml_to_json(input: &str) -> Result<String> {
    let value: Yaml = serde_yaml::from_str(input)?;
    let json = to_json(value)?;
    Ok(serde_json::to_string_pretty(&json)?)
}

fn to_json(value: Yaml) -> Result<Json> {
    Ok(match value {
        Yaml::Null => Json::Null,
        Yaml::Bool(b) => Json::Bool(b),
        Yaml::Number(n) => number_to_json(&n),
        Yaml::String(s) => Json::String(s),
        Yaml::Sequence(items) => {
            Json::Array(items.into_iter().map(to_json).collect::<Result<_>>()?)
        }
        Yaml::Mapping(map) => {
            let mut object = serde_json::Map::with_capacity(map.len());
            for (key, value) in map {
                object.insert(key_to_string(key)?, to_json(value)?);
            }
            Json::Object(object)
        }
        Yaml::Tagged(tagged) => to_json(tagged.value)?,
    })
}

fn number_to_json(n: &serde_yaml::Number) -> Json {
    if let Some(i) = n.as_i64() {
        Json::from(i)
    } else if let Some(u) = n.as_u64() {
        Json::from(u)
    } else {
        n.as_f64()
            .and_then(serde_json::Number::from_f64)
            .map_or(Json::Null, Json::Number)
    }
}

fn key_to_string(key: Yaml) -> Result<String> {
    match key {
        Yaml::String(s) => Ok(s),
        Yaml::Null => Ok("null".to_string()),
        Yaml::Bool(b) => Ok(b.to_string()),
        Yaml::Number(n) => Ok(n.to_string()),
        Yaml::Tagged(tagged) => key_to_string(tagged.value),
        Yaml::Sequence(_) => Err(Error::UnsupportedKey("sequence")),
        Yaml::Mapping(_) => Err(Error::UnsupportedKey("mapping")),
    }
}
