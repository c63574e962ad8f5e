/// Configuration document: data model, schema normalization, canonical text
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Fixed key the configuration document is stored under.
pub const STORAGE_KEY: &str = "pathmarks";

/// A named shortcut to a path on the current site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pathmark {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub path: String,
}

/// A named alternate origin for the same site (e.g. staging vs. production).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub origin: String,
}

/// The single persisted configuration document.
///
/// Two stored shapes are accepted for backward compatibility: the legacy
/// bare array of pathmarks, and the current `{ pathmarks, envs? }` object.
/// After normalization `pathmarks` is always present, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub pathmarks: Vec<Pathmark>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub envs: Vec<Environment>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("configuration must be an array or an object with a `pathmarks` array")]
    Shape,

    #[error("storage write failed: {0}")]
    Storage(String),
}

/// Validate a raw document and normalize it into a `Config`.
///
/// The only document-level gate is "the value yields an array `pathmarks`":
/// a bare array is that array, an object may omit `pathmarks` entirely, but
/// a `pathmarks` of any other type rejects the document. Individual entries
/// are never rejected, see `pathmark_from`.
pub fn validate(raw: &Value) -> Result<Config, ConfigError> {
    match raw {
        Value::Array(items) => Ok(Config {
            pathmarks: items.iter().map(pathmark_from).collect(),
            envs: Vec::new(),
        }),
        Value::Object(fields) => {
            let pathmarks = match fields.get("pathmarks") {
                None => Vec::new(),
                Some(Value::Array(items)) => items.iter().map(pathmark_from).collect(),
                Some(_) => return Err(ConfigError::Shape),
            };
            Ok(Config {
                pathmarks,
                envs: envs_from(fields),
            })
        }
        _ => Err(ConfigError::Shape),
    }
}

/// Best-effort normalization for the load path; never fails. Whatever
/// `validate` rejects degrades to the recoverable parts of the document,
/// so malformed stored data still resolves to a usable config.
pub fn normalize(raw: &Value) -> Config {
    validate(raw).unwrap_or_else(|_| match raw {
        Value::Object(fields) => Config {
            pathmarks: Vec::new(),
            envs: envs_from(fields),
        },
        _ => Config::default(),
    })
}

/// The editor's live-validation gate: the text parses as JSON and passes
/// the document shape check.
pub fn check_document(text: &str) -> Result<Config, ConfigError> {
    let raw: Value = serde_json::from_str(text)?;
    validate(&raw)
}

/// Canonical text form of a document: pretty-printed, 2-space indent.
/// The options editor displays and edits this text, not the parsed value.
pub fn to_canonical_text(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// The document a fresh install starts from.
pub fn default_document() -> Value {
    serde_json::json!({ "pathmarks": [] })
}

fn envs_from(fields: &serde_json::Map<String, Value>) -> Vec<Environment> {
    match fields.get("envs") {
        Some(Value::Array(items)) => items.iter().map(environment_from).collect(),
        _ => Vec::new(),
    }
}

// Missing or wrongly-typed fields degrade to empty strings. A broken entry
// must never reject the rest of the document.
fn pathmark_from(entry: &Value) -> Pathmark {
    Pathmark {
        title: string_field(entry, "title"),
        path: string_field(entry, "path"),
    }
}

fn environment_from(entry: &Value) -> Environment {
    Environment {
        label: string_field(entry, "label"),
        origin: string_field(entry, "origin"),
    }
}

fn string_field(entry: &Value, field: &str) -> String {
    entry
        .get(field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
