//! Raw, unvalidated configuration shapes.
//!
//! Every field is optional: these types mirror whatever the document
//! contained and are only turned into a [`crate::tree::Verb`] by the
//! validator. Field names are matched case-insensitively.

use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Deserialize, Debug, Clone, Default)]
pub struct RawConfig {
    pub verbs: Option<Vec<RawVerb>>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct RawVerb {
    pub name: Option<String>,
    pub description: Option<String>,
    pub verbs: Option<Vec<RawVerb>>,
    pub actions: Option<Vec<RawAction>>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct RawAction {
    pub name: Option<String>,
    pub description: Option<String>,
    pub command: Option<String>,
}

/// Why a configuration document could not be read.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("{}", .0)]
    Json(#[from] serde_json::Error),

    #[error("{}", .0)]
    Yaml(#[from] serde_yaml::Error),
}

/// Documents opening with `{` or `[` are read as JSON, anything else as YAML.
fn is_json(document: &str) -> bool {
    matches!(document.trim_start().chars().next(), Some('{' | '['))
}

/// Lower-cases every key of every object in the document.
///
/// When two keys fold to the same name the one appearing last wins.
fn fold_keys(value: Value) -> Value {
    match value {
        Value::Object(object) => {
            let mut folded = Map::with_capacity(object.len());
            for (key, value) in object {
                folded.insert(key.to_lowercase(), fold_keys(value));
            }
            Value::Object(folded)
        }
        Value::Array(array) => Value::Array(array.into_iter().map(fold_keys).collect()),
        other => other,
    }
}

/// Parses a configuration document into a [`RawConfig`].
///
/// # Arguments
///
/// * `document` - A JSON document, or a YAML one for hand-written configs
///
/// # Returns
///
/// The raw configuration. An empty or `null` document yields a config
/// without verbs, which the validator rejects. A key repeated within one
/// JSON object keeps its last value.
///
/// # Errors
///
/// Returns the parser error if the document is malformed or a field has the
/// wrong type.
pub fn parse_raw_config(document: &str) -> Result<RawConfig, DocumentError> {
    if document.trim().is_empty() {
        return Ok(RawConfig::default());
    }

    let value: Value = if is_json(document) {
        serde_json::from_str(document)?
    } else {
        serde_yaml::from_str(document)?
    };

    if value.is_null() {
        return Ok(RawConfig::default());
    }

    Ok(serde_json::from_value(fold_keys(value))?)
}
