//! Document conversion between YAML and JSON trees.
//!
//! The convert step persists the authored YAML as JSON without dropping
//! fields the typed schema does not know about, so conversion works on
//! untyped value trees. Mapping key order is preserved both ways.

use std::path::Path;

use serde_yaml::Value;

use crate::error::SourceError;

/// Parse YAML text into a JSON value tree.
///
/// # Errors
///
/// Returns `SourceError::ParseError` if the text is not valid YAML, and
/// `SourceError::Empty` if it parses to nothing.
pub fn yaml_text_to_json(text: &str, path: &Path) -> Result<serde_json::Value, SourceError> {
    let yaml: Value = serde_yaml::from_str(text).map_err(|e| SourceError::ParseError {
        path: path.to_path_buf(),
        line: e.location().map(|l| l.line()),
        message: e.to_string(),
    })?;

    if yaml.is_null() {
        return Err(SourceError::Empty {
            path: path.to_path_buf(),
        });
    }

    Ok(yaml_to_json(&yaml))
}

/// Serialize a JSON value tree as YAML text.
///
/// # Errors
///
/// Returns `SourceError::Encode` if the tree cannot be represented.
pub fn json_to_yaml_text(json: &serde_json::Value, path: &Path) -> Result<String, SourceError> {
    serde_yaml::to_string(&json_to_yaml(json)).map_err(|e| SourceError::Encode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Converts a `serde_yaml::Value` to `serde_json::Value`.
///
/// Scalar mapping keys (numbers, booleans) become their string form; keys
/// that are themselves collections are dropped. Tags are stripped.
#[must_use]
pub fn yaml_to_json(yaml: &Value) -> serde_json::Value {
    match yaml {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                serde_json::Value::Number(i.into())
            } else if let Some(u) = n.as_u64() {
                serde_json::Value::Number(u.into())
            } else if let Some(f) = n.as_f64() {
                serde_json::Number::from_f64(f)
                    .map_or(serde_json::Value::Null, serde_json::Value::Number)
            } else {
                serde_json::Value::Null
            }
        }
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Sequence(seq) => serde_json::Value::Array(seq.iter().map(yaml_to_json).collect()),
        Value::Mapping(map) => {
            let obj: serde_json::Map<String, serde_json::Value> = map
                .iter()
                .filter_map(|(k, v)| mapping_key(k).map(|ks| (ks, yaml_to_json(v))))
                .collect();
            serde_json::Value::Object(obj)
        }
        Value::Tagged(tagged) => yaml_to_json(&tagged.value),
    }
}

/// Converts a `serde_json::Value` to `serde_yaml::Value`.
#[must_use]
pub fn json_to_yaml(json: &serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(*b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Number(i.into())
            } else if let Some(u) = n.as_u64() {
                Value::Number(u.into())
            } else {
                n.as_f64().map_or(Value::Null, |f| Value::Number(f.into()))
            }
        }
        serde_json::Value::String(s) => Value::String(s.clone()),
        serde_json::Value::Array(arr) => Value::Sequence(arr.iter().map(json_to_yaml).collect()),
        serde_json::Value::Object(obj) => Value::Mapping(
            obj.iter()
                .map(|(k, v)| (Value::String(k.clone()), json_to_yaml(v)))
                .collect(),
        ),
    }
}

fn mapping_key(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Null => Some("null".to_string()),
        Value::Tagged(tagged) => mapping_key(&tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => None,
    }
}
