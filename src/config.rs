use std::fs;
use std::io::Read;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::ConfigError;

/// An untyped request: the top-level `format` selector plus any
/// format-specific option sections (e.g. `segment`).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormatRequest {
    fields: Map<String, Value>,
}

impl FormatRequest {
    pub fn new(fields: Map<String, Value>) -> Self {
        FormatRequest { fields }
    }

    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        match value {
            Value::Object(fields) => Ok(FormatRequest { fields }),
            other => Err(ConfigError::NotAnObject(json_kind(&other))),
        }
    }

    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        FormatRequest::from_value(serde_json::from_str::<Value>(s)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        log::debug!("reading request from {:?}", path);
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::for_file(path, e))?;
        FormatRequest::from_json_str(&contents)
    }

    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, ConfigError> {
        let mut contents = String::new();
        reader.read_to_string(&mut contents).map_err(ConfigError::Stdin)?;
        FormatRequest::from_json_str(&contents)
    }

    /// The top-level format selector, if present and a string.
    pub fn format(&self) -> Option<&str> {
        self.fields.get("format").and_then(Value::as_str)
    }

    /// The raw option section stored under `key`, whatever its shape.
    pub fn options(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

impl From<Map<String, Value>> for FormatRequest {
    fn from(fields: Map<String, Value>) -> Self {
        FormatRequest::new(fields)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_from_json_str() {
        let request = FormatRequest::from_json_str(r#"{"format": "segment", "segment": {"time": 10}}"#).unwrap();
        assert_eq!(request.format(), Some("segment"));
        assert_eq!(request.options("segment"), Some(&json!({"time": 10})));
        assert_eq!(request.options("audio"), None);
    }

    #[test]
    fn test_format_must_be_a_string() {
        let request = FormatRequest::from_value(json!({"format": 4})).unwrap();
        assert_eq!(request.format(), None);
    }

    #[test]
    fn test_rejects_non_objects() {
        assert!(matches!(FormatRequest::from_value(json!(["mp4"])), Err(ConfigError::NotAnObject("an array"))));
        assert!(matches!(FormatRequest::from_json_str("\"mp4\""), Err(ConfigError::NotAnObject("a string"))));
        assert!(matches!(FormatRequest::from_json_str("{format:"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"format": "webm"}}"#).unwrap();
        let request = FormatRequest::from_path(file.path()).unwrap();
        assert_eq!(request.format(), Some("webm"));
    }

    #[test]
    fn test_from_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("request.json");
        assert!(matches!(FormatRequest::from_path(&missing), Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_from_reader() {
        let request = FormatRequest::from_reader(&b"{\"format\": \"mp3\"}"[..]).unwrap();
        assert_eq!(request.format(), Some("mp3"));
    }
}
