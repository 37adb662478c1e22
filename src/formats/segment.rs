use std::collections::BTreeMap;
use std::fmt::Display;

use serde_json::Value;

use crate::config::FormatRequest;
use crate::error::{FormatError, MissingOptionsError};
use super::{base_parameters, Format};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OptionKind {
    Integer,
    Text,
}

#[derive(Clone, Debug, PartialEq)]
pub enum OptionValue {
    Integer(i64),
    Text(String),
}

impl OptionValue {
    /// Coerces a raw JSON value to `kind`, or `None` if it can't be.
    pub fn coerce(value: &Value, kind: OptionKind) -> Option<Self> {
        match kind {
            OptionKind::Integer => coerce_integer(value).map(OptionValue::Integer),
            OptionKind::Text => coerce_text(value).map(OptionValue::Text),
        }
    }
}

impl Display for OptionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionValue::Integer(i) => write!(f, "{}", i),
            OptionValue::Text(s) => write!(f, "{}", s),
        }
    }
}

pub struct SegmentOption {
    pub key: &'static str,
    pub kind: OptionKind,
    pub flag: &'static str,
}

/// Recognized `segment` options, in the order their flags are emitted.
pub const SEGMENT_OPTIONS: [SegmentOption; 5] = [
    SegmentOption { key: "time", kind: OptionKind::Integer, flag: "-segment_time" },
    SegmentOption { key: "list_size", kind: OptionKind::Integer, flag: "-segment_list_size" },
    SegmentOption { key: "list_type", kind: OptionKind::Text, flag: "-segment_list_type" },
    SegmentOption { key: "list_file", kind: OptionKind::Text, flag: "-segment_list" },
    SegmentOption { key: "format", kind: OptionKind::Text, flag: "-segment_format" },
];

pub type SafeOptions = BTreeMap<&'static str, OptionValue>;

/// ffmpeg's segment muxer. Requires a `segment` section whose `format`
/// names the container of each segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentFormat;

impl SegmentFormat {
    /// Keeps only recognized options that coerce to their declared kind.
    /// Anything else is dropped; this never fails.
    pub fn safe_options(&self, options: &Value) -> SafeOptions {
        let mut safe = SafeOptions::new();
        if let Value::Object(options) = options {
            for option in &SEGMENT_OPTIONS {
                if let Some(value) = options.get(option.key).and_then(|v| OptionValue::coerce(v, option.kind)) {
                    safe.insert(option.key, value);
                }
            }
        }
        safe
    }
}

impl Format for SegmentFormat {
    fn name(&self) -> &'static str {
        "segment"
    }

    fn ffmpeg_name(&self) -> &'static str {
        "segment"
    }

    fn description(&self) -> &'static str {
        "Segment muxer, splits output into fixed-length pieces (e.g. HLS)"
    }

    fn parameters(&self, request: &FormatRequest) -> Result<Vec<String>, FormatError> {
        let mut parameters = base_parameters(self, request)?;
        let options = request
            .options("segment")
            .ok_or_else(|| MissingOptionsError::new("segment options required"))?;

        let safe = self.safe_options(options);
        if !safe.contains_key("format") {
            return Err(MissingOptionsError::new("format of segment is required").into());
        }

        for option in &SEGMENT_OPTIONS {
            if let Some(value) = safe.get(option.key) {
                parameters.push(String::from(option.flag));
                parameters.push(value.to_string());
            }
        }
        Ok(parameters)
    }
}

fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
                .map(|f| f.trunc() as i64)
        }),
        Value::Bool(b) => Some(*b as i64),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn coerce_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
