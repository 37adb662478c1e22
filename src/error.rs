use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid format {}: expected {expected}", .found.as_deref().unwrap_or("<missing>"))]
pub struct InvalidFormatError {
    pub expected: String,
    pub found: Option<String>,
}

impl InvalidFormatError {
    pub fn for_format(expected: &str, found: Option<&str>) -> Self {
        InvalidFormatError {
            expected: String::from(expected),
            found: found.map(String::from),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{msg}")]
pub struct MissingOptionsError {
    pub msg: String,
}

impl MissingOptionsError {
    pub fn new(msg: &str) -> Self {
        MissingOptionsError { msg: String::from(msg) }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormatError {
    #[error(transparent)]
    InvalidFormat(#[from] InvalidFormatError),

    #[error(transparent)]
    MissingOptions(#[from] MissingOptionsError),

    #[error("unsupported format: {0:?}")]
    UnsupportedFormat(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("error reading {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error reading request from stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("error parsing request: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("request must be a JSON object, got {0}")]
    NotAnObject(&'static str),
}

impl ConfigError {
    pub fn for_file(path: &Path, source: io::Error) -> Self {
        ConfigError::Read {
            path: PathBuf::from(path),
            source,
        }
    }
}
