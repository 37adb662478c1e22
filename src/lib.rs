pub mod config;
pub mod error;
pub mod formats;

pub use config::FormatRequest;
pub use error::{ConfigError, FormatError, InvalidFormatError, MissingOptionsError};
pub use formats::{find_format, format_list, format_names, parameters_for, Format};
