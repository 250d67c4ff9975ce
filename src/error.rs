//! Error type shared by the library modules.
//!
//! Only configuration and layout input can fail. Missing page elements are
//! never errors: the feature that needs them is simply inert.

use thiserror::Error;

/// Errors raised while building a page or reading preferences.
#[derive(Debug, Error)]
pub enum Error {
    /// A stored or requested theme name is not one of the known modes
    #[error("unknown theme '{0}'")]
    UnknownTheme(String),

    /// A settings value is outside its allowed range
    #[error("invalid setting `{field}`: {reason}")]
    InvalidSetting {
        field: &'static str,
        reason: String,
    },

    /// Two elements in a layout share the same id attribute
    #[error("duplicate element id '{0}'")]
    DuplicateId(String),

    /// A size in a layout is negative or not finite
    #[error("invalid size {value} for `{what}`")]
    InvalidSize { what: String, value: f64 },

    /// The page path or a link does not form a valid URL
    #[error("invalid page URL: {0}")]
    Url(#[from] url::ParseError),

    /// Layout or settings JSON could not be decoded
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
