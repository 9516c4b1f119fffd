//! Binding failure types
//!
//! Everything the binder can reject a request for, with the HTTP
//! status each failure surfaces as. There is no recovery: a failed
//! binding becomes an error response immediately.

use hyper::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BindError {
    /// A required query/form/path parameter was not supplied.
    #[error("missing required parameter `{0}`")]
    MissingParam(&'static str),

    /// A parameter was supplied but does not parse as the declared type.
    #[error("invalid value `{value}` for parameter `{name}`")]
    InvalidParam { name: &'static str, value: String },

    /// Key/value pairs (query string or form body) failed to decode.
    #[error("malformed key/value encoding: {0}")]
    InvalidEncoding(String),

    /// The body carries a content type the target cannot be decoded from.
    #[error("unsupported media type `{0}`")]
    UnsupportedMediaType(String),

    /// The body claimed a supported content type but failed to decode.
    #[error("malformed request body: {0}")]
    MalformedBody(String),
}

impl BindError {
    /// HTTP status this failure surfaces as.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
