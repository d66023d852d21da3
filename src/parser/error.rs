//! Error types for the HTTP parser.

use thiserror::Error;

use crate::parser::method::Method;
use crate::parser::version::HttpVersion;

/// Reasons a request line is rejected.
///
/// Every variant is answered with `400 Bad Request`.
#[derive(Debug, Error)]
pub enum Error {
    /// The read produced no bytes.
    #[error("Empty request")]
    EmptyRequest,

    /// The request line is not `METHOD SP TARGET SP VERSION`.
    #[error("Malformed request line: {0}")]
    MalformedRequestLine(String),

    /// The method token is not a known HTTP method.
    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(String),

    /// The method is known but the server only answers GET.
    #[error("Unsupported HTTP method: {0}")]
    UnsupportedMethod(Method),

    /// The version token is not a known HTTP version.
    #[error("Invalid HTTP version: {0}")]
    InvalidVersion(String),

    /// The version is known but the server only speaks HTTP/1.1.
    #[error("Unsupported HTTP version: {0}")]
    UnsupportedVersion(HttpVersion),
}
