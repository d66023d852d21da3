//! HTTP request-line parser.
//!
//! This module turns the raw bytes of a single socket read into a
//! well-formed retrieval request, and maps the request target onto a
//! filesystem-relative path.

mod request;
mod method;
mod version;
mod resolve;
mod error;
mod tests;

// Re-export public items
pub use request::HttpRequest;
pub use method::Method;
pub use version::HttpVersion;
pub use resolve::{ResolvedPath, resolve_path, DEFAULT_INDEX_FILE};
pub use error::Error;

// Re-export the parse_request function
pub use request::parse_request;
