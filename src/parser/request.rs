//! HTTP request-line parsing and representation.

use std::str::FromStr;

use crate::parser::error::Error;
use crate::parser::method::Method;
use crate::parser::resolve::{resolve_path, ResolvedPath};
use crate::parser::version::HttpVersion;

/// A well-formed retrieval request.
///
/// Only the request line is kept. Headers and any body that arrived in the
/// same read are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// The HTTP method, always GET for a parsed request
    pub method: Method,
    /// The request target exactly as sent
    pub path: String,
    /// The HTTP version, always HTTP/1.1 for a parsed request
    pub version: HttpVersion,
}

impl HttpRequest {
    /// Create a new HTTP request.
    pub fn new(method: Method, path: String, version: HttpVersion) -> Self {
        Self {
            method,
            path,
            version,
        }
    }

    /// Map the request target onto a path relative to the document root.
    ///
    /// See [`resolve_path`] for the exact rules.
    pub fn resolve(&self, index_file: &str) -> ResolvedPath {
        resolve_path(&self.path, index_file)
    }
}

/// Parse the request line out of a raw socket read.
///
/// The first line of `input` (up to the first `\n`, without a trailing
/// `\r`) must read `GET <target> HTTP/1.1`, with single spaces between
/// the tokens and nothing before or after them. Anything after the first
/// line is ignored.
///
/// # Arguments
///
/// * `input` - The bytes produced by one read of the connection
///
/// # Returns
///
/// The parsed request, or the reason it is malformed
pub fn parse_request(input: &[u8]) -> Result<HttpRequest, Error> {
    if input.is_empty() {
        return Err(Error::EmptyRequest);
    }

    // The buffer may be cut short, so a missing newline still leaves a line
    let line_end = input.iter().position(|&b| b == b'\n').unwrap_or(input.len());
    let line = &input[..line_end];
    let line = line.strip_suffix(b"\r").unwrap_or(line);

    let request_line = std::str::from_utf8(line)
        .map_err(|_| Error::MalformedRequestLine(String::from_utf8_lossy(line).into_owned()))?;

    // Exactly one space between method, target, and version
    let parts: Vec<&str> = request_line.split(' ').collect();
    if parts.len() != 3 || parts.iter().any(|part| part.is_empty()) {
        return Err(Error::MalformedRequestLine(request_line.to_string()));
    }

    let method = Method::from_str(parts[0])?;
    if !method.is_retrieval() {
        return Err(Error::UnsupportedMethod(method));
    }

    let path = parts[1].to_string();

    let version = HttpVersion::from_str(parts[2])?;
    if version != HttpVersion::Http11 {
        return Err(Error::UnsupportedVersion(version));
    }

    Ok(HttpRequest::new(method, path, version))
}
