//! Protocol version tokens.

use std::fmt;
use std::str::FromStr;

use crate::parser::error::Error;

/// A version token from the request line. Only `HTTP/1.1` is served.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpVersion {
    Http10,
    Http11,
}

impl HttpVersion {
    /// The token as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpVersion::Http10 => "HTTP/1.0",
            HttpVersion::Http11 => "HTTP/1.1",
        }
    }
}

impl FromStr for HttpVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [HttpVersion::Http10, HttpVersion::Http11]
            .into_iter()
            .find(|version| version.as_str() == s)
            .ok_or_else(|| Error::InvalidVersion(s.to_string()))
    }
}

impl fmt::Display for HttpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
