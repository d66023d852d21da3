//! Server configuration.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::parser::DEFAULT_INDEX_FILE;
use crate::server::error::Error;

/// Port the server listens on unless configured otherwise.
pub const DEFAULT_PORT: u16 = 8080;

/// HTTP server configuration.
///
/// Fields missing from a config file keep their default values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// The address to bind to.
    pub addr: SocketAddr,
    /// Pending connections the listener queues before refusing.
    pub backlog: u32,
    /// Capacity of the request read and of each body chunk.
    pub read_buffer_size: usize,
    /// Directory resolved paths are opened relative to.
    pub root: PathBuf,
    /// File served for the root target `/`.
    pub index_file: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            backlog: 3,
            read_buffer_size: 1024,
            root: PathBuf::from("."),
            index_file: DEFAULT_INDEX_FILE.to_string(),
        }
    }
}

impl ServerConfig {
    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&contents).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a configuration from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reject values the server cannot run with.
    pub fn validate(&self) -> Result<(), Error> {
        if self.read_buffer_size == 0 {
            return Err(Error::InvalidConfig("read_buffer_size must be greater than zero".to_string()));
        }
        if self.index_file.is_empty() {
            return Err(Error::InvalidConfig("index_file must not be empty".to_string()));
        }
        Ok(())
    }
}
