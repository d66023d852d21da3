//! Error types for the HTTP server.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during HTTP server operation.
///
/// Protocol and missing-file failures are not errors: they are answered
/// with 400 and 404 and reported as an [`Outcome`](crate::server::Outcome).
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error on an accepted connection or a served file.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The listening socket could not be created.
    #[error("Socket creation failed: {0}")]
    Socket(#[source] std::io::Error),

    /// A listening socket option could not be set.
    #[error("Setting socket option failed: {0}")]
    SetOption(#[source] std::io::Error),

    /// The listening socket could not be bound.
    #[error("Bind to {addr} failed: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// The socket could not start listening.
    #[error("Listen failed: {0}")]
    Listen(#[source] std::io::Error),

    /// The configuration file could not be read.
    #[error("Cannot read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON for [`ServerConfig`](crate::server::ServerConfig).
    #[error("Invalid config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A configuration value is out of range.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
