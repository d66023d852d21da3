//! Static file server.
//!
//! This module accepts connections one at a time, answers the single
//! request each carries with a file from the document root, and closes
//! the connection.

mod response;
mod config;
mod error;
mod mime;
mod http_server;

// Re-export public items
pub use response::{HttpResponse, StatusCode};
pub use config::ServerConfig;
pub use error::Error;
pub use mime::{mime_type, DEFAULT_MIME_TYPE, MIME_TYPES};
pub use http_server::{HttpServer, Outcome};
