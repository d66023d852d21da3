//! A minimal HTTP/1.1 static file server.
//!
//! The server accepts one connection at a time, reads a single request from
//! it, and answers with a file from the document root before closing the
//! connection.
//!
//! # Features
//!
//! - Parse `GET <target> HTTP/1.1` request lines from a single bounded read
//! - Map `/` to a configurable index file and strip the leading separator
//! - Classify content types from a fixed extension table
//! - Stream file bodies in fixed-size chunks with `Content-Length` framing
//! - Answer malformed requests with 400 and missing files with 404
//!
//! # Examples
//!
//! ## Parsing a request line
//!
//! ```
//! use statichttp_rs::{parse_request, DEFAULT_INDEX_FILE};
//!
//! let request = parse_request(b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n").unwrap();
//! assert_eq!(request.path, "/");
//! assert_eq!(request.resolve(DEFAULT_INDEX_FILE).as_str(), "index.html");
//! ```
//!
//! ## Content types
//!
//! ```
//! use statichttp_rs::mime_type;
//!
//! assert_eq!(mime_type("logo.png"), "image/png");
//! assert_eq!(mime_type("README"), "text/plain");
//! ```
//!
//! ## Running the server
//!
//! ```no_run
//! use statichttp_rs::{HttpServer, ServerConfig};
//!
//! # async fn run() -> Result<(), statichttp_rs::ServerError> {
//! let server = HttpServer::new(ServerConfig::default());
//! server.start().await
//! # }
//! ```

// Export the parser module
pub mod parser;

// Export the server module
pub mod server;

// Re-export commonly used items for convenience
pub use parser::{
    parse_request, resolve_path, Error as ParserError, HttpRequest, HttpVersion, Method, ResolvedPath,
    DEFAULT_INDEX_FILE,
};
pub use server::{mime_type, Error as ServerError, HttpResponse, HttpServer, Outcome, ServerConfig, StatusCode};
