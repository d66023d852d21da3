//! HTTP server implementation.

use std::fs::Metadata;
use std::net::SocketAddr;
use std::path::Path;

use log::{debug, error, info, warn};
use tokio::fs::File;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::{TcpListener, TcpSocket, TcpStream};
use tokio::signal;

use crate::parser::{parse_request, ResolvedPath};
use crate::server::config::ServerConfig;
use crate::server::error::Error;
use crate::server::mime::mime_type;
use crate::server::response::{HttpResponse, StatusCode};

/// How a connection's single request was answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The request line was malformed; 400 was sent.
    BadRequest,
    /// Nothing servable exists at the resolved path; 404 was sent.
    NotFound { path: ResolvedPath },
    /// The file was sent with a 200 response.
    Served {
        path: ResolvedPath,
        content_type: &'static str,
        /// Body bytes written after the header block.
        bytes: u64,
    },
}

impl Outcome {
    /// The status code that was sent.
    pub fn status(&self) -> StatusCode {
        match self {
            Outcome::BadRequest => StatusCode::BadRequest,
            Outcome::NotFound { .. } => StatusCode::NotFound,
            Outcome::Served { .. } => StatusCode::Ok,
        }
    }
}

/// A static file server handling one connection at a time.
pub struct HttpServer {
    /// The server configuration.
    pub config: ServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Create, configure, bind and listen on the server socket.
    ///
    /// Each step fails with its own error variant; all of them are fatal.
    pub async fn setup_listener(&self) -> Result<TcpListener, Error> {
        let addr = self.config.addr;

        let socket = if addr.is_ipv4() {
            TcpSocket::new_v4()
        } else {
            TcpSocket::new_v6()
        }
        .map_err(Error::Socket)?;

        socket.set_reuseaddr(true).map_err(Error::SetOption)?;
        socket.bind(addr).map_err(|source| Error::Bind { addr, source })?;
        let listener = socket.listen(self.config.backlog).map_err(Error::Listen)?;

        info!("Server listening on http://{addr}", addr = listener.local_addr()?);
        Ok(listener)
    }

    /// Start the server and serve until Ctrl+C is received.
    pub async fn start(&self) -> Result<(), Error> {
        self.config.validate()?;
        let listener = self.setup_listener().await?;

        let serve = self.serve(listener);
        tokio::pin!(serve);

        tokio::select! {
            _ = &mut serve => {}
            result = signal::ctrl_c() => match result {
                Ok(()) => info!("Received Ctrl+C, shutting down"),
                Err(e) => {
                    error!("Error setting up Ctrl+C handler: {e}");
                    serve.await;
                }
            }
        }

        Ok(())
    }

    /// Accept and answer connections one after another, forever.
    ///
    /// A connection is handled to completion and closed before the next one
    /// is accepted.
    pub async fn serve(&self, listener: TcpListener) {
        loop {
            match listener.accept().await {
                Ok((socket, addr)) => self.handle_new_connection(socket, addr).await,
                Err(e) => Self::handle_accept_error(e).await,
            }
        }
    }

    /// Handle a new connection and close it, however handling ended.
    async fn handle_new_connection(&self, mut socket: TcpStream, addr: SocketAddr) {
        info!("Client connected from: {addr}");

        match Self::handle_connection(&mut socket, &self.config).await {
            Ok(outcome) => {
                let status = outcome.status();
                info!("{addr}: {code} {reason}", code = status.as_u16(), reason = status.reason_phrase());
            }
            Err(e) => error!("Error handling connection from {addr}: {e}"),
        }

        if let Err(e) = socket.shutdown().await {
            warn!("Error closing connection from {addr}: {e}");
        }
        info!("Connection closed: {addr}");
    }

    /// Log a failed accept and back off briefly before the next one.
    async fn handle_accept_error(e: std::io::Error) {
        error!("Error accepting connection: {e}");
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
    }

    /// Handle the single request carried by a connection.
    ///
    /// Performs one read of at most `read_buffer_size` bytes and answers with
    /// exactly one of 400, 404 or 200. A read error returns before anything
    /// is written; a write error aborts the rest of the response. In both
    /// cases the caller still closes the connection.
    pub async fn handle_connection(
        socket: &mut (impl AsyncRead + AsyncWrite + Unpin),
        config: &ServerConfig,
    ) -> Result<Outcome, Error> {
        let mut buf = vec![0; config.read_buffer_size];

        let n = socket.read(&mut buf).await?;
        debug!("Raw request:\n{}", String::from_utf8_lossy(&buf[..n]));

        let request = match parse_request(&buf[..n]) {
            Ok(request) => request,
            Err(e) => {
                info!("Invalid request format: {e}");
                socket.write_all(&HttpResponse::empty(StatusCode::BadRequest).to_bytes()).await?;
                return Ok(Outcome::BadRequest);
            }
        };

        info!("Requested path: {path}", path = request.path);
        let resolved = request.resolve(&config.index_file);
        debug!("Looking for file: {resolved}");

        let Some((file, length)) = Self::open_file(&resolved.to_path_in(&config.root)).await else {
            info!("File not found: {resolved}");
            socket.write_all(&HttpResponse::empty(StatusCode::NotFound).to_bytes()).await?;
            return Ok(Outcome::NotFound { path: resolved });
        };

        let content_type = mime_type(resolved.as_str());
        let head = HttpResponse::new(StatusCode::Ok)
            .with_content_type(content_type)
            .with_content_length(length)
            .with_header("Connection", "close");
        socket.write_all(&head.to_bytes()).await?;

        info!("Sending file: {resolved} (size: {length} bytes)");
        let bytes = Self::stream_body(file, &mut *socket, config.read_buffer_size).await?;
        socket.flush().await?;
        debug!("Request complete: {resolved}");

        Ok(Outcome::Served {
            path: resolved,
            content_type,
            bytes,
        })
    }

    /// Open a regular file for reading and measure it.
    ///
    /// Returns `None` when the path cannot be opened, cannot be measured, or
    /// is not a regular file.
    async fn open_file(path: &Path) -> Option<(File, u64)> {
        let file = match File::open(path).await {
            Ok(file) => file,
            Err(e) => {
                debug!("Cannot open {path}: {e}", path = path.display());
                return None;
            }
        };

        let length = Self::servable_length(path, file.metadata().await)?;
        Some((file, length))
    }

    /// Body length of an opened path, or `None` if it cannot be served.
    pub(crate) fn servable_length(path: &Path, metadata: std::io::Result<Metadata>) -> Option<u64> {
        match metadata {
            Ok(metadata) if metadata.is_file() => Some(metadata.len()),
            Ok(_) => {
                debug!("Not a regular file: {path}", path = path.display());
                None
            }
            Err(e) => {
                debug!("Cannot stat {path}: {e}", path = path.display());
                None
            }
        }
    }

    /// Copy `body` to `socket` in chunks of `chunk_size` bytes until end of
    /// input, returning the number of bytes written.
    ///
    /// The first read or write error stops the copy and is returned.
    pub async fn stream_body<R, W>(mut body: R, socket: &mut W, chunk_size: usize) -> Result<u64, Error>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut buf = vec![0; chunk_size];
        let mut sent = 0u64;

        loop {
            let n = body.read(&mut buf).await?;
            if n == 0 {
                break;
            }
            socket.write_all(&buf[..n]).await?;
            sent += n as u64;
        }

        Ok(sent)
    }
}
