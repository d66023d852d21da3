//! `statichttp`: serve files from the working directory over HTTP/1.1.
//!
//! Usage: `statichttp [CONFIG.json]`. Log verbosity follows `RUST_LOG`
//! and defaults to `info`.

use std::process::ExitCode;

use log::error;
use statichttp_rs::{HttpServer, ServerConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args_os().nth(1) {
        Some(path) => match ServerConfig::from_json_file(&path) {
            Ok(config) => config,
            Err(e) => {
                error!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => ServerConfig::default(),
    };

    let server = HttpServer::new(config);
    if let Err(e) = server.start().await {
        error!("{e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
