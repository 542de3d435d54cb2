//! HTTP transport for the practice engine.
//!
//! | Method   | Path        | Description |
//! |----------|-------------|-------------|
//! | GET      | `/`         | Start a new session, show the welcome page |
//! | GET/POST | `/next`     | Grade `answer` (if any) and show the current problem |
//! | GET/POST | `/api/next` | Same transition, JSON body |
//! | GET      | `/health`   | Liveness and live session count |
//!
//! The session token rides in the `facts_session` cookie.

pub mod handler;
pub mod render;
pub mod routes;

pub use handler::{AppState, Page, COOKIE_NAME};
pub use routes::router;

use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::TcpListener;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {host}:{port}")]
    Bind {
        host: String,
        port: u16,
        #[source]
        source: std::io::Error,
    },
    #[error("server stopped unexpectedly")]
    Serve(#[source] std::io::Error),
}

/// Bind `host:port`. Port 0 picks a free port.
pub async fn bind(host: &str, port: u16) -> Result<(TcpListener, SocketAddr), ServerError> {
    let bind_err = |source| ServerError::Bind { host: host.to_string(), port, source };
    let listener = TcpListener::bind((host, port)).await.map_err(bind_err)?;
    let addr = listener.local_addr().map_err(bind_err)?;
    Ok((listener, addr))
}

/// Serve the practice routes on `listener` until the process exits.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<(), ServerError> {
    axum::serve(listener, router(state)).await.map_err(ServerError::Serve)
}
