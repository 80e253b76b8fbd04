//! # Bolide API Server
//!
//! REST API over the NASA meteorite landings dataset.
//!
//! ## Endpoints
//!
//! - `GET /meteors` - Filtered, paginated records, served through a
//!   short-lived response cache
//! - `GET /years` - Distinct landing years, always recomputed
//! - `GET /health` - Liveness and dataset status
//!
//! ## Example
//!
//! ```rust,ignore
//! use bolide_api::{ApiServer, ApiConfig};
//!
//! let server = ApiServer::new(ApiConfig::from_env());
//! server.run("0.0.0.0", 5000).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod dto;
mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::{ApiConfig, AppState};

use std::io;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use bolide_dataset::load;

/// API server for Bolide.
pub struct ApiServer {
    state: Arc<AppState>,
}

impl ApiServer {
    /// Creates a new API server with the given configuration.
    pub fn new(config: ApiConfig) -> Self {
        Self {
            state: Arc::new(AppState::new(config)),
        }
    }

    /// Returns the shared handler state.
    pub fn state(&self) -> Arc<AppState> {
        self.state.clone()
    }

    /// Creates the router with all routes configured.
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        create_router(self.state.clone())
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Runs the server on the first free port at or above `preferred_port`.
    ///
    /// The one-shot dataset fetch is spawned right after the listener is
    /// bound, not awaited: requests arriving before it completes observe an
    /// empty store rather than blocking.
    pub async fn run(self, bind: &str, preferred_port: u16) -> io::Result<()> {
        let listener = bind_available(bind, preferred_port).await?;
        let addr = listener.local_addr()?;

        info!("Bolide API server listening on http://{}", addr);

        let state = self.state.clone();
        tokio::spawn(async move {
            load(&state.dataset, &state.store).await;
        });

        axum::serve(listener, self.router()).await
    }
}

/// Binds the first free port at or above `preferred_port`, probing upward
/// by one while the candidate is occupied.
async fn bind_available(bind: &str, preferred_port: u16) -> io::Result<TcpListener> {
    let mut port = preferred_port;
    loop {
        match TcpListener::bind((bind, port)).await {
            Ok(listener) => return Ok(listener),
            Err(err) if err.kind() == io::ErrorKind::AddrInUse => {
                warn!(port, "Port in use, trying the next one");
                port = port.checked_add(1).ok_or(err)?;
            }
            Err(err) => return Err(err),
        }
    }
}
