//! Server mode
//!
//! Builds the shared state once, hands a clone to every actix worker and
//! binds the configured address.

use actix_web::{App, HttpServer, web};
use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};

use crate::api::configure_routes;
use crate::api::middleware::RequestLogger;
use crate::api::services::BaseUrl;
use crate::config::StaticConfig;
use crate::errors::ShortenerError;
use crate::storage::{StoreFactory, UrlStore};

/// Process-wide state shared by all workers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UrlStore>,
    pub base_url: BaseUrl,
}

/// Create an empty store and the short URL prefix from configuration
pub fn build_app_state(config: &StaticConfig) -> AppState {
    AppState {
        store: StoreFactory::create(),
        base_url: BaseUrl(config.server.base_url.clone()),
    }
}

/// Run the HTTP server until the process is stopped
///
/// **Note**: Logging system must be initialized before calling this function
pub async fn run_server(config: &StaticConfig) -> Result<()> {
    let state = build_app_state(config);
    let bind_address = config.server.bind_address();
    let workers = config.server.workers;

    if !config.server.base_url.ends_with('/') {
        warn!(
            "server.base_url '{}' has no trailing slash, short URLs are formed by plain concatenation",
            config.server.base_url
        );
    }

    let server = HttpServer::new(move || {
        App::new()
            .wrap(RequestLogger)
            .app_data(web::Data::new(state.store.clone()))
            .app_data(web::Data::new(state.base_url.clone()))
            .configure(configure_routes)
    })
    .workers(workers)
    .bind(&bind_address)
    .map_err(|e| ShortenerError::server_bind(format!("{}: {}", bind_address, e)))?;

    info!("Server starting on {}...", bind_address);
    server.run().await?;

    info!("Server stopped");
    Ok(())
}
