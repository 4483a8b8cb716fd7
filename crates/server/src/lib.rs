//! HTTP layer for the cluster search service.
//!
//! JSON endpoints over the nearest-centroid engine, behind an API-key
//! check:
//!
//! - `POST /build` - replace the centroid index
//! - `POST /search` - nearest-centroid query
//! - `GET /healthz` - liveness probe (no key required)
//! - `GET /stats` - index statistics

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;

use clusterfind_common::{AppConfig, Result};

pub mod auth;
pub mod routes;
pub mod state;
pub mod types;

pub use auth::{ApiKeyAuth, API_KEY_HEADER};
pub use state::AppState;

/// Register all routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(routes::build::build)
        .service(routes::search::search)
        .service(routes::system::health)
        .service(routes::system::stats);
}

/// Start the HTTP server and run it until shutdown
pub async fn start_server(config: AppConfig) -> Result<()> {
    let bind_address = config.server_bind_address();
    let state = Arc::new(AppState::new(config));

    info!("Starting cluster search server on {}", bind_address);

    HttpServer::new(move || {
        // Middleware runs outermost-last: tracing wraps CORS wraps auth.
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(ApiKeyAuth::new(state.config.api_key.clone()))
            .wrap(Cors::permissive())
            .wrap(TracingLogger::default())
            .configure(configure)
    })
    .bind(&bind_address)?
    .run()
    .await?;

    Ok(())
}
