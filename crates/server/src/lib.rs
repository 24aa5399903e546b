//! Moment HTTP Server
//!
//! Actix-web 기반 REST API 서버.
//! `/ai/suggest`, `/ai/highlight` (및 `/api/ai/*` 별칭), `/health`를 제공한다.

pub mod routes;
pub mod state;
pub mod types;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use moment_common::{AppConfig, Result};
use moment_llm::TextGenerator;
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;

pub use state::AppState;

/// Start the server and run until shutdown
pub async fn start_server(
    config: AppConfig,
    generator: Option<Arc<dyn TextGenerator>>,
) -> Result<()> {
    let bind_addr = config.server_bind_address();
    let origins = config.cors_allowed_origins.clone();
    let state = web::Data::new(Arc::new(AppState::new(config, generator)));

    info!(
        "Starting HTTP server on {} (generator: {})",
        bind_addr,
        if state.generator_enabled() { "enabled" } else { "rule-based only" }
    );

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(build_cors(&origins))
            .wrap(TracingLogger::default())
            .configure(routes::configure)
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    info!("HTTP server stopped");
    Ok(())
}

/// Any origin when none are configured, otherwise only the listed ones
fn build_cors(origins: &[String]) -> Cors {
    if origins.is_empty() {
        return Cors::permissive();
    }

    origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allow_any_header()
        .max_age(3600)
}
