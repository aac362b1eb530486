//! # Quill Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::middleware::ErrorHandlers;
use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;
mod views;

use config::AppConfig;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!("Starting Quill on {}:{}", config.host, config.port);

    let state = AppState::new(&config).await?;

    HttpServer::new(move || {
        App::new()
            .wrap(ErrorHandlers::new().default_handler(middleware::error::render_error_page))
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
