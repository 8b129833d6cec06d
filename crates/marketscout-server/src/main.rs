use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod config;
mod models;
mod routes;

use adapters::HttpReportWebhook;
use application::SubmissionService;
use config::ServerConfig;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub submission_service: Arc<SubmissionService>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "MarketScout API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn build_router(state: AppState) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::report::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("🛒 MarketScout API initializing...");

    let config = ServerConfig::from_lookup(|key| secrets.get(key)).map_err(anyhow::Error::from)?;

    tracing::info!("🔗 Amazon webhook: {}", config.endpoints.amazon);
    tracing::info!("🔗 Flipkart webhook: {}", config.endpoints.flipkart);
    match config.delivery.timeout {
        Some(timeout) => tracing::info!("⏱️  Webhook timeout: {:?}", timeout),
        None => tracing::warn!("⚠️  No WEBHOOK_TIMEOUT_SECS set - webhook calls wait indefinitely"),
    }

    let webhook = HttpReportWebhook::with_config(config.delivery).map_err(anyhow::Error::from)?;
    let submission_service = Arc::new(SubmissionService::new(Arc::new(webhook), config.endpoints));

    tracing::info!("🔔 Webhook service initialized");

    let state = AppState { submission_service };
    let router = build_router(state);

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ MarketScout API ready");

    Ok(router.into())
}
