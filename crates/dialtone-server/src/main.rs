use std::sync::Arc;

use axum::{extract::FromRef, middleware, routing::get, Json, Router};
use serde::Serialize;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod auth;
mod config;
mod models;
mod providers;
mod routes;

use adapters::{
    BroadcastHub, PgAgentDirectory, PgCallLogRepository, PgContactLinker,
    PgIntegrationSettingsRepository, PgQueuePresence, PgRequestAuditRepository,
};
use application::{OutboundCaller, Reconciler, SettingsService};
use config::ServerConfig;
use dialtone::ports::repositories::CallLogRepository;
use dialtone::ports::services::{AgentDirectory, ContactLinker, QueuePresence};

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub settings_service: Arc<SettingsService>,
    pub reconciler: Arc<Reconciler>,
    pub outbound: Arc<OutboundCaller>,
    pub call_logs: Arc<dyn CallLogRepository>,
    pub linker: Arc<dyn ContactLinker>,
    pub agents: Arc<dyn AgentDirectory>,
    pub queue: Arc<dyn QueuePresence>,
    pub hub: BroadcastHub,
    pub http: reqwest::Client,
    pub public_url: String,
}

// Allow extracting PgPool directly from AppState
impl FromRef<AppState> for PgPool {
    fn from_ref(state: &AppState) -> PgPool {
        state.pool.clone()
    }
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Dialtone API initializing...");

    let config = ServerConfig::from_env()?;

    match config.api_key.as_deref() {
        Some(key) if !key.is_empty() => tracing::info!("API key authentication enabled"),
        _ => tracing::warn!("No DIALTONE_API_KEY set - authentication disabled"),
    }

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await?;

    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed");

    // Repositories and port adapters
    let call_logs: Arc<dyn CallLogRepository> = Arc::new(PgCallLogRepository::new(pool.clone()));
    let audits = Arc::new(PgRequestAuditRepository::new(pool.clone()));
    let settings_repo = Arc::new(PgIntegrationSettingsRepository::new(pool.clone()));
    let linker: Arc<dyn ContactLinker> = Arc::new(PgContactLinker::new(pool.clone()));
    let agents: Arc<dyn AgentDirectory> = Arc::new(PgAgentDirectory::new(pool.clone()));
    let queue: Arc<dyn QueuePresence> = Arc::new(PgQueuePresence::new(pool.clone()));
    let hub = BroadcastHub::new();
    // Shared connection pool for all provider API calls
    let http = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(15))
        .build()?;

    // Application services
    let settings_service = Arc::new(SettingsService::new(settings_repo));
    let reconciler = Arc::new(Reconciler::new(
        call_logs.clone(),
        audits,
        linker.clone(),
        Arc::new(hub.clone()),
    ));
    let outbound = Arc::new(OutboundCaller::new(
        call_logs.clone(),
        agents.clone(),
        linker.clone(),
    ));

    let state = AppState {
        pool,
        settings_service,
        reconciler,
        outbound,
        call_logs,
        linker,
        agents,
        queue,
        hub,
        http,
        public_url: config.public_url.clone(),
    };

    // Protected routes (require authentication)
    let protected_routes = Router::new()
        .merge(routes::call::router())
        .merge(routes::calls::router())
        .merge(routes::settings::router())
        .merge(routes::contact::router())
        .merge(routes::queue::router())
        .merge(routes::websprix::router())
        .merge(routes::events::router())
        .layer(middleware::from_fn_with_state(
            auth::ApiKey(config.api_key.clone()),
            auth::require_api_key,
        ));

    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        // Provider callbacks authenticate with their own verify key
        .merge(routes::webhook::router())
        .merge(protected_routes)
        .layer(CorsLayer::permissive())
        .with_state(state);

    tracing::info!("Swagger UI: /swagger-ui");
    tracing::info!(addr = %config.bind_addr, "Dialtone API ready");

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
