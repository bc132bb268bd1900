//! HTTP gateway for Blogforge.
//!
//! Exposes the generate endpoint the browser form posts to, a health check,
//! and the embedded static frontend. Built on Axum.

pub mod frontend;

use axum::extract::DefaultBodyLimit;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

use blogforge_core::BlogConfig;
use blogforge_pipeline::{BlogPipeline, HttpFetcher, PipelineSettings};

/// Shared application state for the gateway.
pub struct GatewayState {
    pub pipeline: BlogPipeline,
    /// Deadline for one full generate run
    pub generate_timeout: Duration,
}

type SharedState = Arc<GatewayState>;

/// Build the Axum router with all gateway routes.
pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/generate", post(generate_handler))
        .with_state(state)
        .merge(frontend::frontend_router())
        .layer(DefaultBodyLimit::max(1024 * 1024)) // 1 MB body limit
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

/// Start the gateway HTTP server.
pub async fn start(config: blogforge_config::AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = format!("{}:{}", config.gateway.host, config.gateway.port);

    let provider = blogforge_providers::build_from_config(&config)?;
    let fetcher = Arc::new(HttpFetcher::new(&config.fetcher)?);
    let pipeline = BlogPipeline::new(provider, fetcher, PipelineSettings::from(&config));

    let state = Arc::new(GatewayState {
        pipeline,
        generate_timeout: Duration::from_secs(config.generate_timeout_secs),
    });

    let app = build_router(state);

    info!(addr = %addr, "Gateway starting");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// --- Handlers ---

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Serialize)]
struct GenerateResponse {
    output: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

async fn generate_handler(
    State(state): State<SharedState>,
    Json(config): Json<BlogConfig>,
) -> Result<Json<GenerateResponse>, (StatusCode, Json<ErrorResponse>)> {
    info!(
        reference_links = config.reference_links.len(),
        code_links = config.code_links.len(),
        links_to_include = config.links_to_include.len(),
        "Generate requested"
    );

    match tokio::time::timeout(state.generate_timeout, state.pipeline.generate(&config)).await {
        Ok(Ok(output)) => Ok(Json(GenerateResponse { output })),
        Ok(Err(e)) => {
            error!(error = %e, "Generation failed");
            Err((
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ))
        }
        Err(_) => {
            warn!(
                timeout_secs = state.generate_timeout.as_secs(),
                "Generation deadline exceeded"
            );
            Err((
                StatusCode::GATEWAY_TIMEOUT,
                Json(ErrorResponse {
                    error: "Generation timed out".into(),
                }),
            ))
        }
    }
}
