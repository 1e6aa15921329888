use std::sync::Arc;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ai_client::{Gemini, Stability, TextGenerator};
use npcc_common::Config;
use npcc_engine::PolicyEngine;
use npcc_urban::UrbanImpactGenerator;

mod rest;

pub struct AppState {
    pub engine: PolicyEngine,
    /// Headline writer. None when GEMINI_API_KEY is not configured.
    pub headlines: Option<Arc<dyn TextGenerator>>,
    /// Urban impact generator. None when STABILITY_API_KEY is not configured.
    pub urban: Option<UrbanImpactGenerator>,
}

fn router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(rest::health))
        // Policy simulation
        .route("/api/init", get(rest::api_init))
        .route("/api/calculate", post(rest::api_calculate))
        // Generative endpoints
        .route("/api/news", post(rest::news::api_news))
        .route("/api/urban-impact/generate", post(rest::urban::api_generate))
        .route(
            "/api/urban-impact/quick-generate",
            post(rest::urban::api_quick_generate),
        )
        .fallback(rest::not_found)
        .with_state(state)
        // CORS: wide open for local dashboard development
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        // Logging layer: method + path only
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        )
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("npcc=info".parse()?))
        .init();

    let config = Config::from_env();

    let headlines: Option<Arc<dyn TextGenerator>> = match config.gemini_api_key {
        Some(ref key) => Some(Arc::new(
            Gemini::new(key.as_str(), config.gemini_model.as_str()).with_temperature(0.8),
        )),
        None => {
            warn!("GEMINI_API_KEY not set, /api/news disabled");
            None
        }
    };

    let urban = match config.stability_api_key {
        Some(ref key) => Some(UrbanImpactGenerator::new(Arc::new(Stability::new(
            key.as_str(),
            config.stability_engine.as_str(),
        )))),
        None => {
            warn!("STABILITY_API_KEY not set, urban impact endpoints disabled");
            None
        }
    };

    let state = Arc::new(AppState {
        engine: PolicyEngine::new(),
        headlines,
        urban,
    });

    let addr = format!("{}:{}", config.host, config.port);
    info!("NPCC backend API starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router(state)).await?;

    Ok(())
}
