//! HTTP transport for the review engine
//!
//! Axum router exposing analysis and generation as JSON endpoints, wire-compatible
//! with the legacy review service. Validation failures answer 400 with an
//! `{"error": ...}` body; the engine itself never fails.

use crate::{
    config::Config,
    deserializers::de_option_driver_id,
    engine::ReviewEngine,
    error::{Result, ReviewError},
    lexicon::Aspect,
    serializers::{serialize_score, serialize_score_map},
};
use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, sync::Arc, time::Duration};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
};

/// Shared state for HTTP server
#[derive(Clone)]
pub struct HttpState {
    pub config: Arc<Config>,
    pub engine: ReviewEngine,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub review: Option<String>,
    #[serde(default, deserialize_with = "de_option_driver_id")]
    pub driver_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default, deserialize_with = "de_option_driver_id")]
    pub driver_id: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub driver_id: i64,
    pub driver_name: String,
    #[serde(serialize_with = "serialize_score")]
    pub sentiment_score: f64,
    #[serde(serialize_with = "serialize_score_map")]
    pub skill_analysis: BTreeMap<Aspect, f64>,
    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub driver_id: i64,
    pub driver_name: String,
    pub ai_generated_review: String,
}

fn body_or_reject<T>(payload: std::result::Result<Json<T>, JsonRejection>) -> Result<T> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => Err(ReviewError::validation(format!(
            "Invalid request body: {}",
            rejection.body_text()
        ))),
    }
}

/// Health check endpoint
pub async fn health_handler() -> impl IntoResponse {
    "ok"
}

/// Score a review for a driver
pub async fn analyze_handler(
    State(state): State<HttpState>,
    payload: std::result::Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>> {
    let req = body_or_reject(payload)?;
    let (Some(review), Some(driver_id)) = (req.review, req.driver_id) else {
        return Err(ReviewError::validation(
            "Missing required fields: review and driver_id",
        ));
    };

    tracing::info!(driver_id, review_len = review.len(), "analyze request");
    let report = state.engine.analyze(&review, driver_id);

    Ok(Json(AnalyzeResponse {
        driver_id: report.driver_id,
        driver_name: report.driver_name,
        sentiment_score: report.sentiment_score,
        skill_analysis: report.aspect_scores,
        insights: report.insights,
        recommendations: report.recommendations,
    }))
}

/// Generate a synthetic review for a driver
pub async fn generate_handler(
    State(state): State<HttpState>,
    payload: std::result::Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>> {
    let req = body_or_reject(payload)?;
    let Some(driver_id) = req.driver_id else {
        return Err(ReviewError::validation("Missing required field: driver_id"));
    };

    tracing::info!(driver_id, "generate-review request");
    let review = state.engine.generate(driver_id);

    Ok(Json(GenerateResponse {
        driver_id: review.driver_id,
        driver_name: review.driver_name,
        ai_generated_review: review.text,
    }))
}

/// Build the application router
pub fn router(state: HttpState) -> Router {
    let timeout = Duration::from_millis(state.config.server.request_timeout_ms);
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/analyze", post(analyze_handler))
        .route("/api/generate-review", post(generate_handler))
        .layer(TimeoutLayer::new(timeout))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .with_state(state)
}

/// Start the HTTP server
pub async fn start_http_server(config: Arc<Config>, engine: ReviewEngine) -> Result<()> {
    let addr = config.bind_addr()?;
    let app = router(HttpState { config, engine });

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("review service listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
