// HTTP request handlers
use crate::application::error::{GatewayError, ProxyError};
use crate::domain::reading::Reading;
use crate::presentation::app_state::{DashboardState, GatewayState};
use crate::presentation::page::render_page;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct EmbedQuery {
    pub value: Option<String>,
}

/// Base route of the gateway
pub async fn root() -> &'static str {
    "OK"
}

/// Liveness check, empty body
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Ingest one value: `GET /api/v1/embed?value=55.5`
pub async fn embed(
    Query(query): Query<EmbedQuery>,
    State(state): State<Arc<GatewayState>>,
) -> Result<String, GatewayError> {
    let raw = query.value.unwrap_or_default();
    state.reading_service.ingest(&raw).await.inspect_err(|e| {
        // store failures are logged when the response is built
        if let GatewayError::InvalidInput(reason) = e {
            tracing::warn!("Rejected ingest of {:?}: {}", raw, reason);
        }
    })
}

/// All readings of the trailing window
pub async fn get_data(
    State(state): State<Arc<GatewayState>>,
) -> Result<Json<Vec<Reading>>, GatewayError> {
    let readings = state.reading_service.query().await?;
    Ok(Json(readings))
}

/// Republish the gateway's readings
pub async fn proxy(
    State(state): State<Arc<DashboardState>>,
) -> Result<Json<serde_json::Value>, ProxyError> {
    let payload = state.proxy_service.forward().await?;
    Ok(Json(payload))
}

/// The dashboard page, rendered once the single fetch has settled
pub async fn dashboard_page(State(state): State<Arc<DashboardState>>) -> Html<String> {
    let view = state.dashboard_service.load().await;
    Html(render_page(&view, &chrono::Local))
}

pub async fn dashboard_health() -> &'static str {
    "ok"
}
