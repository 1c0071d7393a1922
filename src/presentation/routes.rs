// Routers for the gateway and dashboard processes
use crate::presentation::app_state::{DashboardState, GatewayState};
use crate::presentation::handlers::{
    dashboard_health, dashboard_page, embed, get_data, health_check, proxy, root,
};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

pub fn gateway_router(state: Arc<GatewayState>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/v1/", get(health_check))
        .route("/api/v1/embed", get(embed))
        .route("/api/v1/getData", get(get_data))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub fn dashboard_router(state: Arc<DashboardState>) -> Router {
    Router::new()
        .route("/", get(dashboard_page))
        .route("/api/proxy", get(proxy))
        .route("/healthz", get(dashboard_health))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
