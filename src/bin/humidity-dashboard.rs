// Dashboard and proxy endpoint - Dependency injection and server setup
use std::sync::Arc;

use humidity_monitor::application::dashboard_service::DashboardService;
use humidity_monitor::application::proxy_service::ProxyService;
use humidity_monitor::infrastructure::config::load_dashboard_config;
use humidity_monitor::infrastructure::gateway_client::GatewayClient;
use humidity_monitor::presentation::app_state::DashboardState;
use humidity_monitor::presentation::routes::dashboard_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    humidity_monitor::init_tracing();

    let config = load_dashboard_config()?;
    tracing::info!("Forwarding readings from {}", config.gateway.url);

    let proxy_service = ProxyService::new(Arc::new(GatewayClient::new(config.gateway.url)));
    let state = Arc::new(DashboardState {
        dashboard_service: DashboardService::new(proxy_service.clone()),
        proxy_service,
    });

    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Dashboard on http://{}", addr);

    axum::serve(listener, dashboard_router(state)).await?;

    Ok(())
}
