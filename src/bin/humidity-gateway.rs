// Store gateway - Dependency injection and server setup
use std::sync::Arc;

use humidity_monitor::application::reading_service::ReadingService;
use humidity_monitor::infrastructure::config::load_gateway_config;
use humidity_monitor::infrastructure::influx_repository::InfluxRepository;
use humidity_monitor::presentation::app_state::GatewayState;
use humidity_monitor::presentation::routes::gateway_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    humidity_monitor::init_tracing();

    // Missing settings stop the process here, before anything is served
    let config = load_gateway_config()?;
    tracing::info!(
        host = %config.influx.host,
        org = %config.influx.org,
        bucket = %config.influx.bucket,
        "Using InfluxDB"
    );

    let repository = Arc::new(InfluxRepository::new(config.influx));
    let state = Arc::new(GatewayState {
        reading_service: ReadingService::new(repository),
    });

    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening http://{}", addr);

    axum::serve(listener, gateway_router(state)).await?;

    Ok(())
}
