// Humidity monitor - store gateway, proxy endpoint and dashboard
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

use tracing_subscriber::EnvFilter;

/// Install the fmt subscriber, filtered by `RUST_LOG` (default `info`)
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
