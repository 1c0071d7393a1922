// Error taxonomy for the gateway and the proxy
use crate::domain::reading::ValueError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Invalid value: {0}")]
    InvalidInput(#[from] ValueError),

    #[error("InfluxDB request failed: {0:#}")]
    Upstream(anyhow::Error),

    #[error("No data found")]
    NotFound,
}

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("Failed to reach the data gateway: {0}")]
    Network(String),

    #[error("Data gateway responded with status {0}")]
    Status(u16),

    #[error("Data gateway returned a malformed body: {0}")]
    Malformed(String),
}
