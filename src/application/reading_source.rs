// Source trait for the gateway's reading feed, as seen by the proxy
use crate::application::error::ProxyError;
use async_trait::async_trait;

#[async_trait]
pub trait ReadingSource: Send + Sync {
    /// Fetch the gateway's query payload as JSON
    async fn fetch_readings(&self) -> Result<serde_json::Value, ProxyError>;
}
