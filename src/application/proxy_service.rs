// Proxy service - Forwards the gateway's readings verbatim
use crate::application::error::ProxyError;
use crate::application::reading_source::ReadingSource;
use std::sync::Arc;

#[derive(Clone)]
pub struct ProxyService {
    source: Arc<dyn ReadingSource>,
}

impl ProxyService {
    pub fn new(source: Arc<dyn ReadingSource>) -> Self {
        Self { source }
    }

    /// One call to the gateway, no retry and no caching
    pub async fn forward(&self) -> Result<serde_json::Value, ProxyError> {
        self.source.fetch_readings().await.inspect_err(|e| {
            tracing::error!("Error forwarding readings: {}", e);
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;

    pub(crate) struct StaticSource(pub Result<serde_json::Value, u16>);

    #[async_trait]
    impl ReadingSource for StaticSource {
        async fn fetch_readings(&self) -> Result<serde_json::Value, ProxyError> {
            self.0.clone().map_err(ProxyError::Status)
        }
    }

    #[tokio::test]
    async fn test_forward_republishes_payload() {
        let payload = json!([{"_time": "2024-05-01T10:00:00Z", "_value": 55.5, "table": 0}]);
        let proxy = ProxyService::new(Arc::new(StaticSource(Ok(payload.clone()))));

        assert_eq!(proxy.forward().await.unwrap(), payload);
    }

    #[tokio::test]
    async fn test_forward_passes_failures_through() {
        let proxy = ProxyService::new(Arc::new(StaticSource(Err(404))));

        let err = proxy.forward().await.unwrap_err();
        assert_eq!(err.to_string(), "Data gateway responded with status 404");
    }
}
