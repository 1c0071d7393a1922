// HTTP client for the store gateway's query endpoint
use crate::application::error::ProxyError;
use crate::application::reading_source::ReadingSource;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct GatewayClient {
    url: String,
    http: reqwest::Client,
}

impl GatewayClient {
    pub fn new(url: String) -> Self {
        Self {
            url,
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ReadingSource for GatewayClient {
    async fn fetch_readings(&self) -> Result<serde_json::Value, ProxyError> {
        let response = self
            .http
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ProxyError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ProxyError::Status(response.status().as_u16()));
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| ProxyError::Malformed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::spawn;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::Router;

    #[tokio::test]
    async fn test_fetch_returns_json() {
        let addr = spawn(Router::new().route(
            "/api/v1/getData",
            get(|| async { axum::Json(serde_json::json!([{"_value": 50.0}])) }),
        ))
        .await;

        let client = GatewayClient::new(format!("http://{}/api/v1/getData", addr));
        let payload = client.fetch_readings().await.unwrap();

        assert_eq!(payload[0]["_value"], 50.0);
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let addr = spawn(Router::new().route(
            "/api/v1/getData",
            get(|| async { (StatusCode::NOT_FOUND, "No data found") }),
        ))
        .await;

        let client = GatewayClient::new(format!("http://{}/api/v1/getData", addr));
        let err = client.fetch_readings().await.unwrap_err();

        assert!(matches!(err, ProxyError::Status(404)));
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let addr = spawn(Router::new().route("/api/v1/getData", get(|| async { "not json" }))).await;

        let client = GatewayClient::new(format!("http://{}/api/v1/getData", addr));
        let err = client.fetch_readings().await.unwrap_err();

        assert!(matches!(err, ProxyError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_unreachable_gateway() {
        let client = GatewayClient::new("http://127.0.0.1:1/api/v1/getData".to_string());
        let err = client.fetch_readings().await.unwrap_err();

        assert!(matches!(err, ProxyError::Network(_)));
    }
}
