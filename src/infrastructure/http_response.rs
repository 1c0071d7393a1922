// HTTP response mapping for gateway and proxy errors
use crate::application::error::{GatewayError, ProxyError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            GatewayError::InvalidInput(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            GatewayError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            GatewayError::Upstream(e) => {
                tracing::error!("InfluxDB failure: {:#}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        (status, message).into_response()
    }
}

/// Every proxy failure is a 500 with a JSON `error` field
impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.to_string() });
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
