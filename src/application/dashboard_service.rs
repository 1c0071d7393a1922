// Dashboard service - Builds the dashboard view from one proxy call
use crate::application::proxy_service::ProxyService;
use crate::domain::dashboard::{Dashboard, DashboardView};
use crate::domain::reading::Reading;

pub const DASHBOARD_TITLE: &str = "Humidity Data Dashboard";

/// Flat message shown for every kind of load failure
pub const LOAD_ERROR_MESSAGE: &str = "Could not load humidity data.";

#[derive(Clone)]
pub struct DashboardService {
    proxy: ProxyService,
}

impl DashboardService {
    pub fn new(proxy: ProxyService) -> Self {
        Self { proxy }
    }

    /// Fetch once and settle into either an error or a ready view
    pub async fn load(&self) -> DashboardView {
        let payload = match self.proxy.forward().await {
            Ok(payload) => payload,
            Err(_) => return Self::failed(),
        };

        match serde_json::from_value::<Vec<Reading>>(payload) {
            Ok(readings) => {
                tracing::debug!("Dashboard loaded {} readings", readings.len());
                DashboardView::Ready(Dashboard::new(DASHBOARD_TITLE.to_string(), &readings))
            }
            Err(e) => {
                tracing::error!("Unreadable readings payload: {}", e);
                Self::failed()
            }
        }
    }

    fn failed() -> DashboardView {
        DashboardView::Error {
            message: LOAD_ERROR_MESSAGE.to_string(),
        }
    }
}
