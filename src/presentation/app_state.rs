// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;
use crate::application::proxy_service::ProxyService;
use crate::application::reading_service::ReadingService;

#[derive(Clone)]
pub struct GatewayState {
    pub reading_service: ReadingService,
}

#[derive(Clone)]
pub struct DashboardState {
    pub proxy_service: ProxyService,
    pub dashboard_service: DashboardService,
}
