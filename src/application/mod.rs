// Application layer - Use cases and the seams to external systems
pub mod dashboard_service;
pub mod error;
pub mod proxy_service;
pub mod reading_repository;
pub mod reading_service;
pub mod reading_source;
