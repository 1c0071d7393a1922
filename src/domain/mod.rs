// Domain layer - Readings and the views derived from them
pub mod dashboard;
pub mod reading;
pub mod summary;
pub mod telemetry;
