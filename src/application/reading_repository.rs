// Repository trait for humidity reading storage
use crate::domain::reading::Reading;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait ReadingRepository: Send + Sync {
    /// Write one point and wait until the store has acknowledged it
    async fn write_reading(&self, time: DateTime<Utc>, value: f64) -> anyhow::Result<()>;

    /// All readings of the series within the trailing window, fully read
    async fn query_window(&self, days: u32) -> anyhow::Result<Vec<Reading>>;
}
