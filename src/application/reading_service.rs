// Reading service - Ingest and query use cases of the store gateway
use crate::application::error::GatewayError;
use crate::application::reading_repository::ReadingRepository;
use crate::domain::reading::{parse_value, Reading, WINDOW_DAYS};
use chrono::Utc;
use std::sync::Arc;

#[derive(Clone)]
pub struct ReadingService {
    repository: Arc<dyn ReadingRepository>,
}

impl ReadingService {
    pub fn new(repository: Arc<dyn ReadingRepository>) -> Self {
        Self { repository }
    }

    /// Validate `raw`, then write it stamped with the current time.
    /// Nothing is written when validation fails.
    pub async fn ingest(&self, raw: &str) -> Result<String, GatewayError> {
        let value = parse_value(raw)?;

        self.repository
            .write_reading(Utc::now(), value)
            .await
            .map_err(GatewayError::Upstream)?;

        tracing::info!(value, "reading written");
        Ok(format!("Value: '{}' written.", raw))
    }

    /// Readings from the trailing window, oldest first. The outcome is only
    /// classified once the whole result has been read.
    pub async fn query(&self) -> Result<Vec<Reading>, GatewayError> {
        let mut readings = self
            .repository
            .query_window(WINDOW_DAYS)
            .await
            .map_err(GatewayError::Upstream)?;

        if readings.is_empty() {
            return Err(GatewayError::NotFound);
        }

        readings.sort_by_key(|r| r.time);
        Ok(readings)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{DateTime, Duration};
    use std::sync::Mutex;

    /// In-memory stand-in for the time-series store
    #[derive(Default)]
    pub(crate) struct MemoryRepository {
        pub readings: Mutex<Vec<Reading>>,
        pub fail: bool,
    }

    impl MemoryRepository {
        pub(crate) fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }

        pub(crate) fn with(readings: Vec<Reading>) -> Self {
            Self {
                readings: Mutex::new(readings),
                fail: false,
            }
        }
    }

    #[async_trait]
    impl ReadingRepository for MemoryRepository {
        async fn write_reading(&self, time: DateTime<Utc>, value: f64) -> anyhow::Result<()> {
            if self.fail {
                anyhow::bail!("write refused");
            }
            self.readings.lock().unwrap().push(Reading::new(time, value));
            Ok(())
        }

        async fn query_window(&self, days: u32) -> anyhow::Result<Vec<Reading>> {
            if self.fail {
                anyhow::bail!("query refused");
            }
            let since = Utc::now() - Duration::days(days as i64);
            Ok(self
                .readings
                .lock()
                .unwrap()
                .iter()
                .filter(|r| r.time >= since)
                .cloned()
                .collect())
        }
    }

    #[tokio::test]
    async fn test_ingest_then_query() {
        let service = ReadingService::new(Arc::new(MemoryRepository::default()));

        let before = Utc::now();
        let message = service.ingest("55.5").await.unwrap();
        let after = Utc::now();

        assert_eq!(message, "Value: '55.5' written.");

        let readings = service.query().await.unwrap();
        assert_eq!(readings.len(), 1);
        assert_eq!(readings[0].value, 55.5);
        assert!(readings[0].time >= before && readings[0].time <= after);
    }

    #[tokio::test]
    async fn test_invalid_value_is_not_written() {
        let repository = Arc::new(MemoryRepository::default());
        let service = ReadingService::new(repository.clone());

        let err = service.ingest("abc").await.unwrap_err();

        assert!(matches!(err, GatewayError::InvalidInput(_)));
        assert!(repository.readings.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_ingest_writes_twice() {
        let repository = Arc::new(MemoryRepository::default());
        let service = ReadingService::new(repository.clone());

        service.ingest("40").await.unwrap();
        service.ingest("40").await.unwrap();

        assert_eq!(repository.readings.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_empty_series_is_not_found() {
        let service = ReadingService::new(Arc::new(MemoryRepository::default()));

        assert!(matches!(service.query().await, Err(GatewayError::NotFound)));
    }

    #[tokio::test]
    async fn test_readings_outside_window_are_excluded() {
        let old = Reading::new(Utc::now() - Duration::days(45), 20.0);
        let service = ReadingService::new(Arc::new(MemoryRepository::with(vec![old])));

        assert!(matches!(service.query().await, Err(GatewayError::NotFound)));
    }

    #[tokio::test]
    async fn test_query_orders_by_time() {
        let now = Utc::now();
        let service = ReadingService::new(Arc::new(MemoryRepository::with(vec![
            Reading::new(now - Duration::hours(1), 2.0),
            Reading::new(now - Duration::hours(3), 1.0),
        ])));

        let readings = service.query().await.unwrap();
        assert_eq!(readings[0].value, 1.0);
        assert_eq!(readings[1].value, 2.0);
    }

    #[tokio::test]
    async fn test_store_failures_are_upstream_errors() {
        let service = ReadingService::new(Arc::new(MemoryRepository::failing()));

        assert!(matches!(service.ingest("10").await, Err(GatewayError::Upstream(_))));
        assert!(matches!(service.query().await, Err(GatewayError::Upstream(_))));
    }
}
