// InfluxDB 2.x repository implementation
use crate::application::reading_repository::ReadingRepository;
use crate::domain::reading::{Reading, FIELD, MEASUREMENT};
use crate::infrastructure::config::InfluxSettings;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use influxdb2::models::DataPoint;

pub struct InfluxRepository {
    host: String,
    token: String,
    org: String,
    bucket: String,
    app_tag: String,
    writer: influxdb2::Client,
    http: reqwest::Client,
}

impl std::fmt::Debug for InfluxRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InfluxRepository")
            .field("host", &self.host)
            .field("org", &self.org)
            .field("bucket", &self.bucket)
            .finish_non_exhaustive()
    }
}

impl InfluxRepository {
    pub fn new(settings: InfluxSettings) -> Self {
        let host = settings.host.trim_end_matches('/').to_string();
        let writer = influxdb2::Client::new(host.clone(), settings.org.clone(), settings.token.clone());

        Self {
            host,
            token: settings.token,
            org: settings.org,
            bucket: settings.bucket,
            app_tag: settings.app_tag,
            writer,
            http: reqwest::Client::new(),
        }
    }

    fn build_query_url(&self) -> String {
        format!(
            "{}/api/v2/query?org={}",
            self.host,
            urlencoding::encode(&self.org)
        )
    }

    /// Run a Flux query and return the raw CSV body
    async fn execute_query(&self, flux: &str) -> Result<String> {
        let body = serde_json::json!({
            "query": flux,
            "type": "flux",
            "dialect": {
                "header": true,
                "annotations": [],
                "dateTimeFormat": "RFC3339",
            },
        });

        let response = self
            .http
            .post(self.build_query_url())
            .header("Authorization", format!("Token {}", self.token))
            .header("Accept", "application/csv")
            .json(&body)
            .send()
            .await
            .context("Failed to send request to InfluxDB")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("InfluxDB query failed with status {}: {}", status, body);
        }

        response
            .text()
            .await
            .context("Failed to read InfluxDB response")
    }
}

#[async_trait]
impl ReadingRepository for InfluxRepository {
    async fn write_reading(&self, time: DateTime<Utc>, value: f64) -> Result<()> {
        let timestamp = time
            .timestamp_nanos_opt()
            .context("Timestamp out of range for InfluxDB")?;

        let point = DataPoint::builder(MEASUREMENT)
            .tag("app", self.app_tag.as_str())
            .field(FIELD, value)
            .timestamp(timestamp)
            .build()
            .context("Failed to build data point")?;

        // Returns once InfluxDB has acknowledged the write
        self.writer
            .write(&self.bucket, futures::stream::iter(vec![point]))
            .await
            .context("Failed to write point to InfluxDB")?;

        Ok(())
    }

    async fn query_window(&self, days: u32) -> Result<Vec<Reading>> {
        let flux = window_query(&self.bucket, days);
        tracing::debug!("Executing Flux query: {}", flux);

        let csv = self.execute_query(&flux).await?;
        let readings = parse_flux_csv(&csv)?;

        tracing::debug!("Found {} readings in the last {}d", readings.len(), days);
        Ok(readings)
    }
}

/// Flux query for the humidity series over the trailing `days`
pub fn window_query(bucket: &str, days: u32) -> String {
    let bucket = bucket.replace('\\', "\\\\").replace('"', "\\\"");
    format!(
        "from(bucket: \"{}\")\n  |> range(start: -{}d)\n  |> filter(fn: (r) => r._measurement == \"{}\")\n  |> filter(fn: (r) => r._field == \"{}\")",
        bucket, days, MEASUREMENT, FIELD
    )
}

/// Column positions of the table currently being read
enum Layout {
    Pending,
    Rows {
        time: usize,
        value: usize,
        field: Option<usize>,
        measurement: Option<usize>,
    },
    Error {
        message: usize,
    },
}

/// Parse InfluxDB's header-only CSV output. Every table restates its
/// header; an error table anywhere in the stream fails the whole result.
pub fn parse_flux_csv(body: &str) -> Result<Vec<Reading>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(body.as_bytes());

    let mut layout = Layout::Pending;
    let mut readings = Vec::new();

    for (line, record) in reader.records().enumerate() {
        let record = record.context("Malformed CSV from InfluxDB")?;
        if record.iter().all(str::is_empty) {
            continue;
        }

        let column = |name: &str| record.iter().position(|c| c == name);

        if let (Some(time), Some(value)) = (column("_time"), column("_value")) {
            layout = Layout::Rows {
                time,
                value,
                field: column("_field"),
                measurement: column("_measurement"),
            };
            continue;
        }
        if let (Some(message), Some(_)) = (column("error"), column("reference")) {
            layout = Layout::Error { message };
            continue;
        }

        match layout {
            Layout::Rows {
                time,
                value,
                field,
                measurement,
            } => {
                let cell = |idx: usize| record.get(idx).unwrap_or_default();

                let time = DateTime::parse_from_rfc3339(cell(time))
                    .with_context(|| format!("Invalid _time on line {}", line + 1))?
                    .with_timezone(&Utc);
                let value: f64 = cell(value)
                    .parse()
                    .with_context(|| format!("Invalid _value on line {}", line + 1))?;
                if !value.is_finite() {
                    anyhow::bail!("Non-finite _value on line {}", line + 1);
                }

                let mut reading = Reading::new(time, value);
                if let Some(idx) = field {
                    reading.field = cell(idx).to_string();
                }
                if let Some(idx) = measurement {
                    reading.measurement = cell(idx).to_string();
                }
                readings.push(reading);
            }
            Layout::Error { message } => {
                anyhow::bail!(
                    "InfluxDB query error: {}",
                    record.get(message).unwrap_or_default()
                );
            }
            Layout::Pending => {
                anyhow::bail!("Unexpected CSV row before header on line {}", line + 1);
            }
        }
    }

    Ok(readings)
}
