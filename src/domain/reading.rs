// Reading domain model
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Measurement name every reading is written under
pub const MEASUREMENT: &str = "qparams";

/// Field name holding the humidity value
pub const FIELD: &str = "value";

/// Length of the trailing query window, in days
pub const WINDOW_DAYS: u32 = 30;

/// One timestamped humidity measurement.
///
/// Serialized with the database's column names so the gateway output keeps
/// the `_time` / `_value` shape the dashboard reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    #[serde(rename = "_time")]
    pub time: DateTime<Utc>,
    #[serde(rename = "_value")]
    pub value: f64,
    #[serde(rename = "_field", default = "default_field")]
    pub field: String,
    #[serde(rename = "_measurement", default = "default_measurement")]
    pub measurement: String,
}

fn default_field() -> String {
    FIELD.to_string()
}

fn default_measurement() -> String {
    MEASUREMENT.to_string()
}

impl Reading {
    pub fn new(time: DateTime<Utc>, value: f64) -> Self {
        Self {
            time,
            value,
            field: default_field(),
            measurement: default_measurement(),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ValueError {
    #[error("missing value")]
    Missing,
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("'{0}' is not a finite number")]
    NotFinite(String),
}

/// Parse a raw ingest value into a finite humidity reading value
pub fn parse_value(raw: &str) -> Result<f64, ValueError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValueError::Missing);
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| ValueError::NotANumber(raw.to_string()))?;

    // f64::from_str accepts "NaN" and "inf"
    if !value.is_finite() {
        return Err(ValueError::NotFinite(raw.to_string()));
    }

    Ok(value)
}
