// Chart series domain models
use super::reading::Reading;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeriesPoint {
    pub time: DateTime<Utc>,
    pub value: f64,
}

impl TimeSeriesPoint {
    pub fn new(time: DateTime<Utc>, value: f64) -> Self {
        Self { time, value }
    }
}

impl From<&Reading> for TimeSeriesPoint {
    fn from(reading: &Reading) -> Self {
        Self::new(reading.time, reading.value)
    }
}

/// A single named line on the dashboard chart
#[derive(Debug, Clone)]
pub struct SeriesData {
    pub name: String,
    pub color: String,
    pub points: Vec<TimeSeriesPoint>,
}

impl SeriesData {
    pub fn new(name: String, color: String, points: Vec<TimeSeriesPoint>) -> Self {
        Self {
            name,
            color,
            points,
        }
    }

    /// Lowest and highest value in the series, `None` when empty
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.points.iter().fold(None, |range, p| match range {
            None => Some((p.value, p.value)),
            Some((lo, hi)) => Some((lo.min(p.value), hi.max(p.value))),
        })
    }
}
