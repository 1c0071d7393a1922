// Dashboard domain model
use super::reading::Reading;
use super::summary::HumiditySummary;
use super::telemetry::{SeriesData, TimeSeriesPoint};

pub const SERIES_NAME: &str = "Humidity";
pub const SERIES_COLOR: &str = "#42A5F5";

/// Outcome of one dashboard load. Loading is the in-flight fetch itself,
/// so a settled load is always one of these.
#[derive(Debug, Clone)]
pub enum DashboardView {
    Error { message: String },
    Ready(Dashboard),
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    pub title: String,
    /// `None` when the series is empty
    pub summary: Option<HumiditySummary>,
    pub series: SeriesData,
}

impl Dashboard {
    pub fn new(title: String, readings: &[Reading]) -> Self {
        let summary = HumiditySummary::compute(readings);
        let points = readings.iter().map(TimeSeriesPoint::from).collect();

        Self {
            title,
            summary,
            series: SeriesData::new(SERIES_NAME.to_string(), SERIES_COLOR.to_string(), points),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.series.points.is_empty()
    }
}
