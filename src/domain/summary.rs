// Summary statistics over a humidity series
use super::reading::Reading;

#[derive(Debug, Clone, PartialEq)]
pub struct HumiditySummary {
    pub highest: Reading,
    pub lowest: Reading,
    /// Arithmetic mean rounded to 2 decimal places
    pub mean: f64,
}

impl HumiditySummary {
    /// Single pass over `readings`. Ties keep the earliest reading, since
    /// only a strictly greater/lesser value replaces the current pick.
    /// Returns `None` for an empty series.
    pub fn compute(readings: &[Reading]) -> Option<Self> {
        let (first, rest) = readings.split_first()?;

        let mut highest = first;
        let mut lowest = first;
        let mut sum = first.value;

        for reading in rest {
            if reading.value > highest.value {
                highest = reading;
            }
            if reading.value < lowest.value {
                lowest = reading;
            }
            sum += reading.value;
        }

        let mean = round2(sum / readings.len() as f64);

        Some(Self {
            highest: highest.clone(),
            lowest: lowest.clone(),
            mean,
        })
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn series(values: &[f64]) -> Vec<Reading> {
        let start = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        values
            .iter()
            .enumerate()
            .map(|(i, v)| Reading::new(start + Duration::hours(i as i64), *v))
            .collect()
    }

    #[test]
    fn test_empty_series_has_no_summary() {
        assert_eq!(HumiditySummary::compute(&[]), None);
    }

    #[test]
    fn test_single_reading() {
        let readings = series(&[55.5]);
        let summary = HumiditySummary::compute(&readings).unwrap();

        assert_eq!(summary.highest.value, 55.5);
        assert_eq!(summary.lowest.value, 55.5);
        assert_eq!(summary.mean, 55.5);
    }

    #[test]
    fn test_extremes_and_mean() {
        let readings = series(&[40.0, 72.5, 38.25, 60.0]);
        let summary = HumiditySummary::compute(&readings).unwrap();

        assert_eq!(summary.highest, readings[1]);
        assert_eq!(summary.lowest, readings[2]);
        assert_eq!(summary.mean, 52.69);

        for r in &readings {
            assert!(r.value <= summary.highest.value);
            assert!(r.value >= summary.lowest.value);
        }
    }

    #[test]
    fn test_ties_keep_earliest_reading() {
        let readings = series(&[50.0, 70.0, 30.0, 70.0, 30.0]);
        let summary = HumiditySummary::compute(&readings).unwrap();

        assert_eq!(summary.highest.time, readings[1].time);
        assert_eq!(summary.lowest.time, readings[2].time);
    }

    #[test]
    fn test_mean_rounds_to_two_decimals() {
        let readings = series(&[1.0, 2.0, 2.0]);
        let summary = HumiditySummary::compute(&readings).unwrap();

        assert_eq!(summary.mean, 1.67);
    }
}
