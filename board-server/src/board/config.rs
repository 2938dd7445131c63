//! Departure board configuration.

use std::ops::RangeInclusive;

use chrono::{Duration, NaiveDateTime, Timelike};

use crate::domain::DepartureStatus;

/// Tunable parameters for schedule synthesis.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    /// Number of candidate departures generated per board.
    pub default_count: usize,

    /// Hours (inclusive) during which trains run at the peak interval.
    pub peak_hours: Vec<RangeInclusive<u32>>,

    /// Minutes between departures during peak hours.
    pub peak_interval_mins: i64,

    /// Minutes between departures outside peak hours.
    pub off_peak_interval_mins: i64,

    /// Relative weights for on time, delayed and cancelled trains.
    pub status_weights: [(DepartureStatus, f64); 3],

    /// Delay drawn for delayed trains (minutes).
    pub delay_mins: RangeInclusive<u32>,

    /// Platform numbers in use.
    pub platforms: RangeInclusive<u32>,

    /// Numeric part of train identifiers.
    pub train_numbers: RangeInclusive<u32>,

    pub express_probability: f64,
    pub at_platform_probability: f64,

    /// Intermediate stops shown per row.
    pub max_stops: usize,
}

impl BoardConfig {
    pub fn with_count(mut self, count: usize) -> Self {
        self.default_count = count;
        self
    }

    pub fn with_peak_hours(mut self, peak_hours: Vec<RangeInclusive<u32>>) -> Self {
        self.peak_hours = peak_hours;
        self
    }

    pub fn with_intervals(mut self, peak_mins: i64, off_peak_mins: i64) -> Self {
        self.peak_interval_mins = peak_mins;
        self.off_peak_interval_mins = off_peak_mins;
        self
    }

    /// Set the on time / delayed / cancelled weights.
    pub fn with_status_weights(mut self, on_time: f64, delayed: f64, cancelled: f64) -> Self {
        self.status_weights = [
            (DepartureStatus::OnTime, on_time),
            (DepartureStatus::Delayed, delayed),
            (DepartureStatus::Cancelled, cancelled),
        ];
        self
    }

    /// Probabilities are clamped to `0.0..=1.0`.
    pub fn with_probabilities(mut self, express: f64, at_platform: f64) -> Self {
        self.express_probability = clamp_probability(express);
        self.at_platform_probability = clamp_probability(at_platform);
        self
    }

    pub fn with_max_stops(mut self, max_stops: usize) -> Self {
        self.max_stops = max_stops;
        self
    }

    /// Whether `hour` falls inside a peak window.
    pub fn is_peak(&self, hour: u32) -> bool {
        self.peak_hours.iter().any(|window| window.contains(&hour))
    }

    /// Gap between a departure at `time` and the next one.
    pub fn interval_after(&self, time: NaiveDateTime) -> Duration {
        if self.is_peak(time.hour()) {
            Duration::minutes(self.peak_interval_mins)
        } else {
            Duration::minutes(self.off_peak_interval_mins)
        }
    }

    /// Pick the status whose cumulative weight covers `roll`.
    ///
    /// `roll` is a uniform sample in `0.0..1.0`. Non-positive weights never
    /// match; if every weight is non-positive the train is on time.
    pub fn status_for_roll(&self, roll: f64) -> DepartureStatus {
        let total: f64 = self.status_weights.iter().map(|(_, w)| w.max(0.0)).sum();
        if total <= 0.0 {
            return DepartureStatus::OnTime;
        }

        let mut threshold = roll * total;
        for (status, weight) in &self.status_weights {
            let weight = weight.max(0.0);
            if weight > 0.0 && threshold < weight {
                return *status;
            }
            threshold -= weight;
        }
        // Rounding can leave a sliver past the last bucket.
        self.status_weights
            .iter()
            .rev()
            .find(|(_, w)| *w > 0.0)
            .map(|(status, _)| *status)
            .unwrap_or(DepartureStatus::OnTime)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            default_count: 48,
            peak_hours: vec![7..=10, 16..=19],
            peak_interval_mins: 10,
            off_peak_interval_mins: 20,
            status_weights: [
                (DepartureStatus::OnTime, 0.85),
                (DepartureStatus::Delayed, 0.10),
                (DepartureStatus::Cancelled, 0.05),
            ],
            delay_mins: 5..=30,
            platforms: 1..=12,
            train_numbers: 100..=999,
            express_probability: 0.3,
            at_platform_probability: 0.1,
            max_stops: 3,
        }
    }
}

fn clamp_probability(p: f64) -> f64 {
    if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn default_config() {
        let config = BoardConfig::default();

        assert_eq!(config.default_count, 48);
        assert_eq!(config.peak_interval_mins, 10);
        assert_eq!(config.off_peak_interval_mins, 20);
        assert_eq!(config.delay_mins, 5..=30);
        assert_eq!(config.platforms, 1..=12);
        assert_eq!(config.max_stops, 3);
    }

    #[test]
    fn peak_windows_are_inclusive() {
        let config = BoardConfig::default();

        for hour in [7, 8, 9, 10, 16, 17, 18, 19] {
            assert!(config.is_peak(hour), "{hour} should be peak");
        }
        for hour in [0, 6, 11, 12, 15, 20, 23] {
            assert!(!config.is_peak(hour), "{hour} should be off-peak");
        }
    }

    #[test]
    fn interval_follows_hour() {
        let config = BoardConfig::default();

        assert_eq!(config.interval_after(at(10, 59)), Duration::minutes(10));
        assert_eq!(config.interval_after(at(11, 0)), Duration::minutes(20));
        assert_eq!(config.interval_after(at(6, 59)), Duration::minutes(20));
    }

    #[test]
    fn status_buckets() {
        let config = BoardConfig::default();

        assert_eq!(config.status_for_roll(0.0), DepartureStatus::OnTime);
        assert_eq!(config.status_for_roll(0.84), DepartureStatus::OnTime);
        assert_eq!(config.status_for_roll(0.90), DepartureStatus::Delayed);
        assert_eq!(config.status_for_roll(0.97), DepartureStatus::Cancelled);
        assert_eq!(config.status_for_roll(1.0), DepartureStatus::Cancelled);
    }

    #[test]
    fn zero_weights_are_never_chosen() {
        let config = BoardConfig::default().with_status_weights(0.0, 1.0, 0.0);
        assert_eq!(config.status_for_roll(0.0), DepartureStatus::Delayed);
        assert_eq!(config.status_for_roll(0.99), DepartureStatus::Delayed);

        let config = BoardConfig::default().with_status_weights(0.0, 0.0, 0.0);
        assert_eq!(config.status_for_roll(0.5), DepartureStatus::OnTime);
    }

    #[test]
    fn builders() {
        let config = BoardConfig::default()
            .with_count(6)
            .with_peak_hours(vec![8..=8])
            .with_intervals(5, 30)
            .with_probabilities(1.5, -0.2)
            .with_max_stops(1);

        assert_eq!(config.default_count, 6);
        assert!(config.is_peak(8));
        assert!(!config.is_peak(7));
        assert_eq!(config.interval_after(at(8, 0)), Duration::minutes(5));
        assert_eq!(config.express_probability, 1.0);
        assert_eq!(config.at_platform_probability, 0.0);
        assert_eq!(config.max_stops, 1);
    }
}
