//! Statistics Calculator Module
//! Descriptive statistics for numeric dataset columns.

use serde::Serialize;
use statrs::statistics::Statistics;

/// Summary of one numeric column, in the order a `describe()` table lists it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescriptiveStats {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub p25: f64,
    pub median: f64,
    pub p75: f64,
    pub max: f64,
}

impl Default for DescriptiveStats {
    fn default() -> Self {
        Self {
            count: 0,
            mean: f64::NAN,
            std: f64::NAN,
            min: f64::NAN,
            p25: f64::NAN,
            median: f64::NAN,
            p75: f64::NAN,
            max: f64::NAN,
        }
    }
}

impl DescriptiveStats {
    /// Row labels of the statistics table.
    pub const LABELS: [&'static str; 8] =
        ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

    /// Values in the same order as [`Self::LABELS`].
    pub fn values(&self) -> [f64; 8] {
        [
            self.count as f64,
            self.mean,
            self.std,
            self.min,
            self.p25,
            self.median,
            self.p75,
            self.max,
        ]
    }
}

/// Handles statistical calculations.
pub struct StatsCalculator;

impl StatsCalculator {
    /// Compute descriptive statistics for an array of non-null values.
    pub fn compute_descriptive_stats(values: &[f64]) -> DescriptiveStats {
        let n = values.len();
        if n == 0 {
            return DescriptiveStats::default();
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        // Sample standard deviation; NaN for a single value.
        let std = if n > 1 {
            Statistics::std_dev(values.iter())
        } else {
            f64::NAN
        };

        DescriptiveStats {
            count: n,
            mean: Statistics::mean(values.iter()),
            std,
            min: sorted[0],
            p25: Self::percentile(&sorted, 25.0),
            median: Self::percentile(&sorted, 50.0),
            p75: Self::percentile(&sorted, 75.0),
            max: sorted[n - 1],
        }
    }

    /// Calculate percentile using linear interpolation (NumPy compatible).
    fn percentile(sorted_values: &[f64], p: f64) -> f64 {
        let n = sorted_values.len();
        if n == 0 {
            return f64::NAN;
        }
        if n == 1 {
            return sorted_values[0];
        }

        let rank = (p / 100.0) * (n - 1) as f64;
        let lower = rank.floor() as usize;
        let upper = (rank.ceil() as usize).min(n - 1);
        let frac = rank - lower as f64;

        if lower == upper {
            sorted_values[lower]
        } else {
            sorted_values[lower] * (1.0 - frac) + sorted_values[upper] * frac
        }
    }

    /// Format a statistic the way the overview table shows it.
    pub fn format_stat(value: f64) -> String {
        if value.is_nan() {
            "NaN".to_string()
        } else if value.fract() == 0.0 && value.abs() < 1e15 {
            format!("{value:.1}")
        } else {
            format!("{value:.3}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_describe_matches_linear_quartiles() {
        let stats = StatsCalculator::compute_descriptive_stats(&[4.0, 1.0, 3.0, 2.0]);

        assert_eq!(stats.count, 4);
        assert!(approx(stats.mean, 2.5));
        assert!(approx(stats.std, (5.0f64 / 3.0).sqrt()));
        assert!(approx(stats.min, 1.0));
        assert!(approx(stats.p25, 1.75));
        assert!(approx(stats.median, 2.5));
        assert!(approx(stats.p75, 3.25));
        assert!(approx(stats.max, 4.0));
    }

    #[test]
    fn test_single_value_has_undefined_std() {
        let stats = StatsCalculator::compute_descriptive_stats(&[7.0]);

        assert_eq!(stats.count, 1);
        assert!(approx(stats.mean, 7.0));
        assert!(stats.std.is_nan());
        assert!(approx(stats.median, 7.0));
    }

    #[test]
    fn test_empty_input() {
        let stats = StatsCalculator::compute_descriptive_stats(&[]);

        assert_eq!(stats.count, 0);
        assert!(stats.mean.is_nan());
        assert_eq!(stats.values()[0], 0.0);
    }

    #[test]
    fn test_format_stat() {
        assert_eq!(StatsCalculator::format_stat(f64::NAN), "NaN");
        assert_eq!(StatsCalculator::format_stat(12.0), "12.0");
        assert_eq!(StatsCalculator::format_stat(1.23456), "1.235");
    }
}
