//! Summary statistics over a salary series.

use std::fmt;

use thiserror::Error;

/// Errors raised by statistics that have no meaningful value on empty input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    /// The series has no elements.
    #[error("input series is empty")]
    EmptyInput,
}

/// Arithmetic mean rounded to the nearest integer.
///
/// Returns `0.0` for an empty series, and whenever the result is not finite
/// (a NaN or infinite salary, or a sum that overflows).
pub fn mean(series: &[f64]) -> f64 {
    if series.is_empty() {
        return 0.0;
    }
    let sum: f64 = series.iter().sum();
    let avg = (sum / series.len() as f64).round();
    if avg.is_finite() { avg } else { 0.0 }
}

/// Median of the series.
///
/// Works on a sorted copy, so the caller's data keeps its order.
///
/// # Errors
///
/// Returns [`StatsError::EmptyInput`] if `series` is empty.
pub fn median(series: &[f64]) -> Result<f64, StatsError> {
    if series.is_empty() {
        return Err(StatsError::EmptyInput);
    }

    let mut sorted = series.to_vec();
    sorted.sort_by(f64::total_cmp);

    let half = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Ok(sorted[half])
    } else {
        Ok((sorted[half - 1] + sorted[half]) / 2.0)
    }
}

/// Percentage (0-100, rounded) of elements strictly greater than `threshold`.
///
/// Returns `0` for an empty series.
pub fn percent_above(series: &[f64], threshold: f64) -> u32 {
    if series.is_empty() {
        return 0;
    }
    let above = series.iter().filter(|&&v| v > threshold).count();
    (above as f64 / series.len() as f64 * 100.0).round() as u32
}

/// Statistics panel values derived from one series and threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSummary {
    /// Number of data points.
    pub count: usize,
    /// Rounded mean (0 when empty).
    pub mean: f64,
    /// Median, `None` when the series is empty.
    pub median: Option<f64>,
    /// Threshold the percentage was computed against.
    pub threshold: f64,
    /// Percentage of points strictly above `threshold`.
    pub percent_above: u32,
    /// Smallest value, `None` when empty.
    pub min: Option<f64>,
    /// Largest value, `None` when empty.
    pub max: Option<f64>,
}

impl SeriesSummary {
    /// Computes every panel value from the series.
    pub fn from_series(series: &[f64], threshold: f64) -> Self {
        let min = series.iter().copied().reduce(f64::min);
        let max = series.iter().copied().reduce(f64::max);
        Self {
            count: series.len(),
            mean: mean(series),
            median: median(series).ok(),
            threshold,
            percent_above: percent_above(series, threshold),
            min,
            max,
        }
    }
}

impl fmt::Display for SeriesSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Salary Summary ---")?;
        writeln!(f, "Data points:      {}", self.count)?;
        writeln!(f, "Mean:             {:.0}", self.mean)?;
        match self.median {
            Some(m) => writeln!(f, "Median:           {m}")?,
            None => writeln!(f, "Median:           n/a")?,
        }
        if let (Some(lo), Some(hi)) = (self.min, self.max) {
            writeln!(f, "Range:            {lo} .. {hi}")?;
        }
        write!(
            f,
            "Above threshold:  {}% (> {})",
            self.percent_above, self.threshold
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn mean_of_non_finite_input_is_zero() {
        assert_eq!(mean(&[f64::NAN, 1.0]), 0.0);
        assert_eq!(mean(&[f64::INFINITY, 1.0]), 0.0);
        assert_eq!(mean(&[f64::MAX, f64::MAX]), 0.0);
    }

    #[test]
    fn mean_rounds_to_integer() {
        assert_eq!(mean(&[10.0, 20.0]), 15.0);
        // 10 / 3 = 3.33..
        assert_eq!(mean(&[1.0, 4.0, 5.0]), 3.0);
        // 11 / 2 = 5.5
        assert_eq!(mean(&[5.0, 6.0]), 6.0);
    }

    #[test]
    fn median_of_empty_fails() {
        assert_eq!(median(&[]), Err(StatsError::EmptyInput));
    }

    #[test]
    fn median_odd_and_even() {
        assert_eq!(median(&[1.0, 2.0, 3.0]), Ok(2.0));
        assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), Ok(2.5));
        assert_eq!(median(&[3.0, 1.0, 2.0]), Ok(2.0));
    }

    #[test]
    fn median_leaves_input_untouched() {
        let data = vec![44000.0, 29000.0, 36000.0, 32500.0];
        let before = data.clone();
        let first = median(&data);
        let second = median(&data);
        assert_eq!(first, second);
        assert_eq!(data, before);
    }

    #[test]
    fn percent_above_counts_strictly_greater() {
        assert_eq!(percent_above(&[10.0, 20.0, 30.0, 40.0], 20.0), 50);
        assert_eq!(percent_above(&[10.0, 20.0, 30.0], 0.0), 100);
        assert_eq!(percent_above(&[10.0, 20.0, 30.0], 30.0), 0);
        // 1 / 3 = 33.3..
        assert_eq!(percent_above(&[10.0, 20.0, 30.0], 25.0), 33);
    }

    #[test]
    fn percent_above_empty_is_zero() {
        assert_eq!(percent_above(&[], 100.0), 0);
    }

    #[test]
    fn summary_of_salaries() {
        let data = [29000.0, 44000.0, 36000.0, 37000.0, 32500.0, 32500.0, 35500.0];
        let s = SeriesSummary::from_series(&data, 35000.0);
        assert_eq!(s.count, 7);
        // 246500 / 7 = 35214.28..
        assert_eq!(s.mean, 35214.0);
        assert_eq!(s.median, Some(35500.0));
        assert_eq!(s.percent_above, 57);
        assert_eq!(s.min, Some(29000.0));
        assert_eq!(s.max, Some(44000.0));
    }

    #[test]
    fn summary_of_empty_series() {
        let s = SeriesSummary::from_series(&[], 10.0);
        assert_eq!(s.count, 0);
        assert_eq!(s.mean, 0.0);
        assert!(s.median.is_none());
        assert_eq!(s.percent_above, 0);
        assert!(s.min.is_none());
        assert!(s.to_string().contains("n/a"));
    }
}
