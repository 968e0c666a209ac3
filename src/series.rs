//! Salary history: values with their positional category labels.

use serde::{Deserialize, Serialize};

/// Default series name shown in the chart legend and tooltip.
pub const DEFAULT_SERIES_NAME: &str = "Salaires";

/// An ordered salary series. `categories[i]` labels `values[i]`.
///
/// Lengths are not enforced here; [`crate::config::CardConfig::validate`]
/// checks them for configured data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    /// Legend name.
    pub name: String,
    /// Data points in display order.
    pub values: Vec<f64>,
    /// Labels in display order.
    pub categories: Vec<String>,
}

impl Series {
    /// Creates a named series.
    pub fn new(name: impl Into<String>, values: Vec<f64>, categories: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values,
            categories,
        }
    }

    /// The seven-point salary history shipped with the dashboard.
    pub fn sample() -> Self {
        let values = vec![29000.0, 44000.0, 36000.0, 37000.0, 32500.0, 32500.0, 35500.0];
        let categories = numbered_categories(values.len());
        Self::new(DEFAULT_SERIES_NAME, values, categories)
    }

    /// Number of data points.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` when there are no data points.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns `true` when every value has exactly one label.
    pub fn is_aligned(&self) -> bool {
        self.values.len() == self.categories.len()
    }
}

/// `"Salaire 1"`, `"Salaire 2"`, ... for `n` points.
pub fn numbered_categories(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("Salaire {i}")).collect()
}
