//! Salary history sparkline card with theme-reactive styling.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Theme-to-chart style binding.
pub mod binder;
pub mod card;
pub mod chart;
pub mod config;
/// Threshold input holder.
pub mod form;
pub mod io;
pub mod observable;
pub mod series;
pub mod stats;
pub mod theme;

/// Top-level errors surfaced by the `salary-card` binary.
#[derive(Error, Debug)]
pub enum CardError {
    /// Configuration failed to load or validate.
    #[error(transparent)]
    Config(#[from] config::ConfigError),

    /// A statistic has no value for this input.
    #[error(transparent)]
    Stats(#[from] stats::StatsError),

    /// A theme color was not valid HSL.
    #[error("invalid theme color: {0}")]
    Color(#[from] theme::color::ColorError),

    /// Series CSV import or export failed.
    #[error(transparent)]
    SeriesCsv(#[from] io::series_csv::SeriesCsvError),

    /// Chart configuration could not be serialized.
    #[error("chart serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Catch-all for errors that do not fit a specific variant.
    #[error("{0}")]
    Other(String),
}

/// Installs the global `tracing` subscriber.
///
/// The filter is read from `RUST_LOG` and defaults to `warn`.
///
/// # Errors
///
/// Returns [`CardError::Other`] if a global subscriber is already set.
pub fn init_tracing() -> Result<(), CardError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| CardError::Other(format!("tracing init failed: {e}")))
}
