//! The salary history chart card.

use std::cell::Cell;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::binder::ChartStyleBinder;
use crate::chart::{BASE_COLOR, ChartConfig, DEFAULT_HEIGHT, DEFAULT_VALUE_SUFFIX};
use crate::form::ThresholdField;
use crate::observable::Subscription;
use crate::series::Series;
use crate::stats::{self, SeriesSummary, StatsError};
use crate::theme::ThemeStore;

/// Presentation options that do not change over the card's life.
#[derive(Debug, Clone, PartialEq)]
pub struct CardOptions {
    /// Color before the first theme is applied.
    pub base_color: String,
    /// Chart height in pixels.
    pub height: u32,
    /// Tooltip value suffix.
    pub value_suffix: String,
}

impl Default for CardOptions {
    fn default() -> Self {
        Self {
            base_color: BASE_COLOR.to_string(),
            height: DEFAULT_HEIGHT,
            value_suffix: DEFAULT_VALUE_SUFFIX.to_string(),
        }
    }
}

/// Chart card with a theme-reactive sparkline and a statistics panel.
///
/// Construction subscribes to the theme store and the threshold field and
/// applies the current theme once. The subscriptions are released by
/// [`SalaryChartCard::destroy`] or when the card is dropped.
#[derive(Debug)]
pub struct SalaryChartCard {
    series: Series,
    binder: ChartStyleBinder,
    threshold: Rc<Cell<f64>>,
    subscriptions: Vec<Subscription>,
}

impl SalaryChartCard {
    /// Builds a card with default presentation options.
    pub fn new(series: Series, theme: &ThemeStore, threshold: &ThresholdField) -> Self {
        Self::with_options(series, theme, threshold, &CardOptions::default())
    }

    /// Builds a card.
    pub fn with_options(
        series: Series,
        theme: &ThemeStore,
        threshold: &ThresholdField,
        options: &CardOptions,
    ) -> Self {
        let config = ChartConfig::sparkline(
            &series,
            &options.base_color,
            options.height,
            &options.value_suffix,
        );
        let binder = ChartStyleBinder::new(config);

        let mut subscriptions = Vec::with_capacity(2);
        subscriptions.push(binder.bind(theme));

        let current = Rc::new(Cell::new(threshold.value()));
        let slot = Rc::clone(&current);
        subscriptions.push(threshold.subscribe(move |v| {
            debug!(threshold = *v, "threshold changed");
            slot.set(*v);
        }));

        let initial = theme.get();
        if let Err(e) = binder.on_theme_change(&initial) {
            warn!(error = %e, "initial theme not applied, keeping base color");
        }

        Self {
            series,
            binder,
            threshold: current,
            subscriptions,
        }
    }

    /// The charted series.
    pub fn series(&self) -> &Series {
        &self.series
    }

    /// Copy of the chart configuration for handing to a renderer.
    ///
    /// The copy is detached: later theme changes do not reach it.
    pub fn chart_config(&self) -> ChartConfig {
        self.binder.snapshot()
    }

    /// Runs `f` against the live chart configuration without copying it.
    ///
    /// A theme change raised inside `f` is applied once `f` returns.
    pub fn with_chart_config<R>(&self, f: impl FnOnce(&ChartConfig) -> R) -> R {
        self.binder.with_config(f)
    }

    /// Last threshold value received from the input field.
    pub fn threshold(&self) -> f64 {
        self.threshold.get()
    }

    /// Rounded mean salary, 0 when there is no data.
    pub fn mean(&self) -> f64 {
        stats::mean(&self.series.values)
    }

    /// Median salary.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::EmptyInput`] when the series is empty.
    pub fn median(&self) -> Result<f64, StatsError> {
        stats::median(&self.series.values)
    }

    /// Percentage of salaries strictly above the current threshold.
    pub fn percent_above(&self) -> u32 {
        stats::percent_above(&self.series.values, self.threshold())
    }

    /// All panel values at the current threshold.
    pub fn summary(&self) -> SeriesSummary {
        SeriesSummary::from_series(&self.series.values, self.threshold())
    }

    /// Returns `true` while the card still holds its subscriptions.
    pub fn is_attached(&self) -> bool {
        self.subscriptions.iter().any(Subscription::is_active)
    }

    /// Releases the theme and threshold subscriptions.
    pub fn destroy(mut self) {
        self.detach();
    }

    fn detach(&mut self) {
        if !self.subscriptions.is_empty() {
            debug!(count = self.subscriptions.len(), "releasing card subscriptions");
        }
        self.subscriptions.clear();
    }
}

impl Drop for SalaryChartCard {
    fn drop(&mut self) {
        self.detach();
    }
}
