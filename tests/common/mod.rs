//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use salary_card::card::SalaryChartCard;
use salary_card::form::ThresholdField;
use salary_card::series::Series;
use salary_card::theme::{ThemeState, ThemeStore};

/// The seven-point salary history used by the dashboard.
pub fn sample_series() -> Series {
    Series::sample()
}

/// A four-point series with round numbers.
pub fn small_series() -> Series {
    Series::new(
        "Small",
        vec![10.0, 20.0, 30.0, 40.0],
        vec!["a".into(), "b".into(), "c".into(), "d".into()],
    )
}

/// Theme store starting on the built-in light theme.
pub fn light_store() -> ThemeStore {
    ThemeStore::new(ThemeState::light())
}

/// Builds a card over `series` with a fresh store and a zero threshold.
///
/// Returns `(theme, threshold, card)`; the card borrows nothing, so the
/// caller keeps the inputs alive to drive it.
pub fn card_with(series: Series) -> (ThemeStore, ThresholdField, SalaryChartCard) {
    let theme = light_store();
    let threshold = ThresholdField::default();
    let card = SalaryChartCard::new(series, &theme, &threshold);
    (theme, threshold, card)
}
