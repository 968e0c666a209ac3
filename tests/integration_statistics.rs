//! Integration tests for the statistics panel.

mod common;

use salary_card::series::Series;
use salary_card::stats::{self, StatsError};

#[test]
fn documented_statistics() {
    assert_eq!(stats::mean(&[]), 0.0);
    assert_eq!(stats::mean(&[10.0, 20.0]), 15.0);
    assert_eq!(stats::median(&[]), Err(StatsError::EmptyInput));
    assert_eq!(stats::median(&[1.0, 2.0, 3.0]), Ok(2.0));
    assert_eq!(stats::median(&[1.0, 2.0, 3.0, 4.0]), Ok(2.5));
    assert_eq!(stats::percent_above(&[10.0, 20.0, 30.0, 40.0], 20.0), 50);
}

#[test]
fn card_statistics_follow_threshold_input() {
    let (_theme, threshold, card) = common::card_with(common::small_series());
    assert_eq!(card.mean(), 25.0);
    assert_eq!(card.median(), Ok(25.0));
    assert_eq!(card.percent_above(), 100);

    threshold.set(20.0);
    assert_eq!(card.percent_above(), 50);

    assert!(threshold.set_text("35"));
    assert_eq!(card.percent_above(), 25);

    let summary = card.summary();
    assert_eq!(summary.threshold, 35.0);
    assert_eq!(summary.percent_above, 25);
    assert_eq!(summary.min, Some(10.0));
    assert_eq!(summary.max, Some(40.0));
}

#[test]
fn median_is_repeatable_and_leaves_series_order() {
    let unsorted = Series::new(
        "u",
        vec![40.0, 10.0, 30.0, 20.0, 50.0],
        vec!["a".into(), "b".into(), "c".into(), "d".into(), "e".into()],
    );
    let (_theme, _threshold, card) = common::card_with(unsorted);

    assert_eq!(card.median(), Ok(30.0));
    assert_eq!(card.median(), Ok(30.0));
    assert_eq!(card.series().values, vec![40.0, 10.0, 30.0, 20.0, 50.0]);
    assert_eq!(card.chart_config().series[0].data[0], 40.0);
}

#[test]
fn destroyed_card_stops_listening() {
    let (theme, threshold, card) = common::card_with(common::sample_series());
    assert!(card.is_attached());
    card.destroy();
    assert_eq!(theme.subscriber_count(), 0);
    assert_eq!(threshold.subscriber_count(), 0);
    // Inputs keep working without listeners
    threshold.set(1.0);
    assert_eq!(threshold.value(), 1.0);
}
