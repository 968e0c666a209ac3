//! Integration tests for theme-driven chart restyling.

mod common;

use salary_card::theme::color::hsl_string_to_hex;
use salary_card::theme::{ThemeMode, ThemeState};

#[test]
fn light_to_dark_restyles_every_color_field() {
    let (theme, _threshold, card) = common::card_with(common::sample_series());

    let light_hex = hsl_string_to_hex(ThemeState::LIGHT_PRIMARY).expect("light primary is valid");
    {
        let cfg = card.chart_config();
        assert_eq!(cfg.colors, vec![light_hex.clone()]);
        assert_eq!(cfg.tooltip.theme.as_str(), "light");
    }

    theme.set(ThemeState::new(ThemeMode::Dark, "217 33% 17%"));

    let dark_hex = hsl_string_to_hex("217 33% 17%").expect("dark primary is valid");
    assert_ne!(dark_hex, light_hex);
    let cfg = card.chart_config();
    assert_eq!(cfg.colors, vec![dark_hex.clone()]);
    assert_eq!(cfg.stroke.colors, vec![dark_hex.clone()]);
    assert_eq!(cfg.xaxis.crosshairs.stroke.color, dark_hex);
    assert_eq!(cfg.tooltip.theme.as_str(), "dark");
}

#[test]
fn every_theme_change_is_applied() {
    let (theme, _threshold, card) = common::card_with(common::sample_series());

    for (mode, primary, hex) in [
        (ThemeMode::Dark, "0 100% 50%", "#ff0000"),
        (ThemeMode::Light, "120 100% 50%", "#00ff00"),
        (ThemeMode::Dark, "0 0% 100%", "#ffffff"),
    ] {
        theme.set(ThemeState::new(mode, primary));
        let cfg = card.chart_config();
        assert_eq!(cfg.primary_color(), Some(hex));
        assert_eq!(cfg.xaxis.crosshairs.stroke.color, hex);
        assert_eq!(cfg.tooltip.theme, mode);
    }
}

#[test]
fn malformed_theme_color_leaves_chart_untouched() {
    let (theme, _threshold, card) = common::card_with(common::sample_series());
    let before = card.chart_config();

    theme.set(ThemeState::new(ThemeMode::Dark, "217 33%"));
    assert_eq!(card.chart_config(), before);

    theme.set(ThemeState::dark());
    assert_eq!(card.chart_config().tooltip.theme, ThemeMode::Dark);
}

#[test]
fn several_cards_share_one_store() {
    let theme = common::light_store();
    let threshold = salary_card::form::ThresholdField::default();
    let a = salary_card::card::SalaryChartCard::new(common::sample_series(), &theme, &threshold);
    let b = salary_card::card::SalaryChartCard::new(common::small_series(), &theme, &threshold);
    assert_eq!(theme.subscriber_count(), 2);

    theme.set(ThemeState::dark());
    assert_eq!(a.chart_config().primary_color(), Some("#1d283a"));
    assert_eq!(b.chart_config().primary_color(), Some("#1d283a"));

    a.destroy();
    assert_eq!(theme.subscriber_count(), 1);
    theme.set(ThemeState::light());
    assert_eq!(b.chart_config().primary_color(), Some("#f8fafc"));
}

#[test]
fn chart_json_reflects_current_theme() {
    let (theme, _threshold, card) = common::card_with(common::sample_series());
    theme.set(ThemeState::dark());

    let json = card.chart_config().to_json().expect("chart config serializes");
    let v: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
    assert_eq!(v["colors"][0], "#1d283a");
    assert_eq!(v["stroke"]["colors"][0], "#1d283a");
    assert_eq!(v["xaxis"]["crosshairs"]["stroke"]["color"], "#1d283a");
    assert_eq!(v["tooltip"]["theme"], "dark");
    assert_eq!(v["chart"]["toolbar"]["show"], false);
    assert_eq!(v["xaxis"]["labels"]["show"], false);
}

#[test]
fn held_chart_config_does_not_block_theme_switch() {
    let (theme, _threshold, card) = common::card_with(common::sample_series());

    let held = card.chart_config();
    theme.set(ThemeState::dark());
    assert_eq!(held.tooltip.theme, ThemeMode::Light);
    assert_eq!(card.chart_config().tooltip.theme, ThemeMode::Dark);

    let primary = card.with_chart_config(|cfg| {
        theme.set(ThemeState::light());
        cfg.primary_color().map(str::to_string)
    });
    assert_eq!(primary.as_deref(), Some("#1d283a"));
    assert_eq!(card.chart_config().primary_color(), Some("#f8fafc"));
}
