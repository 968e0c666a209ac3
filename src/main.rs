//! Salary card entry point: CLI wiring and config-driven card construction.

use std::path::Path;
use std::process;

use salary_card::card::SalaryChartCard;
use salary_card::config::CardConfig;
use salary_card::form::ThresholdField;
use salary_card::io::series_csv::load_series_csv;
use salary_card::theme::color::Hsl;
use salary_card::theme::{ThemeMode, ThemeState, ThemeStore};
use salary_card::{CardError, init_tracing};
use tracing::info;

/// Parsed CLI arguments.
struct CliArgs {
    config_path: Option<String>,
    preset: Option<String>,
    series_path: Option<String>,
    theme: Option<ThemeMode>,
    primary: Option<String>,
    threshold: Option<f64>,
    json: bool,
}

fn print_help() {
    eprintln!("salary-card: salary history sparkline card");
    eprintln!();
    eprintln!("Usage: salary-card [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config <path>          Load card from TOML config file");
    eprintln!("  --preset <name>          Use a built-in preset (salaries, salaries_dark)");
    eprintln!("  --series <path>          Replace the series with a category,value CSV");
    eprintln!("  --theme <light|dark>     Switch the theme after construction");
    eprintln!("  --primary <hsl>          Primary color for --theme, e.g. \"217 33% 17%\"");
    eprintln!("  --threshold <f64>        Salary threshold for the percent-above statistic");
    eprintln!("  --json                   Print the chart configuration as JSON");
    eprintln!("  --help                   Show this help message");
    eprintln!();
    eprintln!("If no --config or --preset is given, the salaries preset is used.");
    eprintln!("Set RUST_LOG=debug to trace theme and threshold changes.");
}

fn require_value<'a>(args: &'a [String], i: usize, flag: &str, what: &str) -> &'a str {
    match args.get(i) {
        Some(v) => v,
        None => {
            eprintln!("error: {flag} requires {what}");
            process::exit(1);
        }
    }
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        config_path: None,
        preset: None,
        series_path: None,
        theme: None,
        primary: None,
        threshold: None,
        json: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--config" => {
                i += 1;
                let value = require_value(&args, i, "--config", "a path argument");
                cli.config_path = Some(value.to_string());
            }
            "--preset" => {
                i += 1;
                let value = require_value(&args, i, "--preset", "a name argument");
                cli.preset = Some(value.to_string());
            }
            "--series" => {
                i += 1;
                let value = require_value(&args, i, "--series", "a path argument");
                cli.series_path = Some(value.to_string());
            }
            "--theme" => {
                i += 1;
                let raw = require_value(&args, i, "--theme", "light or dark");
                match raw.parse::<ThemeMode>() {
                    Ok(mode) => cli.theme = Some(mode),
                    Err(e) => {
                        eprintln!("error: {e}");
                        process::exit(1);
                    }
                }
            }
            "--primary" => {
                i += 1;
                let value = require_value(&args, i, "--primary", "an HSL string");
                cli.primary = Some(value.to_string());
            }
            "--threshold" => {
                i += 1;
                let raw = require_value(&args, i, "--threshold", "a number");
                match raw.parse::<f64>() {
                    Ok(t) if t.is_finite() => cli.threshold = Some(t),
                    _ => {
                        eprintln!("error: --threshold value \"{raw}\" is not a valid number");
                        process::exit(1);
                    }
                }
            }
            "--json" => {
                cli.json = true;
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    if cli.config_path.is_some() && cli.preset.is_some() {
        eprintln!("error: --config and --preset are mutually exclusive; choose one source");
        process::exit(1);
    }

    cli
}

/// Loads the configuration: `--config` first, then `--preset`, then the default.
fn load_config(cli: &CliArgs) -> Result<CardConfig, CardError> {
    let cfg = if let Some(ref path) = cli.config_path {
        CardConfig::from_toml_file(Path::new(path))?
    } else if let Some(ref name) = cli.preset {
        CardConfig::from_preset(name)?
    } else {
        CardConfig::salaries()
    };

    let errors = cfg.validate();
    if let Some(first) = errors.first() {
        for e in &errors[1..] {
            eprintln!("{e}");
        }
        return Err(first.clone().into());
    }
    Ok(cfg)
}

fn run(cli: &CliArgs) -> Result<(), CardError> {
    let cfg = load_config(cli)?;

    let series = match cli.series_path {
        Some(ref path) => load_series_csv(Path::new(path), &cfg.card.series_name)?,
        None => cfg.series(),
    };
    if !series.is_aligned() {
        return Err(CardError::Other(format!(
            "series has {} labels for {} values",
            series.categories.len(),
            series.values.len()
        )));
    }

    let theme = ThemeStore::new(cfg.theme_state());
    let threshold = ThresholdField::new(cfg.data.threshold);
    let card = SalaryChartCard::with_options(series, &theme, &threshold, &cfg.card_options());
    info!(points = card.series().len(), "card constructed");

    // Drive changes through the observable inputs, as a host UI would
    if cli.theme.is_some() || cli.primary.is_some() {
        let mode = cli.theme.unwrap_or(theme.get().mode);
        let next = match cli.primary {
            Some(ref primary) => {
                Hsl::parse(primary)?;
                ThemeState::new(mode, primary.clone())
            }
            None => ThemeState::preset(mode),
        };
        theme.set(next);
    }
    if let Some(t) = cli.threshold {
        threshold.set(t);
    }

    println!("{}", card.summary());
    println!();
    let config = card.chart_config();
    println!(
        "Chart color:      {} (tooltip {})",
        config.primary_color().unwrap_or("-"),
        config.tooltip.theme
    );

    if cli.json {
        println!("{}", config.to_json()?);
    }

    card.destroy();
    Ok(())
}

fn main() {
    let cli = parse_args();

    if let Err(e) = init_tracing() {
        eprintln!("warning: {e}");
    }

    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
