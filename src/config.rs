//! TOML-based card configuration and preset definitions.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::card::CardOptions;
use crate::chart::{BASE_COLOR, DEFAULT_HEIGHT, DEFAULT_VALUE_SUFFIX};
use crate::series::{DEFAULT_SERIES_NAME, Series, numbered_categories};
use crate::theme::color::{Hsl, is_hex_color};
use crate::theme::{ThemeMode, ThemeState};

/// Top-level card configuration parsed from TOML.
///
/// All fields have defaults matching the `salaries` preset. Load from TOML
/// with [`CardConfig::from_toml_file`] or use [`CardConfig::salaries`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CardConfig {
    /// Presentation options.
    #[serde(default)]
    pub card: CardSection,
    /// Salary series and threshold.
    #[serde(default)]
    pub data: DataSection,
    /// Initial ambient theme.
    #[serde(default)]
    pub theme: ThemeSection,
}

/// Presentation options.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CardSection {
    /// Legend and tooltip name of the series.
    pub series_name: String,
    /// Chart height in pixels (must be > 0).
    pub height: u32,
    /// Suffix appended to tooltip values.
    pub value_suffix: String,
    /// `#rrggbb` color used before a theme is applied.
    pub base_color: String,
}

impl Default for CardSection {
    fn default() -> Self {
        Self {
            series_name: DEFAULT_SERIES_NAME.to_string(),
            height: DEFAULT_HEIGHT,
            value_suffix: DEFAULT_VALUE_SUFFIX.to_string(),
            base_color: BASE_COLOR.to_string(),
        }
    }
}

/// Salary series and threshold.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DataSection {
    /// Salary values in display order.
    pub values: Vec<f64>,
    /// One label per value. Empty means `"Salaire 1"`, `"Salaire 2"`, ...
    ///
    /// Omitting the key in TOML yields generated labels rather than the
    /// sample labels, so a custom `values` list stays aligned.
    #[serde(default)]
    pub categories: Vec<String>,
    /// Initial threshold for the percent-above statistic.
    pub threshold: f64,
}

impl Default for DataSection {
    fn default() -> Self {
        let sample = Series::sample();
        Self {
            values: sample.values,
            categories: sample.categories,
            threshold: 0.0,
        }
    }
}

/// Initial ambient theme.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeSection {
    /// `"light"` or `"dark"`.
    pub mode: ThemeMode,
    /// HSL primary color; defaults to the built-in color for `mode`.
    pub primary: Option<String>,
}

impl Default for ThemeSection {
    fn default() -> Self {
        Self {
            mode: ThemeMode::Light,
            primary: None,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("config error: {field} - {message}")]
pub struct ConfigError {
    /// Dotted field path (e.g., `"data.categories"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl ConfigError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl CardConfig {
    /// The salary history card with the light theme.
    pub fn salaries() -> Self {
        Self::default()
    }

    /// The salary history card with the dark theme.
    pub fn salaries_dark() -> Self {
        Self {
            theme: ThemeSection {
                mode: ThemeMode::Dark,
                primary: None,
            },
            ..Self::default()
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["salaries", "salaries_dark"];

    /// Loads a configuration from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "salaries" => Ok(Self::salaries()),
            "salaries_dark" => Ok(Self::salaries_dark()),
            _ => Err(ConfigError::new(
                "preset",
                format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            )),
        }
    }

    /// Parses a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| {
            ConfigError::new("config", format!("cannot read \"{}\": {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::new("toml", e.to_string()))
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let c = &self.card;
        if c.height == 0 {
            errors.push(ConfigError::new("card.height", "must be > 0"));
        }
        if !is_hex_color(&c.base_color) {
            errors.push(ConfigError::new(
                "card.base_color",
                format!("must be a #rrggbb color, got \"{}\"", c.base_color),
            ));
        }

        let d = &self.data;
        if !d.categories.is_empty() && d.categories.len() != d.values.len() {
            errors.push(ConfigError::new(
                "data.categories",
                format!(
                    "has {} labels for {} values",
                    d.categories.len(),
                    d.values.len()
                ),
            ));
        }
        if let Some(i) = d.values.iter().position(|v| !v.is_finite()) {
            errors.push(ConfigError::new(
                format!("data.values[{i}]"),
                "must be a finite number",
            ));
        }
        if !d.threshold.is_finite() {
            errors.push(ConfigError::new("data.threshold", "must be a finite number"));
        }

        if let Some(primary) = &self.theme.primary {
            if let Err(e) = Hsl::parse(primary) {
                errors.push(ConfigError::new("theme.primary", e.to_string()));
            }
        }

        errors
    }

    /// The configured series; missing labels are generated.
    pub fn series(&self) -> Series {
        let categories = if self.data.categories.is_empty() {
            numbered_categories(self.data.values.len())
        } else {
            self.data.categories.clone()
        };
        Series::new(
            self.card.series_name.clone(),
            self.data.values.clone(),
            categories,
        )
    }

    /// The configured initial theme.
    pub fn theme_state(&self) -> ThemeState {
        match &self.theme.primary {
            Some(primary) => ThemeState::new(self.theme.mode, primary.clone()),
            None => ThemeState::preset(self.theme.mode),
        }
    }

    /// Presentation options for [`crate::card::SalaryChartCard::with_options`].
    pub fn card_options(&self) -> CardOptions {
        CardOptions {
            base_color: self.card.base_color.clone(),
            height: self.card.height,
            value_suffix: self.card.value_suffix.clone(),
        }
    }
}
