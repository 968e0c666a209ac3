//! Sparkline chart configuration handed to the external charting surface.
//!
//! Field names serialize in the camelCase shape of ApexCharts options. One
//! field is not an ApexCharts option: `tooltip.valueSuffix` is plain data,
//! and the host must turn it into a `tooltip.y.formatter` function (see
//! [`Tooltip::format_value`]) before handing the options to the chart.

use serde::Serialize;

use crate::series::Series;
use crate::theme::color::{ColorError, Hsl};
use crate::theme::{ThemeMode, ThemeState};

/// Line color used until the first theme is applied.
pub const BASE_COLOR: &str = "#FFFFFF";
/// Card height in pixels.
pub const DEFAULT_HEIGHT: u32 = 150;
/// Appended to values in the tooltip.
pub const DEFAULT_VALUE_SUFFIX: &str = "$";

/// Full chart options for the salary sparkline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    pub series: Vec<SeriesData>,
    pub chart: ChartOptions,
    pub data_labels: Enabled,
    pub fill: Fill,
    pub stroke: Stroke,
    pub xaxis: XAxis,
    pub tooltip: Tooltip,
    /// Series colors.
    pub colors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesData {
    pub name: String,
    pub data: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub font_family: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub height: u32,
    pub toolbar: Visible,
    /// Sparkline mode hides axes and grid.
    pub sparkline: Enabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Enabled {
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Visible {
    pub show: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fill {
    #[serde(rename = "type")]
    pub kind: String,
    pub gradient: Gradient,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Gradient {
    pub shade_intensity: f64,
    pub opacity_from: f64,
    pub opacity_to: f64,
    pub stops: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stroke {
    pub curve: String,
    pub show: bool,
    pub width: u32,
    /// Line colors.
    pub colors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct XAxis {
    pub categories: Vec<String>,
    pub labels: Visible,
    pub crosshairs: Crosshairs,
    pub tooltip: Enabled,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Crosshairs {
    pub position: String,
    pub stroke: CrosshairStroke,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrosshairStroke {
    pub color: String,
    pub width: u32,
    pub dash_array: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    pub theme: ThemeMode,
    /// Suffix appended to each y value. Serialized as `valueSuffix`, which
    /// ApexCharts ignores; the host maps it to a `y.formatter` callback.
    pub value_suffix: String,
}

impl Tooltip {
    /// Formats a y value the way the tooltip shows it, e.g. `35500$`.
    pub fn format_value(&self, value: f64) -> String {
        format!("{value}{}", self.value_suffix)
    }
}

/// Style fields derived from one theme state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartStylePatch {
    /// `#rrggbb` applied to series, stroke and crosshair.
    pub color: String,
    /// Tooltip color scheme.
    pub tooltip_theme: ThemeMode,
}

impl ChartStylePatch {
    /// Derives the patch for `theme`.
    ///
    /// # Errors
    ///
    /// Returns a [`ColorError`] if the theme's primary color is not valid HSL.
    pub fn from_theme(theme: &ThemeState) -> Result<Self, ColorError> {
        Ok(Self {
            color: Hsl::parse(&theme.primary)?.to_hex(),
            tooltip_theme: theme.mode,
        })
    }
}

impl ChartConfig {
    /// Builds the sparkline options for `series`, colored with `base_color`.
    pub fn sparkline(series: &Series, base_color: &str, height: u32, value_suffix: &str) -> Self {
        Self {
            series: vec![SeriesData {
                name: series.name.clone(),
                data: series.values.clone(),
            }],
            chart: ChartOptions {
                font_family: "inherit".to_string(),
                kind: "area".to_string(),
                height,
                toolbar: Visible { show: false },
                sparkline: Enabled { enabled: true },
            },
            data_labels: Enabled { enabled: false },
            fill: Fill {
                kind: "gradient".to_string(),
                gradient: Gradient {
                    shade_intensity: 1.0,
                    opacity_from: 0.4,
                    opacity_to: 0.2,
                    stops: vec![15, 120, 100],
                },
            },
            stroke: Stroke {
                curve: "smooth".to_string(),
                show: true,
                width: 3,
                colors: vec![base_color.to_string()],
            },
            xaxis: XAxis {
                categories: series.categories.clone(),
                labels: Visible { show: false },
                crosshairs: Crosshairs {
                    position: "front".to_string(),
                    stroke: CrosshairStroke {
                        color: base_color.to_string(),
                        width: 1,
                        dash_array: 4,
                    },
                },
                tooltip: Enabled { enabled: true },
            },
            tooltip: Tooltip {
                theme: ThemeMode::Light,
                value_suffix: value_suffix.to_string(),
            },
            colors: vec![base_color.to_string()],
        }
    }

    /// Applies every field of `patch` in one step.
    pub fn apply_style(&mut self, patch: &ChartStylePatch) {
        self.colors = vec![patch.color.clone()];
        self.stroke.colors = vec![patch.color.clone()];
        self.xaxis.crosshairs.stroke.color = patch.color.clone();
        self.tooltip.theme = patch.tooltip_theme;
    }

    /// Current primary series color.
    pub fn primary_color(&self) -> Option<&str> {
        self.colors.first().map(String::as_str)
    }

    /// Serializes to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
