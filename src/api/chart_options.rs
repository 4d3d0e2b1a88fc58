use serde::{Deserialize, Serialize};

use crate::error::ChartResult;
use crate::render::Color;

use super::validation::{validate_bar_options, validate_line_options};

/// Caller-supplied bar chart settings; `None` keeps the default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarChartOverrides {
    pub colors: Option<Vec<Color>>,
    pub background_color: Option<Color>,
    pub bar_width: Option<f64>,
    pub padding: Option<f64>,
    pub grid_color: Option<Color>,
    pub title: Option<String>,
    pub x_axis_label: Option<String>,
    pub y_axis_label: Option<String>,
    pub show_grid: Option<bool>,
    pub legend_labels: Option<Vec<String>>,
    pub show_legend: Option<bool>,
    pub show_values: Option<bool>,
}

impl BarChartOverrides {
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = Some(padding);
        self
    }

    #[must_use]
    pub fn with_legend_labels<I, L>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        self.legend_labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }
}

/// Fully populated bar chart settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChartOptions {
    pub colors: Vec<Color>,
    pub background_color: Color,
    pub bar_width_fraction: f64,
    pub padding: f64,
    pub grid_color: Color,
    pub title: Option<String>,
    pub x_axis_label: Option<String>,
    pub y_axis_label: Option<String>,
    pub show_grid: bool,
    pub legend_labels: Vec<String>,
    pub show_legend: bool,
    pub show_values: bool,
}

impl BarChartOptions {
    /// Defaults for a chart with `series_count` series.
    #[must_use]
    pub fn defaults(series_count: usize) -> Self {
        Self {
            colors: default_bar_palette(),
            background_color: default_background_color(),
            bar_width_fraction: 0.7,
            padding: 60.0,
            grid_color: default_grid_color(),
            title: None,
            x_axis_label: None,
            y_axis_label: None,
            show_grid: false,
            legend_labels: Vec::new(),
            show_legend: series_count > 1,
            show_values: true,
        }
    }

    /// Overlays `overrides` on the defaults field by field, then validates.
    pub fn resolve(overrides: &BarChartOverrides, series_count: usize) -> ChartResult<Self> {
        let defaults = Self::defaults(series_count);
        let options = Self {
            colors: overrides.colors.clone().unwrap_or(defaults.colors),
            background_color: overrides
                .background_color
                .unwrap_or(defaults.background_color),
            bar_width_fraction: overrides.bar_width.unwrap_or(defaults.bar_width_fraction),
            padding: overrides.padding.unwrap_or(defaults.padding),
            grid_color: overrides.grid_color.unwrap_or(defaults.grid_color),
            title: non_empty(overrides.title.as_deref()),
            x_axis_label: non_empty(overrides.x_axis_label.as_deref()),
            y_axis_label: non_empty(overrides.y_axis_label.as_deref()),
            show_grid: overrides.show_grid.unwrap_or(defaults.show_grid),
            legend_labels: overrides
                .legend_labels
                .clone()
                .unwrap_or(defaults.legend_labels),
            show_legend: overrides.show_legend.unwrap_or(defaults.show_legend),
            show_values: overrides.show_values.unwrap_or(defaults.show_values),
        };
        validate_bar_options(options)
    }
}

/// Caller-supplied line chart settings; `None` keeps the default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineChartOverrides {
    pub x_values: Option<Vec<f64>>,
    pub line_color: Option<Color>,
    pub background_color: Option<Color>,
    pub line_width: Option<f64>,
    pub point_radius: Option<f64>,
    pub show_points: Option<bool>,
    pub padding: Option<f64>,
    pub grid_color: Option<Color>,
    pub show_grid: Option<bool>,
    pub title: Option<String>,
    pub x_axis_label: Option<String>,
    pub y_axis_label: Option<String>,
}

impl LineChartOverrides {
    #[must_use]
    pub fn with_x_values(mut self, x_values: Vec<f64>) -> Self {
        self.x_values = Some(x_values);
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Fully populated line chart settings.
///
/// `x_values` stays `None` when the caller relies on the implicit `1..=N` axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChartOptions {
    pub x_values: Option<Vec<f64>>,
    pub line_color: Color,
    pub background_color: Color,
    pub line_width: f64,
    pub point_radius: f64,
    pub show_points: bool,
    pub padding: f64,
    pub grid_color: Color,
    pub show_grid: bool,
    pub title: Option<String>,
    pub x_axis_label: Option<String>,
    pub y_axis_label: Option<String>,
}

impl Default for LineChartOptions {
    fn default() -> Self {
        Self {
            x_values: None,
            line_color: Color::rgb8(0x4a, 0x90, 0xd9),
            background_color: default_background_color(),
            line_width: 2.0,
            point_radius: 4.0,
            show_points: true,
            padding: 20.0,
            grid_color: default_grid_color(),
            show_grid: true,
            title: None,
            x_axis_label: None,
            y_axis_label: None,
        }
    }
}

impl LineChartOptions {
    /// Overlays `overrides` on the defaults field by field, then validates.
    pub fn resolve(overrides: &LineChartOverrides) -> ChartResult<Self> {
        let defaults = Self::default();
        let options = Self {
            x_values: overrides.x_values.clone(),
            line_color: overrides.line_color.unwrap_or(defaults.line_color),
            background_color: overrides
                .background_color
                .unwrap_or(defaults.background_color),
            line_width: overrides.line_width.unwrap_or(defaults.line_width),
            point_radius: overrides.point_radius.unwrap_or(defaults.point_radius),
            show_points: overrides.show_points.unwrap_or(defaults.show_points),
            padding: overrides.padding.unwrap_or(defaults.padding),
            grid_color: overrides.grid_color.unwrap_or(defaults.grid_color),
            show_grid: overrides.show_grid.unwrap_or(defaults.show_grid),
            title: non_empty(overrides.title.as_deref()),
            x_axis_label: non_empty(overrides.x_axis_label.as_deref()),
            y_axis_label: non_empty(overrides.y_axis_label.as_deref()),
        };
        validate_line_options(options)
    }
}

fn default_bar_palette() -> Vec<Color> {
    vec![
        Color::rgb8(0x4e, 0x79, 0xa7),
        Color::rgb8(0xf2, 0x8e, 0x2b),
        Color::rgb8(0xe1, 0x57, 0x59),
    ]
}

fn default_background_color() -> Color {
    Color::rgb8(0xff, 0xff, 0xff)
}

fn default_grid_color() -> Color {
    Color::rgb8(0xe0, 0xe0, 0xe0)
}

fn non_empty(text: Option<&str>) -> Option<String> {
    text.filter(|text| !text.is_empty()).map(str::to_owned)
}
