//! Chart entry points: option resolution, input validation and the bar/line
//! frame builders.

mod axis_scene_builder;
mod bar_chart;
mod chart_options;
mod chart_request;
mod legend_scene_builder;
mod line_chart;
mod validation;

pub use bar_chart::{build_bar_chart_frame, draw_bar_chart, render_bar_chart};
pub use chart_options::{
    BarChartOptions, BarChartOverrides, LineChartOptions, LineChartOverrides,
};
pub use chart_request::ChartRequest;
pub use legend_scene_builder::{LegendEntry, legend_entries, series_color};
pub use line_chart::{build_line_chart_frame, draw_line_chart, render_line_chart};
pub use validation::{
    BarChartData, LineChartData, ValidatedBarData, ValidatedLineData, validate_bar_data,
    validate_line_data,
};
