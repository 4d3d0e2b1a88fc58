//! chart-canvas: grouped bar and line charts drawn onto a caller-owned surface.
//!
//! `core` turns data into pixel geometry (scales, plot area, ticks, bar groups,
//! line paths, legend box). `render` defines the drawing-surface contract and
//! the ordered frame replayed onto it. `api` validates input, resolves options
//! and wires the two together.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{
    BarChartData, BarChartOverrides, ChartRequest, LineChartData, LineChartOverrides,
    render_bar_chart, render_line_chart,
};
pub use error::{ChartError, ChartResult};
