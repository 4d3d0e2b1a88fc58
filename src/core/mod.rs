pub mod bar_series;
pub mod layout;
pub mod legend;
pub mod line_series;
pub mod scale;
pub mod types;

pub use bar_series::{
    BarGeometry, CategoryBars, GroupedBarLayout, MAX_BAR_SERIES, ValueLabelPlacement,
    project_grouped_bars,
};
pub use layout::{TICK_STEPS, Tick, format_tick_label, plot_area, tick_ladder};
pub use legend::{LegendLayout, LegendRow, legend_labels, legend_visible};
pub use line_series::{LineSegment, connect_points, project_line_points};
pub use scale::{BAR_DOMAIN_HEADROOM, Domain, LinearScale};
pub use types::{PixelPoint, Rect, Viewport};
