use tracing::{debug, warn};

use crate::core::{
    Domain, LinearScale, Viewport, connect_points, plot_area, project_line_points, tick_ladder,
};
use crate::error::ChartResult;
use crate::render::{ArcPrimitive, DrawingSurface, LinePrimitive, RenderFrame, SurfaceRegistry};

use super::axis_scene_builder::{
    push_axes, push_axis_titles, push_background, push_domain_axis_ticks, push_horizontal_grid,
    push_title, push_value_axis_ticks, push_vertical_grid,
};
use super::{LineChartData, LineChartOptions, LineChartOverrides, validate_line_data};

/// Runs the whole line pipeline and returns the frame without touching a surface.
///
/// Points are joined in input order.
pub fn build_line_chart_frame(
    viewport: Viewport,
    data: &LineChartData,
    overrides: &LineChartOverrides,
) -> ChartResult<RenderFrame> {
    let line = validate_line_data(&data.values, overrides.x_values.as_deref())?;
    let options = LineChartOptions::resolve(overrides)?;
    let plot_area = plot_area(viewport, options.padding)?;

    let x_domain = Domain::from_values(&line.xs)?;
    let y_domain = Domain::from_values(line.ys)?;
    let x_scale = LinearScale::horizontal(x_domain, plot_area)?;
    let y_scale = LinearScale::vertical(y_domain, plot_area)?;
    let x_ticks = tick_ladder(x_domain, x_scale)?;
    let y_ticks = tick_ladder(y_domain, y_scale)?;
    let points = project_line_points(&line.xs, line.ys, x_scale, y_scale)?;
    let segments = connect_points(&points);

    let mut frame = RenderFrame::new(viewport);
    push_background(&mut frame, viewport, options.background_color);
    if options.show_grid {
        push_vertical_grid(&mut frame, plot_area, &x_ticks, options.grid_color);
        push_horizontal_grid(&mut frame, plot_area, &y_ticks, options.grid_color);
    }
    push_value_axis_ticks(&mut frame, plot_area, &y_ticks);
    push_domain_axis_ticks(&mut frame, plot_area, &x_ticks);
    push_axes(&mut frame, plot_area);

    for segment in &segments {
        frame.push_line(LinePrimitive::new(
            segment.x1,
            segment.y1,
            segment.x2,
            segment.y2,
            options.line_width,
            options.line_color,
        ));
    }
    if options.show_points && options.point_radius > 0.0 {
        for point in &points {
            frame.push_arc(ArcPrimitive::circle(
                point.x,
                point.y,
                options.point_radius,
                options.line_color,
            ));
        }
    }

    push_axis_titles(
        &mut frame,
        viewport,
        plot_area,
        options.x_axis_label.as_deref(),
        options.y_axis_label.as_deref(),
    );
    push_title(&mut frame, viewport, options.padding, options.title.as_deref());

    frame.validate()?;
    debug!(
        points = points.len(),
        segments = segments.len(),
        x_degenerate = x_domain.is_degenerate(),
        y_degenerate = y_domain.is_degenerate(),
        commands = frame.commands.len(),
        "built line chart frame"
    );
    Ok(frame)
}

/// Builds the line frame for `surface` and replays it there.
///
/// Nothing is drawn when validation or layout fails.
pub fn draw_line_chart<S: DrawingSurface>(
    surface: &mut S,
    data: &LineChartData,
    overrides: &LineChartOverrides,
) -> ChartResult<()> {
    let frame = build_line_chart_frame(surface.viewport(), data, overrides)?;
    frame.replay(surface)
}

/// Resolves `surface_id`, draws the line chart on it and hands the surface back.
pub fn render_line_chart<'r, S: DrawingSurface>(
    registry: &'r mut SurfaceRegistry<S>,
    surface_id: &str,
    data: &LineChartData,
    overrides: &LineChartOverrides,
) -> ChartResult<&'r mut S> {
    let surface = match registry.resolve(surface_id) {
        Ok(surface) => surface,
        Err(err) => {
            warn!(surface_id, error = %err, "line chart surface unavailable");
            return Err(err);
        }
    };
    if let Err(err) = draw_line_chart(surface, data, overrides) {
        warn!(surface_id, error = %err, "line chart rejected");
        return Err(err);
    }
    Ok(surface)
}
