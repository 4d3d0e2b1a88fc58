use tracing::{debug, warn};

use crate::core::{
    BarGeometry, CategoryBars, Domain, GroupedBarLayout, LinearScale, Rect, ValueLabelPlacement,
    Viewport, legend_visible, plot_area, project_grouped_bars, tick_ladder,
};
use crate::error::ChartResult;
use crate::render::{
    Color, DrawingSurface, Font, RectPrimitive, RenderFrame, SurfaceRegistry, TextAlign,
    TextBaseline, TextMeasurer, TextPrimitive,
};

use super::axis_scene_builder::{
    CATEGORY_LABEL_OFFSET_PX, TICK_FONT_SIZE_PX, axis_color, push_axes, push_axis_titles,
    push_background, push_horizontal_grid, push_title, push_value_axis_ticks,
};
use super::legend_scene_builder::{legend_entries, push_legend, series_color};
use super::{BarChartData, BarChartOptions, BarChartOverrides, validate_bar_data};

const VALUE_LABEL_FONT_SIZE_PX: f64 = 11.0;
const VALUE_LABEL_OUTSIDE_GAP_PX: f64 = 5.0;

fn value_label_light_color() -> Color {
    Color::rgb8(0xff, 0xff, 0xff)
}

/// Runs the whole bar pipeline and returns the frame without touching a surface.
///
/// Order: background, gridlines and ticks, axes, bars and value labels,
/// category and axis labels, legend, title.
pub fn build_bar_chart_frame(
    viewport: Viewport,
    measurer: &dyn TextMeasurer,
    data: &BarChartData,
    overrides: &BarChartOverrides,
) -> ChartResult<RenderFrame> {
    let data = validate_bar_data(data)?;
    let options = BarChartOptions::resolve(overrides, data.series_count())?;
    let plot_area = plot_area(viewport, options.padding)?;

    let domain = Domain::zero_based(data.series.iter().map(Vec::as_slice))?;
    let value_scale = LinearScale::vertical(domain, plot_area)?;
    let ticks = tick_ladder(domain, value_scale)?;
    let layout = GroupedBarLayout::new(
        plot_area,
        data.category_count(),
        data.series_count(),
        options.bar_width_fraction,
    )?;
    let categories = project_grouped_bars(data.series, layout, value_scale)?;

    let mut frame = RenderFrame::new(viewport);
    push_background(&mut frame, viewport, options.background_color);
    if options.show_grid {
        push_horizontal_grid(&mut frame, plot_area, &ticks, options.grid_color);
    }
    push_value_axis_ticks(&mut frame, plot_area, &ticks);
    push_axes(&mut frame, plot_area);
    push_bars(&mut frame, &categories, &options);
    push_category_labels(&mut frame, plot_area, &categories, data.categories);
    push_axis_titles(
        &mut frame,
        viewport,
        plot_area,
        options.x_axis_label.as_deref(),
        options.y_axis_label.as_deref(),
    );
    if legend_visible(data.series_count(), options.show_legend) {
        let entries =
            legend_entries(&options.colors, &options.legend_labels, data.series_count());
        push_legend(&mut frame, measurer, viewport, plot_area, &entries);
    }
    push_title(&mut frame, viewport, options.padding, options.title.as_deref());

    frame.validate()?;
    debug!(
        categories = data.category_count(),
        series = data.series_count(),
        domain_min = domain.min,
        domain_max = domain.max,
        commands = frame.commands.len(),
        "built bar chart frame"
    );
    Ok(frame)
}

/// Builds the bar frame for `surface` and replays it there.
///
/// Nothing is drawn when validation or layout fails.
pub fn draw_bar_chart<S: DrawingSurface>(
    surface: &mut S,
    data: &BarChartData,
    overrides: &BarChartOverrides,
) -> ChartResult<()> {
    let frame = build_bar_chart_frame(surface.viewport(), &*surface, data, overrides)?;
    frame.replay(surface)
}

/// Resolves `surface_id`, draws the bar chart on it and hands the surface back.
pub fn render_bar_chart<'r, S: DrawingSurface>(
    registry: &'r mut SurfaceRegistry<S>,
    surface_id: &str,
    data: &BarChartData,
    overrides: &BarChartOverrides,
) -> ChartResult<&'r mut S> {
    let surface = match registry.resolve(surface_id) {
        Ok(surface) => surface,
        Err(err) => {
            warn!(surface_id, error = %err, "bar chart surface unavailable");
            return Err(err);
        }
    };
    if let Err(err) = draw_bar_chart(surface, data, overrides) {
        warn!(surface_id, error = %err, "bar chart rejected");
        return Err(err);
    }
    Ok(surface)
}

fn push_bars(frame: &mut RenderFrame, categories: &[CategoryBars], options: &BarChartOptions) {
    for category in categories {
        for bar in &category.bars {
            frame.push_rect(RectPrimitive::filled(
                bar.rect(),
                series_color(&options.colors, bar.series_index),
            ));
        }
    }
    if !options.show_values {
        return;
    }

    for bar in categories.iter().flat_map(|category| &category.bars) {
        let (y, color, baseline) = match bar.label_placement() {
            ValueLabelPlacement::Above => outside_label_anchor(bar),
            ValueLabelPlacement::Inside => (
                bar.y + bar.height * 0.5,
                value_label_light_color(),
                TextBaseline::Middle,
            ),
            ValueLabelPlacement::Hidden => continue,
        };
        frame.push_text(TextPrimitive::new(
            format_bar_value(bar.value),
            bar.center_x(),
            y,
            Font::sans(VALUE_LABEL_FONT_SIZE_PX),
            color,
            TextAlign::Center,
            baseline,
        ));
    }
}

/// Label position just past the bar end: above positive bars, below negative ones.
fn outside_label_anchor(bar: &BarGeometry) -> (f64, Color, TextBaseline) {
    if bar.value < 0.0 {
        (
            bar.y + bar.height + VALUE_LABEL_OUTSIDE_GAP_PX,
            axis_color(),
            TextBaseline::Top,
        )
    } else {
        (
            bar.y - VALUE_LABEL_OUTSIDE_GAP_PX,
            axis_color(),
            TextBaseline::Bottom,
        )
    }
}

fn push_category_labels(
    frame: &mut RenderFrame,
    plot_area: Rect,
    categories: &[CategoryBars],
    labels: &[String],
) {
    for (category, label) in categories.iter().zip(labels) {
        if label.is_empty() {
            continue;
        }
        frame.push_text(TextPrimitive::new(
            label.clone(),
            category.center_x,
            plot_area.bottom() + CATEGORY_LABEL_OFFSET_PX,
            Font::sans(TICK_FONT_SIZE_PX),
            axis_color(),
            TextAlign::Center,
            TextBaseline::Top,
        ));
    }
}

/// Shortest decimal form, so whole numbers print without a fraction.
fn format_bar_value(value: f64) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_values_print_without_trailing_zeroes() {
        assert_eq!(format_bar_value(30.0), "30");
        assert_eq!(format_bar_value(12.5), "12.5");
        assert_eq!(format_bar_value(-4.0), "-4");
    }
}
