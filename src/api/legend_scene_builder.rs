use crate::core::{LegendLayout, Rect, Viewport, legend_labels};
use crate::render::{
    Color, Font, RectPrimitive, RenderFrame, TextAlign, TextBaseline, TextMeasurer, TextPrimitive,
};

use super::axis_scene_builder::{AXIS_LINE_WIDTH_PX, axis_color};

const LEGEND_FONT_SIZE_PX: f64 = 12.0;

/// A series as shown in the legend.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub color: Color,
    pub label: String,
}

/// Pairs each series with its palette color and label.
///
/// Colors cycle through `palette`; missing labels default to `Series {n}`.
#[must_use]
pub fn legend_entries(
    palette: &[Color],
    labels: &[String],
    series_count: usize,
) -> Vec<LegendEntry> {
    legend_labels(labels, series_count)
        .into_iter()
        .enumerate()
        .map(|(index, label)| LegendEntry {
            color: series_color(palette, index),
            label,
        })
        .collect()
}

/// Cyclic palette lookup; an empty palette falls back to black.
#[must_use]
pub fn series_color(palette: &[Color], series_index: usize) -> Color {
    if palette.is_empty() {
        return Color::rgb(0.0, 0.0, 0.0);
    }
    palette[series_index % palette.len()]
}

fn legend_background_color() -> Color {
    Color::rgb8(0xff, 0xff, 0xff)
}

/// Boxed legend in the top-right corner: bordered swatch plus label per entry.
pub(super) fn push_legend(
    frame: &mut RenderFrame,
    measurer: &dyn TextMeasurer,
    viewport: Viewport,
    plot_area: Rect,
    entries: &[LegendEntry],
) {
    let font = Font::sans(LEGEND_FONT_SIZE_PX);
    let widths: Vec<f64> = entries
        .iter()
        .map(|entry| measurer.measure_text(&entry.label, &font))
        .collect();
    let legend = LegendLayout::compute(&widths, viewport, plot_area);

    frame.push_rect(
        RectPrimitive::filled(legend.frame, legend_background_color())
            .with_border(axis_color(), AXIS_LINE_WIDTH_PX),
    );
    for (row, entry) in legend.rows.iter().zip(entries) {
        frame.push_rect(
            RectPrimitive::filled(row.swatch, entry.color)
                .with_border(axis_color(), AXIS_LINE_WIDTH_PX),
        );
        if entry.label.is_empty() {
            continue;
        }
        frame.push_text(TextPrimitive::new(
            entry.label.clone(),
            row.label_anchor.x,
            row.label_anchor.y,
            font.clone(),
            axis_color(),
            TextAlign::Left,
            TextBaseline::Middle,
        ));
    }
}
