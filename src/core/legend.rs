//! Legend sizing and placement.
//!
//! The legend is a boxed overlay in the top-right corner with one row per
//! series: a swatch followed by the series label. Geometry is computed from
//! already measured label widths.

use serde::{Deserialize, Serialize};

use crate::core::types::{PixelPoint, Rect, Viewport};

pub const LEGEND_PADDING_PX: f64 = 10.0;
pub const LEGEND_SWATCH_SIZE_PX: f64 = 12.0;
pub const LEGEND_SWATCH_GAP_PX: f64 = 8.0;
pub const LEGEND_ROW_SPACING_PX: f64 = 20.0;
/// Inset of the box from the right surface edge and from the plot top.
pub const LEGEND_INSET_PX: f64 = 10.0;

const LEGEND_WIDTH_MARGIN_PX: f64 = 2.0 * LEGEND_PADDING_PX + LEGEND_SWATCH_GAP_PX;
const LEGEND_HEIGHT_MARGIN_PX: f64 = 2.0 * LEGEND_PADDING_PX;

/// One label per series; missing labels default to `Series {n}`.
#[must_use]
pub fn legend_labels(labels: &[String], series_count: usize) -> Vec<String> {
    (0..series_count)
        .map(|index| {
            labels
                .get(index)
                .cloned()
                .unwrap_or_else(|| format!("Series {}", index + 1))
        })
        .collect()
}

#[must_use]
pub fn legend_visible(series_count: usize, show_legend: bool) -> bool {
    series_count > 1 && show_legend
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegendRow {
    pub swatch: Rect,
    pub label_anchor: PixelPoint,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendLayout {
    pub frame: Rect,
    pub rows: Vec<LegendRow>,
}

impl LegendLayout {
    /// Sizes the box from the widest label and anchors it top-right.
    ///
    /// `label_widths` holds one measured width per row. Label anchors sit at
    /// the vertical middle of each row, left-aligned.
    #[must_use]
    pub fn compute(label_widths: &[f64], viewport: Viewport, plot_area: Rect) -> Self {
        let widest_label = label_widths.iter().copied().fold(0.0, f64::max);
        let width = widest_label + LEGEND_SWATCH_SIZE_PX + LEGEND_WIDTH_MARGIN_PX;
        let height = label_widths.len() as f64 * LEGEND_ROW_SPACING_PX + LEGEND_HEIGHT_MARGIN_PX;
        let frame = Rect::new(
            f64::from(viewport.width) - width - LEGEND_INSET_PX,
            plot_area.y + LEGEND_INSET_PX,
            width,
            height,
        );

        let swatch_x = frame.x + LEGEND_PADDING_PX;
        let rows = (0..label_widths.len())
            .map(|index| {
                let row_top = frame.y + LEGEND_PADDING_PX + index as f64 * LEGEND_ROW_SPACING_PX;
                let row_middle = row_top + LEGEND_ROW_SPACING_PX * 0.5;
                LegendRow {
                    swatch: Rect::new(
                        swatch_x,
                        row_middle - LEGEND_SWATCH_SIZE_PX * 0.5,
                        LEGEND_SWATCH_SIZE_PX,
                        LEGEND_SWATCH_SIZE_PX,
                    ),
                    label_anchor: PixelPoint::new(
                        swatch_x + LEGEND_SWATCH_SIZE_PX + LEGEND_SWATCH_GAP_PX,
                        row_middle,
                    ),
                }
            })
            .collect();

        Self { frame, rows }
    }
}
