use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::scale::LinearScale;
use crate::core::types::Rect;
use crate::error::{ChartError, ChartResult};

/// Upper bound on series per bar chart.
pub const MAX_BAR_SERIES: usize = 3;

/// Bars taller than this carry their value label outside the bar end.
pub const VALUE_LABEL_ABOVE_MIN_HEIGHT_PX: f64 = 20.0;
/// Bars taller than this (and not above the previous bound) carry it inside.
pub const VALUE_LABEL_INSIDE_MIN_HEIGHT_PX: f64 = 10.0;

/// Where a bar's value label goes, decided by its pixel height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueLabelPlacement {
    /// Dark text just beyond the bar end (above it, or below a negative bar).
    Above,
    /// Light text centered on the bar.
    Inside,
    /// Bar too small to hold readable text.
    Hidden,
}

impl ValueLabelPlacement {
    #[must_use]
    pub fn for_bar_height(height_px: f64) -> Self {
        if height_px > VALUE_LABEL_ABOVE_MIN_HEIGHT_PX {
            Self::Above
        } else if height_px > VALUE_LABEL_INSIDE_MIN_HEIGHT_PX {
            Self::Inside
        } else {
            Self::Hidden
        }
    }
}

/// Horizontal subdivision of the plot area into category slots and bar groups.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupedBarLayout {
    origin_x: f64,
    category_count: usize,
    series_count: usize,
    category_slot_width: f64,
    group_width: f64,
    bar_width: f64,
}

impl GroupedBarLayout {
    pub fn new(
        plot_area: Rect,
        category_count: usize,
        series_count: usize,
        bar_width_fraction: f64,
    ) -> ChartResult<Self> {
        if category_count == 0 {
            return Err(ChartError::EmptyData("bar chart requires at least one category"));
        }
        if !(1..=MAX_BAR_SERIES).contains(&series_count) {
            return Err(ChartError::InvalidSeriesCount {
                count: series_count,
            });
        }
        if !bar_width_fraction.is_finite() || bar_width_fraction <= 0.0 || bar_width_fraction > 1.0
        {
            return Err(ChartError::InvalidData(
                "bar width fraction must be in (0, 1]".to_owned(),
            ));
        }

        let category_slot_width = plot_area.width / category_count as f64;
        let group_width = category_slot_width * bar_width_fraction;
        Ok(Self {
            origin_x: plot_area.x,
            category_count,
            series_count,
            category_slot_width,
            group_width,
            bar_width: group_width / series_count as f64,
        })
    }

    #[must_use]
    pub fn category_count(self) -> usize {
        self.category_count
    }

    #[must_use]
    pub fn series_count(self) -> usize {
        self.series_count
    }

    #[must_use]
    pub fn category_slot_width(self) -> f64 {
        self.category_slot_width
    }

    #[must_use]
    pub fn group_width(self) -> f64 {
        self.group_width
    }

    #[must_use]
    pub fn bar_width(self) -> f64 {
        self.bar_width
    }

    #[must_use]
    pub fn slot_center_x(self, category_index: usize) -> f64 {
        self.origin_x + (category_index as f64 + 0.5) * self.category_slot_width
    }

    #[must_use]
    pub fn group_start_x(self, category_index: usize) -> f64 {
        self.origin_x
            + category_index as f64 * self.category_slot_width
            + (self.category_slot_width - self.group_width) * 0.5
    }

    #[must_use]
    pub fn bar_x(self, category_index: usize, series_index: usize) -> f64 {
        self.group_start_x(category_index) + series_index as f64 * self.bar_width
    }
}

/// One bar in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub category_index: usize,
    pub series_index: usize,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BarGeometry {
    #[must_use]
    pub fn rect(self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    #[must_use]
    pub fn center_x(self) -> f64 {
        self.x + self.width * 0.5
    }

    #[must_use]
    pub fn label_placement(self) -> ValueLabelPlacement {
        ValueLabelPlacement::for_bar_height(self.height)
    }
}

/// All bars of one category, in series order.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBars {
    pub category_index: usize,
    pub center_x: f64,
    pub bars: SmallVec<[BarGeometry; MAX_BAR_SERIES]>,
}

/// Projects `series[s][c]` into grouped bars standing on the scale baseline.
///
/// The baseline is the pixel of zero, clamped into the scale domain. Positive
/// values rise above it and negative values hang below it.
pub fn project_grouped_bars(
    series: &[Vec<f64>],
    layout: GroupedBarLayout,
    value_scale: LinearScale,
) -> ChartResult<Vec<CategoryBars>> {
    if series.len() != layout.series_count() {
        return Err(ChartError::InvalidSeriesCount {
            count: series.len(),
        });
    }

    let domain = value_scale.domain();
    let baseline_y = value_scale.value_to_pixel(0.0_f64.max(domain.min).min(domain.max))?;
    let mut categories = Vec::with_capacity(layout.category_count());
    for category_index in 0..layout.category_count() {
        let mut bars = SmallVec::new();
        for (series_index, values) in series.iter().enumerate() {
            let Some(&value) = values.get(category_index) else {
                return Err(ChartError::SeriesLengthMismatch {
                    series_index,
                    expected: layout.category_count(),
                    actual: values.len(),
                });
            };
            let value_y = value_scale.value_to_pixel(value)?;
            bars.push(BarGeometry {
                category_index,
                series_index,
                value,
                x: layout.bar_x(category_index, series_index),
                y: value_y.min(baseline_y),
                width: layout.bar_width(),
                height: (baseline_y - value_y).abs(),
            });
        }
        categories.push(CategoryBars {
            category_index,
            center_x: layout.slot_center_x(category_index),
            bars,
        });
    }

    Ok(categories)
}
