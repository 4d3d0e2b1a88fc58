use serde::{Deserialize, Serialize};

use crate::core::scale::{Domain, LinearScale};
use crate::core::types::{Rect, Viewport};
use crate::error::{ChartError, ChartResult};

/// Number of equal steps between the first and last tick.
pub const TICK_STEPS: usize = 5;

/// Surface bounds shrunk by `padding` on every side.
///
/// Fails when the padding leaves a non-positive width or height.
pub fn plot_area(viewport: Viewport, padding: f64) -> ChartResult<Rect> {
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    if !padding.is_finite() || padding < 0.0 {
        return Err(ChartError::InvalidData(
            "padding must be finite and >= 0".to_owned(),
        ));
    }

    let width = f64::from(viewport.width) - 2.0 * padding;
    let height = f64::from(viewport.height) - 2.0 * padding;
    if width <= 0.0 || height <= 0.0 {
        return Err(ChartError::DegeneratePlotArea {
            width,
            height,
            padding,
        });
    }

    Ok(Rect::new(padding, padding, width, height))
}

/// One labeled position on an axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub value: f64,
    pub pixel: f64,
    pub label: String,
}

/// Six ticks (indices `0..=TICK_STEPS`) linearly spanning `domain`.
pub fn tick_ladder(domain: Domain, scale: LinearScale) -> ChartResult<Vec<Tick>> {
    let steps = TICK_STEPS as f64;
    let step = domain.max / steps - domain.min / steps;
    (0..=TICK_STEPS)
        .map(|index| {
            let value = if index == TICK_STEPS {
                domain.max
            } else {
                domain.min + index as f64 * step
            };
            Ok(Tick {
                value,
                pixel: scale.value_to_pixel(value)?,
                label: format_tick_label(value),
            })
        })
        .collect()
}

#[must_use]
pub fn format_tick_label(value: f64) -> String {
    format!("{value:.1}")
}
