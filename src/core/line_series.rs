use crate::core::scale::LinearScale;
use crate::core::types::PixelPoint;
use crate::error::{ChartError, ChartResult};
use serde::{Deserialize, Serialize};

/// Projected line segment in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Maps paired `xs`/`ys` into pixel points, keeping input order.
///
/// Unsorted x values stay unsorted; the resulting path may double back on
/// itself.
pub fn project_line_points(
    xs: &[f64],
    ys: &[f64],
    x_scale: LinearScale,
    y_scale: LinearScale,
) -> ChartResult<Vec<PixelPoint>> {
    if xs.len() != ys.len() {
        return Err(ChartError::AxisLengthMismatch {
            x_len: xs.len(),
            y_len: ys.len(),
        });
    }

    xs.iter()
        .zip(ys)
        .map(|(&x, &y)| {
            Ok(PixelPoint::new(
                x_scale.value_to_pixel(x)?,
                y_scale.value_to_pixel(y)?,
            ))
        })
        .collect()
}

/// Connects consecutive points with straight segments.
#[must_use]
pub fn connect_points(points: &[PixelPoint]) -> Vec<LineSegment> {
    points
        .windows(2)
        .map(|pair| LineSegment {
            x1: pair[0].x,
            y1: pair[0].y,
            x2: pair[1].x,
            y2: pair[1].y,
        })
        .collect()
}
