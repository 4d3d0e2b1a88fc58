use crate::core::{PixelPoint, Rect, Viewport};
use crate::error::ChartResult;
use crate::render::{Color, Font, TextAlign, TextBaseline};

/// Text width measurement for a given font.
pub trait TextMeasurer {
    fn measure_text(&self, text: &str, font: &Font) -> f64;
}

/// Canvas-like drawing target owned by the caller.
///
/// Paint state (colors, line width, font, alignment) is global to the surface
/// and persists between calls. Callers set every attribute a primitive uses
/// right before issuing it; see `RenderFrame::replay`.
pub trait DrawingSurface: TextMeasurer {
    fn viewport(&self) -> Viewport;

    fn set_fill_color(&mut self, color: Color);
    fn set_stroke_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f64);
    fn set_font(&mut self, font: &Font);
    fn set_text_align(&mut self, align: TextAlign);
    fn set_text_baseline(&mut self, baseline: TextBaseline);

    fn clear_rect(&mut self, rect: Rect) -> ChartResult<()>;
    fn fill_rect(&mut self, rect: Rect) -> ChartResult<()>;
    fn stroke_rect(&mut self, rect: Rect) -> ChartResult<()>;
    fn stroke_line(&mut self, from: PixelPoint, to: PixelPoint) -> ChartResult<()>;
    fn fill_arc(
        &mut self,
        center: PixelPoint,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> ChartResult<()>;
    /// Draws `text` at `anchor`, rotated clockwise by `rotation` radians.
    fn fill_text(&mut self, text: &str, anchor: PixelPoint, rotation: f64) -> ChartResult<()>;
}
