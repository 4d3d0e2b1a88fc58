use crate::core::{PixelPoint, Rect, Viewport};
use crate::error::ChartResult;
use crate::render::{Color, DrawingSurface, Font, TextAlign, TextBaseline, TextMeasurer};

/// Average glyph advance as a fraction of the font size.
const GLYPH_ADVANCE_RATIO: f64 = 0.6;

/// One call received by a `RecordingSurface`.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    SetFillColor(Color),
    SetStrokeColor(Color),
    SetLineWidth(f64),
    SetFont(Font),
    SetTextAlign(TextAlign),
    SetTextBaseline(TextBaseline),
    ClearRect(Rect),
    FillRect(Rect),
    StrokeRect(Rect),
    StrokeLine {
        from: PixelPoint,
        to: PixelPoint,
    },
    FillArc {
        center: PixelPoint,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    FillText {
        text: String,
        anchor: PixelPoint,
        rotation: f64,
    },
}

impl SurfaceCall {
    /// Whether the call puts pixels on the surface (as opposed to setting state).
    #[must_use]
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            Self::ClearRect(_)
                | Self::FillRect(_)
                | Self::StrokeRect(_)
                | Self::StrokeLine { .. }
                | Self::FillArc { .. }
                | Self::FillText { .. }
        )
    }
}

/// Headless surface that records every call it receives.
///
/// Text is measured with a fixed per-glyph advance so layouts are
/// deterministic without a font backend.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordingSurface {
    viewport: Viewport,
    calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            calls: Vec::new(),
        }
    }

    #[must_use]
    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    pub fn primitive_calls(&self) -> impl Iterator<Item = &SurfaceCall> {
        self.calls.iter().filter(|call| call.is_primitive())
    }

    pub fn drawn_texts(&self) -> impl Iterator<Item = &str> {
        self.calls.iter().filter_map(|call| match call {
            SurfaceCall::FillText { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl TextMeasurer for RecordingSurface {
    fn measure_text(&self, text: &str, font: &Font) -> f64 {
        text.chars().count() as f64 * font.size_px * GLYPH_ADVANCE_RATIO
    }
}

impl DrawingSurface for RecordingSurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn set_fill_color(&mut self, color: Color) {
        self.calls.push(SurfaceCall::SetFillColor(color));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.calls.push(SurfaceCall::SetStrokeColor(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.calls.push(SurfaceCall::SetLineWidth(width));
    }

    fn set_font(&mut self, font: &Font) {
        self.calls.push(SurfaceCall::SetFont(font.clone()));
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.calls.push(SurfaceCall::SetTextAlign(align));
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.calls.push(SurfaceCall::SetTextBaseline(baseline));
    }

    fn clear_rect(&mut self, rect: Rect) -> ChartResult<()> {
        self.calls.push(SurfaceCall::ClearRect(rect));
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect) -> ChartResult<()> {
        self.calls.push(SurfaceCall::FillRect(rect));
        Ok(())
    }

    fn stroke_rect(&mut self, rect: Rect) -> ChartResult<()> {
        self.calls.push(SurfaceCall::StrokeRect(rect));
        Ok(())
    }

    fn stroke_line(&mut self, from: PixelPoint, to: PixelPoint) -> ChartResult<()> {
        self.calls.push(SurfaceCall::StrokeLine { from, to });
        Ok(())
    }

    fn fill_arc(
        &mut self,
        center: PixelPoint,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> ChartResult<()> {
        self.calls.push(SurfaceCall::FillArc {
            center,
            radius,
            start_angle,
            end_angle,
        });
        Ok(())
    }

    fn fill_text(&mut self, text: &str, anchor: PixelPoint, rotation: f64) -> ChartResult<()> {
        self.calls.push(SurfaceCall::FillText {
            text: text.to_owned(),
            anchor,
            rotation,
        });
        Ok(())
    }
}
