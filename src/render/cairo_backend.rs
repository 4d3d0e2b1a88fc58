use cairo::{Context, Format, ImageSurface, Operator};
use pango::{FontDescription, Layout, Weight};
use std::io::Write;

use crate::core::{PixelPoint, Rect, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, DrawingSurface, Font, TextAlign, TextBaseline, TextMeasurer};

#[derive(Debug, Clone, PartialEq)]
struct PaintState {
    fill_color: Color,
    stroke_color: Color,
    line_width: f64,
    font: Font,
    align: TextAlign,
    baseline: TextBaseline,
}

impl Default for PaintState {
    fn default() -> Self {
        Self {
            fill_color: Color::rgb(0.0, 0.0, 0.0),
            stroke_color: Color::rgb(0.0, 0.0, 0.0),
            line_width: 1.0,
            font: Font::sans(10.0),
            align: TextAlign::Left,
            baseline: TextBaseline::Alphabetic,
        }
    }
}

/// Cairo image surface with Pango text, exposed as a `DrawingSurface`.
///
/// Paint state behaves like an HTML canvas: it is kept between calls and only
/// changes through the setters.
#[derive(Debug)]
pub struct CairoSurface {
    surface: ImageSurface,
    context: Context,
    state: PaintState,
}

impl CairoSurface {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        let context = Context::new(&surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        Ok(Self {
            surface,
            context,
            state: PaintState::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn write_png<W: Write>(&self, writer: &mut W) -> ChartResult<()> {
        self.surface
            .write_to_png(writer)
            .map_err(|err| ChartError::Backend(format!("failed to encode png: {err}")))
    }

    fn text_layout(&self, text: &str, font: &Font) -> Layout {
        let layout = pangocairo::functions::create_layout(&self.context);
        let mut description = FontDescription::new();
        description.set_family(&font.family);
        description.set_absolute_size(font.size_px * f64::from(pango::SCALE));
        if font.bold {
            description.set_weight(Weight::Bold);
        }
        layout.set_font_description(Some(&description));
        layout.set_text(text);
        layout
    }
}

impl TextMeasurer for CairoSurface {
    fn measure_text(&self, text: &str, font: &Font) -> f64 {
        let (width, _height) = self.text_layout(text, font).pixel_size();
        f64::from(width)
    }
}

impl DrawingSurface for CairoSurface {
    fn viewport(&self) -> Viewport {
        Viewport::new(
            u32::try_from(self.surface.width()).unwrap_or(0),
            u32::try_from(self.surface.height()).unwrap_or(0),
        )
    }

    fn set_fill_color(&mut self, color: Color) {
        self.state.fill_color = color;
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.state.stroke_color = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.state.line_width = width;
    }

    fn set_font(&mut self, font: &Font) {
        self.state.font = font.clone();
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.state.align = align;
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.state.baseline = baseline;
    }

    fn clear_rect(&mut self, rect: Rect) -> ChartResult<()> {
        let context = &self.context;
        context
            .save()
            .map_err(|err| map_backend_error("failed to save context", err))?;
        context.set_operator(Operator::Clear);
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        let filled = context.fill();
        context
            .restore()
            .map_err(|err| map_backend_error("failed to restore context", err))?;
        filled.map_err(|err| map_backend_error("failed to clear rectangle", err))
    }

    fn fill_rect(&mut self, rect: Rect) -> ChartResult<()> {
        apply_color(&self.context, self.state.fill_color);
        self.context
            .rectangle(rect.x, rect.y, rect.width, rect.height);
        self.context
            .fill()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))
    }

    fn stroke_rect(&mut self, rect: Rect) -> ChartResult<()> {
        apply_color(&self.context, self.state.stroke_color);
        self.context.set_line_width(self.state.line_width);
        self.context
            .rectangle(rect.x, rect.y, rect.width, rect.height);
        self.context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke rectangle", err))
    }

    fn stroke_line(&mut self, from: PixelPoint, to: PixelPoint) -> ChartResult<()> {
        apply_color(&self.context, self.state.stroke_color);
        self.context.set_line_width(self.state.line_width);
        self.context.move_to(from.x, from.y);
        self.context.line_to(to.x, to.y);
        self.context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke line", err))
    }

    fn fill_arc(
        &mut self,
        center: PixelPoint,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> ChartResult<()> {
        apply_color(&self.context, self.state.fill_color);
        self.context.new_path();
        self.context
            .arc(center.x, center.y, radius, start_angle, end_angle);
        self.context
            .fill()
            .map_err(|err| map_backend_error("failed to fill arc", err))
    }

    fn fill_text(&mut self, text: &str, anchor: PixelPoint, rotation: f64) -> ChartResult<()> {
        let layout = self.text_layout(text, &self.state.font);
        let (width, height) = layout.pixel_size();
        let (width, height) = (f64::from(width), f64::from(height));
        let dx = match self.state.align {
            TextAlign::Left => 0.0,
            TextAlign::Center => -width / 2.0,
            TextAlign::Right => -width,
        };
        let dy = match self.state.baseline {
            TextBaseline::Top => 0.0,
            TextBaseline::Middle => -height / 2.0,
            TextBaseline::Alphabetic => -f64::from(layout.baseline()) / f64::from(pango::SCALE),
            TextBaseline::Bottom => -height,
        };

        let context = &self.context;
        context
            .save()
            .map_err(|err| map_backend_error("failed to save context", err))?;
        apply_color(context, self.state.fill_color);
        context.translate(anchor.x, anchor.y);
        context.rotate(rotation);
        context.move_to(dx, dy);
        pangocairo::functions::show_layout(context, &layout);
        context
            .restore()
            .map_err(|err| map_backend_error("failed to restore context", err))
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}
