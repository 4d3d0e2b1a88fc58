use tracing::trace;

use crate::core::{PixelPoint, Rect, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    ArcPrimitive, DrawingSurface, LinePrimitive, RectPrimitive, TextPrimitive,
};

/// One drawing step carrying all paint attributes it needs.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Rect),
    Rect(RectPrimitive),
    Line(LinePrimitive),
    Arc(ArcPrimitive),
    Text(TextPrimitive),
}

impl DrawCommand {
    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Clear(rect) => {
                if rect.is_finite() {
                    Ok(())
                } else {
                    Err(ChartError::InvalidData(
                        "clear region must be finite".to_owned(),
                    ))
                }
            }
            Self::Rect(rect) => rect.validate(),
            Self::Line(line) => line.validate(),
            Self::Arc(arc) => arc.validate(),
            Self::Text(text) => text.validate(),
        }
    }
}

/// Backend-agnostic, ordered scene for one chart draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub commands: Vec<DrawCommand>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn push_rect(&mut self, rect: RectPrimitive) {
        self.commands.push(DrawCommand::Rect(rect));
    }

    pub fn push_line(&mut self, line: LinePrimitive) {
        self.commands.push(DrawCommand::Line(line));
    }

    pub fn push_arc(&mut self, arc: ArcPrimitive) {
        self.commands.push(DrawCommand::Arc(arc));
    }

    pub fn push_text(&mut self, text: TextPrimitive) {
        self.commands.push(DrawCommand::Text(text));
    }

    pub fn rects(&self) -> impl Iterator<Item = &RectPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Rect(rect) => Some(rect),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Line(line) => Some(line),
            _ => None,
        })
    }

    pub fn arcs(&self) -> impl Iterator<Item = &ArcPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Arc(arc) => Some(arc),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text(text) => Some(text),
            _ => None,
        })
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        for command in &self.commands {
            command.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Issues every command against `surface` in order.
    ///
    /// Each primitive is preceded by all paint setters it depends on, so no
    /// state left behind by earlier calls leaks into this frame.
    pub fn replay<S: DrawingSurface + ?Sized>(&self, surface: &mut S) -> ChartResult<()> {
        for command in &self.commands {
            match command {
                DrawCommand::Clear(rect) => surface.clear_rect(*rect)?,
                DrawCommand::Rect(rect) => {
                    if let Some(color) = rect.fill_color {
                        surface.set_fill_color(color);
                        surface.fill_rect(rect.rect)?;
                    }
                    if let Some(color) = rect.border_color {
                        surface.set_stroke_color(color);
                        surface.set_line_width(rect.border_width);
                        surface.stroke_rect(rect.rect)?;
                    }
                }
                DrawCommand::Line(line) => {
                    surface.set_stroke_color(line.color);
                    surface.set_line_width(line.stroke_width);
                    surface.stroke_line(
                        PixelPoint::new(line.x1, line.y1),
                        PixelPoint::new(line.x2, line.y2),
                    )?;
                }
                DrawCommand::Arc(arc) => {
                    surface.set_fill_color(arc.color);
                    surface.fill_arc(
                        PixelPoint::new(arc.center_x, arc.center_y),
                        arc.radius,
                        arc.start_angle,
                        arc.end_angle,
                    )?;
                }
                DrawCommand::Text(text) => {
                    surface.set_font(&text.font);
                    surface.set_fill_color(text.color);
                    surface.set_text_align(text.align);
                    surface.set_text_baseline(text.baseline);
                    surface.fill_text(&text.text, PixelPoint::new(text.x, text.y), text.rotation)?;
                }
            }
        }
        trace!(commands = self.commands.len(), "replayed render frame");
        Ok(())
    }
}
