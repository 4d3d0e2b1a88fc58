//! Frame pieces shared by bar and line charts: background, gridlines, axes,
//! tick labels and titles.

use std::f64::consts::FRAC_PI_2;

use crate::core::{Rect, Tick, Viewport};
use crate::render::{
    Color, DrawCommand, Font, LinePrimitive, RectPrimitive, RenderFrame, TextAlign, TextBaseline,
    TextPrimitive,
};

pub(super) const AXIS_LINE_WIDTH_PX: f64 = 1.0;
pub(super) const GRID_LINE_WIDTH_PX: f64 = 1.0;
pub(super) const TICK_MARK_LENGTH_PX: f64 = 5.0;
pub(super) const TICK_LABEL_GAP_PX: f64 = 3.0;
pub(super) const CATEGORY_LABEL_OFFSET_PX: f64 = 8.0;
pub(super) const AXIS_TITLE_INSET_PX: f64 = 15.0;

pub(super) const TICK_FONT_SIZE_PX: f64 = 12.0;
pub(super) const AXIS_TITLE_FONT_SIZE_PX: f64 = 12.0;
pub(super) const TITLE_FONT_SIZE_PX: f64 = 16.0;

pub(super) fn axis_color() -> Color {
    Color::rgb8(0x33, 0x33, 0x33)
}

/// Clears the whole surface and paints the background.
pub(super) fn push_background(frame: &mut RenderFrame, viewport: Viewport, color: Color) {
    let bounds = viewport.bounds();
    frame.push(DrawCommand::Clear(bounds));
    frame.push_rect(RectPrimitive::filled(bounds, color));
}

pub(super) fn push_horizontal_grid(
    frame: &mut RenderFrame,
    plot_area: Rect,
    ticks: &[Tick],
    color: Color,
) {
    for tick in ticks {
        frame.push_line(LinePrimitive::new(
            plot_area.x,
            tick.pixel,
            plot_area.right(),
            tick.pixel,
            GRID_LINE_WIDTH_PX,
            color,
        ));
    }
}

pub(super) fn push_vertical_grid(
    frame: &mut RenderFrame,
    plot_area: Rect,
    ticks: &[Tick],
    color: Color,
) {
    for tick in ticks {
        frame.push_line(LinePrimitive::new(
            tick.pixel,
            plot_area.y,
            tick.pixel,
            plot_area.bottom(),
            GRID_LINE_WIDTH_PX,
            color,
        ));
    }
}

/// Tick marks and right-aligned labels left of the vertical axis.
pub(super) fn push_value_axis_ticks(frame: &mut RenderFrame, plot_area: Rect, ticks: &[Tick]) {
    let color = axis_color();
    for tick in ticks {
        frame.push_line(LinePrimitive::new(
            plot_area.x - TICK_MARK_LENGTH_PX,
            tick.pixel,
            plot_area.x,
            tick.pixel,
            AXIS_LINE_WIDTH_PX,
            color,
        ));
        frame.push_text(TextPrimitive::new(
            tick.label.clone(),
            plot_area.x - TICK_MARK_LENGTH_PX - TICK_LABEL_GAP_PX,
            tick.pixel,
            Font::sans(TICK_FONT_SIZE_PX),
            color,
            TextAlign::Right,
            TextBaseline::Middle,
        ));
    }
}

/// Tick marks and centered labels below the horizontal axis.
pub(super) fn push_domain_axis_ticks(frame: &mut RenderFrame, plot_area: Rect, ticks: &[Tick]) {
    let color = axis_color();
    let bottom = plot_area.bottom();
    for tick in ticks {
        frame.push_line(LinePrimitive::new(
            tick.pixel,
            bottom,
            tick.pixel,
            bottom + TICK_MARK_LENGTH_PX,
            AXIS_LINE_WIDTH_PX,
            color,
        ));
        frame.push_text(TextPrimitive::new(
            tick.label.clone(),
            tick.pixel,
            bottom + TICK_MARK_LENGTH_PX + TICK_LABEL_GAP_PX,
            Font::sans(TICK_FONT_SIZE_PX),
            color,
            TextAlign::Center,
            TextBaseline::Top,
        ));
    }
}

/// Left and bottom axis lines.
pub(super) fn push_axes(frame: &mut RenderFrame, plot_area: Rect) {
    let color = axis_color();
    frame.push_line(LinePrimitive::new(
        plot_area.x,
        plot_area.y,
        plot_area.x,
        plot_area.bottom(),
        AXIS_LINE_WIDTH_PX,
        color,
    ));
    frame.push_line(LinePrimitive::new(
        plot_area.x,
        plot_area.bottom(),
        plot_area.right(),
        plot_area.bottom(),
        AXIS_LINE_WIDTH_PX,
        color,
    ));
}

pub(super) fn push_axis_titles(
    frame: &mut RenderFrame,
    viewport: Viewport,
    plot_area: Rect,
    x_axis_label: Option<&str>,
    y_axis_label: Option<&str>,
) {
    let color = axis_color();
    if let Some(label) = x_axis_label {
        frame.push_text(TextPrimitive::new(
            label,
            plot_area.center_x(),
            f64::from(viewport.height) - AXIS_TITLE_INSET_PX,
            Font::sans(AXIS_TITLE_FONT_SIZE_PX),
            color,
            TextAlign::Center,
            TextBaseline::Middle,
        ));
    }
    if let Some(label) = y_axis_label {
        frame.push_text(
            TextPrimitive::new(
                label,
                AXIS_TITLE_INSET_PX,
                plot_area.center_y(),
                Font::sans(AXIS_TITLE_FONT_SIZE_PX),
                color,
                TextAlign::Center,
                TextBaseline::Middle,
            )
            .rotated(-FRAC_PI_2),
        );
    }
}

pub(super) fn push_title(
    frame: &mut RenderFrame,
    viewport: Viewport,
    padding: f64,
    title: Option<&str>,
) {
    if let Some(title) = title {
        frame.push_text(TextPrimitive::new(
            title,
            f64::from(viewport.width) * 0.5,
            padding * 0.5,
            Font::sans(TITLE_FONT_SIZE_PX).bold(),
            axis_color(),
            TextAlign::Center,
            TextBaseline::Middle,
        ));
    }
}
