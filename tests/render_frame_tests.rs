use chart_canvas::ChartError;
use chart_canvas::core::{PixelPoint, Rect, Viewport};
use chart_canvas::render::{
    ArcPrimitive, Color, DrawCommand, Font, LinePrimitive, RecordingSurface, RectPrimitive,
    RenderFrame, SurfaceCall, TextAlign, TextBaseline, TextPrimitive,
};

fn black() -> Color {
    Color::rgb(0.0, 0.0, 0.0)
}

#[test]
fn replay_sets_paint_state_before_each_primitive() {
    let viewport = Viewport::new(200, 100);
    let mut frame = RenderFrame::new(viewport);
    frame.push(DrawCommand::Clear(viewport.bounds()));
    frame.push_rect(
        RectPrimitive::filled(Rect::new(1.0, 2.0, 3.0, 4.0), black())
            .with_border(Color::rgb(1.0, 0.0, 0.0), 2.0),
    );
    frame.push_line(LinePrimitive::new(0.0, 0.0, 10.0, 10.0, 1.5, black()));
    frame.push_arc(ArcPrimitive::circle(5.0, 5.0, 4.0, black()));
    frame.push_text(TextPrimitive::new(
        "label",
        10.0,
        20.0,
        Font::sans(12.0),
        black(),
        TextAlign::Right,
        TextBaseline::Middle,
    ));

    let mut surface = RecordingSurface::new(viewport);
    frame.replay(&mut surface).expect("replay");

    let expected = vec![
        SurfaceCall::ClearRect(viewport.bounds()),
        SurfaceCall::SetFillColor(black()),
        SurfaceCall::FillRect(Rect::new(1.0, 2.0, 3.0, 4.0)),
        SurfaceCall::SetStrokeColor(Color::rgb(1.0, 0.0, 0.0)),
        SurfaceCall::SetLineWidth(2.0),
        SurfaceCall::StrokeRect(Rect::new(1.0, 2.0, 3.0, 4.0)),
        SurfaceCall::SetStrokeColor(black()),
        SurfaceCall::SetLineWidth(1.5),
        SurfaceCall::StrokeLine {
            from: PixelPoint::new(0.0, 0.0),
            to: PixelPoint::new(10.0, 10.0),
        },
        SurfaceCall::SetFillColor(black()),
        SurfaceCall::FillArc {
            center: PixelPoint::new(5.0, 5.0),
            radius: 4.0,
            start_angle: 0.0,
            end_angle: std::f64::consts::TAU,
        },
        SurfaceCall::SetFont(Font::sans(12.0)),
        SurfaceCall::SetFillColor(black()),
        SurfaceCall::SetTextAlign(TextAlign::Right),
        SurfaceCall::SetTextBaseline(TextBaseline::Middle),
        SurfaceCall::FillText {
            text: "label".to_owned(),
            anchor: PixelPoint::new(10.0, 20.0),
            rotation: 0.0,
        },
    ];
    assert_eq!(surface.calls(), expected.as_slice());
}

#[test]
fn validate_rejects_non_finite_geometry() {
    let mut frame = RenderFrame::new(Viewport::new(200, 100));
    frame.push_line(LinePrimitive::new(0.0, f64::NAN, 10.0, 10.0, 1.0, black()));

    let err = frame.validate().expect_err("NaN line must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn validate_rejects_empty_text_and_zero_radius() {
    let mut frame = RenderFrame::new(Viewport::new(200, 100));
    frame.push_text(TextPrimitive::new(
        "",
        1.0,
        1.0,
        Font::sans(12.0),
        black(),
        TextAlign::Left,
        TextBaseline::Top,
    ));
    assert!(frame.validate().is_err());

    let mut frame = RenderFrame::new(Viewport::new(200, 100));
    frame.push_arc(ArcPrimitive::circle(1.0, 1.0, 0.0, black()));
    assert!(frame.validate().is_err());
}

#[test]
fn zero_height_rects_are_valid() {
    let mut frame = RenderFrame::new(Viewport::new(200, 100));
    frame.push_rect(RectPrimitive::filled(Rect::new(10.0, 90.0, 20.0, 0.0), black()));
    frame.validate().expect("flat bar is drawable");
    assert_eq!(frame.rects().count(), 1);
}

#[test]
fn recording_surface_measures_with_fixed_advance() {
    use chart_canvas::render::TextMeasurer;

    let surface = RecordingSurface::new(Viewport::new(10, 10));
    let width = surface.measure_text("abcd", &Font::sans(10.0));
    assert!((width - 24.0).abs() <= 1e-9);
    assert_eq!(surface.measure_text("", &Font::sans(10.0)), 0.0);
}
