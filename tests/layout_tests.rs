use approx::assert_abs_diff_eq;
use chart_canvas::ChartError;
use chart_canvas::core::{Domain, LinearScale, Rect, TICK_STEPS, Viewport, plot_area, tick_ladder};

#[test]
fn plot_area_shrinks_surface_by_padding_on_every_side() {
    let area = plot_area(Viewport::new(400, 300), 60.0).expect("plot area");
    assert_eq!(area, Rect::new(60.0, 60.0, 280.0, 180.0));
}

#[test]
fn padding_consuming_the_surface_is_a_layout_failure() {
    let err = plot_area(Viewport::new(400, 300), 150.0).expect_err("height collapses");
    assert!(matches!(
        err,
        ChartError::DegeneratePlotArea { height, .. } if height == 0.0
    ));

    let err = plot_area(Viewport::new(100, 300), 80.0).expect_err("width collapses");
    assert!(matches!(err, ChartError::DegeneratePlotArea { .. }));
}

#[test]
fn plot_area_rejects_invalid_inputs() {
    let err = plot_area(Viewport::new(0, 300), 10.0).expect_err("zero width surface");
    assert!(matches!(err, ChartError::InvalidViewport { .. }));

    let err = plot_area(Viewport::new(400, 300), -1.0).expect_err("negative padding");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn tick_ladder_has_six_evenly_spaced_labeled_positions() {
    let plot = Rect::new(60.0, 60.0, 280.0, 180.0);
    let domain = Domain::new(0.0, 33.0).expect("domain");
    let scale = LinearScale::vertical(domain, plot).expect("scale");

    let ticks = tick_ladder(domain, scale).expect("ticks");
    assert_eq!(ticks.len(), TICK_STEPS + 1);

    let labels: Vec<&str> = ticks.iter().map(|tick| tick.label.as_str()).collect();
    assert_eq!(labels, ["0.0", "6.6", "13.2", "19.8", "26.4", "33.0"]);

    let expected_pixels = [240.0, 204.0, 168.0, 132.0, 96.0, 60.0];
    for (tick, expected) in ticks.iter().zip(expected_pixels) {
        assert_abs_diff_eq!(tick.pixel, expected, epsilon = 1e-9);
    }
}

#[test]
fn tick_ladder_over_degenerate_domain_stays_finite() {
    let plot = Rect::new(20.0, 20.0, 360.0, 260.0);
    let domain = Domain::new(4.0, 4.0).expect("domain");
    let scale = LinearScale::horizontal(domain, plot).expect("scale");

    let ticks = tick_ladder(domain, scale).expect("ticks");
    assert_eq!(ticks.len(), 6);
    for tick in &ticks {
        assert_eq!(tick.label, "4.0");
        assert!(tick.pixel.is_finite());
        assert_abs_diff_eq!(tick.pixel, 20.0);
    }
}
