use approx::assert_abs_diff_eq;
use chart_canvas::ChartError;
use chart_canvas::core::{
    Domain, GroupedBarLayout, LinearScale, Rect, ValueLabelPlacement, Viewport, plot_area,
    project_grouped_bars,
};

fn reference_plot() -> Rect {
    plot_area(Viewport::new(400, 300), 60.0).expect("plot area")
}

#[test]
fn grouped_layout_matches_slot_and_group_arithmetic() {
    let layout = GroupedBarLayout::new(reference_plot(), 4, 2, 0.7).expect("layout");

    assert_abs_diff_eq!(layout.category_slot_width(), 70.0);
    assert_abs_diff_eq!(layout.group_width(), 49.0, epsilon = 1e-9);
    assert_abs_diff_eq!(layout.bar_width(), 24.5, epsilon = 1e-9);
    assert_abs_diff_eq!(layout.group_start_x(0), 70.5, epsilon = 1e-9);
    assert_abs_diff_eq!(layout.bar_x(0, 1), 95.0, epsilon = 1e-9);
    assert_abs_diff_eq!(layout.bar_x(2, 0), 210.5, epsilon = 1e-9);
}

#[test]
fn first_and_last_slot_centers_are_symmetric_about_plot_midpoint() {
    let plot = reference_plot();
    assert_eq!(plot, Rect::new(60.0, 60.0, 280.0, 180.0));

    let layout = GroupedBarLayout::new(plot, 4, 1, 0.7).expect("layout");
    let first = layout.slot_center_x(0);
    let last = layout.slot_center_x(3);

    assert_abs_diff_eq!(first, 95.0);
    assert_abs_diff_eq!(last, 305.0);
    assert_abs_diff_eq!(plot.center_x() - first, last - plot.center_x(), epsilon = 1e-9);
}

#[test]
fn projected_bars_stand_on_the_baseline() {
    let plot = reference_plot();
    let series = vec![vec![10.0, 20.0, 30.0, 5.0]];
    let domain = Domain::zero_based(series.iter().map(Vec::as_slice)).expect("domain");
    let scale = LinearScale::vertical(domain, plot).expect("scale");
    let layout = GroupedBarLayout::new(plot, 4, 1, 0.7).expect("layout");

    let categories = project_grouped_bars(&series, layout, scale).expect("bars");
    assert_eq!(categories.len(), 4);

    for category in &categories {
        let bar = category.bars[0];
        assert_abs_diff_eq!(bar.y + bar.height, plot.bottom(), epsilon = 1e-9);
        assert_abs_diff_eq!(bar.center_x(), category.center_x, epsilon = 1e-9);
    }

    let tallest = categories[2].bars[0];
    assert_abs_diff_eq!(tallest.height, 30.0 / 33.0 * 180.0, epsilon = 1e-9);
}

#[test]
fn zero_domain_yields_flat_bars_without_nan() {
    let plot = reference_plot();
    let series = vec![vec![0.0, 0.0, 0.0]];
    let domain = Domain::zero_based(series.iter().map(Vec::as_slice)).expect("domain");
    let scale = LinearScale::vertical(domain, plot).expect("scale");
    let layout = GroupedBarLayout::new(plot, 3, 1, 0.7).expect("layout");

    let categories = project_grouped_bars(&series, layout, scale).expect("bars");
    for bar in categories.iter().flat_map(|category| &category.bars) {
        assert!(bar.rect().is_finite());
        assert_eq!(bar.height, 0.0);
        assert_eq!(bar.label_placement(), ValueLabelPlacement::Hidden);
    }
}

#[test]
fn negative_values_hang_below_the_baseline() {
    let plot = reference_plot();
    let series = vec![vec![10.0, -5.0]];
    let domain = Domain::zero_based(series.iter().map(Vec::as_slice)).expect("domain");
    let scale = LinearScale::vertical(domain, plot).expect("scale");
    let layout = GroupedBarLayout::new(plot, 2, 1, 0.7).expect("layout");

    let categories = project_grouped_bars(&series, layout, scale).expect("bars");
    let zero_y = scale.value_to_pixel(0.0).expect("zero pixel");
    let positive = categories[0].bars[0];
    assert_abs_diff_eq!(positive.y + positive.height, zero_y, epsilon = 1e-9);
    let negative = categories[1].bars[0];
    assert_abs_diff_eq!(negative.y, zero_y, epsilon = 1e-9);
    assert!(negative.height > 0.0);
    assert!(negative.y + negative.height <= plot.bottom() + 1e-9);
}

#[test]
fn layout_rejects_invalid_shapes() {
    let plot = reference_plot();

    let err = GroupedBarLayout::new(plot, 0, 1, 0.7).expect_err("no categories");
    assert!(matches!(err, ChartError::EmptyData(_)));

    let err = GroupedBarLayout::new(plot, 3, 4, 0.7).expect_err("four series");
    assert!(matches!(err, ChartError::InvalidSeriesCount { count: 4 }));

    for fraction in [0.0, 1.5, f64::NAN] {
        let err = GroupedBarLayout::new(plot, 3, 1, fraction).expect_err("bad fraction");
        assert!(matches!(err, ChartError::InvalidData(_)));
    }
}

#[test]
fn value_label_placement_uses_strict_thresholds() {
    assert_eq!(ValueLabelPlacement::for_bar_height(10.0), ValueLabelPlacement::Hidden);
    assert_eq!(ValueLabelPlacement::for_bar_height(10.5), ValueLabelPlacement::Inside);
    assert_eq!(ValueLabelPlacement::for_bar_height(15.0), ValueLabelPlacement::Inside);
    assert_eq!(ValueLabelPlacement::for_bar_height(20.0), ValueLabelPlacement::Inside);
    assert_eq!(ValueLabelPlacement::for_bar_height(25.0), ValueLabelPlacement::Above);
    assert_eq!(ValueLabelPlacement::for_bar_height(0.0), ValueLabelPlacement::Hidden);
}
