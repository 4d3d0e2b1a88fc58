use approx::assert_abs_diff_eq;
use chart_canvas::api::{legend_entries, series_color};
use chart_canvas::core::{LegendLayout, Rect, Viewport, legend_labels, legend_visible, plot_area};
use chart_canvas::render::{Color, Font, RecordingSurface, TextMeasurer};

fn palette() -> Vec<Color> {
    vec![Color::rgb8(255, 0, 0), Color::rgb8(0, 255, 0)]
}

#[test]
fn legend_only_shows_for_multiple_series_when_enabled() {
    assert!(!legend_visible(1, true));
    assert!(!legend_visible(1, false));
    assert!(!legend_visible(2, false));
    assert!(legend_visible(2, true));
    assert!(legend_visible(3, true));
}

#[test]
fn missing_labels_default_to_series_numbers() {
    let labels = vec!["Revenue".to_owned()];
    assert_eq!(legend_labels(&labels, 3), ["Revenue", "Series 2", "Series 3"]);
    assert_eq!(legend_labels(&labels, 1), ["Revenue"]);
}

#[test]
fn entries_cycle_colors_and_default_missing_labels() {
    let labels = vec!["Revenue".to_owned()];
    let entries = legend_entries(&palette(), &labels, 3);

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].label, "Revenue");
    assert_eq!(entries[1].label, "Series 2");
    assert_eq!(entries[2].label, "Series 3");
    assert_eq!(entries[2].color, palette()[0]);
    assert_eq!(series_color(&palette(), 5), palette()[1]);
    assert_eq!(series_color(&[], 0), Color::rgb(0.0, 0.0, 0.0));
}

#[test]
fn legend_box_is_sized_from_widest_label_and_anchored_top_right() {
    let viewport = Viewport::new(400, 300);
    let measurer = RecordingSurface::new(viewport);
    let font = Font::sans(12.0);
    let plot = plot_area(viewport, 60.0).expect("plot area");

    let widest = measurer.measure_text("Revenue", &font);
    assert_abs_diff_eq!(widest, 50.4, epsilon = 1e-9);
    let widths = [widest, measurer.measure_text("Cost", &font)];

    let legend = LegendLayout::compute(&widths, viewport, plot);
    assert_abs_diff_eq!(legend.frame.width, widest + 12.0 + 28.0, epsilon = 1e-9);
    assert_abs_diff_eq!(legend.frame.height, 2.0 * 20.0 + 20.0, epsilon = 1e-9);
    assert_abs_diff_eq!(legend.frame.right(), 390.0, epsilon = 1e-9);
    assert_abs_diff_eq!(legend.frame.y, 70.0, epsilon = 1e-9);

    assert_eq!(legend.rows.len(), 2);
    let first = legend.rows[0];
    assert_abs_diff_eq!(first.swatch.x, legend.frame.x + 10.0, epsilon = 1e-9);
    assert_abs_diff_eq!(first.swatch.width, 12.0);
    assert_abs_diff_eq!(first.swatch.center_y(), 90.0, epsilon = 1e-9);
    assert_abs_diff_eq!(first.label_anchor.x, first.swatch.right() + 8.0, epsilon = 1e-9);
    assert_abs_diff_eq!(first.label_anchor.y, 90.0, epsilon = 1e-9);

    let second = legend.rows[1];
    assert_abs_diff_eq!(second.label_anchor.y - first.label_anchor.y, 20.0, epsilon = 1e-9);
}

#[test]
fn legend_rows_stay_inside_the_box() {
    let viewport = Viewport::new(800, 600);
    let plot = Rect::new(60.0, 60.0, 680.0, 480.0);
    let widths = [40.0, 72.5, 18.0];

    let legend = LegendLayout::compute(&widths, viewport, plot);
    for (row, width) in legend.rows.iter().zip(widths) {
        assert!(row.swatch.x >= legend.frame.x);
        assert!(row.swatch.y >= legend.frame.y);
        assert!(row.swatch.bottom() <= legend.frame.bottom());
        assert!(row.label_anchor.x + width <= legend.frame.right() + 1e-9);
    }
}
