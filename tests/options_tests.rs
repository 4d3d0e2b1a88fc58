use chart_canvas::api::{BarChartOptions, LineChartOptions};
use chart_canvas::render::Color;
use chart_canvas::{BarChartOverrides, ChartError, LineChartOverrides};

#[test]
fn bar_defaults_match_documented_values() {
    let options = BarChartOptions::resolve(&BarChartOverrides::default(), 1).expect("defaults");
    assert_eq!(
        options.colors,
        vec![
            Color::rgb8(0x4e, 0x79, 0xa7),
            Color::rgb8(0xf2, 0x8e, 0x2b),
            Color::rgb8(0xe1, 0x57, 0x59),
        ]
    );
    assert_eq!(options.background_color, Color::rgb8(0xff, 0xff, 0xff));
    assert_eq!(options.bar_width_fraction, 0.7);
    assert_eq!(options.padding, 60.0);
    assert!(!options.show_grid);
    assert!(options.show_values);
    assert!(!options.show_legend);
    assert_eq!(options.title, None);
}

#[test]
fn legend_defaults_on_for_multiple_series() {
    let options = BarChartOptions::resolve(&BarChartOverrides::default(), 2).expect("defaults");
    assert!(options.show_legend);

    let overrides = BarChartOverrides {
        show_legend: Some(false),
        ..BarChartOverrides::default()
    };
    let options = BarChartOptions::resolve(&overrides, 3).expect("explicit override");
    assert!(!options.show_legend);
}

#[test]
fn overrides_replace_only_the_fields_they_set() {
    let overrides = BarChartOverrides {
        bar_width: Some(0.5),
        show_grid: Some(true),
        ..BarChartOverrides::default().with_title("Revenue")
    };
    let options = BarChartOptions::resolve(&overrides, 1).expect("valid overrides");
    assert_eq!(options.bar_width_fraction, 0.5);
    assert!(options.show_grid);
    assert_eq!(options.title.as_deref(), Some("Revenue"));
    assert_eq!(options.padding, 60.0);
}

#[test]
fn empty_titles_resolve_to_none() {
    let overrides = BarChartOverrides::default().with_title("");
    let options = BarChartOptions::resolve(&overrides, 1).expect("valid overrides");
    assert_eq!(options.title, None);
}

#[test]
fn invalid_bar_settings_are_rejected() {
    for fraction in [0.0, -0.2, 1.5, f64::NAN] {
        let overrides = BarChartOverrides {
            bar_width: Some(fraction),
            ..BarChartOverrides::default()
        };
        let err = BarChartOptions::resolve(&overrides, 1).expect_err("bad fraction");
        assert!(matches!(err, ChartError::InvalidData(_)));
    }

    let overrides = BarChartOverrides::default().with_padding(-1.0);
    assert!(BarChartOptions::resolve(&overrides, 1).is_err());

    let overrides = BarChartOverrides {
        colors: Some(Vec::new()),
        ..BarChartOverrides::default()
    };
    assert!(BarChartOptions::resolve(&overrides, 1).is_err());
}

#[test]
fn line_defaults_match_documented_values() {
    let options = LineChartOptions::resolve(&LineChartOverrides::default()).expect("defaults");
    assert_eq!(options.line_color, Color::rgb8(0x4a, 0x90, 0xd9));
    assert_eq!(options.line_width, 2.0);
    assert_eq!(options.point_radius, 4.0);
    assert!(options.show_points);
    assert!(options.show_grid);
    assert_eq!(options.padding, 20.0);
    assert_eq!(options.x_values, None);
}

#[test]
fn invalid_line_settings_are_rejected() {
    let overrides = LineChartOverrides {
        line_width: Some(0.0),
        ..LineChartOverrides::default()
    };
    assert!(LineChartOptions::resolve(&overrides).is_err());

    let overrides = LineChartOverrides {
        point_radius: Some(-2.0),
        ..LineChartOverrides::default()
    };
    assert!(LineChartOptions::resolve(&overrides).is_err());

    let overrides = LineChartOverrides {
        point_radius: Some(0.0),
        ..LineChartOverrides::default()
    };
    assert!(LineChartOptions::resolve(&overrides).is_ok());
}

#[test]
fn overrides_parse_from_json_with_hex_colors() {
    let overrides: BarChartOverrides = serde_json::from_str(
        r##"{"colors": ["#112233", "#aabbcc80"], "padding": 40, "show_values": false}"##,
    )
    .expect("valid json");
    let colors = overrides.colors.as_deref().expect("colors present");
    assert_eq!(colors[0], Color::rgb8(0x11, 0x22, 0x33));
    assert!(colors[1].alpha < 1.0);
    assert_eq!(overrides.padding, Some(40.0));
    assert_eq!(overrides.show_values, Some(false));
    assert_eq!(overrides.title, None);

    let err = serde_json::from_str::<LineChartOverrides>(r#"{"line_color": "blue"}"#);
    assert!(err.is_err());
}
