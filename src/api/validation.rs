use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::core::MAX_BAR_SERIES;
use crate::error::{ChartError, ChartResult};

use super::{BarChartOptions, LineChartOptions};

/// Categories plus one value series per bar color.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BarChartData {
    pub categories: Vec<String>,
    pub series: Vec<Vec<f64>>,
}

impl BarChartData {
    #[must_use]
    pub fn new<I, L>(categories: I, series: Vec<Vec<f64>>) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self {
            categories: categories.into_iter().map(Into::into).collect(),
            series,
        }
    }
}

/// Y values of a single line series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineChartData {
    pub values: Vec<f64>,
}

impl LineChartData {
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }
}

/// Bar input whose shape has been checked: 1..=3 series of exactly N finite values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedBarData<'a> {
    pub categories: &'a [String],
    pub series: &'a [Vec<f64>],
}

impl ValidatedBarData<'_> {
    #[must_use]
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.series.len()
    }
}

/// Line input with paired, equally long, finite x/y values.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedLineData<'a> {
    pub xs: Cow<'a, [f64]>,
    pub ys: &'a [f64],
}

pub fn validate_bar_data(data: &BarChartData) -> ChartResult<ValidatedBarData<'_>> {
    let series_count = data.series.len();
    if series_count == 0 || series_count > MAX_BAR_SERIES {
        return Err(ChartError::InvalidSeriesCount {
            count: series_count,
        });
    }
    if data.categories.is_empty() {
        return Err(ChartError::EmptyData(
            "bar chart requires at least one category",
        ));
    }

    let expected = data.categories.len();
    for (series_index, values) in data.series.iter().enumerate() {
        if values.len() != expected {
            return Err(ChartError::SeriesLengthMismatch {
                series_index,
                expected,
                actual: values.len(),
            });
        }
        ensure_finite(values, series_index)?;
    }

    Ok(ValidatedBarData {
        categories: &data.categories,
        series: &data.series,
    })
}

/// Pairs `ys` with `xs`, defaulting x to `1..=N`.
///
/// Non-finite y values report as series 0, x values as series 1.
pub fn validate_line_data<'a>(
    ys: &'a [f64],
    xs: Option<&'a [f64]>,
) -> ChartResult<ValidatedLineData<'a>> {
    if let Some(xs) = xs {
        if xs.len() != ys.len() {
            return Err(ChartError::AxisLengthMismatch {
                x_len: xs.len(),
                y_len: ys.len(),
            });
        }
    }
    if ys.is_empty() {
        return Err(ChartError::EmptyData("line chart requires at least one value"));
    }

    ensure_finite(ys, 0)?;
    let xs = match xs {
        Some(xs) => {
            ensure_finite(xs, 1)?;
            Cow::Borrowed(xs)
        }
        None => Cow::Owned((1..=ys.len()).map(|x| x as f64).collect()),
    };

    Ok(ValidatedLineData { xs, ys })
}

pub(super) fn validate_bar_options(options: BarChartOptions) -> ChartResult<BarChartOptions> {
    if options.colors.is_empty() {
        return Err(ChartError::InvalidData(
            "bar palette must contain at least one color".to_owned(),
        ));
    }
    let fraction = options.bar_width_fraction;
    if !fraction.is_finite() || fraction <= 0.0 || fraction > 1.0 {
        return Err(ChartError::InvalidData(
            "bar width fraction must be in (0, 1]".to_owned(),
        ));
    }
    validate_padding(options.padding)?;
    for color in &options.colors {
        color.validate()?;
    }
    options.background_color.validate()?;
    options.grid_color.validate()?;
    Ok(options)
}

pub(super) fn validate_line_options(options: LineChartOptions) -> ChartResult<LineChartOptions> {
    if !options.line_width.is_finite() || options.line_width <= 0.0 {
        return Err(ChartError::InvalidData(
            "line width must be finite and > 0".to_owned(),
        ));
    }
    if !options.point_radius.is_finite() || options.point_radius < 0.0 {
        return Err(ChartError::InvalidData(
            "point radius must be finite and >= 0".to_owned(),
        ));
    }
    validate_padding(options.padding)?;
    options.line_color.validate()?;
    options.background_color.validate()?;
    options.grid_color.validate()?;
    Ok(options)
}

fn validate_padding(padding: f64) -> ChartResult<()> {
    if !padding.is_finite() || padding < 0.0 {
        return Err(ChartError::InvalidData(
            "padding must be finite and >= 0".to_owned(),
        ));
    }
    Ok(())
}

fn ensure_finite(values: &[f64], series_index: usize) -> ChartResult<()> {
    match values.iter().position(|value| !value.is_finite()) {
        Some(index) => Err(ChartError::NonFiniteValue {
            series_index,
            index,
        }),
        None => Ok(()),
    }
}
