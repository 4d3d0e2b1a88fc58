use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("drawing surface `{id}` not found")]
    SurfaceNotFound { id: String },

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("bar chart requires 1 to 3 series, got {count}")]
    InvalidSeriesCount { count: usize },

    #[error("series {series_index} has {actual} values, expected {expected}")]
    SeriesLengthMismatch {
        series_index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("x values ({x_len}) and y values ({y_len}) must have equal length")]
    AxisLengthMismatch { x_len: usize, y_len: usize },

    #[error("empty input: {0}")]
    EmptyData(&'static str),

    #[error("series {series_index} value at index {index} is not finite")]
    NonFiniteValue { series_index: usize, index: usize },

    #[error("padding {padding} leaves no plot area: width={width}, height={height}")]
    DegeneratePlotArea {
        width: f64,
        height: f64,
        padding: f64,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("drawing backend failure: {0}")]
    Backend(String),
}
