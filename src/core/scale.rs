use serde::{Deserialize, Serialize};

use crate::core::types::Rect;
use crate::error::{ChartError, ChartResult};

/// Headroom multiplier applied to the observed extremes of bar data.
pub const BAR_DOMAIN_HEADROOM: f64 = 1.1;

/// Numeric interval a scale maps from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    pub fn new(min: f64, max: f64) -> ChartResult<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ChartError::InvalidData(
                "domain bounds must be finite".to_owned(),
            ));
        }
        Ok(Self { min, max })
    }

    /// Actual min/max of `values`.
    pub fn from_values(values: &[f64]) -> ChartResult<Self> {
        let mut iter = values.iter().copied();
        let Some(first) = iter.next() else {
            return Err(ChartError::EmptyData("domain requires at least one value"));
        };
        let (min, max) = iter.fold((first, first), |(min, max), value| {
            (min.min(value), max.max(value))
        });
        Self::new(min, max)
    }

    /// Domain anchored at zero with headroom beyond the extremes of all series.
    ///
    /// Non-negative data yields `[0, max * 1.1]`. Negative values extend the
    /// minimum the same way, so every bar fits between the bounds. All-zero
    /// data collapses to `[0, 0]`.
    pub fn zero_based<'a>(series: impl IntoIterator<Item = &'a [f64]>) -> ChartResult<Self> {
        let (observed_min, observed_max) = series
            .into_iter()
            .flat_map(|values| values.iter().copied())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), value| {
                (min.min(value), max.max(value))
            });
        if observed_max == f64::NEG_INFINITY {
            return Err(ChartError::EmptyData("domain requires at least one value"));
        }
        Self::new(
            with_headroom(observed_min.min(0.0)),
            with_headroom(observed_max.max(0.0)),
        )
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.span() == 0.0
    }
}

/// Affine mapping from a domain onto a pixel range.
///
/// A zero-width domain uses a unit span instead, so constant data lands on
/// `range_start` rather than producing NaN coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain: Domain,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: Domain, range_start: f64, range_end: f64) -> ChartResult<Self> {
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }
        Ok(Self {
            domain,
            range_start,
            range_end,
        })
    }

    /// Left-to-right scale across the plot width.
    pub fn horizontal(domain: Domain, plot_area: Rect) -> ChartResult<Self> {
        Self::new(domain, plot_area.x, plot_area.right())
    }

    /// Bottom-to-top scale across the plot height; larger values get smaller `y`.
    pub fn vertical(domain: Domain, plot_area: Rect) -> ChartResult<Self> {
        Self::new(domain, plot_area.bottom(), plot_area.y)
    }

    #[must_use]
    pub fn domain(self) -> Domain {
        self.domain
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    pub fn value_to_pixel(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        // Halved operands keep the subtraction finite for bounds near f64::MAX.
        let half_span = self.domain.max * 0.5 - self.domain.min * 0.5;
        let normalized = if half_span == 0.0 {
            value - self.domain.min
        } else {
            (value * 0.5 - self.domain.min * 0.5) / half_span
        };
        Ok(self.range_start + normalized * (self.range_end - self.range_start))
    }
}

/// Scales a bar extreme by the headroom factor, saturating at the `f64` limits.
fn with_headroom(value: f64) -> f64 {
    (value * BAR_DOMAIN_HEADROOM).clamp(f64::MIN, f64::MAX)
}
