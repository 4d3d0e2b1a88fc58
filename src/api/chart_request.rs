use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::{DrawingSurface, SurfaceRegistry};

use super::{
    BarChartData, BarChartOverrides, LineChartData, LineChartOverrides, render_bar_chart,
    render_line_chart,
};

/// One chart render call as a JSON document.
///
/// ```json
/// {"kind": "bar", "surface_id": "main",
///  "data": {"categories": ["a", "b"], "series": [[1, 2]]},
///  "options": {"title": "Totals"}}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartRequest {
    Bar {
        surface_id: String,
        data: BarChartData,
        #[serde(default)]
        options: BarChartOverrides,
    },
    Line {
        surface_id: String,
        data: LineChartData,
        #[serde(default)]
        options: LineChartOverrides,
    },
}

impl ChartRequest {
    pub fn from_json(raw: &str) -> ChartResult<Self> {
        serde_json::from_str(raw)
            .map_err(|err| ChartError::InvalidData(format!("invalid chart request json: {err}")))
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|err| ChartError::InvalidData(format!("failed to encode chart request: {err}")))
    }

    #[must_use]
    pub fn surface_id(&self) -> &str {
        match self {
            Self::Bar { surface_id, .. } | Self::Line { surface_id, .. } => surface_id,
        }
    }

    pub fn render<'r, S: DrawingSurface>(
        &self,
        registry: &'r mut SurfaceRegistry<S>,
    ) -> ChartResult<&'r mut S> {
        match self {
            Self::Bar {
                surface_id,
                data,
                options,
            } => render_bar_chart(registry, surface_id, data, options),
            Self::Line {
                surface_id,
                data,
                options,
            } => render_line_chart(registry, surface_id, data, options),
        }
    }
}
