use serde::{Deserialize, Serialize};

use crate::core::LinearScale;
use crate::error::{ChartError, ChartResult};

/// Space between the SVG edge and the plot area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 40.0,
            right: 20.0,
            bottom: 40.0,
            left: 40.0,
        }
    }
}

/// Which overlays the chart shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolVisibility {
    pub dots: bool,
    pub intervals: bool,
    pub value_tool: bool,
    pub range_tool: bool,
    pub threshold_lines: bool,
}

impl Default for ToolVisibility {
    fn default() -> Self {
        Self {
            dots: true,
            intervals: false,
            value_tool: false,
            range_tool: false,
            threshold_lines: true,
        }
    }
}

/// Public engine bootstrap configuration.
///
/// The config is plain data: it is validated once when the engine is built
/// and every derived dimension comes from [`ChartGeometry`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub margins: Margins,
    #[serde(default = "default_dot_radius")]
    pub dot_radius: f64,
    pub domain_min: f64,
    pub domain_max: f64,
    #[serde(default)]
    pub x_axis_step: Option<f64>,
    #[serde(default = "default_tick_count")]
    pub tick_count: usize,
    #[serde(default = "default_interval_width")]
    pub interval_width: f64,
    #[serde(default = "default_range_min_separation_px")]
    pub range_min_separation_px: f64,
    #[serde(default)]
    pub initial_threshold: Option<f64>,
    #[serde(default)]
    pub initial_range: Option<(f64, f64)>,
    #[serde(default)]
    pub tools: ToolVisibility,
    /// Largest dataset [`DotPlotEngine::push_observation`](super::DotPlotEngine::push_observation) will grow.
    #[serde(default = "default_observation_limit")]
    pub observation_limit: usize,
    /// Added observations must be whole numbers.
    #[serde(default)]
    pub whole_values: bool,
}

impl ChartConfig {
    /// Creates a config over the value domain `[domain_min, domain_max]`.
    #[must_use]
    pub fn new(width: f64, height: f64, domain_min: f64, domain_max: f64) -> Self {
        Self {
            width,
            height,
            margins: Margins::default(),
            dot_radius: default_dot_radius(),
            domain_min,
            domain_max,
            x_axis_step: None,
            tick_count: default_tick_count(),
            interval_width: default_interval_width(),
            range_min_separation_px: default_range_min_separation_px(),
            initial_threshold: None,
            initial_range: None,
            tools: ToolVisibility::default(),
            observation_limit: default_observation_limit(),
            whole_values: false,
        }
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_dot_radius(mut self, dot_radius: f64) -> Self {
        self.dot_radius = dot_radius;
        self
    }

    /// Uses fixed-step axis ticks instead of "nice" ticks.
    #[must_use]
    pub fn with_x_axis_step(mut self, step: f64) -> Self {
        self.x_axis_step = Some(step);
        self
    }

    #[must_use]
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    #[must_use]
    pub fn with_interval_width(mut self, interval_width: f64) -> Self {
        self.interval_width = interval_width;
        self
    }

    #[must_use]
    pub fn with_range_min_separation(mut self, separation_px: f64) -> Self {
        self.range_min_separation_px = separation_px;
        self
    }

    /// Value the single threshold tool starts at; defaults to the domain center.
    #[must_use]
    pub fn with_initial_threshold(mut self, value: f64) -> Self {
        self.initial_threshold = Some(value);
        self
    }

    /// Values the range tool starts at; defaults to the middle half of the domain.
    #[must_use]
    pub fn with_initial_range(mut self, low: f64, high: f64) -> Self {
        self.initial_range = Some((low, high));
        self
    }

    #[must_use]
    pub fn with_tools(mut self, tools: ToolVisibility) -> Self {
        self.tools = tools;
        self
    }

    #[must_use]
    pub fn with_observation_limit(mut self, limit: usize) -> Self {
        self.observation_limit = limit;
        self
    }

    #[must_use]
    pub fn with_whole_values(mut self, whole_values: bool) -> Self {
        self.whole_values = whole_values;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.width.is_finite() || !self.height.is_finite() || self.width <= 0.0 || self.height <= 0.0
        {
            return Err(ChartError::InvalidChartSize {
                width: self.width,
                height: self.height,
            });
        }
        let margins = self.margins;
        if [margins.top, margins.right, margins.bottom, margins.left]
            .iter()
            .any(|margin| !margin.is_finite() || *margin < 0.0)
        {
            return Err(ChartError::InvalidData(
                "margins must be finite and >= 0".to_owned(),
            ));
        }
        if self.width - margins.left - margins.right <= 0.0 {
            return Err(ChartError::InvalidData(
                "margins leave no horizontal room for the plot".to_owned(),
            ));
        }
        if !self.dot_radius.is_finite() || self.dot_radius <= 0.0 {
            return Err(ChartError::InvalidData(
                "dot radius must be finite and > 0".to_owned(),
            ));
        }
        if !self.domain_min.is_finite() || !self.domain_max.is_finite() {
            return Err(ChartError::InvalidData(
                "value domain must be finite".to_owned(),
            ));
        }
        if self.domain_min > self.domain_max {
            return Err(ChartError::InvalidData(format!(
                "value domain is inverted: [{}, {}]",
                self.domain_min, self.domain_max
            )));
        }
        if !self.range_min_separation_px.is_finite() || self.range_min_separation_px < 0.0 {
            return Err(ChartError::InvalidData(
                "range separation must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON, filling omitted optional fields with defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

/// Dimensions derived from a validated [`ChartConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartGeometry {
    pub inner_width: f64,
    pub level_gap: f64,
    pub scale: LinearScale,
}

impl ChartGeometry {
    pub fn from_config(config: &ChartConfig) -> ChartResult<Self> {
        config.validate()?;
        let inner_width = config.width - config.margins.left - config.margins.right;
        Ok(Self {
            inner_width,
            level_gap: config.dot_radius * 2.0 + 2.0,
            scale: LinearScale::with_width(config.domain_min, config.domain_max, inner_width),
        })
    }

    /// Total chart height needed to show `levels` stacked dots.
    #[must_use]
    pub fn height_for_levels(&self, config: &ChartConfig, levels: usize) -> f64 {
        let required = levels as f64 * self.level_gap + config.margins.top + config.margins.bottom;
        config.height.max(required)
    }
}

fn default_dot_radius() -> f64 {
    4.0
}

fn default_tick_count() -> usize {
    5
}

fn default_interval_width() -> f64 {
    5.0
}

fn default_range_min_separation_px() -> f64 {
    24.0
}

fn default_observation_limit() -> usize {
    20
}
