use tracing::{debug, trace, warn};

use crate::core::{
    Dataset, GapCount, Grouping, IntervalBin, Observation, Quartiles, ScatterPoint, SortOrder,
    ThresholdSplit, compute_interval_bins, compute_scatter, domain_guides, grouping_separators,
    max_level, quartiles, split_at_threshold,
};
use crate::core::primitives::clamp_between;
use crate::error::{ChartError, ChartResult};
use crate::interaction::{DragEvent, RangeSelection, RangeTarget, ThresholdHandle, ThresholdLineSet};
use crate::render::Renderer;
use crate::storage::{CHART_DATA_KEY, ObservationStore, load_chart_data};

use super::{ChartConfig, ChartGeometry, EngineSnapshot};

/// Main orchestration facade consumed by host applications.
///
/// `DotPlotEngine` owns one dataset, the drag tools and the renderer. Every
/// derived value (dot layout, bins, counts) is recomputed from current state
/// on request; nothing is cached between calls.
#[derive(Debug)]
pub struct DotPlotEngine<R: Renderer> {
    renderer: R,
    config: ChartConfig,
    geometry: ChartGeometry,
    dataset: Dataset,
    interval_width: f64,
    threshold: ThresholdHandle,
    range: RangeSelection,
    lines: ThresholdLineSet,
    grouping: Grouping,
    static_guides: bool,
}

impl<R: Renderer> DotPlotEngine<R> {
    pub fn new(renderer: R, config: ChartConfig, observations: Vec<Observation>) -> ChartResult<Self> {
        let geometry = ChartGeometry::from_config(&config)?;
        let (threshold, range) = initial_tools(&config, geometry)?;
        debug!(
            count = observations.len(),
            inner_width = geometry.inner_width,
            "dot plot engine created"
        );

        Ok(Self {
            renderer,
            config,
            geometry,
            dataset: Dataset::new(observations),
            interval_width: config.interval_width,
            threshold,
            range,
            lines: ThresholdLineSet::new(geometry.inner_width),
            grouping: Grouping::None,
            static_guides: false,
        })
    }

    /// Builds an engine from stored chart data, falling back to `fallback`
    /// when the store holds nothing usable.
    pub fn from_store<S: ObservationStore + ?Sized>(
        renderer: R,
        config: ChartConfig,
        store: &S,
        fallback: Vec<Observation>,
    ) -> ChartResult<Self> {
        let observations = load_chart_data(store).unwrap_or(fallback);
        Self::new(renderer, config, observations)
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn geometry(&self) -> ChartGeometry {
        self.geometry
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Replaces the observations wholesale and moves the tools back to their
    /// initial positions.
    pub fn set_observations(&mut self, observations: Vec<Observation>) -> ChartResult<()> {
        let (threshold, range) = initial_tools(&self.config, self.geometry)?;
        debug!(count = observations.len(), "set observations");
        self.dataset.replace(observations);
        self.threshold = threshold;
        self.range = range;
        Ok(())
    }

    /// Appends one observation and moves the tools back to their initial
    /// positions.
    ///
    /// The value must be finite, inside the value domain, and a whole number
    /// when [`ChartConfig::whole_values`] is set. The dataset may not grow past
    /// [`ChartConfig::observation_limit`].
    pub fn push_observation(&mut self, observation: Observation) -> ChartResult<()> {
        let limit = self.config.observation_limit;
        if self.dataset.len() >= limit {
            return Err(ChartError::ObservationLimit { limit });
        }
        let value = observation.value;
        let (min, max) = (self.config.domain_min, self.config.domain_max);
        if !value.is_finite() || value < min || value > max {
            return Err(ChartError::InvalidData(format!(
                "observation must lie in [{min}, {max}] (value={value})"
            )));
        }
        if self.config.whole_values && value.fract() != 0.0 {
            return Err(ChartError::InvalidData(format!(
                "observation must be a whole number (value={value})"
            )));
        }

        let (threshold, range) = initial_tools(&self.config, self.geometry)?;
        let mut observations = self.dataset.source().to_vec();
        observations.push(observation);
        self.replace_keeping_order(observations);
        self.threshold = threshold;
        self.range = range;
        debug!(value, count = self.dataset.len(), "observation added");
        Ok(())
    }

    /// Drops the most recently loaded observation. Returns `None` on an empty
    /// chart.
    pub fn remove_last_observation(&mut self) -> Option<Observation> {
        let mut observations = self.dataset.source().to_vec();
        let removed = observations.pop()?;
        self.replace_keeping_order(observations);
        debug!(value = removed.value, count = self.dataset.len(), "observation removed");
        Some(removed)
    }

    fn replace_keeping_order(&mut self, observations: Vec<Observation>) {
        let order = self.dataset.order();
        self.dataset.replace(observations);
        self.dataset.sort_by(order);
    }

    pub fn sort_by(&mut self, order: SortOrder) {
        trace!(?order, "sort dataset view");
        self.dataset.sort_by(order);
    }

    pub fn reset_order(&mut self) {
        self.dataset.reset();
    }

    pub fn save_to<S: ObservationStore + ?Sized>(&self, store: &mut S) -> ChartResult<()> {
        store.save(CHART_DATA_KEY, self.dataset.source())
    }

    /// Replaces the observations with stored chart data. Returns `false` and
    /// keeps the current data when nothing could be loaded.
    pub fn load_from<S: ObservationStore + ?Sized>(&mut self, store: &S) -> ChartResult<bool> {
        match load_chart_data(store) {
            Some(observations) => {
                self.set_observations(observations)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.dataset.values()
    }

    #[must_use]
    pub fn interval_width(&self) -> f64 {
        self.interval_width
    }

    /// Sets the bin width. A non-positive or non-finite width hides the bins.
    pub fn set_interval_width(&mut self, interval_width: f64) {
        if !interval_width.is_finite() || interval_width <= 0.0 {
            warn!(interval_width, "interval width must be > 0, bins disabled");
            self.interval_width = 0.0;
            return;
        }
        self.interval_width = interval_width;
    }

    #[must_use]
    pub fn scatter(&self) -> Vec<ScatterPoint> {
        compute_scatter(&self.values(), self.geometry.scale, self.config.dot_radius)
    }

    #[must_use]
    pub fn interval_bins(&self) -> Vec<IntervalBin> {
        compute_interval_bins(
            &self.values(),
            self.interval_width,
            self.config.domain_min,
            self.config.domain_max,
        )
    }

    /// Chart height that fits every stacked dot.
    #[must_use]
    pub fn chart_height(&self) -> f64 {
        self.geometry
            .height_for_levels(&self.config, max_level(&self.scatter()))
    }

    #[must_use]
    pub fn ticks(&self) -> Vec<f64> {
        match self.config.x_axis_step {
            Some(step) => self.geometry.scale.stepped_ticks(step),
            None => self.geometry.scale.ticks(self.config.tick_count),
        }
    }

    #[must_use]
    pub fn quartiles(&self) -> Quartiles {
        quartiles(&self.values())
    }

    #[must_use]
    pub fn threshold(&self) -> ThresholdHandle {
        self.threshold
    }

    #[must_use]
    pub fn threshold_value(&self) -> f64 {
        self.threshold.value(self.geometry.scale)
    }

    #[must_use]
    pub fn threshold_split(&self) -> ThresholdSplit {
        split_at_threshold(&self.values(), self.threshold_value())
    }

    pub fn drag_threshold(&mut self, event: DragEvent) {
        self.threshold = self
            .threshold
            .apply(event, 0.0, self.geometry.inner_width);
        trace!(position = self.threshold.position(), ?event, "threshold drag");
    }

    #[must_use]
    pub fn range(&self) -> RangeSelection {
        self.range
    }

    #[must_use]
    pub fn range_values(&self) -> (f64, f64) {
        self.range.value_range(self.geometry.scale)
    }

    #[must_use]
    pub fn range_count(&self) -> usize {
        self.range.count(&self.values(), self.geometry.scale)
    }

    pub fn drag_range(&mut self, target: RangeTarget, event: DragEvent) {
        self.range = self.range.apply(target, event);
        trace!(
            low = self.range.low(),
            high = self.range.high(),
            ?target,
            ?event,
            "range drag"
        );
    }

    #[must_use]
    pub fn threshold_lines(&self) -> &ThresholdLineSet {
        &self.lines
    }

    /// Adds a draggable cut line at plot-relative `x` and returns its id.
    pub fn add_threshold_line(&mut self, x: f64) -> u64 {
        self.lines.add_at(x)
    }

    pub fn remove_threshold_line(&mut self, id: u64) -> bool {
        self.lines.remove(id)
    }

    pub fn clear_threshold_lines(&mut self) {
        self.lines.clear_manual();
    }

    pub fn drag_threshold_line(&mut self, id: u64, event: DragEvent) {
        self.lines.apply(id, event);
    }

    #[must_use]
    pub fn gap_counts(&self) -> Vec<GapCount> {
        self.lines.gap_counts(&self.values(), self.geometry.scale)
    }

    #[must_use]
    pub fn grouping(&self) -> Grouping {
        self.grouping
    }

    /// Chooses the grouping overlay.
    ///
    /// With `static_guides` the domain is split into equal-width groups drawn
    /// as fixed threshold lines (so gap counts apply); otherwise the groups
    /// follow the data quartiles.
    pub fn set_grouping(&mut self, grouping: Grouping, static_guides: bool) {
        self.grouping = grouping;
        self.static_guides = static_guides;
        let guides: Vec<f64> = if static_guides {
            domain_guides(self.config.domain_min, self.config.domain_max, grouping)
                .into_iter()
                .map(|value| self.geometry.scale.forward(value))
                .collect()
        } else {
            Vec::new()
        };
        self.lines.set_guides(&guides);
    }

    /// Data-driven group separators, empty while static guides are shown.
    #[must_use]
    pub fn group_separators(&self) -> Vec<f64> {
        if self.static_guides {
            return Vec::new();
        }
        grouping_separators(&self.values(), self.grouping)
    }

    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            config: self.config,
            inner_width: self.geometry.inner_width,
            chart_height: self.chart_height(),
            order: self.dataset.order(),
            observations: self.dataset.view().to_vec(),
            scatter: self.scatter(),
            interval_width: self.interval_width,
            interval_bins: self.interval_bins(),
            ticks: self.ticks(),
            threshold_position: self.threshold.position(),
            threshold_value: self.threshold_value(),
            threshold_split: self.threshold_split(),
            range_low_px: self.range.low(),
            range_high_px: self.range.high(),
            range_values: self.range_values(),
            range_count: self.range_count(),
            threshold_lines: self.lines.lines().to_vec(),
            gap_counts: self.gap_counts(),
            grouping: self.grouping,
            quartiles: self.quartiles(),
        }
    }

    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame();
        self.renderer.render(&frame)
    }
}

fn initial_tools(
    config: &ChartConfig,
    geometry: ChartGeometry,
) -> ChartResult<(ThresholdHandle, RangeSelection)> {
    let (min, max) = (config.domain_min, config.domain_max);
    let span = max - min;
    let threshold_value = config.initial_threshold.unwrap_or(min + span * 0.5);
    let (low, high) = config
        .initial_range
        .unwrap_or((min + span * 0.25, min + span * 0.75));

    let threshold = ThresholdHandle::new(clamp_between(
        geometry.scale.forward(threshold_value),
        0.0,
        geometry.inner_width,
    ));
    let range =
        RangeSelection::from_values(low, high, geometry.scale, config.range_min_separation_px)?;
    Ok((threshold, range))
}
