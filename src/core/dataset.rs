use serde::{Deserialize, Serialize};

use crate::core::Observation;

/// Display ordering of a dataset view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Load order of the source observations.
    #[default]
    Original,
    /// Ascending by value, ties in load order.
    ByValue,
    /// Ascending by label, ties in load order. Unlabeled observations sort first.
    ByLabel,
}

/// Loaded observations plus the currently displayed ordering.
///
/// The source set is never mutated; sorting only rebuilds the view, so
/// [`Dataset::reset`] always restores the loaded order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dataset {
    source: Vec<Observation>,
    view: Vec<Observation>,
    order: SortOrder,
}

impl Dataset {
    #[must_use]
    pub fn new(observations: Vec<Observation>) -> Self {
        Self {
            view: observations.clone(),
            source: observations,
            order: SortOrder::Original,
        }
    }

    #[must_use]
    pub fn from_values(values: &[f64]) -> Self {
        Self::new(values.iter().copied().map(Observation::new).collect())
    }

    #[must_use]
    pub fn source(&self) -> &[Observation] {
        &self.source
    }

    #[must_use]
    pub fn view(&self) -> &[Observation] {
        &self.view
    }

    #[must_use]
    pub fn order(&self) -> SortOrder {
        self.order
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.source.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Values of the current view, in view order.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.view.iter().map(|observation| observation.value).collect()
    }

    pub fn sort_by(&mut self, order: SortOrder) {
        let mut view = self.source.clone();
        match order {
            SortOrder::Original => {}
            SortOrder::ByValue => view.sort_by(|left, right| left.value.total_cmp(&right.value)),
            SortOrder::ByLabel => view.sort_by(|left, right| left.label.cmp(&right.label)),
        }
        self.view = view;
        self.order = order;
    }

    pub fn reset(&mut self) {
        self.sort_by(SortOrder::Original);
    }

    /// Replaces the source wholesale and resets the view.
    pub fn replace(&mut self, observations: Vec<Observation>) {
        *self = Self::new(observations);
    }
}
