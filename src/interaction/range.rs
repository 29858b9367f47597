use serde::{Deserialize, Serialize};

use crate::core::primitives::clamp_between;
use crate::core::{LinearScale, count_in_range};
use crate::error::{ChartError, ChartResult};

use super::DragEvent;

/// Part of a range selection a gesture is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangeTarget {
    Low,
    High,
    /// The band between the handles; moves both while keeping the width.
    Body,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct RangeDrag {
    target: RangeTarget,
    reference_low: f64,
    reference_high: f64,
}

/// Two handles over `[0, width]` with `low <= high - min_separation`.
///
/// Handles never swap roles: dragging one toward the other stops at the
/// minimum gap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeSelection {
    low: f64,
    high: f64,
    width: f64,
    min_separation: f64,
    drag: Option<RangeDrag>,
}

impl RangeSelection {
    /// Creates a selection, moving the handles as little as needed to satisfy
    /// the bounds and the minimum gap.
    pub fn new(low: f64, high: f64, width: f64, min_separation: f64) -> ChartResult<Self> {
        if !width.is_finite() || width <= 0.0 {
            return Err(ChartError::InvalidData(
                "range width must be finite and > 0".to_owned(),
            ));
        }
        if !min_separation.is_finite() || min_separation < 0.0 || min_separation > width {
            return Err(ChartError::InvalidData(format!(
                "range separation must be finite and in [0, {width}]"
            )));
        }

        let low = clamp_between(low, 0.0, width - min_separation);
        let high = clamp_between(high, low + min_separation, width);
        Ok(Self {
            low,
            high,
            width,
            min_separation,
            drag: None,
        })
    }

    /// Selection between two domain values of `scale`.
    ///
    /// Handle positions are measured from the start of the scale's pixel
    /// range, so the selection spans `range_max - range_min`.
    pub fn from_values(
        low_value: f64,
        high_value: f64,
        scale: LinearScale,
        min_separation: f64,
    ) -> ChartResult<Self> {
        let (start, end) = scale.range();
        Self::new(
            scale.forward(low_value) - start,
            scale.forward(high_value) - start,
            end - start,
            min_separation,
        )
    }

    #[must_use]
    pub fn low(self) -> f64 {
        self.low
    }

    #[must_use]
    pub fn high(self) -> f64 {
        self.high
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn min_separation(self) -> f64 {
        self.min_separation
    }

    #[must_use]
    pub fn active_target(self) -> Option<RangeTarget> {
        self.drag.map(|drag| drag.target)
    }

    #[must_use]
    pub fn center(self) -> f64 {
        (self.low + self.high) * 0.5
    }

    /// Domain values under both handles.
    #[must_use]
    pub fn value_range(self, scale: LinearScale) -> (f64, f64) {
        let (start, _) = scale.range();
        (scale.invert(start + self.low), scale.invert(start + self.high))
    }

    /// Observations inside the selection, both ends inclusive.
    #[must_use]
    pub fn count(self, values: &[f64], scale: LinearScale) -> usize {
        let (low, high) = self.value_range(scale);
        count_in_range(values, low, high)
    }

    /// Advances the drag state machine for the gesture attached to `target`.
    ///
    /// `Start` captures both handle positions. `Update` and `End` only act on
    /// the gesture that started the drag; anything else is ignored.
    #[must_use]
    pub fn apply(self, target: RangeTarget, event: DragEvent) -> Self {
        match event {
            DragEvent::Start => Self {
                drag: Some(RangeDrag {
                    target,
                    reference_low: self.low,
                    reference_high: self.high,
                }),
                ..self
            },
            DragEvent::Update { translation } => match self.drag {
                Some(drag) if drag.target == target => self.dragged(drag, translation),
                _ => self,
            },
            DragEvent::End => match self.drag {
                Some(drag) if drag.target == target => Self { drag: None, ..self },
                _ => self,
            },
        }
    }

    /// Re-fits the selection to a new chart width, keeping an active drag.
    pub fn resized(self, width: f64) -> ChartResult<Self> {
        let resized = Self::new(self.low, self.high, width, self.min_separation)?;
        Ok(Self {
            drag: self.drag,
            ..resized
        })
    }

    fn dragged(self, drag: RangeDrag, translation: f64) -> Self {
        let separation = self.min_separation;
        match drag.target {
            RangeTarget::Low => Self {
                low: clamp_between(
                    drag.reference_low + translation,
                    0.0,
                    self.high - separation,
                ),
                ..self
            },
            RangeTarget::High => Self {
                high: clamp_between(
                    drag.reference_high + translation,
                    self.low + separation,
                    self.width,
                ),
                ..self
            },
            RangeTarget::Body => {
                let span = drag.reference_high - drag.reference_low;
                let low = clamp_between(drag.reference_low + translation, 0.0, self.width - span);
                Self {
                    low,
                    high: low + span,
                    ..self
                }
            }
        }
    }
}
