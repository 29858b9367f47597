//! Drag tools: single threshold, two-handle range and free threshold lines.
//!
//! Every tool is a plain value with a pure transition `apply(self, event)`.
//! Gesture adapters translate platform callbacks into [`DragEvent`]s, where
//! `Update::translation` is the total pointer travel since the drag started.

mod lines;
mod range;

pub use lines::{ThresholdLine, ThresholdLineSet};
pub use range::{RangeSelection, RangeTarget};

use serde::{Deserialize, Serialize};

use crate::core::LinearScale;
use crate::core::primitives::clamp_between;

/// One step of a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DragEvent {
    Start,
    Update { translation: f64 },
    End,
}

/// Drag lifecycle of a handle. `reference` is the position captured at start.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging { reference: f64 },
}

impl DragPhase {
    #[must_use]
    pub fn is_dragging(self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}

/// Single draggable cut point in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdHandle {
    position: f64,
    phase: DragPhase,
}

impl ThresholdHandle {
    #[must_use]
    pub fn new(position: f64) -> Self {
        Self {
            position,
            phase: DragPhase::Idle,
        }
    }

    /// Handle placed at `value` on `scale`.
    #[must_use]
    pub fn at_value(value: f64, scale: LinearScale) -> Self {
        Self::new(scale.forward(value))
    }

    #[must_use]
    pub fn position(self) -> f64 {
        self.position
    }

    #[must_use]
    pub fn phase(self) -> DragPhase {
        self.phase
    }

    #[must_use]
    pub fn value(self, scale: LinearScale) -> f64 {
        scale.invert(self.position)
    }

    /// Advances the drag state machine, keeping the position in `[lower, upper]`.
    ///
    /// Updates received while idle are ignored. A second `Start` while
    /// dragging re-captures the reference position.
    #[must_use]
    pub fn apply(self, event: DragEvent, lower: f64, upper: f64) -> Self {
        match (event, self.phase) {
            (DragEvent::Start, _) => Self {
                phase: DragPhase::Dragging {
                    reference: self.position,
                },
                ..self
            },
            (DragEvent::Update { translation }, DragPhase::Dragging { reference }) => Self {
                position: clamp_between(reference + translation, lower, upper),
                ..self
            },
            (DragEvent::Update { .. }, DragPhase::Idle) => self,
            (DragEvent::End, _) => Self {
                phase: DragPhase::Idle,
                ..self
            },
        }
    }
}
