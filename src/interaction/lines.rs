use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::primitives::clamp_between;
use crate::core::{GapCount, LinearScale, gap_counts};

use super::{DragEvent, DragPhase};

/// One vertical cut line. Guides are placed by the chart and cannot be dragged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdLine {
    pub id: u64,
    pub x: f64,
    pub draggable: bool,
}

/// User-placed cut lines plus static guides over a chart of fixed width,
/// kept sorted by position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdLineSet {
    lines: Vec<ThresholdLine>,
    width: f64,
    next_id: u64,
    dragging: Option<(u64, DragPhase)>,
}

impl ThresholdLineSet {
    #[must_use]
    pub fn new(width: f64) -> Self {
        Self {
            lines: Vec::new(),
            width: width.max(0.0),
            next_id: 1,
            dragging: None,
        }
    }

    #[must_use]
    pub fn lines(&self) -> &[ThresholdLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn dragging_id(&self) -> Option<u64> {
        self.dragging.map(|(id, _)| id)
    }

    #[must_use]
    pub fn positions(&self) -> Vec<f64> {
        self.lines.iter().map(|line| line.x).collect()
    }

    /// Adds a draggable line where the user tapped and returns its id.
    pub fn add_at(&mut self, tap_x: f64) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        let x = clamp_between(tap_x, 0.0, self.width);
        trace!(id, x, "add threshold line");
        self.lines.push(ThresholdLine {
            id,
            x,
            draggable: true,
        });
        self.sort();
        id
    }

    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.id != id);
        if self.dragging_id() == Some(id) {
            self.dragging = None;
        }
        before != self.lines.len()
    }

    /// Removes every user-placed line, keeping guides.
    pub fn clear_manual(&mut self) {
        self.lines.retain(|line| !line.draggable);
        self.dragging = None;
    }

    /// Replaces all guides with lines at the given pixel positions.
    pub fn set_guides(&mut self, positions_px: &[f64]) {
        self.lines.retain(|line| line.draggable);
        for &x in positions_px {
            let id = self.next_id;
            self.next_id += 1;
            self.lines.push(ThresholdLine {
                id,
                x: clamp_between(x, 0.0, self.width),
                draggable: false,
            });
        }
        self.sort();
    }

    /// Drives the drag state machine of line `id`, bounded by the chart edges.
    ///
    /// Events for guides, unknown ids or a line other than the one being
    /// dragged are ignored.
    pub fn apply(&mut self, id: u64, event: DragEvent) {
        let Some(index) = self
            .lines
            .iter()
            .position(|line| line.id == id && line.draggable)
        else {
            return;
        };

        match (event, self.dragging) {
            (DragEvent::Start, _) => {
                self.dragging = Some((
                    id,
                    DragPhase::Dragging {
                        reference: self.lines[index].x,
                    },
                ));
            }
            (
                DragEvent::Update { translation },
                Some((active, DragPhase::Dragging { reference })),
            ) if active == id => {
                self.lines[index].x = clamp_between(reference + translation, 0.0, self.width);
                self.sort();
            }
            (DragEvent::End, Some((active, _))) if active == id => {
                self.dragging = None;
            }
            _ => {}
        }
    }

    /// Observation counts between consecutive lines across `[0, width]`.
    #[must_use]
    pub fn gap_counts(&self, values: &[f64], scale: LinearScale) -> Vec<GapCount> {
        gap_counts(values, scale, &self.positions(), self.width)
    }

    fn sort(&mut self) {
        self.lines.sort_by(|left, right| left.x.total_cmp(&right.x));
    }
}
