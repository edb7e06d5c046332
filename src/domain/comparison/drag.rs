// SPDX-License-Identifier: MPL-2.0
//! Drag state machine for the before/after comparison.
//!
//! The machine has two explicit states, [`DragPhase::Idle`] and
//! [`DragPhase::Dragging`], and owns the current [`SplitPercent`].
//!
//! Mouse moves only apply while dragging: mouse move events fire whether or
//! not a button is held. Touch moves apply in any phase, since a touch move
//! implies a finger on the widget.
//!
//! Phase changes are reported as a [`Transition`] so the presentation layer
//! can hold a window-level listener for exactly as long as a drag lasts.

use super::mapper::{map_pointer, map_touch, ContainerSpan};
use crate::domain::ui::SplitPercent;

/// Interaction phase of the comparison divider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    /// No drag in progress.
    #[default]
    Idle,
    /// The user holds the pointer down on the comparison.
    Dragging,
}

impl DragPhase {
    /// Returns true if a drag is in progress.
    #[must_use]
    pub fn is_dragging(self) -> bool {
        matches!(self, Self::Dragging)
    }
}

/// Outcome of an input with respect to the drag phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The phase did not change.
    Unchanged,
    /// `Idle → Dragging`: window-level pointer tracking must start.
    Started,
    /// `Dragging → Idle`: window-level pointer tracking must stop.
    Ended,
}

/// Split position and drag phase of one comparison instance.
#[derive(Debug, Clone, Default)]
pub struct ComparisonSlider {
    split: SplitPercent,
    phase: DragPhase,
}

impl ComparisonSlider {
    /// Creates a slider at the midpoint, idle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current split position.
    #[must_use]
    pub fn split(&self) -> SplitPercent {
        self.split
    }

    /// Current drag phase.
    #[must_use]
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Returns true if a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.phase.is_dragging()
    }

    /// Pointer or touch went down at `x`.
    ///
    /// Starts a drag when the press lands inside `span`. Pressing does not
    /// move the divider by itself; the next move does.
    pub fn press(&mut self, x: f32, span: ContainerSpan) -> Transition {
        if self.phase.is_dragging() || !span.contains(x) {
            return Transition::Unchanged;
        }
        self.phase = DragPhase::Dragging;
        Transition::Started
    }

    /// Mouse moved to `x`. Ignored unless dragging.
    ///
    /// Returns whether the split changed.
    pub fn pointer_moved(&mut self, x: f32, span: ContainerSpan) -> bool {
        if !self.phase.is_dragging() {
            return false;
        }
        self.apply(map_pointer(x, span))
    }

    /// Touch points moved. Applies in any phase; only the primary point
    /// counts and an empty set of points is a no-op.
    ///
    /// Returns whether the split changed.
    pub fn touch_moved(&mut self, touches: &[f32], span: ContainerSpan) -> bool {
        self.apply(map_touch(touches, span))
    }

    /// Pointer or touch released, anywhere.
    pub fn release(&mut self) -> Transition {
        self.end_drag()
    }

    /// The drag lost its input source without a release (e.g. the window
    /// lost focus). Behaves like a release.
    pub fn abandon(&mut self) -> Transition {
        self.end_drag()
    }

    /// Moves the divider back to the midpoint and ends any drag.
    pub fn reset(&mut self) -> Transition {
        self.split = SplitPercent::default();
        self.end_drag()
    }

    fn end_drag(&mut self) -> Transition {
        if self.phase.is_dragging() {
            self.phase = DragPhase::Idle;
            Transition::Ended
        } else {
            Transition::Unchanged
        }
    }

    fn apply(&mut self, mapped: Option<SplitPercent>) -> bool {
        match mapped {
            Some(split) if split != self.split => {
                self.split = split;
                true
            }
            _ => false,
        }
    }
}
