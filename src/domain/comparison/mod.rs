// SPDX-License-Identifier: MPL-2.0
//! Before/after comparison core.
//!
//! - [`mapper`]: pointer position + container span → [`SplitPercent`](crate::domain::ui::SplitPercent)
//! - [`drag`]: the `Idle` / `Dragging` state machine owning the split

pub mod drag;
pub mod mapper;

pub use drag::{ComparisonSlider, DragPhase, Transition};
pub use mapper::{map_pointer, map_touch, ContainerSpan};
