// SPDX-License-Identifier: MPL-2.0
//! Pointer-to-split coordinate mapping.
//!
//! Converts a horizontal pointer position into a [`SplitPercent`] relative to
//! the comparison container. Positions left of the container map to 0%,
//! positions right of it map to 100%.

use crate::domain::ui::SplitPercent;

/// Horizontal geometry of the comparison container, in the same coordinate
/// space as the pointer events (window coordinates).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerSpan {
    /// Left edge of the container.
    pub left: f32,
    /// Container width. Zero while the container is not laid out yet.
    pub width: f32,
}

impl ContainerSpan {
    #[must_use]
    pub const fn new(left: f32, width: f32) -> Self {
        Self { left, width }
    }

    /// Right edge of the container.
    #[must_use]
    pub fn right(self) -> f32 {
        self.left + self.width
    }

    /// Returns whether the span can be used as a divisor.
    #[must_use]
    pub fn is_measurable(self) -> bool {
        self.left.is_finite() && self.width.is_finite() && self.width > 0.0
    }

    /// Returns whether `x` lies within the span, edges included.
    #[must_use]
    pub fn contains(self, x: f32) -> bool {
        self.is_measurable() && x >= self.left && x <= self.right()
    }
}

/// Maps a pointer position onto the container.
///
/// Returns `None` when the geometry is malformed (zero, negative or
/// non-finite width) or the pointer coordinate is not finite. Callers keep
/// the previous split in that case.
#[must_use]
pub fn map_pointer(x: f32, span: ContainerSpan) -> Option<SplitPercent> {
    if !span.is_measurable() || !x.is_finite() {
        return None;
    }

    let percent = (x - span.left) / span.width * 100.0;
    percent.is_finite().then(|| SplitPercent::new(percent))
}

/// Maps the primary touch point onto the container.
///
/// Only the first entry of `touches` is considered; an empty slice is a no-op.
#[must_use]
pub fn map_touch(touches: &[f32], span: ContainerSpan) -> Option<SplitPercent> {
    let primary = touches.first()?;
    map_pointer(*primary, span)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, TEST_SPAN as SPAN};

    fn mapped(x: f32) -> f32 {
        map_pointer(x, SPAN).expect("span is measurable").value()
    }

    #[test]
    fn maps_edges_and_midpoint_linearly() {
        assert_abs_diff_eq!(mapped(100.0), 0.0);
        assert_abs_diff_eq!(mapped(300.0), 50.0);
        assert_abs_diff_eq!(mapped(500.0), 100.0);
        assert_abs_diff_eq!(mapped(200.0), 25.0);
    }

    #[test]
    fn clamps_positions_outside_the_container() {
        assert_abs_diff_eq!(mapped(50.0), 0.0);
        assert_abs_diff_eq!(mapped(550.0), 100.0);
        assert_abs_diff_eq!(mapped(-10_000.0), 0.0);
        assert_abs_diff_eq!(mapped(10_000.0), 100.0);
    }

    #[test]
    fn zero_width_is_ignored() {
        assert!(map_pointer(120.0, ContainerSpan::new(100.0, 0.0)).is_none());
    }

    #[test]
    fn negative_or_non_finite_width_is_ignored() {
        assert!(map_pointer(120.0, ContainerSpan::new(100.0, -5.0)).is_none());
        assert!(map_pointer(120.0, ContainerSpan::new(100.0, f32::NAN)).is_none());
        assert!(map_pointer(120.0, ContainerSpan::new(f32::INFINITY, 10.0)).is_none());
    }

    #[test]
    fn non_finite_pointer_is_ignored() {
        assert!(map_pointer(f32::NAN, SPAN).is_none());
        assert!(map_pointer(f32::INFINITY, SPAN).is_none());
    }

    #[test]
    fn touch_uses_primary_point_only() {
        let split = map_touch(&[300.0, 120.0], SPAN).expect("primary touch maps");
        assert_abs_diff_eq!(split.value(), 50.0);
    }

    #[test]
    fn touch_without_points_is_a_no_op() {
        assert!(map_touch(&[], SPAN).is_none());
    }

    #[test]
    fn contains_includes_edges() {
        assert!(SPAN.contains(100.0));
        assert!(SPAN.contains(500.0));
        assert!(!SPAN.contains(99.0));
        assert!(!ContainerSpan::new(0.0, 0.0).contains(0.0));
    }
}
