// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

// =============================================================================
// Split Bounds
// =============================================================================

/// Comparison split bounds (0% to 100% of the container width).
pub mod split_bounds {
    /// Divider at the left edge: only the "after" image is visible.
    pub const MIN_PERCENT: f32 = 0.0;
    /// Divider at the right edge: only the "before" image is visible.
    pub const MAX_PERCENT: f32 = 100.0;
    /// Midpoint used when a comparison is first shown.
    pub const DEFAULT_PERCENT: f32 = 50.0;
}

// =============================================================================
// SplitPercent
// =============================================================================

/// Share of the comparison container occupied by the "before" image,
/// guaranteed to be within 0%–100%.
///
/// `NaN` never reaches the stored value: the constructor falls back to the
/// midpoint, and infinities clamp to the nearest edge.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SplitPercent(f32);

impl SplitPercent {
    /// Creates a new split percentage, clamping the value to the valid range.
    #[must_use]
    pub fn new(percent: f32) -> Self {
        if percent.is_nan() {
            return Self::default();
        }
        Self(percent.clamp(split_bounds::MIN_PERCENT, split_bounds::MAX_PERCENT))
    }

    /// Returns the raw percentage value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the split as a fraction of the width (e.g., 50% → 0.5).
    #[must_use]
    pub fn as_fraction(self) -> f32 {
        self.0 / 100.0
    }

    /// Horizontal offset of the divider inside a container of `width`.
    #[must_use]
    pub fn offset_in(self, width: f32) -> f32 {
        width * self.as_fraction()
    }

    /// Returns whether the divider sits on the left edge.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= split_bounds::MIN_PERCENT
    }

    /// Returns whether the divider sits on the right edge.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= split_bounds::MAX_PERCENT
    }
}

impl Default for SplitPercent {
    fn default() -> Self {
        Self(split_bounds::DEFAULT_PERCENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn default_is_midpoint() {
        assert_abs_diff_eq!(SplitPercent::default().value(), 50.0);
    }

    #[test]
    fn new_clamps_out_of_range_values() {
        assert_abs_diff_eq!(SplitPercent::new(-20.0).value(), 0.0);
        assert_abs_diff_eq!(SplitPercent::new(140.0).value(), 100.0);
        assert_abs_diff_eq!(SplitPercent::new(37.5).value(), 37.5);
    }

    #[test]
    fn nan_falls_back_to_midpoint() {
        assert_eq!(SplitPercent::new(f32::NAN), SplitPercent::default());
    }

    #[test]
    fn infinities_clamp_to_edges() {
        assert!(SplitPercent::new(f32::NEG_INFINITY).is_min());
        assert!(SplitPercent::new(f32::INFINITY).is_max());
    }

    #[test]
    fn offset_scales_with_width() {
        let split = SplitPercent::new(25.0);
        assert_abs_diff_eq!(split.as_fraction(), 0.25);
        assert_abs_diff_eq!(split.offset_in(400.0), 100.0);
    }
}
