// SPDX-License-Identifier: MPL-2.0
//! Shared helpers for the unit tests.
//!
//! Float assertions come from `approx`; split values go through
//! [`assert_split`] so every test compares with the same tolerance.

pub use approx::assert_abs_diff_eq;

use crate::domain::comparison::ContainerSpan;
use crate::domain::ui::SplitPercent;

/// Tolerance for split percentages computed from pointer positions.
pub const SPLIT_EPSILON: f32 = 1e-4;

/// Container used by the comparison tests: 400 px wide, starting at x = 100.
pub const TEST_SPAN: ContainerSpan = ContainerSpan::new(100.0, 400.0);

/// Asserts that `actual` is `expected` percent, within [`SPLIT_EPSILON`].
#[track_caller]
pub fn assert_split(actual: SplitPercent, expected: f32) {
    assert_abs_diff_eq!(actual.value(), expected, epsilon = SPLIT_EPSILON);
}
