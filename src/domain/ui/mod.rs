// SPDX-License-Identifier: MPL-2.0
//! Value objects shared by the comparison core and its widget, free of any
//! presentation framework.

pub mod newtypes;

pub use newtypes::SplitPercent;
