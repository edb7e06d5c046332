// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`comparison`]: Before/after comparison core ([`ComparisonSlider`](comparison::ComparisonSlider),
//!   [`ContainerSpan`](comparison::ContainerSpan), [`map_pointer`](comparison::map_pointer))
//! - [`content`]: Static page content ([`ServiceItem`](content::ServiceItem),
//!   [`FaqItem`](content::FaqItem), [`Section`](content::Section))
//! - [`location`]: Location lookup results ([`LocationReport`](location::LocationReport))
//! - [`ui`]: UI value objects ([`SplitPercent`](ui::newtypes::SplitPercent))

pub mod comparison;
pub mod content;
pub mod location;
pub mod ui;
