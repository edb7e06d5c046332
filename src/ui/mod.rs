// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Components
//!
//! - [`comparison`] - Before/after slider with mouse and touch dragging
//! - [`navbar`] - Page header with anchors and the compact drop-down menu
//! - [`page`] - The scrolling page and its sections
//! - [`faq`] - Single-open question accordion
//! - [`contact`] - Quote request form
//! - [`location`] - Location card fed by the map lookup
//! - [`notifications`] - Toast notification system for user feedback
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers, inputs)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icon loading and rendering

pub mod comparison;
pub mod contact;
pub mod design_tokens;
pub mod faq;
pub mod icons;
pub mod location;
pub mod navbar;
pub mod notifications;
pub mod page;
pub mod styles;
pub mod theming;
