// SPDX-License-Identifier: MPL-2.0
//! `vertical_cor` is a single-page showcase for a building-painting
//! contractor, built with the Iced GUI framework.
//!
//! Its centerpiece is a before/after comparison slider: a draggable divider
//! over two stacked photos, driven by mouse or touch. Around it sit the
//! marketing sections, a FAQ accordion, a contact form, WhatsApp quote links
//! and a location card fed by a grounded map lookup.

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod icon;
pub mod infrastructure;
pub mod logging;
pub mod media;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
